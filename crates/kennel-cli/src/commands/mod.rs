//! Command implementations.

pub mod create;
pub mod delete;
pub mod demo;
pub mod get;
pub mod list;
pub mod update;

use anyhow::{Context, Result};

use kennel_core::BaseUrl;
use kennel_http::HttpDogStore;

/// Build an HTTP store for the configured collection URL.
fn store(url: &str) -> Result<HttpDogStore> {
    let base = BaseUrl::new(url).context("Invalid collection URL")?;
    Ok(HttpDogStore::new(base))
}
