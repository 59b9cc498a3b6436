//! Get command implementation.

use anyhow::{Context, Result};
use clap::Args;

use kennel_core::DogStore;

use crate::output;

#[derive(Args, Debug)]
pub struct GetArgs {
    /// Id of the dog to fetch
    pub id: i64,
}

pub async fn run(url: &str, args: GetArgs) -> Result<()> {
    let store = super::store(url)?;

    let dog = store.get_dog(args.id).await.context("Failed to get dog")?;

    output::json_pretty(&dog)?;

    Ok(())
}
