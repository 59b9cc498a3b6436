//! Core client-side types.

mod base_url;

pub use base_url::{BaseUrl, join_id};
