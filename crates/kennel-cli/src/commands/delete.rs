//! Delete command implementation.

use anyhow::{Context, Result};
use clap::Args;

use kennel_core::DogStore;

use crate::output;

#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// Id of the dog to delete
    pub id: i64,
}

pub async fn run(url: &str, args: DeleteArgs) -> Result<()> {
    let store = super::store(url)?;

    store
        .delete_dog(args.id)
        .await
        .context("Failed to delete dog")?;

    output::success(&format!("Deleted dog {}", args.id));

    Ok(())
}
