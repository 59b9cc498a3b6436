//! Update command implementation.

use anyhow::{Context, Result};
use clap::Args;

use kennel_core::DogStore;

use crate::output;

#[derive(Args, Debug)]
pub struct UpdateArgs {
    /// Id of the dog to update
    pub id: i64,

    /// New name
    #[arg(long)]
    pub name: Option<String>,

    /// New breed
    #[arg(long)]
    pub breed: Option<String>,
}

pub async fn run(url: &str, args: UpdateArgs) -> Result<()> {
    let store = super::store(url)?;

    // Fetch the current record, apply the changes, put it back.
    let mut dog = store.get_dog(args.id).await.context("Failed to get dog")?;

    if let Some(name) = args.name {
        dog.name = name;
    }
    if let Some(breed) = args.breed {
        dog.breed = breed;
    }

    let updated = store
        .update_dog(&dog)
        .await
        .context("Failed to update dog")?;

    output::success(&format!("Updated dog {}", updated.id));
    output::json_pretty(&updated)?;

    Ok(())
}
