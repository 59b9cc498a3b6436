//! Create command implementation.

use anyhow::{Context, Result};
use clap::Args;

use kennel_core::{DogStore, NewDog};

use crate::output;

#[derive(Args, Debug)]
pub struct CreateArgs {
    /// Name of the dog
    #[arg(long)]
    pub name: String,

    /// Breed of the dog
    #[arg(long)]
    pub breed: String,
}

pub async fn run(url: &str, args: CreateArgs) -> Result<()> {
    let store = super::store(url)?;

    let dog = store
        .create_dog(&NewDog::new(&args.name, &args.breed))
        .await
        .context("Failed to create dog")?;

    output::success(&format!("Created dog {}", dog.id));
    output::json_pretty(&dog)?;

    Ok(())
}
