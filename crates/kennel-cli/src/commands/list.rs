//! List command implementation.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use kennel_core::DogStore;

use crate::output;

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Print records as pretty JSON instead of one line each
    #[arg(long)]
    pub pretty: bool,
}

pub async fn run(url: &str, args: ListArgs) -> Result<()> {
    let store = super::store(url)?;

    let dogs = store.list_dogs().await.context("Failed to list dogs")?;

    if dogs.is_empty() {
        eprintln!("{}", "No dogs found.".dimmed());
        return Ok(());
    }

    for dog in &dogs {
        if args.pretty {
            output::json_pretty(dog)?;
        } else {
            println!("{dog}");
        }
    }

    Ok(())
}
