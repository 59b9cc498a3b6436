//! Demo command implementation.

use anyhow::{Context, Result};
use clap::Args;

use kennel_core::{Dog, demo};
use kennel_mem::MemDogStore;

use crate::output;

#[derive(Args, Debug)]
pub struct DemoArgs {
    /// Run against a seeded in-memory store instead of the network
    #[arg(long)]
    pub offline: bool,
}

pub async fn run(url: &str, args: DemoArgs) -> Result<()> {
    // The observer stands in for a UI: it prints whatever collection the
    // flow hands over after the final bulk fetch.
    let print_dogs = |dogs: Vec<Dog>| {
        for dog in &dogs {
            println!("{dog}");
        }
    };

    if args.offline {
        let store = MemDogStore::seeded();
        demo::run(&store, &print_dogs)
            .await
            .context("Demo flow failed")?;
    } else {
        let store = super::store(url)?;
        demo::run(&store, &print_dogs)
            .await
            .context("Demo flow failed")?;
    }

    output::success("Demo flow completed");

    Ok(())
}
