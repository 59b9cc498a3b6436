//! CLI argument definitions.

use clap::{Parser, Subcommand};

use crate::commands::{create, delete, demo, get, list, update};

/// CLI tool for a dog-service REST API.
#[derive(Parser, Debug)]
#[command(name = "kennel")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Collection URL of the dog service
    #[arg(
        long,
        env = "KENNEL_URL",
        default_value = "http://localhost:8001/dog",
        global = true
    )]
    pub url: String,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List all dogs
    List(list::ListArgs),

    /// Fetch a single dog
    Get(get::GetArgs),

    /// Create a new dog
    Create(create::CreateArgs),

    /// Update an existing dog
    Update(update::UpdateArgs),

    /// Delete a dog
    Delete(delete::DeleteArgs),

    /// Run the full CRUD walkthrough
    Demo(demo::DemoArgs),
}
