//! CLI module for the Identity Slug API

pub mod serve;

use clap::{Parser, Subcommand};

/// Identity Slug API - Short-lived lookup tokens for identity records
#[derive(Parser)]
#[command(name = "pmp-identity-slugs")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the API server
    Serve,
}
