//! Command-line interface for the Gobblet client.

use clap::Parser;
use std::path::PathBuf;

/// Gobblet - play against the remote game server
#[derive(Parser, Debug)]
#[command(name = "gobblet")]
#[command(about = "Play Gobblet against the remote game server", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Player identifier (IDUL)
    #[arg(value_name = "IDUL")]
    pub idul: String,

    /// List existing games instead of playing
    #[arg(short, long)]
    pub lister: bool,

    /// Resume an existing game instead of starting a new one
    #[arg(long, value_name = "ID", conflicts_with = "lister")]
    pub partie: Option<String>,

    /// Path to the configuration file
    #[arg(short, long, default_value = "gobblet.toml")]
    pub config: PathBuf,

    /// Override the game server URL
    #[arg(long)]
    pub base_url: Option<String>,
}
