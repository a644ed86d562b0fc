//! CLI definition using clap

use clap::{Parser, Subcommand};
use trailer_types::OutputFormat;

#[derive(Parser)]
#[command(name = "trailer-load")]
#[command(author = "yuuji")]
#[command(version)]
#[command(about = "Cargo fill estimation for a trailer split into 3x2 load zones")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Six zone heights, comma separated, front-left to rear-right
    /// (e.g. "0.5,1,1.5,2,0,0"). Uses the built-in example if omitted.
    #[arg(long, allow_hyphen_values = true)]
    pub zones: Option<String>,

    /// Open the 3D view after printing the summary
    #[arg(long)]
    pub visualize: bool,

    /// Print the per-zone breakdown
    #[arg(long)]
    pub detailed: bool,

    /// Output format (json, table). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set default output format
        #[arg(long)]
        set_format: Option<OutputFormat>,

        /// Set bar footprint along the length axis (0-1]
        #[arg(long)]
        set_bar_fill_length: Option<f64>,

        /// Set bar footprint across the width axis (0-1]
        #[arg(long)]
        set_bar_fill_width: Option<f64>,

        /// Open the 3D view by default
        #[arg(long)]
        set_visualize: Option<bool>,

        /// Reset to defaults
        #[arg(long)]
        reset: bool,
    },
}
