pub mod commands;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "cssmend")]
#[command(about = "Repair a corrupted stylesheet by marker truncation or line-range removal", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Args, Debug, Clone)]
pub struct GlobalOpts {
    #[arg(long, global = true, help = "TOML file with markers and range defaults")]
    pub config: Option<PathBuf>,

    #[arg(long, global = true, help = "Print the result as a single JSON object")]
    pub json: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Cut the target at the first corruption marker and append a replacement file")]
    Truncate {
        #[arg(short, long, help = "Stylesheet to repair in place")]
        target: PathBuf,
        #[arg(short, long, help = "File appended after the retained lines")]
        replacement: PathBuf,
        #[arg(short, long = "marker", help = "Corruption marker (repeatable, replaces the defaults)")]
        markers: Vec<String>,
    },

    #[command(about = "Remove a fixed, zero-based line range [start, end) from the target")]
    RemoveRange {
        #[arg(short, long, help = "Stylesheet to repair in place")]
        target: PathBuf,
        #[arg(short, long, help = "First line to remove (zero-based)")]
        start: Option<usize>,
        #[arg(short, long, help = "Line after the last one to remove (zero-based)")]
        end: Option<usize>,
    },

    #[command(about = "Report where the first corruption marker is, without writing")]
    Locate {
        #[arg(short, long, help = "Stylesheet to scan")]
        target: PathBuf,
        #[arg(short, long = "marker", help = "Corruption marker (repeatable, replaces the defaults)")]
        markers: Vec<String>,
    },
}
