pub mod batch;
pub mod check;
pub mod single;

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};
use kaprekar_common::config::DEFAULT_MAX_ITERATIONS;

#[derive(Parser)]
#[command(name = "kaprekar")]
#[command(version, about = "Counts the Kaprekar iterations every 4-digit number needs to reach 6174.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,
    /// Give up on a number after this many iterations
    #[arg(long, global = true, default_value_t = DEFAULT_MAX_ITERATIONS)]
    pub max_iterations: u32,
    /// Reduce output (-q hides decoration, -qq keeps only results)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub quiet: u8,
    /// Do not print the banner
    #[arg(long, global = true)]
    pub no_banner: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Walk a single number to 6174, printing every step
    #[command(alias = "s")]
    Single {
        /// 4-digit number, not all digits the same. Prompted for when omitted
        number: Option<String>,
    },
    /// Analyze every 4-digit number and plot the step distribution
    #[command(alias = "b")]
    Batch {
        /// Where to write the histogram PNG
        #[arg(short, long, default_value = "kaprekar_hist.png")]
        output: PathBuf,
        /// Skip writing the histogram
        #[arg(long)]
        no_plot: bool,
    },
    /// Verify step counts of known examples
    #[command(alias = "c")]
    Check,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
