// CLI definitions using clap

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "id80_sim")]
#[command(author, version, about = "Host-side simulator for the ID80 macro keymap layer")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbose engine logging (same as RUST_LOG=id80_engine=debug)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Replay a JSON key-transition script through the macro engine
    #[command(visible_alias = "r")]
    Replay {
        /// Script file (see src/script.rs for the format)
        script: PathBuf,

        /// Replay policy
        #[arg(long, value_enum, default_value_t = ReplayPolicy::Fidelity)]
        policy: ReplayPolicy,

        /// Scan tick period in virtual milliseconds
        #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..=100))]
        tick: u32,

        /// Simulated duration in ms (default: script end + 1000)
        #[arg(long)]
        duration: Option<u32>,
    },

    /// Print a keymap layer
    #[command(visible_alias = "l")]
    Layout {
        /// Layer number
        #[arg(default_value_t = 0)]
        layer: usize,

        /// Resolve transparent slots through to the base layer
        #[arg(long)]
        resolve: bool,
    },

    /// List key names usable in scripts
    #[command(visible_alias = "k")]
    Keys,
}

/// Which replay behavior the engine runs with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReplayPolicy {
    /// Replay press/release events with recorded delays
    Fidelity,
    /// Replay recorded presses as taps, with the Tab substitution
    TapReplay,
}

impl ReplayPolicy {
    pub fn engine_config(self) -> id80_engine::EngineConfig {
        match self {
            Self::Fidelity => id80_engine::EngineConfig::fidelity(),
            Self::TapReplay => id80_engine::EngineConfig::tap_replay(),
        }
    }
}
