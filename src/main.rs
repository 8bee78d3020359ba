//! ID80 macro keymap simulator CLI.

use std::path::Path;

use anyhow::{bail, Context, Result};
use clap::Parser;

use id80_engine::{keycode, layout, MacroEngine};
use id80_sim::script::Script;
use id80_sim::sim::{run_script, RunOptions};
use tracing::info;

// CLI definitions
mod cli;
use cli::{Cli, Commands, ReplayPolicy};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut filter = tracing_subscriber::EnvFilter::from_default_env();
    if cli.verbose {
        filter = filter.add_directive("id80_engine=debug".parse().unwrap());
    }
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match cli.command {
        Commands::Replay {
            script,
            policy,
            tick,
            duration,
        } => replay(&script, policy, tick, duration),
        Commands::Layout { layer, resolve } => print_layout(layer, resolve),
        Commands::Keys => {
            for (name, code) in keycode::known_names() {
                println!("{name:<10} {code:#06x}");
            }
            Ok(())
        }
    }
}

fn replay(path: &Path, policy: ReplayPolicy, tick: u32, duration: Option<u32>) -> Result<()> {
    let script =
        Script::load(path).with_context(|| format!("loading script {}", path.display()))?;
    let transitions = script.resolve()?;
    let duration_ms = duration.unwrap_or_else(|| script.end_ms() + 1000);
    info!(
        transitions = transitions.len(),
        duration_ms, tick, "starting scripted run"
    );

    let mut engine = MacroEngine::new(policy.engine_config());
    let actions = run_script(
        &mut engine,
        &transitions,
        RunOptions {
            tick_ms: tick,
            duration_ms,
        },
    );

    if actions.is_empty() {
        println!("(no host actions)");
    }
    for action in &actions {
        println!("{action}");
    }
    Ok(())
}

fn print_layout(layer: usize, resolve: bool) -> Result<()> {
    if layer >= layout::LAYER_COUNT {
        bail!("layer {layer} out of range (0..{})", layout::LAYER_COUNT);
    }
    for index in 0..layout::KEY_COUNT {
        let code = if resolve {
            layout::resolve(layer, index)
        } else {
            layout::keycode_at(layer, index).unwrap_or(keycode::kc::NO)
        };
        let name = keycode::name(code)
            .map(String::from)
            .unwrap_or_else(|| format!("{code:#06x}"));
        println!("{index:>3}  {name}");
    }
    Ok(())
}
