//! Replays a drag scenario and logs what happens.
//!
//! Usage: `snapslot-demo [scenario.json]`. Without a path the built-in
//! scenario runs. Set `RUST_LOG=debug` to see grabs and releases.

mod scenario;

use scenario::{Scenario, ScenarioResult};
use std::path::PathBuf;

fn run(path: Option<PathBuf>) -> ScenarioResult<()> {
    let scenario = match path {
        Some(path) => {
            log::info!("Loading scenario from {}", path.display());
            Scenario::load(&path)?
        }
        None => Scenario::builtin(),
    };

    let report = scenario.run();
    log::info!("{} drag(s) completed", report.outcomes.len());
    for (id, position) in &report.final_positions {
        log::info!("{} rests at ({}, {})", id, position.x, position.y);
    }
    Ok(())
}

fn main() {
    env_logger::init();
    log::info!("Starting snapslot demo");

    if let Err(e) = run(std::env::args_os().nth(1).map(PathBuf::from)) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}
