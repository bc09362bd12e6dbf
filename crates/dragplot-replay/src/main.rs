//! Replay a scene file and print the final overlay state as JSON.

use dragplot_replay::{Replay, ReplayError, ReplayResult, SceneConfig};
use std::path::PathBuf;
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::init();

    match run() {
        Ok(report) => {
            println!("{report}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("{e}");
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> ReplayResult<String> {
    let path = std::env::args_os().nth(1).map(PathBuf::from).ok_or(ReplayError::Usage)?;
    log::info!("Replaying {}", path.display());

    let scene = SceneConfig::load(&path)?;
    let report = Replay::run(&scene)?;
    Ok(serde_json::to_string_pretty(&report)?)
}
