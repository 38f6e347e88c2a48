use std::{path::PathBuf, process::ExitCode};

use swing_pendulum::{SimulationConfig, run_all};

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match std::env::args_os().nth(1).map(PathBuf::from) {
        Some(path) => match SimulationConfig::load(&path) {
            Ok(config) => config,
            Err(err) => {
                log::error!("{err}");
                return ExitCode::FAILURE;
            }
        },
        None => SimulationConfig::default(),
    };

    let reports = run_all(&config);
    let failed = reports.iter().filter(|report| !report.is_ok()).count();

    if failed > 0 {
        log::error!("{failed} of {} runs failed", reports.len());
        return ExitCode::FAILURE;
    }

    log::info!("all simulations finished");
    ExitCode::SUCCESS
}
