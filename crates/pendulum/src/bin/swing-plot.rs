use std::{path::PathBuf, process::ExitCode};

use swing_pendulum::{Comparison, SimulationConfig, plot};

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

    let comparison = match Comparison::load(&config) {
        Ok(comparison) => comparison,
        Err(err) => {
            log::error!("{err}");
            return ExitCode::FAILURE;
        }
    };

    if comparison.is_empty() {
        log::error!(
            "no trajectory files in `{}`, run `swing` first",
            config.output_dir.display()
        );
        return ExitCode::FAILURE;
    }

    if let Err(err) = plot::show(&comparison) {
        log::error!("could not open the comparison window: {err}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
