use std::env;
use std::process::ExitCode;

use flight_corridor::validation::{render, EXIT_CONFIG_ERROR};
use flight_corridor::{reference_scenarios, ScenarioFile, ScenarioRunner};

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let scenarios = match env::args().nth(1) {
        Some(path) => match ScenarioFile::load_from_file(&path) {
            Ok(scenarios) => scenarios,
            Err(e) => {
                log::error!("{}", e);
                return ExitCode::from(EXIT_CONFIG_ERROR);
            }
        },
        None => {
            log::info!("no scenario file given, running reference scenarios");
            reference_scenarios()
        }
    };

    let summary = match ScenarioRunner::default().run(&scenarios) {
        Ok(summary) => summary,
        Err(e) => {
            log::error!("{}", e);
            return ExitCode::from(EXIT_CONFIG_ERROR);
        }
    };

    match render(scenarios.report, &summary) {
        Ok(report) => print!("{}", report),
        Err(e) => {
            log::error!("failed to render report: {}", e);
            return ExitCode::from(EXIT_CONFIG_ERROR);
        }
    }

    ExitCode::from(summary.exit_code())
}
