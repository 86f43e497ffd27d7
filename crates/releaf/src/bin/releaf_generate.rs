//! Generates a seeded demo dataset and writes it as CSV.
//!
//! Configuration is layered through `GeneratorSettings`: command-line flags,
//! `RELEAF_*` environment variables, then config files. Logs are emitted as
//! JSON filtered by `RUST_LOG`.

use std::env;
use std::io::{self, Write};
use std::process::ExitCode;

use chrono::Utc;
use ortho_config::OrthoConfig;
use releaf::{GeneratorError, GeneratorSettings, run_generator};
use tracing::{error, warn};
use tracing_subscriber::{EnvFilter, fmt};

fn main() -> ExitCode {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "dataset generation failed");
            if let Err(write_err) = writeln!(io::stderr().lock(), "{err}") {
                drop(write_err);
            }
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), GeneratorError> {
    let settings =
        GeneratorSettings::load_from_iter(env::args_os()).map_err(|e| GeneratorError::Config {
            message: e.to_string(),
        })?;
    let report = run_generator(&settings, Utc::now())?;

    let mut out = io::stdout().lock();
    for file in &report.files {
        if let Err(err) = writeln!(out, "{file}") {
            drop(err);
        }
    }
    Ok(())
}
