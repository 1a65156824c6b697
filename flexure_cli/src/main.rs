//! # Flexure CLI
//!
//! Terminal front end for the beam moment engine. Without arguments it asks
//! for the span and loads interactively; with `--input` it analyses a JSON
//! `BeamInput` document and prints the JSON result.
//!
//! ```text
//! flexure_cli [--input <file.json | ->] [--resolution <n>] [--sampled]
//! ```
//!
//! Set `RUST_LOG=debug` to see the analysis trace.

mod report;

use std::fs;
use std::io::{self, BufRead, Read, Write};
use std::process::ExitCode;

use flexure_core::{
    calculate, AnalysisSettings, Beam, BeamInput, CalcError, LoadCase, MultiLoadExtremum, PointLoad, MAX_POINT_LOADS,
};
use log::{debug, warn};
use thiserror::Error;

/// Errors surfaced by the command-line front end
#[derive(Debug, Error)]
enum CliError {
    #[error("{0}")]
    Usage(String),

    #[error("Could not read '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Calc(#[from] CalcError),

    #[error("Could not format report: {0}")]
    Report(#[from] std::fmt::Error),
}

const USAGE: &str = "Usage: flexure_cli [--input <file.json | ->] [--resolution <n>] [--sampled]";

#[derive(Debug, Default)]
struct Options {
    input: Option<String>,
    resolution: Option<usize>,
    sampled: bool,
    help: bool,
}

impl Options {
    fn parse(mut args: impl Iterator<Item = String>) -> Result<Self, CliError> {
        let mut options = Options::default();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--input" | "-i" => {
                    let path = args
                        .next()
                        .ok_or_else(|| CliError::Usage("--input requires a path (or '-' for stdin)".to_string()))?;
                    options.input = Some(path);
                }
                "--resolution" | "-n" => {
                    let value = args
                        .next()
                        .ok_or_else(|| CliError::Usage("--resolution requires a number".to_string()))?;
                    let n = value
                        .parse()
                        .map_err(|_| CliError::Usage(format!("Invalid resolution '{}'", value)))?;
                    options.resolution = Some(n);
                }
                "--sampled" => options.sampled = true,
                "--help" | "-h" => {
                    options.help = true;
                    return Ok(options);
                }
                other => return Err(CliError::Usage(format!("Unknown argument '{}'", other))),
            }
        }
        Ok(options)
    }

    /// Apply command-line overrides on top of the input's own settings
    fn apply(&self, mut settings: AnalysisSettings) -> AnalysisSettings {
        if let Some(n) = self.resolution {
            settings.resolution = n;
        }
        if self.sampled {
            settings.multi_load_extremum = MultiLoadExtremum::Sampled;
        }
        settings
    }
}

fn prompt_f64(prompt: &str, default: f64) -> f64 {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return default;
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return default;
    }

    let trimmed = input.trim();
    if trimmed.is_empty() {
        return default;
    }
    trimmed.parse().unwrap_or_else(|_| {
        warn!("could not parse '{}', using {}", trimmed, default);
        default
    })
}

fn prompt_usize(prompt: &str, default: usize) -> usize {
    let value = prompt_f64(prompt, default as f64);
    if value.is_finite() && value >= 0.0 {
        value.round() as usize
    } else {
        default
    }
}

/// Gather a beam and load case from stdin, offering the usual defaults
fn prompt_input() -> Result<BeamInput, CliError> {
    let length_m = prompt_f64("Beam length L (m) [10.0]: ", 10.0);

    println!();
    println!("Analysis type:");
    println!("  1) Point load");
    println!("  2) Uniform distributed load");
    println!("  3) Multiple point loads");
    let choice = prompt_usize("Select [1]: ", 1);
    println!();

    let load_case = match choice {
        2 => LoadCase::distributed(prompt_f64("Distributed load w (kN/m) [10.0]: ", 10.0)),
        3 => {
            let count = prompt_usize(&format!("Number of loads (1-{}) [2]: ", MAX_POINT_LOADS), 2);
            let defaults = LoadCase::evenly_spaced(count, 50.0, length_m)?;
            let loads = defaults
                .point_loads()
                .iter()
                .enumerate()
                .map(|(i, d)| {
                    let magnitude_kn =
                        prompt_f64(&format!("Load {} P (kN) [{:.1}]: ", i + 1, d.magnitude_kn), d.magnitude_kn);
                    let position_m =
                        prompt_f64(&format!("Load {} position (m) [{:.2}]: ", i + 1, d.position_m), d.position_m);
                    PointLoad::new(magnitude_kn, position_m)
                })
                .collect();
            LoadCase::multiple(loads)
        }
        1 => {
            let magnitude_kn = prompt_f64("Point load P (kN) [100.0]: ", 100.0);
            let default_a = length_m / 2.0;
            let position_m = prompt_f64(
                &format!("Distance from left support a (m) [{:.2}]: ", default_a),
                default_a,
            );
            LoadCase::point(magnitude_kn, position_m)
        }
        other => return Err(CliError::Usage(format!("Unknown analysis type {}", other))),
    };

    Ok(BeamInput::new("CLI", Beam::new(length_m), load_case))
}

fn read_input_document(path: &str) -> Result<BeamInput, CliError> {
    let mut text = String::new();
    if path == "-" {
        io::stdin()
            .read_to_string(&mut text)
            .map_err(|source| CliError::Io { path: path.to_string(), source })?;
    } else {
        text = fs::read_to_string(path).map_err(|source| CliError::Io { path: path.to_string(), source })?;
    }
    Ok(BeamInput::from_json(&text)?)
}

fn run(options: &Options) -> Result<(), CliError> {
    let interactive = options.input.is_none();
    let mut input = match &options.input {
        Some(path) => read_input_document(path)?,
        None => {
            println!("Flexure - Simply Supported Beam Moment Calculator");
            println!("==================================================");
            println!();
            prompt_input()?
        }
    };
    input.settings = options.apply(input.settings);
    debug!("settings: {:?}", input.settings);

    let result = calculate(&input)?;

    if interactive {
        report::print_report(&result)?;
        println!();
        println!("JSON Output (for API use):");
    }
    println!("{}", result.to_json_pretty()?);
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let options = match Options::parse(std::env::args().skip(1)) {
        Ok(options) => options,
        Err(e) => {
            eprintln!("{}", e);
            eprintln!("{}", USAGE);
            return ExitCode::FAILURE;
        }
    };

    if options.help {
        println!("{}", USAGE);
        return ExitCode::SUCCESS;
    }

    match run(&options) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            if let CliError::Calc(calc) = &e {
                if let Ok(json) = serde_json::to_string_pretty(calc) {
                    eprintln!();
                    eprintln!("Error JSON:");
                    eprintln!("{}", json);
                }
            }
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> impl Iterator<Item = String> {
        list.iter().map(|s| s.to_string()).collect::<Vec<_>>().into_iter()
    }

    #[test]
    fn test_parse_options() {
        let options = Options::parse(args(&["--input", "beam.json", "-n", "50", "--sampled"])).unwrap();
        assert_eq!(options.input.as_deref(), Some("beam.json"));
        assert_eq!(options.resolution, Some(50));
        assert!(options.sampled);
    }

    #[test]
    fn test_parse_rejects_unknown() {
        assert!(matches!(Options::parse(args(&["--bogus"])), Err(CliError::Usage(_))));
        assert!(matches!(Options::parse(args(&["--resolution", "many"])), Err(CliError::Usage(_))));
        assert!(matches!(Options::parse(args(&["--input"])), Err(CliError::Usage(_))));
    }

    #[test]
    fn test_help_is_not_an_error() {
        let options = Options::parse(args(&["--help"])).unwrap();
        assert!(options.help);

        let options = Options::parse(args(&["-h", "--bogus"])).unwrap();
        assert!(options.help);
    }

    #[test]
    fn test_overrides_applied() {
        let options = Options {
            resolution: Some(64),
            sampled: true,
            ..Options::default()
        };
        let settings = options.apply(AnalysisSettings::default());
        assert_eq!(settings.resolution, 64);
        assert_eq!(settings.multi_load_extremum, MultiLoadExtremum::Sampled);

        let untouched = Options::default().apply(AnalysisSettings::default());
        assert_eq!(untouched, AnalysisSettings::default());
    }
}
