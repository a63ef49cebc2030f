#[cfg(test)]
#[path = "../../tests/unit/commands/check_test.rs"]
mod check_test;

use super::*;
use clap::{Arg, ArgAction, ArgMatches, Command};
use feasibility_cli::extensions::check::{Config, create_checker_config, read_config};
use feasibility_core::utils::GenericError;
use feasibility_pragmatic::checker::check_json;
use feasibility_pragmatic::format::report::serialize_report;
use std::io::BufReader;

const ROUTES_ARG_NAME: &str = "ROUTES";
const CONFIG_ARG_NAME: &str = "config";
const OUT_RESULT_ARG_NAME: &str = "out-result";
const STRICT_ARG_NAME: &str = "strict";
const LOG_ARG_NAME: &str = "log";

/// Specifies an outcome of the check command.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CheckStatus {
    /// All routes are feasible.
    Feasible,
    /// At least one route is infeasible or has invalid breaks.
    Infeasible,
    /// Routes cannot be read.
    InvalidFormat,
}

impl CheckStatus {
    /// Returns process exit code.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Feasible => 0,
            Self::InvalidFormat => 1,
            Self::Infeasible => 2,
        }
    }
}

pub fn get_check_app() -> Command {
    Command::new("check")
        .about("Checks whether routes can be driven within their time windows")
        .arg(Arg::new(ROUTES_ARG_NAME).help("Sets routes file in pragmatic json format").required(true).index(1))
        .arg(
            Arg::new(CONFIG_ARG_NAME)
                .help("Specifies path to json config file")
                .short('c')
                .long(CONFIG_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(OUT_RESULT_ARG_NAME)
                .help("Specifies path to file for the report. Default is stdout")
                .short('o')
                .long(OUT_RESULT_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(STRICT_ARG_NAME)
                .help("Treats any single negative duration as a route contract violation")
                .long(STRICT_ARG_NAME)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new(LOG_ARG_NAME)
                .help("Logs check progress to stderr")
                .short('l')
                .long(LOG_ARG_NAME)
                .action(ArgAction::SetTrue),
        )
}

pub fn run_check(
    matches: &ArgMatches,
    out_writer_func: fn(Option<File>) -> BufWriter<Box<dyn Write>>,
) -> Result<CheckStatus, GenericError> {
    let routes_path = matches
        .get_one::<String>(ROUTES_ARG_NAME)
        .ok_or_else(|| GenericError::from("routes file is not specified"))?;
    let routes_file = BufReader::new(open_file(routes_path, "routes")?);

    let config = match matches.get_one::<String>(CONFIG_ARG_NAME) {
        Some(path) => read_config(BufReader::new(open_file(path, "config")?))?,
        None => Config::default(),
    };
    let checker_config =
        create_checker_config(&config, matches.get_flag(STRICT_ARG_NAME), matches.get_flag(LOG_ARG_NAME));

    let out_file =
        matches.get_one::<String>(OUT_RESULT_ARG_NAME).map(|path| create_file(path, "out result")).transpose()?;

    let report = match check_json(routes_file, &checker_config) {
        Ok(report) => report,
        Err(errors) => {
            eprintln!("cannot read routes:\n{}", errors.to_json());
            return Ok(CheckStatus::InvalidFormat);
        }
    };

    serialize_report(out_writer_func(out_file), &report)?;

    Ok(if report.is_feasible() { CheckStatus::Feasible } else { CheckStatus::Infeasible })
}
