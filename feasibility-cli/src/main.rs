//! A command line interface to the route time-window feasibility checker.
//!
//! ## Usage
//!
//! Check routes specified in **pragmatic** json format and print the report to stdout:
//!
//!     feasibility-cli check routes.json
//!
//! Write the report to the file using a config file and log check progress:
//!
//!     feasibility-cli check routes.json --config config.json --out-result report.json --log
//!
//! The process exits with code `1` if input cannot be read or has format errors, and with
//! code `2` if any route is infeasible.

mod commands;

use self::cli::*;
use std::process;

fn main() {
    let matches = get_app().get_matches();

    process::exit(run_subcommand(matches));
}

mod cli {
    use super::commands::check::{get_check_app, run_check};
    use super::commands::create_write_buffer;
    use clap::{ArgMatches, Command};

    pub fn get_app() -> Command {
        Command::new("Route Feasibility Checker")
            .version(env!("CARGO_PKG_VERSION"))
            .author("Ilya Builuk <ilya.builuk@gmail.com>")
            .about("A command line interface to route time-window feasibility checker")
            .subcommand(get_check_app())
            .subcommand_required(true)
    }

    /// Runs subcommand and returns process exit code.
    pub fn run_subcommand(arg_matches: ArgMatches) -> i32 {
        let result = match arg_matches.subcommand() {
            Some(("check", check_matches)) => run_check(check_matches, create_write_buffer),
            _ => Err("no subcommand was used. Use -h to print help information.".into()),
        };

        match result {
            Ok(status) => status.exit_code(),
            Err(err) => {
                eprintln!("{err}");
                1
            }
        }
    }
}
