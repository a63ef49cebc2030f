//! A helper module which contains functionality to configure and run feasibility checks.

mod config;
pub use self::config::*;
