//! A library part of the command line interface to the route feasibility checker.

#![warn(missing_docs)]

#[cfg(test)]
#[path = "../../feasibility-core/tests/helpers/macros.rs"]
#[macro_use]
mod macros;

pub mod extensions;

pub use feasibility_core as core;
pub use feasibility_pragmatic as pragmatic;
