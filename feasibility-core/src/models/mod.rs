//! A collection of models to describe a route and report its feasibility.

pub mod common;

mod diagnostics;
pub use self::diagnostics::*;

mod route;
pub use self::route::*;
