//! Contains command line extensions.

pub mod check;
