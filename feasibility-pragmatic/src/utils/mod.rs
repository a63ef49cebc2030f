//! Contains utility logic.

mod collections;
pub use self::collections::*;
