//! This module contains helper functionality.

mod comparison;
pub use self::comparison::*;

mod environment;
pub use self::environment::*;

mod error;
pub use self::error::*;

mod types;
pub use self::types::*;
