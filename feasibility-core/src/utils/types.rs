/// Alias to a scalar floating type.
///
/// NOTE: all time values are kept in minutes. Integral minutes are represented exactly, so
/// equality checks on interval bounds stay reliable.
pub type Float = f64;
