//! Specifies logic to read routes from pragmatic format.

mod model;
pub use self::model::*;

mod reader;
pub use self::reader::map_to_routes;

use crate::format::MultiFormatError;
use feasibility_core::models::RouteDescriptor;
use std::io::{BufReader, Read};

/// Reads routes in pragmatic format.
pub trait PragmaticRoutes {
    /// Reads routes, validates them and converts into core models.
    fn read_pragmatic(self) -> Result<Vec<RouteDescriptor>, MultiFormatError>;
}

impl<R: Read> PragmaticRoutes for BufReader<R> {
    fn read_pragmatic(self) -> Result<Vec<RouteDescriptor>, MultiFormatError> {
        map_to_routes(&deserialize_routes(self)?)
    }
}

impl PragmaticRoutes for String {
    fn read_pragmatic(self) -> Result<Vec<RouteDescriptor>, MultiFormatError> {
        BufReader::new(self.as_bytes()).read_pragmatic()
    }
}

impl PragmaticRoutes for RoutePlan {
    fn read_pragmatic(self) -> Result<Vec<RouteDescriptor>, MultiFormatError> {
        map_to_routes(&self)
    }
}
