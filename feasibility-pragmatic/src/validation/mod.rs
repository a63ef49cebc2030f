//! This module provides functionality to validate routes definition for logical correctness.

use crate::format::route::*;
use crate::format::{FormatError, MultiFormatError};
use crate::utils::*;

mod routes;
use self::routes::validate_routes;

/// Keeps routes which are the subject of validation.
pub struct ValidationContext<'a> {
    /// A plan with routes.
    pub plan: &'a RoutePlan,
}

impl<'a> ValidationContext<'a> {
    /// Creates an instance of `ValidationContext`.
    pub fn new(plan: &'a RoutePlan) -> Self {
        Self { plan }
    }

    /// Validates routes on set of rules.
    pub fn validate(&self) -> Result<(), MultiFormatError> {
        validate_routes(self).map_err(MultiFormatError::from)
    }

    /// Get list of routes.
    fn routes(&self) -> impl Iterator<Item = &Route> {
        self.plan.routes.iter()
    }
}
