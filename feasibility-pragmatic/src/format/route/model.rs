//! Contains pragmatic route models and their deserialization.

#[cfg(test)]
#[path = "../../../tests/unit/format/route/model_test.rs"]
mod model_test;

use crate::format::{FormatError, MultiFormatError};
use serde::{Deserialize, Serialize};
use std::io::{BufReader, Read};

/// A list of routes to check.
#[derive(Clone, Deserialize, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoutePlan {
    /// Routes.
    pub routes: Vec<Route>,
}

/// A route definition.
#[derive(Clone, Deserialize, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Route {
    /// Route id. Should be unique within the plan.
    pub id: String,
    /// A location where the route starts.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<RouteLocation>,
    /// A location where the route ends.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<RouteLocation>,
    /// A time window when the route can start.
    pub shift: RouteShift,
    /// Max total duration of the route in minutes. Zero or absent means unlimited.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_duration: Option<f64>,
    /// Route breaks.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breaks: Option<Vec<RouteBreak>>,
}

/// A start or end location of the route.
#[derive(Clone, Deserialize, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteLocation {
    /// Up to two time windows in `HH:MM` format. Absent or empty means no constraint.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub times: Option<Vec<Vec<String>>>,
    /// Time spent at the location in minutes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,
}

/// A time window when the route starts.
#[derive(Clone, Deserialize, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteShift {
    /// Earliest start time in `HH:MM` format.
    pub start: String,
    /// Latest start time in `HH:MM` format.
    pub end: String,
    /// A day offset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub day: Option<u32>,
}

/// A route break.
#[derive(Clone, Deserialize, Debug, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum RouteBreak {
    /// A break which has to be started within a time window.
    TimeWindow {
        /// Break time window in `HH:MM` format.
        #[serde(skip_serializing_if = "Option::is_none")]
        time: Option<Vec<String>>,
        /// Break duration in minutes.
        #[serde(skip_serializing_if = "Option::is_none")]
        duration: Option<f64>,
        /// A day offset of the time window.
        #[serde(skip_serializing_if = "Option::is_none")]
        day: Option<u32>,
    },
    /// A break which has to be taken after given drive time.
    DriveTime {
        /// Drive time in minutes after which break is taken.
        #[serde(skip_serializing_if = "Option::is_none")]
        interval: Option<f64>,
        /// Break duration in minutes.
        #[serde(skip_serializing_if = "Option::is_none")]
        duration: Option<f64>,
    },
    /// A break which has to be taken after given work time.
    WorkTime {
        /// Work time in minutes after which break is taken.
        #[serde(skip_serializing_if = "Option::is_none")]
        interval: Option<f64>,
        /// Break duration in minutes.
        #[serde(skip_serializing_if = "Option::is_none")]
        duration: Option<f64>,
    },
}

impl RouteBreak {
    /// Returns break duration if specified.
    pub fn duration(&self) -> Option<f64> {
        match self {
            Self::TimeWindow { duration, .. } | Self::DriveTime { duration, .. } | Self::WorkTime { duration, .. } => {
                *duration
            }
        }
    }
}

/// Deserializes routes in json format from `BufReader`.
pub fn deserialize_routes<R: Read>(reader: BufReader<R>) -> Result<RoutePlan, MultiFormatError> {
    serde_json::from_reader(reader).map_err(|err| {
        FormatError::new(
            "E0000".to_string(),
            "cannot deserialize routes".to_string(),
            format!("check input json: '{err}'"),
        )
        .into()
    })
}
