//! Specifies a feasibility report and the way to write it.

#[cfg(test)]
#[path = "../../../tests/unit/format/report/report_test.rs"]
mod report_test;

use crate::checker::RouteCheck;
use feasibility_core::models::{Diagnostic, Severity};
use feasibility_core::utils::GenericError;
use serde::{Deserialize, Serialize};
use std::io::{BufReader, BufWriter, Read, Write};

/// A feasibility report of multiple routes.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    /// Route reports in the order of input routes.
    pub routes: Vec<RouteReport>,
}

/// A feasibility report of a single route.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteReport {
    /// Route id.
    pub id: String,
    /// True if the route can be driven and its breaks are valid.
    pub feasible: bool,
    /// Route diagnostics.
    pub diagnostics: Vec<DiagnosticReport>,
}

/// A single diagnostic record.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagnosticReport {
    /// Either `error` or `warning`.
    pub severity: String,
    /// A stable diagnostic code.
    pub code: String,
    /// Human readable message.
    pub message: String,
    /// An index of the break in the route's break list.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub break_index: Option<usize>,
}

impl Report {
    /// Creates a report from check results.
    pub fn from_checks(checks: &[RouteCheck]) -> Self {
        Self {
            routes: checks
                .iter()
                .map(|check| RouteReport {
                    id: check.id.clone(),
                    feasible: check.result.is_feasible(),
                    diagnostics: check.diagnostics.iter().map(DiagnosticReport::from).collect(),
                })
                .collect(),
        }
    }

    /// Returns true if all routes are feasible.
    pub fn is_feasible(&self) -> bool {
        self.routes.iter().all(|route| route.feasible)
    }
}

impl From<&Diagnostic> for DiagnosticReport {
    fn from(diagnostic: &Diagnostic) -> Self {
        let severity = match diagnostic.severity {
            Severity::Error => "error",
            Severity::Warning => "warning",
        };

        Self {
            severity: severity.to_string(),
            code: diagnostic.kind.code().to_string(),
            message: diagnostic.message.clone(),
            break_index: diagnostic.kind.break_index(),
        }
    }
}

/// Serializes report into json format.
pub fn serialize_report<W: Write>(writer: BufWriter<W>, report: &Report) -> Result<(), GenericError> {
    serde_json::to_writer_pretty(writer, report).map_err(|err| format!("cannot write report: '{err}'").into())
}

/// Deserializes report from json format.
pub fn deserialize_report<R: Read>(reader: BufReader<R>) -> Result<Report, GenericError> {
    serde_json::from_reader(reader).map_err(|err| format!("cannot read report: '{err}'").into())
}
