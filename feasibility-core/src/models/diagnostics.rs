#[cfg(test)]
#[path = "../../tests/unit/models/diagnostics_test.rs"]
mod diagnostics_test;

use crate::models::common::Duration;
use std::fmt::{Display, Formatter};

/// Specifies diagnostic severity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Severity {
    /// The route cannot be driven as specified.
    Error,
    /// The route definition is suspicious, but it doesn't block the check.
    Warning,
}

/// Specifies a reason of the diagnostic. Break indices are always positions in the route's
/// break list as it was specified, not in chronological order.
#[derive(Clone, Debug, PartialEq)]
pub enum DiagnosticKind {
    /// Max total duration cannot fit time spent at start and end locations.
    MaxDurationTooSmall {
        /// Max duration used by the check.
        max_duration: Duration,
        /// Required duration.
        required: Duration,
    },
    /// Route start time window has no intersection with start location time windows.
    StartLocationUnreachable,
    /// The only break of the route cannot be visited.
    BreakCannotBeVisited {
        /// Break index.
        index: usize,
    },
    /// None of the route breaks can be visited.
    AllBreaksCannotBeVisited,
    /// The chronologically last break cannot be visited.
    LastBreakCannotBeVisited {
        /// Break index.
        index: usize,
    },
    /// The break and all breaks after it cannot be visited.
    SubsequenceCannotBeVisited {
        /// Index of the first break which cannot be visited.
        index: usize,
    },
    /// End location cannot be reached within its time windows.
    FinishLocationUnreachable,
    /// End location can be reached, but there is not enough time to serve it.
    FinishLocationCannotBeServiced {
        /// Longest available time at the end location.
        available: Duration,
        /// Required time at the end location.
        required: Duration,
    },
    /// Route has breaks of different kinds.
    MixedBreakKinds,
    /// Break duration is negative or zero.
    InvalidBreakDuration {
        /// Break index.
        index: usize,
    },
    /// Time window of the break overlaps with the window of the previous one.
    OverlappingBreakWindows {
        /// Break index.
        index: usize,
        /// Index of the overlapped break.
        other: usize,
    },
    /// Two drive or work time breaks have the same interval.
    DuplicateBreakInterval {
        /// Break index.
        index: usize,
        /// Index of the break with the same interval.
        other: usize,
    },
}

impl DiagnosticKind {
    /// Returns a stable code of the diagnostic kind.
    pub fn code(&self) -> &'static str {
        match self {
            Self::MaxDurationTooSmall { .. } => "D100",
            Self::StartLocationUnreachable => "D101",
            Self::BreakCannotBeVisited { .. } => "D102",
            Self::AllBreaksCannotBeVisited => "D103",
            Self::LastBreakCannotBeVisited { .. } => "D104",
            Self::SubsequenceCannotBeVisited { .. } => "D105",
            Self::FinishLocationUnreachable => "D106",
            Self::FinishLocationCannotBeServiced { .. } => "D107",
            Self::MixedBreakKinds => "D200",
            Self::InvalidBreakDuration { .. } => "D201",
            Self::OverlappingBreakWindows { .. } => "D202",
            Self::DuplicateBreakInterval { .. } => "D203",
        }
    }

    /// Returns index of the break which is the subject of the diagnostic, if any.
    pub fn break_index(&self) -> Option<usize> {
        match self {
            Self::BreakCannotBeVisited { index }
            | Self::LastBreakCannotBeVisited { index }
            | Self::SubsequenceCannotBeVisited { index }
            | Self::InvalidBreakDuration { index }
            | Self::OverlappingBreakWindows { index, .. }
            | Self::DuplicateBreakInterval { index, .. } => Some(*index),
            _ => None,
        }
    }
}

/// A single diagnostic record produced by the checker.
#[derive(Clone, Debug, PartialEq)]
pub struct Diagnostic {
    /// Diagnostic severity.
    pub severity: Severity,
    /// Diagnostic kind.
    pub kind: DiagnosticKind,
    /// Id of the route which is the subject of the diagnostic.
    pub subject: String,
    /// Human readable message.
    pub message: String,
}

impl Diagnostic {
    /// Creates an error diagnostic.
    pub fn error(kind: DiagnosticKind, subject: &str, message: String) -> Self {
        Self { severity: Severity::Error, kind, subject: subject.to_string(), message }
    }

    /// Creates a warning diagnostic.
    pub fn warning(kind: DiagnosticKind, subject: &str, message: String) -> Self {
        Self { severity: Severity::Warning, kind, subject: subject.to_string(), message }
    }

    /// Returns true if this is an error.
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl Display for Diagnostic {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let severity = match self.severity {
            Severity::Error => "error",
            Severity::Warning => "warning",
        };

        write!(f, "{} {} '{}': {}", severity, self.kind.code(), self.subject, self.message)
    }
}

/// An append-only collector of diagnostics owned by the caller.
pub trait DiagnosticSink {
    /// Accepts a new diagnostic.
    fn accept(&mut self, diagnostic: Diagnostic);
}

impl DiagnosticSink for Vec<Diagnostic> {
    fn accept(&mut self, diagnostic: Diagnostic) {
        self.push(diagnostic);
    }
}
