//! Message severity levels.
//!
//! Severities form a total order used for threshold filtering. The order,
//! `Debug < Info < Warn < Success < Error`, is part of the output contract:
//! `Warn` deliberately ranks *below* `Success`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Severity of a log message, from most verbose to most severe.
///
/// The numeric rank drives filtering: a logger with threshold `T` emits a
/// message at severity `L` when `L.rank() >= T.rank()`. Declaration order is
/// the rank order, so the derived `Ord` matches [`Severity::rank`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Most verbose; passes only when the threshold is exactly `Debug`.
    Debug = 0,
    /// Informational messages.
    Info = 1,
    /// Warnings; note the rank below `Success`.
    Warn = 2,
    /// Success confirmations.
    Success = 3,
    /// Errors; pass at every threshold.
    Error = 4,
}

impl Severity {
    /// Numeric rank; lower is more verbose.
    pub fn rank(self) -> u8 {
        self as u8
    }

    /// Upper-case name as rendered in line prefixes.
    pub fn label(self) -> &'static str {
        match self {
            Severity::Debug => "DEBUG",
            Severity::Info => "INFO",
            Severity::Warn => "WARN",
            Severity::Success => "SUCCESS",
            Severity::Error => "ERROR",
        }
    }

    /// All severities in rank order.
    pub fn all() -> &'static [Severity] {
        &[
            Severity::Debug,
            Severity::Info,
            Severity::Warn,
            Severity::Success,
            Severity::Error,
        ]
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Severity::Debug => "debug",
            Severity::Info => "info",
            Severity::Warn => "warn",
            Severity::Success => "success",
            Severity::Error => "error",
        };
        write!(f, "{name}")
    }
}

/// Error type for severity parsing failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseSeverityError(String);

impl fmt::Display for ParseSeverityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown severity '{}'", self.0)
    }
}

impl std::error::Error for ParseSeverityError {}

impl FromStr for Severity {
    type Err = ParseSeverityError;

    /// Parse a severity from its case-insensitive name (`"debug"`, `"info"`,
    /// `"warn"`, `"success"`, `"error"`). Surrounding whitespace is not
    /// accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "debug" => Ok(Severity::Debug),
            "info" => Ok(Severity::Info),
            "warn" => Ok(Severity::Warn),
            "success" => Ok(Severity::Success),
            "error" => Ok(Severity::Error),
            _ => Err(ParseSeverityError(s.to_string())),
        }
    }
}
