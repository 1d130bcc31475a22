//! Wall-clock timestamp seam.
//!
//! The logger reads time through the narrow [`Clock`] contract instead of
//! calling a time library inline, so tests can pin the stamp.

use chrono::Local;

/// Timestamp format rendered into every line: `YYYY-MM-DD HH:mm:ss`.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Supplies the current time, already formatted for line output.
pub trait Clock {
    /// Current local time formatted as [`TIMESTAMP_FORMAT`].
    fn now(&self) -> String;
}

/// Production clock: local wall-clock time at second precision.
#[derive(Debug, Clone, Copy, Default)]
pub struct WallClock;

impl Clock for WallClock {
    fn now(&self) -> String {
        Local::now().format(TIMESTAMP_FORMAT).to_string()
    }
}
