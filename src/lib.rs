//! Colorized console logging with severity gating, tags, and timestamps.
//!
//! `par-log` writes human-oriented status lines to a console sink. Each line
//! carries an optional `[tag]` badge, a severity prefix (a bracketed glyph
//! for debug/info/success, a filled banner for warn/error), a wall-clock
//! timestamp, and the message fragments joined with ` > `. A blank line
//! separates entries.
//!
//! The [`Logger`] is an explicit value owned by the caller rather than a
//! process-wide global. Its collaborators (the [`Decorate`] implementation,
//! the [`Clock`], and the output sink) are injected at construction, so
//! embedders and tests can swap any of them.
//!
//! # Example
//!
//! ```
//! use par_log::{Logger, Severity};
//!
//! let mut log = Logger::with_threshold(Severity::Info);
//! log.set_tag("worker-1");
//! log.info(["build", "started"]);
//! par_log::warn!(log, "disk", "low");
//! ```

pub mod clock;
pub mod format;
pub mod logger;
pub mod severity;
pub mod style;

pub use clock::{Clock, TIMESTAMP_FORMAT, WallClock};
pub use format::{FRAGMENT_SEPARATOR, join_fragments};
pub use logger::{DEFAULT_THRESHOLD, Logger, SharedLogger, create_shared_logger};
pub use severity::{ParseSeverityError, Severity};
pub use style::{AnsiDecorator, Decorate, PlainDecorator, Style, TAG_BACKGROUND_RGB};
