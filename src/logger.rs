//! The logger: threshold state, tag state, filtering, and emission.

use crate::clock::{Clock, WallClock};
use crate::format::{self, LineKind};
use crate::severity::Severity;
use crate::style::{AnsiDecorator, Decorate};
use parking_lot::Mutex;
use std::io::{self, Write};
use std::sync::Arc;

/// Threshold a logger starts with when none is given: errors only.
pub const DEFAULT_THRESHOLD: Severity = Severity::Error;

/// Console logger: gates messages by severity and writes decorated,
/// timestamped lines followed by a blank line.
///
/// A `Logger` is an explicit value constructed by the caller, typically once
/// per process at the composition root, rather than a hidden global.
/// Collaborators (decorator, clock, sink) are fixed at construction; the
/// threshold and tag stay mutable through their setters.
///
/// # Example
///
/// ```
/// use par_log::{Logger, Severity};
///
/// let mut log = Logger::with_threshold(Severity::Info);
/// log.set_tag("worker-1");
/// log.info(["build started"]);
/// log.warn(["disk", "low"]);
/// ```
pub struct Logger {
    threshold: Severity,
    tag: String,
    decorator: Box<dyn Decorate + Send>,
    clock: Box<dyn Clock + Send>,
    out: Box<dyn Write + Send>,
}

impl Logger {
    /// Create a logger with [`DEFAULT_THRESHOLD`], ANSI decoration, the wall
    /// clock, and standard output.
    pub fn new() -> Self {
        Self::with_threshold(DEFAULT_THRESHOLD)
    }

    /// Create a logger with an explicit threshold and the default
    /// collaborators.
    pub fn with_threshold(threshold: Severity) -> Self {
        Self::from_parts(threshold, AnsiDecorator, WallClock, io::stdout())
    }

    /// Create a logger from explicit collaborators.
    ///
    /// This is the injection point for composition roots and tests: any
    /// decorator, clock, and sink satisfying the narrow contracts can stand
    /// in for the production ones.
    pub fn from_parts<D, C, W>(threshold: Severity, decorator: D, clock: C, out: W) -> Self
    where
        D: Decorate + Send + 'static,
        C: Clock + Send + 'static,
        W: Write + Send + 'static,
    {
        Self {
            threshold,
            tag: String::new(),
            decorator: Box::new(decorator),
            clock: Box::new(clock),
            out: Box::new(out),
        }
    }

    /// Replace the minimum severity that will be emitted.
    ///
    /// Applies to subsequent calls only; lines already written are
    /// unaffected.
    pub fn set_threshold(&mut self, threshold: Severity) {
        self.threshold = threshold;
    }

    /// Current threshold.
    pub fn threshold(&self) -> Severity {
        self.threshold
    }

    /// Replace the tag prefixed to every line.
    ///
    /// An empty tag disables the leading `[tag]` badge. The tag persists
    /// across calls until changed.
    pub fn set_tag(&mut self, tag: impl Into<String>) {
        self.tag = tag.into();
    }

    /// Current tag; empty when unset.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Emit at `debug` severity.
    ///
    /// Passes only when the threshold is exactly [`Severity::Debug`]
    /// (equivalent to `<=` since `Debug` is the minimum rank).
    pub fn debug<I, S>(&mut self, fragments: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        if self.threshold == Severity::Debug {
            self.emit(Severity::Debug, fragments);
        }
    }

    /// Emit at `info` severity.
    pub fn info<I, S>(&mut self, fragments: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        if self.threshold <= Severity::Info {
            self.emit(Severity::Info, fragments);
        }
    }

    /// Emit at `warn` severity.
    pub fn warn<I, S>(&mut self, fragments: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        if self.threshold <= Severity::Warn {
            self.emit(Severity::Warn, fragments);
        }
    }

    /// Emit at `success` severity.
    pub fn success<I, S>(&mut self, fragments: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        if self.threshold <= Severity::Success {
            self.emit(Severity::Success, fragments);
        }
    }

    /// Emit at `error` severity.
    ///
    /// The threshold can never exceed [`Severity::Error`], so this always
    /// passes.
    pub fn error<I, S>(&mut self, fragments: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        if self.threshold <= Severity::Error {
            self.emit(Severity::Error, fragments);
        }
    }

    /// Format and write one line, terminated by a blank line.
    ///
    /// The severity-to-kind conversion happens here and nowhere else, so the
    /// total mapping in [`LineKind`] is the one source of prefix rendering.
    /// Sink write and flush failures are ignored; the logger performs no I/O
    /// error handling of its own.
    fn emit<I, S>(&mut self, severity: Severity, fragments: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let kind = LineKind::from(severity);
        let tag = format::tag_segment(&self.tag, self.decorator.as_ref());
        let prefix = format::prefix(kind, self.decorator.as_ref());
        let stamp = format::timestamp_segment(&self.clock.now());
        let message = format::join_fragments(fragments);
        let line = format::compose_line(&tag, &prefix, &stamp, &message);

        let _ = self.out.write_all(line.as_bytes());
        let _ = self.out.write_all(b"\n\n");
        let _ = self.out.flush();
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

/// Thread-safe shared handle to a [`Logger`].
///
/// The logger itself is single-threaded by design; a process that wants one
/// shared configuration across threads wraps it at the composition root.
pub type SharedLogger = Arc<Mutex<Logger>>;

/// Create a default logger behind a shared handle.
pub fn create_shared_logger() -> SharedLogger {
    Arc::new(Mutex::new(Logger::new()))
}

// Convenience macros mirroring the emission methods, with true variadic
// fragment lists.

#[macro_export]
macro_rules! debug {
    ($logger:expr, $($fragment:expr),+ $(,)?) => {
        $logger.debug([$(::core::convert::AsRef::<str>::as_ref(&$fragment)),+])
    };
}

#[macro_export]
macro_rules! info {
    ($logger:expr, $($fragment:expr),+ $(,)?) => {
        $logger.info([$(::core::convert::AsRef::<str>::as_ref(&$fragment)),+])
    };
}

#[macro_export]
macro_rules! success {
    ($logger:expr, $($fragment:expr),+ $(,)?) => {
        $logger.success([$(::core::convert::AsRef::<str>::as_ref(&$fragment)),+])
    };
}

#[macro_export]
macro_rules! warn {
    ($logger:expr, $($fragment:expr),+ $(,)?) => {
        $logger.warn([$(::core::convert::AsRef::<str>::as_ref(&$fragment)),+])
    };
}

#[macro_export]
macro_rules! error {
    ($logger:expr, $($fragment:expr),+ $(,)?) => {
        $logger.error([$(::core::convert::AsRef::<str>::as_ref(&$fragment)),+])
    };
}
