//! Shared integration test helpers for par-log.
//!
//! Deterministic stand-ins for the logger's collaborators: a capturing
//! sink, a pinned clock, and a call-recording decorator.
//!
//! # Usage
//!
//! Include this module at the top of each test file that needs it:
//!
//! ```ignore
//! mod common;
//! use common::{CaptureBuf, FixedClock, STAMP};
//! ```
//!
//! Not every test file uses every helper, so dead-code warnings are
//! suppressed for the module as a whole.

#![allow(dead_code)]

use par_log::{Clock, Decorate, Style};
use parking_lot::Mutex;
use std::io::{self, Write};
use std::sync::Arc;

/// Fixed timestamp used by [`FixedClock`] and expected-line literals.
pub const STAMP: &str = "2024-05-05 10:30:00";

/// Cloneable in-memory sink. Clones share one buffer, so a test can keep a
/// handle while the logger owns another.
#[derive(Clone, Default)]
pub struct CaptureBuf(Arc<Mutex<Vec<u8>>>);

impl CaptureBuf {
    pub fn contents(&self) -> String {
        String::from_utf8(self.0.lock().clone()).expect("captured output is UTF-8")
    }
}

impl Write for CaptureBuf {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Clock pinned to [`STAMP`].
pub struct FixedClock;

impl Clock for FixedClock {
    fn now(&self) -> String {
        STAMP.to_string()
    }
}

/// Decorator that records every call and returns the text unchanged.
#[derive(Clone, Default)]
pub struct RecordingDecorator(Arc<Mutex<Vec<(String, Style)>>>);

impl RecordingDecorator {
    pub fn calls(&self) -> Vec<(String, Style)> {
        self.0.lock().clone()
    }
}

impl Decorate for RecordingDecorator {
    fn decorate(&self, text: &str, style: Style) -> String {
        self.0.lock().push((text.to_string(), style));
        text.to_string()
    }
}
