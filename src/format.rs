//! Pure line-formatting logic.
//!
//! Everything here is a function of its inputs: fragment joining, the
//! per-kind level prefix, the tag and timestamp segments, and final line
//! assembly. Nothing in this module touches the clock or the terminal; the
//! logger feeds it with its collaborators' output.

use crate::severity::Severity;
use crate::style::{Decorate, Style};

/// Separator joining message fragments.
pub const FRAGMENT_SEPARATOR: &str = " > ";

/// Join message fragments with [`FRAGMENT_SEPARATOR`], in input order.
///
/// An empty sequence yields an empty message body; there is never a trailing
/// separator. Empty fragments are kept, matching the join semantics of the
/// emission methods.
pub fn join_fragments<I, S>(fragments: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut message = String::new();
    for (i, fragment) in fragments.into_iter().enumerate() {
        if i > 0 {
            message.push_str(FRAGMENT_SEPARATOR);
        }
        message.push_str(fragment.as_ref());
    }
    message
}

/// Everything a line prefix can be: the five public severities plus the
/// reserved undecorated kind that has no public emission method.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LineKind {
    Debug,
    Info,
    Success,
    Warn,
    Error,
    /// Bracketed `LOG` prefix in plain white, no glyph. Kept in the total
    /// mapping but reachable only from inside the crate.
    #[allow(dead_code)] // No public emission method constructs it
    Plain,
}

impl From<Severity> for LineKind {
    fn from(severity: Severity) -> Self {
        match severity {
            Severity::Debug => LineKind::Debug,
            Severity::Info => LineKind::Info,
            Severity::Success => LineKind::Success,
            Severity::Warn => LineKind::Warn,
            Severity::Error => LineKind::Error,
        }
    }
}

impl LineKind {
    /// Upper-case name rendered in the prefix.
    fn label(self) -> &'static str {
        match self {
            LineKind::Debug => "DEBUG",
            LineKind::Info => "INFO",
            LineKind::Success => "SUCCESS",
            LineKind::Warn => "WARN",
            LineKind::Error => "ERROR",
            LineKind::Plain => "LOG",
        }
    }

    /// Decorative glyph preceding the label, for the kinds that have one.
    fn glyph(self) -> Option<&'static str> {
        match self {
            LineKind::Debug => Some("›"),
            LineKind::Info => Some("ℹ"),
            LineKind::Success => Some("✅"),
            LineKind::Warn | LineKind::Error | LineKind::Plain => None,
        }
    }

    /// Visual treatment of the prefix.
    fn style(self) -> Style {
        match self {
            LineKind::Debug | LineKind::Plain => Style::White,
            LineKind::Info => Style::BrightBlue,
            LineKind::Success => Style::BrightGreen,
            LineKind::Warn => Style::BlackOnYellow,
            LineKind::Error => Style::BlackOnRed,
        }
    }

    /// Banner kinds render as ` NAME ` on a colored background, without
    /// brackets.
    fn is_banner(self) -> bool {
        matches!(self, LineKind::Warn | LineKind::Error)
    }
}

/// Render the level prefix segment for a line kind.
///
/// `warn` and `error` get a space-padded banner; the rest get
/// `[<glyph> <NAME>]`, or `[<NAME>]` when the kind has no glyph. Only the
/// text inside the brackets is decorated.
pub(crate) fn prefix(kind: LineKind, decor: &dyn Decorate) -> String {
    if kind.is_banner() {
        return decor.decorate(&format!(" {} ", kind.label()), kind.style());
    }
    let inner = match kind.glyph() {
        Some(glyph) => decor.decorate(&format!("{glyph} {}", kind.label()), kind.style()),
        None => decor.decorate(kind.label(), kind.style()),
    };
    format!("[{inner}]")
}

/// Render the tag segment: `[tag]` on the purple badge, or the empty string
/// when no tag is set.
pub(crate) fn tag_segment(tag: &str, decor: &dyn Decorate) -> String {
    if tag.is_empty() {
        return String::new();
    }
    decor.decorate(&format!("[{tag}]"), Style::WhiteOnPurple)
}

/// Render the timestamp segment with its surrounding spaces: ` <stamp> `.
pub(crate) fn timestamp_segment(stamp: &str) -> String {
    format!(" <{stamp}> ")
}

/// Assemble the final line from its four segments, single-space separated.
///
/// The timestamp segment carries its own padding, so the assembled line has
/// two spaces on each side of the `<...>` stamp, and an empty tag leaves a
/// leading space. Both spacing artifacts are part of the output contract.
pub(crate) fn compose_line(tag: &str, prefix: &str, stamp: &str, message: &str) -> String {
    format!("{tag} {prefix} {stamp} {message}")
}
