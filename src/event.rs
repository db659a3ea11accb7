//! Trace event decoder.
//!
//! Parses one stdin line into a structured [`Event`] and classifies it as a
//! data event (rendered as a column row) or a diagnostic event (routed to
//! stderr). Events with an unrecognized `type` token decode successfully but
//! are dropped by the caller without any output.

use owo_colors::Style;
use serde::Deserialize;

use crate::error::TraceTabError;

/// The classification of a decoded trace event.
///
/// Wire tokens are lower-case (`normal`, `err`, `warn`, `debug`, `info`).
/// Any other token decodes to [`Unknown`](Self::Unknown), which callers must
/// drop silently — rendering an unrecognized kind would produce garbage
/// columns.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    /// A data event carrying the traced fields.
    Normal,
    Err,
    Warn,
    Debug,
    Info,
    /// Unrecognized `type` token, or the field was absent entirely.
    #[default]
    #[serde(other)]
    Unknown,
}

impl EventKind {
    /// The wire token for this kind, as it appears in the `type` field.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Err => "err",
            Self::Warn => "warn",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Unknown => "unknown",
        }
    }

    /// Whether this kind carries a human-readable message instead of data
    /// fields.
    pub const fn is_diagnostic(self) -> bool {
        matches!(self, Self::Err | Self::Warn | Self::Debug | Self::Info)
    }

    /// Returns the [`Style`] for this kind's token when colors are enabled.
    ///
    /// Only diagnostic kinds are ever styled:
    /// - Err: red bold
    /// - Warn: yellow bold
    /// - Debug: blue bold
    /// - Info: green bold
    pub const fn style(self) -> Style {
        match self {
            Self::Err => Style::new().red().bold(),
            Self::Warn => Style::new().yellow().bold(),
            Self::Debug => Style::new().blue().bold(),
            Self::Info => Style::new().green().bold(),
            Self::Normal | Self::Unknown => Style::new(),
        }
    }
}

/// A decoded trace event.
///
/// Data events (`kind == Normal`) populate the traced fields; diagnostic
/// kinds populate [`message`](Self::message) instead. Absent wire fields
/// default to empty strings / zero, matching the upstream tracer's encoder
/// which omits unset fields.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Event {
    #[serde(rename = "type")]
    pub kind: EventKind,
    pub node: String,
    pub namespace: String,
    pub pod: String,
    pub container: String,
    pub pid: u32,
    pub comm: String,
    #[serde(rename = "proto")]
    pub protocol: String,
    pub addr: String,
    pub port: u16,
    #[serde(rename = "opts")]
    pub options: String,
    #[serde(rename = "if")]
    pub interface: String,
    /// Free-text payload of diagnostic events; empty for data events.
    pub message: String,
}

/// Decode a single line from the event stream.
///
/// Pure parse, no side effects. A malformed line surfaces as
/// [`TraceTabError::Decode`] wrapping the offending line; the caller reports
/// it and continues the stream — a bad line is never fatal.
pub fn decode(line: &str) -> Result<Event, TraceTabError> {
    serde_json::from_str(line).map_err(|source| TraceTabError::Decode {
        line: line.to_string(),
        source,
    })
}
