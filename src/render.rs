//! Column-aligned output rendering for data events.
//!
//! Renders decoded data events into fixed-width, space-separated rows, plus
//! the matching header line, driven by an immutable [`ColumnSpec`]. Header
//! and rows go through the same per-column geometry, so column boundaries
//! line up for every event. One line in, one line out — nothing is buffered
//! across events, since the source is an unbounded live stream.

use std::fmt::Write;

use owo_colors::OwoColorize;

use crate::columns::{self, REGISTRY};
use crate::event::Event;

/// Which columns to render, fixed for the whole session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnSpec {
    /// All registry columns in canonical order.
    Fixed,
    /// An explicit ordered list of selection tokens.
    ///
    /// Unknown tokens are kept in the list and ignored at render time: they
    /// contribute no field, just the separator space for their position.
    Custom(Vec<String>),
}

/// Renders header and data rows against one [`ColumnSpec`].
///
/// Holds the specification by reference — the renderer itself is stateless
/// and every call is a pure function of (spec, event).
pub struct Renderer<'a> {
    spec: &'a ColumnSpec,
}

impl<'a> Renderer<'a> {
    pub fn new(spec: &'a ColumnSpec) -> Self {
        Self { spec }
    }

    /// Write the header line into `out`.
    ///
    /// Driven purely by the specification; emitted once before the first
    /// data row.
    pub fn header(&self, out: &mut String) {
        match self.spec {
            ColumnSpec::Fixed => {
                for (i, col) in REGISTRY.iter().enumerate() {
                    if i + 1 == REGISTRY.len() {
                        // Last fixed column is unpadded.
                        out.push_str(col.label);
                    } else {
                        let _ = write!(out, "{:<width$} ", col.label, width = col.width);
                    }
                }
            }
            ColumnSpec::Custom(tokens) => {
                for token in tokens {
                    if let Some(col) = columns::lookup(token) {
                        let _ = write!(out, "{:<width$}", col.label, width = col.width);
                    }
                    out.push(' ');
                }
            }
        }
    }

    /// Write one data row for `event` into `out`.
    ///
    /// The caller must only pass data events; diagnostic and unrecognized
    /// kinds are filtered upstream by the decode/classify step.
    pub fn row(&self, event: &Event, out: &mut String) {
        match self.spec {
            ColumnSpec::Fixed => {
                for (i, col) in REGISTRY.iter().enumerate() {
                    if i + 1 == REGISTRY.len() {
                        let _ = write!(out, "{}", col.value(event));
                    } else {
                        let _ = write!(out, "{:<width$} ", col.value(event), width = col.width);
                    }
                }
            }
            ColumnSpec::Custom(tokens) => {
                for token in tokens {
                    if let Some(col) = columns::lookup(token) {
                        let _ = write!(out, "{:<width$}", col.value(event), width = col.width);
                    }
                    out.push(' ');
                }
            }
        }
    }
}

/// Format a diagnostic event as `"<kind>: node <node>: <message>"`.
///
/// When `use_color` is set, the kind token is styled per
/// [`EventKind::style`](crate::event::EventKind::style). The caller routes
/// the result to the diagnostic sink (stderr), never to the row output.
pub fn format_diagnostic(event: &Event, use_color: bool, out: &mut String) {
    let token = event.kind.token();
    if use_color {
        let _ = write!(out, "{}", token.style(event.kind.style()));
    } else {
        out.push_str(token);
    }
    let _ = write!(out, ": node {}: {}", event.node, event.message);
}
