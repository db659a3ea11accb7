//! `tracetab` — Render JSON trace event streams as column-aligned tables.
//!
//! This library provides the core decoding and rendering functionality for
//! the `tracetab` CLI tool. It parses one JSON trace event per line,
//! classifies it as a data or diagnostic event, and renders data events as
//! fixed-width, space-separated rows — either the full default column set or
//! a user-selected ordered subset — with a matching aligned header line.
//!
//! # Example
//!
//! ```
//! use tracetab::{ColumnSpec, Renderer, decode};
//!
//! let spec = ColumnSpec::Fixed;
//! let renderer = Renderer::new(&spec);
//!
//! let mut header = String::new();
//! renderer.header(&mut header);
//! assert!(header.starts_with("NODE"));
//!
//! let event = decode(r#"{"type":"normal","node":"n1","pid":42,"comm":"curl"}"#).unwrap();
//! let mut row = String::new();
//! renderer.row(&event, &mut row);
//! assert!(row.starts_with("n1"));
//! ```

pub mod cli;
pub mod columns;
pub mod config;
pub mod error;
pub mod event;
pub mod render;

// Re-export primary API types for convenience.
pub use config::Config;
pub use error::TraceTabError;
pub use event::{Event, EventKind, decode};
pub use render::{ColumnSpec, Renderer, format_diagnostic};
