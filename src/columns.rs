//! The column registry: recognized column tokens and their descriptors.
//!
//! Each entry maps a selection token to its header label, pad width, and a
//! typed accessor into [`Event`]. Rendering dispatches through [`lookup`], so
//! an unknown token is a lookup miss and a no-op — adding a column is a data
//! change here, not a control-flow change in the renderer.

use std::fmt;

use crate::event::Event;

/// A single event field viewed for display.
///
/// Delegates to the inner type's `Display`, so width/alignment flags on the
/// formatter apply to both text and numeric fields (numbers are
/// left-justified like text, never zero-padded).
pub enum Value<'a> {
    Text(&'a str),
    Number(u64),
}

impl fmt::Display for Value<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => fmt::Display::fmt(s, f),
            Self::Number(n) => fmt::Display::fmt(n, f),
        }
    }
}

/// Descriptor for one renderable column.
pub struct Column {
    /// Selection token accepted in `custom-columns=` lists.
    pub token: &'static str,
    /// Upper-case header label.
    pub label: &'static str,
    /// Fixed display width in characters.
    pub width: usize,
    field: fn(&Event) -> Value<'_>,
}

impl Column {
    /// Extract this column's field from an event.
    pub fn value<'a>(&self, event: &'a Event) -> Value<'a> {
        (self.field)(event)
    }
}

/// All recognized columns, in canonical (default layout) order.
pub const REGISTRY: &[Column] = &[
    Column {
        token: "node",
        label: "NODE",
        width: 16,
        field: |e| Value::Text(&e.node),
    },
    Column {
        token: "namespace",
        label: "NAMESPACE",
        width: 16,
        field: |e| Value::Text(&e.namespace),
    },
    Column {
        token: "pod",
        label: "POD",
        width: 16,
        field: |e| Value::Text(&e.pod),
    },
    Column {
        token: "container",
        label: "CONTAINER",
        width: 16,
        field: |e| Value::Text(&e.container),
    },
    Column {
        token: "pid",
        label: "PID",
        width: 6,
        field: |e| Value::Number(u64::from(e.pid)),
    },
    Column {
        token: "comm",
        label: "COMM",
        width: 16,
        field: |e| Value::Text(&e.comm),
    },
    Column {
        token: "proto",
        label: "PROTO",
        width: 6,
        field: |e| Value::Text(&e.protocol),
    },
    Column {
        token: "addr",
        label: "ADDR",
        width: 16,
        field: |e| Value::Text(&e.addr),
    },
    Column {
        token: "port",
        label: "PORT",
        width: 6,
        field: |e| Value::Number(u64::from(e.port)),
    },
    Column {
        token: "opts",
        label: "OPTS",
        width: 6,
        field: |e| Value::Text(&e.options),
    },
    Column {
        token: "if",
        label: "IF",
        width: 6,
        field: |e| Value::Text(&e.interface),
    },
];

/// Look up a column descriptor by its selection token.
///
/// Returns `None` for unknown tokens — callers treat the miss as a no-op.
pub fn lookup(token: &str) -> Option<&'static Column> {
    REGISTRY.iter().find(|col| col.token == token)
}
