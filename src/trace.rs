//! Per-field diagnostic trace.
//!
//! Items report every field they extract to a `Trace`. The trace is purely
//! observational and never changes what gets decoded.

use log::debug;

use std::fmt::Display;

pub trait Trace {
    fn field(&mut self, item: &'static str, name: &'static str, value: &dyn Display);
}

/// Drops every field
#[derive(Debug, Default, Clone, Copy)]
pub struct NoTrace;

impl Trace for NoTrace {
    fn field(&mut self, _item: &'static str, _name: &'static str, _value: &dyn Display) {}
}

/// Forwards fields to the `asterix::trace` log target at debug level
#[derive(Debug, Default, Clone, Copy)]
pub struct LogTrace;

impl Trace for LogTrace {
    fn field(&mut self, item: &'static str, name: &'static str, value: &dyn Display) {
        debug!(target: "asterix::trace", "{} {}: {}", item, name, value);
    }
}

/// Records `(item, field, value)` entries in decode order
#[derive(Debug, Default, Clone)]
pub struct FieldLog {
    entries: Vec<(&'static str, &'static str, String)>,
}

impl FieldLog {
    pub fn new() -> Self {
        FieldLog::default()
    }

    pub fn entries(&self) -> &[(&'static str, &'static str, String)] {
        &self.entries
    }

    /// The last value recorded for `name` in `item`
    pub fn get(&self, item: &str, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .rev()
            .find(|(i, n, _)| *i == item && *n == name)
            .map(|(_, _, value)| value.as_str())
    }
}

impl Trace for FieldLog {
    fn field(&mut self, item: &'static str, name: &'static str, value: &dyn Display) {
        self.entries.push((item, name, value.to_string()));
    }
}
