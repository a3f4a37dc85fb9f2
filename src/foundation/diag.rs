//! Diagnostic routing for recoverable build problems.
//!
//! Unknown widget kinds, missing textures and fonts, and malformed resource names never abort a
//! build. They are reported here and the affected widget falls back to a safe default.

use std::sync::{Arc, Mutex};

/// Diagnostic severity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
pub enum Severity {
    /// Expected degradations (missing optional resources, unsupported kinds).
    Debug,
    /// Authoring mistakes that the loader had to work around.
    Error,
}

/// One reported problem, tagged with the offending node when known.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Diagnostic {
    /// Severity of the report.
    pub severity: Severity,
    /// Node kind tag (`ctype`) when the problem belongs to a node.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Node name when the problem belongs to a node.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Human-readable message.
    pub message: String,
}

impl Diagnostic {
    /// Build a node-less diagnostic.
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            severity,
            kind: None,
            name: None,
            message: message.into(),
        }
    }

    /// Attach the node kind and name.
    pub fn for_node(mut self, kind: &str, name: &str) -> Self {
        self.kind = Some(kind.to_string());
        self.name = Some(name.to_string());
        self
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let level = match self.severity {
            Severity::Debug => "debug",
            Severity::Error => "error",
        };
        match (&self.kind, &self.name) {
            (Some(kind), Some(name)) => write!(f, "[{level}] {kind} '{name}': {}", self.message),
            (None, Some(name)) => write!(f, "[{level}] '{name}': {}", self.message),
            _ => write!(f, "[{level}] {}", self.message),
        }
    }
}

/// Pluggable receiver for diagnostics.
pub trait DiagnosticSink: Send + Sync {
    /// Receive one diagnostic.
    fn emit(&self, diag: Diagnostic);
}

/// Default sink forwarding to `tracing`.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn emit(&self, diag: Diagnostic) {
        let kind = diag.kind.as_deref().unwrap_or("");
        let name = diag.name.as_deref().unwrap_or("");
        match diag.severity {
            Severity::Debug => tracing::debug!(kind, name, "{}", diag.message),
            Severity::Error => tracing::error!(kind, name, "{}", diag.message),
        }
    }
}

/// Sink that keeps every diagnostic in memory.
///
/// Clones share the same buffer, so one handle can be given to the loader and another kept for
/// inspection.
#[derive(Clone, Debug, Default)]
pub struct MemorySink {
    entries: Arc<Mutex<Vec<Diagnostic>>>,
}

impl MemorySink {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything recorded so far.
    pub fn entries(&self) -> Vec<Diagnostic> {
        self.entries
            .lock()
            .map(|v| v.clone())
            .unwrap_or_else(|poisoned| poisoned.into_inner().clone())
    }

    /// Number of recorded diagnostics.
    pub fn len(&self) -> usize {
        self.entries().len()
    }

    /// Return `true` when nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl DiagnosticSink for MemorySink {
    fn emit(&self, diag: Diagnostic) {
        tracing::trace!(%diag, "recorded diagnostic");
        match self.entries.lock() {
            Ok(mut v) => v.push(diag),
            Err(poisoned) => poisoned.into_inner().push(diag),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/diag.rs"]
mod tests;
