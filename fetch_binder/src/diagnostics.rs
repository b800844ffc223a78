use std::fmt;

use fetch_ids::{ComponentKind, NodeID};

/// A recoverable binding failure. Each value carries enough identity
/// (node, behavior type, field, expected kind) for someone to locate
/// and fix the authoring mistake. The pass keeps going after every one
/// of these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// The field's scope produced no candidate nodes at all.
    NoTargets {
        node: NodeID,
        behavior: &'static str,
        field: &'static str,
    },
    /// Candidates existed but none carried a matching component.
    NotFound {
        node: NodeID,
        behavior: &'static str,
        field: &'static str,
        expected: ComponentKind,
    },
    /// A resolved component could not be written into the slot.
    IncompatibleType {
        node: NodeID,
        behavior: &'static str,
        field: &'static str,
        expected: ComponentKind,
        actual: ComponentKind,
    },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::NoTargets {
                node,
                behavior,
                field,
            } => write!(
                f,
                "no target nodes were found for `{behavior}.{field}` on node {node}; check the field's scope annotation"
            ),
            Diagnostic::NotFound {
                node,
                behavior,
                field,
                expected,
            } => write!(
                f,
                "failed to find a `{expected}` reference for `{behavior}.{field}` on node {node}"
            ),
            Diagnostic::IncompatibleType {
                node,
                behavior,
                field,
                expected,
                actual,
            } => write!(
                f,
                "`{behavior}.{field}` on node {node} declares `{expected}` but resolved a `{actual}` component"
            ),
        }
    }
}

/// Where the pass sends its diagnostics. Injected so the same pass
/// runs under an editor hook, a test harness, or a CLI.
pub trait DiagnosticSink {
    fn report(&mut self, diagnostic: Diagnostic);
}

/// Default sink: forwards every diagnostic to the `log` facade.
#[derive(Default)]
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn report(&mut self, diagnostic: Diagnostic) {
        log::error!("{diagnostic}");
    }
}

impl DiagnosticSink for Vec<Diagnostic> {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.push(diagnostic);
    }
}
