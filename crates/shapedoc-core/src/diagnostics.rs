//! Diagnostics reported while generating documentation
//!
//! Nothing the input can contain makes the pipeline fail. Every skip,
//! fallback, or unresolved link is reported as a [`Diagnostic`] to a
//! [`DiagnosticSink`] supplied by the caller and the run carries on.

use thiserror::Error;

/// A non-fatal advisory about how the input was interpreted
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    #[error("skipping {kind} `{name}`: not exported")]
    NotExported { kind: &'static str, name: String },

    #[error("skipping {member} in interface `{owner}`: only property signatures are documented")]
    SkippedMember { owner: String, member: String },

    #[error("ignoring import of `{module}`: cross-file references are not resolved")]
    ImportUnsupported { module: String },

    #[error("{} has no type annotation, documenting it as `any`", owner_label(.owner, .property.as_deref()))]
    UnknownType {
        owner: String,
        property: Option<String>,
    },

    #[error("{} references `{reference}`, which is not documented; rendering it as plain text", owner_label(.owner, .property.as_deref()))]
    UnresolvedReference {
        owner: String,
        property: Option<String>,
        reference: String,
    },

    #[error("duplicate declaration `{name}`: keeping the first one")]
    DuplicateDeclaration { name: String },
}

fn owner_label(owner: &str, property: Option<&str>) -> String {
    match property {
        Some(property) => format!("`{}.{}`", owner, property),
        None => format!("`{}`", owner),
    }
}

/// Receiver for diagnostics
///
/// Sinks are fire-and-forget: they cannot change what the pipeline produces.
pub trait DiagnosticSink {
    /// Report a diagnostic
    fn emit(&mut self, diagnostic: Diagnostic);
}

/// Collects diagnostics in the order they were reported
impl DiagnosticSink for Vec<Diagnostic> {
    fn emit(&mut self, diagnostic: Diagnostic) {
        self.push(diagnostic);
    }
}

/// Discards every diagnostic
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl DiagnosticSink for NullSink {
    fn emit(&mut self, _diagnostic: Diagnostic) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_owner() {
        let diag = Diagnostic::UnresolvedReference {
            owner: "C".to_string(),
            property: Some("y".to_string()),
            reference: "D".to_string(),
        };
        assert_eq!(
            diag.to_string(),
            "`C.y` references `D`, which is not documented; rendering it as plain text"
        );

        let diag = Diagnostic::UnknownType {
            owner: "Alias".to_string(),
            property: None,
        };
        assert_eq!(
            diag.to_string(),
            "`Alias` has no type annotation, documenting it as `any`"
        );
    }

    #[test]
    fn vec_sink_keeps_order() {
        let mut sink: Vec<Diagnostic> = Vec::new();
        sink.emit(Diagnostic::ImportUnsupported {
            module: "./a".to_string(),
        });
        sink.emit(Diagnostic::DuplicateDeclaration {
            name: "A".to_string(),
        });
        assert_eq!(sink.len(), 2);
        assert!(matches!(sink[0], Diagnostic::ImportUnsupported { .. }));
    }

    #[test]
    fn null_sink_discards() {
        let mut sink = NullSink;
        sink.emit(Diagnostic::NotExported {
            kind: "interface",
            name: "Hidden".to_string(),
        });
    }
}
