//! Diagnostic sink that forwards advisories to the `log` facade

use shapedoc_core::{Diagnostic, DiagnosticSink};

/// Logs every diagnostic at `warn` level and counts them
#[derive(Debug, Default)]
pub struct LogSink {
    count: usize,
}

impl LogSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of diagnostics received so far
    pub fn count(&self) -> usize {
        self.count
    }
}

impl DiagnosticSink for LogSink {
    fn emit(&mut self, diagnostic: Diagnostic) {
        self.count += 1;
        log::warn!("{}", diagnostic);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_diagnostics() {
        let mut sink = LogSink::new();
        sink.emit(Diagnostic::ImportUnsupported {
            module: "./a".to_string(),
        });
        sink.emit(Diagnostic::DuplicateDeclaration {
            name: "User".to_string(),
        });
        assert_eq!(sink.count(), 2);
    }

    #[test]
    fn test_usable_as_trait_object() {
        let mut sink = LogSink::new();
        let statements = Vec::new();
        let markdown = shapedoc_core::generate(&statements, &Default::default(), &mut sink);
        assert!(markdown.is_empty());
        assert_eq!(sink.count(), 0);
    }
}
