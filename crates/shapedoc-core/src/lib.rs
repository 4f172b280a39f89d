//! shapedoc core - documentation generator for exported type declarations
//!
//! This crate provides the documentation pipeline:
//! - Syntax: the declaration tree handed over by an external parser
//! - Extraction: exported interfaces and type aliases with their comments
//! - Cross-linking: resolving type names to links between declarations
//! - Rendering: markdown output as tables or commented object literals
//!
//! ```
//! use shapedoc_core::syntax::{Statement, TypeAliasStatement, TypeExpr, CommentMeta};
//! use shapedoc_core::{generate, NullSink, RenderOptions};
//!
//! let statements = vec![Statement::TypeAlias(TypeAliasStatement {
//!     name: "Id".to_string(),
//!     exported: true,
//!     doc: CommentMeta::text("Opaque identifier."),
//!     ty: Some(TypeExpr::reference("string")),
//! })];
//!
//! let markdown = generate(&statements, &RenderOptions::default(), &mut NullSink);
//! assert_eq!(markdown, "## Id\n\nOpaque identifier.\n\nType: string\n");
//! ```

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Input syntax tree supplied by a parser adapter
pub mod syntax;

/// Diagnostics and diagnostic sinks
pub mod diagnostics;

/// Documentation pipeline stages
pub mod doc;

pub use diagnostics::{Diagnostic, DiagnosticSink, NullSink};
pub use doc::{
    CrossLinker, DeclarationExtractor, DeclarationSet, LinkedTypeShape, MarkdownGenerator,
    OutputFormat, RenderOptions,
};

/// Run the whole pipeline: extract, cross-link, and render
///
/// Diagnostics are reported to `sink` as they happen; they never change the
/// returned document.
pub fn generate(
    statements: &[syntax::Statement],
    options: &RenderOptions,
    sink: &mut dyn DiagnosticSink,
) -> String {
    let declarations = DeclarationExtractor::extract(statements, sink);
    let linked = CrossLinker::resolve(declarations, sink);
    MarkdownGenerator::generate(&linked, options)
}
