//! Documentation generation for exported declarations
//!
//! The pipeline runs leaves first: [`decompose`] and [`DocComment`] feed the
//! [`DeclarationExtractor`], whose output the [`CrossLinker`] resolves into a
//! linked [`DeclarationSet`] that the [`MarkdownGenerator`] renders.

mod comment;
mod crosslink;
mod extractor;
mod markdown;
mod shape;
mod types;

pub use comment::DocComment;
pub use crosslink::{
    inline_primitives, is_inline_type, CrossLinker, DeclarationSet, LinkedSegment, LinkedTypeShape,
};
pub use extractor::DeclarationExtractor;
pub use markdown::{MarkdownGenerator, OutputFormat, RenderOptions, UnknownFormat};
pub use shape::{decompose, ShapeError, ShapeSegment, TypeShape, PLACEHOLDER, UNKNOWN_TYPE};
pub use types::{
    Declaration, InterfaceDeclaration, PropertyDeclaration, TypeAliasDeclaration,
};
