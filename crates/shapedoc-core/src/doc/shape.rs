//! Structural decomposition of type expressions
//!
//! A [`TypeShape`] splits a type expression into the names that may later
//! become links (its leaves) and the text that surrounds them. The classic
//! view is a list of leaf names plus a template with one `{}` placeholder per
//! leaf; internally the shape is stored as ordered segments so that a literal
//! containing `{}` can never be mistaken for a placeholder.

use std::fmt;

use thiserror::Error;

use crate::syntax::TypeExpr;

/// Placeholder token used by [`TypeShape::template`]
pub const PLACEHOLDER: &str = "{}";

/// Name used for a missing type annotation
pub const UNKNOWN_TYPE: &str = "any";

/// Separator between union and intersection members
const MEMBER_SEPARATOR: &str = " | ";

/// Internal defect: a template and its leaves disagree
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ShapeError {
    #[error("template `{template}` has {placeholders} placeholders but {leaves} leaf types were given")]
    PlaceholderMismatch {
        template: String,
        placeholders: usize,
        leaves: usize,
    },
}

/// One piece of a [`TypeShape`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShapeSegment {
    /// Fixed template text
    Text(String),
    /// A type name occupying one placeholder
    Leaf(String),
}

/// Ordered leaf types plus the template text around them
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TypeShape {
    segments: Vec<ShapeSegment>,
}

impl TypeShape {
    /// A shape that is a single leaf
    #[must_use]
    pub fn leaf(name: impl Into<String>) -> Self {
        Self {
            segments: vec![ShapeSegment::Leaf(name.into())],
        }
    }

    /// Rebuild a shape from leaf names and a `{}` template
    ///
    /// Fails when the number of placeholders differs from the number of leaves.
    pub fn from_parts(leaves: &[&str], template: &str) -> Result<Self, ShapeError> {
        let pieces: Vec<&str> = template.split(PLACEHOLDER).collect();
        let placeholders = pieces.len() - 1;
        if placeholders != leaves.len() {
            return Err(ShapeError::PlaceholderMismatch {
                template: template.to_string(),
                placeholders,
                leaves: leaves.len(),
            });
        }

        let mut shape = Self::default();
        for (i, piece) in pieces.iter().enumerate() {
            shape.push_text(piece);
            if let Some(leaf) = leaves.get(i) {
                shape.segments.push(ShapeSegment::Leaf((*leaf).to_string()));
            }
        }
        Ok(shape)
    }

    /// The segments in order
    pub fn segments(&self) -> &[ShapeSegment] {
        &self.segments
    }

    /// Leaf type names, left to right (duplicates kept)
    pub fn leaves(&self) -> Vec<&str> {
        self.segments
            .iter()
            .filter_map(|segment| match segment {
                ShapeSegment::Leaf(name) => Some(name.as_str()),
                ShapeSegment::Text(_) => None,
            })
            .collect()
    }

    /// Number of leaves
    pub fn leaf_count(&self) -> usize {
        self.segments
            .iter()
            .filter(|segment| matches!(segment, ShapeSegment::Leaf(_)))
            .count()
    }

    /// Template text with a `{}` placeholder at each leaf position
    pub fn template(&self) -> String {
        self.segments
            .iter()
            .map(|segment| match segment {
                ShapeSegment::Text(text) => text.as_str(),
                ShapeSegment::Leaf(_) => PLACEHOLDER,
            })
            .collect()
    }

    /// Concatenated text of a shape without leaves
    pub fn literal_text(&self) -> Option<String> {
        (self.leaf_count() == 0).then(|| self.template())
    }

    /// Replace leaves for which `inline` returns true with their own text
    #[must_use]
    pub fn inline_leaves(&self, inline: impl Fn(&str) -> bool) -> Self {
        let mut shape = Self::default();
        for segment in &self.segments {
            match segment {
                ShapeSegment::Leaf(name) if inline(name) => shape.push_text(name),
                ShapeSegment::Leaf(name) => shape.segments.push(ShapeSegment::Leaf(name.clone())),
                ShapeSegment::Text(text) => shape.push_text(text),
            }
        }
        shape
    }

    fn push_text(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        if let Some(ShapeSegment::Text(last)) = self.segments.last_mut() {
            last.push_str(text);
        } else {
            self.segments.push(ShapeSegment::Text(text.to_string()));
        }
    }

    fn append(&mut self, other: TypeShape) {
        for segment in other.segments {
            match segment {
                ShapeSegment::Text(text) => self.push_text(&text),
                leaf @ ShapeSegment::Leaf(_) => self.segments.push(leaf),
            }
        }
    }
}

impl fmt::Display for TypeShape {
    /// Writes the shape with every leaf substituted by its name
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for segment in &self.segments {
            match segment {
                ShapeSegment::Text(text) | ShapeSegment::Leaf(text) => f.write_str(text)?,
            }
        }
        Ok(())
    }
}

/// Decompose a type expression into a [`TypeShape`]
///
/// Purely structural: whether a leaf names a documented declaration is
/// decided later by the cross-linker. A missing annotation becomes the
/// [`UNKNOWN_TYPE`] leaf.
pub fn decompose(ty: Option<&TypeExpr>) -> TypeShape {
    match ty {
        None => TypeShape::leaf(UNKNOWN_TYPE),
        Some(TypeExpr::Reference { name }) => TypeShape::leaf(name.clone()),
        Some(TypeExpr::Array { element }) => {
            let mut shape = decompose(Some(element.as_ref()));
            shape.push_text("[]");
            shape
        }
        // Intersections share the union separator.
        Some(TypeExpr::Union { members } | TypeExpr::Intersection { members }) => {
            let mut shape = TypeShape::default();
            for (i, member) in members.iter().enumerate() {
                if i > 0 {
                    shape.push_text(MEMBER_SEPARATOR);
                }
                shape.append(decompose(Some(member)));
            }
            shape
        }
        Some(TypeExpr::Literal { text }) => TypeShape::leaf(text.clone()),
    }
}
