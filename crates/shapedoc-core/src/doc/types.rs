//! Types for representing extracted declarations
//!
//! Declarations are generic over the shape of their types so the same model
//! carries both the raw [`TypeShape`] produced by the extractor and the
//! [`LinkedTypeShape`](super::LinkedTypeShape) produced by the cross-linker.

use super::comment::DocComment;
use super::shape::TypeShape;

/// A named documentable unit
#[derive(Debug, Clone, PartialEq)]
pub enum Declaration<S = TypeShape> {
    /// An interface with properties
    Interface(InterfaceDeclaration<S>),
    /// A type alias
    TypeAlias(TypeAliasDeclaration<S>),
}

impl<S> Declaration<S> {
    /// Name of the declaration
    pub fn name(&self) -> &str {
        match self {
            Declaration::Interface(i) => &i.name,
            Declaration::TypeAlias(a) => &a.name,
        }
    }

    /// Description paragraph, if any
    pub fn description(&self) -> Option<&str> {
        match self {
            Declaration::Interface(i) => i.description.as_deref(),
            Declaration::TypeAlias(a) => a.description.as_deref(),
        }
    }

    /// Example annotation, if any
    pub fn example(&self) -> Option<&str> {
        match self {
            Declaration::Interface(i) => i.example.as_deref(),
            Declaration::TypeAlias(a) => a.example.as_deref(),
        }
    }

    /// Convert every shape in the declaration, keeping everything else
    ///
    /// `f` receives the property name (if the shape belongs to a property)
    /// along with the shape.
    pub fn map_shapes<T>(&self, mut f: impl FnMut(Option<&str>, &S) -> T) -> Declaration<T> {
        match self {
            Declaration::Interface(i) => Declaration::Interface(InterfaceDeclaration {
                name: i.name.clone(),
                description: i.description.clone(),
                example: i.example.clone(),
                properties: i
                    .properties
                    .iter()
                    .map(|p| PropertyDeclaration {
                        name: p.name.clone(),
                        shape: f(Some(&p.name), &p.shape),
                        optional: p.optional,
                        description: p.description.clone(),
                        default: p.default.clone(),
                        example: p.example.clone(),
                    })
                    .collect(),
            }),
            Declaration::TypeAlias(a) => Declaration::TypeAlias(TypeAliasDeclaration {
                name: a.name.clone(),
                description: a.description.clone(),
                example: a.example.clone(),
                shape: f(None, &a.shape),
            }),
        }
    }
}

/// An interface declaration
#[derive(Debug, Clone, PartialEq)]
pub struct InterfaceDeclaration<S = TypeShape> {
    /// Interface name
    pub name: String,
    /// Description paragraph
    pub description: Option<String>,
    /// Example annotation
    pub example: Option<String>,
    /// Properties in source order
    pub properties: Vec<PropertyDeclaration<S>>,
}

/// A type alias declaration
#[derive(Debug, Clone, PartialEq)]
pub struct TypeAliasDeclaration<S = TypeShape> {
    /// Alias name
    pub name: String,
    /// Description paragraph
    pub description: Option<String>,
    /// Example annotation
    pub example: Option<String>,
    /// The aliased type
    pub shape: S,
}

/// A property of an interface
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyDeclaration<S = TypeShape> {
    /// Property name
    pub name: String,
    /// Declared type
    pub shape: S,
    /// Marked with `?`
    pub optional: bool,
    /// Description paragraph
    pub description: Option<String>,
    /// Default value annotation
    pub default: Option<String>,
    /// Example annotation
    pub example: Option<String>,
}

impl<S> InterfaceDeclaration<S> {
    /// Create an interface without properties
    pub fn new(name: impl Into<String>, doc: DocComment) -> Self {
        Self {
            name: name.into(),
            description: doc.description,
            example: doc.example,
            properties: Vec::new(),
        }
    }
}

impl<S> TypeAliasDeclaration<S> {
    /// Create a type alias
    pub fn new(name: impl Into<String>, shape: S, doc: DocComment) -> Self {
        Self {
            name: name.into(),
            description: doc.description,
            example: doc.example,
            shape,
        }
    }
}

impl<S> PropertyDeclaration<S> {
    /// Create a property
    pub fn new(name: impl Into<String>, shape: S, optional: bool, doc: DocComment) -> Self {
        Self {
            name: name.into(),
            shape,
            optional,
            description: doc.description,
            default: doc.default,
            example: doc.example,
        }
    }
}
