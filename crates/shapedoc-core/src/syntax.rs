//! Input syntax tree for documentation generation
//!
//! This is the boundary between shapedoc and whatever parser produced the
//! declarations. An adapter around the host parser builds these values once
//! (or serializes them as JSON); the rest of the pipeline only ever reads them.

use serde::{Deserialize, Serialize};

/// A parsed source file: its top-level statements in source order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SourceFile {
    /// Top-level statements
    #[serde(default)]
    pub statements: Vec<Statement>,
}

/// A top-level statement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Statement {
    /// `interface Name { ... }`
    Interface(InterfaceStatement),
    /// `type Name = ...`
    TypeAlias(TypeAliasStatement),
    /// `import ... from "module"`
    Import(ImportStatement),
    /// Anything else (functions, variables, classes, ...)
    Other {
        /// Source text of the statement, if the adapter kept it
        #[serde(default)]
        text: String,
    },
}

/// An interface declaration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterfaceStatement {
    /// Interface name
    pub name: String,
    /// Whether the statement carries an `export` modifier
    #[serde(default)]
    pub exported: bool,
    /// Attached documentation comment
    #[serde(default)]
    pub doc: CommentMeta,
    /// Members in source order
    #[serde(default)]
    pub members: Vec<Member>,
}

/// A type alias declaration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeAliasStatement {
    /// Alias name
    pub name: String,
    /// Whether the statement carries an `export` modifier
    #[serde(default)]
    pub exported: bool,
    /// Attached documentation comment
    #[serde(default)]
    pub doc: CommentMeta,
    /// The aliased type expression
    #[serde(default, rename = "type")]
    pub ty: Option<TypeExpr>,
}

/// An import statement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImportStatement {
    /// Module specifier (`"./user"`)
    pub module: String,
}

/// A member of an interface body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Member {
    /// `name?: Type`
    Property(PropertySignature),
    /// `name(args): Ret`
    Method {
        /// Method name
        name: String,
    },
    /// `[key: string]: Type`
    IndexSignature {
        /// Source text
        #[serde(default)]
        text: String,
    },
    /// `(args): Ret`
    CallSignature {
        /// Source text
        #[serde(default)]
        text: String,
    },
    /// `new (args): Ret`
    ConstructSignature {
        /// Source text
        #[serde(default)]
        text: String,
    },
}

impl Member {
    /// Human-readable description used in diagnostics
    pub fn describe(&self) -> String {
        match self {
            Member::Property(prop) => format!("property `{}`", prop.name),
            Member::Method { name } => format!("method `{}`", name),
            Member::IndexSignature { text } => described("index signature", text),
            Member::CallSignature { text } => described("call signature", text),
            Member::ConstructSignature { text } => described("construct signature", text),
        }
    }
}

fn described(kind: &str, text: &str) -> String {
    if text.is_empty() {
        kind.to_string()
    } else {
        format!("{} `{}`", kind, text)
    }
}

/// A property signature inside an interface
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertySignature {
    /// Property name
    pub name: String,
    /// Whether the property is marked with `?`
    #[serde(default)]
    pub optional: bool,
    /// Declared type; `None` when the annotation is missing
    #[serde(default, rename = "type")]
    pub ty: Option<TypeExpr>,
    /// Attached documentation comment
    #[serde(default)]
    pub doc: CommentMeta,
}

/// A type expression
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum TypeExpr {
    /// A named type (`User`, `string`)
    Reference {
        /// Referenced name
        name: String,
    },
    /// `T[]`
    Array {
        /// Element type
        element: Box<TypeExpr>,
    },
    /// `A | B`
    Union {
        /// Members, left to right
        members: Vec<TypeExpr>,
    },
    /// `A & B`
    Intersection {
        /// Members, left to right
        members: Vec<TypeExpr>,
    },
    /// Any other shape, kept as its source text (`'admin'`, `42`, `[A, B]`)
    Literal {
        /// Source text
        text: String,
    },
}

impl TypeExpr {
    /// Create a named reference
    #[must_use]
    pub fn reference(name: impl Into<String>) -> Self {
        TypeExpr::Reference { name: name.into() }
    }

    /// Create an array of `element`
    #[must_use]
    pub fn array(element: TypeExpr) -> Self {
        TypeExpr::Array {
            element: Box::new(element),
        }
    }

    /// Create a union
    #[must_use]
    pub fn union(members: Vec<TypeExpr>) -> Self {
        TypeExpr::Union { members }
    }

    /// Create an intersection
    #[must_use]
    pub fn intersection(members: Vec<TypeExpr>) -> Self {
        TypeExpr::Intersection { members }
    }

    /// Create an opaque literal
    #[must_use]
    pub fn literal(text: impl Into<String>) -> Self {
        TypeExpr::Literal { text: text.into() }
    }
}

/// Comment metadata attached to a declaration or property
///
/// Deserializes either from `{ "fragments": [...], "tags": [...] }` or from a
/// raw JSDoc string, which is split with [`CommentMeta::from_jsdoc`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawComment")]
pub struct CommentMeta {
    /// Untagged free-text fragments
    pub fragments: Vec<String>,
    /// Tagged fragments (`@example`, `@default`, ...)
    pub tags: Vec<DocTag>,
}

impl CommentMeta {
    /// Comment metadata with only free text
    #[must_use]
    pub fn text(fragment: impl Into<String>) -> Self {
        Self {
            fragments: vec![fragment.into()],
            tags: Vec::new(),
        }
    }

    /// Add a tag
    #[must_use]
    pub fn with_tag(mut self, name: impl Into<String>, text: impl Into<String>) -> Self {
        self.tags.push(DocTag {
            name: name.into(),
            text: Some(text.into()),
        });
        self
    }

    /// Check if there is no comment at all
    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty() && self.tags.is_empty()
    }
}

/// A tagged comment fragment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocTag {
    /// Tag name without the `@`
    pub name: String,
    /// Text following the tag
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawComment {
    Jsdoc(String),
    Structured {
        #[serde(default)]
        fragments: Vec<String>,
        #[serde(default)]
        tags: Vec<DocTag>,
    },
}

impl From<RawComment> for CommentMeta {
    fn from(raw: RawComment) -> Self {
        match raw {
            RawComment::Jsdoc(text) => CommentMeta::from_jsdoc(&text),
            RawComment::Structured { fragments, tags } => CommentMeta { fragments, tags },
        }
    }
}
