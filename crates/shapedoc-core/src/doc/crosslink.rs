//! Cross-linking for documentation
//!
//! This module resolves the leaf types of every shape either to links
//! pointing at other documented declarations or to inline text. References
//! that cannot be resolved are kept as plain text and reported; they never
//! fail the run.

use std::collections::HashMap;
use std::fmt;

use crate::diagnostics::{Diagnostic, DiagnosticSink};

use super::shape::{ShapeSegment, TypeShape, UNKNOWN_TYPE};
use super::types::Declaration;

/// Primitive type names that are never linked
const PRIMITIVE_TYPES: &[&str] = &["string", "number", "boolean"];

/// One piece of a [`LinkedTypeShape`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkedSegment {
    /// Inline text
    Text(String),
    /// Cross-reference to a documented declaration
    Link(String),
}

/// A type shape whose leaves have been resolved
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkedTypeShape {
    segments: Vec<LinkedSegment>,
}

impl LinkedTypeShape {
    /// The segments in order
    pub fn segments(&self) -> &[LinkedSegment] {
        &self.segments
    }

    /// Render the shape, formatting each link with `link`
    pub fn render(&self, link: impl Fn(&str) -> String) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                LinkedSegment::Text(text) => out.push_str(text),
                LinkedSegment::Link(name) => out.push_str(&link(name)),
            }
        }
        out
    }

    fn push_text(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        if let Some(LinkedSegment::Text(last)) = self.segments.last_mut() {
            last.push_str(text);
        } else {
            self.segments.push(LinkedSegment::Text(text.to_string()));
        }
    }

    fn push_link(&mut self, name: &str) {
        self.segments.push(LinkedSegment::Link(name.to_string()));
    }
}

impl fmt::Display for LinkedTypeShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(str::to_string))
    }
}

/// Declarations by name, in insertion order
#[derive(Debug, Clone, PartialEq)]
pub struct DeclarationSet<S = TypeShape> {
    declarations: Vec<Declaration<S>>,
    index: HashMap<String, usize>,
}

impl<S> Default for DeclarationSet<S> {
    fn default() -> Self {
        Self {
            declarations: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<S> DeclarationSet<S> {
    /// Create an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a set, keeping the first declaration of each name
    ///
    /// Later declarations with an already-used name are dropped and reported.
    pub fn build(declarations: Vec<Declaration<S>>, sink: &mut dyn DiagnosticSink) -> Self {
        let mut set = Self::new();
        for decl in declarations {
            let name = decl.name().to_string();
            if !set.insert(decl) {
                sink.emit(Diagnostic::DuplicateDeclaration { name });
            }
        }
        set
    }

    /// Insert a declaration unless its name is taken; returns whether it was inserted
    pub fn insert(&mut self, decl: Declaration<S>) -> bool {
        if self.index.contains_key(decl.name()) {
            return false;
        }
        self.index.insert(decl.name().to_string(), self.declarations.len());
        self.declarations.push(decl);
        true
    }

    /// Look up a declaration by name
    pub fn get(&self, name: &str) -> Option<&Declaration<S>> {
        self.index.get(name).map(|&i| &self.declarations[i])
    }

    /// Check if a declaration with this name exists
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Declarations in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Declaration<S>> {
        self.declarations.iter()
    }

    /// Names in insertion order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.declarations.iter().map(Declaration::name)
    }

    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }
}

/// Check if a leaf type is written inline instead of being looked up
///
/// Covers the primitive names, quoted string literals, and the placeholder
/// used for missing annotations (already reported by the extractor).
pub fn is_inline_type(name: &str) -> bool {
    PRIMITIVE_TYPES.contains(&name) || name == UNKNOWN_TYPE || is_quoted(name)
}

fn is_quoted(name: &str) -> bool {
    ['"', '\'', '`'].iter().any(|&quote| {
        name.len() >= 2 && name.starts_with(quote) && name.ends_with(quote)
    })
}

/// Move primitive and literal leaves into the template text
pub fn inline_primitives(shape: &TypeShape) -> TypeShape {
    shape.inline_leaves(is_inline_type)
}

/// Cross-linker for resolving leaf types to links
pub struct CrossLinker<'a> {
    declarations: &'a DeclarationSet,
}

impl<'a> CrossLinker<'a> {
    /// Create a linker over a set whose shapes have already been inlined
    pub fn new(declarations: &'a DeclarationSet) -> Self {
        Self { declarations }
    }

    /// Resolve declarations into a linked set, preserving their order
    pub fn resolve(
        declarations: Vec<Declaration>,
        sink: &mut dyn DiagnosticSink,
    ) -> DeclarationSet<LinkedTypeShape> {
        let set = DeclarationSet::build(declarations, sink);

        let mut inlined = DeclarationSet::new();
        for decl in set.iter() {
            inlined.insert(decl.map_shapes(|_, shape| inline_primitives(shape)));
        }

        let linker = CrossLinker::new(&inlined);
        let mut linked = DeclarationSet::new();
        for decl in inlined.iter() {
            let owner = decl.name();
            linked.insert(decl.map_shapes(|property, shape| {
                linker.link_shape(shape, owner, property, sink)
            }));
        }
        linked
    }

    /// Resolve the remaining leaves of an inlined shape
    pub fn link_shape(
        &self,
        shape: &TypeShape,
        owner: &str,
        property: Option<&str>,
        sink: &mut dyn DiagnosticSink,
    ) -> LinkedTypeShape {
        let mut linked = LinkedTypeShape::default();

        for segment in shape.segments() {
            match segment {
                ShapeSegment::Text(text) => linked.push_text(text),
                ShapeSegment::Leaf(name) if self.declarations.contains(name) => {
                    match self.alias_literal(name, &mut Vec::new()) {
                        Some(text) => linked.push_text(&text),
                        None => linked.push_link(name),
                    }
                }
                ShapeSegment::Leaf(name) => {
                    sink.emit(Diagnostic::UnresolvedReference {
                        owner: owner.to_string(),
                        property: property.map(str::to_string),
                        reference: name.clone(),
                    });
                    linked.push_text(name);
                }
            }
        }

        linked
    }

    /// Text of an alias that reduces to literal text, following other such aliases
    fn alias_literal(&self, name: &str, visiting: &mut Vec<String>) -> Option<String> {
        let Some(Declaration::TypeAlias(alias)) = self.declarations.get(name) else {
            return None;
        };
        if let Some(text) = alias.shape.literal_text() {
            return Some(text);
        }
        if visiting.iter().any(|seen| seen == name) {
            return None;
        }

        visiting.push(name.to_string());
        let text = alias
            .shape
            .segments()
            .iter()
            .map(|segment| match segment {
                ShapeSegment::Text(text) => Some(text.clone()),
                ShapeSegment::Leaf(leaf) => self.alias_literal(leaf, visiting),
            })
            .collect::<Option<String>>();
        visiting.pop();

        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::doc::comment::DocComment;
    use crate::doc::types::{InterfaceDeclaration, PropertyDeclaration, TypeAliasDeclaration};

    fn alias(name: &str, shape: TypeShape) -> Declaration {
        Declaration::TypeAlias(TypeAliasDeclaration::new(name, shape, DocComment::default()))
    }

    fn interface(name: &str, props: &[(&str, TypeShape)]) -> Declaration {
        let mut iface = InterfaceDeclaration::new(name, DocComment::default());
        for (prop, shape) in props {
            iface.properties.push(PropertyDeclaration::new(
                *prop,
                shape.clone(),
                false,
                DocComment::default(),
            ));
        }
        Declaration::Interface(iface)
    }

    fn links(shape: &LinkedTypeShape) -> Vec<&str> {
        shape
            .segments()
            .iter()
            .filter_map(|segment| match segment {
                LinkedSegment::Link(name) => Some(name.as_str()),
                LinkedSegment::Text(_) => None,
            })
            .collect()
    }

    fn property_shape<'s>(
        set: &'s DeclarationSet<LinkedTypeShape>,
        owner: &str,
        property: &str,
    ) -> &'s LinkedTypeShape {
        let Some(Declaration::Interface(iface)) = set.get(owner) else {
            panic!("expected interface {owner}");
        };
        &iface
            .properties
            .iter()
            .find(|p| p.name == property)
            .expect("property")
            .shape
    }

    #[test]
    fn test_inline_types() {
        assert!(is_inline_type("string"));
        assert!(is_inline_type("number"));
        assert!(is_inline_type("boolean"));
        assert!(is_inline_type("any"));
        assert!(is_inline_type("'admin'"));
        assert!(is_inline_type("\"x\""));
        assert!(is_inline_type("`tpl`"));
        assert!(!is_inline_type("'"));
        assert!(!is_inline_type("User"));
        assert!(!is_inline_type("Date"));
    }

    #[test]
    fn test_alias_to_primitive_is_inlined() {
        let decls = vec![
            alias("A", TypeShape::leaf("string")),
            interface("B", &[("x", TypeShape::leaf("A"))]),
        ];
        let mut sink: Vec<Diagnostic> = Vec::new();
        let linked = CrossLinker::resolve(decls, &mut sink);

        let x = property_shape(&linked, "B", "x");
        assert!(links(x).is_empty());
        assert_eq!(x.to_string(), "string");
        assert!(sink.is_empty());
    }

    #[test]
    fn test_unresolved_reference_is_text() {
        let decls = vec![interface("C", &[("y", TypeShape::leaf("D"))])];
        let mut sink: Vec<Diagnostic> = Vec::new();
        let linked = CrossLinker::resolve(decls, &mut sink);

        let y = property_shape(&linked, "C", "y");
        assert_eq!(y.segments(), &[LinkedSegment::Text("D".to_string())]);
        assert_eq!(
            sink,
            vec![Diagnostic::UnresolvedReference {
                owner: "C".to_string(),
                property: Some("y".to_string()),
                reference: "D".to_string(),
            }]
        );
    }

    #[test]
    fn test_link_to_interface() {
        let shape = TypeShape::from_parts(&["User", "null"], "{}[] | {}").unwrap();
        let decls = vec![
            interface("User", &[("id", TypeShape::leaf("string"))]),
            interface("Team", &[("members", shape)]),
            alias("Null", TypeShape::leaf("null")),
        ];
        let mut sink: Vec<Diagnostic> = Vec::new();
        let linked = CrossLinker::resolve(decls, &mut sink);

        let members = property_shape(&linked, "Team", "members");
        assert_eq!(
            members.segments(),
            &[
                LinkedSegment::Link("User".to_string()),
                LinkedSegment::Text("[] | null".to_string()),
            ]
        );
        assert_eq!(sink.len(), 2);
        assert!(matches!(
            &sink[0],
            Diagnostic::UnresolvedReference { owner, reference, .. } if owner == "Team" && reference == "null"
        ));
        assert!(matches!(
            &sink[1],
            Diagnostic::UnresolvedReference { owner, property: None, .. } if owner == "Null"
        ));
    }

    #[test]
    fn test_alias_with_reference_is_linked() {
        let decls = vec![
            interface("User", &[]),
            alias("Users", TypeShape::from_parts(&["User"], "{}[]").unwrap()),
            interface("Page", &[("items", TypeShape::leaf("Users"))]),
        ];
        let linked = CrossLinker::resolve(decls, &mut Vec::<Diagnostic>::new());
        assert_eq!(links(property_shape(&linked, "Page", "items")), vec!["Users"]);

        let Some(Declaration::TypeAlias(users)) = linked.get("Users") else {
            panic!("expected alias");
        };
        assert_eq!(links(&users.shape), vec!["User"]);
        assert_eq!(users.shape.to_string(), "User[]");
    }

    #[test]
    fn test_literal_aliases_chain() {
        let decls = vec![
            alias("Role", TypeShape::from_parts(&["'admin'", "'user'"], "{} | {}").unwrap()),
            alias("AnyRole", TypeShape::leaf("Role")),
            interface("Account", &[("role", TypeShape::leaf("AnyRole"))]),
        ];
        let linked = CrossLinker::resolve(decls, &mut Vec::<Diagnostic>::new());
        let role = property_shape(&linked, "Account", "role");
        assert!(links(role).is_empty());
        assert_eq!(role.to_string(), "'admin' | 'user'");
    }

    #[test]
    fn test_self_referencing_alias_is_linked() {
        let decls = vec![
            alias("Tree", TypeShape::from_parts(&["Tree"], "{}[]").unwrap()),
            interface("Root", &[("tree", TypeShape::leaf("Tree"))]),
        ];
        let mut sink: Vec<Diagnostic> = Vec::new();
        let linked = CrossLinker::resolve(decls, &mut sink);
        assert_eq!(links(property_shape(&linked, "Root", "tree")), vec!["Tree"]);
        assert!(sink.is_empty());
    }

    #[test]
    fn test_duplicate_keeps_first() {
        let decls = vec![
            alias("Id", TypeShape::leaf("string")),
            alias("Other", TypeShape::leaf("number")),
            alias("Id", TypeShape::leaf("number")),
        ];
        let mut sink: Vec<Diagnostic> = Vec::new();
        let linked = CrossLinker::resolve(decls, &mut sink);

        assert_eq!(linked.names().collect::<Vec<_>>(), vec!["Id", "Other"]);
        let Some(Declaration::TypeAlias(id)) = linked.get("Id") else {
            panic!("expected alias");
        };
        assert_eq!(id.shape.to_string(), "string");
        assert_eq!(
            sink,
            vec![Diagnostic::DuplicateDeclaration {
                name: "Id".to_string()
            }]
        );
    }

    #[test]
    fn test_render_with_custom_links() {
        let decls = vec![
            interface("A", &[]),
            alias("L", TypeShape::from_parts(&["A", "string"], "{} | {}[]").unwrap()),
        ];
        let linked = CrossLinker::resolve(decls, &mut Vec::<Diagnostic>::new());
        let Some(Declaration::TypeAlias(l)) = linked.get("L") else {
            panic!("expected alias");
        };
        assert_eq!(l.shape.render(|name| format!("<{name}>")), "<A> | string[]");
    }
}
