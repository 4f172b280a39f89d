//! Declaration extractor - walks the syntax tree and collects declarations

use crate::diagnostics::{Diagnostic, DiagnosticSink};
use crate::syntax::{InterfaceStatement, Member, Statement, TypeAliasStatement, TypeExpr};

use super::comment::DocComment;
use super::shape::{decompose, TypeShape};
use super::types::{Declaration, InterfaceDeclaration, PropertyDeclaration, TypeAliasDeclaration};

/// Extracts documentable declarations from top-level statements
pub struct DeclarationExtractor;

impl DeclarationExtractor {
    /// Extract exported interfaces and type aliases, in source order
    pub fn extract(statements: &[Statement], sink: &mut dyn DiagnosticSink) -> Vec<Declaration> {
        let mut declarations = Vec::new();

        for statement in statements {
            match statement {
                Statement::Interface(iface) => {
                    if iface.exported {
                        declarations.push(Self::extract_interface(iface, sink));
                    } else {
                        sink.emit(Diagnostic::NotExported {
                            kind: "interface",
                            name: iface.name.clone(),
                        });
                    }
                }
                Statement::TypeAlias(alias) => {
                    if alias.exported {
                        declarations.push(Self::extract_type_alias(alias, sink));
                    } else {
                        sink.emit(Diagnostic::NotExported {
                            kind: "type alias",
                            name: alias.name.clone(),
                        });
                    }
                }
                Statement::Import(import) => {
                    sink.emit(Diagnostic::ImportUnsupported {
                        module: import.module.clone(),
                    });
                }
                Statement::Other { .. } => {}
            }
        }

        declarations
    }

    fn extract_interface(iface: &InterfaceStatement, sink: &mut dyn DiagnosticSink) -> Declaration {
        let mut decl = InterfaceDeclaration::new(iface.name.clone(), DocComment::extract(&iface.doc));

        for member in &iface.members {
            let Member::Property(prop) = member else {
                sink.emit(Diagnostic::SkippedMember {
                    owner: iface.name.clone(),
                    member: member.describe(),
                });
                continue;
            };

            let shape = Self::shape_of(prop.ty.as_ref(), &iface.name, Some(&prop.name), sink);
            decl.properties.push(PropertyDeclaration::new(
                prop.name.clone(),
                shape,
                prop.optional,
                DocComment::extract(&prop.doc),
            ));
        }

        Declaration::Interface(decl)
    }

    fn extract_type_alias(alias: &TypeAliasStatement, sink: &mut dyn DiagnosticSink) -> Declaration {
        let shape = Self::shape_of(alias.ty.as_ref(), &alias.name, None, sink);
        Declaration::TypeAlias(TypeAliasDeclaration::new(
            alias.name.clone(),
            shape,
            DocComment::extract(&alias.doc),
        ))
    }

    fn shape_of(
        ty: Option<&TypeExpr>,
        owner: &str,
        property: Option<&str>,
        sink: &mut dyn DiagnosticSink,
    ) -> TypeShape {
        if ty.is_none() {
            sink.emit(Diagnostic::UnknownType {
                owner: owner.to_string(),
                property: property.map(str::to_string),
            });
        }
        decompose(ty)
    }
}
