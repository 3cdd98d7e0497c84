use crate::ast;
use crate::directives::DirectiveArgs;
use crate::directives::ManipulatorError;
use crate::directives::ManipulatorResult;
use crate::directives::NodeManipulator;
use crate::document::TypeNode;
use crate::DocumentAst;

const NAMESPACE_DIRECTIVE: &str = "namespace";

/// `@group(namespace: String!)` on an object or interface type (or an
/// extension of one) applies `@namespace(value: ...)` to every field declared
/// on that node which doesn't already carry its own `@namespace`.
///
/// Because it runs before extensions are merged, a `@group` on an
/// `extend type` only affects the fields declared in that extension.
#[derive(Clone, Copy, Debug, Default)]
pub struct GroupDirective;
impl GroupDirective {
    pub const NAME: &'static str = "group";
}

#[inherent::inherent]
impl NodeManipulator for GroupDirective {
    pub fn manipulate_node(
        &self,
        directive: &ast::schema::Directive,
        node: &TypeNode,
        mut document: DocumentAst,
        _original_document: &DocumentAst,
    ) -> ManipulatorResult<DocumentAst> {
        let namespace = DirectiveArgs::required_string(directive, "namespace")?;

        let Some(fields) = document.type_node_fields_mut(&node.id()) else {
            return Err(ManipulatorError::InvalidTarget {
                directive_name: directive.name.to_string(),
                target: node.name().to_string(),
                reason: format!("{} types do not declare fields", node.kind()),
            });
        };

        let ungrouped_fields = fields.iter_mut().filter(|field| {
            !field.directives.iter().any(|d| d.name == NAMESPACE_DIRECTIVE)
        });
        for field in ungrouped_fields {
            field.directives.push(ast::schema::Directive {
                position: directive.position,
                name: NAMESPACE_DIRECTIVE.to_string(),
                arguments: vec![(
                    "value".to_string(),
                    ast::schema::Value::String(namespace.to_string()),
                )],
            });
        }

        Ok(document)
    }
}
