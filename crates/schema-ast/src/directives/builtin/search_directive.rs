use crate::ast;
use crate::directives::ArgManipulator;
use crate::directives::DirectiveArgs;
use crate::directives::ManipulatorError;
use crate::directives::ManipulatorResult;
use crate::directives::builtin::named_type;
use crate::DocumentAst;

/// `@search(within: String)` marks a `String` argument as a full-text search
/// term, optionally restricted to a custom index (`within`).
///
/// Query filtering happens at execution time. At compile time the directive
/// checks that it is applied to a `String`/`String!` argument and that
/// `within`, when given, is a string.
#[derive(Clone, Copy, Debug, Default)]
pub struct SearchDirective;
impl SearchDirective {
    pub const NAME: &'static str = "search";
}

#[inherent::inherent]
impl ArgManipulator for SearchDirective {
    pub fn manipulate_arg(
        &self,
        directive: &ast::schema::Directive,
        arg: &ast::schema::InputValue,
        parent_field: &ast::schema::Field,
        parent_type: &ast::schema::ObjectType,
        document: DocumentAst,
        _original_document: &DocumentAst,
    ) -> ManipulatorResult<DocumentAst> {
        if named_type(&arg.value_type) != Some("String") {
            return Err(ManipulatorError::InvalidTarget {
                directive_name: directive.name.to_string(),
                target: format!("{}.{}({})", parent_type.name, parent_field.name, arg.name),
                reason: "search terms must be `String` arguments".to_string(),
            });
        }
        DirectiveArgs::optional_string(directive, "within")?;
        Ok(document)
    }
}
