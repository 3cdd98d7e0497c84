use crate::ast;
use crate::directives::ArgManipulator;
use crate::directives::DirectiveArgs;
use crate::directives::ManipulatorError;
use crate::directives::ManipulatorResult;
use crate::DocumentAst;

/// `@rules(apply: [String!]!)` attaches validation rules to a field argument.
///
/// The rules themselves are evaluated at execution time; at compile time the
/// directive only makes sure `apply` names at least one rule, so that a
/// misconfigured argument fails the compile instead of silently accepting
/// any input.
#[derive(Clone, Copy, Debug, Default)]
pub struct RulesDirective;
impl RulesDirective {
    pub const NAME: &'static str = "rules";
}

#[inherent::inherent]
impl ArgManipulator for RulesDirective {
    pub fn manipulate_arg(
        &self,
        directive: &ast::schema::Directive,
        _arg: &ast::schema::InputValue,
        _parent_field: &ast::schema::Field,
        _parent_type: &ast::schema::ObjectType,
        document: DocumentAst,
        _original_document: &DocumentAst,
    ) -> ManipulatorResult<DocumentAst> {
        let rules = DirectiveArgs::string_list(directive, "apply")?.unwrap_or_default();
        if rules.is_empty() {
            return Err(ManipulatorError::InvalidDirectiveArgument {
                directive_name: directive.name.to_string(),
                argument: "apply".to_string(),
                reason: "at least one rule must be given".to_string(),
            });
        }
        if let Some(blank_rule) = rules.iter().find(|rule| rule.trim().is_empty()) {
            return Err(ManipulatorError::InvalidDirectiveArgument {
                directive_name: directive.name.to_string(),
                argument: "apply".to_string(),
                reason: format!("`{blank_rule}` is not a rule name"),
            });
        }
        Ok(document)
    }
}
