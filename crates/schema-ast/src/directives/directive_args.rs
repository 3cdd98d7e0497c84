use crate::ast;
use crate::directives::ManipulatorError;
use crate::directives::ManipulatorResult;

/// Helpers for reading the arguments of an applied directive.
pub struct DirectiveArgs;
impl DirectiveArgs {
    pub fn value<'a>(
        directive: &'a ast::schema::Directive,
        arg_name: &str,
    ) -> Option<&'a ast::schema::Value> {
        directive.arguments
            .iter()
            .find(|(name, _)| name == arg_name)
            .map(|(_, value)| value)
    }

    /// Reads an argument given either as an enum value or as a string.
    /// Returns `None` if the argument is absent or `null`.
    pub fn enum_or_string<'a>(
        directive: &'a ast::schema::Directive,
        arg_name: &str,
    ) -> ManipulatorResult<Option<&'a str>> {
        match Self::value(directive, arg_name) {
            None | Some(ast::schema::Value::Null) => Ok(None),
            Some(ast::schema::Value::Enum(value))
            | Some(ast::schema::Value::String(value)) => Ok(Some(value.as_str())),
            Some(other) => Err(Self::invalid(
                directive,
                arg_name,
                format!("expected an enum value or a string but found `{other:?}`"),
            )),
        }
    }

    pub fn optional_string<'a>(
        directive: &'a ast::schema::Directive,
        arg_name: &str,
    ) -> ManipulatorResult<Option<&'a str>> {
        match Self::value(directive, arg_name) {
            None | Some(ast::schema::Value::Null) => Ok(None),
            Some(ast::schema::Value::String(value)) => Ok(Some(value.as_str())),
            Some(other) => Err(Self::invalid(
                directive,
                arg_name,
                format!("expected a string but found `{other:?}`"),
            )),
        }
    }

    pub fn required_string<'a>(
        directive: &'a ast::schema::Directive,
        arg_name: &str,
    ) -> ManipulatorResult<&'a str> {
        Self::optional_string(directive, arg_name)?.ok_or_else(|| Self::invalid(
            directive,
            arg_name,
            "a value is required".to_string(),
        ))
    }

    /// Reads a list-of-strings argument. A single string is accepted as a
    /// list of one (input coercion).
    pub fn string_list<'a>(
        directive: &'a ast::schema::Directive,
        arg_name: &str,
    ) -> ManipulatorResult<Option<Vec<&'a str>>> {
        match Self::value(directive, arg_name) {
            None | Some(ast::schema::Value::Null) => Ok(None),
            Some(ast::schema::Value::String(value)) => Ok(Some(vec![value.as_str()])),
            Some(ast::schema::Value::List(values)) => values.iter()
                .map(|value| match value {
                    ast::schema::Value::String(value) => Ok(value.as_str()),
                    other => Err(Self::invalid(
                        directive,
                        arg_name,
                        format!("expected a list of strings but found `{other:?}` in the list"),
                    )),
                })
                .collect::<ManipulatorResult<Vec<_>>>()
                .map(Some),
            Some(other) => Err(Self::invalid(
                directive,
                arg_name,
                format!("expected a list of strings but found `{other:?}`"),
            )),
        }
    }

    fn invalid(
        directive: &ast::schema::Directive,
        arg_name: &str,
        reason: String,
    ) -> ManipulatorError {
        ManipulatorError::InvalidDirectiveArgument {
            directive_name: directive.name.to_string(),
            argument: arg_name.to_string(),
            reason,
        }
    }
}
