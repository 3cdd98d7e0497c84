use crate::ast;
use crate::directives::ManipulatorError;
use crate::file_reader;
use std::path::PathBuf;

/// Everything that can abort a compile. Compilation is all-or-nothing: no
/// partially transformed [`DocumentAst`](crate::DocumentAst) is ever returned
/// alongside one of these.
#[derive(Debug, PartialEq, thiserror::Error)]
pub enum SchemaAstError {
    #[error(
        "`extend type {type_name}` at {extension_position} extends a type \
        that is not defined"
    )]
    ExtensionOfUndefinedType {
        type_name: String,
        extension_position: ast::Pos,
    },

    #[error("failed to parse schema fragment: {err}\n---\n{fragment}\n---")]
    FragmentParseError {
        fragment: String,
        err: String,
    },

    #[error(
        "`extend type {type_name}` at {extension_position} cannot extend \
        `{type_name}` because it is a {base_kind} type"
    )]
    InvalidExtensionType {
        type_name: String,
        base_kind: crate::document::TypeKind,
        extension_position: ast::Pos,
    },

    #[error("`@{directive_name}` at {directive_position} failed: {err}")]
    ManipulatorFailed {
        directive_name: String,
        directive_position: ast::Pos,
        err: Box<ManipulatorError>,
    },

    #[error("{}{err}", file.as_ref().map_or(String::new(), |f| format!("{f:?}: ")))]
    ParseError {
        file: Option<PathBuf>,
        err: String,
    },

    #[error("schema extension `{extension_name}` failed: {err}")]
    SchemaExtensionFailed {
        extension_name: String,
        err: Box<ManipulatorError>,
    },

    #[error(transparent)]
    SchemaFileReadError(#[from] file_reader::ReadContentError),

    #[error("expected exactly one {expected} in schema fragment:\n---\n{fragment}\n---")]
    UnexpectedFragmentDefinition {
        expected: &'static str,
        fragment: String,
    },
}
impl SchemaAstError {
    pub(crate) fn manipulator_failed(
        directive: &ast::schema::Directive,
        err: ManipulatorError,
    ) -> Self {
        Self::ManipulatorFailed {
            directive_name: directive.name.to_string(),
            directive_position: directive.position,
            err: Box::new(err),
        }
    }
}
