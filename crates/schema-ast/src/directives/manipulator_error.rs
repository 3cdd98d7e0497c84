use crate::SchemaAstError;

pub type ManipulatorResult<T> = std::result::Result<T, ManipulatorError>;

/// Signalled by a capability provider that refuses to transform the schema.
#[derive(Debug, PartialEq, thiserror::Error)]
pub enum ManipulatorError {
    #[error("{0}")]
    Custom(String),

    #[error("a definition named `{name}` already exists")]
    DefinitionConflict {
        name: String,
    },

    #[error("invalid value for argument `{argument}` of `@{directive_name}`: {reason}")]
    InvalidDirectiveArgument {
        directive_name: String,
        argument: String,
        reason: String,
    },

    #[error("`@{directive_name}` cannot be applied to `{target}`: {reason}")]
    InvalidTarget {
        directive_name: String,
        target: String,
        reason: String,
    },

    #[error(transparent)]
    Schema(#[from] Box<SchemaAstError>),
}
impl std::convert::From<SchemaAstError> for ManipulatorError {
    fn from(err: SchemaAstError) -> Self {
        Self::Schema(Box::new(err))
    }
}
