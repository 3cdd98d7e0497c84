//! Compiles directive-annotated GraphQL schema documents.
//!
//! Directives applied in a schema are backed by compile-time *capabilities*
//! registered in a [`DirectiveRegistry`]. An [`AstBuilder`] runs every
//! capability against the document, merges type extensions into their base
//! types, installs the pagination info types and finally hands the document
//! to any [schema extensions](ExtensionRegistry) for last-pass rewrites.

pub mod ast;
pub mod builder;
pub mod directives;
pub mod document;
pub mod extensions;
mod file_reader;
mod schema_ast_error;

pub use builder::AstBuilder;
pub use builder::CompileOptions;
pub use directives::DirectiveRegistry;
pub use document::DocumentAst;
pub use extensions::ExtensionRegistry;
pub use file_reader::ReadContentError;
pub use schema_ast_error::SchemaAstError;

#[cfg(test)]
mod test_utils;
