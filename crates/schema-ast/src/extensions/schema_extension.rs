use crate::directives::ManipulatorResult;
use crate::DocumentAst;

/// A cross-cutting, schema-wide rewrite that runs once after every directive
/// has been applied and the pagination info types have been installed.
pub trait SchemaExtension: Send + Sync {
    /// Name used to identify this extension in logs and errors.
    fn name(&self) -> &str;

    fn manipulate_schema(&self, document: DocumentAst) -> ManipulatorResult<DocumentAst>;
}

/// Adapts a closure into a named [`SchemaExtension`].
pub struct FnSchemaExtension<F> {
    manipulate_fn: F,
    name: String,
}
impl<F> FnSchemaExtension<F>
where
    F: Fn(DocumentAst) -> ManipulatorResult<DocumentAst> + Send + Sync,
{
    pub fn new(name: impl Into<String>, manipulate_fn: F) -> Self {
        Self {
            manipulate_fn,
            name: name.into(),
        }
    }
}

impl<F> SchemaExtension for FnSchemaExtension<F>
where
    F: Fn(DocumentAst) -> ManipulatorResult<DocumentAst> + Send + Sync,
{
    fn name(&self) -> &str {
        self.name.as_str()
    }

    fn manipulate_schema(&self, document: DocumentAst) -> ManipulatorResult<DocumentAst> {
        (self.manipulate_fn)(document)
    }
}
