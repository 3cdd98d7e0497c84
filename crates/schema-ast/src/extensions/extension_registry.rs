use crate::directives::ManipulatorResult;
use crate::DocumentAst;
use crate::extensions::FnSchemaExtension;
use crate::extensions::SchemaExtension;
use crate::SchemaAstError;
use std::sync::Arc;

type Result<T> = std::result::Result<T, SchemaAstError>;

/// The ordered set of [`SchemaExtension`]s applied at the very end of a
/// compile. From the pipeline's point of view the whole registry is a single
/// opaque `DocumentAst -> DocumentAst` step.
#[derive(Clone, Default)]
pub struct ExtensionRegistry {
    extensions: Vec<Arc<dyn SchemaExtension>>,
}
impl ExtensionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.extensions.is_empty()
    }

    pub fn len(&self) -> usize {
        self.extensions.len()
    }

    /// Applies every registered extension in registration order. The first
    /// failing extension aborts the fold.
    pub fn manipulate(&self, document: DocumentAst) -> Result<DocumentAst> {
        self.extensions.iter().try_fold(document, |document, extension| {
            log::debug!("Applying schema extension `{}`.", extension.name());
            extension.manipulate_schema(document).map_err(|err| {
                SchemaAstError::SchemaExtensionFailed {
                    extension_name: extension.name().to_string(),
                    err: Box::new(err),
                }
            })
        })
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.extensions.iter().map(|extension| extension.name())
    }

    pub fn register(&mut self, extension: impl SchemaExtension + 'static) -> &mut Self {
        self.extensions.push(Arc::new(extension));
        self
    }

    pub fn register_fn<F>(
        &mut self,
        name: impl Into<String>,
        manipulate_fn: F,
    ) -> &mut Self
    where
        F: Fn(DocumentAst) -> ManipulatorResult<DocumentAst> + Send + Sync + 'static,
    {
        self.register(FnSchemaExtension::new(name, manipulate_fn))
    }
}
impl std::fmt::Debug for ExtensionRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}
