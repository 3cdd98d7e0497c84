mod extension_registry;
mod schema_extension;

pub use extension_registry::ExtensionRegistry;
pub use schema_extension::FnSchemaExtension;
pub use schema_extension::SchemaExtension;
