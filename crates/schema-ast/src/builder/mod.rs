mod ast_builder;
mod compile_options;
mod pagination_info_types;

pub use ast_builder::AstBuilder;
pub use compile_options::CompileOptions;
pub use compile_options::ExtensionMergePolicy;
pub use pagination_info_types::add_pagination_info_types;
pub use pagination_info_types::PAGE_INFO_TYPE_NAME;
pub use pagination_info_types::PAGINATOR_INFO_TYPE_NAME;

#[cfg(test)]
mod tests;
