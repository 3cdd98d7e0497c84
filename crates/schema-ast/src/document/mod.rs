mod document_ast;
mod partial_parser;
mod type_kind;
mod type_node;
mod type_node_ext;

pub use document_ast::DocumentAst;
pub use partial_parser::PartialParser;
pub use type_kind::TypeKind;
pub use type_node::ExtensionId;
pub use type_node::TypeNode;
pub use type_node::TypeNodeId;
pub use type_node_ext::TypeNodeExt;

#[cfg(test)]
mod tests;
