//! Compile-time capability providers for the directives every
//! [`DirectiveRegistry::with_builtins()`] registry understands.

mod group_directive;
mod paginate_directive;
mod rules_directive;
mod search_directive;

pub use group_directive::GroupDirective;
pub use paginate_directive::PaginateDirective;
pub use paginate_directive::PaginationType;
pub use rules_directive::RulesDirective;
pub use search_directive::SearchDirective;

use crate::ast;
use crate::directives::DirectiveRegistry;

pub(crate) fn register_builtins(registry: &mut DirectiveRegistry) {
    registry
        .register_node_manipulator(GroupDirective::NAME, GroupDirective)
        .register_field_manipulator(PaginateDirective::NAME, PaginateDirective)
        .register_arg_manipulator(RulesDirective::NAME, RulesDirective)
        .register_arg_manipulator(SearchDirective::NAME, SearchDirective);
}

/// Strips a single level of non-null wrapping.
fn nullable_type(type_: &ast::schema::Type) -> &ast::schema::Type {
    match type_ {
        ast::schema::Type::NonNullType(inner) => inner.as_ref(),
        other => other,
    }
}

/// `T`, `T!` -> `Some("T")`; list types -> `None`.
fn named_type(type_: &ast::schema::Type) -> Option<&str> {
    match nullable_type(type_) {
        ast::schema::Type::NamedType(name) => Some(name.as_str()),
        _ => None,
    }
}

/// `[T]`, `[T!]`, `[T]!`, `[T!]!` -> `Some("T")`; anything else -> `None`.
fn list_item_type(type_: &ast::schema::Type) -> Option<&str> {
    match nullable_type(type_) {
        ast::schema::Type::ListType(item_type) => named_type(item_type),
        _ => None,
    }
}

#[cfg(test)]
mod tests;
