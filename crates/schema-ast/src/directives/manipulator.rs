use crate::ast;
use crate::directives::ManipulatorResult;
use crate::DocumentAst;
use crate::document::TypeNode;
use std::sync::Arc;

/// A directive capability that rewrites the document in response to a
/// directive applied to a type definition or type extension.
///
/// Node manipulators run before type extensions are merged into their base
/// types, so they see extensions as separate nodes.
pub trait NodeManipulator: Send + Sync {
    fn manipulate_node(
        &self,
        directive: &ast::schema::Directive,
        node: &TypeNode,
        document: DocumentAst,
        original_document: &DocumentAst,
    ) -> ManipulatorResult<DocumentAst>;
}
impl<F> NodeManipulator for F
where
    F: Fn(
        &ast::schema::Directive,
        &TypeNode,
        DocumentAst,
        &DocumentAst,
    ) -> ManipulatorResult<DocumentAst> + Send + Sync,
{
    fn manipulate_node(
        &self,
        directive: &ast::schema::Directive,
        node: &TypeNode,
        document: DocumentAst,
        original_document: &DocumentAst,
    ) -> ManipulatorResult<DocumentAst> {
        self(directive, node, document, original_document)
    }
}

/// A directive capability that rewrites the document in response to a
/// directive applied to a field of an object type.
///
/// Field manipulators run after type extensions have been merged, so
/// `parent_type` always carries its full field list. `field` borrows from
/// `parent_type.fields`; [`DocumentAst::field_in_parent_mut()`] finds it in
/// the document even when a sibling shares its name.
pub trait FieldManipulator: Send + Sync {
    fn manipulate_field(
        &self,
        directive: &ast::schema::Directive,
        field: &ast::schema::Field,
        parent_type: &ast::schema::ObjectType,
        document: DocumentAst,
        original_document: &DocumentAst,
    ) -> ManipulatorResult<DocumentAst>;
}
impl<F> FieldManipulator for F
where
    F: Fn(
        &ast::schema::Directive,
        &ast::schema::Field,
        &ast::schema::ObjectType,
        DocumentAst,
        &DocumentAst,
    ) -> ManipulatorResult<DocumentAst> + Send + Sync,
{
    fn manipulate_field(
        &self,
        directive: &ast::schema::Directive,
        field: &ast::schema::Field,
        parent_type: &ast::schema::ObjectType,
        document: DocumentAst,
        original_document: &DocumentAst,
    ) -> ManipulatorResult<DocumentAst> {
        self(directive, field, parent_type, document, original_document)
    }
}

/// A directive capability that rewrites the document in response to a
/// directive applied to an argument of a field of an object type.
pub trait ArgManipulator: Send + Sync {
    fn manipulate_arg(
        &self,
        directive: &ast::schema::Directive,
        arg: &ast::schema::InputValue,
        parent_field: &ast::schema::Field,
        parent_type: &ast::schema::ObjectType,
        document: DocumentAst,
        original_document: &DocumentAst,
    ) -> ManipulatorResult<DocumentAst>;
}
impl<F> ArgManipulator for F
where
    F: Fn(
        &ast::schema::Directive,
        &ast::schema::InputValue,
        &ast::schema::Field,
        &ast::schema::ObjectType,
        DocumentAst,
        &DocumentAst,
    ) -> ManipulatorResult<DocumentAst> + Send + Sync,
{
    fn manipulate_arg(
        &self,
        directive: &ast::schema::Directive,
        arg: &ast::schema::InputValue,
        parent_field: &ast::schema::Field,
        parent_type: &ast::schema::ObjectType,
        document: DocumentAst,
        original_document: &DocumentAst,
    ) -> ManipulatorResult<DocumentAst> {
        self(directive, arg, parent_field, parent_type, document, original_document)
    }
}

/// One capability a directive provides. A directive may be registered with
/// any number of capabilities of any kind.
#[derive(Clone)]
pub enum DirectiveCapability {
    Arg(Arc<dyn ArgManipulator>),
    Field(Arc<dyn FieldManipulator>),
    Node(Arc<dyn NodeManipulator>),
}
impl DirectiveCapability {
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Arg(_) => "arg",
            Self::Field(_) => "field",
            Self::Node(_) => "node",
        }
    }
}
impl std::fmt::Debug for DirectiveCapability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "DirectiveCapability::{}(..)", self.kind_name())
    }
}

/// A capability provider paired with the directive application that
/// selected it.
pub struct ResolvedManipulator<M: ?Sized> {
    pub directive: ast::schema::Directive,
    pub manipulator: Arc<M>,
}
impl<M: ?Sized> std::fmt::Debug for ResolvedManipulator<M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResolvedManipulator")
            .field("directive", &self.directive.name)
            .finish_non_exhaustive()
    }
}
