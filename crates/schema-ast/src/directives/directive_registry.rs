use crate::ast;
use crate::directives::ArgManipulator;
use crate::directives::DirectiveCapability;
use crate::directives::FieldManipulator;
use crate::directives::ManipulatorResult;
use crate::directives::NodeManipulator;
use crate::directives::ResolvedManipulator;
use crate::directives::builtin;
use crate::document::TypeNode;
use crate::DocumentAst;
use indexmap::IndexMap;
use smallvec::SmallVec;
use std::sync::Arc;

pub type ResolvedManipulators<M> = SmallVec<[ResolvedManipulator<M>; 4]>;

/// Maps directive names to the capabilities (node, field and/or arg
/// manipulators) they provide.
///
/// A registry is built once up front and then only read from while compiling,
/// so a single registry can be shared by any number of concurrent compiles.
#[derive(Clone, Debug, Default)]
pub struct DirectiveRegistry {
    capabilities: IndexMap<String, Vec<DirectiveCapability>>,
}
impl DirectiveRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry preloaded with the built-in `@group`, `@paginate`, `@rules`
    /// and `@search` directives.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        builtin::register_builtins(&mut registry);
        registry
    }

    /// All capabilities registered for `directive_name`, in registration
    /// order.
    pub fn capabilities(&self, directive_name: &str) -> &[DirectiveCapability] {
        self.capabilities
            .get(directive_name)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn directive_names(&self) -> impl Iterator<Item = &str> {
        self.capabilities.keys().map(String::as_str)
    }

    pub fn is_registered(&self, directive_name: &str) -> bool {
        self.capabilities.contains_key(directive_name)
    }

    pub fn register(
        &mut self,
        directive_name: impl Into<String>,
        capability: DirectiveCapability,
    ) -> &mut Self {
        self.capabilities
            .entry(directive_name.into())
            .or_default()
            .push(capability);
        self
    }

    pub fn register_arg_manipulator(
        &mut self,
        directive_name: impl Into<String>,
        manipulator: impl ArgManipulator + 'static,
    ) -> &mut Self {
        self.register(directive_name, DirectiveCapability::Arg(Arc::new(manipulator)))
    }

    pub fn register_field_manipulator(
        &mut self,
        directive_name: impl Into<String>,
        manipulator: impl FieldManipulator + 'static,
    ) -> &mut Self {
        self.register(directive_name, DirectiveCapability::Field(Arc::new(manipulator)))
    }

    pub fn register_node_manipulator(
        &mut self,
        directive_name: impl Into<String>,
        manipulator: impl NodeManipulator + 'static,
    ) -> &mut Self {
        self.register(directive_name, DirectiveCapability::Node(Arc::new(manipulator)))
    }

    /// Like [`DirectiveRegistry::register_arg_manipulator()`], but spells out
    /// the closure signature so that argument types can be inferred.
    pub fn register_arg_fn<F>(
        &mut self,
        directive_name: impl Into<String>,
        manipulator_fn: F,
    ) -> &mut Self
    where
        F: Fn(
            &ast::schema::Directive,
            &ast::schema::InputValue,
            &ast::schema::Field,
            &ast::schema::ObjectType,
            DocumentAst,
            &DocumentAst,
        ) -> ManipulatorResult<DocumentAst> + Send + Sync + 'static,
    {
        self.register_arg_manipulator(directive_name, manipulator_fn)
    }

    /// Like [`DirectiveRegistry::register_field_manipulator()`], but spells
    /// out the closure signature so that argument types can be inferred.
    pub fn register_field_fn<F>(
        &mut self,
        directive_name: impl Into<String>,
        manipulator_fn: F,
    ) -> &mut Self
    where
        F: Fn(
            &ast::schema::Directive,
            &ast::schema::Field,
            &ast::schema::ObjectType,
            DocumentAst,
            &DocumentAst,
        ) -> ManipulatorResult<DocumentAst> + Send + Sync + 'static,
    {
        self.register_field_manipulator(directive_name, manipulator_fn)
    }

    /// Like [`DirectiveRegistry::register_node_manipulator()`], but spells
    /// out the closure signature so that argument types can be inferred.
    pub fn register_node_fn<F>(
        &mut self,
        directive_name: impl Into<String>,
        manipulator_fn: F,
    ) -> &mut Self
    where
        F: Fn(
            &ast::schema::Directive,
            &TypeNode,
            DocumentAst,
            &DocumentAst,
        ) -> ManipulatorResult<DocumentAst> + Send + Sync + 'static,
    {
        self.register_node_manipulator(directive_name, manipulator_fn)
    }

    /// The arg manipulators provided by `directives`, ordered first by the
    /// order the directives are applied in and then by registration order.
    pub fn arg_manipulators(
        &self,
        directives: &[ast::schema::Directive],
    ) -> ResolvedManipulators<dyn ArgManipulator> {
        self.resolve(directives, |capability| match capability {
            DirectiveCapability::Arg(manipulator) => Some(manipulator.clone()),
            _ => None,
        })
    }

    /// The field manipulators provided by `directives`, ordered first by the
    /// order the directives are applied in and then by registration order.
    pub fn field_manipulators(
        &self,
        directives: &[ast::schema::Directive],
    ) -> ResolvedManipulators<dyn FieldManipulator> {
        self.resolve(directives, |capability| match capability {
            DirectiveCapability::Field(manipulator) => Some(manipulator.clone()),
            _ => None,
        })
    }

    /// The node manipulators provided by `directives`, ordered first by the
    /// order the directives are applied in and then by registration order.
    pub fn node_manipulators(
        &self,
        directives: &[ast::schema::Directive],
    ) -> ResolvedManipulators<dyn NodeManipulator> {
        self.resolve(directives, |capability| match capability {
            DirectiveCapability::Node(manipulator) => Some(manipulator.clone()),
            _ => None,
        })
    }

    fn resolve<M: ?Sized>(
        &self,
        directives: &[ast::schema::Directive],
        select: impl Fn(&DirectiveCapability) -> Option<Arc<M>>,
    ) -> ResolvedManipulators<M> {
        let mut resolved = SmallVec::new();
        for directive in directives {
            let Some(capabilities) = self.capabilities.get(directive.name.as_str()) else {
                log::trace!(
                    "No capabilities registered for `@{}`; skipping.",
                    directive.name,
                );
                continue;
            };
            for manipulator in capabilities.iter().filter_map(&select) {
                resolved.push(ResolvedManipulator {
                    directive: directive.to_owned(),
                    manipulator,
                });
            }
        }
        resolved
    }
}
