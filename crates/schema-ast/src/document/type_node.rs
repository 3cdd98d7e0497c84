use crate::ast;
use crate::document::TypeKind;
use crate::document::TypeNodeExt;

/// Stable handle to a type extension recorded in a
/// [`DocumentAst`](crate::DocumentAst).
///
/// Type extensions have no unique name of their own (any number of them may
/// extend the same base type), so they are addressed by the order in which
/// they were added to the document instead.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct ExtensionId(pub(crate) usize);
impl ExtensionId {
    pub fn index(&self) -> usize {
        self.0
    }
}

/// Identifies the node a node-level manipulator is invoked for so that it
/// can be re-read from (or written back into) the current document.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum TypeNodeId {
    Definition(String),
    Extension(ExtensionId),
}

/// An owned snapshot of either a type definition or a type extension, as
/// handed to a [`NodeManipulator`](crate::directives::NodeManipulator).
#[derive(Clone, Debug, PartialEq)]
pub enum TypeNode {
    Definition(ast::schema::TypeDefinition),
    Extension(ExtensionId, ast::schema::TypeExtension),
}
impl TypeNode {
    pub fn directives(&self) -> &[ast::schema::Directive] {
        match self {
            Self::Definition(def) => def.directives(),
            Self::Extension(_, ext) => ext.directives(),
        }
    }

    pub fn fields(&self) -> Option<&[ast::schema::Field]> {
        match self {
            Self::Definition(def) => def.fields(),
            Self::Extension(_, ext) => ext.fields(),
        }
    }

    pub fn id(&self) -> TypeNodeId {
        match self {
            Self::Definition(def) => TypeNodeId::Definition(def.name().to_string()),
            Self::Extension(id, _) => TypeNodeId::Extension(*id),
        }
    }

    pub fn is_extension(&self) -> bool {
        matches!(self, Self::Extension(..))
    }

    pub fn kind(&self) -> TypeKind {
        match self {
            Self::Definition(def) => def.kind(),
            Self::Extension(_, ext) => ext.kind(),
        }
    }

    /// The name of the type; for an extension this is the name of the base
    /// type being extended.
    pub fn name(&self) -> &str {
        match self {
            Self::Definition(def) => def.name(),
            Self::Extension(_, ext) => ext.name(),
        }
    }

    pub fn position(&self) -> ast::Pos {
        match self {
            Self::Definition(def) => def.position(),
            Self::Extension(_, ext) => ext.position(),
        }
    }
}
