use crate::ast;

/// The kind of a type definition or type extension, without any of the
/// corresponding AST data.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum TypeKind {
    Enum,
    InputObject,
    Interface,
    Object,
    Scalar,
    Union,
}
impl TypeKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Enum => "Enum",
            Self::InputObject => "InputObject",
            Self::Interface => "Interface",
            Self::Object => "Object",
            Self::Scalar => "Scalar",
            Self::Union => "Union",
        }
    }
}
impl std::fmt::Display for TypeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
impl std::convert::From<&ast::schema::TypeDefinition> for TypeKind {
    fn from(value: &ast::schema::TypeDefinition) -> Self {
        use ast::schema::TypeDefinition;
        match value {
            TypeDefinition::Enum(_) => TypeKind::Enum,
            TypeDefinition::InputObject(_) => TypeKind::InputObject,
            TypeDefinition::Interface(_) => TypeKind::Interface,
            TypeDefinition::Object(_) => TypeKind::Object,
            TypeDefinition::Scalar(_) => TypeKind::Scalar,
            TypeDefinition::Union(_) => TypeKind::Union,
        }
    }
}
impl std::convert::From<&ast::schema::TypeExtension> for TypeKind {
    fn from(value: &ast::schema::TypeExtension) -> Self {
        use ast::schema::TypeExtension;
        match value {
            TypeExtension::Enum(_) => TypeKind::Enum,
            TypeExtension::InputObject(_) => TypeKind::InputObject,
            TypeExtension::Interface(_) => TypeKind::Interface,
            TypeExtension::Object(_) => TypeKind::Object,
            TypeExtension::Scalar(_) => TypeKind::Scalar,
            TypeExtension::Union(_) => TypeKind::Union,
        }
    }
}
