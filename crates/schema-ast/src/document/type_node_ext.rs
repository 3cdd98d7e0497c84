use crate::ast;
use crate::document::TypeKind;

/// Uniform accessors over the parts of a type definition or type extension
/// that the transformation passes care about.
pub trait TypeNodeExt {
    fn directives(&self) -> &[ast::schema::Directive];
    fn directives_mut(&mut self) -> &mut Vec<ast::schema::Directive>;

    /// The output fields declared on this node, or `None` for kinds that
    /// don't declare output fields (enums, input objects, scalars, unions).
    fn fields(&self) -> Option<&[ast::schema::Field]>;
    fn fields_mut(&mut self) -> Option<&mut Vec<ast::schema::Field>>;

    fn kind(&self) -> TypeKind;
    fn name(&self) -> &str;
    fn position(&self) -> ast::Pos;
}

impl TypeNodeExt for ast::schema::TypeDefinition {
    fn directives(&self) -> &[ast::schema::Directive] {
        use ast::schema::TypeDefinition;
        match self {
            TypeDefinition::Enum(def) => &def.directives,
            TypeDefinition::InputObject(def) => &def.directives,
            TypeDefinition::Interface(def) => &def.directives,
            TypeDefinition::Object(def) => &def.directives,
            TypeDefinition::Scalar(def) => &def.directives,
            TypeDefinition::Union(def) => &def.directives,
        }
    }

    fn directives_mut(&mut self) -> &mut Vec<ast::schema::Directive> {
        use ast::schema::TypeDefinition;
        match self {
            TypeDefinition::Enum(def) => &mut def.directives,
            TypeDefinition::InputObject(def) => &mut def.directives,
            TypeDefinition::Interface(def) => &mut def.directives,
            TypeDefinition::Object(def) => &mut def.directives,
            TypeDefinition::Scalar(def) => &mut def.directives,
            TypeDefinition::Union(def) => &mut def.directives,
        }
    }

    fn fields(&self) -> Option<&[ast::schema::Field]> {
        use ast::schema::TypeDefinition;
        match self {
            TypeDefinition::Interface(def) => Some(&def.fields),
            TypeDefinition::Object(def) => Some(&def.fields),
            TypeDefinition::Enum(_)
            | TypeDefinition::InputObject(_)
            | TypeDefinition::Scalar(_)
            | TypeDefinition::Union(_) => None,
        }
    }

    fn fields_mut(&mut self) -> Option<&mut Vec<ast::schema::Field>> {
        use ast::schema::TypeDefinition;
        match self {
            TypeDefinition::Interface(def) => Some(&mut def.fields),
            TypeDefinition::Object(def) => Some(&mut def.fields),
            TypeDefinition::Enum(_)
            | TypeDefinition::InputObject(_)
            | TypeDefinition::Scalar(_)
            | TypeDefinition::Union(_) => None,
        }
    }

    fn kind(&self) -> TypeKind {
        TypeKind::from(self)
    }

    fn name(&self) -> &str {
        use ast::schema::TypeDefinition;
        match self {
            TypeDefinition::Enum(def) => &def.name,
            TypeDefinition::InputObject(def) => &def.name,
            TypeDefinition::Interface(def) => &def.name,
            TypeDefinition::Object(def) => &def.name,
            TypeDefinition::Scalar(def) => &def.name,
            TypeDefinition::Union(def) => &def.name,
        }
    }

    fn position(&self) -> ast::Pos {
        use ast::schema::TypeDefinition;
        match self {
            TypeDefinition::Enum(def) => def.position,
            TypeDefinition::InputObject(def) => def.position,
            TypeDefinition::Interface(def) => def.position,
            TypeDefinition::Object(def) => def.position,
            TypeDefinition::Scalar(def) => def.position,
            TypeDefinition::Union(def) => def.position,
        }
    }
}

impl TypeNodeExt for ast::schema::TypeExtension {
    fn directives(&self) -> &[ast::schema::Directive] {
        use ast::schema::TypeExtension;
        match self {
            TypeExtension::Enum(ext) => &ext.directives,
            TypeExtension::InputObject(ext) => &ext.directives,
            TypeExtension::Interface(ext) => &ext.directives,
            TypeExtension::Object(ext) => &ext.directives,
            TypeExtension::Scalar(ext) => &ext.directives,
            TypeExtension::Union(ext) => &ext.directives,
        }
    }

    fn directives_mut(&mut self) -> &mut Vec<ast::schema::Directive> {
        use ast::schema::TypeExtension;
        match self {
            TypeExtension::Enum(ext) => &mut ext.directives,
            TypeExtension::InputObject(ext) => &mut ext.directives,
            TypeExtension::Interface(ext) => &mut ext.directives,
            TypeExtension::Object(ext) => &mut ext.directives,
            TypeExtension::Scalar(ext) => &mut ext.directives,
            TypeExtension::Union(ext) => &mut ext.directives,
        }
    }

    fn fields(&self) -> Option<&[ast::schema::Field]> {
        use ast::schema::TypeExtension;
        match self {
            TypeExtension::Interface(ext) => Some(&ext.fields),
            TypeExtension::Object(ext) => Some(&ext.fields),
            TypeExtension::Enum(_)
            | TypeExtension::InputObject(_)
            | TypeExtension::Scalar(_)
            | TypeExtension::Union(_) => None,
        }
    }

    fn fields_mut(&mut self) -> Option<&mut Vec<ast::schema::Field>> {
        use ast::schema::TypeExtension;
        match self {
            TypeExtension::Interface(ext) => Some(&mut ext.fields),
            TypeExtension::Object(ext) => Some(&mut ext.fields),
            TypeExtension::Enum(_)
            | TypeExtension::InputObject(_)
            | TypeExtension::Scalar(_)
            | TypeExtension::Union(_) => None,
        }
    }

    fn kind(&self) -> TypeKind {
        TypeKind::from(self)
    }

    fn name(&self) -> &str {
        use ast::schema::TypeExtension;
        match self {
            TypeExtension::Enum(ext) => &ext.name,
            TypeExtension::InputObject(ext) => &ext.name,
            TypeExtension::Interface(ext) => &ext.name,
            TypeExtension::Object(ext) => &ext.name,
            TypeExtension::Scalar(ext) => &ext.name,
            TypeExtension::Union(ext) => &ext.name,
        }
    }

    fn position(&self) -> ast::Pos {
        use ast::schema::TypeExtension;
        match self {
            TypeExtension::Enum(ext) => ext.position,
            TypeExtension::InputObject(ext) => ext.position,
            TypeExtension::Interface(ext) => ext.position,
            TypeExtension::Object(ext) => ext.position,
            TypeExtension::Scalar(ext) => ext.position,
            TypeExtension::Union(ext) => ext.position,
        }
    }
}
