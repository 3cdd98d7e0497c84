use crate::ast;
use crate::DocumentAst;

/// Renders a type annotation the way it is written in SDL (`[User!]!`).
pub(crate) fn type_annotation(type_: &ast::schema::Type) -> String {
    match type_ {
        ast::schema::Type::NamedType(name) => name.to_string(),
        ast::schema::Type::ListType(inner) => format!("[{}]", type_annotation(inner)),
        ast::schema::Type::NonNullType(inner) => format!("{}!", type_annotation(inner)),
    }
}

pub(crate) fn directive_names(directives: &[ast::schema::Directive]) -> Vec<&str> {
    directives.iter().map(|d| d.name.as_str()).collect()
}

pub(crate) fn field_names<'a>(document: &'a DocumentAst, type_name: &str) -> Vec<&'a str> {
    document.object_type(type_name)
        .unwrap_or_else(|| panic!("no object type named `{type_name}`"))
        .fields
        .iter()
        .map(|field| field.name.as_str())
        .collect()
}

pub(crate) fn field_type(document: &DocumentAst, type_name: &str, field_name: &str) -> String {
    let field = document.field(type_name, field_name)
        .unwrap_or_else(|| panic!("no field `{type_name}.{field_name}`"));
    type_annotation(&field.field_type)
}

pub(crate) fn arg_names<'a>(
    document: &'a DocumentAst,
    type_name: &str,
    field_name: &str,
) -> Vec<&'a str> {
    document.field(type_name, field_name)
        .unwrap_or_else(|| panic!("no field `{type_name}.{field_name}`"))
        .arguments
        .iter()
        .map(|arg| arg.name.as_str())
        .collect()
}

pub(crate) fn type_names(document: &DocumentAst) -> Vec<&str> {
    use crate::document::TypeNodeExt;
    document.type_definitions().map(|def| def.name()).collect()
}

pub(crate) fn parse_directive(src: &str) -> ast::schema::Directive {
    let obj_type = crate::document::PartialParser::object_type_definition(
        format!("type DirectiveHost {src} {{ f: Int }}").as_str(),
    ).expect("parse error");
    obj_type.directives.into_iter().next().expect("no directive found")
}
