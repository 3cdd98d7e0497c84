use crate::document::PartialParser;
use crate::SchemaAstError;
use crate::test_utils;

type Result<T> = std::result::Result<T, SchemaAstError>;

#[test]
fn parses_object_type_definition() -> Result<()> {
    let obj_type = PartialParser::object_type_definition("
        type UserPaginator {
            paginatorInfo: PaginatorInfo!
            data: [User!]!
        }
    ")?;

    assert_eq!(obj_type.name, "UserPaginator");
    let field_types =
        obj_type.fields
            .iter()
            .map(|field| (field.name.as_str(), test_utils::type_annotation(&field.field_type)))
            .collect::<Vec<_>>();
    assert_eq!(field_types, vec![
        ("paginatorInfo", "PaginatorInfo!".to_string()),
        ("data", "[User!]!".to_string()),
    ]);

    Ok(())
}

#[test]
fn object_type_definition_rejects_other_kinds() {
    let result = PartialParser::object_type_definition("scalar DateTime");

    assert!(matches!(
        result,
        Err(SchemaAstError::UnexpectedFragmentDefinition {
            expected: "object type definition",
            ..
        }),
    ));
}

#[test]
fn type_definition_rejects_multiple_definitions() {
    let result = PartialParser::type_definition("scalar A scalar B");

    assert!(matches!(
        result,
        Err(SchemaAstError::UnexpectedFragmentDefinition { .. }),
    ));
}

#[test]
fn malformed_fragment_is_a_fragment_parse_error() {
    let result = PartialParser::type_definition("type {");

    assert!(matches!(
        result,
        Err(SchemaAstError::FragmentParseError { fragment, .. }) if fragment == "type {",
    ));
}

#[test]
fn parses_field_definition() -> Result<()> {
    let field = PartialParser::field_definition("users(first: Int!): [User!]!")?;

    assert_eq!(field.name, "users");
    assert_eq!(test_utils::type_annotation(&field.field_type), "[User!]!");
    assert_eq!(field.arguments.len(), 1);
    assert_eq!(field.arguments[0].name, "first");

    Ok(())
}

#[test]
fn parses_input_value_definition() -> Result<()> {
    let arg = PartialParser::input_value_definition("page: Int = 1")?;

    assert_eq!(arg.name, "page");
    assert_eq!(test_utils::type_annotation(&arg.value_type), "Int");
    assert!(arg.default_value.is_some());

    Ok(())
}

#[test]
fn input_value_definition_rejects_multiple_arguments() {
    let result = PartialParser::input_value_definition("first: Int!, after: String");

    assert!(matches!(
        result,
        Err(SchemaAstError::UnexpectedFragmentDefinition {
            expected: "argument definition",
            ..
        }),
    ));
}
