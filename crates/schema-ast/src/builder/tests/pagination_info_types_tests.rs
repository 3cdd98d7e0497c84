use crate::ast;
use crate::builder::add_pagination_info_types;
use crate::builder::PAGE_INFO_TYPE_NAME;
use crate::builder::PAGINATOR_INFO_TYPE_NAME;
use crate::DocumentAst;
use crate::SchemaAstError;
use crate::test_utils;

type Result<T> = std::result::Result<T, SchemaAstError>;

fn field_types(document: &DocumentAst, type_name: &str) -> Vec<(String, String)> {
    document.object_type(type_name)
        .unwrap()
        .fields
        .iter()
        .map(|field| (field.name.to_string(), test_utils::type_annotation(&field.field_type)))
        .collect()
}

fn owned(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
    pairs.iter().map(|(a, b)| (a.to_string(), b.to_string())).collect()
}

#[test]
fn paginator_info_has_eight_non_null_fields() -> Result<()> {
    let document = add_pagination_info_types(DocumentAst::new())?;

    assert_eq!(field_types(&document, PAGINATOR_INFO_TYPE_NAME), owned(&[
        ("count", "Int!"),
        ("currentPage", "Int!"),
        ("firstItem", "Int!"),
        ("hasMorePages", "Boolean!"),
        ("lastItem", "Int!"),
        ("lastPage", "Int!"),
        ("perPage", "Int!"),
        ("total", "Int!"),
    ]));

    Ok(())
}

#[test]
fn page_info_has_eight_fields() -> Result<()> {
    let document = add_pagination_info_types(DocumentAst::new())?;

    assert_eq!(field_types(&document, PAGE_INFO_TYPE_NAME), owned(&[
        ("hasNextPage", "Boolean!"),
        ("hasPreviousPage", "Boolean!"),
        ("startCursor", "String"),
        ("endCursor", "String"),
        ("total", "Int"),
        ("count", "Int"),
        ("currentPage", "Int"),
        ("lastPage", "Int"),
    ]));

    Ok(())
}

#[test]
fn fields_carry_descriptions() -> Result<()> {
    let document = add_pagination_info_types(DocumentAst::new())?;

    let undocumented =
        document.object_type(PAGINATOR_INFO_TYPE_NAME)
            .unwrap()
            .fields
            .iter()
            .chain(document.object_type(PAGE_INFO_TYPE_NAME).unwrap().fields.iter())
            .filter(|field| field.description.is_none())
            .count();
    assert_eq!(undocumented, 0);

    Ok(())
}

#[test]
fn types_are_appended_after_user_types() -> Result<()> {
    let document = add_pagination_info_types(DocumentAst::parse("type Query { a: Int }")?)?;

    assert_eq!(
        test_utils::type_names(&document),
        vec!["Query", PAGINATOR_INFO_TYPE_NAME, PAGE_INFO_TYPE_NAME],
    );

    Ok(())
}

#[test]
fn user_type_of_the_same_name_is_replaced() -> Result<()> {
    let document = add_pagination_info_types(DocumentAst::parse("
        type PaginatorInfo { custom: String }
        type Query { a: Int }
        enum PageInfo { A B }
    ")?)?;

    assert_eq!(
        test_utils::type_names(&document),
        vec![PAGINATOR_INFO_TYPE_NAME, "Query", PAGE_INFO_TYPE_NAME],
    );
    assert_eq!(test_utils::field_names(&document, PAGINATOR_INFO_TYPE_NAME).len(), 8);
    assert!(matches!(
        document.type_definition(PAGE_INFO_TYPE_NAME),
        Some(ast::schema::TypeDefinition::Object(_)),
    ));

    Ok(())
}

#[test]
fn reapplying_is_idempotent() -> Result<()> {
    let once = add_pagination_info_types(DocumentAst::new())?;
    let twice = add_pagination_info_types(once.clone())?;

    assert_eq!(once, twice);

    Ok(())
}
