use crate::directives::builtin::tests::compile;
use crate::directives::ManipulatorError;
use crate::SchemaAstError;
use crate::test_utils;

type Result<T> = std::result::Result<T, SchemaAstError>;

#[test]
fn leaves_document_unchanged() -> Result<()> {
    let document = compile(r#"
        type Query {
            user(email: String @rules(apply: ["required", "email"])): String
        }
    "#)?;

    let email = &document.field("Query", "user").unwrap().arguments[0];
    assert_eq!(test_utils::directive_names(&email.directives), vec!["rules"]);
    assert_eq!(test_utils::type_annotation(&email.value_type), "String");

    Ok(())
}

#[test]
fn accepts_single_rule_as_string() -> Result<()> {
    compile(r#"type Query { user(id: ID @rules(apply: "required")): String }"#)?;
    Ok(())
}

#[test]
fn rejects_empty_rule_list() {
    let result = compile("type Query { user(id: ID @rules(apply: [])): String }");

    assert!(matches!(
        result,
        Err(SchemaAstError::ManipulatorFailed { directive_name, err, .. })
            if directive_name == "rules"
            && matches!(
                err.as_ref(),
                ManipulatorError::InvalidDirectiveArgument { argument, .. } if argument == "apply",
            ),
    ));
}

#[test]
fn rejects_missing_apply() {
    let result = compile("type Query { user(id: ID @rules): String }");

    assert!(matches!(result, Err(SchemaAstError::ManipulatorFailed { .. })));
}

#[test]
fn rejects_blank_rule_names() {
    let result = compile(r#"type Query { user(id: ID @rules(apply: ["required", " "])): String }"#);

    assert!(matches!(result, Err(SchemaAstError::ManipulatorFailed { .. })));
}
