use crate::ast;
use crate::directives::DirectiveCapability;
use crate::directives::DirectiveRegistry;
use crate::directives::ManipulatorResult;
use crate::document::PartialParser;
use crate::document::TypeNode;
use crate::DocumentAst;
use crate::test_utils;

fn add_marker_type(document: &mut DocumentAst, type_name: &str) -> ManipulatorResult<()> {
    let marker = PartialParser::object_type_definition(
        format!("type {type_name} {{ marker: Int }}").as_str(),
    )?;
    document.set_type_definition(ast::schema::TypeDefinition::Object(marker));
    Ok(())
}

fn marker_node_fn(
    type_name: &'static str,
) -> impl Fn(&ast::schema::Directive, &TypeNode, DocumentAst, &DocumentAst) -> ManipulatorResult<DocumentAst>
        + Send + Sync + 'static {
    move |_directive, _node, mut document, _original| {
        add_marker_type(&mut document, type_name)?;
        Ok(document)
    }
}

fn query_node() -> TypeNode {
    let document = DocumentAst::parse("type Query { a: Int }").unwrap();
    TypeNode::Definition(document.type_definition("Query").unwrap().to_owned())
}

#[test]
fn empty_registry_resolves_nothing() {
    let registry = DirectiveRegistry::new();
    let directive = test_utils::parse_directive("@group(namespace: \"x\")");

    assert!(!registry.is_registered("group"));
    assert!(registry.capabilities("group").is_empty());
    assert!(registry.node_manipulators(&[directive]).is_empty());
}

#[test]
fn with_builtins_registers_builtin_directives() {
    let registry = DirectiveRegistry::with_builtins();

    assert_eq!(
        registry.directive_names().collect::<Vec<_>>(),
        vec!["group", "paginate", "rules", "search"],
    );
    let kinds =
        ["group", "paginate", "rules", "search"]
            .into_iter()
            .map(|name| registry.capabilities(name)[0].kind_name())
            .collect::<Vec<_>>();
    assert_eq!(kinds, vec!["node", "field", "arg", "arg"]);
}

#[test]
fn one_directive_may_provide_several_capability_kinds() {
    let mut registry = DirectiveRegistry::new();
    registry
        .register_node_fn("multi", |_, _, document, _| Ok(document))
        .register_field_fn("multi", |_, _, _, document, _| Ok(document))
        .register_arg_fn("multi", |_, _, _, _, document, _| Ok(document));
    let directives = vec![test_utils::parse_directive("@multi")];

    assert!(matches!(
        registry.capabilities("multi"),
        [
            DirectiveCapability::Node(_),
            DirectiveCapability::Field(_),
            DirectiveCapability::Arg(_),
        ],
    ));
    assert_eq!(registry.node_manipulators(&directives).len(), 1);
    assert_eq!(registry.field_manipulators(&directives).len(), 1);
    assert_eq!(registry.arg_manipulators(&directives).len(), 1);
}

#[test]
fn unregistered_directives_are_skipped() {
    let mut registry = DirectiveRegistry::new();
    registry.register_node_fn("known", |_, _, document, _| Ok(document));
    let directives = vec![
        test_utils::parse_directive("@unknown"),
        test_utils::parse_directive("@known"),
        test_utils::parse_directive("@deprecated"),
    ];

    let resolved = registry.node_manipulators(&directives);

    assert_eq!(resolved.len(), 1);
    assert_eq!(resolved[0].directive.name, "known");
}

#[test]
fn manipulators_resolve_in_directive_then_registration_order() -> ManipulatorResult<()> {
    let mut registry = DirectiveRegistry::new();
    registry
        .register_node_fn("second", marker_node_fn("SecondA"))
        .register_node_fn("first", marker_node_fn("FirstA"))
        .register_node_fn("first", marker_node_fn("FirstB"))
        .register_node_fn("second", marker_node_fn("SecondB"));
    let directives = vec![
        test_utils::parse_directive("@first"),
        test_utils::parse_directive("@second"),
    ];
    let node = query_node();
    let original_document = DocumentAst::new();

    let resolved = registry.node_manipulators(&directives);
    let document = resolved.iter().try_fold(DocumentAst::new(), |document, resolved| {
        resolved.manipulator.manipulate_node(
            &resolved.directive,
            &node,
            document,
            &original_document,
        )
    })?;

    assert_eq!(
        test_utils::type_names(&document),
        vec!["FirstA", "FirstB", "SecondA", "SecondB"],
    );

    Ok(())
}

#[test]
fn repeated_directive_resolves_once_per_application() {
    let mut registry = DirectiveRegistry::new();
    registry.register_field_fn("tag", |_, _, _, document, _| Ok(document));
    let directives = vec![
        test_utils::parse_directive("@tag(name: \"a\")"),
        test_utils::parse_directive("@tag(name: \"b\")"),
    ];

    let resolved = registry.field_manipulators(&directives);

    assert_eq!(resolved.len(), 2);
    assert_eq!(resolved[0].directive.arguments[0].1, ast::schema::Value::String("a".to_string()));
    assert_eq!(resolved[1].directive.arguments[0].1, ast::schema::Value::String("b".to_string()));
}
