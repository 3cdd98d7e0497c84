use crate::ast;
use crate::document::TypeKind;
use crate::document::TypeNode;
use crate::document::TypeNodeExt;
use crate::document::TypeNodeId;
use crate::DocumentAst;
use crate::ReadContentError;
use crate::SchemaAstError;
use crate::test_utils;
use std::path::PathBuf;

type Result<T> = std::result::Result<T, SchemaAstError>;

mod parsing {
    use super::*;

    #[test]
    fn type_definitions_keep_source_order() -> Result<()> {
        let document = DocumentAst::parse("
            type Query { users: [User] }
            type User { id: ID! }
            scalar DateTime
            enum Role { ADMIN USER }
        ")?;

        assert_eq!(
            test_utils::type_names(&document),
            vec!["Query", "User", "DateTime", "Role"],
        );
        assert_eq!(
            document.type_definition("DateTime").map(|def| def.kind()),
            Some(TypeKind::Scalar),
        );

        Ok(())
    }

    #[test]
    fn type_extensions_keep_source_order() -> Result<()> {
        let document = DocumentAst::parse("
            type Query { a: Int }
            extend type Query { b: Int }
            extend enum Role { GUEST }
            extend type Query { c: Int }
        ")?;

        let ext_names =
            document.type_extensions()
                .map(|(ext_id, ext)| (ext_id.index(), ext.name()))
                .collect::<Vec<_>>();
        assert_eq!(ext_names, vec![(0, "Query"), (1, "Role"), (2, "Query")]);

        let query_exts =
            document.type_extensions_of("Query")
                .map(|(ext_id, _)| ext_id.index())
                .collect::<Vec<_>>();
        assert_eq!(query_exts, vec![0, 2]);

        Ok(())
    }

    #[test]
    fn redefined_type_replaces_earlier_definition_in_place() -> Result<()> {
        let document = DocumentAst::parse("
            type A { old: Int }
            type B { b: Int }
            type A { new: Int }
        ")?;

        assert_eq!(test_utils::type_names(&document), vec!["A", "B"]);
        assert_eq!(test_utils::field_names(&document, "A"), vec!["new"]);

        Ok(())
    }

    #[test]
    fn invalid_sdl_is_a_parse_error() {
        let result = DocumentAst::parse("type Query {");

        assert!(matches!(
            result,
            Err(SchemaAstError::ParseError { file: None, .. }),
        ));
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let path = PathBuf::from("/definitely/not/a/real/schema.graphql");
        let result = DocumentAst::from_files(&[path.as_path()]);

        assert_eq!(
            result.unwrap_err(),
            SchemaAstError::SchemaFileReadError(ReadContentError::PathIsNotAFile(path)),
        );
    }

    #[test]
    fn files_are_appended_in_order() -> Result<()> {
        let dir = tempfile::tempdir().unwrap();
        let first = dir.path().join("first.graphql");
        let second = dir.path().join("second.graphql");
        std::fs::write(&first, "type Query { a: Int }").unwrap();
        std::fs::write(&second, "extend type Query { b: Int }\ntype User { id: ID }").unwrap();

        let document = DocumentAst::from_files(&[&first, &second])?;

        assert_eq!(test_utils::type_names(&document), vec!["Query", "User"]);
        assert_eq!(document.type_extensions().count(), 1);

        Ok(())
    }
}

mod type_extensions {
    use super::*;

    #[test]
    fn consumed_extensions_are_hidden_from_lookups() -> Result<()> {
        let mut document = DocumentAst::parse("
            type Query { a: Int }
            extend type Query { b: Int }
        ")?;
        let (ext_id, _) = document.type_extensions().next().unwrap();

        assert!(document.consume_type_extension(ext_id).is_some());

        assert!(document.type_extension(ext_id).is_none());
        assert_eq!(document.type_extensions().count(), 0);
        assert_eq!(document.type_extensions_of("Query").count(), 0);
        assert_eq!(document.consumed_type_extensions().count(), 1);
        assert!(document.type_node(&TypeNodeId::Extension(ext_id)).is_none());

        Ok(())
    }

    #[test]
    fn extension_cannot_be_consumed_twice() -> Result<()> {
        let mut document = DocumentAst::parse("extend type Query { b: Int }")?;
        let (ext_id, _) = document.type_extensions().next().unwrap();

        assert!(document.consume_type_extension(ext_id).is_some());
        assert!(document.consume_type_extension(ext_id).is_none());

        Ok(())
    }

    #[test]
    fn into_ast_omits_consumed_extensions() -> Result<()> {
        let mut document = DocumentAst::parse("
            type Query { a: Int }
            extend type Query { b: Int }
            extend type Query { c: Int }
        ")?;
        let (ext_id, _) = document.type_extensions().next().unwrap();
        document.consume_type_extension(ext_id);

        let ast_doc = document.into_ast();

        let ext_count =
            ast_doc.definitions
                .iter()
                .filter(|def| matches!(def, ast::schema::Definition::TypeExtension(_)))
                .count();
        assert_eq!(ast_doc.definitions.len(), 2);
        assert_eq!(ext_count, 1);

        Ok(())
    }
}

mod fields {
    use super::*;

    #[test]
    fn field_in_parent_mut_tells_same_named_fields_apart() -> Result<()> {
        let mut document = DocumentAst::parse("type Query { a: Int b: Int a: Float }")?;
        let parent_type = document.object_type("Query").unwrap().clone();

        let field = document.field_in_parent_mut(&parent_type, &parent_type.fields[2]).unwrap();
        field.field_type = ast::schema::Type::NamedType("String".to_string());

        let field_types =
            document.object_type("Query")
                .unwrap()
                .fields
                .iter()
                .map(|field| test_utils::type_annotation(&field.field_type))
                .collect::<Vec<_>>();
        assert_eq!(field_types, vec!["Int", "Int", "String"]);
        assert_eq!(test_utils::field_type(&document, "Query", "a"), "Int");

        Ok(())
    }

    #[test]
    fn field_in_parent_mut_is_none_once_the_field_is_gone() -> Result<()> {
        let mut document = DocumentAst::parse("type Query { a: Int b: Int }")?;
        let parent_type = document.object_type("Query").unwrap().clone();
        document.object_type_mut("Query").unwrap().fields.truncate(1);

        assert!(document.field_in_parent_mut(&parent_type, &parent_type.fields[1]).is_none());

        Ok(())
    }
}

mod type_nodes {
    use super::*;

    #[test]
    fn type_node_snapshots_definitions_and_extensions() -> Result<()> {
        let document = DocumentAst::parse("
            type Query @a { q: Int }
            extend type Query @b { r: Int }
        ")?;
        let (ext_id, _) = document.type_extensions().next().unwrap();

        let def_node = document.type_node(&TypeNodeId::Definition("Query".to_string())).unwrap();
        assert!(!def_node.is_extension());
        assert_eq!(def_node.name(), "Query");
        assert_eq!(test_utils::directive_names(def_node.directives()), vec!["a"]);
        assert_eq!(def_node.id(), TypeNodeId::Definition("Query".to_string()));

        let ext_node = document.type_node(&TypeNodeId::Extension(ext_id)).unwrap();
        assert!(matches!(&ext_node, TypeNode::Extension(id, _) if *id == ext_id));
        assert_eq!(ext_node.name(), "Query");
        assert_eq!(ext_node.kind(), TypeKind::Object);
        assert_eq!(test_utils::directive_names(ext_node.directives()), vec!["b"]);
        assert_eq!(ext_node.fields().map(|fields| fields.len()), Some(1));

        Ok(())
    }

    #[test]
    fn removed_definition_has_no_type_node() -> Result<()> {
        let mut document = DocumentAst::parse("type A { a: Int } type B { b: Int }")?;

        let removed = document.remove_type_definition("A");

        assert!(removed.is_some());
        assert!(document.type_node(&TypeNodeId::Definition("A".to_string())).is_none());
        assert_eq!(test_utils::type_names(&document), vec!["B"]);

        Ok(())
    }

    #[test]
    fn fieldless_kinds_have_no_mutable_fields() -> Result<()> {
        let mut document = DocumentAst::parse("
            scalar DateTime
            interface Node { id: ID! }
        ")?;

        assert!(document
            .type_node_fields_mut(&TypeNodeId::Definition("DateTime".to_string()))
            .is_none());
        assert!(document
            .type_node_fields_mut(&TypeNodeId::Definition("Node".to_string()))
            .is_some());

        Ok(())
    }
}

#[test]
fn display_prints_sdl() -> Result<()> {
    let document = DocumentAst::parse("type Query { users(first: Int!): [User!]! }")?;

    let sdl = document.to_string();

    assert!(sdl.contains("type Query"));
    assert!(sdl.contains("users(first: Int!): [User!]!"));

    Ok(())
}
