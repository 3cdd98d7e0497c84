use crate::ast;
use crate::SchemaAstError;

type Result<T> = std::result::Result<T, SchemaAstError>;

const FRAGMENT_HOST_TYPE: &str = "__PartialParserHost";

/// Parses small SDL fragments (a single type, a single field, a single
/// argument) into the AST nodes used by [`DocumentAst`](crate::DocumentAst).
///
/// Used to build the synthetic types installed by the compile pipeline and
/// the types/fields/arguments that built-in directives generate.
pub struct PartialParser;
impl PartialParser {
    /// Parses a fragment containing exactly one definition and requires it to
    /// be an object type definition.
    pub fn object_type_definition(fragment: &str) -> Result<ast::schema::ObjectType> {
        match Self::single_type_definition(fragment, "object type definition")? {
            ast::schema::TypeDefinition::Object(obj_type) => Ok(obj_type),
            _ => Err(SchemaAstError::UnexpectedFragmentDefinition {
                expected: "object type definition",
                fragment: fragment.to_string(),
            }),
        }
    }

    /// Parses a fragment containing exactly one type definition of any kind.
    pub fn type_definition(fragment: &str) -> Result<ast::schema::TypeDefinition> {
        Self::single_type_definition(fragment, "type definition")
    }

    /// Parses a single field definition, e.g. `users(first: Int!): [User!]!`.
    pub fn field_definition(fragment: &str) -> Result<ast::schema::Field> {
        let host = Self::parse_host(
            fragment,
            format!("type {FRAGMENT_HOST_TYPE} {{ {fragment} }}").as_str(),
            "field definition",
        )?;
        Self::single(host.fields, fragment, "field definition")
    }

    /// Parses a single argument definition, e.g. `first: Int! = 10`.
    pub fn input_value_definition(fragment: &str) -> Result<ast::schema::InputValue> {
        let host = Self::parse_host(
            fragment,
            format!("type {FRAGMENT_HOST_TYPE} {{ host({fragment}): Int }}").as_str(),
            "argument definition",
        )?;
        let field = Self::single(host.fields, fragment, "argument definition")?;
        Self::single(field.arguments, fragment, "argument definition")
    }

    fn parse(fragment: &str, src: &str) -> Result<ast::schema::Document> {
        ast::schema::parse(src).map_err(|err| SchemaAstError::FragmentParseError {
            fragment: fragment.to_string(),
            err: err.to_string(),
        })
    }

    fn parse_host(
        fragment: &str,
        src: &str,
        expected: &'static str,
    ) -> Result<ast::schema::ObjectType> {
        let doc = Self::parse(fragment, src)?;
        match Self::single(doc.definitions, fragment, expected)? {
            ast::schema::Definition::TypeDefinition(
                ast::schema::TypeDefinition::Object(host),
            ) => Ok(host),
            _ => Err(SchemaAstError::UnexpectedFragmentDefinition {
                expected,
                fragment: fragment.to_string(),
            }),
        }
    }

    fn single<T>(
        items: Vec<T>,
        fragment: &str,
        expected: &'static str,
    ) -> Result<T> {
        let mut items = items.into_iter();
        match (items.next(), items.next()) {
            (Some(item), None) => Ok(item),
            _ => Err(SchemaAstError::UnexpectedFragmentDefinition {
                expected,
                fragment: fragment.to_string(),
            }),
        }
    }

    fn single_type_definition(
        fragment: &str,
        expected: &'static str,
    ) -> Result<ast::schema::TypeDefinition> {
        let doc = Self::parse(fragment, fragment)?;
        match Self::single(doc.definitions, fragment, expected)? {
            ast::schema::Definition::TypeDefinition(type_def) => Ok(type_def),
            _ => Err(SchemaAstError::UnexpectedFragmentDefinition {
                expected,
                fragment: fragment.to_string(),
            }),
        }
    }
}
