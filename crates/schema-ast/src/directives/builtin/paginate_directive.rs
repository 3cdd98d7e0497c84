use crate::ast;
use crate::directives::DirectiveArgs;
use crate::directives::FieldManipulator;
use crate::directives::ManipulatorError;
use crate::directives::ManipulatorResult;
use crate::directives::builtin::list_item_type;
use crate::document::PartialParser;
use crate::DocumentAst;

/// Which pagination style a `@paginate` field is rewritten to.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum PaginationType {
    /// Cursor-based pagination backed by `PageInfo`.
    Connection,

    /// Offset-based pagination backed by `PaginatorInfo`.
    #[default]
    Paginator,
}
impl PaginationType {
    fn from_directive(directive: &ast::schema::Directive) -> ManipulatorResult<Self> {
        let Some(value) = DirectiveArgs::enum_or_string(directive, "type")? else {
            return Ok(Self::default());
        };
        match value.to_ascii_lowercase().as_str() {
            "connection" | "relay" => Ok(Self::Connection),
            "paginator" | "default" => Ok(Self::Paginator),
            _ => Err(ManipulatorError::InvalidDirectiveArgument {
                directive_name: directive.name.to_string(),
                argument: "type".to_string(),
                reason: format!(
                    "`{value}` is not a pagination type (expected `PAGINATOR` or \
                    `CONNECTION`)",
                ),
            }),
        }
    }
}

/// `@paginate(type: PAGINATOR | CONNECTION = PAGINATOR)` on a list-typed
/// field `f: [T]` rewrites the field into a paginated one:
///
/// * `PAGINATOR`: `f(count: Int!, page: Int): TPaginator!` along with
///   `type TPaginator { paginatorInfo: PaginatorInfo! data: [T!]! }`.
/// * `CONNECTION`: `f(first: Int!, after: String): TConnection!` along with
///   `type TConnection { pageInfo: PageInfo! edges: [TEdge] }` and
///   `type TEdge { node: T cursor: String! }`.
///
/// The generated wrapper types are shared by every field paginating over the
/// same `T`, so they are only installed if no type of that name exists yet.
/// `PaginatorInfo` and `PageInfo` themselves are installed by the compile
/// pipeline after all directives have run.
#[derive(Clone, Copy, Debug, Default)]
pub struct PaginateDirective;
impl PaginateDirective {
    pub const NAME: &'static str = "paginate";

    fn install_type_if_missing(
        document: &mut DocumentAst,
        type_name: &str,
        sdl: String,
    ) -> ManipulatorResult<()> {
        if document.type_definition(type_name).is_none() {
            let obj_type = PartialParser::object_type_definition(sdl.as_str())?;
            document.set_type_definition(ast::schema::TypeDefinition::Object(obj_type));
        }
        Ok(())
    }
}

#[inherent::inherent]
impl FieldManipulator for PaginateDirective {
    pub fn manipulate_field(
        &self,
        directive: &ast::schema::Directive,
        field: &ast::schema::Field,
        parent_type: &ast::schema::ObjectType,
        mut document: DocumentAst,
        _original_document: &DocumentAst,
    ) -> ManipulatorResult<DocumentAst> {
        let pagination_type = PaginationType::from_directive(directive)?;
        let Some(item_type) = list_item_type(&field.field_type) else {
            return Err(ManipulatorError::InvalidTarget {
                directive_name: directive.name.to_string(),
                target: format!("{}.{}", parent_type.name, field.name),
                reason: "only fields with a list type can be paginated".to_string(),
            });
        };

        let (paginated_type_name, arg_fragments) = match pagination_type {
            PaginationType::Paginator => {
                let paginator_name = format!("{item_type}Paginator");
                Self::install_type_if_missing(
                    &mut document,
                    paginator_name.as_str(),
                    format!(
                        "type {paginator_name} {{
                            paginatorInfo: PaginatorInfo!
                            data: [{item_type}!]!
                        }}"
                    ),
                )?;
                (paginator_name, ["count: Int!", "page: Int"])
            },

            PaginationType::Connection => {
                let connection_name = format!("{item_type}Connection");
                let edge_name = format!("{item_type}Edge");
                Self::install_type_if_missing(
                    &mut document,
                    connection_name.as_str(),
                    format!(
                        "type {connection_name} {{
                            pageInfo: PageInfo!
                            edges: [{edge_name}]
                        }}"
                    ),
                )?;
                Self::install_type_if_missing(
                    &mut document,
                    edge_name.as_str(),
                    format!(
                        "type {edge_name} {{
                            node: {item_type}
                            cursor: String!
                        }}"
                    ),
                )?;
                (connection_name, ["first: Int!", "after: String"])
            },
        };

        let mut new_args = vec![];
        for fragment in arg_fragments {
            let mut arg = PartialParser::input_value_definition(fragment)?;
            arg.position = directive.position;
            new_args.push(arg);
        }

        let Some(target_field) = document.field_in_parent_mut(parent_type, field) else {
            return Err(ManipulatorError::Custom(format!(
                "`{}.{}` disappeared while being paginated",
                parent_type.name,
                field.name,
            )));
        };
        target_field.field_type = ast::schema::Type::NonNullType(Box::new(
            ast::schema::Type::NamedType(paginated_type_name),
        ));
        for arg in new_args {
            if !target_field.arguments.iter().any(|existing| existing.name == arg.name) {
                target_field.arguments.push(arg);
            }
        }

        Ok(document)
    }
}
