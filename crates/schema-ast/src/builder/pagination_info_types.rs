use crate::ast;
use crate::document::PartialParser;
use crate::DocumentAst;
use crate::SchemaAstError;

type Result<T> = std::result::Result<T, SchemaAstError>;

pub const PAGINATOR_INFO_TYPE_NAME: &str = "PaginatorInfo";
pub const PAGE_INFO_TYPE_NAME: &str = "PageInfo";

const PAGINATOR_INFO_SDL: &str = r#"
type PaginatorInfo {
  "Total count of available items in the page."
  count: Int!

  "Current pagination page."
  currentPage: Int!

  "Index of first item in the current page."
  firstItem: Int!

  "If collection has more pages."
  hasMorePages: Boolean!

  "Index of last item in the current page."
  lastItem: Int!

  "Last page number of the collection."
  lastPage: Int!

  "Number of items per page in the collection."
  perPage: Int!

  "Total items available in the collection."
  total: Int!
}
"#;

const PAGE_INFO_SDL: &str = r#"
type PageInfo {
  "When paginating forwards, are there more items?"
  hasNextPage: Boolean!

  "When paginating backwards, are there more items?"
  hasPreviousPage: Boolean!

  "When paginating backwards, the cursor to continue."
  startCursor: String

  "When paginating forwards, the cursor to continue."
  endCursor: String

  "Total number of nodes in the connection."
  total: Int

  "Count of nodes in the current request."
  count: Int

  "Current page of the request."
  currentPage: Int

  "Last page in the connection."
  lastPage: Int
}
"#;

/// Installs the offset-based (`PaginatorInfo`) and cursor-based (`PageInfo`)
/// pagination info types.
///
/// Both are installed unconditionally and overwrite any existing definition
/// of the same name.
pub fn add_pagination_info_types(mut document: DocumentAst) -> Result<DocumentAst> {
    for sdl in [PAGINATOR_INFO_SDL, PAGE_INFO_SDL] {
        let obj_type = PartialParser::object_type_definition(sdl)?;
        let type_name = obj_type.name.to_string();
        if document
            .set_type_definition(ast::schema::TypeDefinition::Object(obj_type))
            .is_some()
        {
            log::warn!(
                "Replaced the existing definition of `{type_name}` with the \
                built-in pagination info type.",
            );
        }
    }
    Ok(document)
}
