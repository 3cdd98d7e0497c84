use crate::ast;
use crate::document::ExtensionId;
use crate::document::TypeNode;
use crate::document::TypeNodeExt;
use crate::document::TypeNodeId;
use crate::file_reader;
use crate::SchemaAstError;
use indexmap::IndexMap;
use std::path::Path;

type Result<T> = std::result::Result<T, SchemaAstError>;

#[derive(Clone, Debug, PartialEq)]
struct TypeExtensionRecord {
    consumed: bool,
    ext: ast::schema::TypeExtension,
}

/// An in-memory schema document: every type definition keyed by name (in the
/// order it was first defined) plus every type extension in source order.
///
/// A [`DocumentAst`] is threaded by value through each step of an
/// [`AstBuilder`](crate::AstBuilder) compile. Each step takes ownership of the
/// current document and hands back the next one.
///
/// Type extensions are never removed. Once the extension-merge pass has folded
/// an extension into its base type the extension is marked as *consumed*: it
/// remains visible via [`DocumentAst::consumed_type_extensions()`] but is no
/// longer returned by any lookup by base-type name.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DocumentAst {
    directive_defs: IndexMap<String, ast::schema::DirectiveDefinition>,
    schema_defs: Vec<ast::schema::SchemaDefinition>,
    type_defs: IndexMap<String, ast::schema::TypeDefinition>,
    type_extensions: Vec<TypeExtensionRecord>,
}
impl DocumentAst {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a [`DocumentAst`] from an already-parsed
    /// [`ast::schema::Document`].
    ///
    /// A type definition whose name was already defined replaces the earlier
    /// definition (see [`DocumentAst::set_type_definition()`]).
    pub fn from_ast(doc: ast::schema::Document) -> Self {
        let mut document = Self::new();
        document.append_ast(doc);
        document
    }

    pub fn from_files(file_paths: &[impl AsRef<Path>]) -> Result<Self> {
        let mut document = Self::new();
        for file_path in file_paths {
            let file_path = file_path.as_ref();
            let content = file_reader::read_content(file_path)?;
            document.append_source(Some(file_path), content.as_str())?;
        }
        Ok(document)
    }

    pub fn from_source(file_path: Option<&Path>, content: &str) -> Result<Self> {
        let mut document = Self::new();
        document.append_source(file_path, content)?;
        Ok(document)
    }

    pub fn parse(content: &str) -> Result<Self> {
        Self::from_source(None, content)
    }

    fn append_ast(&mut self, doc: ast::schema::Document) {
        use ast::schema::Definition;
        for def in doc.definitions {
            match def {
                Definition::DirectiveDefinition(directive_def) => {
                    self.directive_defs.insert(
                        directive_def.name.to_string(),
                        directive_def,
                    );
                },

                Definition::SchemaDefinition(schema_def) =>
                    self.schema_defs.push(schema_def),

                Definition::TypeDefinition(type_def) => {
                    if let Some(prev_def) = self.set_type_definition(type_def) {
                        log::warn!(
                            "Type `{}` (defined at {}) is defined more than \
                            once; the last definition wins.",
                            prev_def.name(),
                            prev_def.position(),
                        );
                    }
                },

                Definition::TypeExtension(type_ext) => {
                    self.add_type_extension(type_ext);
                },
            }
        }
    }

    fn append_source(
        &mut self,
        file_path: Option<&Path>,
        content: &str,
    ) -> Result<()> {
        let doc = ast::schema::parse(content)
            .map_err(|err| SchemaAstError::ParseError {
                file: file_path.map(Path::to_path_buf),
                err: err.to_string(),
            })?;
        log::trace!(
            "Parsed {} definitions from {}.",
            doc.definitions.len(),
            file_path.map_or("<str>".to_string(), |p| format!("{p:?}")),
        );
        self.append_ast(doc);
        Ok(())
    }

    pub fn directive_definitions(
        &self,
    ) -> impl Iterator<Item = &ast::schema::DirectiveDefinition> {
        self.directive_defs.values()
    }

    pub fn schema_definitions(&self) -> &[ast::schema::SchemaDefinition] {
        self.schema_defs.as_slice()
    }

    // ─── Type definitions ───────────────────────────────────

    pub fn type_definition(
        &self,
        type_name: &str,
    ) -> Option<&ast::schema::TypeDefinition> {
        self.type_defs.get(type_name)
    }

    pub fn type_definition_mut(
        &mut self,
        type_name: &str,
    ) -> Option<&mut ast::schema::TypeDefinition> {
        self.type_defs.get_mut(type_name)
    }

    pub fn type_definitions(
        &self,
    ) -> impl Iterator<Item = &ast::schema::TypeDefinition> {
        self.type_defs.values()
    }

    /// Installs `type_def` under its name, replacing (and returning) any
    /// definition previously installed under that name. A replaced
    /// definition keeps its original position in the document's ordering.
    pub fn set_type_definition(
        &mut self,
        type_def: ast::schema::TypeDefinition,
    ) -> Option<ast::schema::TypeDefinition> {
        self.type_defs.insert(type_def.name().to_string(), type_def)
    }

    pub fn remove_type_definition(
        &mut self,
        type_name: &str,
    ) -> Option<ast::schema::TypeDefinition> {
        self.type_defs.shift_remove(type_name)
    }

    pub fn object_type(&self, type_name: &str) -> Option<&ast::schema::ObjectType> {
        match self.type_defs.get(type_name) {
            Some(ast::schema::TypeDefinition::Object(obj_type)) => Some(obj_type),
            _ => None,
        }
    }

    pub fn object_type_mut(
        &mut self,
        type_name: &str,
    ) -> Option<&mut ast::schema::ObjectType> {
        match self.type_defs.get_mut(type_name) {
            Some(ast::schema::TypeDefinition::Object(obj_type)) => Some(obj_type),
            _ => None,
        }
    }

    pub fn object_types(&self) -> impl Iterator<Item = &ast::schema::ObjectType> {
        self.type_defs.values().filter_map(|type_def| match type_def {
            ast::schema::TypeDefinition::Object(obj_type) => Some(obj_type),
            _ => None,
        })
    }

    /// Looks up a field on an object type.
    pub fn field(
        &self,
        type_name: &str,
        field_name: &str,
    ) -> Option<&ast::schema::Field> {
        self.object_type(type_name)?
            .fields
            .iter()
            .find(|field| field.name == field_name)
    }

    pub fn field_mut(
        &mut self,
        type_name: &str,
        field_name: &str,
    ) -> Option<&mut ast::schema::Field> {
        self.object_type_mut(type_name)?
            .fields
            .iter_mut()
            .find(|field| field.name == field_name)
    }

    /// Mutable access to the field a [`FieldManipulator`] was handed, where
    /// `field` is an element of `parent_type.fields` and `parent_type` is how
    /// its type looks in this document. Unlike [`DocumentAst::field_mut()`]
    /// this tells apart fields that share a name.
    ///
    /// [`FieldManipulator`]: crate::directives::FieldManipulator
    pub fn field_in_parent_mut(
        &mut self,
        parent_type: &ast::schema::ObjectType,
        field: &ast::schema::Field,
    ) -> Option<&mut ast::schema::Field> {
        let field_index =
            parent_type.fields
                .iter()
                .position(|sibling| std::ptr::eq(sibling, field))
                .or_else(|| parent_type.fields.iter().position(|sibling| sibling == field))?;

        self.object_type_mut(&parent_type.name)?
            .fields
            .get_mut(field_index)
            .filter(|current| current.name == field.name)
    }

    // ─── Type extensions ────────────────────────────────────

    pub fn add_type_extension(
        &mut self,
        type_ext: ast::schema::TypeExtension,
    ) -> ExtensionId {
        self.type_extensions.push(TypeExtensionRecord {
            consumed: false,
            ext: type_ext,
        });
        ExtensionId(self.type_extensions.len() - 1)
    }

    /// Returns the extension with the given id unless it has already been
    /// consumed by the extension-merge pass.
    pub fn type_extension(
        &self,
        id: ExtensionId,
    ) -> Option<&ast::schema::TypeExtension> {
        self.type_extensions
            .get(id.0)
            .filter(|record| !record.consumed)
            .map(|record| &record.ext)
    }

    pub fn type_extension_mut(
        &mut self,
        id: ExtensionId,
    ) -> Option<&mut ast::schema::TypeExtension> {
        self.type_extensions
            .get_mut(id.0)
            .filter(|record| !record.consumed)
            .map(|record| &mut record.ext)
    }

    /// All not-yet-consumed type extensions in the order they were added.
    pub fn type_extensions(
        &self,
    ) -> impl Iterator<Item = (ExtensionId, &ast::schema::TypeExtension)> {
        self.type_extensions
            .iter()
            .enumerate()
            .filter(|(_, record)| !record.consumed)
            .map(|(idx, record)| (ExtensionId(idx), &record.ext))
    }

    /// All not-yet-consumed type extensions of the type named `type_name`,
    /// in the order they were added.
    pub fn type_extensions_of<'a>(
        &'a self,
        type_name: &'a str,
    ) -> impl Iterator<Item = (ExtensionId, &'a ast::schema::TypeExtension)> + 'a {
        self.type_extensions()
            .filter(move |(_, ext)| ext.name() == type_name)
    }

    pub fn consumed_type_extensions(
        &self,
    ) -> impl Iterator<Item = &ast::schema::TypeExtension> {
        self.type_extensions
            .iter()
            .filter(|record| record.consumed)
            .map(|record| &record.ext)
    }

    /// Marks an extension as merged into its base type and returns it.
    /// Returns `None` if the extension does not exist or was already
    /// consumed.
    pub(crate) fn consume_type_extension(
        &mut self,
        id: ExtensionId,
    ) -> Option<&ast::schema::TypeExtension> {
        let record = self.type_extensions.get_mut(id.0)?;
        if record.consumed {
            return None;
        }
        record.consumed = true;
        Some(&record.ext)
    }

    // ─── Type nodes ─────────────────────────────────────────

    /// Returns an owned snapshot of the definition or extension identified by
    /// `id`, or `None` if it no longer exists in this document.
    pub fn type_node(&self, id: &TypeNodeId) -> Option<TypeNode> {
        match id {
            TypeNodeId::Definition(type_name) =>
                self.type_definition(type_name)
                    .map(|def| TypeNode::Definition(def.to_owned())),
            TypeNodeId::Extension(ext_id) =>
                self.type_extension(*ext_id)
                    .map(|ext| TypeNode::Extension(*ext_id, ext.to_owned())),
        }
    }

    pub fn type_node_directives_mut(
        &mut self,
        id: &TypeNodeId,
    ) -> Option<&mut Vec<ast::schema::Directive>> {
        match id {
            TypeNodeId::Definition(type_name) =>
                self.type_definition_mut(type_name).map(|def| def.directives_mut()),
            TypeNodeId::Extension(ext_id) =>
                self.type_extension_mut(*ext_id).map(|ext| ext.directives_mut()),
        }
    }

    /// Mutable access to the output fields of the identified node. Returns
    /// `None` if the node no longer exists or is not of a field-bearing kind.
    pub fn type_node_fields_mut(
        &mut self,
        id: &TypeNodeId,
    ) -> Option<&mut Vec<ast::schema::Field>> {
        match id {
            TypeNodeId::Definition(type_name) =>
                self.type_definition_mut(type_name)?.fields_mut(),
            TypeNodeId::Extension(ext_id) =>
                self.type_extension_mut(*ext_id)?.fields_mut(),
        }
    }

    // ─── Output ─────────────────────────────────────────────

    /// Converts this document back into a [`graphql_parser`] document:
    /// schema definitions, then directive definitions, then type definitions,
    /// then any type extensions that were never consumed.
    pub fn into_ast(self) -> ast::schema::Document {
        use ast::schema::Definition;
        let definitions =
            self.schema_defs
                .into_iter()
                .map(Definition::SchemaDefinition)
                .chain(
                    self.directive_defs
                        .into_values()
                        .map(Definition::DirectiveDefinition)
                )
                .chain(
                    self.type_defs
                        .into_values()
                        .map(Definition::TypeDefinition)
                )
                .chain(
                    self.type_extensions
                        .into_iter()
                        .filter(|record| !record.consumed)
                        .map(|record| Definition::TypeExtension(record.ext))
                )
                .collect();

        ast::schema::Document { definitions }
    }
}
impl std::fmt::Display for DocumentAst {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.clone().into_ast())
    }
}
