use crate::ast;
use crate::builder::CompileOptions;
use crate::builder::ExtensionMergePolicy;
use crate::builder::pagination_info_types;
use crate::directives::DirectiveRegistry;
use crate::document::TypeKind;
use crate::document::TypeNodeExt;
use crate::document::TypeNodeId;
use crate::DocumentAst;
use crate::extensions::ExtensionRegistry;
use crate::SchemaAstError;
use std::collections::HashMap;
use std::path::Path;

type Result<T> = std::result::Result<T, SchemaAstError>;

/// Compiles a [`DocumentAst`] into its executable form.
///
/// A compile threads the document through these steps, in this order:
///
/// 1. [Node manipulators](AstBuilder::apply_node_manipulators) for every type
///    extension, then for every type definition.
/// 2. [Extension merging](AstBuilder::merge_type_extensions) of object type
///    extensions into their base object types.
/// 3. [Field manipulators](AstBuilder::apply_field_manipulators) for every
///    field of every object type.
/// 4. [Arg manipulators](AstBuilder::apply_arg_manipulators) for every
///    argument of every field of every object type.
/// 5. [Pagination info types](pagination_info_types::add_pagination_info_types).
/// 6. The [`ExtensionRegistry`] hook.
///
/// Every manipulator is handed both the document as transformed so far and
/// the untouched document the compile started from.
#[derive(Debug)]
pub struct AstBuilder<'a> {
    directives: &'a DirectiveRegistry,
    extensions: &'a ExtensionRegistry,
    options: CompileOptions,
}
impl<'a> AstBuilder<'a> {
    pub fn new(
        directives: &'a DirectiveRegistry,
        extensions: &'a ExtensionRegistry,
    ) -> Self {
        Self {
            directives,
            extensions,
            options: CompileOptions::default(),
        }
    }

    pub fn options(&self) -> &CompileOptions {
        &self.options
    }

    pub fn with_options(mut self, options: CompileOptions) -> Self {
        self.options = options;
        self
    }

    pub fn build(&self, document: DocumentAst) -> Result<DocumentAst> {
        let original_document = document.clone();

        // Node manipulators may be applied to type extensions, so they must
        // run before extensions are merged away.
        let document = self.apply_node_manipulators(document, &original_document)?;
        let document = self.merge_type_extensions(document)?;

        let document = self.apply_field_manipulators(document, &original_document)?;
        let document = self.apply_arg_manipulators(document, &original_document)?;

        let document = pagination_info_types::add_pagination_info_types(document)?;
        self.extensions.manipulate(document)
    }

    pub fn generate(&self, schema_src: &str) -> Result<DocumentAst> {
        self.build(DocumentAst::parse(schema_src)?)
    }

    pub fn generate_from_files(&self, file_paths: &[impl AsRef<Path>]) -> Result<DocumentAst> {
        self.build(DocumentAst::from_files(file_paths)?)
    }

    /// Applies node manipulators to every type extension and then to every
    /// type definition present when the pass starts, in source order.
    pub fn apply_node_manipulators(
        &self,
        document: DocumentAst,
        original_document: &DocumentAst,
    ) -> Result<DocumentAst> {
        let node_ids: Vec<TypeNodeId> =
            document.type_extensions()
                .map(|(ext_id, _)| TypeNodeId::Extension(ext_id))
                .chain(
                    document.type_definitions()
                        .map(|def| TypeNodeId::Definition(def.name().to_string()))
                )
                .collect();
        log::debug!("Applying node manipulators to {} nodes.", node_ids.len());

        node_ids.iter().try_fold(document, |document, node_id| {
            let manipulators = match document.type_node(node_id) {
                Some(node) => self.directives.node_manipulators(node.directives()),
                None => return Ok(document),
            };

            manipulators.into_iter().try_fold(document, |document, resolved| {
                // Re-read the node so each manipulator sees what earlier
                // manipulators did to it.
                let Some(node) = document.type_node(node_id) else {
                    log::trace!(
                        "{node_id:?} was removed; skipping `@{}`.",
                        resolved.directive.name,
                    );
                    return Ok(document);
                };
                log::trace!(
                    "Applying node manipulator `@{}` to `{}`.",
                    resolved.directive.name,
                    node.name(),
                );
                resolved.manipulator
                    .manipulate_node(&resolved.directive, &node, document, original_document)
                    .map_err(|err| SchemaAstError::manipulator_failed(&resolved.directive, err))
            })
        })
    }

    /// Folds the fields of every object type extension into its base object
    /// type: base fields first, then each extension's fields in source order.
    pub fn merge_type_extensions(&self, mut document: DocumentAst) -> Result<DocumentAst> {
        self.check_unmergeable_extensions(&document)?;

        let type_names: Vec<String> =
            document.object_types()
                .map(|obj_type| obj_type.name.to_string())
                .collect();

        for type_name in type_names {
            let ext_ids: Vec<_> =
                document.type_extensions_of(type_name.as_str())
                    .filter(|(_, ext)| ext.kind() == TypeKind::Object)
                    .map(|(ext_id, _)| ext_id)
                    .collect();
            if ext_ids.is_empty() {
                continue;
            }

            let Some(mut merged_type) = document.object_type(type_name.as_str()).cloned() else {
                continue;
            };
            for ext_id in ext_ids {
                if let Some(ast::schema::TypeExtension::Object(ext)) =
                    document.consume_type_extension(ext_id) {
                    merged_type.fields.extend(ext.fields.iter().cloned());
                }
            }
            log::trace!(
                "Merged extensions into `{type_name}` ({} fields).",
                merged_type.fields.len(),
            );

            document.set_type_definition(ast::schema::TypeDefinition::Object(merged_type));
        }

        Ok(document)
    }

    fn check_unmergeable_extensions(&self, document: &DocumentAst) -> Result<()> {
        let object_exts =
            document.type_extensions()
                .filter(|(_, ext)| ext.kind() == TypeKind::Object);

        for (_, ext) in object_exts {
            let err = match document.type_definition(ext.name()) {
                Some(ast::schema::TypeDefinition::Object(_)) => continue,
                Some(base_def) => SchemaAstError::InvalidExtensionType {
                    type_name: ext.name().to_string(),
                    base_kind: base_def.kind(),
                    extension_position: ext.position(),
                },
                None => SchemaAstError::ExtensionOfUndefinedType {
                    type_name: ext.name().to_string(),
                    extension_position: ext.position(),
                },
            };

            match self.options.extension_merge_policy {
                ExtensionMergePolicy::Ignore => log::debug!("Not merging: {err}"),
                ExtensionMergePolicy::Strict => return Err(err),
            }
        }

        Ok(())
    }

    /// Applies field manipulators to every field of every object type present
    /// when the pass starts, in source order. Fields that share a name are
    /// each visited.
    pub fn apply_field_manipulators(
        &self,
        document: DocumentAst,
        original_document: &DocumentAst,
    ) -> Result<DocumentAst> {
        let type_names = object_type_names(&document);
        log::debug!("Applying field manipulators to {} object types.", type_names.len());

        type_names.iter().try_fold(document, |document, type_name| {
            let field_keys = field_keys(&document, type_name);
            field_keys.iter().try_fold(document, |document, field_key| {
                let manipulators =
                    match document.object_type(type_name).and_then(|t| field_key.find_field(t)) {
                        Some(field) => self.directives.field_manipulators(&field.directives),
                        None => return Ok(document),
                    };

                manipulators.into_iter().try_fold(document, |document, resolved| {
                    let Some(parent_type) = document.object_type(type_name).cloned() else {
                        return Ok(document);
                    };
                    let Some(field) = field_key.find_field(&parent_type) else {
                        log::trace!(
                            "`{type_name}.{field_key}` was removed; skipping `@{}`.",
                            resolved.directive.name,
                        );
                        return Ok(document);
                    };
                    log::trace!(
                        "Applying field manipulator `@{}` to `{type_name}.{field_key}`.",
                        resolved.directive.name,
                    );
                    resolved.manipulator
                        .manipulate_field(
                            &resolved.directive,
                            field,
                            &parent_type,
                            document,
                            original_document,
                        )
                        .map_err(|err| SchemaAstError::manipulator_failed(&resolved.directive, err))
                })
            })
        })
    }

    /// Applies arg manipulators to every argument of every field of every
    /// object type present when the pass starts, in source order.
    pub fn apply_arg_manipulators(
        &self,
        document: DocumentAst,
        original_document: &DocumentAst,
    ) -> Result<DocumentAst> {
        let type_names = object_type_names(&document);
        log::debug!("Applying arg manipulators to {} object types.", type_names.len());

        type_names.iter().try_fold(document, |document, type_name| {
            let field_keys = field_keys(&document, type_name);
            field_keys.iter().try_fold(document, |document, field_key| {
                let arg_keys =
                    match document.object_type(type_name).and_then(|t| field_key.find_field(t)) {
                        Some(field) => MemberKey::collect(
                            field.arguments.iter().map(|arg| arg.name.as_str()),
                        ),
                        None => return Ok(document),
                    };

                arg_keys.iter().try_fold(document, |document, arg_key| {
                    let manipulators =
                        match document.object_type(type_name)
                            .and_then(|t| field_key.find_field(t))
                            .and_then(|f| arg_key.find_arg(f)) {
                            Some(arg) => self.directives.arg_manipulators(&arg.directives),
                            None => return Ok(document),
                        };

                    manipulators.into_iter().try_fold(document, |document, resolved| {
                        let Some(parent_type) = document.object_type(type_name).cloned() else {
                            return Ok(document);
                        };
                        let Some(parent_field) = field_key.find_field(&parent_type) else {
                            return Ok(document);
                        };
                        let Some(arg) = arg_key.find_arg(parent_field) else {
                            log::trace!(
                                "`{type_name}.{field_key}({arg_key})` was removed; skipping `@{}`.",
                                resolved.directive.name,
                            );
                            return Ok(document);
                        };
                        log::trace!(
                            "Applying arg manipulator `@{}` to `{type_name}.{field_key}({arg_key})`.",
                            resolved.directive.name,
                        );
                        resolved.manipulator
                            .manipulate_arg(
                                &resolved.directive,
                                arg,
                                parent_field,
                                &parent_type,
                                document,
                                original_document,
                            )
                            .map_err(|err| SchemaAstError::manipulator_failed(&resolved.directive, err))
                    })
                })
            })
        })
    }
}

/// Identifies a field or argument captured at the start of a pass as the
/// `occurrence`-th member named `name`, so that same-named siblings stay
/// distinct while other siblings are added or removed.
#[derive(Clone, Debug, Eq, PartialEq)]
struct MemberKey {
    name: String,
    occurrence: usize,
}
impl MemberKey {
    fn collect<'a>(names: impl Iterator<Item = &'a str>) -> Vec<Self> {
        let mut seen: HashMap<&'a str, usize> = HashMap::new();
        names.map(|name| {
            let occurrence = seen.entry(name).or_default();
            let key = Self {
                name: name.to_string(),
                occurrence: *occurrence,
            };
            *occurrence += 1;
            key
        }).collect()
    }

    fn find_arg<'a>(&self, field: &'a ast::schema::Field) -> Option<&'a ast::schema::InputValue> {
        field.arguments
            .iter()
            .filter(|arg| arg.name == self.name)
            .nth(self.occurrence)
    }

    fn find_field<'a>(&self, obj_type: &'a ast::schema::ObjectType) -> Option<&'a ast::schema::Field> {
        obj_type.fields
            .iter()
            .filter(|field| field.name == self.name)
            .nth(self.occurrence)
    }
}
impl std::fmt::Display for MemberKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.occurrence {
            0 => write!(f, "{}", self.name),
            n => write!(f, "{}#{}", self.name, n + 1),
        }
    }
}

fn field_keys(document: &DocumentAst, type_name: &str) -> Vec<MemberKey> {
    document.object_type(type_name)
        .map(|obj_type| MemberKey::collect(obj_type.fields.iter().map(|field| field.name.as_str())))
        .unwrap_or_default()
}

fn object_type_names(document: &DocumentAst) -> Vec<String> {
    document.object_types()
        .map(|obj_type| obj_type.name.to_string())
        .collect()
}

