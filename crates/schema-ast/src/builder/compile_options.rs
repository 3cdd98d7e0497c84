/// What the extension-merge pass does with an object type extension that has
/// nothing to merge into.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtensionMergePolicy {
    /// Leave the extension unmerged and carry on.
    #[default]
    Ignore,

    /// Fail the compile with
    /// [`SchemaAstError::ExtensionOfUndefinedType`](crate::SchemaAstError::ExtensionOfUndefinedType)
    /// or
    /// [`SchemaAstError::InvalidExtensionType`](crate::SchemaAstError::InvalidExtensionType).
    Strict,
}

#[derive(Clone, Debug, Default, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct CompileOptions {
    pub extension_merge_policy: ExtensionMergePolicy,
}
