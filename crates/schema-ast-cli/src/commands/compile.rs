use crate::output_utils;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use anyhow::Context;
use schema_ast::AstBuilder;
use schema_ast::CompileOptions;
use schema_ast::DirectiveRegistry;
use schema_ast::DocumentAst;
use schema_ast::ExtensionRegistry;
use schema_ast::builder::ExtensionMergePolicy;
use std::collections::HashSet;
use std::path::PathBuf;
use walkdir::WalkDir;

#[derive(Clone, Copy, Debug, Default, clap::ValueEnum)]
enum MergePolicyArg {
    /// Leave extensions of missing or non-object types unmerged.
    #[default]
    Ignore,

    /// Fail the compile on extensions of missing or non-object types.
    Strict,
}
impl std::convert::From<MergePolicyArg> for ExtensionMergePolicy {
    fn from(value: MergePolicyArg) -> Self {
        match value {
            MergePolicyArg::Ignore => Self::Ignore,
            MergePolicyArg::Strict => Self::Strict,
        }
    }
}

#[derive(Debug, clap::Args)]
pub(crate) struct CompileCmd {
    #[arg(
        default_value_t=MergePolicyArg::Ignore,
        help="How to treat `extend type` blocks whose base type is missing or \
             is not an object type.",
        long,
        value_enum,
    )]
    extension_merge_policy: MergePolicyArg,

    #[arg(
        default_values_t=[
            "graphql".to_string(),
            "graphqls".to_string(),
        ],
        help="Set of file extensions to filter to when searching for files \
             within a directory.",
        long,
        value_delimiter = ',',
    )]
    graphql_file_exts: Vec<String>,

    #[arg(
        help="Compile without the built-in @group, @paginate, @rules and \
             @search directives.",
        long,
    )]
    no_builtin_directives: bool,

    #[arg(
        help="Print a summary of the compiled schema instead of its SDL.",
        long,
    )]
    summary: bool,

    #[arg(
        help="Paths to one or more GraphQL files or directories containing \
             GraphQL files which need to be compiled.",
        name="FILE_OR_DIR_PATHS",
        required=true,
    )]
    file_or_dir_paths: Vec<PathBuf>,
}
impl CompileCmd {
    /// Finds every GraphQL file at or under each path passed as an arg, along
    /// with the number of non-file entries that were skipped.
    fn collect_file_paths(
        &self,
        errors: &mut Vec<anyhow::Error>,
    ) -> (Vec<PathBuf>, usize) {
        let graphql_file_exts: HashSet<String> =
            self.graphql_file_exts.iter()
                .map(|ext| ext.trim_start_matches('.').to_string())
                .collect();

        log::debug!(
            "Scanning {} input paths...",
            self.file_or_dir_paths.len(),
        );
        let mut num_skipped = 0;
        let mut file_paths = vec![];
        for path in &self.file_or_dir_paths {
            for entry in WalkDir::new(path.as_path()).follow_links(true).sort_by_file_name() {
                let entry = match entry {
                    Ok(entry) => entry,
                    Err(err) => {
                        log::trace!(
                            "Encountered an error while iterating recursive \
                            filesystem entities at/under {path:#?}."
                        );
                        errors.push(err.into());
                        continue
                    },
                };

                let entry_path = entry.path();
                if !entry.file_type().is_file() {
                    log::trace!("Skipping non-file: {entry_path:#?}.");
                    num_skipped += 1;
                    continue;
                }

                log::trace!("Found file at {entry_path:#?}.");
                let has_graphql_ext =
                    entry_path.extension()
                        .is_some_and(|ext| graphql_file_exts.contains(&*ext.to_string_lossy()));
                if has_graphql_ext {
                    match std::fs::canonicalize(entry_path) {
                        Ok(file_path) => file_paths.push(file_path),
                        Err(err) => errors.push(
                            anyhow::Error::new(err)
                                .context(format!("failed to resolve {entry_path:#?}")),
                        ),
                    }
                }
            }
        }

        // A single explicitly-named file is compiled even if its extension
        // isn't one of `--graphql-file-exts`.
        if file_paths.is_empty()
            && self.file_or_dir_paths.len() == 1
            && let Some(first_arg_path) = self.file_or_dir_paths.first()
            && first_arg_path.is_file() {
            log::warn!(
                "Proceeding to compile {first_arg_path:#?} even though it \
                doesn't match any of the --graphql-file-exts ({}).",
                graphql_file_exts.iter()
                    .map(|ext| format!("`.{ext}`"))
                    .collect::<Vec<_>>()
                    .join(", "),
            );
            file_paths.push(first_arg_path.to_owned());
        }

        (file_paths, num_skipped)
    }

    fn compile(&self, file_paths: &[PathBuf]) -> anyhow::Result<DocumentAst> {
        let directives =
            if self.no_builtin_directives {
                DirectiveRegistry::new()
            } else {
                DirectiveRegistry::with_builtins()
            };
        let extensions = ExtensionRegistry::new();
        let options = CompileOptions {
            extension_merge_policy: self.extension_merge_policy.into(),
        };

        AstBuilder::new(&directives, &extensions)
            .with_options(options)
            .generate_from_files(file_paths)
            .with_context(|| format!("failed to compile {} schema files", file_paths.len()))
    }
}

#[inherent::inherent]
impl RunnableCommand for CompileCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let mut errors: Vec<anyhow::Error> = vec![];
        let (file_paths, num_skipped) = self.collect_file_paths(&mut errors);

        if !errors.is_empty() {
            return CommandResult::stderr(format_args!(
                "{} Errors collecting schema files:\n{}",
                output_utils::RED_X,
                errors.iter()
                    .map(|err| format!("  * {err:#}"))
                    .collect::<Vec<_>>()
                    .join("\n"),
            ));
        }
        if file_paths.is_empty() {
            return CommandResult::stderr(format_args!(
                "{} No GraphQL files found.",
                output_utils::RED_X,
            ));
        }
        log::debug!("Found {} GraphQL files to be compiled.", file_paths.len());

        let document = match self.compile(&file_paths) {
            Ok(document) => document,
            Err(err) => return CommandResult::stderr(format_args!(
                "{} {err:#}",
                output_utils::RED_X,
            )),
        };

        if !self.summary {
            return CommandResult::stdout(format_args!("{document}"));
        }

        CommandResult::stdout(format_args!(
            concat!(
                "{} Schema compiled successfully:\n",
                "  * Compiled {} files.\n",
                "  * Skipped {} non-file entries.\n",
                "  * Produced {} type definitions.\n",
                "  * Merged {} type extensions.\n",
                "  * Left {} type extensions unmerged.",
            ),
            output_utils::GREEN_CHECK,
            file_paths.len(),
            num_skipped,
            document.type_definitions().count(),
            document.consumed_type_extensions().count(),
            document.type_extensions().count(),
        ))
    }
}
