mod rules_directive_tests;

use crate::AstBuilder;
use crate::DirectiveRegistry;
use crate::DocumentAst;
use crate::ExtensionRegistry;
use crate::SchemaAstError;

type Result<T> = std::result::Result<T, SchemaAstError>;

fn compile(schema_src: &str) -> Result<DocumentAst> {
    let directives = DirectiveRegistry::with_builtins();
    let extensions = ExtensionRegistry::new();
    AstBuilder::new(&directives, &extensions).generate(schema_src)
}
