mod compile;

use crate::Cli;
use crate::CommandResult;
use compile::CompileCmd;

#[derive(Debug, clap::Parser)]
#[command(name = "schema-ast")]
pub(crate) enum CommandEnum {
    /// Compile one or more schema files and print the resulting SDL.
    Compile(Box<CompileCmd>),
}
impl CommandEnum {
    pub(crate) async fn run(self, cli: Cli) -> CommandResult {
        match self {
            Self::Compile(cmd) => cmd.run(cli).await
        }
    }
}
