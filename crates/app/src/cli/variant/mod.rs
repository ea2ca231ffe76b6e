use clap::{Args, Subcommand};

mod create;

#[derive(Debug, Args)]
pub(crate) struct VariantCommand {
    #[command(subcommand)]
    command: VariantSubcommand,
}

#[derive(Debug, Subcommand)]
enum VariantSubcommand {
    Create(create::CreateVariantArgs),
}

pub(crate) async fn run(command: VariantCommand) -> Result<(), String> {
    match command.command {
        VariantSubcommand::Create(args) => create::run(args).await,
    }
}
