use clap::{Args, Subcommand};

mod create;
mod deactivate;

#[derive(Debug, Args)]
pub(crate) struct CouponCommand {
    #[command(subcommand)]
    command: CouponSubcommand,
}

#[derive(Debug, Subcommand)]
enum CouponSubcommand {
    Create(create::CreateCouponArgs),
    Deactivate(deactivate::DeactivateCouponArgs),
}

pub(crate) async fn run(command: CouponCommand) -> Result<(), String> {
    match command.command {
        CouponSubcommand::Create(args) => create::run(args).await,
        CouponSubcommand::Deactivate(args) => deactivate::run(args).await,
    }
}
