use clap::{Parser, Subcommand};

mod coupon;
mod user;
mod variant;

#[derive(Debug, Parser)]
#[command(name = "till-app", about = "Till CLI", long_about = None)]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    Coupon(coupon::CouponCommand),
    User(user::UserCommand),
    Variant(variant::VariantCommand),
}

impl Cli {
    pub(crate) async fn run(self) -> Result<(), String> {
        match self.command {
            Commands::Coupon(command) => coupon::run(command).await,
            Commands::User(command) => user::run(command).await,
            Commands::Variant(command) => variant::run(command).await,
        }
    }
}
