use clap::Args;
use till_app::{
    database::{self, Db},
    domain::coupons::PgCouponsService,
};

#[derive(Debug, Args)]
pub(crate) struct DeactivateCouponArgs {
    /// Code of the coupon to deactivate
    #[arg(long)]
    code: String,

    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,
}

pub(crate) async fn run(args: DeactivateCouponArgs) -> Result<(), String> {
    let pool = database::connect(&args.database_url)
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))?;

    let service = PgCouponsService::new(Db::new(pool));

    let coupon = service
        .deactivate_coupon(&args.code)
        .await
        .map_err(|error| format!("failed to deactivate coupon: {error}"))?;

    println!("coupon_uuid: {}", coupon.uuid);
    println!("coupon_code: {}", coupon.code);
    println!("is_active: {}", coupon.is_active);

    Ok(())
}
