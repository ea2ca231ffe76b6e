use clap::Args;
use jiff::Timestamp;
use till_app::{
    database::{self, Db},
    domain::coupons::{PgCouponsService, data::NewCoupon, records::CouponUuid},
};

#[derive(Debug, Args)]
pub(crate) struct CreateCouponArgs {
    /// Coupon code customers redeem at checkout
    #[arg(long)]
    code: String,

    /// Flat discount in minor units
    #[arg(long)]
    discount_amount: u64,

    /// Expiration timestamp (RFC 3339)
    #[arg(long)]
    expires_at: String,

    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,
}

pub(crate) async fn run(args: CreateCouponArgs) -> Result<(), String> {
    let expires_at = args
        .expires_at
        .parse::<Timestamp>()
        .map_err(|error| format!("invalid expires-at timestamp: {error}"))?;

    if expires_at <= Timestamp::now() {
        return Err("expires-at must be in the future".to_string());
    }

    let pool = database::connect(&args.database_url)
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))?;

    let service = PgCouponsService::new(Db::new(pool));

    let coupon = service
        .create_coupon(NewCoupon {
            uuid: CouponUuid::new(),
            code: args.code,
            discount_amount: args.discount_amount,
            expires_at,
        })
        .await
        .map_err(|error| format!("failed to create coupon: {error}"))?;

    println!("coupon_uuid: {}", coupon.uuid);
    println!("coupon_code: {}", coupon.code);
    println!("discount_amount: {}", coupon.discount_amount);
    println!("expires_at: {}", coupon.expires_at);

    Ok(())
}
