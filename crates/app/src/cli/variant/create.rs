use clap::Args;
use till_app::{
    database::{self, Db},
    domain::catalog::{PgCatalogService, data::NewVariant, records::VariantUuid},
};

#[derive(Debug, Args)]
pub(crate) struct CreateVariantArgs {
    /// Variant display name
    #[arg(long)]
    name: String,

    /// Unit price in minor units
    #[arg(long)]
    price: u64,

    /// Initial stock count
    #[arg(long, default_value_t = 0)]
    stock_count: u64,

    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,
}

pub(crate) async fn run(args: CreateVariantArgs) -> Result<(), String> {
    let pool = database::connect(&args.database_url)
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))?;

    let service = PgCatalogService::new(Db::new(pool));

    let variant = service
        .create_variant(NewVariant {
            uuid: VariantUuid::new(),
            name: args.name,
            price: args.price,
            stock_count: args.stock_count,
        })
        .await
        .map_err(|error| format!("failed to create variant: {error}"))?;

    println!("variant_uuid: {}", variant.uuid);
    println!("variant_name: {}", variant.name);
    println!("variant_price: {}", variant.price);
    println!("variant_stock_count: {}", variant.stock_count);

    Ok(())
}
