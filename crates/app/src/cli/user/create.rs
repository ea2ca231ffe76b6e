use clap::Args;
use till_app::{
    database,
    identity::{NewUser, PgIdentityService, UserUuid},
};

#[derive(Debug, Args)]
pub(crate) struct CreateUserArgs {
    /// Email address for the new user
    #[arg(long)]
    email: String,

    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,
}

pub(crate) async fn run(args: CreateUserArgs) -> Result<(), String> {
    let pool = database::connect(&args.database_url)
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))?;

    let service = PgIdentityService::new(pool);

    let issued = service
        .create_user(NewUser {
            uuid: UserUuid::new(),
            email: args.email,
        })
        .await
        .map_err(|error| format!("failed to create user: {error}"))?;

    println!("user_uuid: {}", issued.user.uuid);
    println!("user_email: {}", issued.user.email);
    println!("api_token: {}", issued.api_token);
    println!("store this token now; it is only shown once");

    Ok(())
}
