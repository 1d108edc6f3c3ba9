use crate::server::{config::Config, error::AppError, service::setup::SetupCodeService};

/// Connects to the database and runs pending migrations.
///
/// Establishes a connection pool using the configured connection string,
/// then applies all pending SeaORM migrations so the schema is up to date
/// before the first request is served.
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// First-run bootstrap: when no admin account exists, generate a one-time
/// setup code and write it to the log. Registering with that code within
/// its lifetime creates the initial admin.
pub async fn check_for_admin(
    db: &sea_orm::DatabaseConnection,
    setup_codes: &SetupCodeService,
) -> Result<(), AppError> {
    use crate::server::data::user::UserRepository;

    if UserRepository::new(db).admin_exists().await? {
        return Ok(());
    }

    let code = setup_codes.generate().await;

    tracing::warn!("No admin account found.");
    tracing::warn!(
        "Register the first admin via POST /auth/register with \"setupCode\": \"{}\" (valid for 10 minutes).",
        code
    );

    Ok(())
}
