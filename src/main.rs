mod model;
mod server;

use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing_subscriber::EnvFilter;

use crate::server::{
    config::Config, router, scheduler::housekeeping, service::auth::token::TokenService,
    service::setup::SetupCodeService, startup, state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let tokens = TokenService::new(&config.jwt_secret, config.access_token_ttl_secs);
    let setup_codes = SetupCodeService::new();

    // First-run bootstrap: print a one-time setup code when no admin exists
    startup::check_for_admin(&db, &setup_codes).await?;

    // Housekeeping: complete past bookings, purge dead refresh tokens
    let scheduler_db = db.clone();
    tokio::spawn(async move {
        if let Err(e) = housekeeping::start_scheduler(scheduler_db).await {
            tracing::error!("Housekeeping scheduler error: {}", e);
        }
    });

    let state = AppState::new(db, tokens, setup_codes, config.refresh_token_ttl_days);

    let app = router::router()
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr = format!("{}:{}", config.bind, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
