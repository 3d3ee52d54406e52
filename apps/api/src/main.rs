use std::sync::Arc;

use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use squad_shuffle_api::api::{self, AppState};
use squad_shuffle_api::config::{AppConfig, StoreKind};
use squad_shuffle_api::domain::repositories::PlayerRepository;
use squad_shuffle_api::domain::shuffle::TeamBalancer;
use squad_shuffle_api::infrastructure::repositories::{
    InMemoryPlayerRepository, PostgresPlayerRepository,
};
use squad_shuffle_api::infrastructure::seed::seed_default_roster;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables
    dotenv::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env()?;

    let players: Arc<dyn PlayerRepository> = match config.store {
        StoreKind::Postgres => {
            // Connect to database
            tracing::info!("Connecting to database...");
            let pool = PgPoolOptions::new()
                .max_connections(config.max_connections)
                .connect(&config.database_url)
                .await?;

            sqlx::migrate!("./migrations").run(&pool).await?;
            tracing::info!("Database connected and migrated");

            Arc::new(PostgresPlayerRepository::new(pool))
        }
        StoreKind::Memory => {
            tracing::warn!("Using in-memory player store; players are lost on restart");
            Arc::new(InMemoryPlayerRepository::new())
        }
    };

    if config.seed_roster {
        seed_default_roster(players.as_ref()).await?;
    }

    let balancer = TeamBalancer::new(config.balance_strategy);
    tracing::info!(strategy = %balancer.strategy(), "Team balancer ready");

    let app = api::router(AppState::new(players, balancer));

    // Start server
    let addr = config.bind_addr();
    tracing::info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
