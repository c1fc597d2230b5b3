use member_search_api::api::routes;
use member_search_api::api::state::AppState;
use member_search_api::config::{AppConfig, Profile};
use member_search_api::infrastructure::{db, seed};

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Load environment variables
    dotenv::dotenv().ok();

    let config = AppConfig::from_env().expect("Invalid configuration");

    // Connect to database
    tracing::info!("Connecting to database...");
    let pool = db::connect(&config)
        .await
        .expect("Failed to connect to database");

    db::run_migrations(&pool)
        .await
        .expect("Failed to run database migrations");

    tracing::info!("Database connected successfully");

    if config.profile == Profile::Local {
        seed::seed_sample_data(&pool)
            .await
            .expect("Failed to seed sample data");
    }

    let app = routes::router(AppState::postgres(pool));

    // Start server
    tracing::info!("Server listening on {}", config.bind_addr);

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .expect("Failed to bind address");

    axum::serve(listener, app)
        .await
        .expect("Server failed");
}
