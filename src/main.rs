use dioxus_logger::tracing::{self, Level};
use showcase::server::{
    config::Config, error::Error, model::app::AppState, router, startup,
};

#[tokio::main]
async fn main() {
    let level = if cfg!(debug_assertions) {
        Level::DEBUG
    } else {
        Level::INFO
    };
    if let Err(e) = dioxus_logger::init(level) {
        eprintln!("Failed to initialize logger: {}", e);
    }

    dotenvy::dotenv().ok();
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = run(config).await {
        tracing::error!("Server stopped: {}", e);
        std::process::exit(1);
    }
}

async fn run(config: Config) -> Result<(), Error> {
    let db = startup::connect_to_database(&config).await?;
    let listener = startup::bind_listener(&config).await?;

    tracing::info!(port = config.port, "Starting server");

    let app = router::routes().with_state(AppState { db });
    axum::serve(listener, app).await?;

    Ok(())
}
