use companydata::config::{Config, DEFAULT_LOG_FILTER};
use companydata::create_app;
use companydata::state::State;
use tokio::net::TcpListener;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    stockview::logger::init_tracing(DEFAULT_LOG_FILTER);

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(err) => {
            error!("Invalid configuration: {}", err);
            std::process::exit(1);
        }
    };

    let state = match State::from_config(&config) {
        Ok(state) => state,
        Err(err) => {
            error!("Failed to build market data client: {}", err);
            std::process::exit(1);
        }
    };

    let listener = match TcpListener::bind(config.address()).await {
        Ok(listener) => listener,
        Err(err) => {
            error!("Failed to bind {}: {}", config.address(), err);
            std::process::exit(1);
        }
    };

    info!("Starting companydata on {}", config.address());

    if let Err(err) = axum::serve(listener, create_app(state)).await {
        error!("Server stopped: {}", err);
        std::process::exit(1);
    }
}
