use axum::{response::IntoResponse, response::Response, routing::get, Router};
use std::any::Any;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{self, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::error;

pub mod catalog;
pub mod config;
pub mod errors;
pub mod quote;
pub mod routes;
pub mod state;

use routes::companies;
use routes::company_data;
use routes::health;
use state::State;

fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(cors::Any)
        .allow_methods(cors::Any)
        .allow_headers(cors::Any)
}

fn handle_panic(panic: Box<dyn Any + Send + 'static>) -> Response {
    let message = if let Some(message) = panic.downcast_ref::<String>() {
        message.clone()
    } else if let Some(message) = panic.downcast_ref::<&str>() {
        message.to_string()
    } else {
        "handler panicked".to_string()
    };

    error!("Request handler panicked: {}", message);

    errors::Error::Upstream(message).into_response()
}

pub fn create_app(state: State) -> Router {
    let api = Router::<State>::new()
        .merge(companies::router())
        .merge(company_data::router())
        .layer(cors_layer());

    Router::new()
        .route("/health", get(health::check))
        .nest("/api", api)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CatchPanicLayer::custom(handle_panic))
}
