use crate::catalog::Catalog;
use crate::state::State;
use axum::{extract::State as AxumState, routing::get, Json, Router};
use tracing::debug;

async fn list(AxumState(state): AxumState<State>) -> Json<&'static Catalog> {
    debug!("Listing {} companies", state.catalog.len());

    Json(state.catalog)
}

pub fn router() -> Router<State> {
    Router::new().route("/companies", get(list))
}
