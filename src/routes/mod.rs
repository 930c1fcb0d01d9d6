use std::sync::Arc;

use axum::{Router, routing::get};
use pokeday_client::Client;

use crate::dataset::Dataset;

mod health;
mod pokemon_of_day;
mod today;

/// State for the public proxy hop.
#[derive(Clone)]
pub struct ProxyState {
    pub upstream: Client,
}

/// State for the private provider hop.
#[derive(Clone)]
pub struct UpstreamState {
    pub dataset: Arc<Dataset>,
}

/// Router for the presentation-facing proxy server.
pub fn proxy_router(state: ProxyState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/api/pokemonOfDay", get(pokemon_of_day::get_pokemon_of_day))
        .with_state(state)
}

/// Router for the private provider that owns the day → entry mapping.
pub fn upstream_router(state: UpstreamState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/", get(today::index))
        .route("/today", get(today::get_today))
        .with_state(state)
}
