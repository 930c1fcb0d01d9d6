use axum::{Json, extract::State};
use pokeday_client::TODAY_PATH;
use pokeday_core::Entry;

use super::ProxyState;
use crate::error::AppError;

/// GET /api/pokemonOfDay - forwards to the private provider's `/today`.
///
/// Exactly one upstream attempt per request. The client validates the status
/// before decoding; any failure on that hop becomes a structured 502 JSON
/// payload via [`AppError`], never a raw error toward the presentation layer.
#[tracing::instrument(skip(state))]
pub async fn get_pokemon_of_day(
    State(state): State<ProxyState>,
) -> Result<Json<Entry>, AppError> {
    let entry = state.upstream.fetch_entry(TODAY_PATH).await?;
    Ok(Json(entry))
}
