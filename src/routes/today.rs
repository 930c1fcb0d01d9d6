use axum::{Json, extract::State};
use chrono::Utc;
use pokeday_core::{Entry, day_index};
use serde_json::json;

use super::UpstreamState;
use crate::error::AppError;

/// GET / - service info for the provider hop.
pub async fn index() -> Json<serde_json::Value> {
    Json(json!({
        "message": "Pokemon of the Day API is running!",
        "today_endpoint": "/today",
    }))
}

/// GET /today - the entry for the current day of the year (UTC).
///
/// Failure modes: 503 when the dataset is empty, 404 when today's day has no
/// record. The day index is recomputed on every request since "today" can
/// change between calls.
#[tracing::instrument(skip(state))]
pub async fn get_today(State(state): State<UpstreamState>) -> Result<Json<Entry>, AppError> {
    let day = day_index(Utc::now().date_naive());
    let entry = state.dataset.entry_for_day(day)?;
    tracing::debug!(day, name = %entry.name, "serving entry of the day");
    Ok(Json(entry))
}
