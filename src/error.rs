use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use pokeday_client::FetchError;
use thiserror::Error;

use crate::dataset::DatasetError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("upstream fetch failed: {0}")]
    Upstream(#[from] FetchError),

    #[error(transparent)]
    Dataset(#[from] DatasetError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            // Transport, status and decode failures all collapse to the same
            // generic payload: internal failure detail stays out of the
            // public boundary and goes to the log instead.
            AppError::Upstream(e) => {
                tracing::error!("Upstream fetch failed: {:?}", e);
                (
                    StatusCode::BAD_GATEWAY,
                    "Failed to fetch Pokemon of the day".to_string(),
                )
            }
            AppError::Dataset(DatasetError::Empty) => (
                StatusCode::SERVICE_UNAVAILABLE,
                "Service unavailable: Pokemon dataset is missing or empty".to_string(),
            ),
            AppError::Dataset(DatasetError::DayNotFound(day)) => (
                StatusCode::NOT_FOUND,
                format!("No Pokemon data found for day {}", day),
            ),
            AppError::Dataset(e) => {
                tracing::error!("Dataset error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        (status, Json(serde_json::json!({ "error": message }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_dataset_maps_to_503() {
        let response = AppError::Dataset(DatasetError::Empty).into_response();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[test]
    fn test_missing_day_maps_to_404() {
        let response = AppError::Dataset(DatasetError::DayNotFound(200)).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_upstream_failure_maps_to_502() {
        let response = AppError::Upstream(FetchError::Status {
            status: StatusCode::SERVICE_UNAVAILABLE,
        })
        .into_response();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }
}
