use axum::{
    Json, Router,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::Serialize;
use tower_http::trace::TraceLayer;

use crate::modules::trackings::core::errors::ApplicationError;
use crate::modules::trackings::use_cases::create_tracking::inbound::http as create_http;
use crate::modules::trackings::use_cases::list_trackings_by_shipment::inbound::http as list_http;
use crate::shell::state::AppState;

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

/// Validation failures go back to the caller verbatim; internal failures are
/// logged and answered with a generic body.
pub fn error_response(error: ApplicationError) -> Response {
    match error {
        ApplicationError::Validation(validation) => (
            StatusCode::BAD_REQUEST,
            Json(ErrorBody::new(validation.to_string())),
        )
            .into_response(),
        ApplicationError::Internal(cause) => {
            tracing::error!(error = ?cause, "request failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorBody::new("Internal server error")),
            )
                .into_response()
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/service/trackings",
            post(create_http::handle).get(list_http::handle_missing_shipment_id),
        )
        .route(
            "/service/trackings/",
            get(list_http::handle_missing_shipment_id),
        )
        .route("/service/trackings/{id}", get(list_http::handle))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
