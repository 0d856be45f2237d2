use axum::{
    Json,
    extract::{Path, State},
    response::{IntoResponse, Response},
};

use crate::modules::trackings::core::errors::ValidationError;
use crate::shell::http::error_response;
use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>, Path(shipment_id): Path<String>) -> Response {
    match state.list_handler.handle(&shipment_id).await {
        Ok(trackings) => Json(trackings).into_response(),
        Err(error) => error_response(error),
    }
}

/// Answers list requests that carry no shipment id segment at all.
pub async fn handle_missing_shipment_id() -> Response {
    error_response(ValidationError::MissingShipmentId.into())
}
