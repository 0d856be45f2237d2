use axum::{
    Json,
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::modules::trackings::use_cases::create_tracking::command::CreateTrackingBody;
use crate::shell::http::error_response;
use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>, body: Bytes) -> Response {
    let body = match CreateTrackingBody::from_slice(&body) {
        Ok(body) => body,
        Err(error) => return error_response(error.into()),
    };

    match state.create_handler.handle(body).await {
        Ok(tracking) => (StatusCode::CREATED, Json(tracking)).into_response(),
        Err(error) => error_response(error),
    }
}
