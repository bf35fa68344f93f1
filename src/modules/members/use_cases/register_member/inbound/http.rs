use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};

use crate::modules::members::core::validation::{Field, FieldError};
use crate::modules::members::use_cases::register_member::command::RegisterMember;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<RegisterMember>, JsonRejection>,
) -> impl IntoResponse {
    let Json(command) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    match state.register_handler.handle(command).await {
        Ok(member) => (StatusCode::CREATED, Json(member)).into_response(),
        Err(errors) if errors.get(Field::Email) == Some(FieldError::EmailTaken) => {
            (StatusCode::CONFLICT, Json(errors)).into_response()
        }
        Err(errors) => (StatusCode::BAD_REQUEST, Json(errors)).into_response(),
    }
}
