use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::modules::members::core::member::MemberId;
use crate::shell::state::AppState;

pub async fn list(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.members.list_all().await)
}

pub async fn lookup(State(state): State<AppState>, Path(id): Path<MemberId>) -> impl IntoResponse {
    match state.members.find_by_id(id).await {
        Some(member) => Json(member).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}
