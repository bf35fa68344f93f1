use axum::{
    Form,
    extract::State,
    response::{Html, IntoResponse, Redirect, Response},
};

use crate::modules::members::adapters::inbound::registration_page::render;
use crate::modules::members::use_cases::register_member::command::RegisterMember;
use crate::shell::state::AppState;

/// Form post from the registration page. Redirects back to the page on success,
/// re-renders it with the submitted values and field errors otherwise.
pub async fn handle(State(state): State<AppState>, Form(command): Form<RegisterMember>) -> Response {
    match state.register_handler.handle(command.clone()).await {
        Ok(_) => Redirect::to("/").into_response(),
        Err(errors) => {
            let members = state.members.list_all().await;
            Html(render(&command, &errors, &members)).into_response()
        }
    }
}
