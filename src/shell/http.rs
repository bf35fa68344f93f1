use axum::{
    Extension, Router,
    routing::{get, post},
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::modules::members::adapters::inbound::registration_page;
use crate::modules::members::use_cases::list_members::inbound::http as list_http;
use crate::modules::members::use_cases::register_member::inbound::form as register_form;
use crate::modules::members::use_cases::register_member::inbound::http as register_http;
use crate::shell::graphql::{self, graphiql};
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    let schema = graphql::schema(state.clone());

    Router::new()
        .route(
            "/",
            get(registration_page::show).post(register_form::handle),
        )
        .route("/rest/members", get(list_http::list).post(register_http::handle))
        .route("/rest/members/{id}", get(list_http::lookup))
        .route("/graphql", get(graphiql).post(graphql::handle))
        .layer(Extension(schema))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
