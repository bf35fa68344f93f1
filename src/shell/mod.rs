// Composition root for the members module.
//
// Responsibilities
// - Hold the shared application state.
// - Build the HTTP router and the GraphQL schema on top of it.
// - The binary in main.rs reads config, sets up logging and serves the router.

pub mod graphql;
pub mod http;
pub mod state;
