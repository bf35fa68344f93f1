use anyhow::Context;
use tracing_subscriber::{EnvFilter, fmt};

use kitchensink::modules::members::adapters::outbound::member_store_in_memory::InMemoryMemberStore;
use kitchensink::shared::config::Config;
use kitchensink::shell::{http, state::AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;

    let store = if config.seed_members {
        InMemoryMemberStore::seeded()
    } else {
        InMemoryMemberStore::new()
    };
    let app = http::router(AppState::in_memory(store));

    let addr = config.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!("Registration page: http://{}/", addr);
    tracing::info!("GraphQL endpoint: http://{}/graphql", addr);
    axum::serve(listener, app).await?;
    Ok(())
}
