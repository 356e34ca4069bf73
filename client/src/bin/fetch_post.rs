//! Fetch one post from the configured GraphQL endpoint and log the outcome.
//!
//! Settings come from `GRAPHQL_CLIENT_*` environment variables, CLI flags, or
//! configuration files via [`ClientSettings`]. Log output is JSON, filtered by
//! `RUST_LOG`.

use std::env;
use std::sync::Arc;

use color_eyre::eyre::{Result, WrapErr, eyre};
use graphql_client_core::ClientSettings;
use graphql_client_core::domain::{ExecuteError, OperationExecutor, catalogue};
use graphql_client_core::outbound::graphql_http::{DEFAULT_USER_AGENT, ReqwestGraphQlTransport};
use ortho_config::OrthoConfig;
use tokio::runtime::Builder;
use tracing::{error, info, warn};
use tracing_subscriber::{EnvFilter, fmt};

fn main() -> Result<()> {
    color_eyre::install()?;
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = ClientSettings::load_from_iter(env::args_os())
        .map_err(|error| eyre!("failed to load client settings: {error}"))?;

    let runtime = Builder::new_current_thread()
        .enable_all()
        .build()
        .wrap_err("failed to create Tokio runtime")?;
    runtime.block_on(fetch_post(&settings))
}

async fn fetch_post(settings: &ClientSettings) -> Result<()> {
    let endpoint = settings
        .endpoint()
        .wrap_err("configured GraphQL endpoint is not a valid URL")?;
    let transport = ReqwestGraphQlTransport::with_user_agent(
        endpoint,
        settings.timeout(),
        settings.user_agent().unwrap_or(DEFAULT_USER_AGENT),
    )
    .wrap_err("failed to build HTTP client")?;
    let executor = OperationExecutor::new(Arc::new(transport));

    match executor.execute(&catalogue::fetch_post(settings.post_id())).await {
        Ok(post) => {
            info!(
                id = post.id(),
                title = post.title(),
                body = post.body(),
                "fetched post"
            );
            Ok(())
        }
        Err(failure) => {
            match &failure {
                ExecuteError::Server { messages } => {
                    error!(?messages, "server reported errors");
                }
                other => error!(error = %other, retryable = other.is_retryable(), "fetch failed"),
            }
            Err(failure.into())
        }
    }
}
