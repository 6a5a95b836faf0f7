use anyhow::Context;

use userreg_api::config::ApiConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    userreg_observability::init();

    let config = ApiConfig::from_env().context("invalid configuration")?;
    let app = userreg_api::app::build_default_app();

    let listener = tokio::net::TcpListener::bind(config.bind_addr())
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr()))?;

    tracing::info!(addr = %listener.local_addr()?, "listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server terminated")?;

    tracing::info!("shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
}
