use tokio::net::TcpListener;
use todo_server::{ServerConfig, TodoStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = ServerConfig::from_env()?;
    let listener = TcpListener::bind(config.addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);

    todo_server::run(listener, TodoStore::new()).await?;
    Ok(())
}
