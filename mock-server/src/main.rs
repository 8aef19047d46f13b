use std::sync::Arc;

use mock_jellyfin::Library;
use tokio::{net::TcpListener, sync::RwLock};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let port = std::env::var("PORT").unwrap_or_else(|_| "8096".to_string());
    let addr = format!("127.0.0.1:{port}");

    let mut library = Library::default();
    for name in ["Metropolis", "Nosferatu", "Sunrise"] {
        let id = library.insert(name);
        info!(%id, name, "seeded item");
    }

    let listener = TcpListener::bind(&addr).await?;
    info!("listening on {addr}");
    mock_jellyfin::run(listener, Arc::new(RwLock::new(library))).await
}
