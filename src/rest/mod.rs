use std::net::SocketAddr;
use std::path::Path;

use axum::{routing::get, Router};
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::storage::CatalogStore;

mod handlers;

use handlers::list_cheeses;

#[derive(Clone)]
pub struct AppState<S: CatalogStore> {
    pub storage: S,
}

/// API routes, with every other path falling through to files under `public_dir`.
pub fn router<S: CatalogStore + Clone + Send + Sync + 'static>(
    storage: S,
    public_dir: &Path,
) -> Router {
    let state = AppState { storage };

    Router::new()
        .route("/api/cheeses", get(list_cheeses::<S>))
        .fallback_service(ServeDir::new(public_dir))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn serve<S: CatalogStore + Clone + Send + Sync + 'static>(
    listener: tokio::net::TcpListener,
    storage: S,
    public_dir: &Path,
    shutdown: tokio_util::sync::CancellationToken,
) -> anyhow::Result<()> {
    let addr: SocketAddr = listener.local_addr()?;
    log::info!("🌐 Server listening on http://{}", addr);

    let app = router(storage, public_dir);
    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            shutdown.cancelled().await;
            log::info!("🛑 Server shutdown requested");
        })
        .await?;
    log::info!("👋 Server exited");
    Ok(())
}
