mod wiring;

use crate::{
    cli,
    context::{self, Database},
    rest, seed,
    storage::{CatalogStore, SqliteStore},
};
use anyhow::{Context as AnyhowContext, Result};
use std::sync::Arc;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

/// The catalog service: configuration plus an injected store handle.
pub struct App<S: CatalogStore = Arc<SqliteStore>> {
    ctx: context::Context,
    storage: S,
    shutdown: CancellationToken,
}

impl App {
    /// Startup steps 1-3: connect, recreate the table, load the sample rows.
    /// Nothing listens until this has returned `Ok`.
    pub fn bootstrap(ctx: context::Context) -> Result<Self> {
        log_startup_info(&ctx);

        wiring::init_data_dir(&ctx)?;
        let storage = wiring::init_storage(&ctx)?;

        let app = App::new(ctx, storage);
        app.prepare_catalog()?;
        Ok(app)
    }
}

impl<S: CatalogStore + Clone + Send + Sync + 'static> App<S> {
    fn new(ctx: context::Context, storage: S) -> Self {
        Self {
            ctx,
            storage,
            shutdown: CancellationToken::new(),
        }
    }

    fn prepare_catalog(&self) -> Result<usize> {
        self.storage
            .recreate_schema()
            .context("recreating the catalog table")?;
        log::info!("🗄️ Catalog table created");

        let inserted = self
            .storage
            .insert_many(&seed::sample_cheeses())
            .context("loading sample cheeses")?;
        log::info!("🧀 Loaded {} sample cheeses", inserted.len());
        Ok(inserted.len())
    }

    /// Step 4: bind, serve until Ctrl-C or until the server stops on its own.
    pub async fn run_daemon(&self) -> Result<()> {
        let listener = tokio::net::TcpListener::bind(self.ctx.listen)
            .await
            .with_context(|| format!("binding {}", self.ctx.listen))?;

        let server = self.spawn_server(listener);
        self.wait_for_shutdown(server).await
    }

    fn spawn_server(&self, listener: tokio::net::TcpListener) -> JoinHandle<()> {
        let store = self.storage.clone();
        let public_dir = self.ctx.public_dir.clone();
        let token = self.shutdown.clone();

        tokio::spawn(async move {
            if let Err(e) = rest::serve(listener, store, &public_dir, token).await {
                log::error!("HTTP server failed: {:#}", e);
            }
        })
    }

    async fn wait_for_shutdown(&self, mut server: JoinHandle<()>) -> Result<()> {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {
                log::info!("🧨 Ctrl-C received, shutting down...");
            }
            res = &mut server => {
                self.shutdown.cancel();
                if let Err(e) = res {
                    log::error!("HTTP server task failed: {}", e);
                }
                log::error!("HTTP server exited unexpectedly");
                anyhow::bail!("HTTP server exited unexpectedly");
            }
        }

        self.drain_server(server).await?;
        log::info!("✅ Shutdown complete");
        Ok(())
    }

    /// Cancels the server and waits for in-flight requests to finish.
    async fn drain_server(&self, server: JoinHandle<()>) -> Result<()> {
        self.shutdown.cancel();
        if let Err(e) = server.await {
            log::error!("HTTP server task failed during shutdown: {}", e);
            return Err(e.into());
        }
        Ok(())
    }
}

fn log_startup_info(ctx: &context::Context) {
    log::info!("🚀 Starting cheese-catalog");
    match &ctx.database {
        Database::InMemory => log::info!("📂 Database: in-memory"),
        Database::File(path) => log::info!("📂 Database: {}", path.display()),
    }
    log::info!("🗂️ Public dir: {}", ctx.public_dir.display());
    if let Some(path) = ctx.log_file.as_deref() {
        log::info!("📝 Log file: {}", path.display());
    }
}

// --- Entry Point ---

pub async fn run() -> Result<()> {
    let cli = cli::parse();
    let ctx = context::Context::from_cli(&cli);
    crate::tracing::init(ctx.log_file.as_deref())?;

    // Handle one-shot commands
    if let Some(cmd) = &cli.cmd {
        return cmd.run().await;
    }

    let app = match App::bootstrap(ctx) {
        Ok(app) => app,
        Err(e) => {
            log::error!("❌ Failed to start server: {:#}", e);
            return Err(e);
        }
    };
    app.run_daemon().await
}
