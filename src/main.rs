mod app;
mod cli;
mod client;
mod context;
mod rest;
mod seed;
mod storage;
mod tracing;
mod types;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    app::run().await
}
