use clap::Parser;
use std::env;

use crate::cli::Command;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Serve the cheese catalog API and its static page",
    long_about = "Recreates the catalog table, loads the sample cheeses and serves GET /api/cheeses together with the files of the public directory.",
    subcommand_required = false,
    arg_required_else_help = false
)]
pub struct Cli {
    #[arg(
        long,
        env = "CATALOG_LISTEN",
        value_name = "ADDR",
        default_value = "127.0.0.1:3002",
        help = "HTTP listen address (host:port)"
    )]
    pub listen: std::net::SocketAddr,

    #[arg(
        long,
        env = "CATALOG_DATABASE",
        value_name = "PATH",
        default_value = ".cheese-catalog/catalog.sqlite",
        help = "SQLite database file, or :memory: for a throwaway store"
    )]
    pub database: String,

    #[arg(
        long = "public-dir",
        env = "CATALOG_PUBLIC_DIR",
        value_name = "DIR",
        default_value = "public",
        help = "Directory served for every path outside the API"
    )]
    pub public_dir: String,

    #[arg(
        long = "log-file",
        env = "CATALOG_LOG_FILE",
        value_name = "PATH",
        help = "Write logs to PATH (in addition to stderr)"
    )]
    pub log_file: Option<String>,

    #[command(subcommand)]
    pub cmd: Option<Command>,
}

pub fn parse() -> Cli {
    let dotenv_path = env::var("DOTENV_PATH").unwrap_or(".env".into());
    dotenvy::from_filename(&dotenv_path).ok();

    Cli::parse()
}
