use std::net::SocketAddr;
use std::path::PathBuf;

const IN_MEMORY: &str = ":memory:";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Database {
    InMemory,
    File(PathBuf),
}

/// Runtime settings resolved from the command line and environment.
#[derive(Clone, Debug)]
pub struct Context {
    pub listen: SocketAddr,
    pub database: Database,
    pub public_dir: PathBuf,
    pub log_file: Option<PathBuf>,
}

impl Context {
    pub fn from_cli(cli: &crate::cli::Cli) -> Self {
        let database = if cli.database == IN_MEMORY {
            Database::InMemory
        } else {
            Database::File(PathBuf::from(&cli.database))
        };
        Self {
            listen: cli.listen,
            database,
            public_dir: PathBuf::from(&cli.public_dir),
            log_file: cli.log_file.as_ref().map(PathBuf::from),
        }
    }
}
