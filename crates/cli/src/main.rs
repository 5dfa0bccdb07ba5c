use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};
use taxi_fleet_core::{
    DB_PATH_ENV, DB_POOL_SIZE_ENV, DEFAULT_DB_POOL_SIZE, DEFAULT_PORT, env_parse_with_default,
};
use taxi_fleet_storage::StorageBackend;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "taxi-fleet")]
#[command(about = "Taxi fleet resource manager", long_about = None)]
struct Cli {
    /// Durable database file (overrides TAXI_FLEET_DB_PATH)
    #[arg(long, global = true)]
    db_path: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

/// Which fleet backend `serve` runs on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum BackendKind {
    /// Volatile in-process fleet, lost on exit
    Memory,
    /// Durable SQLite database file
    Sqlite,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP API server
    Serve {
        #[arg(short, long, default_value_t = DEFAULT_PORT)]
        port: u16,
        #[arg(short = 'H', long, default_value = "127.0.0.1")]
        host: String,
        #[arg(short, long, value_enum, default_value_t = BackendKind::Sqlite)]
        backend: BackendKind,
    },
    /// Print taxis in the durable fleet as JSON
    List {
        /// Only taxis with exactly this status
        #[arg(short, long)]
        status: Option<String>,
    },
    /// Add a taxi to the durable fleet
    Create {
        number: String,
        #[arg(short, long)]
        driver: Option<String>,
        #[arg(short, long)]
        status: Option<String>,
    },
    /// Remove every taxi from the durable fleet
    Reset,
}

pub(crate) fn get_db_path(db_path: Option<PathBuf>) -> PathBuf {
    db_path.or_else(|| std::env::var_os(DB_PATH_ENV).map(PathBuf::from)).unwrap_or_else(|| {
        dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("taxi-fleet")
            .join("taxi_fleet.db")
    })
}

pub(crate) fn ensure_db_dir(db_path: &Path) -> Result<()> {
    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    Ok(())
}

pub(crate) async fn open_durable(db_path: Option<PathBuf>) -> Result<StorageBackend> {
    let db_path = get_db_path(db_path);
    ensure_db_dir(&db_path)?;
    let pool_size = env_parse_with_default(DB_POOL_SIZE_ENV, DEFAULT_DB_POOL_SIZE).max(1);
    Ok(StorageBackend::new_sqlite(&db_path, pool_size).await?)
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { port, host, backend } => {
            commands::serve::run(host, port, backend, cli.db_path).await?;
        },
        Commands::List { status } => commands::fleet::run_list(status, cli.db_path).await?,
        Commands::Create { number, driver, status } => {
            commands::fleet::run_create(number, driver, status, cli.db_path).await?;
        },
        Commands::Reset => commands::fleet::run_reset(cli.db_path).await?,
    }

    Ok(())
}
