use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::bail;
use axum_extra::extract::cookie::Key;
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use bucketlist::auth::{decode_key, encode_key};
use bucketlist::config::ServerConfig;
use bucketlist::server::{AppState, create_router};
use bucketlist::store::{SqliteStore, Store};

#[cfg(unix)]
fn set_restrictive_permissions(path: &std::path::Path) {
    use std::os::unix::fs::PermissionsExt;
    if let Err(e) = fs::set_permissions(path, fs::Permissions::from_mode(0o600)) {
        tracing::warn!("Failed to set permissions on {}: {e}", path.display());
    }
}

#[derive(Parser)]
#[command(name = "bucketlist")]
#[command(about = "A bucket list web app", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the database and session key
    Init {
        /// Data directory for the database and session key
        #[arg(long, default_value = "./data")]
        data_dir: String,
    },

    /// Start the server
    Serve {
        /// Host to bind to
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Port to bind to
        #[arg(long, short, default_value = "5000")]
        port: u16,

        /// Data directory for the database and session key
        #[arg(long, default_value = "./data")]
        data_dir: String,
    },
}

fn run_init(data_dir: String) -> anyhow::Result<()> {
    let config = ServerConfig {
        data_dir: PathBuf::from(data_dir),
        ..ServerConfig::default()
    };
    fs::create_dir_all(&config.data_dir)?;

    let key_file = config.session_key_path();
    if key_file.exists() {
        bail!(
            "Already initialized. Session key exists at: {}",
            key_file.display()
        );
    }

    let store = SqliteStore::new(config.db_path())?;
    store.initialize()?;

    fs::write(&key_file, encode_key(&Key::generate()))?;

    #[cfg(unix)]
    set_restrictive_permissions(&key_file);

    println!("Initialized database at {}", config.db_path().display());
    println!("Session key written to {}", key_file.display());

    Ok(())
}

async fn run_serve(config: ServerConfig) -> anyhow::Result<()> {
    let key_file = config.session_key_path();
    if !key_file.exists() {
        bail!("Not initialized. Run 'bucketlist init' first to create the database and session key.");
    }
    let cookie_key = decode_key(&fs::read_to_string(&key_file)?)?;

    let store = SqliteStore::new(config.db_path())?;
    store.initialize()?;

    let state = AppState::new(Arc::new(store), cookie_key);
    let app = create_router(state);
    let addr = config.socket_addr()?;

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("bucketlist=info".parse()?))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Init { data_dir } => run_init(data_dir)?,
        Commands::Serve {
            host,
            port,
            data_dir,
        } => {
            let config = ServerConfig {
                host,
                port,
                data_dir: data_dir.into(),
            };
            run_serve(config).await?;
        }
    }

    Ok(())
}
