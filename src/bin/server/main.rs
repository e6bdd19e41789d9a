use anyhow::{Context, Result};
use clap::Parser;
use gallery_server::{
    adapters::inbound::http::router::{create_router, AppState},
    app::{AppBuilder, AppConfig, StorageBackend},
};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "gallery-server")]
#[command(about = "An image gallery server backed by S3-compatible storage", long_about = None)]
struct Cli {
    /// Server port to listen on
    #[arg(short, long, env = "PORT", default_value = "5000")]
    port: u16,

    /// Server host to bind to
    #[arg(long, env = "SERVER_HOST", default_value = "0.0.0.0")]
    host: String,

    /// Storage backend type
    #[arg(long, env = "STORAGE_BACKEND", default_value = "minio")]
    storage_backend: String,

    /// S3/MinIO endpoint (host:port)
    #[arg(long, env = "MINIO_ENDPOINT", default_value = "127.0.0.1:9000")]
    minio_endpoint: String,

    /// Bucket holding the gallery images
    #[arg(long, env = "MINIO_BUCKET", default_value = "gallery")]
    bucket: String,

    /// S3 access key
    #[arg(long, env = "MINIO_ACCESS_KEY")]
    access_key: Option<String>,

    /// S3 secret key
    #[arg(long, env = "MINIO_SECRET_KEY")]
    secret_key: Option<String>,

    /// Use TLS when talking to the storage endpoint
    #[arg(long, env = "MINIO_SECURE", default_value = "false")]
    secure: bool,

    /// Log level
    #[arg(long, env = "LOG_LEVEL", default_value = "info")]
    log_level: String,
}

impl Cli {
    fn to_app_config(&self) -> Result<AppConfig> {
        let storage_backend = match self.storage_backend.as_str() {
            "memory" => StorageBackend::InMemory {
                bucket: self.bucket.clone(),
            },
            "minio" => {
                let access_key = self
                    .access_key
                    .clone()
                    .context("MINIO_ACCESS_KEY is required for the minio backend")?;
                let secret_key = self
                    .secret_key
                    .clone()
                    .context("MINIO_SECRET_KEY is required for the minio backend")?;

                StorageBackend::Minio {
                    endpoint: self.minio_endpoint.clone(),
                    bucket: self.bucket.clone(),
                    access_key,
                    secret_key,
                    use_ssl: self.secure,
                }
            }
            _ => anyhow::bail!("Unknown storage backend: {}", self.storage_backend),
        };

        Ok(AppConfig { storage_backend })
    }

    fn log_filter(&self) -> EnvFilter {
        EnvFilter::try_new(&self.log_level).unwrap_or_else(|_| EnvFilter::new("info"))
    }

    fn init_logging(&self) -> Result<()> {
        tracing_subscriber::registry()
            .with(self.log_filter())
            .with(tracing_subscriber::fmt::layer())
            .init();

        Ok(())
    }
}

/// Load environment configuration.
///
/// When CONFIG_PATH is set the file it names must exist; a missing file
/// is a startup failure rather than a silent fallback.
fn load_env_config() -> Result<()> {
    match std::env::var("CONFIG_PATH") {
        Ok(path) => {
            dotenvy::from_path(&path)
                .with_context(|| format!("Failed to load config file: {}", path))?;
        }
        Err(_) => {
            dotenvy::dotenv().ok();
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    load_env_config()?;

    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging
    cli.init_logging()?;

    info!("Starting Gallery Server");
    info!("Storage backend: {}", cli.storage_backend);

    // Create app configuration
    let config = cli.to_app_config()?;

    // Build the application; for the minio backend this provisions the
    // bucket and aborts on failure
    let services = AppBuilder::new()
        .with_config(config)
        .build()
        .await
        .context("Failed to build application")?;

    let state = AppState::new(services);
    let router = create_router(state);

    // Bind to address
    let addr: SocketAddr = format!("{}:{}", cli.host, cli.port).parse()?;
    let listener = TcpListener::bind(addr).await?;

    info!("Server listening on http://{}", addr);

    // Start the server
    axum::serve(listener, router)
        .await
        .context("Failed to start server")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parsing() {
        let cli = Cli::parse_from([
            "gallery-server",
            "--port",
            "8080",
            "--storage-backend",
            "minio",
            "--bucket",
            "photos",
            "--access-key",
            "test-key",
            "--secret-key",
            "test-secret",
        ]);

        assert_eq!(cli.port, 8080);
        assert_eq!(cli.bucket, "photos");

        let config = cli.to_app_config().unwrap();
        match config.storage_backend {
            StorageBackend::Minio {
                endpoint, bucket, ..
            } => {
                assert_eq!(endpoint, "127.0.0.1:9000");
                assert_eq!(bucket, "photos");
            }
            _ => panic!("Expected Minio backend"),
        }
    }

    #[test]
    fn test_minio_backend_requires_credentials() {
        let cli = Cli::parse_from(["gallery-server"]);

        assert!(cli.to_app_config().is_err());
    }

    #[test]
    fn test_log_level_flag_feeds_the_filter() {
        let cli = Cli::parse_from(["gallery-server", "--log-level", "debug"]);
        assert_eq!(cli.log_filter().to_string(), "debug");

        let cli = Cli::parse_from(["gallery-server", "--log-level", "not a level"]);
        assert_eq!(cli.log_filter().to_string(), "info");
    }

    #[test]
    fn test_memory_config() {
        let cli = Cli::parse_from(["gallery-server", "--storage-backend", "memory"]);

        let config = cli.to_app_config().unwrap();
        match config.storage_backend {
            StorageBackend::InMemory { bucket } => assert_eq!(bucket, "gallery"),
            _ => panic!("Expected InMemory backend"),
        }
    }
}
