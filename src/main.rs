use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process;
use tracing::{error, info, warn};

mod assets;
mod auth;
mod config;
mod db;
mod logging;
mod optimize;
mod storage;
mod sync;

use crate::assets::AssetLister;
use crate::auth::{Session, StaticSession};
use crate::db::PostgresDatabase;
use crate::optimize::ResizeOptimizer;
use crate::storage::{ObjectStore, S3ObjectStore};
use crate::sync::SyncPipeline;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(
        short,
        long,
        value_name = "FILE",
        default_value = "config.toml",
        global = true
    )]
    config: String,

    /// Show verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List photo assets from the local library
    List,
    /// Sync the named assets to cloud storage
    Sync {
        /// Filenames of assets to sync, as shown by `list`
        #[arg(required = true)]
        filenames: Vec<String>,
    },
    /// Sync every listed asset
    SyncAll,
    /// Download the first of the current user's stored images
    Fetch {
        /// Directory the downloaded image is written to
        #[arg(long, default_value = ".")]
        output: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match config::load_config(&cli.config) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Failed to load configuration from {}: {}", cli.config, e);
            process::exit(1);
        }
    };

    let _log_guard = logging::init_logging(config.logging.as_ref(), cli.verbose)?;

    info!("Photo Synchronizer v{}", env!("CARGO_PKG_VERSION"));

    match cli.command {
        Commands::List => list_assets(&config),
        Commands::Sync { filenames } => sync_assets(&config, filenames).await,
        Commands::SyncAll => sync_all_assets(&config).await,
        Commands::Fetch { output } => fetch_image(&config, &output).await,
    }
}

/// List the library's photo assets and print them
fn list_assets(config: &config::Config) -> Result<()> {
    let lister = AssetLister::new(&config.library);
    let assets = lister.list_photos();

    if assets.is_empty() {
        info!("No photo assets found");
        return Ok(());
    }

    for asset in &assets {
        println!(
            "{}\t{}x{}\t{}",
            asset.filename, asset.width, asset.height, asset.modification_time
        );
    }
    info!("Listed {} photo assets", assets.len());

    Ok(())
}

/// Sync the named assets, continuing past per-asset failures
async fn sync_assets(config: &config::Config, filenames: Vec<String>) -> Result<()> {
    let lister = AssetLister::new(&config.library);
    let assets = lister.list_photos();
    let pipeline = initialize_pipeline(config).await?;

    let mut synced_count = 0;
    for filename in &filenames {
        let Some(asset) = assets.iter().find(|a| &a.filename == filename) else {
            warn!("No asset named {} in the library", filename);
            continue;
        };

        match pipeline.sync_asset(asset).await {
            Ok(synced) => {
                info!("Synced {} -> {}", asset.filename, synced.image_url);
                synced_count += 1;
            }
            Err(e) => {
                // Keep going with the remaining assets
                error!("Failed to sync {}: {}", asset.filename, e);
            }
        }
    }

    info!("Synced {} of {} requested assets", synced_count, filenames.len());
    Ok(())
}

/// Sync every asset the lister returns
async fn sync_all_assets(config: &config::Config) -> Result<()> {
    let lister = AssetLister::new(&config.library);
    let assets = lister.list_photos();

    if assets.is_empty() {
        info!("No photo assets found to sync");
        return Ok(());
    }

    let pipeline = initialize_pipeline(config).await?;

    let mut synced_count = 0;
    for asset in &assets {
        match pipeline.sync_asset(asset).await {
            Ok(synced) => {
                info!("Synced {} -> {}", asset.filename, synced.image_url);
                synced_count += 1;
            }
            Err(e) => {
                error!("Failed to sync {}: {}", asset.filename, e);
            }
        }
    }

    info!("Synced {} of {} assets", synced_count, assets.len());
    Ok(())
}

/// Download the first stored image belonging to the current user
async fn fetch_image(config: &config::Config, output: &std::path::Path) -> Result<()> {
    let session = StaticSession::new(&config.auth);
    let Some(user_id) = session.current_user().await else {
        error!("No authenticated user configured");
        process::exit(1);
    };

    let store = S3ObjectStore::new(&config.storage).await?;
    let keys = store.list_objects(&format!("{}/", user_id)).await?;

    let Some(key) = keys.first() else {
        info!("No stored images found for user {}", user_id);
        return Ok(());
    };

    let data = store.get_object(key).await?;
    let name = key.rsplit('/').next().unwrap_or(key.as_str());
    let path = output.join(name);
    tokio::fs::write(&path, &data)
        .await
        .context(format!("Failed to write {}", path.display()))?;

    info!("Fetched {} to {}", key, path.display());
    Ok(())
}

async fn initialize_pipeline(
    config: &config::Config,
) -> Result<SyncPipeline<StaticSession, ResizeOptimizer, S3ObjectStore, PostgresDatabase>> {
    let session = StaticSession::new(&config.auth);
    let optimizer = ResizeOptimizer::new();
    let object_store = S3ObjectStore::new(&config.storage)
        .await
        .context("Failed to initialize object storage")?;
    let database = PostgresDatabase::new(&config.database)
        .await
        .context("Failed to connect to PostgreSQL database")?;

    let pipeline = SyncPipeline::new(session, optimizer, object_store, database);

    info!("Sync pipeline initialized successfully");

    Ok(pipeline)
}
