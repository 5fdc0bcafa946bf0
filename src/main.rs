use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use launchpad::app::{self, LoadMode};
use launchpad::cache::{FileStore, MemoryStore};
use launchpad::config::Config;
use launchpad::service::{LaunchService, LaunchStore};
use launchpad::spacex::SpaceXClient;

#[derive(Parser)]
#[command(name = "launchpad")]
#[command(about = "List SpaceX launches, served from a local cache")]
#[command(version)]
struct Cli {
    /// Fetch fresh launches even if the cache is populated
    #[arg(short, long, conflicts_with = "offline")]
    force_reload: bool,

    /// Only read the cache, never touch the network
    #[arg(long)]
    offline: bool,

    /// Keep launches in memory for this run instead of the on-disk cache
    #[arg(long, conflicts_with = "offline")]
    no_cache: bool,

    /// Delete the on-disk launch cache before loading
    #[arg(long, conflicts_with = "no_cache")]
    clear_cache: bool,

    /// Directory holding the launch cache
    #[arg(long, value_name = "DIR")]
    cache_dir: Option<PathBuf>,

    /// Base URL of the SpaceX API
    #[arg(long, value_name = "URL")]
    api_url: Option<String>,

    /// Print launches as JSON
    #[arg(long)]
    json: bool,
}

/// Initialize tracing on stderr so stdout carries only the launch list.
fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| "launchpad=info".into()),
    );

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let mut config = Config::from_env()?;
    if let Some(url) = cli.api_url {
        config = config.with_api_url(url)?;
    }
    if let Some(dir) = cli.cache_dir {
        config = config.with_cache_dir(dir);
    }

    let mode = LoadMode::from_flags(cli.force_reload, cli.offline);

    let store: Arc<dyn LaunchStore> = if cli.no_cache {
        Arc::new(MemoryStore::new())
    } else {
        let path = config.launches_path()?;
        tracing::debug!(path = %path.display(), "using launch cache");
        let store = FileStore::new(path);

        if cli.clear_cache {
            store.clear().await?;
            tracing::info!(path = %store.path().display(), "cleared launch cache");
        }
        if mode == LoadMode::Offline {
            match store.cached_at().await? {
                Some(cached_at) => tracing::info!(%cached_at, "serving cached launches"),
                None => tracing::warn!("launch cache is empty"),
            }
        }

        Arc::new(store)
    };

    let source = SpaceXClient::new(&config)?;
    let service = LaunchService::new(source, store);

    let launches = app::load(&service, mode).await?;

    if cli.json {
        println!("{}", app::render_json(&launches)?);
    } else {
        print!("{}", app::render_launches(&launches));
    }

    Ok(())
}
