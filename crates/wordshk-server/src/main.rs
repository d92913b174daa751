use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{Level, info, warn};
use tracing_subscriber::EnvFilter;
use wordshk_db::{Dictionary, LoadMode, LoadOptions, default_workers};

use wordshk_server::{AppState, router};

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_CSV: &str = "wordshk.csv";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = load_config();
    info!("binding to {}:{}", config.host, config.port);
    info!(
        "using dump at {} (mode: {:?}, workers: {})",
        config.csv_path.display(),
        config.load_mode,
        config.workers
    );
    if config.disable_cache {
        info!("cache headers disabled");
    }

    let dict = Dictionary::load_with_options(
        &config.csv_path,
        LoadOptions {
            mode: config.load_mode,
            workers: config.workers,
        },
    )?;
    if dict.stats().errors > 0 {
        warn!("{} rows failed to parse", dict.stats().errors);
    }

    let state = AppState {
        dict: Arc::new(dict),
        disable_cache: config.disable_cache,
    };

    let app = router(state).layer(TraceLayer::new_for_http());
    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .context("invalid listen address")?;
    let listener = TcpListener::bind(addr).await?;

    axum::serve(listener, app).await?;
    Ok(())
}

#[derive(Debug, Clone)]
struct Config {
    host: String,
    port: u16,
    csv_path: PathBuf,
    load_mode: LoadMode,
    workers: usize,
    disable_cache: bool,
}

fn load_config() -> Config {
    let mut disable_cache = false;
    let mut cli_csv: Option<PathBuf> = None;
    let mut cli_mode: Option<LoadMode> = None;
    let mut cli_workers: Option<usize> = None;
    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--no-cache" => disable_cache = true,
            "--csv" => {
                if let Some(path) = args.next() {
                    cli_csv = Some(PathBuf::from(path));
                }
            }
            _ => {
                if let Some(path) = arg.strip_prefix("--csv=") {
                    cli_csv = Some(PathBuf::from(path));
                } else if let Some(mode) = arg.strip_prefix("--load-mode=") {
                    cli_mode = parse_load_mode(mode);
                } else if let Some(n) = arg.strip_prefix("--workers=") {
                    cli_workers = parse_workers(n);
                }
            }
        }
    }

    let host = env::var("HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string());
    let port = env::var("PORT")
        .ok()
        .and_then(|p| p.parse::<u16>().ok())
        .unwrap_or(DEFAULT_PORT);
    let csv_path = cli_csv
        .or_else(|| env::var("WORDSHK_CSV").ok().map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CSV));
    let load_mode = cli_mode
        .or_else(|| {
            env::var("WORDSHK_LOAD_MODE")
                .ok()
                .as_deref()
                .and_then(parse_load_mode)
        })
        .unwrap_or(LoadMode::Mmap);
    let workers = cli_workers
        .or_else(|| {
            env::var("WORDSHK_WORKERS")
                .ok()
                .as_deref()
                .and_then(parse_workers)
        })
        .unwrap_or_else(default_workers);

    Config {
        host,
        port,
        csv_path,
        load_mode,
        workers,
        disable_cache,
    }
}

fn parse_load_mode(raw: &str) -> Option<LoadMode> {
    match raw.to_ascii_lowercase().as_str() {
        "mmap" => Some(LoadMode::Mmap),
        "owned" => Some(LoadMode::Owned),
        _ => None,
    }
}

fn parse_workers(raw: &str) -> Option<usize> {
    raw.parse::<usize>().ok().filter(|n| *n > 0)
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap_or_else(|_| EnvFilter::new("info"));
    let max_level = env_filter
        .max_level_hint()
        .and_then(|hint| hint.into_level())
        .unwrap_or(Level::INFO);
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_level(true)
        .with_max_level(max_level)
        .init();
}
