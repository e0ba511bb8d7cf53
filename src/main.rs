use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use savor::config::{Config, ConfigStore};
use savor::session::{FileSessionStore, SessionStore};
use savor::ui::runtime;

/// Savor — a terminal recipe browser.
#[derive(Debug, Parser)]
#[command(name = "savor", version, about)]
struct Cli {
    /// Path to the config file (defaults to the platform config directory).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write logs to this file. Without it logging is disabled, since the
    /// terminal belongs to the UI.
    #[arg(long)]
    log_file: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let _log_guard = init_tracing(cli.log_file.as_deref())?;

    let config_path = cli.config.unwrap_or_else(Config::config_path);
    let config = Config::load_from(&config_path).context("loading configuration")?;
    let store = ConfigStore::new(config, config_path);

    let session: Arc<dyn SessionStore> =
        Arc::new(FileSessionStore::new(FileSessionStore::default_path()));

    runtime::run(store, session).await.context("UI loop failed")
}

/// File-only logging: the alternate screen owns stdout/stderr, so traces
/// go to a file when `--log-file` is given and nowhere otherwise.
fn init_tracing(
    log_file: Option<&std::path::Path>,
) -> anyhow::Result<Option<tracing_appender::non_blocking::WorkerGuard>> {
    let Some(path) = log_file else {
        return Ok(None);
    };

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating log directory {}", parent.display()))?;
        }
    }
    let file = fs::File::create(path)
        .with_context(|| format!("creating log file {}", path.display()))?;
    let (writer, guard) = tracing_appender::non_blocking(file);

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("SAVOR_LOG").unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(writer)
        .with_ansi(false)
        .init();

    Ok(Some(guard))
}
