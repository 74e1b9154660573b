use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;

use thesaurus::config::Config;
use thesaurus::logging::init_tracing;
use thesaurus::lookup::DatamuseClient;

#[derive(Debug, Parser)]
#[command(name = "thesaurus", version, about = "Look up related words from the terminal")]
struct Cli {
    /// Word to look up on startup.
    word: Option<String>,

    /// Config file (default: ~/.config/thesaurus/config.toml).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the lookup service root URL.
    #[arg(long)]
    base_url: Option<String>,

    /// Write logs to this path prefix (also: THESAURUS_LOG).
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let log_path = init_tracing(cli.log_file.as_deref());

    let config = load_config(&cli)?;
    tracing::info!(
        base_url = %config.lookup.base_url,
        log = ?log_path,
        "starting thesaurus"
    );

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;
    let _enter = runtime.enter();

    let client = DatamuseClient::new(&config.lookup).context("Failed to build HTTP client")?;

    thesaurus::ui::runtime::run(
        Arc::new(client),
        config.lookup.stale_policy(),
        cli.word,
        runtime.handle().clone(),
    )
    .context("Terminal UI failed")?;

    Ok(())
}

fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => Config::load().with_context(|| {
            format!("Failed to load config from {}", Config::config_path().display())
        })?,
    };

    if let Some(base_url) = &cli.base_url {
        config.lookup.base_url = base_url.clone();
        config.validate().context("Invalid --base-url")?;
    }

    Ok(config)
}
