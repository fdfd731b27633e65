use std::path::Path;
use std::sync::Arc;

use albumview::api::{HttpSource, RemoteSource};
use albumview::cli::Cli;
use albumview::config::Config;
use albumview::dump::{run_dump, DumpRequest};
use albumview::logging::{init_tracing, LogFallback};
use albumview::ui;
use anyhow::Context;
use clap::Parser;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config_path = cli.config.clone().unwrap_or_else(Config::config_path);
    let mut config = load_config(&config_path)?;
    cli.apply(&mut config);
    config.validate()?;

    let fallback = if cli.dump {
        LogFallback::Stderr
    } else {
        LogFallback::Discard
    };
    init_tracing(&config.log, fallback).context("failed to open log file")?;
    tracing::debug!(path = %config_path.display(), "configuration loaded");

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("failed to start async runtime")?;
    let source = HttpSource::new(&config.api)?;

    if cli.dump {
        let request = DumpRequest {
            user_id: cli.user,
            album_id: cli.album,
        };
        let snapshot = runtime.block_on(run_dump(&config, &source, request));
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
    } else {
        let source: Arc<dyn RemoteSource> = Arc::new(source);
        ui::runtime::run(&config, source, runtime.handle())?;
    }

    runtime.shutdown_background();
    Ok(())
}

fn load_config(path: &Path) -> anyhow::Result<Config> {
    Config::load_from(path).with_context(|| format!("failed to load {}", path.display()))
}
