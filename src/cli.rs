use clap::Parser;
use std::path::PathBuf;

use crate::config::{Config, StalePolicy};

/// Browse users, their albums and album photos from a JSON placeholder API.
#[derive(Debug, Parser)]
#[command(name = "albumview", version)]
pub struct Cli {
    /// Config file (default: <config dir>/albumview/config.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override the API base URL
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,

    /// Write logs to this file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Apply late responses even if a newer query was issued since
    #[arg(long)]
    pub keep_stale: bool,

    /// Print the browser state as JSON instead of starting the UI
    #[arg(long)]
    pub dump: bool,

    /// User to open in --dump mode
    #[arg(long, value_name = "ID", requires = "dump")]
    pub user: Option<u64>,

    /// Album to open in --dump mode
    #[arg(long, value_name = "ID", requires = "user")]
    pub album: Option<u64>,
}

impl Cli {
    /// Apply command-line overrides on top of the loaded config.
    pub fn apply(&self, config: &mut Config) {
        if let Some(url) = &self.base_url {
            config.api.base_url = url.clone();
        }
        if let Some(path) = &self.log_file {
            config.log.file = Some(path.clone());
        }
        if self.keep_stale {
            config.browser.stale_policy = StalePolicy::LastArrival;
        }
    }
}
