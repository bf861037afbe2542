use crate::config::toml_config::TomlConfig;
use crate::config::Settings;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "bingo")]
#[command(about = "Serve randomly generated buzzword bingo cards")]
pub struct Cli {
    #[arg(long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit logs as JSON lines")]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Serve cards and the leaderboard over HTTP
    Serve(ServeArgs),
    /// Print one card page for a single word-list file (logs go to stderr)
    Render(RenderArgs),
}

#[derive(Debug, Clone, Default, Args)]
pub struct LayoutArgs {
    #[arg(long, help = "Rows per card")]
    pub rows: Option<usize>,

    #[arg(long, help = "Columns per card")]
    pub cols: Option<usize>,
}

#[derive(Debug, Clone, Default, Args)]
pub struct ServeArgs {
    /// Directory holding one `<identifier>.json` word list per card
    pub words_dir: Option<String>,

    /// Base URL or path of the stylesheets and scripts
    pub resource_path: Option<String>,

    #[arg(long, help = "Address to listen on")]
    pub bind: Option<String>,

    #[arg(long, help = "Usage stats document")]
    pub stats_file: Option<String>,

    #[arg(long, help = "TOML config file")]
    pub config: Option<PathBuf>,

    #[command(flatten)]
    pub layout: LayoutArgs,
}

#[derive(Debug, Clone, Args)]
pub struct RenderArgs {
    /// Word-list JSON file
    pub json_file: PathBuf,

    /// Base URL or path of the stylesheets and scripts
    pub resource_path: Option<String>,

    #[arg(long, help = "Seed for a reproducible card")]
    pub seed: Option<u64>,

    #[arg(long, help = "TOML config file")]
    pub config: Option<PathBuf>,

    #[command(flatten)]
    pub layout: LayoutArgs,
}

impl LayoutArgs {
    fn apply(&self, settings: &mut Settings) {
        if let Some(rows) = self.rows {
            settings.layout.rows = rows;
        }
        if let Some(cols) = self.cols {
            settings.layout.cols = cols;
        }
    }
}

fn base_settings(config: Option<&PathBuf>) -> Result<Settings> {
    let settings = Settings::default();
    match config {
        Some(path) => {
            tracing::debug!("loading config file {}", path.display());
            Ok(settings.with_toml(&TomlConfig::from_file(path)?))
        }
        None => Ok(settings),
    }
}

impl ServeArgs {
    /// Merges flags over the TOML file over defaults, then validates.
    pub fn resolve(&self) -> Result<Settings> {
        let mut settings = base_settings(self.config.as_ref())?;

        if let Some(words_dir) = &self.words_dir {
            settings.words_dir = Some(words_dir.clone());
        }
        if let Some(resource_path) = &self.resource_path {
            settings.resource_path = resource_path.clone();
        }
        if let Some(bind) = &self.bind {
            settings.bind = bind.clone();
        }
        if let Some(stats_file) = &self.stats_file {
            settings.stats_file = stats_file.clone();
        }
        self.layout.apply(&mut settings);

        settings.validate()?;
        settings.words_dir()?;
        Ok(settings)
    }
}

impl RenderArgs {
    pub fn resolve(&self) -> Result<Settings> {
        let mut settings = base_settings(self.config.as_ref())?;
        if let Some(resource_path) = &self.resource_path {
            settings.resource_path = resource_path.clone();
        }
        self.layout.apply(&mut settings);

        settings.validate()?;
        Ok(settings)
    }
}
