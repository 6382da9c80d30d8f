pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::core::ranking::DEFAULT_SEARCH_LIMIT;
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use clap::{Parser, Subcommand, ValueEnum};
#[cfg(feature = "cli")]
use toml_config::ListingConfig;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "sauna-gem")]
#[command(about = "Render and refresh the hidden-gem sauna listing")]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, value_enum, default_value = "compact", global = true)]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Command,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Compact,
    Json,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Json,
    Csv,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Fetch the listing and write the rendered page
    Render {
        /// API base URL serving /api/saunas
        #[arg(long)]
        api: Option<String>,

        /// Read saunas from a local JSON file instead of the API
        #[arg(long, conflicts_with = "api")]
        input: Option<String>,

        #[arg(short, long)]
        output: Option<String>,

        /// Render with the hidden gem filter enabled
        #[arg(long)]
        hidden_gems_only: bool,
    },

    /// Refresh from the API and re-render the page on success
    Refresh {
        #[arg(long)]
        api: Option<String>,

        #[arg(short, long)]
        output: Option<String>,
    },

    /// Score a set of reviews for hidden gem keywords
    Analyze {
        #[arg(long)]
        reviews: String,
    },

    /// Rank saunas by review volume and hidden gem keywords
    Rank {
        #[arg(long)]
        reviews: String,

        #[arg(long)]
        limit: Option<usize>,

        #[arg(long)]
        min_reviews: Option<u32>,

        #[arg(long, value_enum, default_value = "json")]
        format: ExportFormat,
    },

    /// Search review texts with a case-insensitive regex
    Search {
        #[arg(long)]
        reviews: String,

        #[arg(long)]
        pattern: String,

        #[arg(long, default_value_t = DEFAULT_SEARCH_LIMIT)]
        limit: usize,
    },
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// 讀取設定檔（若有指定）並套用子命令上的覆蓋參數
    pub fn resolve(&self) -> Result<ListingConfig> {
        let mut config = match &self.config {
            Some(path) => {
                tracing::info!("📁 Loading configuration from: {}", path);
                ListingConfig::from_file(path)?
            }
            None => ListingConfig::default(),
        };

        match &self.command {
            Command::Render { api, output, .. } | Command::Refresh { api, output } => {
                config.apply_overrides(api.clone(), output.clone());
            }
            Command::Rank {
                limit, min_reviews, ..
            } => {
                if limit.is_some() {
                    config.ranking.limit = *limit;
                }
                if min_reviews.is_some() {
                    config.ranking.min_reviews = *min_reviews;
                }
            }
            Command::Analyze { .. } | Command::Search { .. } => {}
        }

        Ok(config)
    }
}
