pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, Command, ExportFormat, LogFormat};

pub use adapters::{console::ConsoleHost, file::FileSaunaSource, http::HttpSaunaSource};
pub use config::{cli::LocalStorage, toml_config::ListingConfig};
pub use crate::core::{
    analysis::GemAnalyzer,
    filter::FilterState,
    listing::ListingEngine,
    refresh::{refresh, ListingController, RefreshOutcome},
};
pub use domain::model::{GemAnalysis, KeywordWeight, RankingEntry, Review, Sauna};
pub use utils::error::{ListingError, Result};
