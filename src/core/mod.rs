pub mod analysis;
pub mod filter;
pub mod listing;
pub mod ranking;
pub mod refresh;
pub mod render;
pub mod view;

pub use crate::domain::model::{GemAnalysis, KeywordWeight, RankingEntry, Review, Sauna};
pub use crate::domain::ports::{ConfigProvider, PageHost, SaunaSource, Storage};
pub use crate::utils::error::Result;
