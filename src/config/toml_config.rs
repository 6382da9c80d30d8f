use crate::core::analysis::{default_analysis_keywords, DEFAULT_GEM_THRESHOLD};
use crate::core::ranking::{default_ranking_keywords, DEFAULT_MIN_REVIEWS, DEFAULT_RANKING_LIMIT};
use crate::core::render::DEFAULT_PAGE_TITLE;
use crate::core::ConfigProvider;
use crate::domain::model::KeywordWeight;
use crate::utils::error::{ListingError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

pub const DEFAULT_API_ENDPOINT: &str = "http://127.0.0.1:8000";
pub const DEFAULT_OUTPUT_PATH: &str = "./output";
pub const DEFAULT_PAGE_FILENAME: &str = "index.html";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListingConfig {
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub page: PageConfig,
    #[serde(default)]
    pub analysis: AnalysisConfig,
    #[serde(default)]
    pub ranking: RankingConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SourceConfig {
    pub endpoint: Option<String>,
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PageConfig {
    pub title: Option<String>,
    pub output_path: Option<String>,
    pub filename: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalysisConfig {
    pub threshold: Option<f64>,
    pub keywords: Option<Vec<KeywordWeight>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RankingConfig {
    pub limit: Option<usize>,
    pub min_reviews: Option<u32>,
    pub keywords: Option<Vec<KeywordWeight>>,
}

impl ListingConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(ListingError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| ListingError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${SAUNA_API})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| ListingError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// 命令列參數優先於設定檔
    pub fn apply_overrides(&mut self, api: Option<String>, output: Option<String>) {
        if let Some(api) = api {
            tracing::debug!("🔧 API endpoint overridden to: {}", api);
            self.source.endpoint = Some(api);
        }
        if let Some(output) = output {
            tracing::debug!("🔧 Output path overridden to: {}", output);
            self.page.output_path = Some(output);
        }
    }

    /// 驗證配置的合理性
    pub fn validate_config(&self) -> Result<()> {
        validation::validate_url("source.endpoint", self.api_endpoint())?;
        validation::validate_positive_number(
            "source.timeout_seconds",
            self.timeout_seconds() as usize,
            1,
        )?;

        validation::validate_non_empty_string("page.title", self.page_title())?;
        validation::validate_path("page.output_path", self.output_path())?;
        validation::validate_file_name("page.filename", self.page_filename())?;

        validation::validate_range("analysis.threshold", self.gem_threshold(), 0.0, 100.0)?;
        validate_keywords("analysis.keywords", &self.analysis_keywords())?;

        validation::validate_positive_number("ranking.limit", self.ranking_limit(), 1)?;
        validate_keywords("ranking.keywords", &self.ranking_keywords())?;

        Ok(())
    }

    pub fn api_endpoint(&self) -> &str {
        self.source.endpoint.as_deref().unwrap_or(DEFAULT_API_ENDPOINT)
    }

    pub fn timeout_seconds(&self) -> u64 {
        self.source.timeout_seconds.unwrap_or(DEFAULT_TIMEOUT_SECONDS)
    }

    pub fn page_title(&self) -> &str {
        self.page.title.as_deref().unwrap_or(DEFAULT_PAGE_TITLE)
    }

    pub fn output_path(&self) -> &str {
        self.page.output_path.as_deref().unwrap_or(DEFAULT_OUTPUT_PATH)
    }

    pub fn page_filename(&self) -> &str {
        self.page.filename.as_deref().unwrap_or(DEFAULT_PAGE_FILENAME)
    }

    pub fn gem_threshold(&self) -> f64 {
        self.analysis.threshold.unwrap_or(DEFAULT_GEM_THRESHOLD)
    }

    pub fn analysis_keywords(&self) -> Vec<KeywordWeight> {
        self.analysis
            .keywords
            .clone()
            .unwrap_or_else(default_analysis_keywords)
    }

    pub fn ranking_limit(&self) -> usize {
        self.ranking.limit.unwrap_or(DEFAULT_RANKING_LIMIT)
    }

    pub fn min_reviews(&self) -> u32 {
        self.ranking.min_reviews.unwrap_or(DEFAULT_MIN_REVIEWS)
    }

    pub fn ranking_keywords(&self) -> Vec<KeywordWeight> {
        self.ranking
            .keywords
            .clone()
            .unwrap_or_else(default_ranking_keywords)
    }
}

fn validate_keywords(field_name: &str, keywords: &[KeywordWeight]) -> Result<()> {
    for kw in keywords {
        validation::validate_non_empty_string(field_name, &kw.keyword)?;
    }
    Ok(())
}

impl ConfigProvider for ListingConfig {
    fn api_endpoint(&self) -> &str {
        ListingConfig::api_endpoint(self)
    }

    fn output_path(&self) -> &str {
        ListingConfig::output_path(self)
    }

    fn page_title(&self) -> &str {
        ListingConfig::page_title(self)
    }

    fn page_filename(&self) -> &str {
        ListingConfig::page_filename(self)
    }

    fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds())
    }
}

impl Validate for ListingConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
