use serde::{Deserialize, Serialize};

/// 一筆三溫暖設施資料，由 `/api/saunas` 回傳
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sauna {
    pub name: String,
    pub price: String,
    pub review_count: u32,
    pub url: String,
    pub is_hidden_gem: bool,
}

/// 爬取到的單篇評論
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub review: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordWeight {
    pub keyword: String,
    pub weight: u32,
}

impl KeywordWeight {
    pub fn new(keyword: &str, weight: u32) -> Self {
        Self {
            keyword: keyword.to_string(),
            weight,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordCount {
    pub keyword: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GemAnalysis {
    pub is_hidden_gem: bool,
    pub score: f64,
    pub max_score: f64,
    pub reasons: Vec<String>,
    pub review_count: usize,
    pub keyword_counts: Vec<KeywordCount>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankingEntry {
    pub name: String,
    pub url: String,
    pub review_count: u32,
    pub keyword_score: u32,
    pub keyword_count: usize,
    pub keywords: Vec<String>,
    pub reviews: Vec<String>,
}

impl RankingEntry {
    pub fn rank_score(&self) -> u32 {
        self.review_count * 2 + self.keyword_score * 3
    }
}
