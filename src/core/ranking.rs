use crate::domain::model::{KeywordWeight, RankingEntry, Review};
use crate::utils::error::{ListingError, Result};
use regex::RegexBuilder;
use std::collections::HashMap;

pub const DEFAULT_RANKING_LIMIT: usize = 20;
pub const DEFAULT_MIN_REVIEWS: u32 = 1;
pub const DEFAULT_SEARCH_LIMIT: usize = 50;
const MAX_SAMPLE_REVIEWS: usize = 5;

pub fn default_ranking_keywords() -> Vec<KeywordWeight> {
    vec![
        KeywordWeight::new("穴場", 3),
        KeywordWeight::new("隠れた", 2),
        KeywordWeight::new("知る人ぞ知る", 3),
        KeywordWeight::new("秘密", 1),
        KeywordWeight::new("穴場サウナ", 4),
        KeywordWeight::new("隠れ家", 2),
        KeywordWeight::new("穴場スポット", 3),
        KeywordWeight::new("ローカル", 1),
        KeywordWeight::new("ディープ", 1),
        KeywordWeight::new("マイナー", 1),
        KeywordWeight::new("非公開", 2),
    ]
}

/// 以施設名彙整評論並依 `review_count * 2 + keyword_score * 3` 排名
pub fn generate_ranking(
    reviews: &[Review],
    keywords: &[KeywordWeight],
    limit: usize,
    min_reviews: u32,
) -> Vec<RankingEntry> {
    let mut entries: Vec<RankingEntry> = Vec::new();
    let mut index_by_name: HashMap<&str, usize> = HashMap::new();

    for review in reviews {
        if review.name.is_empty() {
            continue;
        }

        let idx = *index_by_name.entry(review.name.as_str()).or_insert_with(|| {
            entries.push(RankingEntry {
                name: review.name.clone(),
                url: String::new(),
                review_count: 0,
                keyword_score: 0,
                keyword_count: 0,
                keywords: Vec::new(),
                reviews: Vec::new(),
            });
            entries.len() - 1
        });

        let entry = &mut entries[idx];
        entry.url = review.url.clone();
        entry.review_count += 1;

        if review.review.is_empty() {
            continue;
        }

        if entry.reviews.len() < MAX_SAMPLE_REVIEWS {
            entry.reviews.push(review.review.clone());
        }

        for KeywordWeight { keyword, weight } in keywords {
            if review.review.contains(keyword.as_str()) {
                if !entry.keywords.contains(keyword) {
                    entry.keywords.push(keyword.clone());
                }
                entry.keyword_score += weight;
            }
        }
    }

    let mut ranking: Vec<RankingEntry> = entries
        .into_iter()
        .filter(|entry| entry.review_count >= min_reviews)
        .map(|mut entry| {
            entry.keyword_count = entry.keywords.len();
            entry
        })
        .collect();

    // sort_by 為穩定排序，同分時保留首次出現的順序
    ranking.sort_by(|a, b| b.rank_score().cmp(&a.rank_score()));
    ranking.truncate(limit);

    tracing::debug!("Generated ranking with {} entries", ranking.len());
    ranking
}

/// 以不分大小寫的正規表示式搜尋評論內容
pub fn search_reviews<'a>(reviews: &'a [Review], pattern: &str, limit: usize) -> Result<Vec<&'a Review>> {
    if pattern.is_empty() {
        return Ok(Vec::new());
    }

    let re = RegexBuilder::new(pattern)
        .case_insensitive(true)
        .build()
        .map_err(|e| ListingError::ValidationError {
            message: format!("Invalid search pattern '{}': {}", pattern, e),
        })?;

    Ok(reviews
        .iter()
        .filter(|review| re.is_match(&review.review))
        .take(limit)
        .collect())
}

pub fn ranking_to_json(ranking: &[RankingEntry]) -> Result<String> {
    Ok(serde_json::to_string_pretty(ranking)?)
}

pub fn ranking_to_csv(ranking: &[RankingEntry]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record([
        "rank",
        "name",
        "url",
        "review_count",
        "keyword_score",
        "keyword_count",
        "keywords",
    ])?;

    for (position, entry) in ranking.iter().enumerate() {
        writer.write_record([
            (position + 1).to_string(),
            entry.name.clone(),
            entry.url.clone(),
            entry.review_count.to_string(),
            entry.keyword_score.to_string(),
            entry.keyword_count.to_string(),
            entry.keywords.join("|"),
        ])?;
    }

    let data = writer.into_inner().map_err(|e| ListingError::ValidationError {
        message: format!("Failed to flush CSV output: {}", e),
    })?;
    String::from_utf8(data).map_err(|e| ListingError::ValidationError {
        message: format!("CSV output is not valid UTF-8: {}", e),
    })
}
