use crate::domain::model::{GemAnalysis, KeywordCount, KeywordWeight, Review};

pub const MAX_SCORE: f64 = 5.0;
pub const DEFAULT_GEM_THRESHOLD: f64 = 0.5;

pub fn default_analysis_keywords() -> Vec<KeywordWeight> {
    vec![
        KeywordWeight::new("穴場", 2),
        KeywordWeight::new("隠れ家", 2),
        KeywordWeight::new("静か", 1),
        KeywordWeight::new("混んでいない", 1),
        KeywordWeight::new("並ばない", 1),
        KeywordWeight::new("ゆったり", 1),
        KeywordWeight::new("落ち着く", 1),
        KeywordWeight::new("知る人ぞ知る", 2),
        KeywordWeight::new("教えたくない", 2),
        KeywordWeight::new("空いている", 1),
        KeywordWeight::new("のんびり", 1),
        KeywordWeight::new("穴場スポット", 2),
    ]
}

/// 依評論中出現的關鍵字計算穴場分數
pub struct GemAnalyzer {
    keywords: Vec<KeywordWeight>,
    threshold: f64,
}

impl Default for GemAnalyzer {
    fn default() -> Self {
        Self::new(default_analysis_keywords(), DEFAULT_GEM_THRESHOLD)
    }
}

impl GemAnalyzer {
    pub fn new(keywords: Vec<KeywordWeight>, threshold: f64) -> Self {
        Self {
            keywords,
            threshold,
        }
    }

    pub fn analyze_reviews(&self, reviews: &[Review]) -> GemAnalysis {
        let texts: Vec<&str> = reviews
            .iter()
            .map(|r| r.review.trim())
            .filter(|text| !text.is_empty())
            .collect();
        self.analyze_texts(&texts)
    }

    pub fn analyze_texts(&self, texts: &[&str]) -> GemAnalysis {
        let mut keyword_counts: Vec<KeywordCount> = Vec::new();
        let mut total_score: u64 = 0;

        for text in texts {
            for KeywordWeight { keyword, weight } in &self.keywords {
                let count = text.matches(keyword.as_str()).count();
                if count == 0 {
                    continue;
                }

                match keyword_counts.iter_mut().find(|kc| &kc.keyword == keyword) {
                    Some(existing) => existing.count += count,
                    None => keyword_counts.push(KeywordCount {
                        keyword: keyword.clone(),
                        count,
                    }),
                }
                total_score += count as u64 * u64::from(*weight);
            }
        }

        let normalized = if texts.is_empty() {
            0.0
        } else {
            total_score as f64 / texts.len() as f64
        };
        // 滿分 5 分，取到小數第一位；剛好一半時進位到偶數
        let score = (normalized * MAX_SCORE * 10.0).round_ties_even() / 10.0;

        tracing::debug!(
            "Analyzed {} reviews: total score {}, normalized {:.2}",
            texts.len(),
            total_score,
            normalized
        );

        GemAnalysis {
            is_hidden_gem: normalized >= self.threshold,
            score,
            max_score: MAX_SCORE,
            reasons: build_reasons(&keyword_counts),
            review_count: texts.len(),
            keyword_counts,
        }
    }
}

fn build_reasons(keyword_counts: &[KeywordCount]) -> Vec<String> {
    if keyword_counts.is_empty() {
        return vec!["穴場を示すキーワードは見つかりませんでした".to_string()];
    }

    let found: Vec<&str> = keyword_counts.iter().map(|kc| kc.keyword.as_str()).collect();
    let mut reasons = vec![format!(
        "レビューで「{}」などの穴場キーワードが見つかりました",
        found.join("」「")
    )];
    reasons.extend(
        keyword_counts
            .iter()
            .map(|kc| format!("「{}」が{}回言及されています", kc.keyword, kc.count)),
    );
    reasons
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_reviews_scores_zero() {
        let analysis = GemAnalyzer::default().analyze_texts(&[]);
        assert_eq!(analysis.score, 0.0);
        assert!(!analysis.is_hidden_gem);
        assert_eq!(analysis.review_count, 0);
        assert_eq!(analysis.reasons, vec!["穴場を示すキーワードは見つかりませんでした"]);
    }

    #[test]
    fn test_keyword_weights_and_normalization() {
        // 「穴場」2 點 x2、「静か」1 點 x1，共 5 點 / 2 篇 = 2.5
        let analysis = GemAnalyzer::default()
            .analyze_texts(&["穴場で静か。", "ここは穴場です"]);

        assert!(analysis.is_hidden_gem);
        assert_eq!(analysis.score, 12.5);
        assert_eq!(analysis.max_score, 5.0);
        assert_eq!(analysis.keyword_counts[0].keyword, "穴場");
        assert_eq!(analysis.keyword_counts[0].count, 2);
        assert_eq!(
            analysis.reasons[0],
            "レビューで「穴場」「静か」などの穴場キーワードが見つかりました"
        );
        assert_eq!(analysis.reasons[1], "「穴場」が2回言及されています");
        assert_eq!(analysis.reasons[2], "「静か」が1回言及されています");
    }

    #[test]
    fn test_below_threshold_is_not_gem() {
        // 1 點 / 3 篇 ≈ 0.33 < 0.5
        let analysis = GemAnalyzer::default().analyze_texts(&["静か", "普通", "混雑"]);
        assert!(!analysis.is_hidden_gem);
        assert_eq!(analysis.score, 1.7);
    }

    #[test]
    fn test_half_scores_round_to_even() {
        // 1 點 / 4 篇 = 0.25 -> 1.25 -> 1.2
        let analysis = GemAnalyzer::default().analyze_texts(&["静か", "a", "b", "c"]);
        assert_eq!(analysis.score, 1.2);

        // 3 點 / 4 篇 = 0.75 -> 3.75 -> 3.8
        let analysis = GemAnalyzer::default().analyze_texts(&["静か", "静か", "静か", "c"]);
        assert_eq!(analysis.score, 3.8);
    }

    #[test]
    fn test_blank_reviews_are_ignored() {
        let reviews = vec![
            Review {
                name: "A".to_string(),
                url: String::new(),
                review: "   ".to_string(),
            },
            Review {
                name: "A".to_string(),
                url: String::new(),
                review: "隠れ家".to_string(),
            },
        ];
        let analysis = GemAnalyzer::default().analyze_reviews(&reviews);
        assert_eq!(analysis.review_count, 1);
        assert_eq!(analysis.score, 10.0);
    }
}
