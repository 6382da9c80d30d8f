use crate::domain::model::{Review, Sauna};
use crate::domain::ports::SaunaSource;
use crate::utils::error::Result;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};

/// 從本機 JSON 檔讀取三溫暖清單，格式與 `/api/saunas` 回應相同
#[derive(Debug, Clone)]
pub struct FileSaunaSource {
    path: PathBuf,
}

impl FileSaunaSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl SaunaSource for FileSaunaSource {
    async fn fetch_saunas(&self) -> Result<Vec<Sauna>> {
        read_json_array(&self.path).await
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

pub async fn read_reviews(path: impl AsRef<Path>) -> Result<Vec<Review>> {
    read_json_array(path.as_ref()).await
}

async fn read_json_array<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    tracing::debug!("Reading JSON from {}", path.display());
    let content = tokio::fs::read(path).await?;
    Ok(serde_json::from_slice(&content)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::ListingError;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[tokio::test]
    async fn test_file_source_reads_saunas() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"name":"A","price":"¥1000","review_count":3,"url":"https://x","is_hidden_gem":true}}]"#
        )
        .unwrap();

        let saunas = FileSaunaSource::new(file.path()).fetch_saunas().await.unwrap();
        assert_eq!(saunas.len(), 1);
        assert_eq!(saunas[0].price, "¥1000");
    }

    #[tokio::test]
    async fn test_read_reviews_tolerates_missing_fields() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"[{{"name":"A","review":"穴場"}},{{"url":"https://y"}}]"#).unwrap();

        let reviews = read_reviews(file.path()).await.unwrap();
        assert_eq!(reviews.len(), 2);
        assert_eq!(reviews[0].url, "");
        assert_eq!(reviews[1].name, "");
    }

    #[tokio::test]
    async fn test_missing_file_is_io_error() {
        let err = FileSaunaSource::new("/nonexistent/saunas.json")
            .fetch_saunas()
            .await
            .unwrap_err();
        assert!(matches!(err, ListingError::IoError(_)));
    }
}
