use crate::domain::model::Sauna;
use crate::domain::ports::{ConfigProvider, SaunaSource};
use crate::utils::error::{ListingError, Result};
use crate::utils::validation::validate_url;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

pub const SAUNAS_PATH: &str = "/api/saunas";

/// 透過 `GET {base}/api/saunas` 取得清單
#[derive(Debug, Clone)]
pub struct HttpSaunaSource {
    client: Client,
    endpoint: String,
}

impl HttpSaunaSource {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        validate_url("source.endpoint", base_url)?;

        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint: saunas_url(base_url),
        })
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Result<Self> {
        Self::new(config.api_endpoint(), config.request_timeout())
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

pub fn saunas_url(base_url: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), SAUNAS_PATH)
}

#[async_trait]
impl SaunaSource for HttpSaunaSource {
    async fn fetch_saunas(&self) -> Result<Vec<Sauna>> {
        tracing::debug!("Making API request to: {}", self.endpoint);
        let response = self.client.get(&self.endpoint).send().await?;

        let status = response.status();
        tracing::debug!("API response status: {}", status);

        if !status.is_success() {
            return Err(ListingError::HttpStatusError {
                status: status.as_u16(),
                url: self.endpoint.clone(),
            });
        }

        let saunas: Vec<Sauna> = response.json().await?;
        Ok(saunas)
    }

    fn describe(&self) -> String {
        self.endpoint.clone()
    }
}
