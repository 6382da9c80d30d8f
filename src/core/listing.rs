use crate::core::filter::FilterState;
use crate::core::render::render_page;
use crate::core::view::render_document;
use crate::domain::model::Sauna;
use crate::domain::ports::{ConfigProvider, SaunaSource, Storage};
use crate::utils::error::Result;
use chrono::Utc;

pub struct ListingEngine<S: SaunaSource, St: Storage, C: ConfigProvider> {
    source: S,
    storage: St,
    config: C,
}

impl<S: SaunaSource, St: Storage, C: ConfigProvider> ListingEngine<S, St, C> {
    pub fn new(source: S, storage: St, config: C) -> Self {
        Self {
            source,
            storage,
            config,
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub async fn fetch(&self) -> Result<Vec<Sauna>> {
        tracing::info!("📡 Fetching saunas from {}", self.source.describe());
        let saunas = self.source.fetch_saunas().await?;
        tracing::info!(
            "Fetched {} saunas ({} hidden gems)",
            saunas.len(),
            saunas.iter().filter(|s| s.is_hidden_gem).count()
        );
        Ok(saunas)
    }

    pub fn render(&self, saunas: &[Sauna], filter: FilterState) -> String {
        let page = render_page(self.config.page_title(), saunas, filter, Utc::now());
        render_document(&page)
    }

    /// 取得資料、渲染整頁並寫入儲存空間，回傳輸出路徑
    pub async fn run(&self, filter: FilterState) -> Result<String> {
        let saunas = self.fetch().await?;
        self.publish(&saunas, filter).await
    }

    /// 以已取得的清單渲染並寫出頁面，不再向資料來源請求
    pub async fn publish(&self, saunas: &[Sauna], filter: FilterState) -> Result<String> {
        if saunas.is_empty() {
            tracing::warn!("No saunas returned, rendering an empty listing");
        }

        let html = self.render(saunas, filter);
        tracing::debug!("Rendered page ({} bytes)", html.len());

        let output_path = self
            .storage
            .write_file(self.config.page_filename(), html.as_bytes())
            .await?;
        tracing::info!("📁 Page written to {}", output_path);

        Ok(output_path)
    }
}
