use crate::domain::model::Sauna;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<String>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn api_endpoint(&self) -> &str;
    fn output_path(&self) -> &str;
    fn page_title(&self) -> &str;
    fn page_filename(&self) -> &str;
    fn request_timeout(&self) -> Duration;
}

/// 三溫暖清單的資料來源
#[async_trait]
pub trait SaunaSource: Send + Sync {
    async fn fetch_saunas(&self) -> Result<Vec<Sauna>>;

    /// 用於日誌的來源描述
    fn describe(&self) -> String;
}

/// 承載清單頁面的宿主：負責重新載入與顯示阻斷式提示
pub trait PageHost {
    fn reload(&mut self);
    fn alert(&mut self, message: &str);
}
