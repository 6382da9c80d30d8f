use crate::core::filter::FilterState;
use crate::core::render::{empty_grid, update_grid};
use crate::core::view::Element;
use crate::domain::model::Sauna;
use crate::domain::ports::{PageHost, SaunaSource};
use crate::utils::error::{ListingError, Result};

pub use crate::utils::error::REFRESH_FAILED_ALERT;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefreshOutcome {
    pub saunas: Vec<Sauna>,
}

impl RefreshOutcome {
    pub fn record_count(&self) -> usize {
        self.saunas.len()
    }
}

/// 向資料來源重新讀取清單。
///
/// 任何網路或解析錯誤都視為同一種 `RefreshFailed`，不重試。
/// 取得的清單交給呼叫端，由它決定如何重新載入頁面。
pub async fn refresh<S>(source: &S) -> Result<RefreshOutcome>
where
    S: SaunaSource + ?Sized,
{
    tracing::debug!("Refreshing sauna data from {}", source.describe());

    match source.fetch_saunas().await {
        Ok(saunas) => {
            if saunas.is_empty() {
                tracing::warn!("Refresh returned no saunas from {}", source.describe());
            }
            Ok(RefreshOutcome { saunas })
        }
        Err(e) => Err(ListingError::RefreshFailed {
            reason: e.to_string(),
        }),
    }
}

/// 持有清單頁面狀態的控制器：篩選狀態、篩選按鈕與卡片網格
pub struct ListingController<H: PageHost> {
    host: H,
    filter: FilterState,
    filter_button: Element,
    grid: Element,
}

impl<H: PageHost> ListingController<H> {
    pub fn new(host: H) -> Self {
        let filter = FilterState::default();
        Self {
            host,
            filter,
            filter_button: filter.button(),
            grid: empty_grid(),
        }
    }

    pub fn with_saunas(host: H, saunas: &[Sauna]) -> Self {
        let mut controller = Self::new(host);
        controller.load(saunas);
        controller
    }

    /// 重新渲染網格並套用目前的篩選狀態
    pub fn load(&mut self, saunas: &[Sauna]) {
        update_grid(&mut self.grid, saunas);
        self.filter.apply(&mut self.grid);
    }

    pub fn on_filter_toggle(&mut self) -> FilterState {
        self.filter = self.filter.toggled();
        self.filter.sync_button(&mut self.filter_button);
        let visible = self.filter.apply(&mut self.grid);
        tracing::debug!(
            "Hidden gem filter {} ({} cards visible)",
            if self.filter.is_active() { "enabled" } else { "disabled" },
            visible
        );
        self.filter
    }

    /// 成功時要求宿主整頁重新載入；失敗時記錄錯誤並只顯示一次提示
    pub async fn on_refresh<S>(&mut self, source: &S) -> Result<RefreshOutcome>
    where
        S: SaunaSource + ?Sized,
    {
        let result = refresh(source).await;

        match &result {
            Ok(outcome) => {
                tracing::info!("Fetched {} saunas, reloading page", outcome.record_count());
                self.host.reload();
            }
            Err(e) => {
                tracing::error!("Error fetching sauna data: {}", e);
                self.host.alert(&e.user_friendly_message());
            }
        }

        result
    }

    pub fn filter(&self) -> FilterState {
        self.filter
    }

    pub fn filter_button(&self) -> &Element {
        &self.filter_button
    }

    pub fn grid(&self) -> &Element {
        &self.grid
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn into_host(self) -> H {
        self.host
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::filter::{SHOW_ALL_LABEL, SHOW_GEMS_LABEL};
    use crate::core::render::cards;
    use async_trait::async_trait;

    #[derive(Default)]
    struct RecordingHost {
        reloads: usize,
        alerts: Vec<String>,
    }

    impl PageHost for RecordingHost {
        fn reload(&mut self) {
            self.reloads += 1;
        }

        fn alert(&mut self, message: &str) {
            self.alerts.push(message.to_string());
        }
    }

    struct StaticSource(Vec<Sauna>);

    #[async_trait]
    impl SaunaSource for StaticSource {
        async fn fetch_saunas(&self) -> Result<Vec<Sauna>> {
            Ok(self.0.clone())
        }

        fn describe(&self) -> String {
            "static".to_string()
        }
    }

    struct FailingSource;

    #[async_trait]
    impl SaunaSource for FailingSource {
        async fn fetch_saunas(&self) -> Result<Vec<Sauna>> {
            Err(ListingError::HttpStatusError {
                status: 503,
                url: "http://localhost/api/saunas".to_string(),
            })
        }

        fn describe(&self) -> String {
            "failing".to_string()
        }
    }

    fn gem(name: &str, is_hidden_gem: bool) -> Sauna {
        Sauna {
            name: name.to_string(),
            price: "¥1200".to_string(),
            review_count: 10,
            url: "https://example.com".to_string(),
            is_hidden_gem,
        }
    }

    #[tokio::test]
    async fn test_successful_refresh_reloads_once() {
        let mut controller = ListingController::new(RecordingHost::default());
        let source = StaticSource(vec![gem("A", true), gem("B", false)]);

        let outcome = controller.on_refresh(&source).await.unwrap();

        assert_eq!(outcome.record_count(), 2);
        assert_eq!(controller.host().reloads, 1);
        assert!(controller.host().alerts.is_empty());
    }

    #[tokio::test]
    async fn test_empty_refresh_still_reloads() {
        let mut controller = ListingController::new(RecordingHost::default());

        let outcome = controller.on_refresh(&StaticSource(vec![])).await.unwrap();

        assert_eq!(outcome.record_count(), 0);
        assert_eq!(controller.host().reloads, 1);
    }

    #[tokio::test]
    async fn test_failed_refresh_alerts_once_without_reload() {
        let mut controller = ListingController::new(RecordingHost::default());

        let err = controller.on_refresh(&FailingSource).await.unwrap_err();

        assert!(matches!(err, ListingError::RefreshFailed { .. }));
        let host = controller.into_host();
        assert_eq!(host.reloads, 0);
        assert_eq!(host.alerts, vec![REFRESH_FAILED_ALERT.to_string()]);
    }

    #[test]
    fn test_filter_toggle_updates_button_and_grid() {
        let mut controller =
            ListingController::with_saunas(RecordingHost::default(), &[gem("A", true), gem("B", false)]);
        assert!(!controller.filter().is_active());

        let state = controller.on_filter_toggle();
        assert!(state.is_active());
        assert_eq!(controller.filter_button().text_content(), SHOW_ALL_LABEL);
        let hidden: Vec<bool> = cards(controller.grid()).iter().map(|c| c.is_hidden()).collect();
        assert_eq!(hidden, vec![false, true]);

        controller.on_filter_toggle();
        assert_eq!(controller.filter_button().text_content(), SHOW_GEMS_LABEL);
        assert!(cards(controller.grid()).iter().all(|c| !c.is_hidden()));
    }

    #[test]
    fn test_load_keeps_active_filter() {
        let mut controller = ListingController::new(RecordingHost::default());
        controller.on_filter_toggle();

        controller.load(&[gem("A", false), gem("B", true)]);

        let hidden: Vec<bool> = cards(controller.grid()).iter().map(|c| c.is_hidden()).collect();
        assert_eq!(hidden, vec![true, false]);
    }
}
