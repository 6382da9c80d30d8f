use crate::domain::ports::PageHost;

/// CLI 用的頁面宿主：記下重新載入的要求，提示訊息輸出到 stderr
#[derive(Debug, Default)]
pub struct ConsoleHost {
    reload_requested: bool,
    alerts: Vec<String>,
}

impl ConsoleHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reload_requested(&self) -> bool {
        self.reload_requested
    }

    pub fn alerts(&self) -> &[String] {
        &self.alerts
    }
}

impl PageHost for ConsoleHost {
    fn reload(&mut self) {
        self.reload_requested = true;
    }

    fn alert(&mut self, message: &str) {
        eprintln!("⚠️  {}", message);
        self.alerts.push(message.to_string());
    }
}
