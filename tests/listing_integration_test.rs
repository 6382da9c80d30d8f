use anyhow::Result;
use httpmock::prelude::*;
use sauna_gem::{
    ConsoleHost, FileSaunaSource, FilterState, HttpSaunaSource, ListingConfig, ListingController,
    ListingEngine, ListingError, LocalStorage,
};
use tempfile::TempDir;

fn config_for(api: &str, output_path: &str) -> ListingConfig {
    let mut config = ListingConfig::default();
    config.apply_overrides(Some(api.to_string()), Some(output_path.to_string()));
    config
}

#[tokio::test]
async fn test_end_to_end_render_from_api() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let output_path = temp_dir.path().to_str().unwrap().to_string();

    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/api/saunas");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!([
                {"name": "A", "price": "¥1000", "review_count": 3, "url": "https://x", "is_hidden_gem": true},
                {"name": "スカイスパ", "price": "¥2800", "review_count": 950, "url": "https://y", "is_hidden_gem": false}
            ]));
    });

    let config = config_for(&server.base_url(), &output_path);
    let source = HttpSaunaSource::from_config(&config)?;
    let engine = ListingEngine::new(source, LocalStorage::new(output_path.clone()), config);

    let written = engine.run(FilterState::default()).await?;

    api_mock.assert();
    assert!(written.ends_with("index.html"));

    let html = std::fs::read_to_string(temp_dir.path().join("index.html"))?;
    assert_eq!(html.matches("sauna-card").count(), 2);
    assert_eq!(html.matches("bg-yellow-100").count(), 1);
    assert!(html.contains("料金: ¥1000"));
    assert!(html.contains("レビュー数: 3"));
    assert!(html.contains("href=\"https://x\""));
    assert!(html.contains("スカイスパ"));
    assert!(html.contains("穴場のみ表示"));

    Ok(())
}

#[tokio::test]
async fn test_render_from_file_with_filter_enabled() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let input = temp_dir.path().join("saunas.json");
    std::fs::write(
        &input,
        serde_json::to_vec(&serde_json::json!([
            {"name": "gem", "price": "¥700", "review_count": 4, "url": "https://gem", "is_hidden_gem": true},
            {"name": "busy", "price": "¥900", "review_count": 400, "url": "https://busy", "is_hidden_gem": false}
        ]))?,
    )?;

    let output_path = temp_dir.path().join("site").to_str().unwrap().to_string();
    let config = config_for("http://127.0.0.1:8000", &output_path);
    let engine = ListingEngine::new(
        FileSaunaSource::new(&input),
        LocalStorage::new(output_path.clone()),
        config,
    );

    engine.run(FilterState::new(true)).await?;

    let html = std::fs::read_to_string(temp_dir.path().join("site/index.html"))?;
    assert_eq!(html.matches("sauna-card fade-in hidden").count(), 1);
    assert!(html.contains("すべて表示"));
    assert!(html.contains("bg-gray-500"));

    Ok(())
}

#[tokio::test]
async fn test_api_failure_writes_nothing() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let output_path = temp_dir.path().to_str().unwrap().to_string();

    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/api/saunas");
        then.status(502);
    });

    let config = config_for(&server.base_url(), &output_path);
    let source = HttpSaunaSource::from_config(&config)?;
    let engine = ListingEngine::new(source, LocalStorage::new(output_path), config);

    let err = engine.run(FilterState::default()).await.unwrap_err();

    api_mock.assert();
    assert!(matches!(err, ListingError::HttpStatusError { status: 502, .. }));
    assert!(!temp_dir.path().join("index.html").exists());

    Ok(())
}

#[tokio::test]
async fn test_refresh_publishes_fetched_data_with_single_request() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let output_path = temp_dir.path().to_str().unwrap().to_string();

    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/api/saunas");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!([
                {"name": "更新後", "price": "¥1500", "review_count": 12, "url": "https://z", "is_hidden_gem": true}
            ]));
    });

    let config = config_for(&server.base_url(), &output_path);
    let source = HttpSaunaSource::from_config(&config)?;
    let engine = ListingEngine::new(source, LocalStorage::new(output_path.clone()), config);

    let mut controller = ListingController::new(ConsoleHost::new());
    let outcome = controller.on_refresh(engine.source()).await?;
    assert!(controller.host().reload_requested());

    engine.publish(&outcome.saunas, FilterState::default()).await?;

    // 重繪沿用同一份資料，不會再打一次 API
    api_mock.assert_hits(1);
    let html = std::fs::read_to_string(temp_dir.path().join("index.html"))?;
    assert!(html.contains("更新後"));
    assert_eq!(html.matches("sauna-card").count(), 1);

    Ok(())
}
