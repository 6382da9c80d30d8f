use clap::Parser;
use sauna_gem::adapters::file::read_reviews;
use sauna_gem::core::ranking::{generate_ranking, ranking_to_csv, ranking_to_json, search_reviews};
use sauna_gem::utils::error::exit_code;
use sauna_gem::utils::{logger, validation::Validate};
use sauna_gem::{
    CliConfig, Command, ConsoleHost, ExportFormat, FileSaunaSource, FilterState, GemAnalyzer,
    HttpSaunaSource, ListingConfig, ListingController, ListingEngine, ListingError, LocalStorage,
    LogFormat,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CliConfig::parse();

    // 初始化日誌
    match cli.log_format {
        LogFormat::Compact => logger::init_cli_logger(cli.verbose),
        LogFormat::Json => logger::init_json_logger(cli.verbose),
    }

    tracing::info!("Starting sauna-gem CLI");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    // 載入並驗證配置
    let config = match cli.resolve().and_then(|config| config.validate().map(|_| config)) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ Configuration validation failed: {}", e);
            tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }
    };

    if let Err(e) = run(&cli, &config).await {
        tracing::error!(
            "❌ Command failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

        // 更新失敗時提示訊息已由頁面宿主輸出
        if !matches!(e, ListingError::RefreshFailed { .. }) {
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
        }

        std::process::exit(exit_code(&e));
    }

    Ok(())
}

async fn run(cli: &CliConfig, config: &ListingConfig) -> sauna_gem::Result<()> {
    match &cli.command {
        Command::Render {
            input,
            hidden_gems_only,
            ..
        } => {
            let storage = LocalStorage::new(config.output_path().to_string());
            let filter = FilterState::new(*hidden_gems_only);

            let output_path = match input {
                Some(path) => {
                    let source = FileSaunaSource::new(path);
                    ListingEngine::new(source, storage, config.clone())
                        .run(filter)
                        .await?
                }
                None => {
                    let source = HttpSaunaSource::from_config(config)?;
                    ListingEngine::new(source, storage, config.clone())
                        .run(filter)
                        .await?
                }
            };

            println!("✅ Listing rendered successfully!");
            println!("📁 Output saved to: {}", output_path);
        }

        Command::Refresh { .. } => {
            let source = HttpSaunaSource::from_config(config)?;
            let storage = LocalStorage::new(config.output_path().to_string());
            let engine = ListingEngine::new(source, storage, config.clone());

            let mut controller = ListingController::new(ConsoleHost::new());
            let outcome = controller.on_refresh(engine.source()).await?;

            if controller.host().reload_requested() {
                // 以剛取得的資料重繪，篩選狀態回到預設
                let output_path = engine
                    .publish(&outcome.saunas, FilterState::default())
                    .await?;
                println!("✅ Refreshed {} saunas", outcome.record_count());
                println!("📁 Output saved to: {}", output_path);
            }
        }

        Command::Analyze { reviews } => {
            let reviews = read_reviews(reviews).await?;
            let analyzer = GemAnalyzer::new(config.analysis_keywords(), config.gem_threshold());
            let analysis = analyzer.analyze_reviews(&reviews);

            tracing::info!(
                "Analyzed {} reviews: score {} / {}",
                analysis.review_count,
                analysis.score,
                analysis.max_score
            );
            println!("{}", serde_json::to_string_pretty(&analysis)?);
        }

        Command::Rank {
            reviews, format, ..
        } => {
            let reviews = read_reviews(reviews).await?;
            let ranking = generate_ranking(
                &reviews,
                &config.ranking_keywords(),
                config.ranking_limit(),
                config.min_reviews(),
            );

            if ranking.is_empty() {
                tracing::warn!("No saunas met the ranking criteria");
            }

            let rendered = match format {
                ExportFormat::Json => ranking_to_json(&ranking)?,
                ExportFormat::Csv => ranking_to_csv(&ranking)?,
            };
            println!("{}", rendered);
        }

        Command::Search {
            reviews,
            pattern,
            limit,
        } => {
            let reviews = read_reviews(reviews).await?;
            let found = search_reviews(&reviews, pattern, *limit)?;
            tracing::info!("Found {} matching reviews", found.len());
            println!("{}", serde_json::to_string_pretty(&found)?);
        }
    }

    Ok(())
}
