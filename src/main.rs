use clap::Parser;
use stack_badges::config::LogFormat;
use stack_badges::core::LoadOutcome;
use stack_badges::utils::{logger, validation::Validate};
use stack_badges::{
    BadgeEngine, BadgeError, BadgePipeline, CliArgs, GitHubClient, HttpCatalogSource, LocalStorage,
};

fn fail(e: &BadgeError) -> ! {
    tracing::error!(
        "❌ Badge update failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
    eprintln!("❌ {}", e.user_friendly_message());
    std::process::exit(e.exit_code());
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    let verbose = args.verbose;

    // 必填設定在任何 I/O 之前驗證
    let config = match args.into_config() {
        Ok(config) => config,
        Err(e) => {
            logger::init_cli_logger(verbose);
            fail(&e);
        }
    };

    match config.log_format {
        LogFormat::Compact => logger::init_cli_logger(verbose),
        LogFormat::Json => logger::init_json_logger(verbose),
    }

    tracing::info!("Starting stack-badges for {}", config.repository);
    if let Err(e) = config.validate() {
        fail(&e);
    }
    if config.strict {
        tracing::info!("Strict mode: malformed rows skipped, ambiguous sections rejected");
    }

    let repository = GitHubClient::new(&config.gh_api_url, &config.repository, &config.gh_token);
    let source = HttpCatalogSource::new(config.catalog_url.clone());
    let pipeline = BadgePipeline::new(repository, source, LocalStorage::default(), config);
    let engine = BadgeEngine::new(pipeline);

    match engine.run().await {
        Ok(LoadOutcome::Committed { path }) => println!("✅ Updated {}", path),
        Ok(LoadOutcome::Unchanged) => println!("README already up to date"),
        Ok(LoadOutcome::DryRun { content }) => println!("{}", content),
        Err(e) => fail(&e),
    }

    Ok(())
}
