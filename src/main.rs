use anyhow::{Context, Result};
use std::io::{self, Write};
use std::path::Path;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;
use wiki_random::config::{Config, CONFIG_FILE};
use wiki_random::driver;
use wiki_random::wiki::rest::WikiRest;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    // Logs go to stderr so stdout carries only the report
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("wiki_random=warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let config = Config::load_or_default(Path::new(CONFIG_FILE))?;
    let rest = WikiRest::from_config(&config).context("failed to build HTTP client")?;

    tracing::debug!(
        endpoint = rest.base_url(),
        count = config.article_count,
        "starting run"
    );

    match driver::run(&rest, config.article_count).await {
        Ok(report) => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(report.as_bytes())?;
            stdout.flush()?;
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            tracing::debug!(stage_error = %e, cause = ?e.fetch_error(), "run failed");
            println!("{}", e);
            Ok(ExitCode::FAILURE)
        }
    }
}
