use crate::error::StageError;
use crate::report;
use crate::wiki::ArticleSource;

/// Fetch `count` random articles, then their summaries, and return the
/// rendered report. Nothing is rendered unless both calls succeed.
pub async fn run(source: &dyn ArticleSource, count: u32) -> Result<String, StageError> {
    let random = source
        .fetch_random_articles(count)
        .await
        .map_err(StageError::RandomArticles)?;

    let ids = random.ids();
    tracing::info!(?ids, "fetching summaries");

    let summaries = source
        .fetch_summaries(&ids)
        .await
        .map_err(StageError::Summaries)?;

    Ok(report::render(&random, &summaries))
}
