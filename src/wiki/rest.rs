use super::types::*;
use super::ArticleSource;
use crate::config::Config;
use crate::error::FetchError;
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;

const QUERY_PREFIX: &str = "action=query&format=json";

/// URL-encoded `|`, the MediaWiki multi-value separator.
const ID_SEPARATOR: &str = "%7C";

pub struct WikiRest {
    client: Client,
    base_url: String,
}

/// `list=random` URL restricted to the main article namespace.
pub fn random_url(base_url: &str, count: u32) -> String {
    format!(
        "{}?{}&list=random&rnnamespace=0&rnlimit={}",
        base_url, QUERY_PREFIX, count
    )
}

/// Intro-extract URL for `ids`. Zero IDs leaves `pageids=` empty.
pub fn summaries_url(base_url: &str, ids: &[u64]) -> String {
    let joined = ids
        .iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(ID_SEPARATOR);
    format!(
        "{}?{}&prop=extracts&exintro&explaintext&redirects=1&pageids={}",
        base_url, QUERY_PREFIX, joined
    )
}

/// Decode an API body, surfacing the MediaWiki error envelope first.
pub fn decode<T: DeserializeOwned>(body: &str) -> Result<T, FetchError> {
    let envelope: ErrorEnvelope = serde_json::from_str(body)?;
    if let Some(err) = envelope.error {
        return Err(FetchError::Api {
            code: err.code,
            info: err.info,
        });
    }
    Ok(serde_json::from_str(body)?)
}

impl WikiRest {
    pub fn new(base_url: &str, timeout: Duration, user_agent: &str) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn from_config(config: &Config) -> Result<Self, FetchError> {
        Self::new(
            &config.api_endpoint,
            Duration::from_millis(config.request_timeout_ms),
            &config.user_agent,
        )
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET `url` and decode the JSON body. The response is consumed or
    /// dropped on every path, which returns the connection to the pool.
    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, FetchError> {
        tracing::debug!(url, "GET");
        let resp = self.client.get(url).send().await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            tracing::warn!(%status, "MediaWiki API returned non-success status");
            return Err(FetchError::Status { status, body });
        }

        let body = resp.text().await?;
        decode(&body)
    }
}

#[async_trait]
impl ArticleSource for WikiRest {
    async fn fetch_random_articles(&self, count: u32) -> Result<RandomArticles, FetchError> {
        let url = random_url(&self.base_url, count);
        let resp: RandomResponse = self.get_json(&url).await?;

        if resp.query.random.is_empty() {
            return Err(FetchError::EmptyResult);
        }

        let random = RandomArticles::from(resp);
        tracing::debug!(count = random.articles.len(), "random articles fetched");
        Ok(random)
    }

    async fn fetch_summaries(&self, ids: &[u64]) -> Result<ArticleSummaries, FetchError> {
        let url = summaries_url(&self.base_url, ids);
        let resp: ExtractsResponse = self.get_json(&url).await?;

        let summaries = ArticleSummaries::from(resp);
        tracing::debug!(
            requested = ids.len(),
            returned = summaries.len(),
            "article summaries fetched"
        );
        Ok(summaries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://en.wikipedia.org/w/api.php";

    #[test]
    fn test_random_url() {
        assert_eq!(
            random_url(BASE, 3),
            "https://en.wikipedia.org/w/api.php?action=query&format=json&list=random&rnnamespace=0&rnlimit=3"
        );
    }

    #[test]
    fn test_summaries_url_joins_in_order() {
        let url = summaries_url(BASE, &[30, 10, 20]);
        assert!(url.ends_with("&pageids=30%7C10%7C20"), "got {url}");
        assert!(url.contains("prop=extracts&exintro&explaintext&redirects=1"));
        assert!(url.starts_with("https://en.wikipedia.org/w/api.php?action=query&format=json&"));
    }

    #[test]
    fn test_summaries_url_single_id_has_no_separator() {
        let url = summaries_url(BASE, &[5]);
        assert!(url.ends_with("pageids=5"));
        assert!(!url.contains("%7C"));
    }

    #[test]
    fn test_summaries_url_empty_ids() {
        let url = summaries_url(BASE, &[]);
        assert!(url.ends_with("pageids="));
    }

    #[test]
    fn test_new_trims_trailing_slash() {
        let rest = WikiRest::new("http://localhost:1234/w/api.php/", Duration::from_secs(1), "test")
            .unwrap();
        assert_eq!(rest.base_url(), "http://localhost:1234/w/api.php");
    }

    #[test]
    fn test_decode_api_error_envelope() {
        let result = decode::<RandomResponse>(
            r#"{"error": {"code": "toomanyvalues", "info": "Too many values supplied"}}"#,
        );
        match result {
            Err(FetchError::Api { code, .. }) => assert_eq!(code, "toomanyvalues"),
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[test]
    fn test_decode_invalid_json() {
        let result = decode::<RandomResponse>("<html>Service Unavailable</html>");
        assert!(matches!(result, Err(FetchError::Decode(_))));
    }
}
