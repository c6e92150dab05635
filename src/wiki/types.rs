use serde::{Deserialize, Deserializer};
use std::collections::HashMap;

// Normalized results handed to the driver.

/// Result of a `list=random` query, in the order the API returned it.
#[derive(Debug, Clone, Default)]
pub struct RandomArticles {
    pub articles: Vec<ArticleReference>,
    /// Token for the next batch. Decoded but never followed.
    pub continuation: Option<Continuation>,
    pub batch_complete: bool,
}

impl RandomArticles {
    pub fn ids(&self) -> Vec<u64> {
        self.articles.iter().map(|a| a.id).collect()
    }
}

/// Result of a `prop=extracts` query, keyed by page ID as a string.
#[derive(Debug, Clone, Default)]
pub struct ArticleSummaries {
    pub pages: HashMap<String, ArticleSummary>,
}

impl ArticleSummaries {
    pub fn summary_for(&self, id: u64) -> Option<&ArticleSummary> {
        self.pages.get(&id.to_string())
    }

    /// Extract for `id`, or an empty string when the API left it out.
    pub fn extract_for(&self, id: u64) -> &str {
        self.summary_for(id).map_or("", |s| s.extract.as_str())
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }
}

// ── MediaWiki API Deserialization ───────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ArticleReference {
    #[serde(default)]
    pub id: u64,
    #[serde(default, rename = "ns")]
    pub namespace_id: i64,
    #[serde(default)]
    pub title: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ArticleSummary {
    /// Absent for pages the API reports as missing or invalid.
    #[serde(default, rename = "pageid")]
    pub page_id: u64,
    #[serde(default, rename = "ns")]
    pub namespace_id: i64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub extract: String,
    #[serde(default, deserialize_with = "flag_present")]
    pub missing: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Continuation {
    #[serde(default)]
    pub rncontinue: String,
    #[serde(default, rename = "continue")]
    pub continue_token: String,
}

#[derive(Debug, Deserialize)]
pub struct RandomResponse {
    #[serde(default, deserialize_with = "flag_present")]
    pub batchcomplete: bool,
    #[serde(rename = "continue")]
    pub continuation: Option<Continuation>,
    /// Absent query decodes as an empty list, reported as "not found" upstream.
    #[serde(default)]
    pub query: RandomQuery,
}

#[derive(Debug, Default, Deserialize)]
pub struct RandomQuery {
    #[serde(default)]
    pub random: Vec<ArticleReference>,
}

#[derive(Debug, Deserialize)]
pub struct ExtractsResponse {
    #[serde(default, deserialize_with = "flag_present")]
    pub batchcomplete: bool,
    #[serde(default)]
    pub query: Option<PagesQuery>,
}

#[derive(Debug, Deserialize)]
pub struct PagesQuery {
    #[serde(default)]
    pub pages: HashMap<String, ArticleSummary>,
}

/// Error envelope the API sends (with HTTP 200) when a request is rejected.
#[derive(Debug, Deserialize)]
pub struct ErrorEnvelope {
    pub error: Option<ApiErrorBody>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub info: String,
}

impl From<RandomResponse> for RandomArticles {
    fn from(resp: RandomResponse) -> Self {
        Self {
            articles: resp.query.random,
            continuation: resp.continuation,
            batch_complete: resp.batchcomplete,
        }
    }
}

impl From<ExtractsResponse> for ArticleSummaries {
    fn from(resp: ExtractsResponse) -> Self {
        Self {
            pages: resp.query.map(|q| q.pages).unwrap_or_default(),
        }
    }
}

/// Legacy JSON format marks flags as `"key": ""`; formatversion=2 uses `true`.
fn flag_present<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(!matches!(value, serde_json::Value::Bool(false) | serde_json::Value::Null))
}
