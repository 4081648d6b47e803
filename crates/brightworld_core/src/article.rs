use chrono::{DateTime, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize};

/// Number of articles requested per page.
pub const PAGE_SIZE: u32 = 12;

pub type ArticleId = i64;

/// Article record as served by `/api/articles`.
///
/// Only `id` is required; the list layer does not interpret the rest.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Article {
    pub id: ArticleId,
    #[serde(default)]
    pub guid: String,
    #[serde(default)]
    pub headline: String,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub source_url: String,
    #[serde(default)]
    pub source_name: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default, deserialize_with = "lenient_timestamp")]
    pub published_at: Option<NaiveDateTime>,
    #[serde(default, deserialize_with = "lenient_timestamp")]
    pub fetched_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub hopefulness_score: f64,
}

/// Parses an ISO-8601 timestamp with or without a UTC offset.
///
/// Offset forms are converted to UTC. Returns `None` for anything else.
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if let Ok(with_offset) = DateTime::parse_from_rfc3339(raw) {
        return Some(with_offset.naive_utc());
    }
    raw.parse::<NaiveDateTime>()
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f"))
        .ok()
}

// An unreadable timestamp drops to `None` instead of failing the whole page.
fn lenient_timestamp<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(parse_timestamp))
}

/// One page of the paginated article listing.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ArticlePage {
    pub articles: Vec<Article>,
    pub total: u64,
    pub has_more: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset: Option<u64>,
}

/// Parameters of a listing request.
#[derive(Debug, Clone, PartialEq)]
pub struct ArticleQuery {
    pub limit: u32,
    pub offset: u64,
    pub category: Option<String>,
    pub region: Option<String>,
    pub min_score: Option<f64>,
}

impl Default for ArticleQuery {
    fn default() -> Self {
        Self {
            limit: PAGE_SIZE,
            offset: 0,
            category: None,
            region: None,
            min_score: None,
        }
    }
}

impl ArticleQuery {
    /// Query-string pairs in the order the API documents them.
    ///
    /// Empty category or region strings are treated as unset.
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("limit", self.limit.to_string()),
            ("offset", self.offset.to_string()),
        ];
        if let Some(category) = self.category.as_deref().filter(|c| !c.is_empty()) {
            pairs.push(("category", category.to_string()));
        }
        if let Some(region) = self.region.as_deref().filter(|r| !r.is_empty()) {
            pairs.push(("region", region.to_string()));
        }
        if let Some(min_score) = self.min_score {
            pairs.push(("min_score", min_score.to_string()));
        }
        pairs
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCount {
    pub name: String,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionCount {
    pub name: String,
    pub count: u64,
}

/// Result of a server-side ingestion run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngestSummary {
    pub status: String,
    pub fetched: u64,
    pub new: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleStats {
    pub today: u64,
    pub total: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
}
