use brightworld_core::{
    Article, ArticleId, ArticlePage, ArticleQuery, ArticleStats, CategoryCount, HealthStatus,
    IngestSummary, RegionCount,
};
use brightworld_logging::{bw_debug, bw_warn};
use futures_util::StreamExt;
use reqwest::header::{HeaderValue, CONTENT_TYPE};
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;
use url::Url;

use crate::{ApiError, ClientSettings};

/// Read and ingestion endpoints of the articles API.
#[async_trait::async_trait]
pub trait ArticlesApi: Send + Sync {
    /// `GET /api/articles` with pagination and filters.
    async fn get_articles(&self, query: &ArticleQuery) -> Result<ArticlePage, ApiError>;

    async fn get_article(&self, id: ArticleId) -> Result<Article, ApiError>;

    async fn get_categories(&self) -> Result<Vec<CategoryCount>, ApiError>;

    async fn get_regions(&self) -> Result<Vec<RegionCount>, ApiError>;

    /// Starts a server-side ingestion run. Sends no body.
    async fn trigger_fetch(&self) -> Result<IngestSummary, ApiError>;

    async fn get_stats(&self) -> Result<ArticleStats, ApiError>;

    async fn health(&self) -> Result<HealthStatus, ApiError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestArticlesApi {
    settings: ClientSettings,
    client: reqwest::Client,
}

impl ReqwestArticlesApi {
    pub fn new(settings: ClientSettings) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| ApiError::network(err.to_string()))?;
        Ok(Self { settings, client })
    }

    pub fn settings(&self) -> &ClientSettings {
        &self.settings
    }

    /// Sends a request and returns the parsed JSON body.
    ///
    /// A body that is empty or not JSON comes back as `Ok(None)` on success
    /// statuses; on error statuses it simply leaves `ApiError::data` unset.
    pub async fn send(
        &self,
        method: Method,
        endpoint: &str,
        query: &[(&str, String)],
    ) -> Result<Option<Value>, ApiError> {
        self.send_with_status(method, endpoint, query)
            .await
            .map(|(_, data)| data)
    }

    async fn send_with_status(
        &self,
        method: Method,
        endpoint: &str,
        query: &[(&str, String)],
    ) -> Result<(u16, Option<Value>), ApiError> {
        let url = self.endpoint_url(endpoint, query)?;
        bw_debug!("{} {}", method, url);

        let response = self
            .client
            .request(method.clone(), url.clone())
            .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        let body = self.read_body(response, status).await?;
        let data = serde_json::from_slice::<Value>(&body).ok();

        if !status.is_success() {
            let err = ApiError::http(status.as_u16(), data);
            bw_warn!("{} {} failed: {} ({})", method, url, err.message, err.status);
            return Err(err);
        }

        Ok((status.as_u16(), data))
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        method: Method,
        endpoint: &str,
        query: &[(&str, String)],
    ) -> Result<T, ApiError> {
        let (status, data) = self.send_with_status(method, endpoint, query).await?;
        let Some(data) = data else {
            return Err(ApiError::decode(status, "body is not valid JSON", None));
        };
        serde_json::from_value(data.clone()).map_err(|err| ApiError::decode(status, err, Some(data)))
    }

    fn endpoint_url(&self, endpoint: &str, query: &[(&str, String)]) -> Result<Url, ApiError> {
        let raw = format!("{}{}", self.settings.normalized_base(), endpoint);
        let mut url = Url::parse(&raw).map_err(|err| ApiError::network(format!("{raw}: {err}")))?;
        if !query.is_empty() {
            url.query_pairs_mut()
                .extend_pairs(query.iter().map(|(key, value)| (*key, value.as_str())));
        }
        Ok(url)
    }

    async fn read_body(
        &self,
        response: reqwest::Response,
        status: StatusCode,
    ) -> Result<Vec<u8>, ApiError> {
        let max_bytes = self.settings.max_body_bytes;
        if let Some(content_len) = response.content_length() {
            if content_len > max_bytes {
                return Err(too_large(status, max_bytes, content_len));
            }
        }

        let mut bytes = Vec::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(map_reqwest_error)?;
            let next_len = bytes.len() as u64 + chunk.len() as u64;
            if next_len > max_bytes {
                return Err(too_large(status, max_bytes, next_len));
            }
            bytes.extend_from_slice(&chunk);
        }
        Ok(bytes)
    }
}

#[async_trait::async_trait]
impl ArticlesApi for ReqwestArticlesApi {
    async fn get_articles(&self, query: &ArticleQuery) -> Result<ArticlePage, ApiError> {
        self.get_json(Method::GET, "/api/articles", &query.to_pairs())
            .await
    }

    async fn get_article(&self, id: ArticleId) -> Result<Article, ApiError> {
        self.get_json(Method::GET, &format!("/api/articles/{id}"), &[])
            .await
    }

    async fn get_categories(&self) -> Result<Vec<CategoryCount>, ApiError> {
        self.get_json(Method::GET, "/api/articles/categories", &[])
            .await
    }

    async fn get_regions(&self) -> Result<Vec<RegionCount>, ApiError> {
        self.get_json(Method::GET, "/api/articles/regions", &[])
            .await
    }

    async fn trigger_fetch(&self) -> Result<IngestSummary, ApiError> {
        self.get_json(Method::POST, "/api/articles/fetch", &[])
            .await
    }

    async fn get_stats(&self) -> Result<ArticleStats, ApiError> {
        self.get_json(Method::GET, "/api/articles/stats", &[])
            .await
    }

    async fn health(&self) -> Result<HealthStatus, ApiError> {
        self.get_json(Method::GET, "/api/health", &[]).await
    }
}

/// An oversized error body still reports as a failed request.
fn too_large(status: StatusCode, max_bytes: u64, actual: u64) -> ApiError {
    if !status.is_success() {
        bw_warn!("Discarding {actual}-byte error body (limit {max_bytes})");
        return ApiError::http(status.as_u16(), None);
    }
    ApiError::decode(
        status.as_u16(),
        format!("body of {actual} bytes exceeds limit of {max_bytes}"),
        None,
    )
}

fn map_reqwest_error(err: reqwest::Error) -> ApiError {
    if err.is_timeout() {
        return ApiError::network(format!("request timed out: {err}"));
    }
    ApiError::network(err.to_string())
}
