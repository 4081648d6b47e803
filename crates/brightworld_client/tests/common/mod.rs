#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, Once};

use brightworld_client::{ApiError, ArticlesApi};
use brightworld_core::{
    Article, ArticleId, ArticlePage, ArticleQuery, ArticleStats, CategoryCount, HealthStatus,
    IngestSummary, RegionCount,
};
use tokio::sync::Notify;

pub fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(brightworld_logging::initialize_for_tests);
}

pub fn article(id: i64) -> Article {
    Article {
        id,
        headline: format!("Article {id}"),
        ..Article::default()
    }
}

pub fn page(ids: std::ops::RangeInclusive<i64>, total: u64, has_more: bool) -> ArticlePage {
    ArticlePage {
        articles: ids.map(article).collect(),
        total,
        has_more,
        limit: None,
        offset: None,
    }
}

/// Holds one API call open until the test releases it.
#[derive(Clone, Default)]
pub struct Gate {
    pub started: Arc<Notify>,
    pub release: Arc<Notify>,
}

/// In-memory `ArticlesApi` answering listing calls from a script.
#[derive(Default)]
pub struct ScriptedApi {
    responses: Mutex<VecDeque<Result<ArticlePage, ApiError>>>,
    queries: Mutex<Vec<ArticleQuery>>,
    next_gate: Mutex<Option<Gate>>,
}

impl ScriptedApi {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn push(&self, response: Result<ArticlePage, ApiError>) {
        self.responses.lock().unwrap().push_back(response);
    }

    /// The next listing call waits on the returned gate.
    pub fn gate_next_call(&self) -> Gate {
        let gate = Gate::default();
        *self.next_gate.lock().unwrap() = Some(gate.clone());
        gate
    }

    pub fn queries(&self) -> Vec<ArticleQuery> {
        self.queries.lock().unwrap().clone()
    }

    pub fn calls(&self) -> usize {
        self.queries.lock().unwrap().len()
    }
}

fn unsupported<T>() -> Result<T, ApiError> {
    Err(ApiError::network("not scripted"))
}

#[async_trait::async_trait]
impl ArticlesApi for ScriptedApi {
    async fn get_articles(&self, query: &ArticleQuery) -> Result<ArticlePage, ApiError> {
        self.queries.lock().unwrap().push(query.clone());
        let gate = self.next_gate.lock().unwrap().take();
        if let Some(gate) = gate {
            gate.started.notify_one();
            gate.release.notified().await;
        }
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::network("script exhausted")))
    }

    async fn get_article(&self, _id: ArticleId) -> Result<Article, ApiError> {
        unsupported()
    }

    async fn get_categories(&self) -> Result<Vec<CategoryCount>, ApiError> {
        unsupported()
    }

    async fn get_regions(&self) -> Result<Vec<RegionCount>, ApiError> {
        unsupported()
    }

    async fn trigger_fetch(&self) -> Result<IngestSummary, ApiError> {
        unsupported()
    }

    async fn get_stats(&self) -> Result<ArticleStats, ApiError> {
        unsupported()
    }

    async fn health(&self) -> Result<HealthStatus, ApiError> {
        unsupported()
    }
}
