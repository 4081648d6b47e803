use std::sync::Arc;

use brightworld_core::{update, Effect, FeedState, FeedViewModel, FilterChange, Msg, Store};
use brightworld_logging::{bw_debug, bw_info, bw_warn};

use crate::ArticlesApi;

/// Paginated, filterable article list bound to an [`ArticlesApi`].
///
/// State lives in a [`Store`] so UI bindings can subscribe to it. The
/// controller is meant for a single-threaded executor: operations take
/// `&self`, and concurrent calls are serialized by the loading guard in
/// [`brightworld_core::update`] rather than by locks.
pub struct ArticleListController {
    api: Arc<dyn ArticlesApi>,
    store: Store<FeedState>,
}

impl ArticleListController {
    pub fn new(api: Arc<dyn ArticlesApi>) -> Self {
        Self::with_store(api, Store::default())
    }

    /// Uses an existing store, e.g. one a UI layer already subscribed to.
    pub fn with_store(api: Arc<dyn ArticlesApi>, store: Store<FeedState>) -> Self {
        Self { api, store }
    }

    pub fn store(&self) -> &Store<FeedState> {
        &self.store
    }

    pub fn state(&self) -> FeedState {
        self.store.get()
    }

    pub fn view(&self) -> FeedViewModel {
        self.store.with(FeedState::view)
    }

    pub fn is_loading(&self) -> bool {
        self.store.with(FeedState::is_loading)
    }

    /// Fetches one page. No-op while another fetch is in flight.
    pub async fn fetch_articles(&self, reset: bool) {
        self.dispatch(Msg::FetchRequested { reset }).await;
    }

    /// Fetches the next page unless the list is complete or loading.
    pub async fn load_more(&self) {
        self.dispatch(Msg::LoadMoreRequested).await;
    }

    /// Changes one filter and refetches from the first page if it differs.
    pub async fn set_filter(&self, change: FilterChange) {
        self.dispatch(Msg::FilterChanged(change)).await;
    }

    pub async fn clear_filters(&self) {
        self.dispatch(Msg::FiltersCleared).await;
    }

    async fn dispatch(&self, msg: Msg) {
        let effects = self.apply(msg);
        for effect in effects {
            self.run(effect).await;
        }
    }

    fn apply(&self, msg: Msg) -> Vec<Effect> {
        self.store.update(|state| {
            let (next, effects) = update(std::mem::take(state), msg);
            *state = next;
            effects
        })
    }

    async fn run(&self, effect: Effect) {
        match effect {
            Effect::FetchPage { reset, query } => {
                bw_info!(
                    "Fetching articles offset={} limit={} reset={}",
                    query.offset,
                    query.limit,
                    reset
                );
                let completion = match self.api.get_articles(&query).await {
                    Ok(page) => {
                        bw_debug!(
                            "Loaded {} articles (total={}, has_more={})",
                            page.articles.len(),
                            page.total,
                            page.has_more
                        );
                        Msg::PageLoaded { reset, page }
                    }
                    Err(err) => {
                        bw_warn!("Article fetch failed: {} (status {})", err.message, err.status);
                        Msg::PageFailed {
                            message: err.message,
                        }
                    }
                };
                let follow_up = self.apply(completion);
                debug_assert!(follow_up.is_empty());
            }
        }
    }
}
