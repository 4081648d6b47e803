use crate::view_model::FeedViewModel;
use crate::{Article, ArticlePage, ArticleQuery, FilterState, PAGE_SIZE};

/// Shown when a failed fetch carries no message of its own.
pub const FALLBACK_ERROR_MESSAGE: &str = "Failed to load articles";

/// Accumulated pagination state of the article list.
#[derive(Debug, Clone, PartialEq)]
pub struct ArticleListState {
    pub items: Vec<Article>,
    pub total: u64,
    pub has_more: bool,
    pub loading: bool,
    pub error: Option<String>,
}

impl Default for ArticleListState {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            total: 0,
            has_more: true,
            loading: false,
            error: None,
        }
    }
}

/// Article list plus the filters that shape its queries.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FeedState {
    list: ArticleListState,
    filters: FilterState,
}

impl FeedState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty list that will be queried with `filters` from the first fetch.
    pub fn with_filters(filters: FilterState) -> Self {
        Self {
            filters,
            ..Self::default()
        }
    }

    pub fn list(&self) -> &ArticleListState {
        &self.list
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn is_loading(&self) -> bool {
        self.list.loading
    }

    pub fn view(&self) -> FeedViewModel {
        FeedViewModel::from_state(&self.list, &self.filters)
    }

    pub(crate) fn filters_mut(&mut self) -> &mut FilterState {
        &mut self.filters
    }

    /// Enters the loading state and returns the query to issue.
    ///
    /// Returns `None` while another fetch is outstanding.
    pub(crate) fn begin_fetch(&mut self, reset: bool) -> Option<ArticleQuery> {
        if self.list.loading {
            return None;
        }
        if reset {
            self.list.items.clear();
            self.list.has_more = true;
        }
        self.list.error = None;
        self.list.loading = true;

        let offset = if reset { 0 } else { self.list.items.len() as u64 };
        Some(ArticleQuery {
            limit: PAGE_SIZE,
            offset,
            category: self.filters.category.clone(),
            region: self.filters.region.clone(),
            min_score: self.filters.min_score,
        })
    }

    pub(crate) fn apply_page(&mut self, reset: bool, page: ArticlePage) {
        if reset {
            self.list.items = page.articles;
        } else {
            self.list.items.extend(page.articles);
        }
        self.list.total = page.total;
        self.list.has_more = page.has_more;
        self.list.loading = false;
    }

    pub(crate) fn apply_failure(&mut self, message: String) {
        let message = if message.trim().is_empty() {
            FALLBACK_ERROR_MESSAGE.to_string()
        } else {
            message
        };
        self.list.error = Some(message);
        self.list.loading = false;
    }
}
