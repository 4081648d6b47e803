#![allow(dead_code)]

use std::sync::Once;

use brightworld_core::{update, Article, ArticlePage, FeedState, Msg};

pub fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(brightworld_logging::initialize_for_tests);
}

pub fn article(id: i64) -> Article {
    Article {
        id,
        headline: format!("Article {id}"),
        source_name: "Wire".to_string(),
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

/// Requests a fetch and answers it with `page`.
pub fn fetch_and_load(state: FeedState, reset: bool, page: ArticlePage) -> FeedState {
    let (state, effects) = update(state, Msg::FetchRequested { reset });
    assert_eq!(effects.len(), 1, "expected a fetch effect");
    let (state, _) = update(state, Msg::PageLoaded { reset, page });
    state
}
