mod common;

use brightworld_core::{
    update, ArticleQuery, Effect, FeedState, FilterChange, FilterState, Msg,
    FALLBACK_ERROR_MESSAGE, PAGE_SIZE,
};
use common::{fetch_and_load, init_logging, page};
use pretty_assertions::assert_eq;

#[test]
fn initial_reset_fetch_requests_first_page() {
    init_logging();
    let (state, effects) = update(FeedState::new(), Msg::FetchRequested { reset: true });

    assert!(state.is_loading());
    assert_eq!(
        effects,
        vec![Effect::FetchPage {
            reset: true,
            query: ArticleQuery {
                limit: PAGE_SIZE,
                offset: 0,
                category: None,
                region: None,
                min_score: None,
            },
        }]
    );
}

#[test]
fn preset_filters_shape_first_query() {
    init_logging();
    let filters = FilterState {
        category: Some("environment".to_string()),
        region: None,
        min_score: Some(0.7),
    };
    let state = FeedState::with_filters(filters.clone());
    assert_eq!(state.filters(), &filters);
    assert!(state.list().items.is_empty());

    let (_, effects) = update(state, Msg::FetchRequested { reset: true });
    match effects.as_slice() {
        [Effect::FetchPage { query, .. }] => {
            assert_eq!(query.category.as_deref(), Some("environment"));
            assert_eq!(query.min_score, Some(0.7));
            assert_eq!(query.offset, 0);
        }
        other => panic!("unexpected effects: {other:?}"),
    }
}

#[test]
fn fetch_while_loading_is_dropped() {
    init_logging();
    let (state, _) = update(FeedState::new(), Msg::FetchRequested { reset: true });
    let before = state.clone();

    for reset in [true, false] {
        let (next, effects) = update(state.clone(), Msg::FetchRequested { reset });
        assert!(effects.is_empty());
        assert_eq!(next, before);
    }
}

#[test]
fn first_page_populates_list() {
    init_logging();
    let state = fetch_and_load(FeedState::new(), true, page(1..=12, 50, true));
    let list = state.list();

    assert_eq!(list.items.len(), 12);
    assert_eq!(list.items[0].id, 1);
    assert_eq!(list.items[11].id, 12);
    assert_eq!(list.total, 50);
    assert!(list.has_more);
    assert!(!list.loading);
    assert_eq!(list.error, None);
}

#[test]
fn load_more_appends_in_order() {
    init_logging();
    let state = fetch_and_load(FeedState::new(), true, page(1..=12, 50, true));

    let (state, effects) = update(state, Msg::LoadMoreRequested);
    match effects.as_slice() {
        [Effect::FetchPage { reset, query }] => {
            assert!(!reset);
            assert_eq!(query.offset, 12);
            assert_eq!(query.limit, PAGE_SIZE);
        }
        other => panic!("unexpected effects: {other:?}"),
    }

    let (state, _) = update(
        state,
        Msg::PageLoaded {
            reset: false,
            page: page(13..=24, 50, true),
        },
    );
    let ids: Vec<_> = state.list().items.iter().map(|a| a.id).collect();
    assert_eq!(ids, (1..=24).collect::<Vec<_>>());
    assert_eq!(state.list().total, 50);
}

#[test]
fn load_more_without_more_pages_is_noop() {
    init_logging();
    let state = fetch_and_load(FeedState::new(), true, page(1..=5, 5, false));
    let before = state.clone();

    let (next, effects) = update(state, Msg::LoadMoreRequested);
    assert!(effects.is_empty());
    assert_eq!(next, before);
}

#[test]
fn load_more_while_loading_is_noop() {
    init_logging();
    let (state, _) = update(FeedState::new(), Msg::FetchRequested { reset: true });
    let (_, effects) = update(state, Msg::LoadMoreRequested);
    assert!(effects.is_empty());
}

#[test]
fn set_filter_resets_items_and_requests_offset_zero() {
    init_logging();
    let state = fetch_and_load(FeedState::new(), true, page(1..=12, 50, true));

    let (state, effects) = update(
        state,
        Msg::FilterChanged(FilterChange::Category(Some("tech".to_string()))),
    );

    assert!(state.list().items.is_empty());
    assert!(state.list().has_more);
    assert!(state.is_loading());
    assert_eq!(state.filters().category.as_deref(), Some("tech"));
    match effects.as_slice() {
        [Effect::FetchPage { reset, query }] => {
            assert!(reset);
            assert_eq!(query.offset, 0);
            assert_eq!(query.category.as_deref(), Some("tech"));
        }
        other => panic!("unexpected effects: {other:?}"),
    }
}

#[test]
fn unchanged_filter_values_never_fetch() {
    init_logging();
    let (state, _) = update(
        FeedState::new(),
        Msg::FilterChanged(FilterChange::Region(Some("europe".to_string()))),
    );
    let (mut state, _) = update(
        state,
        Msg::PageLoaded {
            reset: true,
            page: page(1..=3, 3, false),
        },
    );

    let repeats = [
        FilterChange::Region(Some("europe".to_string())),
        FilterChange::Category(None),
        FilterChange::MinScore(None),
        FilterChange::Region(Some("europe".to_string())),
    ];
    for change in repeats {
        let before = state.clone();
        let (next, effects) = update(state, Msg::FilterChanged(change));
        assert!(effects.is_empty());
        assert_eq!(next, before);
        state = next;
    }
}

#[test]
fn filter_change_while_loading_keeps_value_but_skips_fetch() {
    init_logging();
    let (state, _) = update(FeedState::new(), Msg::FetchRequested { reset: true });

    let (state, effects) = update(state, Msg::FilterChanged(FilterChange::MinScore(Some(0.5))));
    assert!(effects.is_empty());
    assert_eq!(state.filters().min_score, Some(0.5));
}

#[test]
fn clear_filters_always_refetches() {
    init_logging();
    let (state, effects) = update(FeedState::new(), Msg::FiltersCleared);
    assert_eq!(effects.len(), 1);

    let (state, _) = update(
        state,
        Msg::PageLoaded {
            reset: true,
            page: page(1..=2, 2, false),
        },
    );
    let (state, _) = update(
        state,
        Msg::FilterChanged(FilterChange::Category(Some("science".to_string()))),
    );
    let (state, _) = update(
        state,
        Msg::PageLoaded {
            reset: true,
            page: page(3..=3, 1, false),
        },
    );

    let (state, effects) = update(state, Msg::FiltersCleared);
    assert!(state.filters().is_empty());
    assert!(state.list().items.is_empty());
    match effects.as_slice() {
        [Effect::FetchPage { reset, query }] => {
            assert!(reset);
            assert_eq!(query.category, None);
        }
        other => panic!("unexpected effects: {other:?}"),
    }
}

#[test]
fn failure_keeps_items_and_records_message() {
    init_logging();
    let state = fetch_and_load(FeedState::new(), true, page(1..=12, 50, true));
    let (state, _) = update(state, Msg::LoadMoreRequested);

    let (state, effects) = update(
        state,
        Msg::PageFailed {
            message: "connection refused".to_string(),
        },
    );
    assert!(effects.is_empty());
    assert_eq!(state.list().items.len(), 12);
    assert_eq!(state.list().error.as_deref(), Some("connection refused"));
    assert!(!state.is_loading());
}

#[test]
fn failed_reset_leaves_list_empty() {
    init_logging();
    let state = fetch_and_load(FeedState::new(), true, page(1..=12, 50, true));
    let (state, _) = update(
        state,
        Msg::FilterChanged(FilterChange::Region(Some("europe".to_string()))),
    );
    assert!(state.list().items.is_empty());

    let (state, effects) = update(
        state,
        Msg::PageFailed {
            message: "Service unavailable".to_string(),
        },
    );
    assert!(effects.is_empty());
    assert!(state.list().items.is_empty());
    assert_eq!(state.list().error.as_deref(), Some("Service unavailable"));
    assert!(!state.is_loading());
    assert_eq!(state.filters().region.as_deref(), Some("europe"));
}

#[test]
fn empty_failure_message_uses_fallback() {
    init_logging();
    let (state, _) = update(FeedState::new(), Msg::FetchRequested { reset: true });
    let (state, _) = update(
        state,
        Msg::PageFailed {
            message: String::new(),
        },
    );
    assert_eq!(state.list().error.as_deref(), Some(FALLBACK_ERROR_MESSAGE));
}

#[test]
fn next_fetch_clears_previous_error() {
    init_logging();
    let (state, _) = update(FeedState::new(), Msg::FetchRequested { reset: true });
    let (state, _) = update(
        state,
        Msg::PageFailed {
            message: "boom".to_string(),
        },
    );
    let (state, _) = update(state, Msg::FetchRequested { reset: false });
    assert_eq!(state.list().error, None);
    assert!(state.is_loading());
}
