use crate::{Effect, FeedState, Msg};

/// Pure update function: applies a message to state and returns any effects.
///
/// At most one `Effect::FetchPage` is outstanding at a time: while the list is
/// loading every fetch request is dropped here, before any IO is started.
pub fn update(mut state: FeedState, msg: Msg) -> (FeedState, Vec<Effect>) {
    let effects = match msg {
        Msg::FetchRequested { reset } => fetch(&mut state, reset),
        Msg::LoadMoreRequested => {
            if !state.list().has_more || state.is_loading() {
                Vec::new()
            } else {
                fetch(&mut state, false)
            }
        }
        Msg::FilterChanged(change) => {
            if state.filters_mut().apply(change) {
                fetch(&mut state, true)
            } else {
                Vec::new()
            }
        }
        Msg::FiltersCleared => {
            state.filters_mut().clear();
            fetch(&mut state, true)
        }
        Msg::PageLoaded { reset, page } => {
            state.apply_page(reset, page);
            Vec::new()
        }
        Msg::PageFailed { message } => {
            state.apply_failure(message);
            Vec::new()
        }
    };

    (state, effects)
}

fn fetch(state: &mut FeedState, reset: bool) -> Vec<Effect> {
    state
        .begin_fetch(reset)
        .map(|query| Effect::FetchPage { reset, query })
        .into_iter()
        .collect()
}
