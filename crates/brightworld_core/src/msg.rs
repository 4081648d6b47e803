use crate::{ArticlePage, FilterChange};

#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// Caller asked for a page; `reset` starts over from offset 0.
    FetchRequested { reset: bool },
    /// Caller scrolled to the end of the list.
    LoadMoreRequested,
    /// One filter field was edited.
    FilterChanged(FilterChange),
    /// All filters were reset.
    FiltersCleared,
    /// The API answered an outstanding fetch.
    PageLoaded { reset: bool, page: ArticlePage },
    /// The outstanding fetch failed.
    PageFailed { message: String },
}
