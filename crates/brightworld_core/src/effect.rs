use crate::ArticleQuery;

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    FetchPage { reset: bool, query: ArticleQuery },
}
