use crate::{Article, ArticleId, ArticleListState, FilterState};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct FeedViewModel {
    pub rows: Vec<ArticleRowView>,
    pub item_count: usize,
    pub total: u64,
    pub has_more: bool,
    pub loading: bool,
    pub can_load_more: bool,
    pub error: Option<String>,
    pub active_filters: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ArticleRowView {
    pub id: ArticleId,
    pub headline: String,
    pub source_name: String,
    pub category: Option<String>,
    pub region: Option<String>,
    pub score: f64,
}

impl FeedViewModel {
    pub(crate) fn from_state(list: &ArticleListState, filters: &FilterState) -> Self {
        Self {
            rows: list.items.iter().map(ArticleRowView::from_article).collect(),
            item_count: list.items.len(),
            total: list.total,
            has_more: list.has_more,
            loading: list.loading,
            can_load_more: list.has_more && !list.loading,
            error: list.error.clone(),
            active_filters: describe_filters(filters),
        }
    }
}

impl ArticleRowView {
    fn from_article(article: &Article) -> Self {
        Self {
            id: article.id,
            headline: article.headline.clone(),
            source_name: article.source_name.clone(),
            category: article.category.clone(),
            region: article.region.clone(),
            score: article.hopefulness_score,
        }
    }
}

fn describe_filters(filters: &FilterState) -> Vec<String> {
    let mut labels = Vec::new();
    if let Some(category) = &filters.category {
        labels.push(format!("category={category}"));
    }
    if let Some(region) = &filters.region {
        labels.push(format!("region={region}"));
    }
    if let Some(min_score) = filters.min_score {
        labels.push(format!("min_score={min_score}"));
    }
    labels
}
