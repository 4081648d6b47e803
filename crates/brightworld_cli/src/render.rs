//! Plain-text rendering of API results for the terminal.

use std::fmt::Write as _;

use brightworld_core::{
    Article, ArticleStats, CategoryCount, FeedViewModel, HealthStatus, IngestSummary, RegionCount,
};

pub fn feed(view: &FeedViewModel) -> String {
    let mut out = String::new();
    if !view.active_filters.is_empty() {
        let _ = writeln!(out, "Filters: {}", view.active_filters.join(", "));
    }
    if view.rows.is_empty() {
        out.push_str("No articles found.\n");
    }
    for row in &view.rows {
        let mut tags = Vec::new();
        if let Some(category) = &row.category {
            tags.push(category.as_str());
        }
        if let Some(region) = &row.region {
            tags.push(region.as_str());
        }
        let _ = write!(out, "#{:<6} {:.2}  {}", row.id, row.score, row.headline);
        if !row.source_name.is_empty() {
            let _ = write!(out, " ({})", row.source_name);
        }
        if !tags.is_empty() {
            let _ = write!(out, " [{}]", tags.join("/"));
        }
        out.push('\n');
    }
    let _ = write!(out, "Showing {} of {} articles", view.item_count, view.total);
    if view.has_more {
        out.push_str("; more available");
    }
    out.push('\n');
    out
}

pub fn article(article: &Article) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", article.headline);
    if !article.source_name.is_empty() {
        let _ = writeln!(out, "Source: {}", article.source_name);
    }
    if let Some(published) = article.published_at {
        let _ = writeln!(out, "Published: {}", published.format("%Y-%m-%d %H:%M"));
    }
    if let Some(category) = &article.category {
        let _ = writeln!(out, "Category: {category}");
    }
    if let Some(region) = &article.region {
        let _ = writeln!(out, "Region: {region}");
    }
    let _ = writeln!(out, "Hopefulness: {:.2}", article.hopefulness_score);
    if !article.source_url.is_empty() {
        let _ = writeln!(out, "Link: {}", article.source_url);
    }
    if let Some(summary) = article.summary.as_deref().filter(|s| !s.is_empty()) {
        let _ = writeln!(out, "\n{summary}");
    }
    out
}

fn counts<'a>(entries: impl IntoIterator<Item = (&'a str, u64)>) -> String {
    let mut out = String::new();
    for (name, count) in entries {
        let _ = writeln!(out, "{name:<20} {count}");
    }
    if out.is_empty() {
        out.push_str("None.\n");
    }
    out
}

pub fn categories(entries: &[CategoryCount]) -> String {
    counts(entries.iter().map(|c| (c.name.as_str(), c.count)))
}

pub fn regions(entries: &[RegionCount]) -> String {
    counts(entries.iter().map(|r| (r.name.as_str(), r.count)))
}

pub fn stats(stats: &ArticleStats) -> String {
    format!("Today: {}\nTotal: {}\n", stats.today, stats.total)
}

pub fn ingest(summary: &IngestSummary) -> String {
    format!(
        "Ingest {}: fetched {}, new {}\n",
        summary.status, summary.fetched, summary.new
    )
}

pub fn health(health: &HealthStatus) -> String {
    format!("API status: {}\n", health.status)
}
