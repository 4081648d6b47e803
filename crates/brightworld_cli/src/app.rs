use std::sync::Arc;

use anyhow::{bail, Context, Result};
use brightworld_client::{ArticleListController, ArticlesApi};
use brightworld_core::{FeedState, FilterState, Store};
use brightworld_logging::{bw_debug, bw_info};

use crate::cli::Command;
use crate::render;

/// Runs one subcommand and returns the text to print.
pub async fn run(api: Arc<dyn ArticlesApi>, command: Command) -> Result<String> {
    match command {
        Command::List {
            category,
            region,
            min_score,
            pages,
        } => {
            let filters = FilterState {
                category: category.filter(|c| !c.is_empty()),
                region: region.filter(|r| !r.is_empty()),
                min_score,
            };
            list(api, filters, pages).await
        }
        Command::Show { id } => {
            let article = api
                .get_article(id)
                .await
                .with_context(|| format!("failed to load article {id}"))?;
            Ok(render::article(&article))
        }
        Command::Categories => {
            let categories = api.get_categories().await.context("failed to load categories")?;
            Ok(render::categories(&categories))
        }
        Command::Regions => {
            let regions = api.get_regions().await.context("failed to load regions")?;
            Ok(render::regions(&regions))
        }
        Command::Stats => {
            let stats = api.get_stats().await.context("failed to load stats")?;
            Ok(render::stats(&stats))
        }
        Command::Ingest => {
            let summary = api.trigger_fetch().await.context("ingest request failed")?;
            bw_info!(
                "Ingest finished status={} fetched={} new={}",
                summary.status,
                summary.fetched,
                summary.new
            );
            Ok(render::ingest(&summary))
        }
        Command::Health => {
            let health = api.health().await.context("health check failed")?;
            Ok(render::health(&health))
        }
    }
}

async fn list(api: Arc<dyn ArticlesApi>, filters: FilterState, pages: u32) -> Result<String> {
    let store = Store::new(FeedState::with_filters(filters));
    let _progress = store.subscribe(|state: &FeedState| {
        let list = state.list();
        bw_debug!(
            "List items={} total={} loading={} has_more={}",
            list.items.len(),
            list.total,
            list.loading,
            list.has_more
        );
    });
    let controller = ArticleListController::with_store(api, store);

    controller.fetch_articles(true).await;
    for _ in 1..pages.max(1) {
        let view = controller.view();
        if view.error.is_some() || !view.can_load_more {
            break;
        }
        controller.load_more().await;
    }

    let view = controller.view();
    if let Some(error) = &view.error {
        // Keep whatever pages did load.
        if view.rows.is_empty() {
            bail!("{error}");
        }
        bw_info!("Stopped after {} articles: {}", view.item_count, error);
    }
    Ok(render::feed(&view))
}
