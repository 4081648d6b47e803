//! Bright World core: pure article-list and install-prompt state machines.
mod article;
mod effect;
mod filter;
mod install;
mod msg;
mod state;
mod store;
mod update;
mod view_model;

pub use article::{
    parse_timestamp, Article, ArticleId, ArticlePage, ArticleQuery, ArticleStats, CategoryCount,
    HealthStatus, IngestSummary, RegionCount, PAGE_SIZE,
};
pub use effect::Effect;
pub use filter::{FilterChange, FilterState};
pub use install::{update_install, InstallEffect, InstallMsg, InstallState, UserChoice};
pub use msg::Msg;
pub use state::{ArticleListState, FeedState, FALLBACK_ERROR_MESSAGE};
pub use store::{Store, Subscription};
pub use update::update;
pub use view_model::{ArticleRowView, FeedViewModel};
