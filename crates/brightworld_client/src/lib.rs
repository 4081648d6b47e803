//! Bright World client: HTTP access to the articles API and the async
//! controllers that drive the core state machines.
mod api;
mod controller;
mod error;
mod install;
mod settings;

pub use api::{ArticlesApi, ReqwestArticlesApi};
pub use controller::ArticleListController;
pub use error::{ApiError, NETWORK_STATUS};
pub use install::{
    DeferredPrompt, DisplayContext, InstallEvent, InstallMediator, MediatorState, PromptHandle,
};
pub use settings::{ClientSettings, SettingsError, DEFAULT_BASE_URL};

pub use reqwest::Method;
