//! Bridges platform install-capability events into observable state.

use std::fmt;
use std::sync::Arc;

use brightworld_core::{update_install, InstallEffect, InstallMsg, InstallState, Store, UserChoice};
use brightworld_logging::{bw_debug, bw_info};
use tokio::sync::mpsc;

/// The deferred install prompt handed over by the platform.
#[async_trait::async_trait]
pub trait DeferredPrompt: Send + Sync {
    /// Suppresses the platform's own install UI for this offer.
    fn prevent_default(&self);

    /// Shows the native prompt and resolves with the user's decision.
    async fn prompt(&self) -> UserChoice;
}

/// Synchronous view of how the application is currently displayed.
pub trait DisplayContext {
    /// True when already running as an installed, standalone app.
    fn is_standalone(&self) -> bool;
}

pub enum InstallEvent {
    BeforeInstallPrompt(Arc<dyn DeferredPrompt>),
    AppInstalled,
}

impl fmt::Debug for InstallEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BeforeInstallPrompt(_) => f.write_str("BeforeInstallPrompt"),
            Self::AppInstalled => f.write_str("AppInstalled"),
        }
    }
}

/// Retained prompt; two handles are equal when they wrap the same prompt.
#[derive(Clone)]
pub struct PromptHandle(Arc<dyn DeferredPrompt>);

impl PromptHandle {
    fn addr(&self) -> *const () {
        Arc::as_ptr(&self.0) as *const ()
    }
}

impl PartialEq for PromptHandle {
    fn eq(&self, other: &Self) -> bool {
        self.addr() == other.addr()
    }
}

impl fmt::Debug for PromptHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("PromptHandle").field(&self.addr()).finish()
    }
}

pub type MediatorState = InstallState<PromptHandle>;

pub struct InstallMediator {
    store: Store<MediatorState>,
}

impl InstallMediator {
    /// One-time setup at application startup.
    pub fn initialize(display: &dyn DisplayContext) -> Self {
        let is_installed = display.is_standalone();
        if is_installed {
            bw_info!("Running in standalone display mode; already installed");
        }
        Self {
            store: Store::new(InstallState::new(is_installed)),
        }
    }

    pub fn store(&self) -> &Store<MediatorState> {
        &self.store
    }

    pub fn is_installable(&self) -> bool {
        self.store.with(MediatorState::is_installable)
    }

    pub fn is_installed(&self) -> bool {
        self.store.with(MediatorState::is_installed)
    }

    pub fn handle_event(&self, event: InstallEvent) {
        bw_debug!("Install event {:?}", event);
        match event {
            InstallEvent::BeforeInstallPrompt(prompt) => {
                prompt.prevent_default();
                self.apply(InstallMsg::PromptOffered(PromptHandle(prompt)));
            }
            InstallEvent::AppInstalled => {
                bw_info!("Application installed");
                self.apply(InstallMsg::Installed);
            }
        }
    }

    /// Feeds platform events into the mediator until the sender side closes.
    pub async fn listen(&self, mut events: mpsc::UnboundedReceiver<InstallEvent>) {
        while let Some(event) = events.recv().await {
            self.handle_event(event);
        }
    }

    /// Shows the retained prompt. Resolves `true` only if the user accepted.
    pub async fn install(&self) -> bool {
        let effects = self.apply(InstallMsg::InstallRequested);
        let Some(InstallEffect::ShowPrompt(handle)) = effects.into_iter().next() else {
            return false;
        };

        let choice = handle.0.prompt().await;
        bw_info!("Install prompt answered: {:?}", choice);
        let accepted = choice.is_accepted();
        self.apply(InstallMsg::ChoiceMade(choice));
        accepted
    }

    fn apply(&self, msg: InstallMsg<PromptHandle>) -> Vec<InstallEffect<PromptHandle>> {
        self.store.update(|state| {
            let (next, effects) = update_install(std::mem::take(state), msg);
            *state = next;
            effects
        })
    }
}
