//! Install-prompt state machine.
//!
//! `H` is the platform's deferred prompt handle. The core never calls it; it
//! only decides when the handle is retained, handed out or dropped.

/// User's answer to the native install prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserChoice {
    Accepted,
    Dismissed,
    /// Any other outcome string reported by the platform.
    Other(String),
}

impl UserChoice {
    pub fn from_outcome(outcome: &str) -> Self {
        match outcome {
            "accepted" => Self::Accepted,
            "dismissed" => Self::Dismissed,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct InstallState<H> {
    prompt: Option<H>,
    is_installable: bool,
    is_installed: bool,
}

impl<H> Default for InstallState<H> {
    fn default() -> Self {
        Self {
            prompt: None,
            is_installable: false,
            is_installed: false,
        }
    }
}

impl<H> InstallState<H> {
    pub fn new(is_installed: bool) -> Self {
        Self {
            is_installed,
            ..Self::default()
        }
    }

    pub fn prompt(&self) -> Option<&H> {
        self.prompt.as_ref()
    }

    pub fn is_installable(&self) -> bool {
        self.is_installable
    }

    pub fn is_installed(&self) -> bool {
        self.is_installed
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum InstallMsg<H> {
    /// The platform offered installation; its default handling is suppressed.
    PromptOffered(H),
    /// The platform reported a completed installation.
    Installed,
    /// The user pressed the install action.
    InstallRequested,
    /// The user answered the prompt shown for `InstallRequested`.
    ChoiceMade(UserChoice),
}

#[derive(Debug, Clone, PartialEq)]
pub enum InstallEffect<H> {
    ShowPrompt(H),
}

/// Pure install transition. `Installed` is terminal: later offers are ignored.
pub fn update_install<H: Clone>(
    mut state: InstallState<H>,
    msg: InstallMsg<H>,
) -> (InstallState<H>, Vec<InstallEffect<H>>) {
    let effects = match msg {
        InstallMsg::PromptOffered(handle) => {
            if !state.is_installed {
                state.prompt = Some(handle);
                state.is_installable = true;
            }
            Vec::new()
        }
        InstallMsg::Installed => {
            state.is_installed = true;
            state.is_installable = false;
            state.prompt = None;
            Vec::new()
        }
        InstallMsg::InstallRequested => state
            .prompt
            .clone()
            .map(InstallEffect::ShowPrompt)
            .into_iter()
            .collect(),
        InstallMsg::ChoiceMade(choice) => {
            if choice.is_accepted() {
                state.is_installable = false;
                state.prompt = None;
            }
            Vec::new()
        }
    };

    (state, effects)
}
