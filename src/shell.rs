//! Shell Controller
//!
//! Drives the configuration flow and the single application window. Each
//! flow is one cooperative async task: it reads or writes the store, may
//! suspend on the prompt, then applies the result to the window.

use log::{debug, warn};
use parking_lot::Mutex;
use tauri::{AppHandle, Manager};

use crate::config::{ConfigState, ConfigStore};
use crate::error::ShellResult;
use crate::navigation::NavigationPolicy;
use crate::prompt::{self, PromptKind, PromptOutcome};
use crate::target;
use crate::window;

/// Where the shell currently stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellPhase {
    /// No usable configuration; the placeholder page is showing
    NoUrl,
    /// Waiting on the user in the prompt dialog
    Prompting,
    /// A configured URL is loaded
    Ready,
}

impl std::fmt::Display for ShellPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoUrl => write!(f, "no-url"),
            Self::Prompting => write!(f, "prompting"),
            Self::Ready => write!(f, "ready"),
        }
    }
}

/// Application state owned by the controller and shared with the menu
/// handler through Tauri's managed state. Replaces any notion of a global
/// window variable: the window is always looked up by label.
pub struct ShellContext {
    store: ConfigStore,
    policy: NavigationPolicy,
    phase: Mutex<ShellPhase>,
}

impl ShellContext {
    pub fn new(store: ConfigStore) -> Self {
        Self {
            store,
            policy: NavigationPolicy::new(),
            phase: Mutex::new(ShellPhase::NoUrl),
        }
    }

    /// Current phase
    pub fn phase(&self) -> ShellPhase {
        *self.phase.lock()
    }

    fn enter(&self, next: ShellPhase) {
        let mut phase = self.phase.lock();
        debug!("shell phase: {} -> {}", *phase, next);
        *phase = next;
    }

    /// Phase the shell settles into when a prompt is dismissed: whatever the
    /// configured target already implies.
    fn settled_phase(&self) -> ShellPhase {
        if self.policy.allowed().is_some() {
            ShellPhase::Ready
        } else {
            ShellPhase::NoUrl
        }
    }

    /// Startup flow: read the store, prompt on true first run, then create
    /// the main window either at the configured URL or at the placeholder.
    pub async fn startup(&self, app: &AppHandle) -> ShellResult<()> {
        match self.store.read().await {
            ConfigState::Present(url) => {
                self.policy.allow(url.clone());
                self.enter(ShellPhase::Ready);
                window::create_main(app, &self.policy, Some(url))?;
            }
            ConfigState::Absent => {
                self.enter(ShellPhase::Prompting);
                let outcome = prompt::show(app, PromptKind::FirstRun).await?;
                match composed(outcome) {
                    Some(url) => {
                        self.store.write(&url).await?;
                        self.policy.allow(url.clone());
                        self.enter(ShellPhase::Ready);
                        window::create_main(app, &self.policy, Some(url))?;
                    }
                    None => {
                        self.enter(ShellPhase::NoUrl);
                        window::create_main(app, &self.policy, None)?;
                    }
                }
            }
        }
        Ok(())
    }

    /// "Cambiar URL" flow: re-prompt, persist a valid submission, and load
    /// the new URL into the existing window in place.
    pub async fn change_url(&self, app: &AppHandle) -> ShellResult<()> {
        if self.phase() == ShellPhase::Prompting {
            debug!("change-url requested while already prompting");
            return Ok(());
        }

        self.enter(ShellPhase::Prompting);
        let outcome = prompt::show(app, PromptKind::ChangeUrl).await?;
        match composed(outcome) {
            Some(url) => {
                self.store.write(&url).await?;
                self.policy.allow(url.clone());
                self.enter(ShellPhase::Ready);
                match app.get_webview_window(window::MAIN_LABEL) {
                    Some(main) => main.navigate(url)?,
                    None => {
                        window::create_main(app, &self.policy, Some(url))?;
                    }
                }
            }
            None => {
                self.enter(self.settled_phase());
            }
        }
        Ok(())
    }

    /// Reactivation with zero open windows (macOS dock model): re-derive the
    /// window from the store without ever prompting.
    pub async fn reactivate(&self, app: &AppHandle) -> ShellResult<()> {
        if let Some(main) = app.get_webview_window(window::MAIN_LABEL) {
            main.set_focus()?;
            return Ok(());
        }

        match self.store.read().await {
            ConfigState::Present(url) => {
                self.policy.allow(url.clone());
                self.enter(ShellPhase::Ready);
                window::create_main(app, &self.policy, Some(url))?;
            }
            ConfigState::Absent => {
                self.enter(ShellPhase::NoUrl);
                window::create_main(app, &self.policy, None)?;
            }
        }
        Ok(())
    }
}

/// Reduce a prompt outcome to the composed target URL, if any. Cancellation
/// and empty or invalid input are deliberately indistinguishable here.
fn composed(outcome: PromptOutcome) -> Option<url::Url> {
    match outcome {
        PromptOutcome::Submitted(suffix) => {
            let url = target::compose(&suffix);
            if url.is_none() {
                warn!("prompt submission {:?} did not compose a URL", suffix);
            }
            url
        }
        PromptOutcome::Cancelled => None,
    }
}
