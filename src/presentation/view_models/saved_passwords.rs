//! Saved passwords screen.

use tracing::{debug, info};

use crate::application::use_cases::{VaultError, VaultUseCase};
use crate::domain::entities::SavedPassword;
use crate::presentation::lifecycle::{LifecycleHandle, ScreenLifecycle};
use crate::presentation::state::{Phase, Reducer, Store};

/// Vault screen state. `entries` is a transient copy of the server list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SavedPasswordsState {
    /// Request progress.
    pub phase: Phase,
    /// Cached vault entries.
    pub entries: Vec<SavedPassword>,
    /// Last failure text.
    pub error: Option<String>,
    /// The last request found no session token.
    pub not_logged_in: bool,
    loaded: bool,
}

impl SavedPasswordsState {
    /// Returns whether the list has been fetched at least once.
    #[must_use]
    pub const fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Finds a cached entry by server id.
    #[must_use]
    pub fn entry(&self, id: &str) -> Option<&SavedPassword> {
        self.entries.iter().find(|entry| entry.has_id(id))
    }
}

/// Events of the vault screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SavedPasswordsEvent {
    /// A vault request was sent.
    Started,
    /// The list was fetched.
    Loaded(Vec<SavedPassword>),
    /// The entry with this id was removed remotely.
    Deleted(String),
    /// No session token was stored.
    NotLoggedIn,
    /// Request failed with this message.
    Failed(String),
}

impl Reducer for SavedPasswordsState {
    type Event = SavedPasswordsEvent;

    fn reduce(&self, event: SavedPasswordsEvent) -> Self {
        let mut next = self.clone();
        match event {
            SavedPasswordsEvent::Started => {
                next.phase = Phase::Loading;
                next.error = None;
            }
            SavedPasswordsEvent::Loaded(entries) => {
                next.phase = Phase::Success;
                next.entries = entries;
                next.not_logged_in = false;
                next.loaded = true;
            }
            SavedPasswordsEvent::Deleted(id) => {
                next.phase = Phase::Success;
                next.entries.retain(|entry| !entry.has_id(&id));
            }
            SavedPasswordsEvent::NotLoggedIn => {
                next.phase = Phase::Error;
                next.error = Some(VaultError::NotLoggedIn.to_string());
                next.not_logged_in = true;
            }
            SavedPasswordsEvent::Failed(error) => {
                next.phase = Phase::Error;
                next.error = Some(error);
            }
        }
        next
    }
}

/// Lists and deletes vault entries of the signed in user.
pub struct SavedPasswordsViewModel {
    store: Store<SavedPasswordsState>,
    vault: VaultUseCase,
    lifecycle: ScreenLifecycle,
}

impl SavedPasswordsViewModel {
    /// Creates the view-model in its initial state.
    #[must_use]
    pub fn new(vault: VaultUseCase) -> Self {
        Self {
            store: Store::default(),
            vault,
            lifecycle: ScreenLifecycle::new(),
        }
    }

    /// Returns the current state.
    #[must_use]
    pub fn state(&self) -> SavedPasswordsState {
        self.store.snapshot()
    }

    /// Subscribes to state changes.
    #[must_use]
    pub fn subscribe(&self) -> tokio::sync::watch::Receiver<SavedPasswordsState> {
        self.store.subscribe()
    }

    /// Returns a handle that closes this screen.
    #[must_use]
    pub fn lifecycle(&self) -> LifecycleHandle {
        self.lifecycle.handle()
    }

    /// Loads the list the first time the screen is shown.
    pub async fn enter(&self) {
        if self.store.snapshot().is_loaded() {
            debug!("Saved passwords already cached");
            return;
        }
        self.refresh().await;
    }

    /// Refetches the list from the server.
    pub async fn refresh(&self) {
        if self.store.snapshot().phase.is_loading() {
            return;
        }

        self.store.dispatch(SavedPasswordsEvent::Started);
        let Some(result) = self.lifecycle.guard(self.vault.list()).await else {
            return;
        };

        let event = match result {
            Ok(entries) => SavedPasswordsEvent::Loaded(entries),
            Err(VaultError::NotLoggedIn) => SavedPasswordsEvent::NotLoggedIn,
            Err(e) => SavedPasswordsEvent::Failed(format!("Failed to load passwords: {e}")),
        };
        self.store.dispatch(event);
    }

    /// Deletes an entry on the server, then drops it from the cached list.
    pub async fn delete(&self, id: &str) {
        if self.store.snapshot().phase.is_loading() {
            return;
        }

        self.store.dispatch(SavedPasswordsEvent::Started);
        let Some(result) = self.lifecycle.guard(self.vault.delete(id)).await else {
            return;
        };

        let event = match result {
            Ok(response) => {
                info!(%id, server_message = %response.message, "Saved password deleted");
                SavedPasswordsEvent::Deleted(id.to_string())
            }
            Err(VaultError::NotLoggedIn) => SavedPasswordsEvent::NotLoggedIn,
            Err(e) => SavedPasswordsEvent::Failed(format!("Failed to delete password: {e}")),
        };
        self.store.dispatch(event);
    }
}
