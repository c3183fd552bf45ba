//! Screen routing and the login gate in front of protected screens.

use tracing::debug;

use crate::presentation::state::{Reducer, Store};

/// A screen of the application.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Route {
    /// Credential entry.
    Login,
    /// Account creation.
    Register,
    /// Password generator, the home screen.
    #[default]
    GeneratePassword,
    /// Strength checker.
    CheckPasswordStrength,
    /// Vault listing; needs a session.
    SavedPasswords,
    /// Identity and logout.
    Settings,
}

impl Route {
    /// Returns the first screen for a session with or without a token.
    #[must_use]
    pub const fn start(has_token: bool) -> Self {
        if has_token {
            Self::GeneratePassword
        } else {
            Self::Login
        }
    }

    /// Returns whether the screen needs a session token.
    #[must_use]
    pub const fn requires_session(self) -> bool {
        matches!(self, Self::SavedPasswords)
    }
}

/// Current route and whether the user must be prompted to log in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavigationState {
    /// Screen being shown.
    pub route: Route,
    /// A screen needs the user to log in first.
    pub login_requested: bool,
}

/// Transitions of [`NavigationState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationEvent {
    /// A screen was entered.
    Navigated(Route),
    /// Login must be offered to the user.
    LoginRequested,
    /// The user was sent to the login screen.
    LoginPromptShown,
}

impl Reducer for NavigationState {
    type Event = NavigationEvent;

    fn reduce(&self, event: NavigationEvent) -> Self {
        match event {
            NavigationEvent::Navigated(route) => Self {
                route,
                login_requested: self.login_requested,
            },
            NavigationEvent::LoginRequested => Self {
                route: self.route,
                login_requested: true,
            },
            NavigationEvent::LoginPromptShown => Self {
                route: Route::Login,
                login_requested: false,
            },
        }
    }
}

/// Decides which screen is shown.
pub struct Navigator {
    store: Store<NavigationState>,
}

impl Navigator {
    /// Creates navigator at the start route.
    /// Creates the view-model in its initial state.
    #[must_use]
    pub fn new(has_token: bool) -> Self {
        Self {
            store: Store::new(NavigationState {
                route: Route::start(has_token),
                login_requested: false,
            }),
        }
    }

    /// Returns the current navigation state.
    /// Returns the current state.
    #[must_use]
    pub fn state(&self) -> NavigationState {
        self.store.snapshot()
    }

    /// Subscribes to navigation changes.
    /// Subscribes to state changes.
    #[must_use]
    pub fn subscribe(&self) -> tokio::sync::watch::Receiver<NavigationState> {
        self.store.subscribe()
    }

    /// Moves to `route`, or raises the login request when the route needs a
    /// session that does not exist.
    ///
    /// Returns whether the route was entered.
    pub fn navigate(&self, route: Route, has_token: bool) -> bool {
        if route.requires_session() && !has_token {
            debug!(?route, "Protected route needs login");
            self.store.dispatch(NavigationEvent::LoginRequested);
            return false;
        }
        self.store.dispatch(NavigationEvent::Navigated(route));
        true
    }

    /// Raises the login request from inside a screen.
    pub fn request_login(&self) {
        self.store.dispatch(NavigationEvent::LoginRequested);
    }

    /// Resets the login request after the user was sent to login.
    pub fn login_prompt_shown(&self) {
        self.store.dispatch(NavigationEvent::LoginPromptShown);
    }
}
