use yew::prelude::*;
use yew_router::prelude::*;

use crate::config::CONFIG;
use crate::routes::Route;
use crate::services::{login, logout};
use crate::utils::{KeyValueStore, LocalStorage};

/// Result of a login attempt, as the login view consumes it
#[derive(Clone, PartialEq, Debug)]
pub struct LoginOutcome {
    pub is_valid: bool,
    pub error: Option<String>,
    /// Where to navigate next
    pub redirect: Option<Route>,
}

pub fn attempt_login(store: &impl KeyValueStore, input: &str, security_key: &str) -> LoginOutcome {
    match login(store, input, security_key) {
        Ok(()) => LoginOutcome {
            is_valid: true,
            error: None,
            redirect: Some(Route::Home),
        },
        Err(e) => LoginOutcome {
            is_valid: false,
            error: Some(e.to_string()),
            redirect: None,
        },
    }
}

pub struct UseAuthHandle {
    /// Message shown under the key input
    pub error: UseStateHandle<Option<String>>,
    /// Set right after a successful login, before navigation
    pub is_valid: UseStateHandle<bool>,
    pub login: Callback<String>,
    pub logout: Callback<()>,
    pub clear_error: Callback<()>,
}

/// Session flag handling for the login view and the navigation shell.
/// Must be used below the router.
#[hook]
pub fn use_auth() -> UseAuthHandle {
    let error = use_state(|| None::<String>);
    let is_valid = use_state(|| false);
    let navigator = use_navigator();

    let login_cb = {
        let error = error.clone();
        let is_valid = is_valid.clone();
        let navigator = navigator.clone();
        Callback::from(move |security_key: String| {
            let outcome = attempt_login(&LocalStorage, &security_key, &CONFIG.security_key);
            is_valid.set(outcome.is_valid);
            error.set(outcome.error);
            if let (Some(route), Some(nav)) = (outcome.redirect, &navigator) {
                nav.push(&route);
            }
        })
    };

    let logout_cb = {
        let is_valid = is_valid.clone();
        Callback::from(move |_| {
            if let Err(e) = logout(&LocalStorage) {
                log::error!("❌ Logout failed: {}", e);
            }
            is_valid.set(false);
            if let Some(nav) = &navigator {
                nav.push(&Route::Login);
            }
        })
    };

    let clear_error = {
        let error = error.clone();
        let is_valid = is_valid.clone();
        Callback::from(move |_| {
            error.set(None);
            is_valid.set(false);
        })
    };

    UseAuthHandle {
        error,
        is_valid,
        login: login_cb,
        logout: logout_cb,
        clear_error,
    }
}
