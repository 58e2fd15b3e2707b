use yew::prelude::*;

use crate::error::ApiError;
use crate::models::Package;
use crate::services::ApiClient;

/// List page data; starts loading
#[derive(Clone, PartialEq, Debug)]
pub struct PackagesState {
    pub packages: Vec<Package>,
    pub loading: bool,
    pub error: Option<String>,
}

impl Default for PackagesState {
    fn default() -> Self {
        Self {
            packages: Vec::new(),
            loading: true,
            error: None,
        }
    }
}

impl PackagesState {
    pub fn loaded(result: Result<Vec<Package>, ApiError>) -> Self {
        match result {
            Ok(packages) => Self {
                packages,
                loading: false,
                error: None,
            },
            Err(e) => Self {
                packages: Vec::new(),
                loading: false,
                error: Some(e.to_string()),
            },
        }
    }
}

pub struct UsePackagesHandle {
    pub state: UseStateHandle<PackagesState>,
    /// Full page reload
    pub retry: Callback<MouseEvent>,
}

/// Loads every package once on mount
#[hook]
pub fn use_packages() -> UsePackagesHandle {
    let state = use_state(PackagesState::default);

    {
        let state = state.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                let result = ApiClient::new().get_all_packages().await;
                if let Err(e) = &result {
                    log::error!("❌ Failed to fetch packages: {}", e);
                }
                state.set(PackagesState::loaded(result));
            });
            || ()
        });
    }

    let retry = Callback::from(|_: MouseEvent| {
        if let Some(win) = web_sys::window() {
            if let Err(e) = win.location().reload() {
                log::error!("❌ Reload failed: {:?}", e);
            }
        }
    });

    UsePackagesHandle { state, retry }
}
