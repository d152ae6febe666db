use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use shared::Package;

use crate::services::api::ApiClient;

/// Explicit outcome of a screen's data dependency. Screens render all three
/// arms instead of juggling ad hoc loading flags.
#[derive(Clone, PartialEq)]
pub enum FetchState<T> {
    Pending,
    Loaded(T),
    Failed(String),
}

pub struct UsePackagesResult {
    pub state: FetchState<Vec<Package>>,
    pub refresh: Callback<()>,
}

/// Fetch the package catalog on mount and expose a refresh action. A
/// refresh keeps the last loaded list on screen until the new one arrives.
#[hook]
pub fn use_packages(api_client: &ApiClient, on_error: Callback<String>) -> UsePackagesResult {
    let state = use_state(|| FetchState::<Vec<Package>>::Pending);

    let refresh = {
        let api_client = api_client.clone();
        let state = state.clone();

        use_callback((), move |_, _| {
            let api_client = api_client.clone();
            let state = state.clone();
            let on_error = on_error.clone();

            spawn_local(async move {
                match api_client.list_packages().await {
                    Ok(packages) => state.set(FetchState::Loaded(packages)),
                    Err(e) => {
                        log::error!("Failed to fetch packages: {}", e);
                        on_error.emit(e.clone());
                        state.set(FetchState::Failed(e));
                    }
                }
            });
        })
    };

    // Initial load on mount.
    use_effect_with((), {
        let refresh = refresh.clone();
        move |_| {
            refresh.emit(());
            || ()
        }
    });

    UsePackagesResult {
        state: (*state).clone(),
        refresh,
    }
}
