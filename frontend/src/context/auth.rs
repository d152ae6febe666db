use gloo::storage::{LocalStorage, Storage};
use yew::prelude::*;

pub(crate) const TOKEN_STORAGE_KEY: &str = "adminToken";

/// Explicit session object passed to screens. Token presence is the only
/// thing gating the admin routes; `login`/`logout` are the only mutators.
#[derive(Clone, PartialEq)]
pub struct AuthContext {
    pub token: Option<String>,
    pub login: Callback<String>,
    pub logout: Callback<()>,
}

impl AuthContext {
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }
}

/// Read the session token persisted across page reloads, if any.
pub fn stored_token() -> Option<String> {
    LocalStorage::get::<String>(TOKEN_STORAGE_KEY).ok()
}

#[derive(Properties, PartialEq)]
pub struct AuthProviderProps {
    pub children: Html,
}

#[function_component(AuthProvider)]
pub fn auth_provider(props: &AuthProviderProps) -> Html {
    let token = use_state(stored_token);

    let login = {
        let token = token.clone();
        Callback::from(move |new_token: String| {
            if let Err(e) = LocalStorage::set(TOKEN_STORAGE_KEY, &new_token) {
                log::error!("Failed to persist session token: {}", e);
            }
            token.set(Some(new_token));
        })
    };

    let logout = {
        let token = token.clone();
        Callback::from(move |_| {
            LocalStorage::delete(TOKEN_STORAGE_KEY);
            token.set(None);
        })
    };

    let context = AuthContext {
        token: (*token).clone(),
        login,
        logout,
    };

    html! {
        <ContextProvider<AuthContext> context={context}>
            {props.children.clone()}
        </ContextProvider<AuthContext>>
    }
}

#[hook]
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("AuthProvider is mounted above every screen")
}
