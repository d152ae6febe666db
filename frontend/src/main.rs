use yew::prelude::*;
use yew_router::prelude::*;

mod components;
mod config;
mod context;
mod hooks;
mod services;

use components::{AdminDashboard, AdminLogin, InvoicePage, PackageDetails, PackageList};
use context::auth::use_auth;
use context::{AuthProvider, BookingProvider, ToastProvider};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/packages/:id")]
    PackageDetails { id: String },
    #[at("/admin/login")]
    AdminLogin,
    #[at("/admin/dashboard")]
    AdminDashboard,
    #[at("/invoice")]
    Invoice,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <PackageList /> },
        Route::PackageDetails { id } => html! { <PackageDetails package_id={id} /> },
        Route::AdminLogin => html! { <AdminLogin /> },
        Route::AdminDashboard => html! {
            <PrivateRoute>
                <AdminDashboard />
            </PrivateRoute>
        },
        Route::Invoice => html! { <InvoicePage /> },
        Route::NotFound => html! { <Redirect<Route> to={Route::Home} /> },
    }
}

#[derive(Properties, PartialEq)]
pub struct PrivateRouteProps {
    pub children: Html,
}

/// Gate on token presence only. An expired token is not detected here; it
/// surfaces as failing API calls on the screens behind the gate.
#[function_component(PrivateRoute)]
fn private_route(props: &PrivateRouteProps) -> Html {
    let auth = use_auth();
    if auth.is_authenticated() {
        props.children.clone()
    } else {
        html! { <Redirect<Route> to={Route::AdminLogin} /> }
    }
}

#[function_component(App)]
fn app() -> Html {
    html! {
        <BrowserRouter>
            <AuthProvider>
                <ToastProvider>
                    <BookingProvider>
                        <Switch<Route> render={switch} />
                    </BookingProvider>
                </ToastProvider>
            </AuthProvider>
        </BrowserRouter>
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("Tour booking storefront starting");
    yew::Renderer::<App>::new().render();
}

// Integration tests that require wasm-bindgen-test
#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::time::Duration;

    use gloo::storage::{LocalStorage, Storage};
    use wasm_bindgen_test::*;
    use yew::prelude::*;
    use yew_router::history::{AnyHistory, History, MemoryHistory};
    use yew_router::prelude::*;
    use yew_router::Router;

    use crate::context::auth::{stored_token, use_auth, AuthContext, TOKEN_STORAGE_KEY};
    use crate::context::{AuthProvider, BookingProvider, ToastProvider};
    use crate::{switch, Route};

    wasm_bindgen_test_configure!(run_in_browser);

    /// Reports the current session object outward on every render, so a
    /// test can drive `login`/`logout` the way the screens do.
    #[derive(Properties, PartialEq)]
    struct AuthReporterProps {
        on_auth: Callback<AuthContext>,
    }

    #[function_component(AuthReporter)]
    fn auth_reporter(props: &AuthReporterProps) -> Html {
        let auth = use_auth();
        props.on_auth.emit(auth);
        html! {}
    }

    #[derive(Properties, PartialEq)]
    struct HarnessProps {
        history: AnyHistory,
        on_auth: Callback<AuthContext>,
    }

    /// The real route table under a memory history, so tests can assert
    /// where a redirect landed.
    #[function_component(Harness)]
    fn harness(props: &HarnessProps) -> Html {
        html! {
            <Router history={props.history.clone()}>
                <AuthProvider>
                    <AuthReporter on_auth={props.on_auth.clone()} />
                    <ToastProvider>
                        <BookingProvider>
                            <Switch<Route> render={switch} />
                        </BookingProvider>
                    </ToastProvider>
                </AuthProvider>
            </Router>
        }
    }

    fn mount(history: AnyHistory, on_auth: Callback<AuthContext>) -> web_sys::Element {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .expect("test document");
        let root = document.create_element("div").expect("test root");
        yew::Renderer::<Harness>::with_root_and_props(
            root.clone(),
            HarnessProps { history, on_auth },
        )
        .render();
        root
    }

    async fn settle() {
        yew::platform::time::sleep(Duration::from_millis(50)).await;
    }

    #[wasm_bindgen_test]
    async fn dashboard_without_token_redirects_to_login() {
        LocalStorage::delete(TOKEN_STORAGE_KEY);

        let history: AnyHistory = MemoryHistory::new().into();
        history.push("/admin/dashboard");
        let _root = mount(history.clone(), Callback::noop());
        settle().await;

        assert_eq!(history.location().path(), "/admin/login");
    }

    #[wasm_bindgen_test]
    async fn dashboard_follows_the_login_logout_cycle() {
        LocalStorage::delete(TOKEN_STORAGE_KEY);

        let captured: Rc<RefCell<Option<AuthContext>>> = Rc::new(RefCell::new(None));
        let on_auth = {
            let captured = captured.clone();
            Callback::from(move |auth| *captured.borrow_mut() = Some(auth))
        };

        let history: AnyHistory = MemoryHistory::new().into();
        history.push("/admin/dashboard");
        let root = mount(history.clone(), on_auth);
        settle().await;
        assert_eq!(history.location().path(), "/admin/login");

        // Logging in makes the dashboard reachable.
        let login = captured
            .borrow()
            .as_ref()
            .expect("session context reported")
            .login
            .clone();
        login.emit("test-session-token".to_string());
        settle().await;
        history.push("/admin/dashboard");
        settle().await;
        assert_eq!(history.location().path(), "/admin/dashboard");
        assert!(root.inner_html().contains("Admin Dashboard"));

        // Logging out kicks the current screen back to the login form and
        // clears the persisted token.
        let logout = captured
            .borrow()
            .as_ref()
            .expect("session context reported")
            .logout
            .clone();
        logout.emit(());
        settle().await;
        assert_eq!(history.location().path(), "/admin/login");
        assert_eq!(stored_token(), None);
    }
}
