use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use shared::LoginRequest;

use crate::context::auth::use_auth;
use crate::context::toast::use_toast;
use crate::services::api::ApiClient;
use crate::Route;

#[function_component(AdminLogin)]
pub fn admin_login() -> Html {
    let auth = use_auth();
    let toast = use_toast();
    let navigator = use_navigator().expect("router is mounted above every screen");

    let username = use_state(String::new);
    let password = use_state(String::new);
    let submitting = use_state(|| false);

    let on_username_change = {
        let username = username.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            username.set(input.value());
        })
    };

    let on_password_change = {
        let password = password.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            password.set(input.value());
        })
    };

    let on_submit = {
        let username = username.clone();
        let password = password.clone();
        let submitting = submitting.clone();
        let auth = auth.clone();
        let toast = toast.clone();
        let navigator = navigator.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let request = LoginRequest {
                username: (*username).clone(),
                password: (*password).clone(),
            };

            submitting.set(true);
            let submitting = submitting.clone();
            let auth = auth.clone();
            let toast = toast.clone();
            let navigator = navigator.clone();

            spawn_local(async move {
                let api_client = ApiClient::new();
                match api_client.admin_login(request).await {
                    Ok(response) => {
                        auth.login.emit(response.token);
                        toast.success("Login successful");
                        navigator.push(&Route::AdminDashboard);
                    }
                    Err(e) => {
                        log::warn!("Admin login failed: {}", e);
                        toast.error("Invalid credentials");
                    }
                }
                submitting.set(false);
            });
        })
    };

    html! {
        <div class="login-screen">
            <div class="login-card">
                <h2>{"Admin Login"}</h2>
                <form class="login-form" onsubmit={on_submit}>
                    <input
                        type="text"
                        placeholder="Username"
                        value={(*username).clone()}
                        onchange={on_username_change}
                        class="form-input"
                    />
                    <input
                        type="password"
                        placeholder="Password"
                        value={(*password).clone()}
                        onchange={on_password_change}
                        class="form-input"
                    />
                    <button type="submit" class="btn btn-primary" disabled={*submitting}>
                        {if *submitting { "Logging in..." } else { "Login" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
