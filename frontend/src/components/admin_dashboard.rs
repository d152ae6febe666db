use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use shared::{format_money, Package};

use crate::components::PackageFormModal;
use crate::context::auth::use_auth;
use crate::context::toast::use_toast;
use crate::hooks::{use_packages, FetchState};
use crate::services::api::ApiClient;
use crate::Route;

#[function_component(AdminDashboard)]
pub fn admin_dashboard() -> Html {
    let auth = use_auth();
    let toast = use_toast();
    let navigator = use_navigator().expect("router is mounted above every screen");
    let api_client = ApiClient::new();

    let on_error = {
        let toast = toast.clone();
        Callback::from(move |message: String| toast.error(message))
    };
    let packages = use_packages(&api_client, on_error);

    // None while creating, Some(pkg) while editing.
    let selected_package = use_state(|| Option::<Package>::None);
    let modal_open = use_state(|| false);

    let open_create_modal = {
        let selected_package = selected_package.clone();
        let modal_open = modal_open.clone();
        Callback::from(move |_: MouseEvent| {
            selected_package.set(None);
            modal_open.set(true);
        })
    };

    let open_edit_modal = {
        let selected_package = selected_package.clone();
        let modal_open = modal_open.clone();
        Callback::from(move |package: Package| {
            selected_package.set(Some(package));
            modal_open.set(true);
        })
    };

    let close_modal = {
        let modal_open = modal_open.clone();
        Callback::from(move |_| modal_open.set(false))
    };

    let on_saved = {
        let modal_open = modal_open.clone();
        let refresh = packages.refresh.clone();
        Callback::from(move |_| {
            modal_open.set(false);
            refresh.emit(());
        })
    };

    let on_delete = {
        let api_client = api_client.clone();
        let toast = toast.clone();
        let refresh = packages.refresh.clone();
        Callback::from(move |package_id: String| {
            let confirmed = web_sys::window()
                .map(|w| {
                    w.confirm_with_message("Are you sure you want to delete this package?")
                        .unwrap_or(false)
                })
                .unwrap_or(false);
            if !confirmed {
                return;
            }

            let api_client = api_client.clone();
            let toast = toast.clone();
            let refresh = refresh.clone();

            spawn_local(async move {
                match api_client.delete_package(&package_id).await {
                    Ok(()) => {
                        toast.success("Package deleted successfully");
                        refresh.emit(());
                    }
                    Err(e) => {
                        log::error!("Failed to delete package {}: {}", package_id, e);
                        toast.error(e);
                    }
                }
            });
        })
    };

    let on_logout = {
        let auth = auth.clone();
        Callback::from(move |_: MouseEvent| {
            auth.logout.emit(());
            navigator.push(&Route::AdminLogin);
        })
    };

    html! {
        <div class="container">
            <div class="dashboard-header">
                <h1>{"Admin Dashboard"}</h1>
                <div>
                    <button class="btn btn-success" onclick={open_create_modal}>
                        {"Create New Package"}
                    </button>
                    <button class="btn btn-danger" onclick={on_logout}>
                        {"Logout"}
                    </button>
                </div>
            </div>

            {match &packages.state {
                FetchState::Pending => html! {
                    <div class="loading">{"Loading..."}</div>
                },
                FetchState::Failed(message) => html! {
                    <div class="error-state">
                        <p>{"Unable to load packages."}</p>
                        <p class="error-detail">{message}</p>
                    </div>
                },
                FetchState::Loaded(list) => html! {
                    <div class="package-grid">
                        {for list.iter().map(|package| {
                            let on_edit = {
                                let open_edit_modal = open_edit_modal.clone();
                                let package = package.clone();
                                Callback::from(move |_: MouseEvent| {
                                    open_edit_modal.emit(package.clone())
                                })
                            };
                            let on_delete_click = {
                                let on_delete = on_delete.clone();
                                let package_id = package.id.clone();
                                Callback::from(move |_: MouseEvent| {
                                    on_delete.emit(package_id.clone())
                                })
                            };

                            html! {
                                <div key={package.id.clone()} class="package-card">
                                    <img src={package.image_url.clone()} alt={package.title.clone()} />
                                    <div class="package-card-body">
                                        <h2>{&package.title}</h2>
                                        <p class="package-description">{&package.description}</p>
                                        <div class="package-card-footer">
                                            <span class="package-price">
                                                {format_money(package.price)}
                                            </span>
                                            <div>
                                                <button class="btn btn-primary" onclick={on_edit}>
                                                    {"Edit"}
                                                </button>
                                                <button class="btn btn-danger" onclick={on_delete_click}>
                                                    {"Delete"}
                                                </button>
                                            </div>
                                        </div>
                                    </div>
                                </div>
                            }
                        })}
                    </div>
                },
            }}

            <PackageFormModal
                is_open={*modal_open}
                package={(*selected_package).clone()}
                api_client={api_client.clone()}
                on_saved={on_saved}
                on_close={close_modal}
            />
        </div>
    }
}
