use yew::prelude::*;

use crate::components::PackageCard;
use crate::context::toast::use_toast;
use crate::hooks::{use_packages, FetchState};
use crate::services::api::ApiClient;

#[function_component(PackageList)]
pub fn package_list() -> Html {
    let toast = use_toast();
    let api_client = ApiClient::new();

    let on_error = {
        let toast = toast.clone();
        Callback::from(move |message: String| toast.error(message))
    };
    let packages = use_packages(&api_client, on_error);

    html! {
        <div class="container">
            <h1 class="page-title">{"Available Tour Packages"}</h1>
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
                FetchState::Loaded(packages) => html! {
                    <div class="package-grid">
                        {for packages.iter().map(|package| html! {
                            <PackageCard key={package.id.clone()} package={package.clone()} />
                        })}
                    </div>
                },
            }}
        </div>
    }
}
