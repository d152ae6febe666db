use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use shared::{format_date_list, parse_date_list, Package, PackageUpsertRequest};

use crate::context::toast::use_toast;
use crate::services::api::ApiClient;

#[derive(Properties, PartialEq)]
pub struct PackageFormModalProps {
    pub is_open: bool,
    /// `None` creates a package, `Some` edits the given one.
    pub package: Option<Package>,
    pub api_client: ApiClient,
    pub on_saved: Callback<()>,
    pub on_close: Callback<()>,
}

#[function_component(PackageFormModal)]
pub fn package_form_modal(props: &PackageFormModalProps) -> Html {
    let toast = use_toast();

    let title = use_state(String::new);
    let description = use_state(String::new);
    let price = use_state(String::new);
    let image_url = use_state(String::new);
    // Raw text as typed; parsed into dates only on save.
    let date_input = use_state(String::new);
    let max_travelers = use_state(String::new);
    let is_saving = use_state(|| false);

    // Reset or prefill the form every time the modal opens.
    use_effect_with((props.is_open, props.package.clone()), {
        let title = title.clone();
        let description = description.clone();
        let price = price.clone();
        let image_url = image_url.clone();
        let date_input = date_input.clone();
        let max_travelers = max_travelers.clone();

        move |(is_open, package): &(bool, Option<Package>)| {
            if *is_open {
                match package {
                    Some(pkg) => {
                        title.set(pkg.title.clone());
                        description.set(pkg.description.clone());
                        price.set(pkg.price.to_string());
                        image_url.set(pkg.image_url.clone());
                        date_input.set(format_date_list(&pkg.available_dates));
                        max_travelers.set(pkg.max_travelers.to_string());
                    }
                    None => {
                        title.set(String::new());
                        description.set(String::new());
                        price.set(String::new());
                        image_url.set(String::new());
                        date_input.set(String::new());
                        max_travelers.set("50".to_string());
                    }
                }
            }
            || ()
        }
    });

    let on_title_change = text_handler(&title);
    let on_price_change = text_handler(&price);
    let on_image_url_change = text_handler(&image_url);
    let on_date_change = text_handler(&date_input);
    let on_max_travelers_change = text_handler(&max_travelers);

    let on_description_change = {
        let description = description.clone();
        Callback::from(move |e: Event| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            description.set(input.value());
        })
    };

    let on_submit = {
        let title = title.clone();
        let description = description.clone();
        let price = price.clone();
        let image_url = image_url.clone();
        let date_input = date_input.clone();
        let max_travelers = max_travelers.clone();
        let is_saving = is_saving.clone();
        let api_client = props.api_client.clone();
        let package = props.package.clone();
        let toast = toast.clone();
        let on_saved = props.on_saved.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let request = PackageUpsertRequest {
                title: (*title).clone(),
                description: (*description).clone(),
                price: price.parse::<f64>().unwrap_or(0.0),
                image_url: (*image_url).clone(),
                // Unparsable tokens are dropped silently.
                available_dates: parse_date_list(&date_input),
                max_travelers: max_travelers.parse::<u32>().unwrap_or(0),
            };

            is_saving.set(true);
            let api_client = api_client.clone();
            let package = package.clone();
            let is_saving = is_saving.clone();
            let toast = toast.clone();
            let on_saved = on_saved.clone();

            spawn_local(async move {
                let result = match &package {
                    Some(existing) => api_client.update_package(&existing.id, &request).await,
                    None => api_client.create_package(&request).await,
                };

                match result {
                    Ok(()) => {
                        if package.is_some() {
                            toast.success("Package updated successfully");
                        } else {
                            toast.success("Package created successfully");
                        }
                        on_saved.emit(());
                    }
                    Err(e) => {
                        log::error!("Failed to save package: {}", e);
                        toast.error(e);
                    }
                }
                is_saving.set(false);
            });
        })
    };

    let on_cancel = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    if !props.is_open {
        return html! {};
    }

    html! {
        <div class="modal-overlay">
            <div class="modal">
                <h2>
                    {if props.package.is_some() { "Edit Package" } else { "Create Package" }}
                </h2>
                <form class="package-form" onsubmit={on_submit}>
                    <input
                        type="text"
                        placeholder="Package Title"
                        value={(*title).clone()}
                        onchange={on_title_change}
                        required={true}
                        class="form-input"
                    />
                    <textarea
                        placeholder="Package Description"
                        value={(*description).clone()}
                        onchange={on_description_change}
                        required={true}
                    />
                    <input
                        type="number"
                        step="0.01"
                        placeholder="Price"
                        value={(*price).clone()}
                        onchange={on_price_change}
                        required={true}
                        class="form-input"
                    />
                    <input
                        type="text"
                        placeholder="Image URL"
                        value={(*image_url).clone()}
                        onchange={on_image_url_change}
                        required={true}
                        class="form-input"
                    />
                    <input
                        type="text"
                        placeholder="Available Dates (space or comma-separated, e.g. 2024-07-15 2024-08-20)"
                        value={(*date_input).clone()}
                        onchange={on_date_change}
                        class="form-input"
                    />
                    <input
                        type="number"
                        placeholder="Max Travelers"
                        value={(*max_travelers).clone()}
                        onchange={on_max_travelers_change}
                        class="form-input"
                    />
                    <div class="modal-actions">
                        <button type="submit" class="btn btn-primary" disabled={*is_saving}>
                            {if props.package.is_some() { "Update" } else { "Create" }}
                        </button>
                        <button type="button" class="btn btn-secondary" onclick={on_cancel}>
                            {"Cancel"}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}

fn text_handler(state: &UseStateHandle<String>) -> Callback<Event> {
    let state = state.clone();
    Callback::from(move |e: Event| {
        let input: HtmlInputElement = e.target_unchecked_into();
        state.set(input.value());
    })
}
