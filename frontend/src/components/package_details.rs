use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;
use yew_router::prelude::*;

use shared::{
    format_money, validate_booking, BookingField, BookingFormInput, BookingRecord, BookingValidation,
    CreateBookingRequest, Package,
};

use crate::context::booking::use_booking;
use crate::context::toast::use_toast;
use crate::hooks::FetchState;
use crate::services::api::ApiClient;
use crate::services::date_utils;
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct PackageDetailsProps {
    pub package_id: String,
}

#[function_component(PackageDetails)]
pub fn package_details(props: &PackageDetailsProps) -> Html {
    let toast = use_toast();
    let booking_slot = use_booking();
    let navigator = use_navigator().expect("router is mounted above every screen");

    let package = use_state(|| FetchState::<Package>::Pending);
    let form = use_state(BookingFormInput::default);
    let errors = use_state(BookingValidation::default);
    let submitting = use_state(|| false);

    // Fetch the package whenever the route id changes.
    use_effect_with(props.package_id.clone(), {
        let package = package.clone();
        let toast = toast.clone();

        move |id: &String| {
            let id = id.clone();
            let package = package.clone();
            let toast = toast.clone();

            spawn_local(async move {
                let api_client = ApiClient::new();
                match api_client.get_package(&id).await {
                    Ok(found) => package.set(FetchState::Loaded(found)),
                    Err(e) => {
                        log::error!("Failed to fetch package {}: {}", id, e);
                        toast.error("Failed to fetch package details");
                        package.set(FetchState::Failed(e));
                    }
                }
            });

            || ()
        }
    });

    // Field handlers update the form and drop that field's stale error,
    // mirroring how the full error set is rebuilt on submit.
    let on_name_change = field_handler(&form, &errors, BookingField::CustomerName, |form, value| {
        form.customer_name = value;
    });
    let on_email_change = field_handler(&form, &errors, BookingField::Email, |form, value| {
        form.email = value;
    });
    let on_phone_change = field_handler(&form, &errors, BookingField::PhoneNumber, |form, value| {
        form.phone_number = value;
    });
    let on_travelers_change = {
        let form = form.clone();
        let errors = errors.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut updated = (*form).clone();
            updated.number_of_travelers = input.value().parse::<i32>().unwrap_or(0);
            form.set(updated);

            let mut current = (*errors).clone();
            current.clear_field(BookingField::NumberOfTravelers);
            errors.set(current);
        })
    };
    let on_requests_change = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            let mut updated = (*form).clone();
            updated.special_requests = input.value();
            form.set(updated);
        })
    };

    let on_submit = {
        let package = package.clone();
        let form = form.clone();
        let errors = errors.clone();
        let submitting = submitting.clone();
        let toast = toast.clone();
        let booking_slot = booking_slot.clone();
        let navigator = navigator.clone();
        let package_id = props.package_id.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let FetchState::Loaded(pkg) = (*package).clone() else {
                return;
            };

            // Validation failures block submission entirely; nothing
            // reaches the network until the form passes.
            let validation = validate_booking(&form);
            errors.set(validation.clone());
            if !validation.is_valid {
                toast.error(validation.summary());
                return;
            }

            let input = (*form).clone();
            let request = CreateBookingRequest {
                package_id: package_id.clone(),
                customer_name: input.customer_name.clone(),
                email: input.email.clone(),
                phone_number: input.phone_number.clone(),
                number_of_travelers: input.number_of_travelers,
                special_requests: input.special_requests.clone(),
            };

            submitting.set(true);
            let submitting = submitting.clone();
            let toast = toast.clone();
            let booking_slot = booking_slot.clone();
            let navigator = navigator.clone();

            spawn_local(async move {
                let api_client = ApiClient::new();
                match api_client.create_booking(request).await {
                    Ok(response) => {
                        toast.success("Booking successful!");
                        let record = BookingRecord {
                            id: response.booking_id(),
                            customer_name: input.customer_name,
                            customer_email: input.email,
                            travelers: input.number_of_travelers,
                            travel_date: date_utils::get_current_date_display(),
                            total_price: pkg.price * input.number_of_travelers as f64,
                            package: pkg,
                        };
                        booking_slot.set(Some(record));
                        navigator.push(&Route::Invoice);
                    }
                    Err(message) => {
                        log::error!("Booking failed: {}", message);
                        toast.error(message);
                    }
                }
                submitting.set(false);
            });
        })
    };

    match &*package {
        FetchState::Pending => html! { <div class="loading">{"Loading..."}</div> },
        FetchState::Failed(message) => html! {
            <div class="container">
                <div class="error-state">
                    <p>{"Package not found."}</p>
                    <p class="error-detail">{message}</p>
                    <Link<Route> classes="btn btn-primary" to={Route::Home}>
                        {"Back to packages"}
                    </Link<Route>>
                </div>
            </div>
        },
        FetchState::Loaded(pkg) => html! {
            <div class="container">
                <div class="detail-grid">
                    <div>
                        <img src={pkg.image_url.clone()} alt={pkg.title.clone()} />
                        <h1>{&pkg.title}</h1>
                        <p class="package-description">{&pkg.description}</p>
                        <span class="package-price">
                            {format!("{} per person", format_money(pkg.price))}
                        </span>
                    </div>

                    <div>
                        <h2>{"Book this Package"}</h2>
                        <form class="booking-form" onsubmit={on_submit}>
                            <div class="form-group">
                                <input
                                    type="text"
                                    placeholder="Full Name"
                                    value={form.customer_name.clone()}
                                    onchange={on_name_change}
                                    class={field_class(&errors, BookingField::CustomerName)}
                                />
                                {field_error(&errors, BookingField::CustomerName)}
                            </div>

                            <div class="form-group">
                                <input
                                    type="email"
                                    placeholder="Email"
                                    value={form.email.clone()}
                                    onchange={on_email_change}
                                    class={field_class(&errors, BookingField::Email)}
                                />
                                {field_error(&errors, BookingField::Email)}
                            </div>

                            <div class="form-group">
                                <input
                                    type="tel"
                                    placeholder="Phone Number (10 digits)"
                                    value={form.phone_number.clone()}
                                    onchange={on_phone_change}
                                    class={field_class(&errors, BookingField::PhoneNumber)}
                                />
                                {field_error(&errors, BookingField::PhoneNumber)}
                            </div>

                            <div class="form-group">
                                <input
                                    type="number"
                                    min="1"
                                    value={form.number_of_travelers.to_string()}
                                    onchange={on_travelers_change}
                                    class={field_class(&errors, BookingField::NumberOfTravelers)}
                                />
                                {field_error(&errors, BookingField::NumberOfTravelers)}
                            </div>

                            <textarea
                                placeholder="Special Requests (Optional)"
                                value={form.special_requests.clone()}
                                onchange={on_requests_change}
                            />

                            <button type="submit" class="btn btn-primary" disabled={*submitting}>
                                {if *submitting { "Booking..." } else { "Book Now" }}
                            </button>
                        </form>
                    </div>
                </div>
            </div>
        },
    }
}

/// Build an onchange handler that writes one text field and clears its
/// inline error.
fn field_handler(
    form: &UseStateHandle<BookingFormInput>,
    errors: &UseStateHandle<BookingValidation>,
    field: BookingField,
    apply: fn(&mut BookingFormInput, String),
) -> Callback<Event> {
    let form = form.clone();
    let errors = errors.clone();
    Callback::from(move |e: Event| {
        let input: HtmlInputElement = e.target_unchecked_into();
        let mut updated = (*form).clone();
        apply(&mut updated, input.value());
        form.set(updated);

        let mut current = (*errors).clone();
        current.clear_field(field);
        errors.set(current);
    })
}

fn field_class(errors: &BookingValidation, field: BookingField) -> &'static str {
    if errors.field_message(field).is_some() {
        "form-input form-input-error"
    } else {
        "form-input"
    }
}

fn field_error(errors: &BookingValidation, field: BookingField) -> Html {
    match errors.field_message(field) {
        Some(message) => html! { <p class="field-error">{message}</p> },
        None => html! {},
    }
}
