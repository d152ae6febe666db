use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::InvoiceView;
use crate::context::booking::use_booking;
use crate::Route;

/// Invoice screen. Reachable only through a completed booking: with no
/// record in the hand-off slot it redirects straight back to the list.
#[function_component(InvoicePage)]
pub fn invoice_page() -> Html {
    let booking = use_booking();
    let navigator = use_navigator().expect("router is mounted above every screen");

    let Some(record) = (*booking).clone() else {
        return html! { <Redirect<Route> to={Route::Home} /> };
    };

    let on_return_home = Callback::from(move |_: MouseEvent| {
        navigator.push(&Route::Home);
    });

    html! {
        <div class="container">
            <InvoiceView booking={record} />
            <div class="invoice-actions">
                <button class="btn btn-primary" onclick={on_return_home}>
                    {"Return to Home"}
                </button>
            </div>
        </div>
    }
}

// Integration tests that require wasm-bindgen-test
#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use std::time::Duration;

    use wasm_bindgen_test::*;
    use yew::prelude::*;
    use yew_router::history::{AnyHistory, History, MemoryHistory};
    use yew_router::Router;

    use crate::context::BookingProvider;

    use super::InvoicePage;

    wasm_bindgen_test_configure!(run_in_browser);

    #[derive(Properties, PartialEq)]
    struct HarnessProps {
        history: AnyHistory,
    }

    #[function_component(Harness)]
    fn harness(props: &HarnessProps) -> Html {
        html! {
            <Router history={props.history.clone()}>
                <BookingProvider>
                    <InvoicePage />
                </BookingProvider>
            </Router>
        }
    }

    #[wasm_bindgen_test]
    async fn empty_booking_slot_redirects_to_package_list() {
        let history: AnyHistory = MemoryHistory::new().into();
        history.push("/invoice");

        let document = web_sys::window()
            .and_then(|w| w.document())
            .expect("test document");
        let root = document.create_element("div").expect("test root");
        yew::Renderer::<Harness>::with_root_and_props(
            root,
            HarnessProps {
                history: history.clone(),
            },
        )
        .render();
        yew::platform::time::sleep(Duration::from_millis(50)).await;

        assert_eq!(history.location().path(), "/");
    }
}
