use yew::prelude::*;

use shared::invoice::{generate_invoice_pdf, invoice_filename, invoice_number, recomputed_total};
use shared::{format_money, BookingRecord};

use crate::context::toast::use_toast;
use crate::services::{date_utils, download};

#[derive(Properties, PartialEq)]
pub struct InvoiceViewProps {
    pub booking: BookingRecord,
}

/// On-screen rendering of a completed booking, with the PDF export button.
/// Totals are recomputed from the package price; the record's stored total
/// is deliberately ignored.
#[function_component(InvoiceView)]
pub fn invoice_view(props: &InvoiceViewProps) -> Html {
    let toast = use_toast();
    let booking = &props.booking;

    let number = invoice_number(booking.id.as_deref());
    let total = recomputed_total(booking);
    // Computed once so the PDF carries the same date the screen shows,
    // even when the download happens after midnight.
    let issued_on = date_utils::get_current_date_display();

    let on_download = {
        let booking = booking.clone();
        let toast = toast.clone();
        let issued_on = issued_on.clone();
        Callback::from(move |_: MouseEvent| {
            match generate_invoice_pdf(&booking, &issued_on) {
                Ok(bytes) => {
                    let filename = invoice_filename(booking.id.as_deref());
                    if let Err(e) = download::save_bytes(&bytes, &filename, "application/pdf") {
                        log::error!("Invoice download failed: {}", e);
                        toast.error(e);
                    }
                }
                Err(e) => {
                    log::error!("Invoice generation failed: {}", e);
                    toast.error(format!("Failed to generate invoice: {}", e));
                }
            }
        })
    };

    html! {
        <div class="invoice">
            <div class="invoice-header">
                <h1>{shared::invoice::ISSUER_NAME}</h1>
                <div class="invoice-meta">
                    <p>{format!("Invoice Number: {}", number)}</p>
                    <p>{issued_on}</p>
                </div>
            </div>

            <div class="invoice-parties">
                <div>
                    <h2>{"Customer Details"}</h2>
                    <p>{&booking.customer_name}</p>
                    <p>{&booking.customer_email}</p>
                </div>
                <div class="invoice-booking-details">
                    <h2>{"Booking Details"}</h2>
                    <p>{&booking.package.title}</p>
                    <p>{format!("Travelers: {}", booking.travelers)}</p>
                    <p>{format!("Travel Date: {}", booking.travel_date)}</p>
                </div>
            </div>

            <table class="invoice-table">
                <thead>
                    <tr>
                        <th>{"Description"}</th>
                        <th>{"Price"}</th>
                        <th>{"Quantity"}</th>
                        <th>{"Total"}</th>
                    </tr>
                </thead>
                <tbody>
                    <tr>
                        <td>{&booking.package.title}</td>
                        <td class="amount">{format_money(booking.package.price)}</td>
                        <td class="amount">{booking.travelers}</td>
                        <td class="amount">{format_money(total)}</td>
                    </tr>
                </tbody>
            </table>

            <div class="invoice-footer">
                <button class="btn btn-primary" onclick={on_download}>
                    {"Download PDF Invoice"}
                </button>
                <p class="invoice-total">{format!("Total: {}", format_money(total))}</p>
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

    use shared::{BookingRecord, Package};

    use crate::context::ToastProvider;
    use crate::services::date_utils;

    use super::InvoiceView;

    wasm_bindgen_test_configure!(run_in_browser);

    fn sample_booking() -> BookingRecord {
        BookingRecord {
            id: Some("64f3a9b1c2d3e4f5a6b7c8d9".to_string()),
            customer_name: "Ada Lovelace".to_string(),
            customer_email: "ada@example.com".to_string(),
            package: Package {
                id: "64f3a9b1c2d3e4f5a6b7c8d9".to_string(),
                title: "Alpine Trek".to_string(),
                description: "Five days in the mountains".to_string(),
                price: 100.0,
                image_url: String::new(),
                available_dates: vec![],
                max_travelers: 12,
            },
            travelers: 3,
            travel_date: "August 25, 2026".to_string(),
            total_price: 300.0,
        }
    }

    #[derive(Properties, PartialEq)]
    struct HarnessProps {
        booking: BookingRecord,
    }

    #[function_component(Harness)]
    fn harness(props: &HarnessProps) -> Html {
        html! {
            <ToastProvider>
                <InvoiceView booking={props.booking.clone()} />
            </ToastProvider>
        }
    }

    #[wasm_bindgen_test]
    async fn shows_the_issue_date_the_download_will_carry() {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .expect("test document");
        let root = document.create_element("div").expect("test root");
        yew::Renderer::<Harness>::with_root_and_props(
            root.clone(),
            HarnessProps {
                booking: sample_booking(),
            },
        )
        .render();
        yew::platform::time::sleep(Duration::from_millis(50)).await;

        let rendered = root.inner_html();
        assert!(rendered.contains(&date_utils::get_current_date_display()));
        assert!(rendered.contains("Invoice Number: INV-a6b7c8d9"));
        assert!(rendered.contains("$300.00"));
    }
}
