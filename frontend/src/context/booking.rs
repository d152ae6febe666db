use shared::BookingRecord;
use yew::prelude::*;

/// Hand-off slot for the booking constructed right after a successful
/// submission. The invoice screen reads it; when it is empty the screen
/// redirects back to the package list, which is the only guard against
/// direct navigation to `/invoice`.
pub type BookingContext = UseStateHandle<Option<BookingRecord>>;

#[derive(Properties, PartialEq)]
pub struct BookingProviderProps {
    pub children: Html,
}

#[function_component(BookingProvider)]
pub fn booking_provider(props: &BookingProviderProps) -> Html {
    let booking = use_state(|| Option::<BookingRecord>::None);

    html! {
        <ContextProvider<BookingContext> context={booking}>
            {props.children.clone()}
        </ContextProvider<BookingContext>>
    }
}

#[hook]
pub fn use_booking() -> BookingContext {
    use_context::<BookingContext>().expect("BookingProvider is mounted above every screen")
}
