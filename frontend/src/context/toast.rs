use std::cell::Cell;
use std::rc::Rc;

use gloo::timers::callback::Timeout;
use yew::prelude::*;

const TOAST_DISMISS_MS: u32 = 3_000;

thread_local! {
    static NEXT_TOAST_ID: Cell<u32> = Cell::new(0);
}

fn next_toast_id() -> u32 {
    NEXT_TOAST_ID.with(|cell| {
        let id = cell.get();
        cell.set(id.wrapping_add(1));
        id
    })
}

#[derive(Clone, Copy, PartialEq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Clone, PartialEq)]
struct Toast {
    id: u32,
    kind: ToastKind,
    message: String,
}

#[derive(Clone, PartialEq, Default)]
struct ToastList {
    toasts: Vec<Toast>,
}

enum ToastAction {
    Push(Toast),
    Dismiss(u32),
}

impl Reducible for ToastList {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: ToastAction) -> Rc<Self> {
        let mut toasts = self.toasts.clone();
        match action {
            ToastAction::Push(toast) => toasts.push(toast),
            ToastAction::Dismiss(id) => toasts.retain(|t| t.id != id),
        }
        Rc::new(Self { toasts })
    }
}

/// Transient notification handle available to every screen.
#[derive(Clone, PartialEq)]
pub struct ToastContext {
    show: Callback<(ToastKind, String)>,
}

impl ToastContext {
    pub fn success(&self, message: impl Into<String>) {
        self.show.emit((ToastKind::Success, message.into()));
    }

    pub fn error(&self, message: impl Into<String>) {
        self.show.emit((ToastKind::Error, message.into()));
    }
}

#[derive(Properties, PartialEq)]
pub struct ToastProviderProps {
    pub children: Html,
}

#[function_component(ToastProvider)]
pub fn toast_provider(props: &ToastProviderProps) -> Html {
    let list = use_reducer(ToastList::default);

    let show = {
        let list = list.clone();
        Callback::from(move |(kind, message): (ToastKind, String)| {
            let id = next_toast_id();
            list.dispatch(ToastAction::Push(Toast { id, kind, message }));

            // Auto-dismiss after the display window.
            let list = list.clone();
            Timeout::new(TOAST_DISMISS_MS, move || {
                list.dispatch(ToastAction::Dismiss(id));
            })
            .forget();
        })
    };

    let context = ToastContext { show };

    html! {
        <ContextProvider<ToastContext> context={context}>
            {props.children.clone()}
            <div class="toast-container">
                {for list.toasts.iter().map(|toast| {
                    let class = match toast.kind {
                        ToastKind::Success => "toast toast-success",
                        ToastKind::Error => "toast toast-error",
                    };
                    html! {
                        <div key={toast.id} {class}>{&toast.message}</div>
                    }
                })}
            </div>
        </ContextProvider<ToastContext>>
    }
}

#[hook]
pub fn use_toast() -> ToastContext {
    use_context::<ToastContext>().expect("ToastProvider is mounted above every screen")
}
