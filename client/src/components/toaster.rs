//! Toast stack rendered above page content.
//!
//! SYSTEM CONTEXT
//! ==============
//! Any component holding the `RwSignal<ToastState>` context can raise a toast
//! through [`show_toast`]; the stack itself is mounted once by `App`.

use leptos::prelude::*;

use crate::state::toast::{Toast, ToastKind, ToastState};

/// Queue a toast. In the browser it dismisses itself after
/// [`crate::state::toast::TOAST_TIMEOUT_MS`].
pub fn show_toast(toasts: RwSignal<ToastState>, kind: ToastKind, message: impl Into<String>) {
    let message = message.into();
    let id = toasts.try_update(move |state| state.push(kind, message));

    #[cfg(feature = "hydrate")]
    {
        if let Some(id) = id {
            leptos::task::spawn_local(async move {
                let timeout = u64::from(crate::state::toast::TOAST_TIMEOUT_MS);
                gloo_timers::future::sleep(std::time::Duration::from_millis(timeout)).await;
                let _ = toasts.try_update(|state| state.dismiss(id));
            });
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
    }
}

/// Visible toasts, oldest on top.
#[component]
pub fn Toaster() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <div class="toaster" aria-live="polite">
            <For
                each=move || toasts.get().items
                key=|toast| toast.id
                children=move |toast: Toast| {
                    let id = toast.id;
                    view! {
                        <div class=toast.kind.class() role="status">
                            <span class="toast__message">{toast.message}</span>
                            <button
                                class="toast__dismiss"
                                on:click=move |_| toasts.update(|state| state.dismiss(id))
                                title="Dismiss"
                            >
                                "×"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
