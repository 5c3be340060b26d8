//! Dismissible error banner bound to `AppState::error_msg`.

use crate::state::AppState;
use dioxus::prelude::*;

/// Shows the current error message, if any, with a close button.
#[component]
pub fn ErrorDisplay() -> Element {
    let mut state = use_context::<AppState>();
    let Some(message) = state.error_msg.read().clone() else {
        return rsx! {};
    };

    rsx! {
        div {
            role: "alert",
            style: "display: flex; justify-content: space-between; align-items: center; padding: 12px 16px; margin: 8px auto; max-width: 900px; background: #FFEBEE; color: #C62828; border-radius: 4px; border: 1px solid #EF9A9A;",
            span {
                strong { "Error: " }
                "{message}"
            }
            button {
                style: "background: none; border: none; color: inherit; font-size: 18px; cursor: pointer;",
                aria_label: "Dismiss",
                onclick: move |_| state.error_msg.set(None),
                "×"
            }
        }
    }
}
