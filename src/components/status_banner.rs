//! Status Banner Component
//!
//! Shows the outcome of the last create attempt. Error outcomes are
//! distinguished by message content, not a structured code.

use leptos::prelude::*;

use crate::store::{is_error_message, use_task_store, TaskStateStoreFields};

/// Outcome banner for the create form
#[component]
pub fn StatusBanner() -> impl IntoView {
    let store = use_task_store();

    view! {
        <Show when=move || !store.status_message().read().is_empty()>
            <div class=move || {
                if is_error_message(&store.status_message().read()) {
                    "status-banner error"
                } else {
                    "status-banner success"
                }
            }>
                {move || store.status_message().get()}
            </div>
        </Show>
    }
}
