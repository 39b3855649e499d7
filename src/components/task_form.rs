//! Task Form Component
//!
//! Form for creating new tasks, with in-flight and outcome feedback.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::backend::{self, InsertTaskArgs};
use crate::components::StatusBanner;
use crate::context::AppContext;
use crate::session::Session;
use crate::store::{use_task_store, SubmitGuard, TaskStateStoreFields};

/// Form for creating new tasks
#[component]
pub fn TaskForm() -> impl IntoView {
    let store = use_task_store();
    let ctx = expect_context::<AppContext>();
    let session = expect_context::<Session>();

    let submit_task = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if store.submitting().get() {
            return;
        }
        let title = store.form_title().get();
        let description = store.form_description().get();
        if title.is_empty() || description.is_empty() {
            return;
        }
        let email = session.email.clone();

        spawn_local(async move {
            let _guard = SubmitGuard::begin(store);
            let args = InsertTaskArgs {
                title: &title,
                description: &description,
                email: Some(&email),
            };
            match backend::insert_task(&args).await {
                Ok(_created) => {
                    store.form_title().set(String::new());
                    store.form_description().set(String::new());
                    store.status_message().set("Task added successfully!".to_string());
                    ctx.reload();
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("Error adding task: {}", e).into());
                    // Draft stays intact so the user can retry
                    store.status_message().set(format!("Error: {}", e));
                }
            }
            // _guard drops here: submitting is false once the outcome is set
        });
    };

    view! {
        <form class="task-form" on:submit=submit_task>
            <input
                type="text"
                placeholder="Task Title"
                required=true
                prop:value=move || store.form_title().get()
                on:input=move |ev| store.form_title().set(event_target_value(&ev))
            />
            <textarea
                placeholder="Task Description"
                required=true
                prop:value=move || store.form_description().get()
                on:input=move |ev| store.form_description().set(event_target_value(&ev))
            />
            <button type="submit" disabled=move || store.submitting().get()>
                {move || if store.submitting().get() { "Adding..." } else { "Add Task" }}
            </button>
            <StatusBanner/>
        </form>
    }
}
