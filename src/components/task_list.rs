//! Task List Component
//!
//! Renders the cached task rows with per-row edit and delete controls.
//! Update and delete failures are logged only; the list is left unchanged
//! and resyncs on the next refetch.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::backend;
use crate::context::AppContext;
use crate::models::Task;
use crate::store::{use_task_store, TaskStateStoreFields};

/// List of cached task rows
#[component]
pub fn TaskList() -> impl IntoView {
    let store = use_task_store();

    view! {
        <ul class="task-list">
            <For
                each=move || store.tasks().get()
                key=|task| task.id
                children=move |task| view! { <TaskCard task=task/> }
            />
        </ul>
    }
}

/// One task row with its edit and delete controls.
///
/// The description textarea binds the single shared edit draft: only one
/// row's edit can be in progress at a time, and typing into another row's
/// field overwrites the shared value.
#[component]
fn TaskCard(task: Task) -> impl IntoView {
    let store = use_task_store();
    let ctx = expect_context::<AppContext>();
    let task_id = task.id;

    let update_description = move |_| {
        let description = store.edit_draft().get();
        spawn_local(async move {
            match backend::update_task(task_id, &description).await {
                Ok(()) => {
                    store.edit_draft().set(String::new());
                    ctx.reload();
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("Error updating task: {}", e).into());
                }
            }
        });
    };

    let delete_task = move |_| {
        spawn_local(async move {
            match backend::delete_task(task_id).await {
                Ok(()) => ctx.reload(),
                Err(e) => {
                    web_sys::console::error_1(&format!("Error deleting task: {}", e).into());
                }
            }
        });
    };

    view! {
        <li class="task-card">
            <h3>{task.title.clone()}</h3>
            <p>{task.description.clone()}</p>
            <div class="task-actions">
                <textarea
                    placeholder="Updated description..."
                    prop:value=move || store.edit_draft().get()
                    on:input=move |ev| store.edit_draft().set(event_target_value(&ev))
                />
                <button class="edit-btn" on:click=update_description>"Edit"</button>
                <button class="delete-btn" on:click=delete_task>"Delete"</button>
            </div>
        </li>
    }
}
