//! Task Manager App
//!
//! Session acquisition plus the main CRUD component.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::backend;
use crate::components::{TaskForm, TaskList};
use crate::context::AppContext;
use crate::session::{self, Session};
use crate::store::{store_append_insert, store_replace_tasks, TaskState, TaskStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    let (session, set_session) = signal::<Option<Session>>(None);

    // Acquire the session once; the component stays hidden until it arrives
    Effect::new(move |_| {
        spawn_local(async move {
            match session::acquire().await {
                Ok(acquired) => set_session.set(Some(acquired)),
                Err(e) => {
                    web_sys::console::error_1(&format!("Error acquiring session: {}", e).into());
                }
            }
        });
    });

    view! {
        <div class="app-shell">
            {move || session.get().map(|session| view! { <TaskManager session=session/> })}
        </div>
    }
}

/// Single-page task list over the hosted backend
#[component]
pub fn TaskManager(session: Session) -> impl IntoView {
    let store = Store::new(TaskState::default());
    let ctx = AppContext::new(signal(0u32));

    provide_context(store);
    provide_context(ctx);
    provide_context(session);

    // Sync point: runs on mount and whenever a command bumps the trigger.
    // The snapshot replaces the cache wholesale; a fetch failure leaves the
    // existing list untouched.
    Effect::new(move |_| {
        let trigger = ctx.reload_trigger.get();
        web_sys::console::log_1(&format!("[TASKS] Refetch, trigger={}", trigger).into());
        spawn_local(async move {
            match backend::fetch_tasks().await {
                Ok(loaded) => store_replace_tasks(&store, loaded),
                Err(e) => {
                    web_sys::console::error_1(&format!("Error reading tasks: {}", e).into());
                }
            }
        });
    });

    // One insert channel for the component's lifetime, released on teardown
    let subscription = send_wrapper::SendWrapper::new(backend::subscribe_inserts(move |task| {
        store_append_insert(&store, task);
    }));
    on_cleanup(move || drop(subscription));

    let task_count = move || store.tasks().read().len();

    view! {
        <div class="task-manager">
            <h2>"Task Manager CRUD"</h2>

            <TaskForm/>

            <div class="task-summary">
                <h3>{move || format!("Tasks ({})", task_count())}</h3>
                <Show when=move || task_count() == 0>
                    <p class="empty-hint">"No tasks found. Add one above!"</p>
                </Show>
            </div>

            <TaskList/>
        </div>
    }
}
