//! Backend Bridge
//!
//! Frontend bindings to the hosted data-access client exposed by the host
//! page at `window.__TASKS_BACKEND__`. The bridge is opaque: it owns the
//! transport and the authenticated connection; this module only converts
//! between `JsValue` and the typed row schema.

use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::models::Task;

#[wasm_bindgen]
extern "C" {
    /// Opaque realtime channel handle returned by the bridge
    pub type RawSubscription;

    #[wasm_bindgen(method)]
    fn unsubscribe(this: &RawSubscription);

    #[wasm_bindgen(catch, js_namespace = ["window", "__TASKS_BACKEND__"], js_name = fetchTasks)]
    async fn fetch_tasks_js() -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch, js_namespace = ["window", "__TASKS_BACKEND__"], js_name = insertTask)]
    async fn insert_task_js(args: JsValue) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch, js_namespace = ["window", "__TASKS_BACKEND__"], js_name = updateTask)]
    async fn update_task_js(args: JsValue) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch, js_namespace = ["window", "__TASKS_BACKEND__"], js_name = deleteTask)]
    async fn delete_task_js(args: JsValue) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(js_namespace = ["window", "__TASKS_BACKEND__"], js_name = subscribeInserts)]
    fn subscribe_inserts_js(on_insert: &js_sys::Function, on_status: &js_sys::Function) -> RawSubscription;
}

/// Stringify a bridge rejection for the `Result<_, String>` seam
pub(crate) fn js_error_message(err: &JsValue) -> String {
    if let Some(message) = err.as_string() {
        return message;
    }
    err.dyn_ref::<js_sys::Error>()
        .map(|e| String::from(e.message()))
        .unwrap_or_else(|| format!("{err:?}"))
}

// ========================
// Bridge Argument Structs
// ========================

#[derive(Serialize)]
pub struct InsertTaskArgs<'a> {
    pub title: &'a str,
    pub description: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<&'a str>,
}

#[derive(Serialize)]
struct UpdateTaskArgs<'a> {
    id: i64,
    description: &'a str,
}

#[derive(Serialize)]
struct TaskIdArgs {
    id: i64,
}

// ========================
// CRUD Operations
// ========================

/// Read all tasks, ordered by creation time ascending. An absent result
/// from the bridge reads as an empty list.
pub async fn fetch_tasks() -> Result<Vec<Task>, String> {
    let result = fetch_tasks_js().await.map_err(|e| js_error_message(&e))?;
    let rows: Option<Vec<Task>> = serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())?;
    Ok(rows.unwrap_or_default())
}

/// Insert a new row and return the created row (with server-assigned
/// `id` and `created_at`).
pub async fn insert_task(args: &InsertTaskArgs<'_>) -> Result<Task, String> {
    let js_args = serde_wasm_bindgen::to_value(args).map_err(|e| e.to_string())?;
    let result = insert_task_js(js_args).await.map_err(|e| js_error_message(&e))?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

/// Patch only the description of the row matching `id`
pub async fn update_task(id: i64, description: &str) -> Result<(), String> {
    let js_args =
        serde_wasm_bindgen::to_value(&UpdateTaskArgs { id, description }).map_err(|e| e.to_string())?;
    update_task_js(js_args).await.map_err(|e| js_error_message(&e))?;
    Ok(())
}

/// Delete the row matching `id`
pub async fn delete_task(id: i64) -> Result<(), String> {
    let js_args = serde_wasm_bindgen::to_value(&TaskIdArgs { id }).map_err(|e| e.to_string())?;
    delete_task_js(js_args).await.map_err(|e| js_error_message(&e))?;
    Ok(())
}

// ========================
// Realtime Channel
// ========================

/// Owned insert subscription. Dropping it releases the channel and the
/// callback closures backing it.
pub struct InsertSubscription {
    handle: RawSubscription,
    _on_insert: Closure<dyn FnMut(JsValue)>,
    _on_status: Closure<dyn FnMut(JsValue)>,
}

impl Drop for InsertSubscription {
    fn drop(&mut self) {
        self.handle.unsubscribe();
    }
}

/// Open the single insert channel on the task table. Each pushed row is
/// decoded and handed to `on_insert` in arrival order.
pub fn subscribe_inserts(mut on_insert: impl FnMut(Task) + 'static) -> InsertSubscription {
    let insert_cb = Closure::<dyn FnMut(JsValue)>::new(move |payload: JsValue| {
        match serde_wasm_bindgen::from_value::<Task>(payload) {
            Ok(task) => on_insert(task),
            Err(e) => {
                web_sys::console::error_1(&format!("Error decoding pushed task: {}", e).into());
            }
        }
    });
    let status_cb = Closure::<dyn FnMut(JsValue)>::new(|status: JsValue| {
        web_sys::console::log_1(
            &format!("Subscription: {}", status.as_string().unwrap_or_default()).into(),
        );
    });
    let handle = subscribe_inserts_js(
        insert_cb.as_ref().unchecked_ref(),
        status_cb.as_ref().unchecked_ref(),
    );
    InsertSubscription {
        handle,
        _on_insert: insert_cb,
        _on_status: status_cb,
    }
}
