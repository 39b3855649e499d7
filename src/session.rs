//! Session Collaborator
//!
//! Opaque authenticated session acquired from the host page. Login and
//! token refresh happen entirely outside this crate; the component only
//! needs the acting user's identity to tag created rows.

use serde::Deserialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(catch, js_namespace = ["window", "__TASKS_BACKEND__"], js_name = getSession)]
    async fn get_session_js() -> Result<JsValue, JsValue>;
}

/// Authenticated session exposed by the host page
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Session {
    pub email: String,
}

pub async fn acquire() -> Result<Session, String> {
    let value = get_session_js()
        .await
        .map_err(|e| crate::backend::js_error_message(&e))?;
    serde_wasm_bindgen::from_value(value).map_err(|e| e.to_string())
}
