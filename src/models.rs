//! Frontend Models
//!
//! Data structures matching the backend task table.

use serde::{Deserialize, Serialize};

/// Task row (matches backend wire schema)
///
/// `id` and `created_at` are server-assigned; `created_at` is the sole
/// sort key of the list, ascending.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub created_at: String,
    #[serde(default)]
    pub email: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_row_decodes() {
        let row: Task = serde_json::from_str(
            r#"{"id":7,"title":"Buy milk","description":"2 liters","created_at":"2026-08-27T10:00:00Z","email":"a@b.c"}"#,
        )
        .expect("Failed to decode row");

        assert_eq!(row.id, 7);
        assert_eq!(row.title, "Buy milk");
        assert_eq!(row.email.as_deref(), Some("a@b.c"));
    }

    #[test]
    fn test_task_row_without_email_decodes() {
        let row: Task = serde_json::from_str(
            r#"{"id":1,"title":"t","description":"d","created_at":"2026-08-27T10:00:00Z"}"#,
        )
        .expect("Failed to decode row");

        assert!(row.email.is_none());
    }
}
