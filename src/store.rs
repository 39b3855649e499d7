//! Task List State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The task list
//! held here is a cache of the backend table, not a source of truth: every
//! mutating command resyncs it through a wholesale refetch, and the realtime
//! channel appends pushed rows between refetches.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::Task;

/// Component state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct TaskState {
    /// Cached task rows, ascending by creation time as fetched
    pub tasks: Vec<Task>,
    /// Draft title for the pending new task
    pub form_title: String,
    /// Draft description for the pending new task
    pub form_description: String,
    /// Single shared description draft for whichever row is being edited
    pub edit_draft: String,
    /// True while a create call is in flight; disables resubmission
    pub submitting: bool,
    /// Outcome of the last create attempt, cleared at the start of each
    pub status_message: String,
}

/// Type alias for the store
pub type TaskStore = Store<TaskState>;

/// Get the task store from context
pub fn use_task_store() -> TaskStore {
    expect_context::<TaskStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Replace the cached list wholesale with a freshly fetched snapshot
pub fn store_replace_tasks(store: &TaskStore, tasks: Vec<Task>) {
    *store.tasks().write() = tasks;
}

/// Merge a pushed row into the cache, suppressing duplicates by id
/// (a create's own refetch and the push channel race to materialize
/// the same row)
pub fn store_append_insert(store: &TaskStore, task: Task) {
    let appended = append_unique(&mut store.tasks().write(), task);
    if !appended {
        web_sys::console::log_1(&"[TASKS] Skipped duplicate pushed row".into());
    }
}

/// Scoped submitting flag: set on construction, cleared on drop, so the
/// create handler cannot leave the flag raised on any exit path.
pub struct SubmitGuard {
    store: TaskStore,
}

impl SubmitGuard {
    /// Mark a create attempt in flight and clear the previous outcome
    pub fn begin(store: TaskStore) -> Self {
        store.submitting().set(true);
        store.status_message().set(String::new());
        SubmitGuard { store }
    }
}

impl Drop for SubmitGuard {
    fn drop(&mut self) {
        self.store.submitting().set(false);
    }
}

// ========================
// Reconciliation Logic
// ========================

/// Append `task` unless a row with the same id is already present.
/// Arrival order is kept; no re-sort happens until the next refetch.
/// Returns whether the row was appended.
pub fn append_unique(tasks: &mut Vec<Task>, task: Task) -> bool {
    if tasks.iter().any(|t| t.id == task.id) {
        return false;
    }
    tasks.push(task);
    true
}

/// Error outcomes are distinguished by message content, not a code
pub fn is_error_message(message: &str) -> bool {
    message.contains("Error")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(id: i64, created_at: &str) -> Task {
        Task {
            id,
            title: format!("task {}", id),
            description: format!("description {}", id),
            created_at: created_at.to_string(),
            email: None,
        }
    }

    fn sorted_by_created_at(tasks: &[Task]) -> bool {
        tasks.windows(2).all(|w| w[0].created_at <= w[1].created_at)
    }

    #[test]
    fn test_append_unique_adds_new_row() {
        let mut tasks = vec![task(1, "2026-08-27T10:00:00Z")];

        let appended = append_unique(&mut tasks, task(2, "2026-08-27T10:05:00Z"));

        assert!(appended);
        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks[1].id, 2);
    }

    #[test]
    fn test_append_unique_suppresses_duplicate_id() {
        // The refetch already materialized id 2; the push event for the
        // same row must not produce a second entry.
        let mut tasks = vec![task(1, "2026-08-27T10:00:00Z"), task(2, "2026-08-27T10:05:00Z")];

        let appended = append_unique(&mut tasks, task(2, "2026-08-27T10:05:00Z"));

        assert!(!appended);
        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks.iter().filter(|t| t.id == 2).count(), 1);
    }

    #[test]
    fn test_append_keeps_arrival_order_without_resort() {
        let mut tasks = vec![task(5, "2026-08-27T12:00:00Z")];

        // A racing insert with an older timestamp lands at the end; the
        // ordering invariant is restored only by the next refetch.
        append_unique(&mut tasks, task(3, "2026-08-27T09:00:00Z"));

        assert_eq!(tasks.last().map(|t| t.id), Some(3));
        assert!(!sorted_by_created_at(&tasks));
    }

    #[test]
    fn test_push_then_refetch_has_no_duplicate() {
        // Push arrives before the create's refetch completes
        let mut tasks = vec![task(1, "2026-08-27T10:00:00Z")];
        append_unique(&mut tasks, task(2, "2026-08-27T10:05:00Z"));

        // Refetch replaces wholesale; the pushed row appears exactly once
        let snapshot = vec![task(1, "2026-08-27T10:00:00Z"), task(2, "2026-08-27T10:05:00Z")];
        tasks = snapshot;

        assert_eq!(tasks.iter().filter(|t| t.id == 2).count(), 1);
        assert!(sorted_by_created_at(&tasks));
    }

    #[test]
    fn test_empty_snapshot_yields_empty_cache() {
        let mut tasks = vec![task(1, "2026-08-27T10:00:00Z")];
        assert_eq!(tasks.len(), 1);

        tasks = Vec::new();
        assert!(tasks.is_empty());
    }

    #[test]
    fn test_error_message_classification() {
        assert!(is_error_message("Error: duplicate key"));
        assert!(!is_error_message("Task added successfully!"));
        assert!(!is_error_message(""));
    }
}
