//! UI Components
//!
//! Leptos components for the task manager.

mod status_banner;
mod task_form;
mod task_list;

pub use status_banner::StatusBanner;
pub use task_form::TaskForm;
pub use task_list::TaskList;
