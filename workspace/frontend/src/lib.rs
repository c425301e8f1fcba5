//! Dashboard controller for tasks, notes and goals.
//!
//! The controller keeps local snapshots of the three collections served by
//! the REST API, renders them into cards on a [`ui::Page`], drives the
//! create/edit modal forms and refreshes the overview statistics after every
//! write.

pub mod api_client;
pub mod components;
pub mod dashboard;
pub mod layout;
pub mod settings;
pub mod ui;


pub use api_client::{ApiError, ApiResult, DashboardApi, HttpApiClient};
pub use dashboard::{
    Dashboard, FormError, FormFields, FormState, GoalForm, Mutation, MutationOutcome, NoteForm, TaskForm,
};
pub use layout::{RecordKind, Section, StatField};
pub use settings::{AppSettings, GoalProgressOnEdit, SettingsError};
pub use ui::{HtmlPage, MemoryPage, NotificationCenter, NotificationKind, Page};
