//! Common transport-layer types shared between the dashboard server and the
//! dashboard controller. Field names follow the JSON exchanged on `/api/*`
//! so both sides deserialize the same shapes.

pub mod serde_helpers;
mod statistics;

pub use statistics::{DashboardStats, completion_percent};

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;
use validator::Validate;

/// Server-assigned identifier, unique within one collection.
pub type RecordId = i64;

pub const DEFAULT_CATEGORY: &str = "general";
pub const DEFAULT_NOTE_COLOR: &str = "#ff99c8";

fn default_category() -> String {
    DEFAULT_CATEGORY.to_string()
}

fn default_color() -> String {
    DEFAULT_NOTE_COLOR.to_string()
}

// ===================== Enumerations =====================

/// Task priority. The set is owned by the API, so values this client does
/// not know are kept verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
    Other(String),
}

impl Priority {
    pub fn as_str(&self) -> &str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
            Priority::Other(value) => value,
        }
    }
}

impl From<String> for Priority {
    fn from(value: String) -> Self {
        match value.as_str() {
            "low" => Priority::Low,
            "medium" => Priority::Medium,
            "high" => Priority::High,
            _ => Priority::Other(value),
        }
    }
}

impl From<&str> for Priority {
    fn from(value: &str) -> Self {
        Priority::from(value.to_string())
    }
}

impl From<Priority> for String {
    fn from(value: Priority) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Goal status, server-defined like [`Priority`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum GoalStatus {
    #[default]
    Active,
    Completed,
    Other(String),
}

impl GoalStatus {
    pub fn as_str(&self) -> &str {
        match self {
            GoalStatus::Active => "active",
            GoalStatus::Completed => "completed",
            GoalStatus::Other(value) => value,
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, GoalStatus::Active)
    }
}

impl From<String> for GoalStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "active" => GoalStatus::Active,
            "completed" => GoalStatus::Completed,
            _ => GoalStatus::Other(value),
        }
    }
}

impl From<&str> for GoalStatus {
    fn from(value: &str) -> Self {
        GoalStatus::from(value.to_string())
    }
}

impl From<GoalStatus> for String {
    fn from(value: GoalStatus) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for GoalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ===================== Tasks =====================

/// Task as returned by `GET /api/tasks`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct Task {
    pub id: RecordId,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "serde_helpers::non_null")]
    #[schema(value_type = String, example = "medium")]
    pub priority: Priority,
    #[serde(default = "default_category", deserialize_with = "serde_helpers::non_null")]
    pub category: String,
    /// SQLite-backed servers send `0`/`1` here.
    #[serde(default, deserialize_with = "serde_helpers::flexible_bool")]
    pub completed: bool,
    #[serde(with = "serde_helpers::timestamp")]
    #[schema(value_type = String, example = "2025-01-05 09:30:00")]
    pub created_at: NaiveDateTime,
}

/// Body of `POST /api/tasks` and `PUT /api/tasks/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate, PartialEq)]
pub struct TaskPayload {
    #[validate(length(min = 1, message = "title is required"))]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    #[schema(value_type = String, example = "medium")]
    pub priority: Priority,
    #[serde(default = "default_category")]
    pub category: String,
}

// ===================== Notes =====================

/// Note as returned by `GET /api/notes`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct Note {
    pub id: RecordId,
    pub title: String,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default = "default_category", deserialize_with = "serde_helpers::non_null")]
    pub category: String,
    /// CSS color used as the card accent.
    #[serde(default = "default_color", deserialize_with = "serde_helpers::non_null")]
    pub color: String,
    #[serde(with = "serde_helpers::timestamp")]
    #[schema(value_type = String, example = "2025-01-05 09:30:00")]
    pub created_at: NaiveDateTime,
}

/// Body of `POST /api/notes` and `PUT /api/notes/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate, PartialEq)]
pub struct NotePayload {
    #[validate(length(min = 1, message = "title is required"))]
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default = "default_category")]
    pub category: String,
    #[serde(default = "default_color")]
    pub color: String,
}

// ===================== Goals =====================

/// Goal as returned by `GET /api/goals`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct Goal {
    pub id: RecordId,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, with = "serde_helpers::optional_date")]
    #[schema(value_type = Option<String>, example = "2025-03-01")]
    pub target_date: Option<NaiveDate>,
    /// Percent complete, 0 to 100.
    #[serde(default, deserialize_with = "serde_helpers::non_null")]
    pub progress: i32,
    #[serde(default, deserialize_with = "serde_helpers::non_null")]
    #[schema(value_type = String, example = "active")]
    pub status: GoalStatus,
    #[serde(with = "serde_helpers::timestamp")]
    #[schema(value_type = String, example = "2025-01-05 09:30:00")]
    pub created_at: NaiveDateTime,
}

/// Body of `POST /api/goals`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate, PartialEq)]
pub struct NewGoal {
    #[validate(length(min = 1, message = "title is required"))]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, with = "serde_helpers::optional_date")]
    #[schema(value_type = Option<String>, example = "2025-03-01")]
    pub target_date: Option<NaiveDate>,
}

/// Body of `PUT /api/goals/{id}`. Unlike creation it carries `progress`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate, PartialEq)]
pub struct GoalUpdate {
    #[validate(length(min = 1, message = "title is required"))]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, with = "serde_helpers::optional_date")]
    #[schema(value_type = Option<String>, example = "2025-03-01")]
    pub target_date: Option<NaiveDate>,
    #[serde(default)]
    #[validate(range(min = 0, max = 100))]
    pub progress: i32,
}

// ===================== Write acknowledgements =====================

/// What the server answers to POST/PUT/DELETE and toggle requests.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct MutationResponse {
    pub success: bool,
    /// Present on creation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
}

impl MutationResponse {
    pub fn ok() -> Self {
        Self {
            success: true,
            id: None,
        }
    }

    pub fn created(id: RecordId) -> Self {
        Self {
            success: true,
            id: Some(id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn task_accepts_sqlite_shaped_rows() {
        let raw = json!({
            "id": 3,
            "user_id": 1,
            "title": "Plan your weekly goals",
            "description": null,
            "completed": 1,
            "priority": "medium",
            "category": "personal",
            "created_at": "2025-01-05 09:30:00"
        });

        let task: Task = serde_json::from_value(raw).unwrap();
        assert_eq!(task.id, 3);
        assert!(task.completed);
        assert_eq!(task.priority, Priority::Medium);
        assert_eq!(task.description, None);
        assert_eq!(task.created_at.to_string(), "2025-01-05 09:30:00");
    }

    #[test]
    fn unknown_priority_and_status_are_kept_verbatim() {
        let task: Task = serde_json::from_value(json!({
            "id": 1,
            "title": "t",
            "priority": "urgent",
            "created_at": "2025-01-05T09:30:00"
        }))
        .unwrap();
        assert_eq!(task.priority, Priority::Other("urgent".to_string()));
        assert_eq!(task.category, DEFAULT_CATEGORY);
        assert!(!task.completed);

        let goal: Goal = serde_json::from_value(json!({
            "id": 1,
            "title": "g",
            "status": "paused",
            "target_date": "",
            "created_at": "2025-01-05 09:30:00"
        }))
        .unwrap();
        assert_eq!(goal.status.as_str(), "paused");
        assert!(!goal.status.is_active());
        assert_eq!(goal.target_date, None);
        assert_eq!(goal.progress, 0);

        let back = serde_json::to_value(&goal).unwrap();
        assert_eq!(back["status"], "paused");
        assert_eq!(back["target_date"], serde_json::Value::Null);
    }

    #[test]
    fn note_defaults_fill_missing_fields() {
        let note: Note = serde_json::from_value(json!({
            "id": 9,
            "title": "Study Tips",
            "created_at": "2025-01-05 09:30:00"
        }))
        .unwrap();
        assert_eq!(note.color, DEFAULT_NOTE_COLOR);
        assert_eq!(note.category, DEFAULT_CATEGORY);
        assert_eq!(note.content, None);
    }

    #[test]
    fn goal_update_serializes_progress_and_plain_date() {
        let update = GoalUpdate {
            title: "Read more".to_string(),
            description: String::new(),
            target_date: NaiveDate::from_ymd_opt(2025, 3, 1),
            progress: 0,
        };
        let value = serde_json::to_value(&update).unwrap();
        assert_eq!(value["progress"], 0);
        assert_eq!(value["target_date"], "2025-03-01");
    }

    #[test]
    fn payload_validation_requires_title() {
        let payload = TaskPayload {
            title: String::new(),
            description: String::new(),
            priority: Priority::Low,
            category: "errand".to_string(),
        };
        assert!(payload.validate().is_err());

        let update = GoalUpdate {
            title: "x".to_string(),
            description: String::new(),
            target_date: None,
            progress: 140,
        };
        assert!(update.validate().is_err());
    }

    #[test]
    fn mutation_response_omits_missing_id() {
        assert_eq!(
            serde_json::to_value(MutationResponse::ok()).unwrap(),
            json!({"success": true})
        );
        assert_eq!(
            serde_json::to_value(MutationResponse::created(5)).unwrap(),
            json!({"success": true, "id": 5})
        );
    }
}
