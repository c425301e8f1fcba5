//! Create/edit state of the three modal forms.

use chrono::NaiveDate;
use common::{
    Goal, GoalUpdate, NewGoal, Note, NotePayload, Priority, RecordId, Task, TaskPayload, DEFAULT_CATEGORY,
    DEFAULT_NOTE_COLOR,
};
use thiserror::Error;

use crate::layout::RecordKind;

/// Mode of one form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormState {
    #[default]
    Create,
    Edit(RecordId),
}

/// A submission refused before any request is made.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("title is required")]
    MissingTitle,

    #[error("invalid date `{0}`, expected YYYY-MM-DD")]
    InvalidDate(String),
}

fn required_title(title: &str) -> Result<String, FormError> {
    if title.trim().is_empty() {
        return Err(FormError::MissingTitle);
    }
    Ok(title.to_string())
}

fn parse_target_date(raw: &str) -> Result<Option<NaiveDate>, FormError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map(Some)
        .map_err(|_| FormError::InvalidDate(raw.to_string()))
}

#[derive(Debug, Clone, PartialEq)]
pub struct TaskForm {
    pub title: String,
    pub description: String,
    pub priority: Priority,
    pub category: String,
}

impl Default for TaskForm {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            priority: Priority::Medium,
            category: DEFAULT_CATEGORY.to_string(),
        }
    }
}

impl TaskForm {
    pub fn from_task(task: &Task) -> Self {
        Self {
            title: task.title.clone(),
            description: task.description.clone().unwrap_or_default(),
            priority: task.priority.clone(),
            category: task.category.clone(),
        }
    }

    pub fn to_payload(&self) -> Result<TaskPayload, FormError> {
        Ok(TaskPayload {
            title: required_title(&self.title)?,
            description: self.description.clone(),
            priority: self.priority.clone(),
            category: self.category.clone(),
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NoteForm {
    pub title: String,
    pub content: String,
    pub category: String,
    pub color: String,
}

impl Default for NoteForm {
    fn default() -> Self {
        Self {
            title: String::new(),
            content: String::new(),
            category: DEFAULT_CATEGORY.to_string(),
            color: DEFAULT_NOTE_COLOR.to_string(),
        }
    }
}

impl NoteForm {
    pub fn from_note(note: &Note) -> Self {
        Self {
            title: note.title.clone(),
            content: note.content.clone().unwrap_or_default(),
            category: note.category.clone(),
            color: note.color.clone(),
        }
    }

    pub fn to_payload(&self) -> Result<NotePayload, FormError> {
        Ok(NotePayload {
            title: required_title(&self.title)?,
            content: self.content.clone(),
            category: self.category.clone(),
            color: self.color.clone(),
        })
    }
}

/// Goal fields as typed; `target_date` is the raw `YYYY-MM-DD` input value.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GoalForm {
    pub title: String,
    pub description: String,
    pub target_date: String,
}

impl GoalForm {
    pub fn from_goal(goal: &Goal) -> Self {
        Self {
            title: goal.title.clone(),
            description: goal.description.clone().unwrap_or_default(),
            target_date: goal
                .target_date
                .map(|date| date.format("%Y-%m-%d").to_string())
                .unwrap_or_default(),
        }
    }

    pub fn to_new_goal(&self) -> Result<NewGoal, FormError> {
        Ok(NewGoal {
            title: required_title(&self.title)?,
            description: self.description.clone(),
            target_date: parse_target_date(&self.target_date)?,
        })
    }

    /// The edit form has no progress control, so the caller decides it.
    pub fn to_update(&self, progress: i32) -> Result<GoalUpdate, FormError> {
        Ok(GoalUpdate {
            title: required_title(&self.title)?,
            description: self.description.clone(),
            target_date: parse_target_date(&self.target_date)?,
            progress,
        })
    }
}

/// Field values of any one form, as handed to the page.
#[derive(Debug, Clone, PartialEq)]
pub enum FormFields {
    Task(TaskForm),
    Note(NoteForm),
    Goal(GoalForm),
}

impl FormFields {
    pub fn blank(kind: RecordKind) -> Self {
        match kind {
            RecordKind::Task => FormFields::Task(TaskForm::default()),
            RecordKind::Note => FormFields::Note(NoteForm::default()),
            RecordKind::Goal => FormFields::Goal(GoalForm::default()),
        }
    }

    pub fn title(&self) -> &str {
        match self {
            FormFields::Task(form) => &form.title,
            FormFields::Note(form) => &form.title,
            FormFields::Goal(form) => &form.title,
        }
    }
}

/// Modal heading for a form in `state`.
pub fn heading(kind: RecordKind, state: FormState) -> String {
    match state {
        FormState::Create => format!("Add New {}", kind.title()),
        FormState::Edit(_) => format!("Edit {}", kind.title()),
    }
}

#[derive(Debug, Clone, Default)]
pub(crate) struct Modal<F> {
    pub open: bool,
    pub state: FormState,
    pub fields: F,
}

impl<F: Default> Modal<F> {
    fn reset(&mut self) {
        *self = Self::default();
    }
}

#[derive(Debug, Default)]
pub(crate) struct Forms {
    pub task: Modal<TaskForm>,
    pub note: Modal<NoteForm>,
    pub goal: Modal<GoalForm>,
}

impl Forms {
    pub fn state(&self, kind: RecordKind) -> FormState {
        match kind {
            RecordKind::Task => self.task.state,
            RecordKind::Note => self.note.state,
            RecordKind::Goal => self.goal.state,
        }
    }

    pub fn is_open(&self, kind: RecordKind) -> bool {
        match kind {
            RecordKind::Task => self.task.open,
            RecordKind::Note => self.note.open,
            RecordKind::Goal => self.goal.open,
        }
    }

    pub fn set_open(&mut self, kind: RecordKind, open: bool) {
        match kind {
            RecordKind::Task => self.task.open = open,
            RecordKind::Note => self.note.open = open,
            RecordKind::Goal => self.goal.open = open,
        }
    }

    pub fn fields(&self, kind: RecordKind) -> FormFields {
        match kind {
            RecordKind::Task => FormFields::Task(self.task.fields.clone()),
            RecordKind::Note => FormFields::Note(self.note.fields.clone()),
            RecordKind::Goal => FormFields::Goal(self.goal.fields.clone()),
        }
    }

    /// Back to `Create` with blank fields, closed.
    pub fn reset(&mut self, kind: RecordKind) {
        match kind {
            RecordKind::Task => self.task.reset(),
            RecordKind::Note => self.note.reset(),
            RecordKind::Goal => self.goal.reset(),
        }
    }
}
