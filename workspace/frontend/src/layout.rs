//! Names shared with the page markup: sections, record kinds and stat slots.

use std::fmt;
use std::str::FromStr;

/// Top-level view of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Section {
    #[default]
    Overview,
    Tasks,
    Notes,
    Goals,
}

impl Section {
    pub const ALL: [Section; 4] = [Section::Overview, Section::Tasks, Section::Notes, Section::Goals];

    pub fn name(self) -> &'static str {
        match self {
            Section::Overview => "overview",
            Section::Tasks => "tasks",
            Section::Notes => "notes",
            Section::Goals => "goals",
        }
    }

    /// Id of the section element, e.g. `tasks-section`.
    pub fn element_id(self) -> String {
        format!("{}-section", self.name())
    }

    /// Record kind listed in this section; `None` for the overview.
    pub fn record_kind(self) -> Option<RecordKind> {
        match self {
            Section::Overview => None,
            Section::Tasks => Some(RecordKind::Task),
            Section::Notes => Some(RecordKind::Note),
            Section::Goals => Some(RecordKind::Goal),
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Section {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Section::ALL
            .into_iter()
            .find(|section| section.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown section `{s}` (expected overview, tasks, notes or goals)"))
    }
}

/// One of the three record collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKind {
    Task,
    Note,
    Goal,
}

impl RecordKind {
    pub const ALL: [RecordKind; 3] = [RecordKind::Task, RecordKind::Note, RecordKind::Goal];

    /// Path segment under `/api`.
    pub fn collection(self) -> &'static str {
        match self {
            RecordKind::Task => "tasks",
            RecordKind::Note => "notes",
            RecordKind::Goal => "goals",
        }
    }

    /// Lower-case singular used in messages ("Error adding task").
    pub fn label(self) -> &'static str {
        match self {
            RecordKind::Task => "task",
            RecordKind::Note => "note",
            RecordKind::Goal => "goal",
        }
    }

    /// Capitalised singular used in headings ("Edit Task").
    pub fn title(self) -> &'static str {
        match self {
            RecordKind::Task => "Task",
            RecordKind::Note => "Note",
            RecordKind::Goal => "Goal",
        }
    }

    pub fn section(self) -> Section {
        match self {
            RecordKind::Task => Section::Tasks,
            RecordKind::Note => Section::Notes,
            RecordKind::Goal => Section::Goals,
        }
    }

    /// Id of the grid the cards are rendered into.
    pub fn container_id(self) -> &'static str {
        match self {
            RecordKind::Task => "tasks-grid",
            RecordKind::Note => "notes-grid",
            RecordKind::Goal => "goals-grid",
        }
    }

    pub fn modal_id(self) -> &'static str {
        match self {
            RecordKind::Task => "addTaskModal",
            RecordKind::Note => "addNoteModal",
            RecordKind::Goal => "addGoalModal",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for RecordKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        RecordKind::ALL
            .into_iter()
            .find(|kind| {
                kind.label().eq_ignore_ascii_case(wanted) || kind.collection().eq_ignore_ascii_case(wanted)
            })
            .ok_or_else(|| format!("unknown record kind `{s}` (expected task, note or goal)"))
    }
}

/// Display slots of the overview statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatField {
    PendingTasks,
    TotalNotes,
    ActiveGoals,
    CompletionPercent,
}

impl StatField {
    pub const ALL: [StatField; 4] = [
        StatField::PendingTasks,
        StatField::TotalNotes,
        StatField::ActiveGoals,
        StatField::CompletionPercent,
    ];

    pub fn element_id(self) -> &'static str {
        match self {
            StatField::PendingTasks => "tasks-count",
            StatField::TotalNotes => "notes-count",
            StatField::ActiveGoals => "goals-count",
            StatField::CompletionPercent => "progress-percent",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            StatField::PendingTasks => "Pending tasks",
            StatField::TotalNotes => "Notes",
            StatField::ActiveGoals => "Active goals",
            StatField::CompletionPercent => "Completed",
        }
    }
}
