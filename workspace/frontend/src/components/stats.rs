use common::DashboardStats;

use crate::layout::StatField;

/// Display strings for each overview slot.
pub fn stat_values(stats: &DashboardStats) -> [(StatField, String); 4] {
    [
        (StatField::PendingTasks, stats.pending_tasks.to_string()),
        (StatField::TotalNotes, stats.total_notes.to_string()),
        (StatField::ActiveGoals, stats.active_goals.to_string()),
        (StatField::CompletionPercent, format!("{}%", stats.completion_percent)),
    ]
}
