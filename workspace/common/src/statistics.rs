use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{Goal, Note, Task};

/// Summary numbers shown on the overview section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
pub struct DashboardStats {
    /// Tasks not yet completed.
    pub pending_tasks: usize,
    pub total_notes: usize,
    /// Goals whose status is exactly `active`.
    pub active_goals: usize,
    /// Share of completed tasks, rounded to a whole percent.
    pub completion_percent: u32,
}

impl DashboardStats {
    pub fn compute(tasks: &[Task], notes: &[Note], goals: &[Goal]) -> Self {
        let completed = tasks.iter().filter(|task| task.completed).count();

        Self {
            pending_tasks: tasks.len() - completed,
            total_notes: notes.len(),
            active_goals: goals.iter().filter(|goal| goal.status.is_active()).count(),
            completion_percent: completion_percent(completed, tasks.len()),
        }
    }
}

/// `round(100 * completed / total)`, or 0 when there is nothing to complete.
pub fn completion_percent(completed: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    ((completed as f64 / total as f64) * 100.0).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GoalStatus, Priority};
    use chrono::NaiveDate;

    fn created_at() -> chrono::NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 1, 5)
            .and_then(|d| d.and_hms_opt(9, 30, 0))
            .unwrap()
    }

    fn task(id: i64, completed: bool) -> Task {
        Task {
            id,
            title: format!("task {id}"),
            description: None,
            priority: Priority::Medium,
            category: "general".to_string(),
            completed,
            created_at: created_at(),
        }
    }

    fn goal(id: i64, status: GoalStatus) -> Goal {
        Goal {
            id,
            title: format!("goal {id}"),
            description: None,
            target_date: None,
            progress: 10,
            status,
            created_at: created_at(),
        }
    }

    #[test]
    fn completion_percent_edges() {
        assert_eq!(completion_percent(0, 0), 0);
        assert_eq!(completion_percent(4, 4), 100);
        assert_eq!(completion_percent(0, 5), 0);
        assert_eq!(completion_percent(1, 3), 33);
        assert_eq!(completion_percent(2, 3), 67);
        assert_eq!(completion_percent(1, 8), 13);
    }

    #[test]
    fn stats_count_pending_tasks_and_active_goals() {
        let tasks = vec![task(1, false), task(2, true), task(3, false)];
        let goals = vec![
            goal(1, GoalStatus::Active),
            goal(2, GoalStatus::Completed),
            goal(3, GoalStatus::Other("Active".to_string())),
        ];

        let stats = DashboardStats::compute(&tasks, &[], &goals);
        assert_eq!(
            stats,
            DashboardStats {
                pending_tasks: 2,
                total_notes: 0,
                active_goals: 1,
                completion_percent: 33,
            }
        );
    }

    #[test]
    fn empty_collections_yield_zeroes() {
        assert_eq!(DashboardStats::compute(&[], &[], &[]), DashboardStats::default());
    }
}
