//! Welcome content for a fresh dashboard.

use chrono::{Days, NaiveDate};
use common::{Goal, GoalStatus, Note, Priority, Task};

use crate::store::Store;

const TASKS: [(&str, &str, &str, &str); 4] = [
    (
        "Welcome to Youth Balance!",
        "Take a moment to explore your dashboard and customize it to your needs.",
        "high",
        "general",
    ),
    (
        "Set up your morning routine",
        "Create a morning routine that energizes you for the day ahead.",
        "medium",
        "personal",
    ),
    (
        "Plan your weekly goals",
        "Think about what you want to achieve this week and break it into smaller steps.",
        "medium",
        "personal",
    ),
    (
        "Practice self-care today",
        "Do something kind for yourself - take a bath, read a book, or call a friend.",
        "low",
        "health",
    ),
];

const NOTES: [(&str, &str, &str, &str); 4] = [
    (
        "Daily Affirmations",
        "I am capable of achieving my dreams.\nI deserve love and happiness.\nI am growing stronger every day.\nI trust in my ability to overcome challenges.\nI believe in myself and my potential.",
        "inspiration",
        "#4f46e5",
    ),
    (
        "Self-Care Ideas",
        "• Take a relaxing bath with essential oils\n• Write in a gratitude journal\n• Go for a peaceful walk in nature\n• Listen to your favorite music\n• Practice deep breathing exercises\n• Treat yourself to something special",
        "ideas",
        "#a8e6cf",
    ),
    (
        "Study Tips",
        "• Use the Pomodoro Technique (25 min study, 5 min break)\n• Create a dedicated study space\n• Break large tasks into smaller ones\n• Reward yourself after completing tasks\n• Stay hydrated and take regular breaks",
        "general",
        "#ffd93d",
    ),
    (
        "Mood Tracker",
        "Track your daily mood and notice patterns:\n\nToday I feel: ___________\nWhat made me happy: ___________\nWhat challenged me: ___________\nTomorrow I want to: ___________",
        "reminders",
        "#74b9ff",
    ),
];

/// Title, description and days from today to the target date.
const GOALS: [(&str, &str, u64); 3] = [
    (
        "Develop a consistent self-care routine",
        "Create and maintain daily habits that support physical and mental wellbeing.",
        30,
    ),
    (
        "Improve time management skills",
        "Learn to prioritize tasks effectively and create a balanced schedule.",
        60,
    ),
    (
        "Build confidence and self-esteem",
        "Practice positive self-talk and celebrate achievements, big and small.",
        90,
    ),
];

/// Fill `store` with the welcome content. Records are inserted last to first
/// so that lists show them in the order above.
pub async fn seed_defaults(store: &Store, today: NaiveDate) {
    for (title, description, priority, category) in TASKS.iter().rev() {
        store
            .tasks
            .insert(|id, created_at| Task {
                id,
                title: title.to_string(),
                description: Some(description.to_string()),
                priority: Priority::from(*priority),
                category: category.to_string(),
                completed: false,
                created_at,
            })
            .await;
    }

    for (title, content, category, color) in NOTES.iter().rev() {
        store
            .notes
            .insert(|id, created_at| Note {
                id,
                title: title.to_string(),
                content: Some(content.to_string()),
                category: category.to_string(),
                color: color.to_string(),
                created_at,
            })
            .await;
    }

    for (title, description, days) in GOALS.iter().rev() {
        store
            .goals
            .insert(|id, created_at| Goal {
                id,
                title: title.to_string(),
                description: Some(description.to_string()),
                target_date: today.checked_add_days(Days::new(*days)),
                progress: 0,
                status: GoalStatus::Active,
                created_at,
            })
            .await;
    }

    tracing::info!(
        "Seeded {} tasks, {} notes and {} goals",
        TASKS.len(),
        NOTES.len(),
        GOALS.len()
    );
}
