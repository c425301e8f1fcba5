use askama::Template;
use common::Task;

use super::{render_markup, Card, ListView};
use crate::layout::RecordKind;
use crate::ui::date::format_timestamp;

#[derive(Template)]
#[template(
    source = r#"<div class="{{ class_name }}" data-id="{{ id }}">
    <div class="task-header">
        <div class="task-checkbox">
            <input type="checkbox"{% if completed %} checked{% endif %} data-action="toggle" data-id="{{ id }}">
        </div>
        <div class="task-priority priority-{{ priority }}"></div>
        <div class="task-actions">
            <button class="btn-icon" data-action="edit" data-id="{{ id }}"><i class="fas fa-edit"></i></button>
            <button class="btn-icon" data-action="delete" data-id="{{ id }}"><i class="fas fa-trash"></i></button>
        </div>
    </div>
    <div class="task-content">
        <h3 class="task-title">{{ title }}</h3>
        <p class="task-description">{{ description }}</p>
        <div class="task-meta">
            <span class="task-category">{{ category }}</span>
            <span class="task-date">{{ created }}</span>
        </div>
    </div>
</div>"#,
    ext = "html"
)]
struct TaskCardTemplate<'a> {
    id: i64,
    class_name: &'a str,
    priority: &'a str,
    completed: bool,
    title: &'a str,
    description: &'a str,
    category: &'a str,
    created: &'a str,
}

pub fn class_name(task: &Task) -> String {
    let mut class_name = format!("task-card priority-{}", task.priority);
    if task.completed {
        class_name.push_str(" completed");
    }
    class_name
}

pub fn card(task: &Task, date_format: &str) -> Card {
    let class_name = class_name(task);
    let created = format_timestamp(&task.created_at, date_format);
    let markup = render_markup(&TaskCardTemplate {
        id: task.id,
        class_name: &class_name,
        priority: task.priority.as_str(),
        completed: task.completed,
        title: &task.title,
        description: task.description.as_deref().unwrap_or_default(),
        category: &task.category,
        created: &created,
    });

    Card {
        record_id: task.id,
        class_name,
        title: task.title.clone(),
        markup,
    }
}

pub fn render(tasks: &[Task], date_format: &str) -> ListView {
    tracing::trace!("Rendering {} task cards", tasks.len());
    ListView::from_cards(
        RecordKind::Task,
        tasks.iter().map(|task| card(task, date_format)).collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use common::Priority;

    fn task(id: i64, title: &str, priority: Priority, completed: bool) -> Task {
        Task {
            id,
            title: title.to_string(),
            description: None,
            priority,
            category: "errand".to_string(),
            completed,
            created_at: NaiveDate::from_ymd_opt(2025, 1, 5)
                .and_then(|d| d.and_hms_opt(9, 30, 0))
                .unwrap(),
        }
    }

    #[test]
    fn cards_follow_input_order() {
        let tasks = vec![
            task(3, "Buy milk", Priority::Low, false),
            task(1, "Plan week", Priority::High, true),
        ];
        let view = render(&tasks, "%Y-%m-%d");
        let ids: Vec<i64> = view.cards().iter().map(|card| card.record_id).collect();
        assert_eq!(ids, vec![3, 1]);
    }

    #[test]
    fn completed_task_gets_modifier_and_checked_box() {
        let card = card(&task(7, "Read", Priority::High, true), "%Y-%m-%d");
        assert_eq!(card.class_name, "task-card priority-high completed");
        assert!(card.markup.contains(" checked "));
        assert!(card.markup.contains("2025-01-05"));

        let open = super::card(&task(8, "Read", Priority::Low, false), "%Y-%m-%d");
        assert!(!open.has_class("completed"));
        assert!(!open.markup.contains(" checked "));
    }

    #[test]
    fn missing_description_renders_blank_and_text_is_escaped() {
        let card = card(&task(2, "<b>bold</b>", Priority::Other("urgent".into()), false), "%Y");
        assert!(card.markup.contains(r#"<p class="task-description"></p>"#));
        assert!(card.markup.contains("&lt;b&gt;bold"));
        assert!(card.has_class("priority-urgent"));
        assert_eq!(card.title, "<b>bold</b>");
    }

    #[test]
    fn empty_task_list_renders_placeholder() {
        let view = render(&[], "%Y");
        assert!(view.is_empty_state());
        assert!(view.to_html().contains("No tasks yet. Add your first task!"));
    }
}
