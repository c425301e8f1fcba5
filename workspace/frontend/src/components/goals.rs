use askama::Template;
use common::Goal;

use super::{render_markup, Card, ListView};
use crate::layout::RecordKind;
use crate::ui::date::format_date;

#[derive(Template)]
#[template(
    source = r#"<div class="{{ class_name }}" data-id="{{ id }}">
    <div class="goal-header">
        <h3 class="goal-title">{{ title }}</h3>
        <div class="goal-actions">
            <button class="btn-icon" data-action="edit" data-id="{{ id }}"><i class="fas fa-edit"></i></button>
            <button class="btn-icon" data-action="delete" data-id="{{ id }}"><i class="fas fa-trash"></i></button>
        </div>
    </div>
    <div class="goal-content">
        <p>{{ description }}</p>
        <div class="goal-progress">
            <div class="progress-bar">
                <div class="progress-fill" style="width: {{ width }}%"></div>
            </div>
            <span class="progress-text">{{ progress }}%</span>
        </div>
    </div>
    <div class="goal-meta">
        <span class="goal-date">Target: {{ target }}</span>
        <span class="goal-status">{{ status }}</span>
    </div>
</div>"#,
    ext = "html"
)]
struct GoalCardTemplate<'a> {
    id: i64,
    class_name: &'a str,
    title: &'a str,
    description: &'a str,
    width: i32,
    progress: i32,
    target: &'a str,
    status: &'a str,
}

pub fn card(goal: &Goal, date_format: &str) -> Card {
    let class_name = format!("goal-card status-{}", goal.status);
    let target = format_date(goal.target_date, date_format);
    let markup = render_markup(&GoalCardTemplate {
        id: goal.id,
        class_name: &class_name,
        title: &goal.title,
        description: goal.description.as_deref().unwrap_or_default(),
        width: goal.progress.clamp(0, 100),
        progress: goal.progress,
        target: &target,
        status: goal.status.as_str(),
    });

    Card {
        record_id: goal.id,
        class_name,
        title: goal.title.clone(),
        markup,
    }
}

pub fn render(goals: &[Goal], date_format: &str) -> ListView {
    tracing::trace!("Rendering {} goal cards", goals.len());
    ListView::from_cards(
        RecordKind::Goal,
        goals.iter().map(|goal| card(goal, date_format)).collect(),
    )
}
