use askama::Template;
use common::Note;

use super::{render_markup, Card, ListView};
use crate::layout::RecordKind;
use crate::ui::date::format_timestamp;

#[derive(Template)]
#[template(
    source = r#"<div class="note-card" data-id="{{ id }}" style="border-left-color: {{ color }}">
    <div class="note-header">
        <h3 class="note-title">{{ title }}</h3>
        <div class="note-actions">
            <button class="btn-icon" data-action="edit" data-id="{{ id }}"><i class="fas fa-edit"></i></button>
            <button class="btn-icon" data-action="delete" data-id="{{ id }}"><i class="fas fa-trash"></i></button>
        </div>
    </div>
    <div class="note-content">
        <p>{{ content }}</p>
    </div>
    <div class="note-meta">
        <span class="note-category">{{ category }}</span>
        <span class="note-date">{{ created }}</span>
    </div>
</div>"#,
    ext = "html"
)]
struct NoteCardTemplate<'a> {
    id: i64,
    color: &'a str,
    title: &'a str,
    content: &'a str,
    category: &'a str,
    created: &'a str,
}

pub fn card(note: &Note, date_format: &str) -> Card {
    let created = format_timestamp(&note.created_at, date_format);
    let markup = render_markup(&NoteCardTemplate {
        id: note.id,
        color: &note.color,
        title: &note.title,
        content: note.content.as_deref().unwrap_or_default(),
        category: &note.category,
        created: &created,
    });

    Card {
        record_id: note.id,
        class_name: "note-card".to_string(),
        title: note.title.clone(),
        markup,
    }
}

pub fn render(notes: &[Note], date_format: &str) -> ListView {
    tracing::trace!("Rendering {} note cards", notes.len());
    ListView::from_cards(
        RecordKind::Note,
        notes.iter().map(|note| card(note, date_format)).collect(),
    )
}
