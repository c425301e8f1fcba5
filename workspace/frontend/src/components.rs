//! Record-to-card rendering. Every function here is pure: the same records
//! and date format always produce the same [`ListView`].

pub mod goals;
pub mod notes;
pub mod stats;
pub mod tasks;

use askama::Template;
use common::RecordId;

use crate::layout::RecordKind;

/// One rendered record.
#[derive(Debug, Clone, PartialEq)]
pub struct Card {
    pub record_id: RecordId,
    pub class_name: String,
    pub title: String,
    /// Full card element, escaped.
    pub markup: String,
}

impl Card {
    pub fn has_class(&self, class: &str) -> bool {
        self.class_name.split_whitespace().any(|name| name == class)
    }
}

/// Placeholder shown instead of cards for an empty collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    pub icon: &'static str,
    pub message: &'static str,
}

impl EmptyState {
    pub fn for_kind(kind: RecordKind) -> Self {
        match kind {
            RecordKind::Task => Self {
                icon: "fas fa-tasks",
                message: "No tasks yet. Add your first task!",
            },
            RecordKind::Note => Self {
                icon: "fas fa-sticky-note",
                message: "No notes yet. Add your first note!",
            },
            RecordKind::Goal => Self {
                icon: "fas fa-bullseye",
                message: "No goals yet. Set your first goal!",
            },
        }
    }

    pub fn to_html(&self) -> String {
        render_markup(&EmptyStateTemplate {
            icon: self.icon,
            message: self.message,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ListContent {
    Empty(EmptyState),
    Cards(Vec<Card>),
}

/// Content of one list container.
#[derive(Debug, Clone, PartialEq)]
pub struct ListView {
    pub kind: RecordKind,
    pub content: ListContent,
}

impl ListView {
    /// Empty placeholder for no cards, otherwise the cards in the given order.
    pub fn from_cards(kind: RecordKind, cards: Vec<Card>) -> Self {
        let content = if cards.is_empty() {
            ListContent::Empty(EmptyState::for_kind(kind))
        } else {
            ListContent::Cards(cards)
        };
        Self { kind, content }
    }

    pub fn cards(&self) -> &[Card] {
        match &self.content {
            ListContent::Cards(cards) => cards,
            ListContent::Empty(_) => &[],
        }
    }

    pub fn is_empty_state(&self) -> bool {
        matches!(self.content, ListContent::Empty(_))
    }

    pub fn container_id(&self) -> &'static str {
        self.kind.container_id()
    }

    /// Inner HTML of the container.
    pub fn to_html(&self) -> String {
        match &self.content {
            ListContent::Empty(empty) => empty.to_html(),
            ListContent::Cards(cards) => cards.iter().map(|card| card.markup.as_str()).collect(),
        }
    }
}

#[derive(Template)]
#[template(
    source = r#"<div class="empty-state"><i class="{{ icon }}"></i><p>{{ message }}</p></div>"#,
    ext = "html"
)]
struct EmptyStateTemplate<'a> {
    icon: &'a str,
    message: &'a str,
}

/// Render a template, logging and yielding an empty string on failure.
pub(crate) fn render_markup<T: Template>(template: &T) -> String {
    template.render().unwrap_or_else(|e| {
        tracing::error!("Failed to render card markup: {}", e);
        String::new()
    })
}
