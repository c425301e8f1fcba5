//! A [`Page`] that keeps the dashboard as HTML, element by element, the way
//! the browser document holds it: list containers by grid id, stats by
//! counter id and modals by dialog id.

use askama::Template;
use parking_lot::Mutex;
use std::collections::HashMap;

use crate::components::{render_markup, ListView};
use crate::dashboard::FormFields;
use crate::layout::{RecordKind, Section, StatField};
use crate::ui::page::Page;

#[derive(Debug, Clone, Default)]
struct Dialog {
    open: bool,
    heading: String,
    title: String,
}

#[derive(Debug, Default)]
struct DocumentState {
    active_section: Section,
    containers: HashMap<&'static str, String>,
    counters: HashMap<&'static str, String>,
    dialogs: HashMap<&'static str, Dialog>,
}

/// Page backed by rendered markup. `to_html` serializes the whole document.
#[derive(Debug, Default)]
pub struct HtmlPage {
    state: Mutex<DocumentState>,
}

struct SectionElement {
    id: String,
    class_name: &'static str,
    overview: bool,
    container_id: &'static str,
    inner_html: String,
}

struct CounterElement {
    id: &'static str,
    label: &'static str,
    text: String,
}

struct DialogElement {
    id: &'static str,
    display: &'static str,
    heading: String,
    title: String,
}

#[derive(Template)]
#[template(
    source = r#"<main class="main-content">
{% for section in sections %}<section id="{{ section.id }}" class="{{ section.class_name }}">
{% if section.overview %}<div class="stats-grid">
{% for counter in counters %}<div class="stat-card"><h3 id="{{ counter.id }}">{{ counter.text }}</h3><p>{{ counter.label }}</p></div>
{% endfor %}</div>
{% else %}<div id="{{ section.container_id }}" class="cards-grid">{{ section.inner_html|safe }}</div>
{% endif %}</section>
{% endfor %}</main>
{% for dialog in dialogs %}<div id="{{ dialog.id }}" class="modal" style="display: {{ dialog.display }}"><div class="modal-content"><h3>{{ dialog.heading }}</h3><input name="title" value="{{ dialog.title }}"></div></div>
{% endfor %}"#,
    ext = "html"
)]
struct DocumentTemplate {
    sections: Vec<SectionElement>,
    counters: Vec<CounterElement>,
    dialogs: Vec<DialogElement>,
}

impl HtmlPage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inner HTML of a list container such as `tasks-grid`.
    pub fn inner_html(&self, container_id: &str) -> Option<String> {
        self.state.lock().containers.get(container_id).cloned()
    }

    /// Text of a stat counter such as `tasks-count`.
    pub fn text(&self, element_id: &str) -> Option<String> {
        self.state.lock().counters.get(element_id).cloned()
    }

    /// Whether the dialog with `modal_id` is displayed.
    pub fn is_displayed(&self, modal_id: &str) -> bool {
        self.state
            .lock()
            .dialogs
            .get(modal_id)
            .is_some_and(|dialog| dialog.open)
    }

    pub fn to_html(&self) -> String {
        let state = self.state.lock();

        let sections = Section::ALL
            .into_iter()
            .map(|section| {
                let container_id = section.record_kind().map(RecordKind::container_id).unwrap_or_default();
                SectionElement {
                    id: section.element_id(),
                    class_name: if section == state.active_section {
                        "content-section active"
                    } else {
                        "content-section"
                    },
                    overview: section == Section::Overview,
                    container_id,
                    inner_html: state.containers.get(container_id).cloned().unwrap_or_default(),
                }
            })
            .collect();

        let counters = StatField::ALL
            .into_iter()
            .map(|field| CounterElement {
                id: field.element_id(),
                label: field.label(),
                text: state.counters.get(field.element_id()).cloned().unwrap_or_else(|| "0".to_string()),
            })
            .collect();

        let dialogs = RecordKind::ALL
            .into_iter()
            .map(|kind| {
                let dialog = state.dialogs.get(kind.modal_id()).cloned().unwrap_or_default();
                DialogElement {
                    id: kind.modal_id(),
                    display: if dialog.open { "block" } else { "none" },
                    heading: dialog.heading,
                    title: dialog.title,
                }
            })
            .collect();

        render_markup(&DocumentTemplate {
            sections,
            counters,
            dialogs,
        })
    }
}

impl Page for HtmlPage {
    fn has_section(&self, _section: Section) -> bool {
        true
    }

    fn activate_section(&self, section: Section) {
        self.state.lock().active_section = section;
    }

    fn render_list(&self, view: &ListView) {
        let html = view.to_html();
        self.state.lock().containers.insert(view.container_id(), html);
    }

    fn set_stat(&self, field: StatField, value: &str) {
        self.state.lock().counters.insert(field.element_id(), value.to_string());
    }

    fn show_modal(&self, kind: RecordKind, heading: &str, fields: &FormFields) {
        self.state.lock().dialogs.insert(
            kind.modal_id(),
            Dialog {
                open: true,
                heading: heading.to_string(),
                title: fields.title().to_string(),
            },
        );
    }

    fn hide_modal(&self, kind: RecordKind) {
        if let Some(dialog) = self.state.lock().dialogs.get_mut(kind.modal_id()) {
            dialog.open = false;
        }
    }

    fn reset_form(&self, kind: RecordKind, heading: &str) {
        let mut state = self.state.lock();
        let dialog = state.dialogs.entry(kind.modal_id()).or_default();
        dialog.heading = heading.to_string();
        dialog.title.clear();
    }
}
