use parking_lot::Mutex;
use std::collections::{HashMap, HashSet};

use crate::components::{Card, ListView};
use crate::dashboard::FormFields;
use crate::layout::{RecordKind, Section, StatField};

/// The document the controller draws into.
///
/// Implementations only display what they are given; every decision about
/// what to show is taken by [`crate::Dashboard`].
pub trait Page: Send + Sync {
    /// Whether the page has an element for `section`.
    fn has_section(&self, section: Section) -> bool;

    /// Make `section` the only active section.
    fn activate_section(&self, section: Section);

    /// Replace the content of the list container of `view.kind`.
    fn render_list(&self, view: &ListView);

    fn set_stat(&self, field: StatField, value: &str);

    /// Open the modal of `kind` with `heading` and the given field values.
    fn show_modal(&self, kind: RecordKind, heading: &str, fields: &FormFields);

    fn hide_modal(&self, kind: RecordKind);

    /// Restore the form of `kind` to its blank values and set its heading.
    fn reset_form(&self, kind: RecordKind, heading: &str);
}

/// Everything a [`MemoryPage`] was asked to do, in order.
#[derive(Debug, Clone, PartialEq)]
pub enum PageEvent {
    SectionActivated(Section),
    ListRendered { kind: RecordKind, cards: usize },
    StatSet { field: StatField, value: String },
    ModalShown { kind: RecordKind, heading: String },
    ModalHidden(RecordKind),
    FormReset { kind: RecordKind, heading: String },
}

/// Current state of one modal.
#[derive(Debug, Clone, PartialEq)]
pub struct ModalView {
    pub open: bool,
    pub heading: String,
    pub fields: Option<FormFields>,
}

#[derive(Debug, Default)]
struct MemoryState {
    active_section: Option<Section>,
    lists: HashMap<RecordKind, ListView>,
    stats: HashMap<StatField, String>,
    modals: HashMap<RecordKind, ModalView>,
    events: Vec<PageEvent>,
}

/// In-memory [`Page`] used by the terminal client and the tests.
#[derive(Debug)]
pub struct MemoryPage {
    sections: HashSet<Section>,
    state: Mutex<MemoryState>,
}

impl MemoryPage {
    /// A page with all four sections.
    pub fn new() -> Self {
        Self::with_sections(Section::ALL)
    }

    pub fn with_sections(sections: impl IntoIterator<Item = Section>) -> Self {
        Self {
            sections: sections.into_iter().collect(),
            state: Mutex::new(MemoryState::default()),
        }
    }

    pub fn active_section(&self) -> Option<Section> {
        self.state.lock().active_section
    }

    pub fn list(&self, kind: RecordKind) -> Option<ListView> {
        self.state.lock().lists.get(&kind).cloned()
    }

    /// Cards currently shown for `kind`; empty when nothing or a placeholder is shown.
    pub fn cards(&self, kind: RecordKind) -> Vec<Card> {
        self.list(kind)
            .map(|view| view.cards().to_vec())
            .unwrap_or_default()
    }

    pub fn stat(&self, field: StatField) -> Option<String> {
        self.state.lock().stats.get(&field).cloned()
    }

    pub fn modal(&self, kind: RecordKind) -> Option<ModalView> {
        self.state.lock().modals.get(&kind).cloned()
    }

    pub fn events(&self) -> Vec<PageEvent> {
        self.state.lock().events.clone()
    }

    pub fn count(&self, pred: impl Fn(&PageEvent) -> bool) -> usize {
        self.state.lock().events.iter().filter(|event| pred(event)).count()
    }

    pub fn clear_events(&self) {
        self.state.lock().events.clear();
    }
}

impl Default for MemoryPage {
    fn default() -> Self {
        Self::new()
    }
}

impl Page for MemoryPage {
    fn has_section(&self, section: Section) -> bool {
        self.sections.contains(&section)
    }

    fn activate_section(&self, section: Section) {
        let mut state = self.state.lock();
        state.active_section = Some(section);
        state.events.push(PageEvent::SectionActivated(section));
    }

    fn render_list(&self, view: &ListView) {
        let mut state = self.state.lock();
        state.events.push(PageEvent::ListRendered {
            kind: view.kind,
            cards: view.cards().len(),
        });
        state.lists.insert(view.kind, view.clone());
    }

    fn set_stat(&self, field: StatField, value: &str) {
        let mut state = self.state.lock();
        state.stats.insert(field, value.to_string());
        state.events.push(PageEvent::StatSet {
            field,
            value: value.to_string(),
        });
    }

    fn show_modal(&self, kind: RecordKind, heading: &str, fields: &FormFields) {
        let mut state = self.state.lock();
        state.modals.insert(
            kind,
            ModalView {
                open: true,
                heading: heading.to_string(),
                fields: Some(fields.clone()),
            },
        );
        state.events.push(PageEvent::ModalShown {
            kind,
            heading: heading.to_string(),
        });
    }

    fn hide_modal(&self, kind: RecordKind) {
        let mut state = self.state.lock();
        if let Some(modal) = state.modals.get_mut(&kind) {
            modal.open = false;
        }
        state.events.push(PageEvent::ModalHidden(kind));
    }

    fn reset_form(&self, kind: RecordKind, heading: &str) {
        let mut state = self.state.lock();
        let modal = state.modals.entry(kind).or_insert_with(|| ModalView {
            open: false,
            heading: String::new(),
            fields: None,
        });
        modal.heading = heading.to_string();
        modal.fields = None;
        state.events.push(PageEvent::FormReset {
            kind,
            heading: heading.to_string(),
        });
    }
}
