//! The dashboard controller.
//!
//! A [`Dashboard`] owns the cached collections, the current section and the
//! state of the three modal forms. Reads are mirrored into the caches and
//! rendered onto a [`Page`]; writes go through [`mutations`] and always end
//! with a reload of the affected collection followed by the stats.

pub mod forms;
pub mod mutations;
pub mod sync;

pub use forms::{FormError, FormFields, FormState, GoalForm, NoteForm, TaskForm};
pub use mutations::{Mutation, MutationOutcome};

use common::{DashboardStats, Goal, Note, RecordId, Task};
use parking_lot::Mutex;
use std::future::Future;

use crate::api_client::{ApiError, ApiResult, DashboardApi};
use crate::components::stats::stat_values;
use crate::layout::{RecordKind, Section};
use crate::settings::AppSettings;
use crate::ui::{NotificationCenter, Page};
use forms::{heading, Forms, Modal};
use sync::{Cached, Channel, SyncTracker, Ticket};

#[derive(Debug, Default)]
pub(crate) struct DashboardState {
    section: Section,
    pub(crate) tasks: Vec<Task>,
    pub(crate) notes: Vec<Note>,
    pub(crate) goals: Vec<Goal>,
    stats: Option<DashboardStats>,
    forms: Forms,
    tickets: SyncTracker,
    torn_down: bool,
}

pub struct Dashboard<A, P> {
    api: A,
    page: P,
    settings: AppSettings,
    notifications: NotificationCenter,
    state: Mutex<DashboardState>,
}

impl<A: DashboardApi, P: Page> Dashboard<A, P> {
    pub fn new(api: A, page: P, settings: AppSettings) -> Self {
        let notifications = NotificationCenter::new(settings.notification_timings());
        Self {
            api,
            page,
            settings,
            notifications,
            state: Mutex::new(DashboardState::default()),
        }
    }

    /// Initial page load: every collection plus the stats.
    pub async fn start(&self) {
        tracing::info!("Starting dashboard against {}", self.settings.api_base_url);
        self.load_all().await;
    }

    /// Stop applying responses and drop all notifications.
    pub fn teardown(&self) {
        tracing::info!("Tearing down dashboard");
        self.state.lock().torn_down = true;
        self.notifications.clear();
    }

    pub fn is_torn_down(&self) -> bool {
        self.state.lock().torn_down
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn page(&self) -> &P {
        &self.page
    }

    pub fn settings(&self) -> &AppSettings {
        &self.settings
    }

    pub fn notifications(&self) -> &NotificationCenter {
        &self.notifications
    }

    pub fn current_section(&self) -> Section {
        self.state.lock().section
    }

    pub fn tasks(&self) -> Vec<Task> {
        self.state.lock().tasks.clone()
    }

    pub fn notes(&self) -> Vec<Note> {
        self.state.lock().notes.clone()
    }

    pub fn goals(&self) -> Vec<Goal> {
        self.state.lock().goals.clone()
    }

    /// Stats last written to the page, if any load succeeded.
    pub fn stats(&self) -> Option<DashboardStats> {
        self.state.lock().stats
    }

    // ===================== Navigation =====================

    /// Switch to `section` and load its data. Returns `false` without any
    /// change when the page has no such section.
    pub async fn navigate(&self, section: Section) -> bool {
        if !self.page.has_section(section) {
            tracing::debug!("Page has no {} section", section);
            return false;
        }

        tracing::debug!("Navigating to {}", section);
        self.page.activate_section(section);
        self.state.lock().section = section;

        match section {
            Section::Overview => self.load_dashboard_stats().await,
            Section::Tasks => self.load_tasks().await,
            Section::Notes => self.load_notes().await,
            Section::Goals => self.load_goals().await,
        };
        true
    }

    /// Open the create modal that fits the current section.
    pub fn show_add_modal(&self) {
        let kind = self.current_section().record_kind().unwrap_or(RecordKind::Task);
        self.open_create_modal(kind);
    }

    // ===================== Data sync =====================

    pub async fn load_tasks(&self) -> bool {
        self.load::<Task>().await
    }

    pub async fn load_notes(&self) -> bool {
        self.load::<Note>().await
    }

    pub async fn load_goals(&self) -> bool {
        self.load::<Goal>().await
    }

    pub async fn load_all(&self) {
        self.load_tasks().await;
        self.load_notes().await;
        self.load_goals().await;
        self.load_dashboard_stats().await;
    }

    pub(crate) async fn reload(&self, kind: RecordKind) -> bool {
        match kind {
            RecordKind::Task => self.load_tasks().await,
            RecordKind::Note => self.load_notes().await,
            RecordKind::Goal => self.load_goals().await,
        }
    }

    /// Fetch all three collections concurrently and write the derived
    /// numbers. Any failed fetch leaves the previous stats on the page.
    pub async fn load_dashboard_stats(&self) -> bool {
        let Some(ticket) = self.issue(Channel::Stats) else {
            return false;
        };

        let (tasks, notes, goals) = tokio::join!(
            self.request(self.api.list_tasks()),
            self.request(self.api.list_notes()),
            self.request(self.api.list_goals()),
        );

        let stats = match (tasks, notes, goals) {
            (Ok(tasks), Ok(notes), Ok(goals)) => DashboardStats::compute(&tasks, &notes, &goals),
            (tasks, notes, goals) => {
                let errors = [tasks.err(), notes.err(), goals.err()];
                for e in errors.iter().flatten() {
                    tracing::error!("Error loading dashboard stats: {}", e);
                }
                return false;
            }
        };

        {
            let mut state = self.state.lock();
            if state.torn_down || !state.tickets.accept(ticket) {
                tracing::debug!("Discarding stale stats (ticket {})", ticket.seq);
                return false;
            }
            state.stats = Some(stats);
        }

        for (field, value) in stat_values(&stats) {
            self.page.set_stat(field, &value);
        }
        true
    }

    async fn load<R: Cached>(&self) -> bool {
        let Some(ticket) = self.issue(R::CHANNEL) else {
            return false;
        };

        match self.request(R::fetch(&self.api)).await {
            Ok(records) => self.apply_collection(ticket, records),
            Err(e) => {
                tracing::error!("Error loading {}: {}", R::KIND.collection(), e);
                false
            }
        }
    }

    /// Replace the cache of `R` and render it, unless a newer load won.
    fn apply_collection<R: Cached>(&self, ticket: Ticket, records: Vec<R>) -> bool {
        let view = {
            let mut state = self.state.lock();
            if state.torn_down || !state.tickets.accept(ticket) {
                tracing::debug!("Discarding stale {} response (ticket {})", R::KIND.collection(), ticket.seq);
                return false;
            }
            let view = R::render(&records, &self.settings.date_format);
            *R::cache(&mut state) = records;
            view
        };

        self.page.render_list(&view);
        true
    }

    fn issue(&self, channel: Channel) -> Option<Ticket> {
        let mut state = self.state.lock();
        if state.torn_down {
            return None;
        }
        Some(state.tickets.issue(channel))
    }

    /// Bound `op` by the request timeout.
    pub(crate) async fn request<T>(&self, op: impl Future<Output = ApiResult<T>>) -> ApiResult<T> {
        let timeout = self.settings.request_timeout();
        tokio::time::timeout(timeout, op)
            .await
            .unwrap_or(Err(ApiError::Timeout(timeout)))
    }

    // ===================== Forms =====================

    /// Open the modal of `kind` for a new record.
    pub fn open_create_modal(&self, kind: RecordKind) {
        let fields = {
            let mut state = self.state.lock();
            if state.forms.state(kind) != FormState::Create {
                state.forms.reset(kind);
            }
            state.forms.set_open(kind, true);
            state.forms.fields(kind)
        };
        self.page.show_modal(kind, &heading(kind, FormState::Create), &fields);
    }

    /// Load task `id` from the cache into the form. Does nothing for ids
    /// that are not cached.
    pub fn edit_task(&self, id: RecordId) -> bool {
        let fields = {
            let mut state = self.state.lock();
            let Some(task) = state.tasks.iter().find(|task| task.id == id) else {
                tracing::debug!("Task {} is not cached, ignoring edit", id);
                return false;
            };
            let form = TaskForm::from_task(task);
            state.forms.task = Modal {
                open: true,
                state: FormState::Edit(id),
                fields: form.clone(),
            };
            FormFields::Task(form)
        };
        self.show_edit_modal(RecordKind::Task, id, &fields);
        true
    }

    pub fn edit_note(&self, id: RecordId) -> bool {
        let fields = {
            let mut state = self.state.lock();
            let Some(note) = state.notes.iter().find(|note| note.id == id) else {
                tracing::debug!("Note {} is not cached, ignoring edit", id);
                return false;
            };
            let form = NoteForm::from_note(note);
            state.forms.note = Modal {
                open: true,
                state: FormState::Edit(id),
                fields: form.clone(),
            };
            FormFields::Note(form)
        };
        self.show_edit_modal(RecordKind::Note, id, &fields);
        true
    }

    pub fn edit_goal(&self, id: RecordId) -> bool {
        let fields = {
            let mut state = self.state.lock();
            let Some(goal) = state.goals.iter().find(|goal| goal.id == id) else {
                tracing::debug!("Goal {} is not cached, ignoring edit", id);
                return false;
            };
            let form = GoalForm::from_goal(goal);
            state.forms.goal = Modal {
                open: true,
                state: FormState::Edit(id),
                fields: form.clone(),
            };
            FormFields::Goal(form)
        };
        self.show_edit_modal(RecordKind::Goal, id, &fields);
        true
    }

    pub fn edit(&self, kind: RecordKind, id: RecordId) -> bool {
        match kind {
            RecordKind::Task => self.edit_task(id),
            RecordKind::Note => self.edit_note(id),
            RecordKind::Goal => self.edit_goal(id),
        }
    }

    fn show_edit_modal(&self, kind: RecordKind, id: RecordId, fields: &FormFields) {
        tracing::debug!("Editing {} {}", kind, id);
        self.page.show_modal(kind, &heading(kind, FormState::Edit(id)), fields);
    }

    /// Replace what is typed into the task form, keeping its mode.
    pub fn fill_task_form(&self, form: TaskForm) {
        self.state.lock().forms.task.fields = form;
    }

    pub fn fill_note_form(&self, form: NoteForm) {
        self.state.lock().forms.note.fields = form;
    }

    pub fn fill_goal_form(&self, form: GoalForm) {
        self.state.lock().forms.goal.fields = form;
    }

    pub fn task_form(&self) -> TaskForm {
        self.state.lock().forms.task.fields.clone()
    }

    pub fn note_form(&self) -> NoteForm {
        self.state.lock().forms.note.fields.clone()
    }

    pub fn goal_form(&self) -> GoalForm {
        self.state.lock().forms.goal.fields.clone()
    }

    pub fn form_state(&self, kind: RecordKind) -> FormState {
        self.state.lock().forms.state(kind)
    }

    pub fn form_fields(&self, kind: RecordKind) -> FormFields {
        self.state.lock().forms.fields(kind)
    }

    pub fn is_modal_open(&self, kind: RecordKind) -> bool {
        self.state.lock().forms.is_open(kind)
    }

    /// Close button of the modal.
    pub fn close_modal(&self, kind: RecordKind) {
        self.hide_and_reset(kind);
    }

    /// Click outside the modal content.
    pub fn dismiss_modal(&self, kind: RecordKind) {
        self.hide_and_reset(kind);
    }

    pub(crate) fn hide_and_reset(&self, kind: RecordKind) {
        self.state.lock().forms.reset(kind);
        self.page.hide_modal(kind);
        self.page.reset_form(kind, &heading(kind, FormState::Create));
    }
}

#[cfg(test)]
mod tests;
