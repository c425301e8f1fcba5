use common::RecordId;
use std::future::Future;

use super::Dashboard;
use super::forms::{FormError, FormState};
use crate::api_client::{ApiResult, DashboardApi};
use crate::layout::RecordKind;
use crate::settings::GoalProgressOnEdit;
use crate::ui::Page;

/// A write against one record collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mutation {
    Add,
    Update,
    Delete,
    Toggle,
}

impl Mutation {
    pub fn success_message(self, kind: RecordKind) -> String {
        match self {
            Mutation::Add => format!("{} added successfully!", kind.title()),
            Mutation::Update => format!("{} updated successfully!", kind.title()),
            Mutation::Delete => format!("{} deleted successfully!", kind.title()),
            Mutation::Toggle => format!("{} status updated!", kind.title()),
        }
    }

    pub fn error_message(self, kind: RecordKind) -> String {
        let verb = match self {
            Mutation::Add => "adding",
            Mutation::Update => "updating",
            Mutation::Delete => "deleting",
            Mutation::Toggle => "toggling",
        };
        format!("Error {} {}", verb, kind.label())
    }
}

/// What became of a submitted write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MutationOutcome {
    /// The server accepted it; the collection and stats were reloaded.
    Applied,
    /// The request failed; nothing changed besides an error notification.
    Failed,
    /// The form did not pass local checks; no request was made.
    Rejected(FormError),
    /// The dashboard was torn down.
    Ignored,
}

impl<A: DashboardApi, P: Page> Dashboard<A, P> {
    /// Run one write and apply its consequences.
    async fn mutate<F>(&self, kind: RecordKind, mutation: Mutation, op: F) -> MutationOutcome
    where
        F: Future<Output = ApiResult<()>>,
    {
        if self.is_torn_down() {
            return MutationOutcome::Ignored;
        }

        let result = self.request(op).await;
        if self.is_torn_down() {
            tracing::debug!("Dropping {:?} {} result after teardown", mutation, kind);
            return MutationOutcome::Ignored;
        }

        match result {
            Ok(()) => {
                self.notifications.success(mutation.success_message(kind));
                self.hide_and_reset(kind);
                self.reload(kind).await;
                self.load_dashboard_stats().await;
                MutationOutcome::Applied
            }
            Err(e) => {
                tracing::error!("{:?} {} failed: {}", mutation, kind, e);
                self.notifications.error(mutation.error_message(kind));
                MutationOutcome::Failed
            }
        }
    }

    /// Submit the task form: POST in create mode, PUT in edit mode.
    pub async fn submit_task_form(&self) -> MutationOutcome {
        let (state, form) = {
            let state = self.state.lock();
            (state.forms.task.state, state.forms.task.fields.clone())
        };
        let payload = match form.to_payload() {
            Ok(payload) => payload,
            Err(e) => return self.reject(RecordKind::Task, e),
        };

        match state {
            FormState::Create => {
                let op = async { self.api.create_task(&payload).await.map(|_| ()) };
                self.mutate(RecordKind::Task, Mutation::Add, op).await
            }
            FormState::Edit(id) => {
                let op = self.api.update_task(id, &payload);
                self.mutate(RecordKind::Task, Mutation::Update, op).await
            }
        }
    }

    pub async fn submit_note_form(&self) -> MutationOutcome {
        let (state, form) = {
            let state = self.state.lock();
            (state.forms.note.state, state.forms.note.fields.clone())
        };
        let payload = match form.to_payload() {
            Ok(payload) => payload,
            Err(e) => return self.reject(RecordKind::Note, e),
        };

        match state {
            FormState::Create => {
                let op = async { self.api.create_note(&payload).await.map(|_| ()) };
                self.mutate(RecordKind::Note, Mutation::Add, op).await
            }
            FormState::Edit(id) => {
                let op = self.api.update_note(id, &payload);
                self.mutate(RecordKind::Note, Mutation::Update, op).await
            }
        }
    }

    /// Submit the goal form. An edit sends the progress chosen by
    /// [`GoalProgressOnEdit`].
    pub async fn submit_goal_form(&self) -> MutationOutcome {
        let (state, form, cached_progress) = {
            let state = self.state.lock();
            let cached_progress = match state.forms.goal.state {
                FormState::Edit(id) => state.goals.iter().find(|goal| goal.id == id).map(|goal| goal.progress),
                FormState::Create => None,
            };
            (state.forms.goal.state, state.forms.goal.fields.clone(), cached_progress)
        };

        match state {
            FormState::Create => {
                let payload = match form.to_new_goal() {
                    Ok(payload) => payload,
                    Err(e) => return self.reject(RecordKind::Goal, e),
                };
                let op = async { self.api.create_goal(&payload).await.map(|_| ()) };
                self.mutate(RecordKind::Goal, Mutation::Add, op).await
            }
            FormState::Edit(id) => {
                let progress = match self.settings.goal_progress_on_edit {
                    GoalProgressOnEdit::Reset => 0,
                    GoalProgressOnEdit::Preserve => cached_progress.unwrap_or_default(),
                };
                let payload = match form.to_update(progress) {
                    Ok(payload) => payload,
                    Err(e) => return self.reject(RecordKind::Goal, e),
                };
                let op = self.api.update_goal(id, &payload);
                self.mutate(RecordKind::Goal, Mutation::Update, op).await
            }
        }
    }

    /// Submit whichever form belongs to `kind`.
    pub async fn submit(&self, kind: RecordKind) -> MutationOutcome {
        match kind {
            RecordKind::Task => self.submit_task_form().await,
            RecordKind::Note => self.submit_note_form().await,
            RecordKind::Goal => self.submit_goal_form().await,
        }
    }

    pub async fn toggle_task(&self, id: RecordId) -> MutationOutcome {
        let op = self.api.toggle_task(id);
        self.mutate(RecordKind::Task, Mutation::Toggle, op).await
    }

    pub async fn delete_task(&self, id: RecordId) -> MutationOutcome {
        let op = self.api.delete_task(id);
        self.mutate(RecordKind::Task, Mutation::Delete, op).await
    }

    pub async fn delete_note(&self, id: RecordId) -> MutationOutcome {
        let op = self.api.delete_note(id);
        self.mutate(RecordKind::Note, Mutation::Delete, op).await
    }

    pub async fn delete_goal(&self, id: RecordId) -> MutationOutcome {
        let op = self.api.delete_goal(id);
        self.mutate(RecordKind::Goal, Mutation::Delete, op).await
    }

    pub async fn delete(&self, kind: RecordKind, id: RecordId) -> MutationOutcome {
        match kind {
            RecordKind::Task => self.delete_task(id).await,
            RecordKind::Note => self.delete_note(id).await,
            RecordKind::Goal => self.delete_goal(id).await,
        }
    }

    fn reject(&self, kind: RecordKind, error: FormError) -> MutationOutcome {
        tracing::debug!("Not submitting {} form: {}", kind, error);
        MutationOutcome::Rejected(error)
    }
}
