use super::*;
use crate::layout::StatField;
use crate::settings::GoalProgressOnEdit;
use crate::test_utils::test_utils::*;
use crate::ui::{MemoryPage, NotificationKind, PageEvent};
use chrono::NaiveDate;
use common::{GoalStatus, GoalUpdate, Priority, TaskPayload};

fn seeded_api() -> MockApi {
    MockApi::with_records(
        vec![sample_task(7, "Plan week", false), sample_task(3, "Read a chapter", true)],
        vec![sample_note(5, "Study Tips")],
        vec![
            sample_goal(9, "Run a 5k", 40, GoalStatus::Active),
            sample_goal(10, "Learn chords", 100, GoalStatus::Completed),
        ],
    )
}

async fn started(api: MockApi) -> Dashboard<MockApi, MemoryPage> {
    let dashboard = dashboard(api);
    dashboard.start().await;
    dashboard.api().clear_calls();
    dashboard.page().clear_events();
    dashboard
}

fn stat(dashboard: &Dashboard<MockApi, MemoryPage>, field: StatField) -> String {
    dashboard.page().stat(field).unwrap_or_default()
}

fn notifications_of(dashboard: &Dashboard<MockApi, MemoryPage>, kind: NotificationKind) -> Vec<String> {
    dashboard
        .notifications()
        .active()
        .into_iter()
        .filter(|entry| entry.kind == kind)
        .map(|entry| entry.message)
        .collect()
}

/// How often the modal of `kind` was hidden and its form reset.
fn closes_and_resets(dashboard: &Dashboard<MockApi, MemoryPage>, kind: RecordKind) -> (usize, usize) {
    let page = dashboard.page();
    (
        page.count(|e| matches!(e, PageEvent::ModalHidden(k) if *k == kind)),
        page.count(|e| matches!(e, PageEvent::FormReset { kind: k, .. } if *k == kind)),
    )
}

// ===================== Startup and navigation =====================

#[tokio::test]
async fn start_loads_every_collection_and_the_stats() {
    let _guard = init_test_tracing();
    let dashboard = dashboard(seeded_api());
    dashboard.start().await;

    assert_eq!(dashboard.page().cards(RecordKind::Task).len(), 2);
    assert_eq!(dashboard.page().cards(RecordKind::Note).len(), 1);
    assert_eq!(dashboard.page().cards(RecordKind::Goal).len(), 2);
    assert_eq!(stat(&dashboard, StatField::PendingTasks), "1");
    assert_eq!(stat(&dashboard, StatField::TotalNotes), "1");
    assert_eq!(stat(&dashboard, StatField::ActiveGoals), "1");
    assert_eq!(stat(&dashboard, StatField::CompletionPercent), "50%");
    assert_eq!(dashboard.current_section(), Section::Overview);
}

#[tokio::test]
async fn empty_collections_render_placeholders_and_zero_stats() {
    let dashboard = dashboard(MockApi::new());
    dashboard.start().await;

    for kind in RecordKind::ALL {
        let view = dashboard.page().list(kind).unwrap();
        assert!(view.is_empty_state(), "{kind}");
        assert!(view.cards().is_empty());
    }
    assert_eq!(stat(&dashboard, StatField::PendingTasks), "0");
    assert_eq!(stat(&dashboard, StatField::CompletionPercent), "0%");
}

#[tokio::test]
async fn navigating_activates_the_section_and_loads_its_data() {
    let dashboard = started(seeded_api()).await;

    assert!(dashboard.navigate(Section::Notes).await);
    assert_eq!(dashboard.current_section(), Section::Notes);
    assert_eq!(dashboard.page().active_section(), Some(Section::Notes));
    assert_eq!(dashboard.api().calls(), vec![ApiCall::ListNotes]);
}

#[tokio::test]
async fn navigating_to_the_overview_refreshes_stats() {
    let dashboard = started(seeded_api()).await;

    assert!(dashboard.navigate(Section::Overview).await);
    assert_eq!(
        dashboard.api().calls(),
        vec![ApiCall::ListTasks, ApiCall::ListNotes, ApiCall::ListGoals]
    );
    assert_eq!(dashboard.page().count(|e| matches!(e, PageEvent::StatSet { .. })), 4);
}

#[tokio::test]
async fn navigating_to_a_missing_section_changes_nothing() {
    let page = MemoryPage::with_sections([Section::Overview, Section::Tasks]);
    let dashboard = Dashboard::new(seeded_api(), page, AppSettings::default());

    assert!(!dashboard.navigate(Section::Goals).await);
    assert_eq!(dashboard.current_section(), Section::Overview);
    assert!(dashboard.api().calls().is_empty());
    assert!(dashboard.page().events().is_empty());
}

#[tokio::test]
async fn add_button_opens_the_modal_of_the_current_section() {
    let dashboard = started(seeded_api()).await;

    dashboard.show_add_modal();
    assert!(dashboard.is_modal_open(RecordKind::Task));
    assert_eq!(dashboard.page().modal(RecordKind::Task).unwrap().heading, "Add New Task");

    dashboard.close_modal(RecordKind::Task);
    dashboard.navigate(Section::Goals).await;
    dashboard.show_add_modal();
    let modal = dashboard.page().modal(RecordKind::Goal).unwrap();
    assert!(modal.open);
    assert_eq!(modal.heading, "Add New Goal");
}

// ===================== Mutations =====================

#[tokio::test]
async fn adding_a_task_reloads_the_list_then_the_stats() {
    let dashboard = started(seeded_api()).await;

    dashboard.open_create_modal(RecordKind::Task);
    dashboard.fill_task_form(TaskForm {
        title: "Buy milk".to_string(),
        description: String::new(),
        priority: Priority::Low,
        category: "errand".to_string(),
    });
    let outcome = dashboard.submit_task_form().await;
    assert_eq!(outcome, MutationOutcome::Applied);

    let payload = TaskPayload {
        title: "Buy milk".to_string(),
        description: String::new(),
        priority: Priority::Low,
        category: "errand".to_string(),
    };
    assert_eq!(
        dashboard.api().calls(),
        vec![
            ApiCall::CreateTask(payload),
            ApiCall::ListTasks,
            ApiCall::ListTasks,
            ApiCall::ListNotes,
            ApiCall::ListGoals,
        ]
    );

    let cards = dashboard.page().cards(RecordKind::Task);
    assert_eq!(cards.len(), 3);
    assert_eq!(cards[0].title, "Buy milk");
    assert!(cards[0].has_class("priority-low"));
    assert!(!cards[0].has_class("completed"));
    assert_eq!(stat(&dashboard, StatField::PendingTasks), "2");

    assert_eq!(
        notifications_of(&dashboard, NotificationKind::Success),
        vec!["Task added successfully!".to_string()]
    );
    assert_eq!(closes_and_resets(&dashboard, RecordKind::Task), (1, 1));
    assert!(!dashboard.is_modal_open(RecordKind::Task));
    assert_eq!(dashboard.task_form(), TaskForm::default());
}

#[tokio::test]
async fn toggling_a_task_flips_its_card_and_the_pending_count() {
    let dashboard = started(seeded_api()).await;
    assert_eq!(stat(&dashboard, StatField::PendingTasks), "1");

    assert_eq!(dashboard.toggle_task(7).await, MutationOutcome::Applied);
    assert_eq!(dashboard.api().writes(), vec![ApiCall::ToggleTask(7)]);

    let cards = dashboard.page().cards(RecordKind::Task);
    let card = cards.iter().find(|card| card.record_id == 7).unwrap();
    assert!(card.has_class("completed"));
    assert_eq!(stat(&dashboard, StatField::PendingTasks), "0");
    assert_eq!(stat(&dashboard, StatField::CompletionPercent), "100%");
    assert_eq!(
        notifications_of(&dashboard, NotificationKind::Success),
        vec!["Task status updated!".to_string()]
    );
    assert_eq!(closes_and_resets(&dashboard, RecordKind::Task), (1, 1));
}

#[tokio::test]
async fn deleting_a_note_reloads_notes() {
    let dashboard = started(seeded_api()).await;

    assert_eq!(dashboard.delete(RecordKind::Note, 5).await, MutationOutcome::Applied);
    assert!(dashboard.notes().is_empty());
    assert!(dashboard.page().list(RecordKind::Note).unwrap().is_empty_state());
    assert_eq!(stat(&dashboard, StatField::TotalNotes), "0");
    assert_eq!(
        notifications_of(&dashboard, NotificationKind::Success),
        vec!["Note deleted successfully!".to_string()]
    );
    assert_eq!(closes_and_resets(&dashboard, RecordKind::Note), (1, 1));
    assert_eq!(closes_and_resets(&dashboard, RecordKind::Task), (0, 0));
}

#[tokio::test]
async fn failed_write_leaves_cache_and_view_untouched() {
    let dashboard = started(seeded_api()).await;
    dashboard.api().fail_writes(true);
    let tasks_before = dashboard.tasks();

    dashboard.open_create_modal(RecordKind::Task);
    dashboard.fill_task_form(TaskForm {
        title: "Buy milk".to_string(),
        ..TaskForm::default()
    });
    assert_eq!(dashboard.submit_task_form().await, MutationOutcome::Failed);

    assert_eq!(dashboard.tasks(), tasks_before);
    assert_eq!(dashboard.page().count(|e| matches!(e, PageEvent::ListRendered { .. })), 0);
    assert_eq!(dashboard.api().calls().len(), 1);
    assert!(notifications_of(&dashboard, NotificationKind::Success).is_empty());
    assert_eq!(
        notifications_of(&dashboard, NotificationKind::Error),
        vec!["Error adding task".to_string()]
    );
    assert!(dashboard.is_modal_open(RecordKind::Task));
    assert_eq!(dashboard.task_form().title, "Buy milk");
}

#[tokio::test]
async fn unreachable_server_on_write_is_a_failure() {
    let dashboard = started(seeded_api()).await;
    let stats_before = dashboard.stats();
    dashboard.api().fail_writes_transport(true);

    assert_eq!(dashboard.toggle_task(7).await, MutationOutcome::Failed);

    assert_eq!(dashboard.api().calls(), vec![ApiCall::ToggleTask(7)]);
    assert!(dashboard.tasks().iter().any(|task| task.id == 7 && !task.completed));
    assert_eq!(dashboard.stats(), stats_before);
    assert!(dashboard.page().events().is_empty());
    assert!(notifications_of(&dashboard, NotificationKind::Success).is_empty());
    assert_eq!(
        notifications_of(&dashboard, NotificationKind::Error),
        vec!["Error toggling task".to_string()]
    );
}

#[tokio::test(start_paused = true)]
async fn hung_delete_times_out_as_one_failure() {
    let dashboard = started(seeded_api()).await;
    dashboard.api().hang_writes(true);
    let tasks_before = dashboard.tasks();

    assert_eq!(dashboard.delete_task(7).await, MutationOutcome::Failed);

    assert_eq!(dashboard.api().calls(), vec![ApiCall::DeleteTask(7)]);
    assert_eq!(dashboard.tasks(), tasks_before);
    assert_eq!(dashboard.page().cards(RecordKind::Task).len(), 2);
    assert!(dashboard.page().events().is_empty());
    assert_eq!(
        notifications_of(&dashboard, NotificationKind::Error),
        vec!["Error deleting task".to_string()]
    );
}

#[tokio::test(start_paused = true)]
async fn hung_goal_edit_keeps_the_form_open() {
    let dashboard = started(seeded_api()).await;
    assert!(dashboard.edit_goal(9));
    dashboard.page().clear_events();
    dashboard.api().hang_writes(true);

    assert_eq!(dashboard.submit_goal_form().await, MutationOutcome::Failed);

    assert!(dashboard.is_modal_open(RecordKind::Goal));
    assert_eq!(dashboard.form_state(RecordKind::Goal), FormState::Edit(9));
    assert_eq!(dashboard.goals()[0].progress, 40);
    assert!(dashboard.page().events().is_empty());
    assert!(notifications_of(&dashboard, NotificationKind::Success).is_empty());
    assert_eq!(
        notifications_of(&dashboard, NotificationKind::Error),
        vec!["Error updating goal".to_string()]
    );
}

#[tokio::test]
async fn unknown_id_on_delete_is_a_failure() {
    let dashboard = started(seeded_api()).await;

    assert_eq!(dashboard.delete_goal(404).await, MutationOutcome::Failed);
    assert_eq!(
        notifications_of(&dashboard, NotificationKind::Error),
        vec!["Error deleting goal".to_string()]
    );
    assert_eq!(dashboard.goals().len(), 2);
}

#[tokio::test]
async fn blank_title_is_rejected_without_a_request() {
    let dashboard = started(seeded_api()).await;

    assert_eq!(
        dashboard.submit(RecordKind::Note).await,
        MutationOutcome::Rejected(FormError::MissingTitle)
    );
    dashboard.fill_goal_form(GoalForm {
        title: "Trip".to_string(),
        description: String::new(),
        target_date: "next spring".to_string(),
    });
    assert_eq!(
        dashboard.submit_goal_form().await,
        MutationOutcome::Rejected(FormError::InvalidDate("next spring".to_string()))
    );

    assert!(dashboard.api().calls().is_empty());
    assert!(dashboard.notifications().active().is_empty());
}

// ===================== Edit lifecycle =====================

#[tokio::test]
async fn editing_a_task_fills_the_form_and_submits_a_put() {
    let dashboard = started(seeded_api()).await;

    assert!(dashboard.edit_task(7));
    assert_eq!(dashboard.form_state(RecordKind::Task), FormState::Edit(7));
    let form = dashboard.task_form();
    assert_eq!(form, TaskForm::from_task(&sample_task(7, "Plan week", false)));
    assert_eq!(form.description, "Plan week details");
    assert_eq!(form.priority, Priority::High);

    let modal = dashboard.page().modal(RecordKind::Task).unwrap();
    assert!(modal.open);
    assert_eq!(modal.heading, "Edit Task");
    assert_eq!(modal.fields, Some(FormFields::Task(form.clone())));

    dashboard.fill_task_form(TaskForm {
        title: "Plan next week".to_string(),
        ..form
    });
    assert_eq!(dashboard.submit_task_form().await, MutationOutcome::Applied);

    let writes = dashboard.api().writes();
    assert!(matches!(&writes[..], [ApiCall::UpdateTask(7, payload)] if payload.title == "Plan next week"));
    assert_eq!(dashboard.form_state(RecordKind::Task), FormState::Create);
    assert_eq!(dashboard.page().modal(RecordKind::Task).unwrap().heading, "Add New Task");
    assert_eq!(dashboard.tasks()[0].title, "Plan next week");
    assert_eq!(
        notifications_of(&dashboard, NotificationKind::Success),
        vec!["Task updated successfully!".to_string()]
    );
    assert_eq!(closes_and_resets(&dashboard, RecordKind::Task), (1, 1));
}

#[tokio::test]
async fn editing_a_note_submits_to_its_id() {
    let dashboard = started(seeded_api()).await;

    assert!(dashboard.edit_note(5));
    let form = dashboard.note_form();
    assert_eq!(form.color, "#a0c4ff");
    assert_eq!(form.content, "Remember this");

    assert_eq!(dashboard.submit_note_form().await, MutationOutcome::Applied);
    assert!(matches!(&dashboard.api().writes()[..], [ApiCall::UpdateNote(5, _)]));
    assert_eq!(closes_and_resets(&dashboard, RecordKind::Note), (1, 1));
    assert_eq!(dashboard.form_state(RecordKind::Note), FormState::Create);
}

#[tokio::test]
async fn closing_an_edit_returns_to_create() {
    let dashboard = started(seeded_api()).await;

    assert!(dashboard.edit_note(5));
    dashboard.close_modal(RecordKind::Note);
    assert_eq!(dashboard.form_state(RecordKind::Note), FormState::Create);
    assert!(!dashboard.is_modal_open(RecordKind::Note));
    assert_eq!(dashboard.note_form(), NoteForm::default());

    assert!(dashboard.edit_goal(9));
    dashboard.dismiss_modal(RecordKind::Goal);
    assert_eq!(dashboard.form_state(RecordKind::Goal), FormState::Create);
    assert_eq!(dashboard.page().modal(RecordKind::Goal).unwrap().heading, "Add New Goal");

    assert!(dashboard.api().writes().is_empty());
}

#[tokio::test]
async fn editing_an_uncached_record_is_ignored() {
    let dashboard = started(seeded_api()).await;

    assert!(!dashboard.edit_task(99));
    assert!(!dashboard.edit(RecordKind::Goal, 5));
    assert_eq!(dashboard.form_state(RecordKind::Task), FormState::Create);
    assert_eq!(dashboard.page().count(|e| matches!(e, PageEvent::ModalShown { .. })), 0);
}

#[tokio::test]
async fn goal_edit_sends_zero_progress_by_default() {
    let dashboard = started(seeded_api()).await;

    assert!(dashboard.edit_goal(9));
    assert_eq!(dashboard.goal_form().target_date, "2025-06-30");
    assert_eq!(dashboard.submit_goal_form().await, MutationOutcome::Applied);

    assert_eq!(
        dashboard.api().writes(),
        vec![ApiCall::UpdateGoal(
            9,
            GoalUpdate {
                title: "Run a 5k".to_string(),
                description: "Step by step".to_string(),
                target_date: NaiveDate::from_ymd_opt(2025, 6, 30),
                progress: 0,
            }
        )]
    );
    assert_eq!(dashboard.api().stored_goals()[0].progress, 0);
    assert_eq!(closes_and_resets(&dashboard, RecordKind::Goal), (1, 1));
}

#[tokio::test]
async fn goal_edit_can_preserve_progress() {
    let settings = AppSettings {
        goal_progress_on_edit: GoalProgressOnEdit::Preserve,
        ..AppSettings::default()
    };
    let dashboard = dashboard_with(seeded_api(), settings);
    dashboard.start().await;
    dashboard.api().clear_calls();

    assert!(dashboard.edit_goal(9));
    assert_eq!(dashboard.submit_goal_form().await, MutationOutcome::Applied);
    assert!(matches!(
        &dashboard.api().writes()[..],
        [ApiCall::UpdateGoal(9, update)] if update.progress == 40
    ));
}

#[tokio::test]
async fn creating_a_goal_posts_without_progress() {
    let dashboard = started(seeded_api()).await;

    dashboard.fill_goal_form(GoalForm {
        title: "Save for a bike".to_string(),
        description: String::new(),
        target_date: String::new(),
    });
    assert_eq!(dashboard.submit_goal_form().await, MutationOutcome::Applied);

    let writes = dashboard.api().writes();
    assert!(matches!(&writes[..], [ApiCall::CreateGoal(goal)] if goal.target_date.is_none()));
    assert_eq!(stat(&dashboard, StatField::ActiveGoals), "2");
}

// ===================== Failures, timeouts and ordering =====================

#[tokio::test]
async fn failed_reads_keep_the_previous_snapshot() {
    let dashboard = started(seeded_api()).await;
    let stats_before = dashboard.stats();
    dashboard.api().fail_reads(true);

    assert!(!dashboard.load_tasks().await);
    assert!(!dashboard.load_dashboard_stats().await);

    assert_eq!(dashboard.tasks().len(), 2);
    assert_eq!(dashboard.stats(), stats_before);
    assert_eq!(stat(&dashboard, StatField::PendingTasks), "1");
    assert!(dashboard.page().events().is_empty());
    assert!(dashboard.notifications().active().is_empty());
}

#[tokio::test(start_paused = true)]
async fn hanging_requests_time_out() {
    let dashboard = dashboard(seeded_api());
    dashboard.api().hang_reads(true);

    assert!(!dashboard.load_tasks().await);
    assert!(dashboard.tasks().is_empty());
    assert!(dashboard.page().list(RecordKind::Task).is_none());
}

#[tokio::test]
async fn stale_list_response_is_discarded() {
    let dashboard = dashboard(seeded_api());
    let release = dashboard.api().hold_next_task_list();

    let (slow, fast) = tokio::join!(dashboard.load_tasks(), async {
        let applied = dashboard.load_tasks().await;
        let _ = release.send(vec![sample_task(1, "Outdated", false)]);
        applied
    });

    assert!(fast);
    assert!(!slow);
    let titles: Vec<String> = dashboard.tasks().into_iter().map(|task| task.title).collect();
    assert_eq!(titles, vec!["Plan week", "Read a chapter"]);
    assert_eq!(dashboard.page().cards(RecordKind::Task).len(), 2);
}

#[tokio::test]
async fn teardown_ignores_late_responses() {
    let dashboard = dashboard(seeded_api());
    let release = dashboard.api().hold_next_task_list();
    dashboard.notifications().info("Welcome");

    let (applied, ()) = tokio::join!(dashboard.load_tasks(), async {
        dashboard.teardown();
        let _ = release.send(vec![sample_task(1, "Late", false)]);
    });

    assert!(!applied);
    assert!(dashboard.tasks().is_empty());
    assert!(dashboard.page().list(RecordKind::Task).is_none());
    assert!(dashboard.notifications().active().is_empty());
    assert_eq!(dashboard.toggle_task(7).await, MutationOutcome::Ignored);
    assert!(dashboard.api().writes().is_empty());
}
