use anyhow::{Result, bail};
use clap::{Args, Subcommand};
use common::{DEFAULT_CATEGORY, DEFAULT_NOTE_COLOR, RecordId};
use frontend::layout::{RecordKind, Section, StatField};
use frontend::{
    AppSettings, Dashboard, GoalForm, HtmlPage, HttpApiClient, MemoryPage, MutationOutcome, NoteForm, Page,
    TaskForm,
};
use std::path::PathBuf;
use tracing::{debug, info, trace, warn};

#[derive(Args, Debug)]
pub struct DashboardArgs {
    /// API origin, overrides `api_base_url` from the settings
    #[arg(long)]
    pub api_url: Option<String>,

    /// Settings file; defaults to `dashboard.toml` in the working directory
    #[arg(long)]
    pub settings: Option<PathBuf>,

    /// Print the rendered dashboard document instead of a text summary
    #[arg(long)]
    pub html: bool,

    #[command(subcommand)]
    pub action: DashboardAction,
}

#[derive(Subcommand, Debug)]
pub enum DashboardAction {
    /// Print one section (overview, tasks, notes or goals)
    Show { section: Section },
    /// Create a task
    AddTask {
        #[arg(long)]
        title: String,
        #[arg(long, default_value = "")]
        description: String,
        #[arg(long, default_value = "medium")]
        priority: String,
        #[arg(long, default_value = DEFAULT_CATEGORY)]
        category: String,
    },
    /// Create a note
    AddNote {
        #[arg(long)]
        title: String,
        #[arg(long, default_value = "")]
        content: String,
        #[arg(long, default_value = DEFAULT_CATEGORY)]
        category: String,
        #[arg(long, default_value = DEFAULT_NOTE_COLOR)]
        color: String,
    },
    /// Create a goal
    AddGoal {
        #[arg(long)]
        title: String,
        #[arg(long, default_value = "")]
        description: String,
        /// YYYY-MM-DD
        #[arg(long, default_value = "")]
        target_date: String,
    },
    /// Edit a task through the edit form; omitted fields keep their values
    EditTask {
        id: RecordId,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        priority: Option<String>,
        #[arg(long)]
        category: Option<String>,
    },
    /// Flip the completion flag of a task
    ToggleTask { id: RecordId },
    /// Delete a task, note or goal
    Delete { kind: RecordKind, id: RecordId },
}

impl DashboardAction {
    /// Section printed after the action ran.
    fn section(&self) -> Section {
        match self {
            DashboardAction::Show { section } => *section,
            DashboardAction::AddTask { .. }
            | DashboardAction::EditTask { .. }
            | DashboardAction::ToggleTask { .. } => Section::Tasks,
            DashboardAction::AddNote { .. } => Section::Notes,
            DashboardAction::AddGoal { .. } => Section::Goals,
            DashboardAction::Delete { kind, .. } => kind.section(),
        }
    }
}

pub async fn dashboard(args: DashboardArgs) -> Result<()> {
    trace!("Entering dashboard function");
    let mut settings = match &args.settings {
        Some(path) => AppSettings::load_from(Some(path.as_path()))?,
        None => AppSettings::load()?,
    };
    if let Some(api_url) = args.api_url {
        debug!("API URL overridden: {}", api_url);
        settings.api_base_url = api_url;
    }

    let client = HttpApiClient::from_settings(&settings)?;
    info!("Connecting dashboard to {}", client.base_url());

    let section = args.action.section();
    let outcome = if args.html {
        let dashboard = Dashboard::new(client, HtmlPage::new(), settings);
        let outcome = drive(&dashboard, args.action).await;
        println!("{}", dashboard.page().to_html());
        finish(&dashboard);
        outcome
    } else {
        let dashboard = Dashboard::new(client, MemoryPage::new(), settings);
        let outcome = drive(&dashboard, args.action).await;
        print_section(dashboard.page(), section);
        finish(&dashboard);
        outcome
    };

    match outcome? {
        MutationOutcome::Applied | MutationOutcome::Ignored => Ok(()),
        MutationOutcome::Failed => bail!("the API rejected the request"),
        MutationOutcome::Rejected(err) => bail!("invalid input: {err}"),
    }
}

/// Load everything, then run `action`.
async fn drive<P: Page>(
    dashboard: &Dashboard<HttpApiClient, P>,
    action: DashboardAction,
) -> Result<MutationOutcome> {
    dashboard.start().await;
    let outcome = match action {
        DashboardAction::Show { section } => {
            if !dashboard.navigate(section).await {
                bail!("no {section} section");
            }
            MutationOutcome::Applied
        }
        DashboardAction::AddTask { title, description, priority, category } => {
            dashboard.open_create_modal(RecordKind::Task);
            dashboard.fill_task_form(TaskForm {
                title,
                description,
                priority: priority.as_str().into(),
                category,
            });
            dashboard.submit_task_form().await
        }
        DashboardAction::AddNote { title, content, category, color } => {
            dashboard.open_create_modal(RecordKind::Note);
            dashboard.fill_note_form(NoteForm { title, content, category, color });
            dashboard.submit_note_form().await
        }
        DashboardAction::AddGoal { title, description, target_date } => {
            dashboard.open_create_modal(RecordKind::Goal);
            dashboard.fill_goal_form(GoalForm { title, description, target_date });
            dashboard.submit_goal_form().await
        }
        DashboardAction::EditTask { id, title, description, priority, category } => {
            if !dashboard.edit_task(id) {
                warn!("Task {} is not in the loaded list", id);
                bail!("task {id} not found");
            }
            let mut form = dashboard.task_form();
            if let Some(title) = title {
                form.title = title;
            }
            if let Some(description) = description {
                form.description = description;
            }
            if let Some(priority) = priority {
                form.priority = priority.as_str().into();
            }
            if let Some(category) = category {
                form.category = category;
            }
            dashboard.fill_task_form(form);
            dashboard.submit_task_form().await
        }
        DashboardAction::ToggleTask { id } => dashboard.toggle_task(id).await,
        DashboardAction::Delete { kind, id } => dashboard.delete(kind, id).await,
    };
    debug!("Dashboard action finished: {:?}", outcome);
    Ok(outcome)
}

/// Report notifications on stderr and stop the dashboard.
fn finish<P: Page>(dashboard: &Dashboard<HttpApiClient, P>) {
    for notification in dashboard.notifications().active() {
        eprintln!("[{}] {}", notification.kind.name(), notification.message);
    }
    dashboard.teardown();
}

fn print_section(page: &MemoryPage, section: Section) {
    if let Some(kind) = section.record_kind() {
        println!("== {} ==", kind.collection());
        match page.list(kind) {
            Some(list) if list.is_empty_state() => println!("  (empty)"),
            Some(list) => {
                for card in list.cards() {
                    println!("  #{:<4} {:<40} [{}]", card.record_id, card.title, card.class_name);
                }
            }
            None => println!("  (not loaded)"),
        }
    }

    println!("== overview ==");
    for field in StatField::ALL {
        let value = page.stat(field).unwrap_or_else(|| "-".to_string());
        println!("  {:<14} {}", field.label(), value);
    }
}
