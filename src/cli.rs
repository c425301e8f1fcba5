use anyhow::Result;
use clap::{Parser, Subcommand};

pub mod commands;

use crate::config::DEFAULT_BIND_ADDRESS;
use commands::{DashboardArgs, dashboard, serve};

#[derive(Parser)]
#[command(name = "youth-balance")]
#[command(about = "Youth Balance dashboard: REST API server and terminal dashboard")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the web server
    Serve {
        /// Bind address for the web server
        ///
        /// Format: IP:PORT (e.g., 0.0.0.0:5000, 127.0.0.1:8080)
        #[arg(short, long, env = "BIND_ADDRESS", default_value = DEFAULT_BIND_ADDRESS)]
        bind_address: String,

        /// Fill the store with the welcome tasks, notes and goals on startup
        #[arg(short, long, env = "SEED_DEFAULTS")]
        seed_defaults: bool,
    },
    /// Drive the dashboard against a running API and print the result
    ///
    /// Examples:
    ///   youth-balance dashboard show tasks
    ///   youth-balance dashboard add-task --title "Buy milk" --priority low --category errand
    ///   youth-balance dashboard toggle-task 7
    Dashboard(DashboardArgs),
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        match self.command {
            Commands::Serve { bind_address, seed_defaults } => {
                serve(&bind_address, seed_defaults).await?;
            }
            Commands::Dashboard(args) => {
                dashboard(args).await?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use commands::dashboard::DashboardAction;
    use frontend::layout::Section;
    use std::path::Path;

    #[test]
    fn dashboard_flags_select_output_and_settings() {
        let cli = Cli::try_parse_from(["youth-balance", "dashboard", "--html", "show", "goals"]).unwrap();
        let Commands::Dashboard(args) = cli.command else {
            panic!("expected the dashboard command");
        };
        assert!(args.html);
        assert_eq!(args.settings, None);
        assert!(matches!(args.action, DashboardAction::Show { section: Section::Goals }));

        let cli = Cli::try_parse_from([
            "youth-balance",
            "dashboard",
            "--settings",
            "conf/dashboard.toml",
            "toggle-task",
            "7",
        ])
        .unwrap();
        let Commands::Dashboard(args) = cli.command else {
            panic!("expected the dashboard command");
        };
        assert!(!args.html);
        assert_eq!(args.settings.as_deref(), Some(Path::new("conf/dashboard.toml")));
        assert!(matches!(args.action, DashboardAction::ToggleTask { id: 7 }));
    }
}
