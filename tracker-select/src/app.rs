use anyhow::{bail, Result};
use chrono::Local;
use std::io::Write;
use std::sync::Arc;
use tracker_api::Client;

use crate::app_core::{AppCore, DataEventHandler};
use crate::background::{data_loader::DataLoader, BackgroundTaskManager};
use crate::cli::Cli;
use crate::commands::{executor, handlers};
use crate::events::{AppCommand, DeleteTarget};
use crate::logging::init_logging;
use crate::settings::{Settings, CONFIG_PATH_ENV};
use crate::state::selection::SelectionDelta;
use crate::state::AppState;
use crate::storage::FileStore;
use crate::ui;

/// Production handler: spawns real requests through the data loader
pub struct LiveDataHandler {
    task_manager: BackgroundTaskManager,
    data_loader: DataLoader,
}

impl LiveDataHandler {
    pub fn new(data_loader: DataLoader) -> Self {
        Self {
            task_manager: BackgroundTaskManager::new(),
            data_loader,
        }
    }

    pub async fn wait_idle(&mut self) {
        self.task_manager.wait_idle().await;
    }
}

impl DataEventHandler for LiveDataHandler {
    fn execute_with_context(
        &mut self,
        command: AppCommand,
        state: &mut AppState,
    ) -> Option<SelectionDelta> {
        executor::execute_command(command, state, &mut self.task_manager, &self.data_loader)
    }
}

pub struct App {
    settings: Settings,
    cli: Cli,
}

impl App {
    pub fn new(settings: Settings, cli: Cli) -> Self {
        Self { settings, cli }
    }

    pub async fn run(&self) -> Result<()> {
        let (log_path, _guard) = init_logging()?;
        tracing::info!("tracker-select starting, logging to {}", log_path.display());

        if self.cli.command.is_mutating() && self.settings.csrf_token.is_empty() {
            bail!(
                "csrf_token is not configured (set it in the file named by {} or in TRACKER_SELECT_CSRF_TOKEN)",
                CONFIG_PATH_ENV
            );
        }

        let store = FileStore::new(self.settings.storage_dir()?)?;
        tracing::debug!("Selection stored in {}", store.dir().display());

        let api_client = Arc::new(
            Client::builder(&self.settings.server_url)
                .csrf_token(self.settings.csrf_token.clone())
                .timeout(self.settings.request_timeout())
                .build()?,
        );

        let (data_tx, mut data_rx) = tokio::sync::mpsc::unbounded_channel();
        let handler = LiveDataHandler::new(DataLoader::new(api_client, data_tx));
        let mut core = AppCore::new(handler, store);

        if !self.cli.rows.is_empty() {
            core.dispatch(AppCommand::BindRows {
                ids: self.cli.rows.clone(),
            });
        }

        for command in handlers::handle_cli_command(&self.cli.command) {
            core.dispatch(command);
        }

        if let Some(target) = core.state().pending_confirmation.clone() {
            let answer = if self.cli.yes {
                AppCommand::ConfirmDelete
            } else {
                ask_confirmation(&target)?
            };
            core.dispatch(answer);
        }

        // Every request has answered once all tasks are done
        core.handler_mut().wait_idle().await;
        while let Ok(event) = data_rx.try_recv() {
            core.handle_data_event(event);
        }

        core.dispatch(AppCommand::ExpireNotifications { now: Local::now() });
        println!("{}", ui::render_page(core.state()));

        tracing::info!("tracker-select finished");
        Ok(())
    }
}

fn ask_confirmation(target: &DeleteTarget) -> Result<AppCommand> {
    let mut stdout = std::io::stdout();
    write!(
        stdout,
        "{}",
        ui::components::delete_confirmation::render_delete_confirmation(target)
    )?;
    stdout.flush()?;

    let mut answer = String::new();
    std::io::stdin().read_line(&mut answer)?;
    Ok(handlers::handle_confirmation_answer(&answer))
}
