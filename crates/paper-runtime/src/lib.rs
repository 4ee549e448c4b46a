use std::path::PathBuf;
use thiserror::Error;
use tokio::sync::mpsc;

mod worker;

pub use worker::worker_task;

// Re-export types from library crates
pub use paper_export::{ExportError, ExportFormat, ExportOptions};
pub use paper_pattern::{JsonFileStore, MemoryStore, PaperConfig, PaperError, TemplateStore};

#[derive(Error, Debug)]
pub enum RuntimeError {
    #[error("An export is already in progress")]
    Busy,
    #[error("Worker channel closed")]
    ChannelClosed,
    #[error(transparent)]
    Paper(#[from] PaperError),
    #[error(transparent)]
    Export(#[from] ExportError),
}

pub type Result<T> = std::result::Result<T, RuntimeError>;

/// Commands sent from a front end to the worker
#[derive(Debug)]
pub enum PaperCommand {
    GetConfig,
    /// Replace the active configuration wholesale
    SetConfig {
        config: PaperConfig,
    },
    ApplyTheme {
        key: String,
    },
    ApplyTemplate {
        template_id: String,
    },
    /// Import a configuration document; a rejected document leaves the
    /// active configuration untouched
    ImportConfig {
        path: PathBuf,
    },
    /// Write the active configuration into `dir` under the dated default name
    ExportConfig {
        dir: PathBuf,
    },
    Export {
        format: ExportFormat,
        options: ExportOptions,
        dir: PathBuf,
    },
    Print {
        output_path: PathBuf,
    },
    ListSaved,
    SaveTemplate {
        name: String,
    },
    LoadSaved {
        id: String,
    },
    DeleteSaved {
        id: String,
    },
}

/// Updates sent from the worker to a front end
#[derive(Debug, Clone)]
pub enum PaperUpdate {
    ConfigChanged {
        config: PaperConfig,
    },
    ConfigExported {
        path: PathBuf,
    },
    ExportStarted {
        format: ExportFormat,
        pages: usize,
    },
    ExportComplete {
        path: PathBuf,
        format: ExportFormat,
        pages: usize,
    },
    PrintComplete {
        path: PathBuf,
        pages: usize,
    },
    SavedTemplates {
        templates: Vec<PaperConfig>,
    },
    TemplateSaved {
        config: PaperConfig,
    },
    SavedTemplateDeleted {
        id: String,
        removed: bool,
    },
    Error {
        message: String,
    },
}

/// Channel ends for talking to a spawned worker
pub struct PaperRuntime {
    commands: mpsc::UnboundedSender<PaperCommand>,
    updates: mpsc::UnboundedReceiver<PaperUpdate>,
}

impl PaperRuntime {
    /// Spawn a worker on the current tokio runtime
    pub fn spawn<S>(config: PaperConfig, store: S) -> Self
    where
        S: TemplateStore + Send + Sync + 'static,
    {
        let (command_tx, command_rx) = mpsc::unbounded_channel();
        let (update_tx, update_rx) = mpsc::unbounded_channel();
        tokio::spawn(worker_task(config, store, command_rx, update_tx));
        Self {
            commands: command_tx,
            updates: update_rx,
        }
    }

    pub fn send(&self, command: PaperCommand) -> Result<()> {
        self.commands
            .send(command)
            .map_err(|_| RuntimeError::ChannelClosed)
    }

    pub async fn next_update(&mut self) -> Result<PaperUpdate> {
        self.updates.recv().await.ok_or(RuntimeError::ChannelClosed)
    }
}
