use crate::{PaperCommand, PaperUpdate, RuntimeError};
use paper_export::{ExportFormat, ExportOptions};
use paper_pattern::{
    PaperConfig, TemplateStore, TileCache, compose_document, save_template, settings_file_name,
};
use std::path::PathBuf;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// State owned by the worker between commands
struct Session<S> {
    config: PaperConfig,
    store: S,
    tiles: TileCache,
    /// The export or print currently running, if any
    job: Option<JoinHandle<()>>,
}

impl<S> Session<S> {
    fn is_busy(&self) -> bool {
        self.job.as_ref().is_some_and(|job| !job.is_finished())
    }
}

/// Async worker task that owns the active configuration and processes
/// commands one at a time
pub async fn worker_task<S>(
    config: PaperConfig,
    store: S,
    mut command_rx: mpsc::UnboundedReceiver<PaperCommand>,
    update_tx: mpsc::UnboundedSender<PaperUpdate>,
) where
    S: TemplateStore + Send + Sync + 'static,
{
    let mut session = Session {
        config,
        store,
        tiles: TileCache::new(),
        job: None,
    };

    while let Some(cmd) = command_rx.recv().await {
        process_command(cmd, &mut session, &update_tx).await;
    }

    // let a running export report before the worker goes away
    if let Some(job) = session.job.take() {
        finish_job(job).await;
    }
}

/// Wait for a job, logging it when it panicked or was cancelled.
/// Returns whether the job ran to completion.
async fn finish_job(job: JoinHandle<()>) -> bool {
    match job.await {
        Ok(()) => true,
        Err(e) => {
            log::warn!("Export task failed: {e}");
            false
        }
    }
}

async fn process_command<S>(
    cmd: PaperCommand,
    session: &mut Session<S>,
    update_tx: &mpsc::UnboundedSender<PaperUpdate>,
) where
    S: TemplateStore + Send + Sync + 'static,
{
    match cmd {
        PaperCommand::GetConfig => send_config(session, update_tx),
        PaperCommand::SetConfig { config } => {
            session.config = config;
            send_config(session, update_tx);
        }
        PaperCommand::ApplyTheme { key } => match session.config.with_theme(&key) {
            Ok(config) => {
                session.config = config;
                send_config(session, update_tx);
            }
            Err(e) => send_error(update_tx, format!("Failed to apply theme: {e}")),
        },
        PaperCommand::ApplyTemplate { template_id } => {
            match session.config.with_template(&template_id) {
                Ok(config) => {
                    session.config = config;
                    send_config(session, update_tx);
                }
                Err(e) => send_error(update_tx, format!("Failed to apply template: {e}")),
            }
        }
        PaperCommand::ImportConfig { path } => match PaperConfig::import_file(&path).await {
            Ok(config) => {
                log::info!("Imported configuration from {}", path.display());
                session.config = config;
                send_config(session, update_tx);
            }
            Err(e) => send_error(update_tx, format!("Failed to import configuration: {e}")),
        },
        PaperCommand::ExportConfig { dir } => {
            let path = dir.join(settings_file_name());
            match session.config.save(&path).await {
                Ok(()) => {
                    let _ = update_tx.send(PaperUpdate::ConfigExported { path });
                }
                Err(e) => send_error(update_tx, format!("Failed to export configuration: {e}")),
            }
        }
        PaperCommand::Export {
            format,
            options,
            dir,
        } => handle_export(session, format, options, dir, update_tx),
        PaperCommand::Print { output_path } => handle_print(session, output_path, update_tx),
        PaperCommand::ListSaved => match session.store.list().await {
            Ok(templates) => {
                let _ = update_tx.send(PaperUpdate::SavedTemplates { templates });
            }
            Err(e) => send_error(update_tx, format!("Failed to list saved templates: {e}")),
        },
        PaperCommand::SaveTemplate { name } => {
            match save_template(&session.store, &session.config, &name).await {
                Ok(config) => {
                    let _ = update_tx.send(PaperUpdate::TemplateSaved { config });
                }
                Err(e) => send_error(update_tx, format!("Failed to save template: {e}")),
            }
        }
        PaperCommand::LoadSaved { id } => match session.store.list().await {
            Ok(templates) => match templates.into_iter().find(|t| t.id == id) {
                Some(config) => {
                    session.config = config;
                    send_config(session, update_tx);
                }
                None => send_error(update_tx, format!("No saved template with id {id}")),
            },
            Err(e) => send_error(update_tx, format!("Failed to load saved template: {e}")),
        },
        PaperCommand::DeleteSaved { id } => match session.store.remove(&id).await {
            Ok(removed) => {
                let _ = update_tx.send(PaperUpdate::SavedTemplateDeleted { id, removed });
            }
            Err(e) => send_error(update_tx, format!("Failed to delete saved template: {e}")),
        },
    }
}

fn handle_export<S>(
    session: &mut Session<S>,
    format: ExportFormat,
    options: ExportOptions,
    dir: PathBuf,
    update_tx: &mpsc::UnboundedSender<PaperUpdate>,
) {
    if session.is_busy() {
        send_error(update_tx, RuntimeError::Busy.to_string());
        return;
    }

    let scenes = compose_document(&session.config, &mut session.tiles);
    let pages = if format.is_raster() {
        scenes.len().min(1)
    } else {
        scenes.len()
    };
    let _ = update_tx.send(PaperUpdate::ExportStarted { format, pages });

    let name = session.config.name.clone();
    let update_tx = update_tx.clone();
    session.job = Some(tokio::spawn(async move {
        match paper_export::export_to_dir(scenes, &name, format, options, dir).await {
            Ok(path) => {
                let _ = update_tx.send(PaperUpdate::ExportComplete {
                    path,
                    format,
                    pages,
                });
            }
            Err(e) => send_error(&update_tx, format!("Failed to export: {e}")),
        }
    }));
}

fn handle_print<S>(
    session: &mut Session<S>,
    output_path: PathBuf,
    update_tx: &mpsc::UnboundedSender<PaperUpdate>,
) {
    if session.is_busy() {
        send_error(update_tx, RuntimeError::Busy.to_string());
        return;
    }

    let scenes = compose_document(&session.config, &mut session.tiles);
    let pages = scenes.len();
    let title = session.config.name.clone();
    let update_tx = update_tx.clone();
    session.job = Some(tokio::spawn(async move {
        match paper_export::save_print_document(scenes, &title, &output_path).await {
            Ok(()) => {
                let _ = update_tx.send(PaperUpdate::PrintComplete {
                    path: output_path,
                    pages,
                });
            }
            Err(e) => send_error(&update_tx, format!("Failed to print: {e}")),
        }
    }));
}

fn send_config<S>(session: &Session<S>, update_tx: &mpsc::UnboundedSender<PaperUpdate>) {
    let _ = update_tx.send(PaperUpdate::ConfigChanged {
        config: session.config.clone(),
    });
}

fn send_error(update_tx: &mpsc::UnboundedSender<PaperUpdate>, message: String) {
    let _ = update_tx.send(PaperUpdate::Error { message });
}
