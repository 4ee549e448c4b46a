use paper_pattern::{PageConfig, PatternType};
use paper_runtime::*;
use std::time::Duration;
use tempfile::TempDir;

async fn next(runtime: &mut PaperRuntime) -> PaperUpdate {
    tokio::time::timeout(Duration::from_secs(60), runtime.next_update())
        .await
        .expect("worker did not answer in time")
        .unwrap()
}

async fn current_config(runtime: &mut PaperRuntime) -> PaperConfig {
    runtime.send(PaperCommand::GetConfig).unwrap();
    match next(runtime).await {
        PaperUpdate::ConfigChanged { config } => config,
        other => panic!("expected config, got {:?}", other),
    }
}

fn small_export() -> ExportOptions {
    ExportOptions {
        dpi: 72.0,
        ..ExportOptions::default()
    }
}

#[tokio::test]
async fn test_theme_and_template_updates() {
    let mut runtime = PaperRuntime::spawn(PaperConfig::default(), MemoryStore::new());

    runtime
        .send(PaperCommand::ApplyTemplate {
            template_id: "grid-math".to_string(),
        })
        .unwrap();
    match next(&mut runtime).await {
        PaperUpdate::ConfigChanged { config } => {
            assert_eq!(config.pattern, PatternType::Grid);
            assert_eq!(config.id, "default");
        }
        other => panic!("unexpected {:?}", other),
    }

    runtime
        .send(PaperCommand::ApplyTheme {
            key: "no-such-theme".to_string(),
        })
        .unwrap();
    assert!(matches!(
        next(&mut runtime).await,
        PaperUpdate::Error { .. }
    ));
    assert_eq!(current_config(&mut runtime).await.pattern, PatternType::Grid);
}

#[tokio::test]
async fn test_rejected_import_keeps_active_config() {
    let dir = TempDir::new().unwrap();
    let bad = dir.path().join("bad.json");
    tokio::fs::write(&bad, r#"{"pattern": "dot"}"#).await.unwrap();

    let start = PaperConfig {
        spacing: 7.0,
        ..PaperConfig::default()
    };
    let mut runtime = PaperRuntime::spawn(start.clone(), MemoryStore::new());
    runtime
        .send(PaperCommand::ImportConfig { path: bad })
        .unwrap();
    match next(&mut runtime).await {
        PaperUpdate::Error { message } => assert!(message.contains("import")),
        other => panic!("unexpected {:?}", other),
    }
    assert_eq!(current_config(&mut runtime).await, start);
}

#[tokio::test]
async fn test_config_export_then_import() {
    let dir = TempDir::new().unwrap();
    let start = PaperConfig::default().with_theme("forest").unwrap();
    let mut runtime = PaperRuntime::spawn(start.clone(), MemoryStore::new());

    runtime
        .send(PaperCommand::ExportConfig {
            dir: dir.path().to_path_buf(),
        })
        .unwrap();
    let path = match next(&mut runtime).await {
        PaperUpdate::ConfigExported { path } => path,
        other => panic!("unexpected {:?}", other),
    };
    let file_name = path.file_name().unwrap().to_string_lossy().to_string();
    assert!(file_name.starts_with("paper-settings-"));

    runtime
        .send(PaperCommand::SetConfig {
            config: PaperConfig::default(),
        })
        .unwrap();
    next(&mut runtime).await;

    runtime.send(PaperCommand::ImportConfig { path }).unwrap();
    match next(&mut runtime).await {
        PaperUpdate::ConfigChanged { config } => {
            assert!(config.id.starts_with("imported-"));
            assert_eq!(config.stroke_color, start.stroke_color);
        }
        other => panic!("unexpected {:?}", other),
    }
}

#[tokio::test]
async fn test_second_export_while_busy_is_rejected() {
    let dir = TempDir::new().unwrap();
    let config = PaperConfig::default().with_pages(PageConfig {
        count: 3,
        ..PageConfig::default()
    });
    let mut runtime = PaperRuntime::spawn(config, MemoryStore::new());

    for _ in 0..2 {
        runtime
            .send(PaperCommand::Export {
                format: ExportFormat::Pdf,
                options: small_export(),
                dir: dir.path().to_path_buf(),
            })
            .unwrap();
    }

    assert!(matches!(
        next(&mut runtime).await,
        PaperUpdate::ExportStarted {
            format: ExportFormat::Pdf,
            pages: 3
        }
    ));
    match next(&mut runtime).await {
        PaperUpdate::Error { message } => {
            assert_eq!(message, RuntimeError::Busy.to_string())
        }
        other => panic!("expected busy, got {:?}", other),
    }
    match next(&mut runtime).await {
        PaperUpdate::ExportComplete { path, pages, .. } => {
            assert_eq!(pages, 3);
            assert_eq!(path, dir.path().join("default-lined.pdf"));
            assert!(path.exists());
        }
        other => panic!("unexpected {:?}", other),
    }
}

#[tokio::test]
async fn test_print_writes_document() {
    let dir = TempDir::new().unwrap();
    let output_path = dir.path().join("print.pdf");
    let mut runtime = PaperRuntime::spawn(PaperConfig::default(), MemoryStore::new());
    runtime
        .send(PaperCommand::Print {
            output_path: output_path.clone(),
        })
        .unwrap();
    match next(&mut runtime).await {
        PaperUpdate::PrintComplete { path, pages } => {
            assert_eq!(path, output_path);
            assert_eq!(pages, 1);
        }
        other => panic!("unexpected {:?}", other),
    }
    assert!(output_path.exists());
}

#[tokio::test]
async fn test_saved_templates_round_trip() {
    let dir = TempDir::new().unwrap();
    let store = JsonFileStore::in_dir(dir.path());
    let config = PaperConfig::default().with_template("seyes").unwrap();
    let mut runtime = PaperRuntime::spawn(config, store);

    runtime
        .send(PaperCommand::SaveTemplate {
            name: " French ruled ".to_string(),
        })
        .unwrap();
    let saved = match next(&mut runtime).await {
        PaperUpdate::TemplateSaved { config } => config,
        other => panic!("unexpected {:?}", other),
    };
    assert_eq!(saved.name, "French ruled");

    runtime
        .send(PaperCommand::SetConfig {
            config: PaperConfig::default(),
        })
        .unwrap();
    next(&mut runtime).await;

    runtime
        .send(PaperCommand::LoadSaved {
            id: saved.id.clone(),
        })
        .unwrap();
    match next(&mut runtime).await {
        PaperUpdate::ConfigChanged { config } => assert_eq!(config.pattern, PatternType::Seyes),
        other => panic!("unexpected {:?}", other),
    }

    runtime.send(PaperCommand::ListSaved).unwrap();
    match next(&mut runtime).await {
        PaperUpdate::SavedTemplates { templates } => assert_eq!(templates, vec![saved.clone()]),
        other => panic!("unexpected {:?}", other),
    }

    runtime
        .send(PaperCommand::DeleteSaved {
            id: saved.id.clone(),
        })
        .unwrap();
    assert!(matches!(
        next(&mut runtime).await,
        PaperUpdate::SavedTemplateDeleted { removed: true, .. }
    ));

    runtime.send(PaperCommand::LoadSaved { id: saved.id }).unwrap();
    assert!(matches!(
        next(&mut runtime).await,
        PaperUpdate::Error { .. }
    ));
}
