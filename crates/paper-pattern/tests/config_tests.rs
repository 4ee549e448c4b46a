use paper_pattern::*;

#[test]
fn test_default_config_values() {
    let config = PaperConfig::default();
    assert_eq!(config.id, "default");
    assert_eq!(config.pattern, PatternType::Lined);
    assert_eq!(config.spacing, 10.0);
    assert_eq!(config.margins, Margins::uniform(20.0));
    assert_eq!(config.background.pattern, BackgroundPatternType::None);
    assert!(!config.watermark.enabled);
    assert_eq!(config.pages.count, 1);
}

#[test]
fn test_document_field_names() {
    let json = PaperConfig::default().to_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["size"], "A4");
    assert_eq!(value["pattern"], "lined");
    assert_eq!(value["lineStyle"], "solid");
    assert_eq!(value["strokeColor"], "#94a3b8");
    assert_eq!(value["showMarginBox"], false);
    assert_eq!(value["background"]["patternOpacity"], 0.5);
    assert_eq!(value["pages"]["startNumber"], 1);
    assert_eq!(value["customDimensions"]["width"], 210.0);
}

#[test]
fn test_round_trip_keeps_everything_but_id() {
    let original = PaperConfig {
        name: "Weekly Planner".to_string(),
        pattern: PatternType::PinyinTianzi,
        spacing: 12.5,
        line_style: LineStyle::Dotted,
        orientation: Orientation::Landscape,
        size: PaperSize::Custom,
        custom_dimensions: Some(PaperDimension::new(120.0, 180.0)),
        ..PaperConfig::default()
    }
    .with_watermark(WatermarkConfig {
        enabled: true,
        text: "DRAFT".to_string(),
        ..WatermarkConfig::default()
    });

    let json = original.to_json().unwrap();
    let imported = PaperConfig::from_document(&json).unwrap();

    assert!(imported.id.starts_with("imported-"));
    assert_eq!(
        PaperConfig {
            id: original.id.clone(),
            ..imported
        },
        original
    );
}

#[test]
fn test_round_trip_keeps_unset_optional_fields() {
    let original = PaperConfig {
        custom_dimensions: None,
        theme: None,
        ..PaperConfig::default()
    };

    let json = original.to_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert!(value["customDimensions"].is_null());
    assert!(value["theme"].is_null());

    let imported = PaperConfig::from_document(&json).unwrap();
    assert_eq!(imported.custom_dimensions, None);
    assert_eq!(imported.theme, None);
    assert_eq!(
        PaperConfig {
            id: original.id.clone(),
            ..imported
        },
        original
    );
}

#[test]
fn test_import_rejects_missing_required_fields() {
    for missing in ["pattern", "margins", "size"] {
        let mut value = serde_json::to_value(PaperConfig::default()).unwrap();
        value.as_object_mut().unwrap().remove(missing);
        let result = PaperConfig::from_document(&value.to_string());
        match result {
            Err(PaperError::Import(msg)) => assert!(msg.contains(missing)),
            other => panic!("expected import error for {}, got {:?}", missing, other),
        }
    }
}

#[test]
fn test_import_rejects_garbage() {
    assert!(matches!(
        PaperConfig::from_document("not json"),
        Err(PaperError::Import(_))
    ));
    assert!(matches!(
        PaperConfig::from_document("[1, 2, 3]"),
        Err(PaperError::Import(_))
    ));
    assert!(matches!(
        PaperConfig::from_document(r#"{"pattern": "grid", "margins": {}, "size": "A4", "spacing": "wide"}"#),
        Err(PaperError::Import(_))
    ));
}

#[test]
fn test_import_merges_partial_document_over_defaults() {
    let doc = r#"{
        "pattern": "dot",
        "size": "A5",
        "margins": {"top": 5},
        "spacing": 4,
        "watermark": {"enabled": true},
        "pages": {"count": 3}
    }"#;
    let config = PaperConfig::from_document(doc).unwrap();
    assert_eq!(config.pattern, PatternType::Dot);
    assert_eq!(config.size, PaperSize::A5);
    assert_eq!(config.spacing, 4.0);
    assert_eq!(config.margins.top, 5.0);
    assert_eq!(config.margins.left, 20.0);
    assert!(config.watermark.enabled);
    assert_eq!(config.watermark.text, "PaperCraft");
    assert_eq!(config.pages.count, 3);
    assert!(!config.pages.show_numbers);
    assert_eq!(config.name, "Default Lined");
}

#[test]
fn test_import_keeps_at_least_one_page() {
    let doc = r#"{"pattern": "grid", "margins": {"top": 20}, "size": "A4", "pages": {"count": 0}}"#;
    let config = PaperConfig::from_document(doc).unwrap();
    assert_eq!(config.pages.count, 1);

    let mut cache = TileCache::new();
    assert_eq!(compose_document(&config, &mut cache).len(), 1);
}

#[test]
fn test_import_tolerates_unknown_pattern() {
    let doc = r#"{"pattern": "spirograph", "margins": {}, "size": "Foolscap"}"#;
    let config = PaperConfig::from_document(doc).unwrap();
    assert_eq!(config.pattern, PatternType::Unknown);
    assert_eq!(config.page_size(), PaperDimension::new(210.0, 297.0));
}

#[test]
fn test_theme_only_touches_colors() {
    let config = PaperConfig {
        spacing: 6.0,
        ..PaperConfig::default()
    };
    let themed = config.with_theme("night").unwrap();
    assert_eq!(themed.theme.as_deref(), Some("night"));
    assert_eq!(themed.stroke_color, "#475569");
    assert_eq!(themed.background.color, "#1e293b");
    assert_eq!(themed.background.pattern_color, "#334155");
    assert_eq!(themed.spacing, 6.0);
    assert_eq!(themed.background.pattern_opacity, config.background.pattern_opacity);

    assert!(matches!(
        config.with_theme("neon"),
        Err(PaperError::UnknownTheme(_))
    ));
}

#[test]
fn test_template_keeps_caller_id() {
    let config = PaperConfig {
        id: "doc-42".to_string(),
        ..PaperConfig::default()
    };
    let applied = config.with_template("tianzi").unwrap();
    assert_eq!(applied.id, "doc-42");
    assert_eq!(applied.pattern, PatternType::Tianzi);
    assert_eq!(applied.background.color, "#FFF8E6");
    assert!(matches!(
        config.with_template("nope"),
        Err(PaperError::UnknownTemplate(_))
    ));
}

#[test]
fn test_catalog_order_and_size() {
    let all = templates();
    assert_eq!(all.len(), 27);
    assert_eq!(all[0].id, "lined-basic");
    assert_eq!(all[26].id, "practice_paper");
    for (i, t) in all.iter().enumerate() {
        assert!(all[i + 1..].iter().all(|o| o.id != t.id), "duplicate {}", t.id);
    }
    let calligraphy = find_template("calligraphy").unwrap();
    assert_eq!(calligraphy.pattern, PatternType::Mizige);
    assert_eq!(calligraphy.line_style, LineStyle::Dashed);
    assert_eq!(calligraphy.margins.top, 10.0);
}

#[tokio::test]
async fn test_save_and_load_file() {
    use tempfile::NamedTempFile;

    let config = PaperConfig::default().with_theme("ocean").unwrap();
    let temp = NamedTempFile::new().unwrap();

    config.save(temp.path()).await.unwrap();
    let loaded = PaperConfig::load(temp.path()).await.unwrap();
    assert_eq!(loaded, config);

    let imported = PaperConfig::import_file(temp.path()).await.unwrap();
    assert_ne!(imported.id, config.id);
    assert_eq!(imported.stroke_color, config.stroke_color);
}
