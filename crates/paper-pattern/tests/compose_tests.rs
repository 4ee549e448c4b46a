use paper_pattern::*;

fn compose(config: &PaperConfig) -> Vec<Scene> {
    let mut cache = TileCache::new();
    compose_document(config, &mut cache)
}

fn layers(scene: &Scene) -> Vec<Layer> {
    scene.items.iter().map(|item| item.layer).collect()
}

#[test]
fn test_a4_grid_scenario() {
    let config = PaperConfig {
        pattern: PatternType::Grid,
        spacing: 5.0,
        ..PaperConfig::default()
    };
    let scenes = compose(&config);
    assert_eq!(scenes.len(), 1);

    let scene = &scenes[0];
    assert_eq!((scene.width_mm, scene.height_mm), (210.0, 297.0));
    let fills: Vec<_> = scene.layer(Layer::Content).collect();
    assert_eq!(fills.len(), 1);
    match fills[0] {
        Element::TileFill { rect, tile } => {
            assert_eq!(*rect, Rect::new(20.0, 20.0, 170.0, 257.0));
            assert_eq!((tile.width, tile.height), (Length::Mm(5.0), Length::Mm(5.0)));
        }
        other => panic!("expected tile fill, got {:?}", other),
    }
}

#[test]
fn test_blank_has_no_content_fill() {
    let config = PaperConfig {
        pattern: PatternType::Blank,
        show_margin_box: true,
        ..PaperConfig::default()
    };
    let scene = &compose(&config)[0];
    assert!(!scene.has_layer(Layer::Content));
    assert!(scene.has_layer(Layer::MarginGuide));
}

#[test]
fn test_unknown_and_children_drawing_render_blank() {
    for pattern in [PatternType::Unknown, PatternType::ChildrenDrawing] {
        let config = PaperConfig {
            pattern,
            ..PaperConfig::default()
        };
        assert!(!compose(&config)[0].has_layer(Layer::Content));
    }
}

#[test]
fn test_draw_order() {
    let config = PaperConfig {
        pattern: PatternType::Cornell,
        show_margin_box: true,
        background: BackgroundConfig {
            pattern: BackgroundPatternType::Dots,
            ..BackgroundConfig::default()
        },
        watermark: WatermarkConfig {
            enabled: true,
            ..WatermarkConfig::default()
        },
        pages: PageConfig {
            count: 1,
            show_numbers: true,
            start_number: 1,
        },
        ..PaperConfig::default()
    };
    let scene = &compose(&config)[0];
    assert_eq!(
        layers(scene),
        vec![
            Layer::Background,
            Layer::BackgroundTexture,
            Layer::CornellStructure,
            Layer::CornellStructure,
            Layer::CornellStructure,
            Layer::Content,
            Layer::MarginGuide,
            Layer::Watermark,
            Layer::PageNumber,
        ]
    );
}

#[test]
fn test_cornell_structure_uses_stroke_settings() {
    let config = PaperConfig {
        pattern: PatternType::Cornell,
        stroke_color: "#808080".to_string(),
        opacity: 0.6,
        ..PaperConfig::default()
    };
    let scene = &compose(&config)[0];
    for element in scene.layer(Layer::CornellStructure) {
        match element {
            Element::Line { stroke, .. } => {
                assert_eq!(stroke.width, 2.0);
                assert_eq!(stroke.opacity, 0.6);
                assert_eq!(stroke.color, Rgb::new(0x80, 0x80, 0x80));
            }
            other => panic!("expected line, got {:?}", other),
        }
    }
}

#[test]
fn test_degenerate_margins_emit_no_fill() {
    let config = PaperConfig::default().with_margins(Margins::uniform(150.0));
    let scene = &compose(&config)[0];
    assert!(!scene.has_layer(Layer::Content));
    assert!(scene.has_layer(Layer::Background));
}

#[test]
fn test_watermark_centered_and_rotated() {
    let config = PaperConfig::default().with_watermark(WatermarkConfig {
        enabled: true,
        rotation: -45.0,
        ..WatermarkConfig::default()
    });
    let scene = &compose(&config)[0];
    let text = scene
        .layer(Layer::Watermark)
        .find_map(|e| match e {
            Element::Text(text) => Some(text.clone()),
            _ => None,
        })
        .unwrap();
    assert_eq!(text.position, Point::new(105.0, 148.5));
    assert_eq!(text.rotation_deg, -45.0);
    assert_eq!(text.anchor, TextAnchor::Middle);
    assert_eq!(text.baseline, TextBaseline::Middle);
    assert!(!text.selectable);
    assert_eq!(text.text, "PaperCraft");
}

#[test]
fn test_page_numbers_count_from_start() {
    let config = PaperConfig::default().with_pages(PageConfig {
        count: 3,
        show_numbers: true,
        start_number: 5,
    });
    let scenes = compose(&config);
    let labels: Vec<String> = scenes
        .iter()
        .map(|scene| {
            scene
                .layer(Layer::PageNumber)
                .find_map(|e| match e {
                    Element::Text(text) => Some(text.text.clone()),
                    _ => None,
                })
                .unwrap()
        })
        .collect();
    assert_eq!(labels, vec!["5", "6", "7"]);
    assert_eq!(
        scenes.iter().map(|s| s.page_index).collect::<Vec<_>>(),
        vec![1, 2, 3]
    );

    match scenes[0].layer(Layer::PageNumber).next().unwrap() {
        Element::Text(text) => {
            assert_eq!(text.position, Point::new(105.0, 287.0));
            assert_eq!(text.font_size_pt, 12.0);
        }
        other => panic!("expected text, got {:?}", other),
    }
}

#[test]
fn test_background_color_fallback() {
    let config = PaperConfig::default().with_background(BackgroundConfig {
        color: "not-a-color".to_string(),
        ..BackgroundConfig::default()
    });
    let scene = &compose(&config)[0];
    match scene.layer(Layer::Background).next().unwrap() {
        Element::FillRect { color, rect, .. } => {
            assert_eq!(*color, Rgb::WHITE);
            assert_eq!(*rect, Rect::new(0.0, 0.0, 210.0, 297.0));
        }
        other => panic!("expected fill, got {:?}", other),
    }
}

#[test]
fn test_pages_share_cached_tiles() {
    let config = PaperConfig::default().with_pages(PageConfig {
        count: 2,
        ..PageConfig::default()
    });
    let mut cache = TileCache::new();
    let scenes = compose_document(&config, &mut cache);
    let tiles: Vec<_> = scenes
        .iter()
        .filter_map(|s| match s.layer(Layer::Content).next() {
            Some(Element::TileFill { tile, .. }) => Some(tile.clone()),
            _ => None,
        })
        .collect();
    assert_eq!(tiles.len(), 2);
    assert!(std::sync::Arc::ptr_eq(&tiles[0], &tiles[1]));
}

#[test]
fn test_zero_page_count_still_composes_one_page() {
    let config = PaperConfig::default().with_pages(PageConfig {
        count: 0,
        show_numbers: true,
        ..PageConfig::default()
    });
    let scenes = compose(&config);
    assert_eq!(scenes.len(), 1);
    assert_eq!(scenes[0].page_index, 1);
}

#[test]
fn test_landscape_page_size() {
    let config = PaperConfig {
        orientation: Orientation::Landscape,
        ..PaperConfig::default()
    };
    let scene = &compose(&config)[0];
    assert_eq!((scene.width_mm, scene.height_mm), (297.0, 210.0));
}
