//! Page composition
//!
//! Turns a configuration plus its generated tiles into one ordered scene
//! per page. Composition never fails: unreadable colors fall back, and
//! degenerate content areas simply produce no content fill.

use crate::background::BackgroundKey;
use crate::cache::TileCache;
use crate::color::Rgb;
use crate::config::PaperConfig;
use crate::constants::*;
use crate::geometry::Point;
use crate::pattern::TileKey;
use crate::scene::{Element, Layer, Scene, TextAnchor, TextBaseline, TextElement};
use crate::tile::{PatternTile, StrokeStyle};
use crate::types::{PaperDimension, PatternType};
use std::sync::Arc;

/// Compose a single page.
///
/// `page_index` is 1-based. `main_tile` and `background_tile` are the
/// tiles generated for this configuration; `None` skips the matching fill.
pub fn compose_page(
    config: &PaperConfig,
    page_index: usize,
    page: PaperDimension,
    main_tile: Option<Arc<PatternTile>>,
    background_tile: Option<Arc<PatternTile>>,
) -> Scene {
    let mut scene = Scene::new(page_index, page.width, page.height);
    let page_rect = scene.page_rect();
    let content = config.margins.content_rect(page);

    // 1. paper color
    scene.push(
        Layer::Background,
        Element::FillRect {
            rect: page_rect,
            color: Rgb::parse_or(
                &config.background.color,
                Rgb::parse_or(DEFAULT_BACKGROUND_COLOR, Rgb::WHITE),
            ),
            opacity: 1.0,
        },
    );

    // 2. texture over the whole page
    if let Some(tile) = background_tile {
        scene.push(
            Layer::BackgroundTexture,
            Element::TileFill {
                rect: page_rect,
                tile,
            },
        );
    }

    // 3. cornell structure sits under the ruling
    if config.pattern == PatternType::Cornell {
        for (from, to) in cornell_lines(config, page) {
            scene.push(
                Layer::CornellStructure,
                Element::Line {
                    from,
                    to,
                    stroke: StrokeStyle::solid(
                        Rgb::parse_or(&config.stroke_color, Rgb::BLACK),
                        CORNELL_LINE_WIDTH,
                        config.opacity,
                    ),
                },
            );
        }
    }

    // 4. main pattern
    if config.pattern != PatternType::Blank {
        match main_tile {
            Some(tile) if !content.is_empty() => {
                scene.push(Layer::Content, Element::TileFill { rect: content, tile });
            }
            Some(_) => log::debug!(
                "Content area {}x{}mm is empty, skipping pattern fill",
                content.width,
                content.height
            ),
            None => {}
        }
    }

    // 5. margin guide
    if config.show_margin_box {
        scene.push(
            Layer::MarginGuide,
            Element::OutlineRect {
                rect: content,
                stroke: StrokeStyle::solid(
                    Rgb::parse_or(MARGIN_BOX_COLOR, Rgb::BLACK),
                    MARGIN_BOX_WIDTH,
                    1.0,
                )
                .with_dash(Some(&MARGIN_BOX_DASH[..])),
            },
        );
    }

    // 6. watermark
    let watermark = &config.watermark;
    if watermark.enabled {
        scene.push(
            Layer::Watermark,
            Element::Text(TextElement {
                text: watermark.text.clone(),
                position: page_rect.center(),
                font_size_pt: watermark.font_size,
                color: Rgb::parse_or(&watermark.color, Rgb::BLACK),
                opacity: watermark.opacity,
                rotation_deg: watermark.rotation,
                anchor: TextAnchor::Middle,
                baseline: TextBaseline::Middle,
                selectable: false,
            }),
        );
    }

    // 7. page number
    if config.pages.show_numbers {
        scene.push(
            Layer::PageNumber,
            Element::Text(TextElement {
                text: page_label(config.pages.start_number, page_index),
                position: Point::new(page.width / 2.0, page.height - PAGE_NUMBER_OFFSET),
                font_size_pt: PAGE_NUMBER_FONT_SIZE,
                color: Rgb::parse_or(PAGE_NUMBER_COLOR, Rgb::BLACK),
                opacity: 1.0,
                rotation_deg: 0.0,
                anchor: TextAnchor::Middle,
                baseline: TextBaseline::Alphabetic,
                selectable: false,
            }),
        );
    }

    scene
}

/// Compose every page of a configuration, generating tiles through
/// `cache`. A page count of zero is treated as one page.
pub fn compose_document(config: &PaperConfig, cache: &mut TileCache) -> Vec<Scene> {
    let page = config.page_size();
    let main_tile = cache.main_tile(&TileKey::from_config(config));
    let background_tile = cache.background_tile(&BackgroundKey::from_config(&config.background));

    let count = config.pages.count.max(1);

    log::debug!(
        "Composing {} page(s) of {} at {}x{}mm",
        count,
        config.pattern.name(),
        page.width,
        page.height
    );

    (1..=count)
        .map(|index| {
            compose_page(
                config,
                index,
                page,
                main_tile.clone(),
                background_tile.clone(),
            )
        })
        .collect()
}

/// Displayed number for a 1-based page index
pub fn page_label(start_number: i64, page_index: usize) -> String {
    (start_number + page_index as i64 - 1).to_string()
}

/// Cue column, summary and header lines bounded by the margins
fn cornell_lines(config: &PaperConfig, page: PaperDimension) -> [(Point, Point); 3] {
    let m = &config.margins;
    let left = m.left;
    let right = page.width - m.right;
    let top = m.top;
    let bottom = page.height - m.bottom;

    let cue_x = left + CORNELL_CUE_OFFSET;
    let summary_y = bottom - CORNELL_SUMMARY_OFFSET;
    let header_y = top + CORNELL_HEADER_OFFSET;

    [
        (Point::new(cue_x, top), Point::new(cue_x, bottom)),
        (Point::new(left, summary_y), Point::new(right, summary_y)),
        (Point::new(left, header_y), Point::new(right, header_y)),
    ]
}
