//! Ordered draw lists for composed pages
//!
//! A scene is backend-neutral: the raster and vector renderers walk the
//! items in order, so later items occlude earlier ones.

use crate::color::Rgb;
use crate::geometry::{Point, Rect};
use crate::tile::{PatternTile, StrokeStyle};
use std::sync::Arc;

/// Which composition step produced an item
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layer {
    Background,
    BackgroundTexture,
    CornellStructure,
    Content,
    MarginGuide,
    Watermark,
    PageNumber,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAnchor {
    Start,
    Middle,
    End,
}

/// Vertical alignment of text relative to its `y` coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextBaseline {
    /// `y` is the glyph baseline
    Alphabetic,
    /// `y` is the vertical middle of the glyph box
    Middle,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextElement {
    pub text: String,
    /// Anchor point in page mm
    pub position: Point,
    pub font_size_pt: f32,
    pub color: Rgb,
    pub opacity: f32,
    /// Degrees, clockwise on the page, about `position`
    pub rotation_deg: f32,
    pub anchor: TextAnchor,
    pub baseline: TextBaseline,
    /// Decorative text is never exposed as selectable/extractable text
    pub selectable: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    FillRect {
        rect: Rect,
        color: Rgb,
        opacity: f32,
    },
    /// Fill `rect` with copies of `tile` anchored at the page origin
    TileFill {
        rect: Rect,
        tile: Arc<PatternTile>,
    },
    Line {
        from: Point,
        to: Point,
        stroke: StrokeStyle,
    },
    OutlineRect {
        rect: Rect,
        stroke: StrokeStyle,
    },
    Text(TextElement),
}

#[derive(Debug, Clone, PartialEq)]
pub struct SceneItem {
    pub layer: Layer,
    pub element: Element,
}

/// One composed page
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    /// 1-based
    pub page_index: usize,
    pub width_mm: f32,
    pub height_mm: f32,
    pub items: Vec<SceneItem>,
}

impl Scene {
    pub fn new(page_index: usize, width_mm: f32, height_mm: f32) -> Self {
        Self {
            page_index,
            width_mm,
            height_mm,
            items: Vec::new(),
        }
    }

    pub fn push(&mut self, layer: Layer, element: Element) {
        self.items.push(SceneItem { layer, element });
    }

    pub fn page_rect(&self) -> Rect {
        Rect::new(0.0, 0.0, self.width_mm, self.height_mm)
    }

    /// Items belonging to `layer`, in draw order
    pub fn layer(&self, layer: Layer) -> impl Iterator<Item = &Element> {
        self.items
            .iter()
            .filter(move |item| item.layer == layer)
            .map(|item| &item.element)
    }

    pub fn has_layer(&self, layer: Layer) -> bool {
        self.layer(layer).next().is_some()
    }
}
