//! Scene rasterization onto a tiny-skia pixmap
//!
//! Drawing happens in page millimeters; a single scale transform maps
//! millimeters to device pixels at the requested resolution.

use crate::text::system_font;
use crate::types::{ExportError, Result};
use paper_pattern::constants::px_per_mm;
use paper_pattern::tile::{PathSegment, tile_origins};
use paper_pattern::{Element, PatternTile, Point, Rect, Rgb, Scene, Shape, StrokeStyle};
use tiny_skia::{
    Color, FillRule, Mask, Paint, PathBuilder, Pixmap, Stroke, StrokeDash, Transform,
};

/// Pixel extent of `mm` at `dpi`, rounded up so the page is never cropped
pub fn pixel_extent(mm: f32, dpi: f32) -> u32 {
    (mm * px_per_mm(dpi)).ceil().max(1.0) as u32
}

pub(crate) struct Rasterizer {
    pixmap: Pixmap,
    dpi: f32,
}

impl Rasterizer {
    pub(crate) fn new(width_mm: f32, height_mm: f32, dpi: f32) -> Result<Self> {
        Ok(Self {
            pixmap: allocate(width_mm, height_mm, dpi)?,
            dpi,
        })
    }

    /// Draw `scene` over a fresh white page. The pixmap is reused while
    /// consecutive scenes share the same page size.
    pub(crate) fn render(&mut self, scene: &Scene) -> Result<()> {
        let width = pixel_extent(scene.width_mm, self.dpi);
        let height = pixel_extent(scene.height_mm, self.dpi);
        if self.pixmap.width() != width || self.pixmap.height() != height {
            self.pixmap = allocate(scene.width_mm, scene.height_mm, self.dpi)?;
        }
        self.pixmap.fill(Color::WHITE);

        let page = PageCanvas {
            pixmap: &mut self.pixmap,
            transform: Transform::from_scale(px_per_mm(self.dpi), px_per_mm(self.dpi)),
            page_width: scene.width_mm,
            page_height: scene.height_mm,
        };
        page.draw(scene)
    }

    pub(crate) fn pixmap(&self) -> &Pixmap {
        &self.pixmap
    }

    /// Packed 8-bit RGB. The page starts opaque white, so dropping alpha
    /// from the premultiplied data is exact.
    pub(crate) fn rgb(&self) -> Vec<u8> {
        self.pixmap
            .data()
            .chunks_exact(4)
            .flat_map(|px| [px[0], px[1], px[2]])
            .collect()
    }
}

fn allocate(width_mm: f32, height_mm: f32, dpi: f32) -> Result<Pixmap> {
    let width = pixel_extent(width_mm, dpi);
    let height = pixel_extent(height_mm, dpi);
    Pixmap::new(width, height).ok_or_else(|| {
        ExportError::Raster(format!("cannot allocate a {}x{} pixel page", width, height))
    })
}

struct PageCanvas<'a> {
    pixmap: &'a mut Pixmap,
    transform: Transform,
    page_width: f32,
    page_height: f32,
}

impl PageCanvas<'_> {
    fn draw(mut self, scene: &Scene) -> Result<()> {
        for item in &scene.items {
            match &item.element {
                Element::FillRect {
                    rect,
                    color,
                    opacity,
                } => self.fill_rect(rect, *color, *opacity),
                Element::TileFill { rect, tile } => self.fill_tiles(rect, tile)?,
                Element::Line { from, to, stroke } => {
                    let mut builder = PathBuilder::new();
                    builder.move_to(from.x, from.y);
                    builder.line_to(to.x, to.y);
                    self.stroke(builder, stroke, None);
                }
                Element::OutlineRect { rect, stroke } => {
                    let mut builder = PathBuilder::new();
                    push_rect(&mut builder, rect, Point::default());
                    self.stroke(builder, stroke, None);
                }
                Element::Text(text) => {
                    let Some(font) = system_font() else {
                        continue;
                    };
                    if let Some(path) = font.text_path(text) {
                        let paint = paint(text.color, text.opacity);
                        self.pixmap
                            .fill_path(&path, &paint, FillRule::Winding, self.transform, None);
                    }
                }
            }
        }
        Ok(())
    }

    fn fill_rect(&mut self, rect: &Rect, color: Rgb, opacity: f32) {
        let mut builder = PathBuilder::new();
        push_rect(&mut builder, rect, Point::default());
        if let Some(path) = builder.finish() {
            self.pixmap.fill_path(
                &path,
                &paint(color, opacity),
                FillRule::Winding,
                self.transform,
                None,
            );
        }
    }

    /// Each primitive is merged across every tile instance into one path,
    /// then drawn once under a mask of the fill rectangle.
    fn fill_tiles(&mut self, rect: &Rect, tile: &PatternTile) -> Result<()> {
        let (tile_width, tile_height) = tile.resolved_size(self.page_width, self.page_height);
        let origins = tile_origins(tile_width, tile_height, rect);
        if origins.is_empty() {
            return Ok(());
        }

        let mut clip = Mask::new(self.pixmap.width(), self.pixmap.height())
            .ok_or_else(|| ExportError::Raster("cannot allocate clip mask".to_string()))?;
        let mut clip_path = PathBuilder::new();
        push_rect(&mut clip_path, rect, Point::default());
        if let Some(path) = clip_path.finish() {
            clip.fill_path(&path, FillRule::Winding, false, self.transform);
        }

        for primitive in &tile.primitives {
            let mut builder = PathBuilder::new();
            for origin in &origins {
                push_shape(&mut builder, &primitive.shape, *origin, tile_width, tile_height);
            }

            if let Some(fill) = &primitive.fill {
                if let Some(path) = builder.clone().finish() {
                    self.pixmap.fill_path(
                        &path,
                        &paint(fill.color, fill.opacity),
                        FillRule::Winding,
                        self.transform,
                        Some(&clip),
                    );
                }
            }
            if let Some(stroke) = &primitive.stroke {
                self.stroke(builder, stroke, Some(&clip));
            }
        }
        Ok(())
    }

    fn stroke(&mut self, builder: PathBuilder, style: &StrokeStyle, clip: Option<&Mask>) {
        let Some(path) = builder.finish() else {
            return;
        };
        if style.width <= 0.0 {
            return;
        }
        let stroke = Stroke {
            width: style.width,
            dash: style
                .dash
                .as_ref()
                .and_then(|dash| StrokeDash::new(dash.clone(), 0.0)),
            ..Stroke::default()
        };
        self.pixmap.stroke_path(
            &path,
            &paint(style.color, style.opacity),
            &stroke,
            self.transform,
            clip,
        );
    }
}

fn paint(color: Rgb, opacity: f32) -> Paint<'static> {
    let alpha = (opacity.clamp(0.0, 1.0) * 255.0).round() as u8;
    let mut paint = Paint::default();
    paint.set_color_rgba8(color.r, color.g, color.b, alpha);
    paint.anti_alias = true;
    paint
}

fn push_rect(builder: &mut PathBuilder, rect: &Rect, origin: Point) {
    if let Some(rect) =
        tiny_skia::Rect::from_xywh(origin.x + rect.x, origin.y + rect.y, rect.width, rect.height)
    {
        builder.push_rect(rect);
    }
}

fn push_shape(
    builder: &mut PathBuilder,
    shape: &Shape,
    origin: Point,
    tile_width: f32,
    tile_height: f32,
) {
    match shape {
        Shape::Line { from, to } => {
            let from = from.resolve(tile_width, tile_height);
            let to = to.resolve(tile_width, tile_height);
            builder.move_to(origin.x + from.x, origin.y + from.y);
            builder.line_to(origin.x + to.x, origin.y + to.y);
        }
        Shape::Path(segments) => {
            for segment in segments {
                match segment {
                    PathSegment::MoveTo(p) => builder.move_to(origin.x + p.x, origin.y + p.y),
                    PathSegment::LineTo(p) => builder.line_to(origin.x + p.x, origin.y + p.y),
                    PathSegment::Close => builder.close(),
                }
            }
        }
        Shape::Circle { center, radius } => {
            builder.push_circle(origin.x + center.x, origin.y + center.y, *radius);
        }
        Shape::Rect(rect) => push_rect(builder, rect, origin),
    }
}
