//! Tile descriptors shared by the main and background pattern generators
//!
//! A tile is the smallest repeating unit of a pattern. Tiles are anchored
//! at the page origin and repeated across whatever rectangle they fill;
//! the fill rectangle only clips.

use crate::color::Rgb;
use crate::constants::MIN_TILE_EXTENT_MM;
use crate::geometry::{Point, Rect};

/// A length that is either absolute or spans the whole reference extent.
///
/// For tile sizes the reference is the page; for line endpoints inside a
/// tile it is the tile itself.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Length {
    Mm(f32),
    Full,
}

impl Length {
    pub fn resolve(self, full: f32) -> f32 {
        match self {
            Length::Mm(v) => v,
            Length::Full => full,
        }
    }
}

/// A point inside a tile whose coordinates may span the tile
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TilePoint {
    pub x: Length,
    pub y: Length,
}

impl TilePoint {
    pub const fn mm(x: f32, y: f32) -> Self {
        Self {
            x: Length::Mm(x),
            y: Length::Mm(y),
        }
    }

    pub fn resolve(self, tile_width: f32, tile_height: f32) -> Point {
        Point::new(self.x.resolve(tile_width), self.y.resolve(tile_height))
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathSegment {
    MoveTo(Point),
    LineTo(Point),
    Close,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Line { from: TilePoint, to: TilePoint },
    Path(Vec<PathSegment>),
    Circle { center: Point, radius: f32 },
    Rect(Rect),
}

#[derive(Debug, Clone, PartialEq)]
pub struct StrokeStyle {
    pub color: Rgb,
    pub width: f32,
    pub opacity: f32,
    /// Alternating dash/gap lengths in mm, `None` for a solid stroke
    pub dash: Option<Vec<f32>>,
}

impl StrokeStyle {
    pub fn solid(color: Rgb, width: f32, opacity: f32) -> Self {
        Self {
            color,
            width,
            opacity,
            dash: None,
        }
    }

    pub fn with_dash(mut self, dash: Option<&[f32]>) -> Self {
        self.dash = dash.map(<[f32]>::to_vec);
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FillStyle {
    pub color: Rgb,
    pub opacity: f32,
}

/// One drawing instruction inside a tile
#[derive(Debug, Clone, PartialEq)]
pub struct Primitive {
    pub shape: Shape,
    pub stroke: Option<StrokeStyle>,
    pub fill: Option<FillStyle>,
}

impl Primitive {
    pub fn stroked(shape: Shape, stroke: StrokeStyle) -> Self {
        Self {
            shape,
            stroke: Some(stroke),
            fill: None,
        }
    }

    pub fn filled(shape: Shape, fill: FillStyle) -> Self {
        Self {
            shape,
            stroke: None,
            fill: Some(fill),
        }
    }

    pub fn line(from: TilePoint, to: TilePoint, stroke: StrokeStyle) -> Self {
        Self::stroked(Shape::Line { from, to }, stroke)
    }

    /// Horizontal line across the full tile width at `y`
    pub fn hline(y: f32, stroke: StrokeStyle) -> Self {
        Self::line(
            TilePoint::mm(0.0, y),
            TilePoint {
                x: Length::Full,
                y: Length::Mm(y),
            },
            stroke,
        )
    }
}

/// A repeating tile definition
#[derive(Debug, Clone, PartialEq)]
pub struct PatternTile {
    /// Identity derived from every input that shaped this tile
    pub id: String,
    pub width: Length,
    pub height: Length,
    pub primitives: Vec<Primitive>,
}

impl PatternTile {
    /// Tile size in mm for a page of the given size
    pub fn resolved_size(&self, page_width: f32, page_height: f32) -> (f32, f32) {
        (self.width.resolve(page_width), self.height.resolve(page_height))
    }
}

/// Origins of every tile that overlaps `rect`, for tiles anchored at the
/// page origin.
///
/// Returns nothing for an empty rect or for tiles too small to lay out.
pub fn tile_origins(tile_width: f32, tile_height: f32, rect: &Rect) -> Vec<Point> {
    if rect.is_empty() {
        return Vec::new();
    }
    if !(tile_width >= MIN_TILE_EXTENT_MM && tile_height >= MIN_TILE_EXTENT_MM) {
        log::warn!(
            "Tile {}x{}mm is below the {}mm minimum, skipping fill",
            tile_width,
            tile_height,
            MIN_TILE_EXTENT_MM
        );
        return Vec::new();
    }

    let first_col = (rect.x / tile_width).floor() as i64;
    let last_col = (rect.right() / tile_width).ceil() as i64;
    let first_row = (rect.y / tile_height).floor() as i64;
    let last_row = (rect.bottom() / tile_height).ceil() as i64;

    let mut origins = Vec::new();
    for row in first_row..last_row {
        for col in first_col..last_col {
            origins.push(Point::new(col as f32 * tile_width, row as f32 * tile_height));
        }
    }
    origins
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tile_origins_cover_rect() {
        let rect = Rect::new(20.0, 20.0, 170.0, 257.0);
        let origins = tile_origins(5.0, 5.0, &rect);
        // columns 4..38, rows 4..56
        assert_eq!(origins.len(), 34 * 52);
        assert_eq!(origins[0], Point::new(20.0, 20.0));
        let last = origins.last().unwrap();
        assert_eq!(*last, Point::new(185.0, 275.0));
    }

    #[test]
    fn test_tile_origins_partial_tiles_included() {
        let rect = Rect::new(2.0, 0.0, 6.0, 5.0);
        let origins = tile_origins(5.0, 5.0, &rect);
        assert_eq!(origins, vec![Point::new(0.0, 0.0), Point::new(5.0, 0.0)]);
    }

    #[test]
    fn test_tile_origins_empty_rect() {
        assert!(tile_origins(5.0, 5.0, &Rect::new(20.0, 20.0, 0.0, 100.0)).is_empty());
        assert!(tile_origins(5.0, 5.0, &Rect::new(20.0, 20.0, -10.0, 100.0)).is_empty());
    }

    #[test]
    fn test_tile_origins_degenerate_tile() {
        let rect = Rect::new(0.0, 0.0, 100.0, 100.0);
        assert!(tile_origins(0.0, 5.0, &rect).is_empty());
        assert!(tile_origins(f32::NAN, 5.0, &rect).is_empty());
    }
}
