//! Page-wide background texture
//!
//! The texture covers the whole page, margins included, with a fixed
//! period that does not follow the main pattern's spacing.

use crate::color::Rgb;
use crate::constants::{BACKGROUND_DOT_RADIUS, BACKGROUND_STROKE_WIDTH, BACKGROUND_TILE_MM};
use crate::geometry::Point;
use crate::tile::{FillStyle, Length, PathSegment, PatternTile, Primitive, Shape, StrokeStyle};
use crate::types::{BackgroundConfig, BackgroundPatternType};
use std::hash::{Hash, Hasher};

/// Inputs that shape the background texture tile
#[derive(Debug, Clone)]
pub struct BackgroundKey {
    pub pattern: BackgroundPatternType,
    pub color: String,
    pub opacity: f32,
}

impl BackgroundKey {
    pub fn from_config(background: &BackgroundConfig) -> Self {
        Self {
            pattern: background.pattern,
            color: background.pattern_color.clone(),
            opacity: background.pattern_opacity,
        }
    }
}

impl PartialEq for BackgroundKey {
    fn eq(&self, other: &Self) -> bool {
        self.pattern == other.pattern
            && self.color == other.color
            && self.opacity.to_bits() == other.opacity.to_bits()
    }
}

impl Eq for BackgroundKey {}

impl Hash for BackgroundKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.pattern.hash(state);
        self.color.hash(state);
        self.opacity.to_bits().hash(state);
    }
}

/// Generate the background texture tile, `None` when no texture is set
pub fn generate_background_tile(key: &BackgroundKey) -> Option<PatternTile> {
    let s = BACKGROUND_TILE_MM;
    let color = Rgb::parse_or(&key.color, Rgb::BLACK);
    let stroke = StrokeStyle::solid(color, BACKGROUND_STROKE_WIDTH, key.opacity);

    let (name, width, height, primitive) = match key.pattern {
        BackgroundPatternType::None => return None,
        BackgroundPatternType::Grid => (
            "grid",
            Length::Mm(s),
            Length::Mm(s),
            Primitive::stroked(
                Shape::Path(vec![
                    PathSegment::MoveTo(Point::new(s, 0.0)),
                    PathSegment::LineTo(Point::new(0.0, 0.0)),
                    PathSegment::LineTo(Point::new(0.0, s)),
                ]),
                stroke,
            ),
        ),
        BackgroundPatternType::Dots => (
            "dots",
            Length::Mm(s),
            Length::Mm(s),
            Primitive::filled(
                Shape::Circle {
                    center: Point::new(s / 2.0, s / 2.0),
                    radius: BACKGROUND_DOT_RADIUS,
                },
                FillStyle {
                    color,
                    opacity: key.opacity,
                },
            ),
        ),
        BackgroundPatternType::Lines => (
            "lines",
            Length::Full,
            Length::Mm(s),
            Primitive::hline(s, stroke),
        ),
    };

    Some(PatternTile {
        id: format!("bg-pattern-{}-{}-{}", name, key.color, key.opacity),
        width,
        height,
        primitives: vec![primitive],
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(pattern: BackgroundPatternType) -> BackgroundKey {
        BackgroundKey {
            pattern,
            color: "#e2e8f0".to_string(),
            opacity: 0.5,
        }
    }

    #[test]
    fn test_none_has_no_tile() {
        assert!(generate_background_tile(&key(BackgroundPatternType::None)).is_none());
    }

    #[test]
    fn test_dots_centered_in_fixed_period() {
        let tile = generate_background_tile(&key(BackgroundPatternType::Dots)).unwrap();
        assert_eq!(tile.width, Length::Mm(5.0));
        match &tile.primitives[0].shape {
            Shape::Circle { center, radius } => {
                assert_eq!(*center, Point::new(2.5, 2.5));
                assert_eq!(*radius, 0.5);
            }
            other => panic!("expected circle, got {:?}", other),
        }
        assert_eq!(tile.primitives[0].fill.unwrap().opacity, 0.5);
    }

    #[test]
    fn test_lines_span_page_width() {
        let tile = generate_background_tile(&key(BackgroundPatternType::Lines)).unwrap();
        assert_eq!(tile.width, Length::Full);
        assert_eq!(tile.height, Length::Mm(5.0));
        let stroke = tile.primitives[0].stroke.as_ref().unwrap();
        assert_eq!(stroke.width, 0.2);
    }
}
