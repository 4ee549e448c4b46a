//! Main pattern generation
//!
//! Maps the stroke-related subset of a configuration to a tile. Each
//! pattern family has its own recipe:
//! - `ruled`: full-width row patterns (lined, pinyin, music staff, ...)
//! - `grid`: square tiles (grid, dot, cross, seyes, storyboard, ...)
//! - `lattice`: isometric dots and honeycomb
//! - `cells`: Chinese character practice boxes

mod cells;
mod grid;
mod lattice;
mod ruled;

use crate::color::Rgb;
use crate::config::PaperConfig;
use crate::constants::{DASHED, DOTTED};
use crate::tile::{FillStyle, PatternTile, StrokeStyle};
use crate::types::{LineStyle, PatternType};
use std::hash::{Hash, Hasher};

/// Every input that affects main tile geometry or styling.
///
/// Two keys compare equal exactly when the tiles they produce are equal;
/// unrelated configuration fields (watermark, margins, ...) are not part
/// of the key.
#[derive(Debug, Clone)]
pub struct TileKey {
    pub pattern: PatternType,
    pub spacing: f32,
    pub stroke_color: String,
    pub stroke_width: f32,
    pub opacity: f32,
    pub line_style: LineStyle,
}

impl TileKey {
    pub fn from_config(config: &PaperConfig) -> Self {
        Self {
            pattern: config.pattern,
            spacing: config.spacing,
            stroke_color: config.stroke_color.clone(),
            stroke_width: config.stroke_width,
            opacity: config.opacity,
            line_style: config.line_style,
        }
    }

    /// Stable identity string for the tile this key produces
    pub fn tile_id(&self) -> String {
        format!(
            "pattern-{}-{}-{}-{}-{}-{}",
            self.pattern.name(),
            self.spacing,
            self.stroke_color,
            self.stroke_width,
            self.opacity,
            self.line_style.name()
        )
    }
}

impl PartialEq for TileKey {
    fn eq(&self, other: &Self) -> bool {
        self.pattern == other.pattern
            && self.spacing.to_bits() == other.spacing.to_bits()
            && self.stroke_color == other.stroke_color
            && self.stroke_width.to_bits() == other.stroke_width.to_bits()
            && self.opacity.to_bits() == other.opacity.to_bits()
            && self.line_style == other.line_style
    }
}

impl Eq for TileKey {}

impl Hash for TileKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.pattern.hash(state);
        self.spacing.to_bits().hash(state);
        self.stroke_color.hash(state);
        self.stroke_width.to_bits().hash(state);
        self.opacity.to_bits().hash(state);
        self.line_style.hash(state);
    }
}

/// Dash array for a line style, `None` for solid
pub fn dash_array(style: LineStyle) -> Option<&'static [f32]> {
    match style {
        LineStyle::Solid => None,
        LineStyle::Dashed => Some(&DASHED[..]),
        LineStyle::Dotted => Some(&DOTTED[..]),
    }
}

/// Styling inputs resolved once per tile and shared by the recipes
pub(crate) struct Pen {
    pub spacing: f32,
    pub color: Rgb,
    pub width: f32,
    pub opacity: f32,
    pub dash: Option<&'static [f32]>,
}

impl Pen {
    fn from_key(key: &TileKey) -> Self {
        Self {
            spacing: key.spacing,
            color: Rgb::parse_or(&key.stroke_color, Rgb::BLACK),
            width: key.stroke_width,
            opacity: key.opacity,
            dash: dash_array(key.line_style),
        }
    }

    /// The configured stroke, including the line style's dash
    pub fn stroke(&self) -> StrokeStyle {
        StrokeStyle::solid(self.color, self.width, self.opacity).with_dash(self.dash)
    }

    /// A stroke with arbitrary width, opacity and dash in the pen's color
    pub fn custom(&self, width: f32, opacity: f32, dash: Option<&[f32]>) -> StrokeStyle {
        StrokeStyle::solid(self.color, width, opacity).with_dash(dash)
    }

    pub fn fill(&self) -> FillStyle {
        FillStyle {
            color: self.color,
            opacity: self.opacity,
        }
    }
}

/// Generate the main pattern tile.
///
/// Returns `None` for patterns without a ruling (`blank`,
/// `children_drawing`, unrecognized types); the page composer skips the
/// content fill in that case.
pub fn generate_tile(key: &TileKey) -> Option<PatternTile> {
    let pen = Pen::from_key(key);
    let (width, height, primitives) = match key.pattern {
        PatternType::Lined | PatternType::Cornell => ruled::lined(&pen),
        PatternType::VerticalLined => ruled::vertical_lined(&pen),
        PatternType::Pinyin | PatternType::EnglishPaper => ruled::four_line(&pen),
        PatternType::Music => ruled::music_staff(&pen),
        PatternType::GuitarTab => ruled::guitar_tab(&pen),
        PatternType::Grid | PatternType::ArithmeticPaper => grid::grid(&pen),
        PatternType::Dot => grid::dot(&pen),
        PatternType::Cross => grid::cross(&pen),
        PatternType::Seyes => grid::seyes(&pen),
        PatternType::Storyboard => grid::storyboard(&pen),
        PatternType::CompositionPaper => grid::composition(&pen),
        PatternType::Isometric => lattice::isometric(&pen),
        PatternType::Hexagonal => lattice::hexagonal(&pen),
        PatternType::Tianzi
        | PatternType::Mizige
        | PatternType::Jiugongge
        | PatternType::Huigongge
        | PatternType::HardpenHuigongge => cells::practice_cell(&pen, key.pattern),
        PatternType::PinyinTianzi => cells::pinyin_tianzi(&pen),
        PatternType::Blank | PatternType::ChildrenDrawing | PatternType::Unknown => return None,
    };

    Some(PatternTile {
        id: key.tile_id(),
        width,
        height,
        primitives,
    })
}
