use crate::geometry::Rect;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PaperError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Import failed: {0}")]
    Import(String),
    #[error("Template store error: {0}")]
    Store(String),
    #[error("Unknown template: {0}")]
    UnknownTemplate(String),
    #[error("Unknown theme: {0}")]
    UnknownTheme(String),
    #[error("Task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
}

pub type Result<T> = std::result::Result<T, PaperError>;

/// Paper orientation
///
/// Landscape swaps the resolved width and height; content is never rotated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    #[default]
    Portrait,
    Landscape,
}

/// Named physical paper sizes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PaperSize {
    A3,
    #[default]
    A4,
    A5,
    B4,
    B5,
    Letter,
    Legal,
    Tabloid,
    Executive,
    /// Uses `PaperConfig::custom_dimensions`
    #[serde(rename = "custom")]
    Custom,
    /// Any identifier we don't recognize; resolves as A4
    #[serde(rename = "unknown", other)]
    Unknown,
}

impl PaperSize {
    pub const NAMED: [PaperSize; 9] = [
        PaperSize::A3,
        PaperSize::A4,
        PaperSize::A5,
        PaperSize::B4,
        PaperSize::B5,
        PaperSize::Letter,
        PaperSize::Legal,
        PaperSize::Tabloid,
        PaperSize::Executive,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            PaperSize::A3 => "A3",
            PaperSize::A4 => "A4",
            PaperSize::A5 => "A5",
            PaperSize::B4 => "B4",
            PaperSize::B5 => "B5",
            PaperSize::Letter => "Letter",
            PaperSize::Legal => "Legal",
            PaperSize::Tabloid => "Tabloid",
            PaperSize::Executive => "Executive",
            PaperSize::Custom => "custom",
            PaperSize::Unknown => "unknown",
        }
    }
}

/// Width and height in millimeters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PaperDimension {
    pub width: f32,
    pub height: f32,
}

impl PaperDimension {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn swapped(self) -> Self {
        Self {
            width: self.height,
            height: self.width,
        }
    }
}

/// Ruling families for the main content area
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PatternType {
    Blank,
    #[default]
    Lined,
    VerticalLined,
    Grid,
    Dot,
    Isometric,
    Hexagonal,
    Cross,
    Cornell,
    Seyes,
    Music,
    GuitarTab,
    Storyboard,
    Pinyin,
    PinyinTianzi,
    CompositionPaper,
    ArithmeticPaper,
    EnglishPaper,
    Mizige,
    Huigongge,
    Jiugongge,
    Tianzi,
    HardpenHuigongge,
    /// Listed by the catalog but has no ruling of its own
    ChildrenDrawing,
    /// Anything unrecognized; rendered as blank
    #[serde(other)]
    Unknown,
}

impl PatternType {
    pub const ALL: [PatternType; 24] = [
        PatternType::Blank,
        PatternType::Lined,
        PatternType::VerticalLined,
        PatternType::Grid,
        PatternType::Dot,
        PatternType::Isometric,
        PatternType::Hexagonal,
        PatternType::Cross,
        PatternType::Cornell,
        PatternType::Seyes,
        PatternType::Music,
        PatternType::GuitarTab,
        PatternType::Storyboard,
        PatternType::Pinyin,
        PatternType::PinyinTianzi,
        PatternType::CompositionPaper,
        PatternType::ArithmeticPaper,
        PatternType::EnglishPaper,
        PatternType::Mizige,
        PatternType::Huigongge,
        PatternType::Jiugongge,
        PatternType::Tianzi,
        PatternType::HardpenHuigongge,
        PatternType::ChildrenDrawing,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            PatternType::Blank => "blank",
            PatternType::Lined => "lined",
            PatternType::VerticalLined => "vertical_lined",
            PatternType::Grid => "grid",
            PatternType::Dot => "dot",
            PatternType::Isometric => "isometric",
            PatternType::Hexagonal => "hexagonal",
            PatternType::Cross => "cross",
            PatternType::Cornell => "cornell",
            PatternType::Seyes => "seyes",
            PatternType::Music => "music",
            PatternType::GuitarTab => "guitar_tab",
            PatternType::Storyboard => "storyboard",
            PatternType::Pinyin => "pinyin",
            PatternType::PinyinTianzi => "pinyin_tianzi",
            PatternType::CompositionPaper => "composition_paper",
            PatternType::ArithmeticPaper => "arithmetic_paper",
            PatternType::EnglishPaper => "english_paper",
            PatternType::Mizige => "mizige",
            PatternType::Huigongge => "huigongge",
            PatternType::Jiugongge => "jiugongge",
            PatternType::Tianzi => "tianzi",
            PatternType::HardpenHuigongge => "hardpen_huigongge",
            PatternType::ChildrenDrawing => "children_drawing",
            PatternType::Unknown => "unknown",
        }
    }
}

/// Decorative page-wide texture, independent of the main pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackgroundPatternType {
    #[default]
    None,
    Grid,
    Dots,
    Lines,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineStyle {
    #[default]
    Solid,
    Dashed,
    Dotted,
}

impl LineStyle {
    pub fn name(&self) -> &'static str {
        match self {
            LineStyle::Solid => "solid",
            LineStyle::Dashed => "dashed",
            LineStyle::Dotted => "dotted",
        }
    }
}

/// Page margins in millimeters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Margins {
    pub top: f32,
    pub bottom: f32,
    pub left: f32,
    pub right: f32,
}

impl Default for Margins {
    fn default() -> Self {
        Self::uniform(20.0)
    }
}

impl Margins {
    /// Create uniform margins on all sides
    pub fn uniform(margin_mm: f32) -> Self {
        Self {
            top: margin_mm,
            bottom: margin_mm,
            left: margin_mm,
            right: margin_mm,
        }
    }

    /// Area left inside these margins on a page of the given size.
    /// Margins that meet or exceed the page leave an empty rect.
    pub fn content_rect(&self, page: PaperDimension) -> Rect {
        Rect::new(
            self.left,
            self.top,
            page.width - self.left - self.right,
            page.height - self.top - self.bottom,
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackgroundConfig {
    pub color: String,
    pub pattern: BackgroundPatternType,
    pub pattern_color: String,
    pub pattern_opacity: f32,
}

impl Default for BackgroundConfig {
    fn default() -> Self {
        Self {
            color: "#ffffff".to_string(),
            pattern: BackgroundPatternType::None,
            pattern_color: "#e2e8f0".to_string(),
            pattern_opacity: 0.5,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WatermarkConfig {
    pub enabled: bool,
    pub text: String,
    pub color: String,
    pub opacity: f32,
    /// Points
    pub font_size: f32,
    /// Degrees about the page center
    pub rotation: f32,
}

impl Default for WatermarkConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            text: "PaperCraft".to_string(),
            color: "#cbd5e1".to_string(),
            opacity: 0.2,
            font_size: 48.0,
            rotation: -45.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageConfig {
    pub count: usize,
    pub show_numbers: bool,
    pub start_number: i64,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            count: 1,
            show_numbers: false,
            start_number: 1,
        }
    }
}
