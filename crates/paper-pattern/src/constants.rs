//! Shared constants for pattern generation and page composition
//!
//! This module centralizes magic numbers used by the tile recipes,
//! the page composer and the export backends.

// =============================================================================
// Unit Conversion
// =============================================================================

/// Millimeters per inch
pub const MM_PER_INCH: f32 = 25.4;

/// Points per millimeter (1 inch = 72 points, 1 inch = 25.4mm)
pub const POINTS_PER_MM: f32 = 72.0 / MM_PER_INCH; // ≈ 2.83465

/// Convert millimeters to points
#[inline]
pub fn mm_to_pt(mm: f32) -> f32 {
    mm * POINTS_PER_MM
}

/// Convert points to millimeters
#[inline]
pub fn pt_to_mm(pt: f32) -> f32 {
    pt / POINTS_PER_MM
}

/// Pixels per millimeter at the given resolution
#[inline]
pub fn px_per_mm(dpi: f32) -> f32 {
    dpi / MM_PER_INCH
}

// =============================================================================
// Export
// =============================================================================

/// Fixed print resolution for raster and PDF export
pub const EXPORT_DPI: f32 = 300.0;

/// JPEG encoder quality (0-100)
pub const JPEG_QUALITY: u8 = 95;

// =============================================================================
// Dash Patterns (mm)
// =============================================================================

pub const DASHED: [f32; 2] = [4.0, 4.0];
pub const DOTTED: [f32; 2] = [1.0, 4.0];

/// Dash for the faint guide lines inside practice cells and ruled rows
pub const GUIDE_DASH: [f32; 2] = [2.0, 2.0];

// =============================================================================
// Tile Recipes
// =============================================================================

/// Smallest dot radius for dot-style patterns
pub const MIN_DOT_RADIUS: f32 = 0.5;

/// Half-length of each arm of a `cross` mark
pub const CROSS_ARM: f32 = 1.0;

/// Gap between the five lines of a music staff
pub const STAFF_LINE_GAP: f32 = 2.0;
pub const STAFF_LINES: usize = 5;

/// Gap between the six lines of a guitar tablature row
pub const TAB_LINE_GAP: f32 = 2.5;
pub const TAB_LINES: usize = 6;

/// Space left between storyboard frames (both axes)
pub const STORYBOARD_GUTTER: f32 = 10.0;
pub const STORYBOARD_ASPECT: f32 = 1.77;

/// Seyes sub-line styling
pub const SEYES_GUIDE_WIDTH: f32 = 0.2;
pub const SEYES_GUIDE_OPACITY: f32 = 0.4;

/// Guide lines in pinyin/english rows are thinner than the boundaries
pub const ROW_GUIDE_WIDTH_RATIO: f32 = 0.8;

/// Overlays inside Chinese practice cells
pub const CELL_GUIDE_WIDTH_RATIO: f32 = 0.5;
pub const CELL_GUIDE_OPACITY_RATIO: f32 = 0.7;

/// pinyin_tianzi: share of the row given to the pinyin lines
pub const PINYIN_ROW_RATIO: f32 = 0.35;

/// composition_paper: box side relative to the tile
pub const COMPOSITION_BOX_RATIO: f32 = 0.9;

/// Tiles smaller than this on either axis are not laid out
pub const MIN_TILE_EXTENT_MM: f32 = 0.5;

// =============================================================================
// Background Texture
// =============================================================================

/// Fixed background texture period, independent of the main spacing
pub const BACKGROUND_TILE_MM: f32 = 5.0;
pub const BACKGROUND_STROKE_WIDTH: f32 = 0.2;
pub const BACKGROUND_DOT_RADIUS: f32 = 0.5;

// =============================================================================
// Page Overlays
// =============================================================================

/// Cornell cue column sits this far right of the left margin
pub const CORNELL_CUE_OFFSET: f32 = 60.0;
/// Cornell summary line sits this far above the bottom margin
pub const CORNELL_SUMMARY_OFFSET: f32 = 50.0;
/// Cornell header line sits this far below the top margin
pub const CORNELL_HEADER_OFFSET: f32 = 25.0;
pub const CORNELL_LINE_WIDTH: f32 = 2.0;

pub const MARGIN_BOX_COLOR: &str = "#ef4444";
pub const MARGIN_BOX_WIDTH: f32 = 0.5;
pub const MARGIN_BOX_DASH: [f32; 2] = [4.0, 4.0];

/// Page number baseline distance from the bottom edge (mm)
pub const PAGE_NUMBER_OFFSET: f32 = 10.0;
/// Page number font size (points)
pub const PAGE_NUMBER_FONT_SIZE: f32 = 12.0;
pub const PAGE_NUMBER_COLOR: &str = "#64748b";

/// Default page fill when the background color is missing or unreadable
pub const DEFAULT_BACKGROUND_COLOR: &str = "#ffffff";

// =============================================================================
// Persistence
// =============================================================================

/// File name used by the JSON saved-template store
pub const SAVED_TEMPLATES_FILE: &str = "papercraft_saved_configs.json";
