pub mod background;
mod cache;
pub mod catalog;
pub mod color;
pub mod compose;
mod config;
pub mod constants;
mod dimensions;
pub mod geometry;
pub mod pattern;
pub mod scene;
pub mod store;
pub mod themes;
pub mod tile;
mod types;

pub use background::{BackgroundKey, generate_background_tile};
pub use cache::TileCache;
pub use catalog::{find_template, templates};
pub use color::Rgb;
pub use compose::{compose_document, compose_page, page_label};
pub use config::{PaperConfig, settings_file_name};
pub use dimensions::resolve_dimensions;
pub use geometry::{Point, Rect};
pub use pattern::{TileKey, generate_tile};
pub use scene::{Element, Layer, Scene, SceneItem, TextAnchor, TextBaseline, TextElement};
pub use store::{JsonFileStore, MemoryStore, TemplateStore, save_template};
pub use themes::{ThemePreset, find_theme, themes};
pub use tile::{Length, PatternTile, Primitive, Shape, StrokeStyle};
pub use types::*;
