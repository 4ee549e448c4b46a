mod encode;
mod export;
mod pdf;
mod print;
mod raster;
mod text;
mod types;

pub use export::{
    export_file_name, export_scenes, export_to_dir, print_document, save_print_document,
};
pub use raster::pixel_extent;
pub use types::*;
