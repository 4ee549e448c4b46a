use crate::raster::Rasterizer;
use crate::types::{ExportError, Result};
use image::ExtendedColorType;
use image::codecs::jpeg::JpegEncoder;

pub(crate) fn encode_png(raster: &Rasterizer) -> Result<Vec<u8>> {
    raster
        .pixmap()
        .encode_png()
        .map_err(|e| ExportError::Encode(e.to_string()))
}

pub(crate) fn encode_jpeg(raster: &Rasterizer, quality: u8) -> Result<Vec<u8>> {
    let pixmap = raster.pixmap();
    let mut bytes = Vec::new();
    JpegEncoder::new_with_quality(&mut bytes, quality.clamp(1, 100))
        .encode(
            &raster.rgb(),
            pixmap.width(),
            pixmap.height(),
            ExtendedColorType::Rgb8,
        )
        .map_err(|e| ExportError::Encode(e.to_string()))?;
    Ok(bytes)
}
