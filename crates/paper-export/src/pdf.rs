//! Multi-page raster PDF assembly
//!
//! Each scene is rasterized in turn on one reused pixmap and embedded as a
//! full-page image on a page of the scene's physical size. printpdf
//! writes page boxes in whole points, so the saved document is reopened
//! with lopdf and every page box is set to the exact size.

use crate::raster::Rasterizer;
use crate::types::{ExportError, Result};
use paper_pattern::Scene;
use paper_pattern::constants::mm_to_pt;
use printpdf::*;

/// Page boxes printpdf may write on a page
const PAGE_BOXES: [&str; 3] = ["MediaBox", "CropBox", "TrimBox"];

pub(crate) fn raster_pdf_bytes(scenes: &[Scene], title: &str, dpi: f32) -> Result<Vec<u8>> {
    let first = scenes.first().ok_or(ExportError::NoPages)?;
    let mut raster = Rasterizer::new(first.width_mm, first.height_mm, dpi)?;
    let mut doc = PdfDocument::new(title);

    for scene in scenes {
        raster.render(scene)?;
        let pixmap = raster.pixmap();
        let image = RawImage {
            pixels: RawImageData::U8(raster.rgb()),
            width: pixmap.width() as usize,
            height: pixmap.height() as usize,
            data_format: RawImageFormat::RGB8,
            tag: Vec::new(),
        };
        let image_id = doc.add_image(&image);

        let ops = vec![Op::UseXobject {
            id: image_id,
            transform: XObjectTransform {
                dpi: Some(dpi),
                ..Default::default()
            },
        }];
        doc.pages
            .push(PdfPage::new(Mm(scene.width_mm), Mm(scene.height_mm), ops));
        log::debug!(
            "Rasterized page {} of {} ({}x{} px)",
            scene.page_index,
            scenes.len(),
            image.width,
            image.height
        );
    }

    let mut warnings = Vec::new();
    let bytes = doc.save(&PdfSaveOptions::default(), &mut warnings);
    for warning in &warnings {
        log::debug!("printpdf: {:?}", warning);
    }
    exact_page_boxes(&bytes, scenes)
}

fn exact_page_boxes(bytes: &[u8], scenes: &[Scene]) -> Result<Vec<u8>> {
    let mut doc = lopdf::Document::load_mem(bytes)?;
    let page_ids: Vec<lopdf::ObjectId> = doc.get_pages().into_values().collect();
    if page_ids.len() != scenes.len() {
        return Err(ExportError::Pdf(format!(
            "Expected {} pages, document has {}",
            scenes.len(),
            page_ids.len()
        )));
    }

    for (id, scene) in page_ids.into_iter().zip(scenes) {
        let page = doc.get_object_mut(id)?.as_dict_mut()?;
        let page_box = lopdf::Object::Array(vec![
            lopdf::Object::Integer(0),
            lopdf::Object::Integer(0),
            lopdf::Object::Real(mm_to_pt(scene.width_mm)),
            lopdf::Object::Real(mm_to_pt(scene.height_mm)),
        ]);
        for name in PAGE_BOXES {
            if name == "MediaBox" || page.has(name.as_bytes()) {
                page.set(name, page_box.clone());
            }
        }
    }

    let mut exact = Vec::new();
    doc.save_to(&mut exact)?;
    Ok(exact)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page_box(bytes: &[u8], name: &str) -> Vec<(f32, f32)> {
        let doc = lopdf::Document::load_mem(bytes).unwrap();
        doc.get_pages()
            .values()
            .filter_map(|id| {
                let page = doc.get_object(*id).unwrap().as_dict().unwrap();
                let values = page.get(name.as_bytes()).ok()?.as_array().unwrap();
                Some((values[2].as_float().unwrap(), values[3].as_float().unwrap()))
            })
            .collect()
    }

    #[test]
    fn test_fractional_page_size_is_kept() {
        let scenes = vec![Scene::new(1, 100.5, 50.25), Scene::new(2, 100.5, 50.25)];
        let bytes = raster_pdf_bytes(&scenes, "Odd", 36.0).unwrap();

        let media = page_box(&bytes, "MediaBox");
        assert_eq!(media.len(), 2);
        for (width, height) in media.into_iter().chain(page_box(&bytes, "CropBox")) {
            assert!((width - mm_to_pt(100.5)).abs() < 0.01, "width {}", width);
            assert!((height - mm_to_pt(50.25)).abs() < 0.01, "height {}", height);
        }
    }
}
