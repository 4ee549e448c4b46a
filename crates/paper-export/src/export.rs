use crate::encode::{encode_jpeg, encode_png};
use crate::pdf::raster_pdf_bytes;
use crate::print::print_document_bytes;
use crate::raster::Rasterizer;
use crate::types::{ExportArtifact, ExportError, ExportFormat, ExportOptions, Result};
use paper_pattern::Scene;
use std::path::{Path, PathBuf};

/// Derive the download name for a configuration's display name.
///
/// The name is lowercased and every whitespace run becomes one hyphen.
/// Raster formats carry a `-page1` marker since only the first page is
/// exported.
pub fn export_file_name(name: &str, format: ExportFormat) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut in_space = false;
    for ch in name.chars() {
        if ch.is_whitespace() {
            if !in_space {
                slug.push('-');
            }
            in_space = true;
        } else {
            slug.extend(ch.to_lowercase());
            in_space = false;
        }
    }

    if format.is_raster() {
        format!("{}-page1.{}", slug, format.extension())
    } else {
        format!("{}.{}", slug, format.extension())
    }
}

/// Encode composed pages in `format`.
///
/// Raster formats render only the first scene. PDF renders every scene in
/// order, one page each. An empty scene list is an error.
pub fn export_scenes(
    scenes: &[Scene],
    name: &str,
    format: ExportFormat,
    options: &ExportOptions,
) -> Result<ExportArtifact> {
    let first = scenes.first().ok_or(ExportError::NoPages)?;

    let (bytes, pages) = match format {
        ExportFormat::Png | ExportFormat::Jpg => {
            let mut raster = Rasterizer::new(first.width_mm, first.height_mm, options.dpi)?;
            raster.render(first)?;
            let bytes = match format {
                ExportFormat::Png => encode_png(&raster)?,
                _ => encode_jpeg(&raster, options.jpeg_quality)?,
            };
            (bytes, 1)
        }
        ExportFormat::Pdf => (raster_pdf_bytes(scenes, name, options.dpi)?, scenes.len()),
    };

    Ok(ExportArtifact {
        file_name: export_file_name(name, format),
        format,
        bytes,
        pages,
    })
}

/// Export off the async runtime and write the artifact into `dir`.
///
/// Nothing is written unless encoding succeeds.
pub async fn export_to_dir(
    scenes: Vec<Scene>,
    name: &str,
    format: ExportFormat,
    options: ExportOptions,
    dir: impl AsRef<Path>,
) -> Result<PathBuf> {
    let name_owned = name.to_owned();
    let artifact = tokio::task::spawn_blocking(move || {
        export_scenes(&scenes, &name_owned, format, &options)
    })
    .await??;

    let path = dir.as_ref().join(&artifact.file_name);
    tokio::fs::write(&path, &artifact.bytes).await?;
    log::info!(
        "Exported {} page(s) to {}",
        artifact.pages,
        path.display()
    );
    Ok(path)
}

/// Build the vector print document for `scenes`
pub fn print_document(scenes: &[Scene], title: &str) -> Result<Vec<u8>> {
    print_document_bytes(scenes, title)
}

/// Build the vector print document off the async runtime and save it
pub async fn save_print_document(
    scenes: Vec<Scene>,
    title: &str,
    output_path: impl AsRef<Path>,
) -> Result<()> {
    let title = title.to_owned();
    let output_path = output_path.as_ref().to_owned();

    let bytes =
        tokio::task::spawn_blocking(move || print_document_bytes(&scenes, &title)).await??;

    tokio::fs::write(&output_path, bytes).await?;
    log::info!("Wrote print document to {}", output_path.display());
    Ok(())
}
