//! Physical page size resolution

use crate::types::{Orientation, PaperDimension, PaperSize};

const A4: PaperDimension = PaperDimension::new(210.0, 297.0);

impl PaperSize {
    /// Base portrait dimensions for named sizes, `None` for `custom`/unknown
    pub fn dimensions_mm(self) -> Option<PaperDimension> {
        let dim = match self {
            PaperSize::A3 => PaperDimension::new(297.0, 420.0),
            PaperSize::A4 => A4,
            PaperSize::A5 => PaperDimension::new(148.0, 210.0),
            PaperSize::B4 => PaperDimension::new(250.0, 353.0),
            PaperSize::B5 => PaperDimension::new(176.0, 250.0),
            PaperSize::Letter => PaperDimension::new(215.9, 279.4),
            PaperSize::Legal => PaperDimension::new(215.9, 355.6),
            PaperSize::Tabloid => PaperDimension::new(279.4, 431.8),
            PaperSize::Executive => PaperDimension::new(184.1, 266.7),
            PaperSize::Custom | PaperSize::Unknown => return None,
        };
        Some(dim)
    }
}

/// Resolve a size identifier to physical millimeters.
///
/// `custom` uses `custom` dimensions when they are present and positive;
/// everything that cannot be resolved falls back to A4. Landscape swaps
/// whichever base dimension was chosen.
pub fn resolve_dimensions(
    size: PaperSize,
    custom: Option<PaperDimension>,
    orientation: Orientation,
) -> PaperDimension {
    let base = match size {
        PaperSize::Custom => match custom {
            Some(dim) if is_usable(dim) => dim,
            Some(dim) => {
                log::warn!(
                    "Custom size {}x{}mm is not usable, falling back to A4",
                    dim.width,
                    dim.height
                );
                A4
            }
            None => {
                log::debug!("Custom size without dimensions, falling back to A4");
                A4
            }
        },
        other => other.dimensions_mm().unwrap_or_else(|| {
            log::warn!("Unrecognized paper size, falling back to A4");
            A4
        }),
    };

    match orientation {
        Orientation::Portrait => base,
        Orientation::Landscape => base.swapped(),
    }
}

fn is_usable(dim: PaperDimension) -> bool {
    dim.width.is_finite() && dim.height.is_finite() && dim.width > 0.0 && dim.height > 0.0
}
