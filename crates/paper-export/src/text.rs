//! Text outlines for the rasterizer
//!
//! Glyphs come from a system sans-serif face located with fontdb and
//! parsed with ttf-parser. When no face is installed, text is skipped
//! with a warning and the rest of the page still renders.

use paper_pattern::constants::pt_to_mm;
use paper_pattern::{TextAnchor, TextBaseline, TextElement};
use std::sync::OnceLock;
use tiny_skia::{Path, PathBuilder, Transform};

/// Families tried in order before the generic sans-serif fallback
const PREFERRED_FAMILIES: [&str; 4] = ["Helvetica", "Arial", "DejaVu Sans", "Liberation Sans"];

static SYSTEM_FONT: OnceLock<Option<SystemFont>> = OnceLock::new();

pub(crate) struct SystemFont {
    data: Vec<u8>,
    index: u32,
}

/// The process-wide text face, loaded on first use
pub(crate) fn system_font() -> Option<&'static SystemFont> {
    SYSTEM_FONT.get_or_init(SystemFont::load).as_ref()
}

impl SystemFont {
    fn load() -> Option<Self> {
        let mut db = fontdb::Database::new();
        db.load_system_fonts();

        let mut families: Vec<fontdb::Family> = PREFERRED_FAMILIES
            .iter()
            .map(|name| fontdb::Family::Name(name))
            .collect();
        families.push(fontdb::Family::SansSerif);

        let query = fontdb::Query {
            families: &families,
            ..fontdb::Query::default()
        };
        let Some(id) = db.query(&query).or_else(|| db.faces().next().map(|face| face.id)) else {
            log::warn!("No system fonts found, text will not be rendered");
            return None;
        };

        let (data, index) = db.with_face_data(id, |data, index| (data.to_vec(), index))?;
        if ttf_parser::Face::parse(&data, index).is_err() {
            log::warn!("System font could not be parsed, text will not be rendered");
            return None;
        }
        log::debug!("Using system font face {} for text", index);
        Some(Self { data, index })
    }

    /// Outline of `text` positioned on the page, in page millimeters
    pub(crate) fn text_path(&self, text: &TextElement) -> Option<Path> {
        let face = ttf_parser::Face::parse(&self.data, self.index).ok()?;
        let units_per_em = face.units_per_em() as f32;
        if text.text.is_empty() || units_per_em <= 0.0 {
            return None;
        }

        let mut builder = PathBuilder::new();
        let mut pen_x = 0.0;
        for ch in text.text.chars() {
            let glyph = face.glyph_index(ch).unwrap_or(ttf_parser::GlyphId(0));
            let mut sink = GlyphSink {
                builder: &mut builder,
                dx: pen_x,
            };
            face.outline_glyph(glyph, &mut sink);
            pen_x += face.glyph_hor_advance(glyph).unwrap_or(0) as f32;
        }
        let path = builder.finish()?;

        let anchor_dx = match text.anchor {
            TextAnchor::Start => 0.0,
            TextAnchor::Middle => -pen_x / 2.0,
            TextAnchor::End => -pen_x,
        };
        // glyph outlines are already flipped to y-down, so moving the
        // baseline down by half the x-height centers lowercase text on y
        let baseline_dy = match text.baseline {
            TextBaseline::Alphabetic => 0.0,
            TextBaseline::Middle => {
                let x_height = face
                    .x_height()
                    .map(f32::from)
                    .unwrap_or((face.ascender() as f32 + face.descender() as f32) / 2.0);
                x_height / 2.0
            }
        };

        let scale = pt_to_mm(text.font_size_pt) / units_per_em;
        let transform = Transform::from_translate(text.position.x, text.position.y)
            .pre_concat(Transform::from_rotate(text.rotation_deg))
            .pre_scale(scale, scale)
            .pre_translate(anchor_dx, baseline_dy);
        path.transform(transform)
    }
}

/// Feeds ttf-parser outlines (y-up font units) into a y-down path
struct GlyphSink<'a> {
    builder: &'a mut PathBuilder,
    dx: f32,
}

impl ttf_parser::OutlineBuilder for GlyphSink<'_> {
    fn move_to(&mut self, x: f32, y: f32) {
        self.builder.move_to(x + self.dx, -y);
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.builder.line_to(x + self.dx, -y);
    }

    fn quad_to(&mut self, x1: f32, y1: f32, x: f32, y: f32) {
        self.builder.quad_to(x1 + self.dx, -y1, x + self.dx, -y);
    }

    fn curve_to(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, x: f32, y: f32) {
        self.builder
            .cubic_to(x1 + self.dx, -y1, x2 + self.dx, -y2, x + self.dx, -y);
    }

    fn close(&mut self) {
        self.builder.close();
    }
}
