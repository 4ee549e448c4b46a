//! Vector print documents
//!
//! Scenes are written straight to PDF path operators with lopdf, one page
//! per scene. Graphics run under a transform that maps page millimeters
//! (top-left origin) onto PDF points, so scene coordinates pass through
//! unchanged. Text is set in Helvetica in unflipped point space.

use crate::types::{ExportError, Result};
use lopdf::{Dictionary, Document, Object, ObjectId, Stream};
use paper_pattern::constants::{POINTS_PER_MM, mm_to_pt};
use paper_pattern::tile::{PathSegment, tile_origins};
use paper_pattern::{
    Element, PatternTile, Point, Rect, Rgb, Scene, Shape, StrokeStyle, TextAnchor, TextBaseline,
    TextElement,
};
use std::collections::BTreeMap;

/// Approximate Helvetica advance as a fraction of the font size
const HELVETICA_CHAR_WIDTH_RATIO: f32 = 0.5;
/// Half the Helvetica x-height as a fraction of the font size
const HELVETICA_HALF_X_HEIGHT: f32 = 0.26;
/// Control point distance for a quarter circle drawn as one cubic bezier
const CIRCLE_KAPPA: f32 = 0.552_284_8;

/// Build a vector PDF with one page per scene
pub fn print_document_bytes(scenes: &[Scene], title: &str) -> Result<Vec<u8>> {
    if scenes.is_empty() {
        return Err(ExportError::NoPages);
    }

    let mut output = Document::with_version("1.7");
    let pages_id = output.new_object_id();

    let mut font_dict = Dictionary::new();
    font_dict.set("Type", Object::Name(b"Font".to_vec()));
    font_dict.set("Subtype", Object::Name(b"Type1".to_vec()));
    font_dict.set("BaseFont", Object::Name(b"Helvetica".to_vec()));
    let font_id = output.add_object(font_dict);

    let mut page_refs = Vec::new();
    for scene in scenes {
        let page_id = write_page(&mut output, scene, pages_id, font_id);
        page_refs.push(Object::Reference(page_id));
    }

    let count = page_refs.len() as i64;
    let pages_dict = Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Pages".to_vec())),
        ("Kids", Object::Array(page_refs)),
        ("Count", Object::Integer(count)),
    ]);
    output
        .objects
        .insert(pages_id, Object::Dictionary(pages_dict));

    let catalog_id = output.add_object(Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Catalog".to_vec())),
        ("Pages", Object::Reference(pages_id)),
    ]));
    let info_id = output.add_object(Dictionary::from_iter(vec![(
        "Title",
        Object::string_literal(title),
    )]));
    output.trailer.set("Root", catalog_id);
    output.trailer.set("Info", info_id);

    let mut bytes = Vec::new();
    output.save_to(&mut bytes)?;
    Ok(bytes)
}

fn write_page(
    output: &mut Document,
    scene: &Scene,
    parent_pages_id: ObjectId,
    font_id: ObjectId,
) -> ObjectId {
    let width_pt = mm_to_pt(scene.width_mm);
    let height_pt = mm_to_pt(scene.height_mm);

    let mut writer = PageWriter::new(scene, height_pt);
    for item in &scene.items {
        writer.element(&item.element);
    }

    let mut resources = Dictionary::new();
    if writer.uses_font {
        let mut fonts = Dictionary::new();
        fonts.set("F1", Object::Reference(font_id));
        resources.set("Font", Object::Dictionary(fonts));
    }
    if !writer.alphas.is_empty() {
        let mut states = Dictionary::new();
        for (key, alpha) in &writer.alphas {
            let state = Dictionary::from_iter(vec![
                ("Type", Object::Name(b"ExtGState".to_vec())),
                ("CA", Object::Real(*alpha)),
                ("ca", Object::Real(*alpha)),
            ]);
            states.set(gs_name(*key).as_bytes(), Object::Dictionary(state));
        }
        resources.set("ExtGState", Object::Dictionary(states));
    }

    let content_id = output.add_object(Stream::new(
        Dictionary::new(),
        writer.content.into_bytes(),
    ));

    let mut page_dict = Dictionary::new();
    page_dict.set("Type", Object::Name(b"Page".to_vec()));
    page_dict.set("Parent", Object::Reference(parent_pages_id));
    page_dict.set(
        "MediaBox",
        Object::Array(vec![
            Object::Integer(0),
            Object::Integer(0),
            Object::Real(width_pt),
            Object::Real(height_pt),
        ]),
    );
    page_dict.set("Contents", Object::Reference(content_id));
    page_dict.set("Resources", Object::Dictionary(resources));
    output.add_object(page_dict)
}

fn gs_name(key: u32) -> String {
    format!("GS{}", key)
}

struct PageWriter {
    content: String,
    page_width: f32,
    page_height: f32,
    height_pt: f32,
    /// Opacity states used on this page, keyed by alpha in thousandths
    alphas: BTreeMap<u32, f32>,
    uses_font: bool,
}

impl PageWriter {
    fn new(scene: &Scene, height_pt: f32) -> Self {
        Self {
            content: String::new(),
            page_width: scene.width_mm,
            page_height: scene.height_mm,
            height_pt,
            alphas: BTreeMap::new(),
            uses_font: false,
        }
    }

    /// Open a graphics block in millimeter page space
    fn begin_page_space(&mut self) {
        self.content.push_str(&format!(
            "q {} 0 0 {} 0 {} cm\n",
            POINTS_PER_MM, -POINTS_PER_MM, self.height_pt
        ));
    }

    fn end(&mut self) {
        self.content.push_str("Q\n");
    }

    fn set_alpha(&mut self, opacity: f32) {
        let alpha = opacity.clamp(0.0, 1.0);
        if alpha >= 1.0 {
            return;
        }
        let key = (alpha * 1000.0).round() as u32;
        self.alphas.insert(key, key as f32 / 1000.0);
        self.content.push_str(&format!("/{} gs\n", gs_name(key)));
    }

    fn set_fill(&mut self, color: Rgb) {
        let (r, g, b) = color.to_unit();
        self.content.push_str(&format!("{} {} {} rg\n", r, g, b));
    }

    fn set_stroke(&mut self, stroke: &StrokeStyle) {
        let (r, g, b) = stroke.color.to_unit();
        self.content
            .push_str(&format!("{} {} {} RG {} w\n", r, g, b, stroke.width));
        if let Some(dash) = &stroke.dash {
            let parts: Vec<String> = dash.iter().map(|d| d.to_string()).collect();
            self.content
                .push_str(&format!("[{}] 0 d\n", parts.join(" ")));
        }
    }

    fn element(&mut self, element: &Element) {
        match element {
            Element::FillRect {
                rect,
                color,
                opacity,
            } => {
                self.begin_page_space();
                self.set_alpha(*opacity);
                self.set_fill(*color);
                self.rect_path(rect, Point::default());
                self.content.push_str("f\n");
                self.end();
            }
            Element::TileFill { rect, tile } => self.tile_fill(rect, tile),
            Element::Line { from, to, stroke } => {
                if stroke.width <= 0.0 {
                    return;
                }
                self.begin_page_space();
                self.set_alpha(stroke.opacity);
                self.set_stroke(stroke);
                self.content.push_str(&format!(
                    "{} {} m {} {} l S\n",
                    from.x, from.y, to.x, to.y
                ));
                self.end();
            }
            Element::OutlineRect { rect, stroke } => {
                if stroke.width <= 0.0 {
                    return;
                }
                self.begin_page_space();
                self.set_alpha(stroke.opacity);
                self.set_stroke(stroke);
                self.rect_path(rect, Point::default());
                self.content.push_str("S\n");
                self.end();
            }
            Element::Text(text) => self.text(text),
        }
    }

    fn tile_fill(&mut self, rect: &Rect, tile: &PatternTile) {
        let (tile_width, tile_height) = tile.resolved_size(self.page_width, self.page_height);
        let origins = tile_origins(tile_width, tile_height, rect);
        if origins.is_empty() {
            return;
        }

        self.begin_page_space();
        self.content.push_str(&format!(
            "{} {} {} {} re W n\n",
            rect.x, rect.y, rect.width, rect.height
        ));
        for primitive in &tile.primitives {
            if let Some(fill) = &primitive.fill {
                self.content.push_str("q\n");
                self.set_alpha(fill.opacity);
                self.set_fill(fill.color);
                for origin in &origins {
                    self.shape_path(&primitive.shape, *origin, tile_width, tile_height);
                }
                self.content.push_str("f\nQ\n");
            }
            if let Some(stroke) = primitive.stroke.as_ref().filter(|s| s.width > 0.0) {
                self.content.push_str("q\n");
                self.set_alpha(stroke.opacity);
                self.set_stroke(stroke);
                for origin in &origins {
                    self.shape_path(&primitive.shape, *origin, tile_width, tile_height);
                }
                self.content.push_str("S\nQ\n");
            }
        }
        self.end();
    }

    fn rect_path(&mut self, rect: &Rect, origin: Point) {
        self.content.push_str(&format!(
            "{} {} {} {} re\n",
            origin.x + rect.x,
            origin.y + rect.y,
            rect.width,
            rect.height
        ));
    }

    fn shape_path(&mut self, shape: &Shape, origin: Point, tile_width: f32, tile_height: f32) {
        match shape {
            Shape::Line { from, to } => {
                let from = from.resolve(tile_width, tile_height);
                let to = to.resolve(tile_width, tile_height);
                self.content.push_str(&format!(
                    "{} {} m {} {} l\n",
                    origin.x + from.x,
                    origin.y + from.y,
                    origin.x + to.x,
                    origin.y + to.y
                ));
            }
            Shape::Path(segments) => {
                for segment in segments {
                    let op = match segment {
                        PathSegment::MoveTo(p) => {
                            format!("{} {} m\n", origin.x + p.x, origin.y + p.y)
                        }
                        PathSegment::LineTo(p) => {
                            format!("{} {} l\n", origin.x + p.x, origin.y + p.y)
                        }
                        PathSegment::Close => "h\n".to_string(),
                    };
                    self.content.push_str(&op);
                }
            }
            Shape::Circle { center, radius } => {
                let c = origin.offset(center.x, center.y);
                self.content.push_str(&circle_path(c, *radius));
            }
            Shape::Rect(rect) => self.rect_path(rect, origin),
        }
    }

    fn text(&mut self, text: &TextElement) {
        if text.text.is_empty() {
            return;
        }
        let encoded = pdf_string(&text.text);
        let size = text.font_size_pt;
        let width = text.text.chars().count() as f32 * size * HELVETICA_CHAR_WIDTH_RATIO;
        let dx = match text.anchor {
            TextAnchor::Start => 0.0,
            TextAnchor::Middle => -width / 2.0,
            TextAnchor::End => -width,
        };
        let dy = match text.baseline {
            TextBaseline::Alphabetic => 0.0,
            TextBaseline::Middle => -size * HELVETICA_HALF_X_HEIGHT,
        };

        // clockwise on the page is a negative angle in y-up text space
        let theta = (-text.rotation_deg).to_radians();
        let (sin, cos) = theta.sin_cos();
        let x = mm_to_pt(text.position.x);
        let y = self.height_pt - mm_to_pt(text.position.y);

        self.uses_font = true;
        if !text.selectable {
            self.content.push_str("/Artifact BMC\n");
        }
        self.content.push_str("q\n");
        self.set_alpha(text.opacity);
        self.set_fill(text.color);
        self.content.push_str(&format!(
            "BT /F1 {} Tf {} {} {} {} {} {} Tm {} {} Td ({}) Tj ET\nQ\n",
            size, cos, sin, -sin, cos, x, y, dx, dy, encoded
        ));
        if !text.selectable {
            self.content.push_str("EMC\n");
        }
    }
}

fn circle_path(center: Point, radius: f32) -> String {
    let k = radius * CIRCLE_KAPPA;
    let (cx, cy) = (center.x, center.y);
    format!(
        "{} {} m\n\
         {} {} {} {} {} {} c\n\
         {} {} {} {} {} {} c\n\
         {} {} {} {} {} {} c\n\
         {} {} {} {} {} {} c\nh\n",
        cx + radius,
        cy,
        cx + radius,
        cy + k,
        cx + k,
        cy + radius,
        cx,
        cy + radius,
        cx - k,
        cy + radius,
        cx - radius,
        cy + k,
        cx - radius,
        cy,
        cx - radius,
        cy - k,
        cx - k,
        cy - radius,
        cx,
        cy - radius,
        cx + k,
        cy - radius,
        cx + radius,
        cy - k,
        cx + radius,
        cy
    )
}

/// Escape a literal string for the standard Helvetica encoding
fn pdf_string(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut replaced = false;
    for ch in text.chars() {
        match ch {
            '\\' | '(' | ')' => {
                out.push('\\');
                out.push(ch);
            }
            ' '..='~' => out.push(ch),
            _ => {
                replaced = true;
                out.push('?');
            }
        }
    }
    if replaced {
        log::warn!(
            "Text {:?} has characters Helvetica cannot show, replaced with '?'",
            text
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pdf_string_escapes() {
        assert_eq!(pdf_string("a(b)c\\"), "a\\(b\\)c\\\\");
        assert_eq!(pdf_string("田字格 1"), "??? 1");
    }

    #[test]
    fn test_circle_starts_and_ends_on_the_right() {
        let path = circle_path(Point::new(5.0, 5.0), 1.0);
        assert!(path.starts_with("6 5 m\n"));
        assert!(path.ends_with("6 5 c\nh\n"));
        assert_eq!(path.matches(" c\n").count(), 4);
    }

    #[test]
    fn test_opacity_states_are_shared() {
        let scene = Scene::new(1, 10.0, 10.0);
        let mut writer = PageWriter::new(&scene, 28.35);
        writer.set_alpha(0.5);
        writer.set_alpha(0.5);
        writer.set_alpha(1.0);
        assert_eq!(writer.alphas.len(), 1);
        assert_eq!(writer.content.matches("/GS500 gs").count(), 2);
    }
}
