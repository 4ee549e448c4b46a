//! Full-width row patterns

use super::Pen;
use crate::constants::{
    GUIDE_DASH, ROW_GUIDE_WIDTH_RATIO, STAFF_LINE_GAP, STAFF_LINES, TAB_LINE_GAP, TAB_LINES,
};
use crate::tile::{Length, Primitive, TilePoint};

type Recipe = (Length, Length, Vec<Primitive>);

/// One rule at the bottom edge of each row
pub(super) fn lined(pen: &Pen) -> Recipe {
    let s = pen.spacing;
    (Length::Full, Length::Mm(s), vec![Primitive::hline(s, pen.stroke())])
}

/// One rule at the right edge of each column
pub(super) fn vertical_lined(pen: &Pen) -> Recipe {
    let s = pen.spacing;
    let line = Primitive::line(
        TilePoint::mm(s, 0.0),
        TilePoint {
            x: Length::Mm(s),
            y: Length::Full,
        },
        pen.stroke(),
    );
    (Length::Mm(s), Length::Full, vec![line])
}

/// Four-line ruling used for pinyin and English handwriting practice:
/// two boundaries with two thinner dashed guides at the thirds.
pub(super) fn four_line(pen: &Pen) -> Recipe {
    let s = pen.spacing;
    let third = s / 3.0;
    let boundary = pen.stroke();
    let guide = pen.custom(pen.width * ROW_GUIDE_WIDTH_RATIO, pen.opacity, Some(&GUIDE_DASH[..]));

    let primitives = vec![
        Primitive::hline(0.0, boundary.clone()),
        Primitive::hline(third, guide.clone()),
        Primitive::hline(2.0 * third, guide),
        Primitive::hline(s, boundary),
    ];
    (Length::Full, Length::Mm(s), primitives)
}

pub(super) fn music_staff(pen: &Pen) -> Recipe {
    staff(pen, STAFF_LINES, STAFF_LINE_GAP)
}

pub(super) fn guitar_tab(pen: &Pen) -> Recipe {
    staff(pen, TAB_LINES, TAB_LINE_GAP)
}

/// Evenly spaced lines from the top of each row; the spacing only sets
/// the row height.
fn staff(pen: &Pen, lines: usize, gap: f32) -> Recipe {
    let primitives = (0..lines)
        .map(|i| Primitive::hline(i as f32 * gap, pen.stroke()))
        .collect();
    (Length::Full, Length::Mm(pen.spacing), primitives)
}
