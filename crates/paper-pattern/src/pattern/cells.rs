//! Chinese character practice cells

use super::Pen;
use crate::constants::{
    CELL_GUIDE_OPACITY_RATIO, CELL_GUIDE_WIDTH_RATIO, GUIDE_DASH, PINYIN_ROW_RATIO,
};
use crate::geometry::Rect;
use crate::tile::{Length, Primitive, Shape, StrokeStyle, TilePoint};
use crate::types::PatternType;

type Recipe = (Length, Length, Vec<Primitive>);

/// Faint overlay stroke used inside a cell
fn guide(pen: &Pen, dashed: bool) -> StrokeStyle {
    pen.custom(
        pen.width * CELL_GUIDE_WIDTH_RATIO,
        pen.opacity * CELL_GUIDE_OPACITY_RATIO,
        dashed.then_some(&GUIDE_DASH[..]),
    )
}

/// Centered "+" inside a `size` square whose top-left is at (x, y)
fn center_cross(x: f32, y: f32, size: f32, stroke: &StrokeStyle) -> [Primitive; 2] {
    let mid = size / 2.0;
    [
        Primitive::line(
            TilePoint::mm(x, y + mid),
            TilePoint::mm(x + size, y + mid),
            stroke.clone(),
        ),
        Primitive::line(
            TilePoint::mm(x + mid, y),
            TilePoint::mm(x + mid, y + size),
            stroke.clone(),
        ),
    ]
}

/// Outer box plus the overlay for one of the square practice-cell styles
pub(super) fn practice_cell(pen: &Pen, pattern: PatternType) -> Recipe {
    let s = pen.spacing;
    let mut primitives = vec![Primitive::stroked(
        Shape::Rect(Rect::new(0.0, 0.0, s, s)),
        pen.stroke(),
    )];

    match pattern {
        PatternType::Tianzi => {
            primitives.extend(center_cross(0.0, 0.0, s, &guide(pen, true)));
        }
        PatternType::Mizige => {
            let stroke = guide(pen, true);
            primitives.extend(center_cross(0.0, 0.0, s, &stroke));
            primitives.push(Primitive::line(
                TilePoint::mm(0.0, 0.0),
                TilePoint::mm(s, s),
                stroke.clone(),
            ));
            primitives.push(Primitive::line(
                TilePoint::mm(s, 0.0),
                TilePoint::mm(0.0, s),
                stroke,
            ));
        }
        PatternType::Jiugongge => {
            let stroke = guide(pen, false);
            for i in 1..=2 {
                let at = i as f32 * s / 3.0;
                primitives.push(Primitive::line(
                    TilePoint::mm(at, 0.0),
                    TilePoint::mm(at, s),
                    stroke.clone(),
                ));
                primitives.push(Primitive::line(
                    TilePoint::mm(0.0, at),
                    TilePoint::mm(s, at),
                    stroke.clone(),
                ));
            }
        }
        PatternType::Huigongge | PatternType::HardpenHuigongge => {
            let inner = Rect::new(s / 4.0, s / 4.0, s / 2.0, s / 2.0);
            primitives.push(Primitive::stroked(Shape::Rect(inner), guide(pen, false)));
        }
        _ => {}
    }

    (Length::Mm(s), Length::Mm(s), primitives)
}

/// A four-line pinyin band above a tianzi box.
///
/// The box takes the remaining height of the row, and the tile is exactly
/// as wide as the box so boxes sit edge to edge.
pub(super) fn pinyin_tianzi(pen: &Pen) -> Recipe {
    let s = pen.spacing;
    let band = s * PINYIN_ROW_RATIO;
    let box_size = s - band;

    let thin = pen.custom(pen.width * CELL_GUIDE_WIDTH_RATIO, pen.opacity, None);
    let thin_dashed = thin.clone().with_dash(Some(&GUIDE_DASH[..]));

    let mut primitives: Vec<Primitive> = [
        (0.2, &thin),
        (0.5, &thin_dashed),
        (0.8, &thin_dashed),
        (1.0, &thin),
    ]
    .into_iter()
    .map(|(ratio, stroke)| Primitive::hline(band * ratio, stroke.clone()))
    .collect();

    primitives.push(Primitive::stroked(
        Shape::Rect(Rect::new(0.0, band, box_size, box_size)),
        pen.stroke(),
    ));
    primitives.extend(center_cross(0.0, band, box_size, &guide(pen, true)));

    (Length::Mm(box_size), Length::Mm(s), primitives)
}
