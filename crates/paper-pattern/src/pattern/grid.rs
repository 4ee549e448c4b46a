//! Square-cell patterns anchored at the tile's top-left corner

use super::Pen;
use crate::constants::{
    COMPOSITION_BOX_RATIO, CROSS_ARM, GUIDE_DASH, MIN_DOT_RADIUS, SEYES_GUIDE_OPACITY,
    SEYES_GUIDE_WIDTH, STORYBOARD_ASPECT, STORYBOARD_GUTTER,
};
use crate::geometry::{Point, Rect};
use crate::tile::{Length, PathSegment, Primitive, Shape, TilePoint};

type Recipe = (Length, Length, Vec<Primitive>);

/// Top and left edges of a `size` square as one open path. Tiling these
/// yields a full grid without doubling any edge.
pub(super) fn corner_path(size: f32) -> Shape {
    Shape::Path(vec![
        PathSegment::MoveTo(Point::new(size, 0.0)),
        PathSegment::LineTo(Point::new(0.0, 0.0)),
        PathSegment::LineTo(Point::new(0.0, size)),
    ])
}

pub(super) fn dot_radius(stroke_width: f32) -> f32 {
    MIN_DOT_RADIUS.max(stroke_width / 2.0)
}

fn square(s: f32, primitives: Vec<Primitive>) -> Recipe {
    (Length::Mm(s), Length::Mm(s), primitives)
}

pub(super) fn grid(pen: &Pen) -> Recipe {
    let s = pen.spacing;
    square(s, vec![Primitive::stroked(corner_path(s), pen.stroke())])
}

pub(super) fn dot(pen: &Pen) -> Recipe {
    let s = pen.spacing;
    let dot = Primitive::filled(
        Shape::Circle {
            center: Point::new(s / 2.0, s / 2.0),
            radius: dot_radius(pen.width),
        },
        pen.fill(),
    );
    square(s, vec![dot])
}

/// A small "+" at the center of each cell
pub(super) fn cross(pen: &Pen) -> Recipe {
    let s = pen.spacing;
    let c = s / 2.0;
    let stroke = pen.custom(pen.width, pen.opacity, None);
    square(
        s,
        vec![
            Primitive::line(
                TilePoint::mm(c - CROSS_ARM, c),
                TilePoint::mm(c + CROSS_ARM, c),
                stroke.clone(),
            ),
            Primitive::line(
                TilePoint::mm(c, c - CROSS_ARM),
                TilePoint::mm(c, c + CROSS_ARM),
                stroke,
            ),
        ],
    )
}

/// French ruling: three faint guides per cell under a regular grid cell
pub(super) fn seyes(pen: &Pen) -> Recipe {
    let s = pen.spacing;
    let quarter = s / 4.0;
    let guide = pen.custom(SEYES_GUIDE_WIDTH, SEYES_GUIDE_OPACITY, Some(&GUIDE_DASH[..]));

    let mut primitives: Vec<Primitive> = (1..=3)
        .map(|i| {
            let y = i as f32 * quarter;
            Primitive::line(TilePoint::mm(0.0, y), TilePoint::mm(s, y), guide.clone())
        })
        .collect();
    primitives.push(Primitive::stroked(corner_path(s), pen.stroke()));
    square(s, primitives)
}

/// One 16:9-ish frame per tile with a gutter to the right and below.
///
/// Spacing at or below the gutter leaves no room for a frame; the tile
/// is kept so the layout stays regular but draws nothing.
pub(super) fn storyboard(pen: &Pen) -> Recipe {
    let s = pen.spacing;
    let box_h = s - STORYBOARD_GUTTER;
    if box_h <= 0.0 {
        log::debug!("Storyboard spacing {}mm leaves no room for a frame", s);
        return (Length::Mm(STORYBOARD_GUTTER), Length::Mm(s), Vec::new());
    }
    let box_w = box_h * STORYBOARD_ASPECT;
    let frame = Primitive::stroked(Shape::Rect(Rect::new(0.0, 0.0, box_w, box_h)), pen.stroke());
    (Length::Mm(box_w + STORYBOARD_GUTTER), Length::Mm(s), vec![frame])
}

/// A slightly smaller square centered in each cell
pub(super) fn composition(pen: &Pen) -> Recipe {
    let s = pen.spacing;
    let side = s * COMPOSITION_BOX_RATIO;
    let offset = (s - side) / 2.0;
    let frame = Primitive::stroked(
        Shape::Rect(Rect::new(offset, offset, side, side)),
        pen.stroke(),
    );
    square(s, vec![frame])
}
