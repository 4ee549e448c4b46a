//! Triangular dot lattice and honeycomb

use super::Pen;
use super::grid::dot_radius;
use crate::geometry::Point;
use crate::tile::{Length, PathSegment, Primitive, Shape};

type Recipe = (Length, Length, Vec<Primitive>);

/// Dots on every tile corner plus one in the middle of the tile, offset
/// half a column. Neighbouring tiles share their corner dots.
pub(super) fn isometric(pen: &Pen) -> Recipe {
    let s = pen.spacing;
    let h = s * 3f32.sqrt() / 2.0;
    let r = dot_radius(pen.width);

    let centers = [
        Point::new(0.0, 0.0),
        Point::new(s / 2.0, h),
        Point::new(s, 0.0),
        Point::new(0.0, 2.0 * h),
        Point::new(s, 2.0 * h),
    ];
    let primitives = centers
        .into_iter()
        .map(|center| Primitive::filled(Shape::Circle { center, radius: r }, pen.fill()))
        .collect();
    (Length::Mm(s), Length::Mm(2.0 * h), primitives)
}

/// Pointy-top hexagons of width `s`: one closed cell plus the open edges
/// that join it to the cells of the next row.
pub(super) fn hexagonal(pen: &Pen) -> Recipe {
    let w = pen.spacing;
    let a = w / 3f32.sqrt();
    let half = w / 2.0;

    let cell = Shape::Path(vec![
        PathSegment::MoveTo(Point::new(half, 0.0)),
        PathSegment::LineTo(Point::new(w, a / 2.0)),
        PathSegment::LineTo(Point::new(w, 1.5 * a)),
        PathSegment::LineTo(Point::new(half, 2.0 * a)),
        PathSegment::LineTo(Point::new(0.0, 1.5 * a)),
        PathSegment::LineTo(Point::new(0.0, a / 2.0)),
        PathSegment::Close,
    ]);
    let joins = Shape::Path(vec![
        PathSegment::MoveTo(Point::new(half, 3.0 * a)),
        PathSegment::LineTo(Point::new(w, 2.5 * a)),
        PathSegment::LineTo(Point::new(w, 1.5 * a)),
        PathSegment::MoveTo(Point::new(0.0, 1.5 * a)),
        PathSegment::LineTo(Point::new(0.0, 2.5 * a)),
        PathSegment::LineTo(Point::new(half, 3.0 * a)),
    ]);

    let stroke = pen.stroke();
    (
        Length::Mm(w),
        Length::Mm(3.0 * a),
        vec![
            Primitive::stroked(cell, stroke.clone()),
            Primitive::stroked(joins, stroke),
        ],
    )
}
