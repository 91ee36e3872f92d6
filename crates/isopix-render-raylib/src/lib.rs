//! Raylib-backed drawing surface for isometric scenes.
#![forbid(unsafe_code)]

use isopix_color::Color;
use isopix_geom::ScreenPoint;
use isopix_scene::Surface;
use raylib::prelude::{RaylibDraw, Vector2};

pub mod conv {
    use isopix_color::Color;
    use isopix_geom::ScreenPoint;

    pub fn point_to_rl(p: ScreenPoint) -> raylib::prelude::Vector2 {
        raylib::prelude::Vector2::new(p.x, p.y)
    }

    pub fn point_from_rl(v: raylib::prelude::Vector2) -> ScreenPoint {
        ScreenPoint::new(v.x, v.y)
    }

    pub fn color_to_rl(c: Color) -> raylib::prelude::Color {
        raylib::prelude::Color::new(c.r, c.g, c.b, 255)
    }
}

/// Twice the signed area of a polygon (shoelace). Negative means the points
/// wind counter-clockwise on a y-down screen.
pub fn signed_area2(points: &[ScreenPoint]) -> f32 {
    let n = points.len();
    let mut acc = 0.0;
    for i in 0..n {
        let a = points[i];
        let b = points[(i + 1) % n];
        acc += a.x * b.y - b.x * a.y;
    }
    acc
}

/// Splits a convex polygon into a triangle fan wound the way raylib expects
/// (counter-clockwise on screen). Degenerate polygons yield nothing.
pub fn fan_triangles(points: &[ScreenPoint]) -> Vec<[ScreenPoint; 3]> {
    if points.len() < 3 {
        return Vec::new();
    }
    let area = signed_area2(points);
    if area == 0.0 {
        return Vec::new();
    }
    let flip = area > 0.0;
    (1..points.len() - 1)
        .map(|i| {
            let (a, b, c) = (points[0], points[i], points[i + 1]);
            if flip { [a, c, b] } else { [a, b, c] }
        })
        .collect()
}

/// Adapts any raylib draw handle to [`Surface`].
pub struct RaylibSurface<'a, D: RaylibDraw> {
    d: &'a mut D,
}

impl<'a, D: RaylibDraw> RaylibSurface<'a, D> {
    pub fn new(d: &'a mut D) -> Self {
        Self { d }
    }
}

impl<D: RaylibDraw> Surface for RaylibSurface<'_, D> {
    fn fill_polygon(&mut self, points: &[ScreenPoint], color: Color) {
        let c = conv::color_to_rl(color);
        for [a, b, t] in fan_triangles(points) {
            self.d.draw_triangle(
                conv::point_to_rl(a),
                conv::point_to_rl(b),
                conv::point_to_rl(t),
                c,
            );
        }
    }

    fn stroke_line(&mut self, points: &[ScreenPoint], color: Color, width: f32) {
        // a zero width draws nothing, matching canvas semantics
        if width <= 0.0 {
            return;
        }
        let c = conv::color_to_rl(color);
        for w in points.windows(2) {
            let (a, b): (Vector2, Vector2) = (conv::point_to_rl(w[0]), conv::point_to_rl(w[1]));
            self.d.draw_line_ex(a, b, width, c);
        }
    }

    fn fill_text(&mut self, text: &str, at: ScreenPoint, size: f32, color: Color) {
        self.d.draw_text(
            text,
            at.x as i32,
            at.y as i32,
            size as i32,
            conv::color_to_rl(color),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square_cw_on_screen() -> Vec<ScreenPoint> {
        // top-left, top-right, bottom-right, bottom-left with y pointing down
        vec![
            ScreenPoint::new(0.0, 0.0),
            ScreenPoint::new(10.0, 0.0),
            ScreenPoint::new(10.0, 10.0),
            ScreenPoint::new(0.0, 10.0),
        ]
    }

    #[test]
    fn fan_of_quad_has_two_triangles() {
        assert_eq!(fan_triangles(&square_cw_on_screen()).len(), 2);
    }

    #[test]
    fn fan_triangles_are_counter_clockwise_on_screen() {
        let mut pts = square_cw_on_screen();
        for _ in 0..2 {
            for tri in fan_triangles(&pts) {
                assert!(signed_area2(&tri) < 0.0);
            }
            pts.reverse();
        }
    }

    #[test]
    fn degenerate_polygons_are_skipped() {
        let line = vec![
            ScreenPoint::new(0.0, 0.0),
            ScreenPoint::new(5.0, 5.0),
            ScreenPoint::new(10.0, 10.0),
        ];
        assert!(fan_triangles(&line).is_empty());
        assert!(fan_triangles(&line[..2]).is_empty());
    }

    #[test]
    fn conversions_keep_components() {
        let p = ScreenPoint::new(1.5, -2.0);
        assert_eq!(conv::point_from_rl(conv::point_to_rl(p)), p);
        let c = conv::color_to_rl(Color::rgb(1, 2, 3));
        assert_eq!((c.r, c.g, c.b, c.a), (1, 2, 3, 255));
    }
}
