use std::f32::consts::{FRAC_PI_4, PI};

use isopix_color::Color;
use isopix_geom::{GridPos, ScreenPoint};

use crate::cube::Cube;
use crate::face::Face;
use crate::octant::Octant;
use crate::projector::Projector;
use crate::scene::Scene;
use crate::shadow::compute_shadows;
use crate::sorter::DepthOrder;
use crate::surface::Surface;

/// Corner indices (see [`crate::projector::CORNER_OFFSETS`]) of each face quad.
#[inline]
pub fn face_quad(face: Face) -> [usize; 4] {
    match face {
        Face::Top => [0, 1, 2, 3],
        Face::Front => [1, 2, 6, 5],
        Face::Left => [0, 1, 5, 4],
        Face::Back => [3, 0, 4, 7],
        Face::Right => [3, 2, 6, 7],
    }
}

/// Leading edge of the top face, stroked as the cube border.
pub const BORDER_EDGE: [usize; 2] = [2, 1];

const DEBUG_COLOR: Color = Color::rgb(0xcc, 0xcc, 0xcc);
const DEBUG_AXIS_LEN: f32 = 10.0;

/// Border width for `rotation`: a triangular wave between 0 and
/// `cube_size / 15` with its peak at π/4 and its trough at 5π/4.
pub fn line_width(rotation: f32, cube_size: f32) -> f32 {
    let max_w = cube_size / 15.0;
    let min_w = 0.0;
    let max_rot = FRAC_PI_4;
    let min_rot = max_rot + PI;
    let coeff = (max_w - min_w) / (max_rot - min_rot);
    let addit = min_w - coeff * min_rot;
    let w = rotation * coeff + addit;
    -(-w.abs() + max_w).abs() + max_w
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameStats {
    pub cubes: usize,
    pub polygons: usize,
    pub lines: usize,
    pub shaded_cubes: usize,
}

/// Draws every cube back to front: visible side faces, top face, then the
/// border line. Refreshes the scene's shadow map and fills any empty color
/// caches along the way.
pub fn render_frame<S: Surface + ?Sized>(scene: &mut Scene, surface: &mut S) -> FrameStats {
    let Scene {
        cubes,
        view,
        blender,
        shadows,
        ..
    } = &mut *scene;

    let octant = Octant::from_rotation(view.rotation);
    let projector = Projector::from_view(view);
    let positions: Vec<GridPos> = cubes.iter().map(Cube::pos).collect();
    let order = DepthOrder::new(view.rotation, view.max_bounds).draw_order(&positions);
    *shadows = compute_shadows(&positions, view.shadow_mode);

    let debug = view.debug;
    let borders = view.shade_borders();
    let width = line_width(view.rotation, view.cube_size);
    let sides = octant.visible_sides();
    let mut stats = FrameStats {
        cubes: order.len(),
        shaded_cubes: shadows.shaded_count(),
        ..Default::default()
    };

    for (n, &i) in order.iter().enumerate() {
        let cube = &mut cubes[i];
        let colors = cube.colors_or_compute(blender, &view.shade_faces, &borders);
        let shaded = shadows.get(i);
        let pts = projector.cube_corners(cube.pos());

        for face in sides.into_iter().chain([Face::Top]) {
            let quad = face_quad(face).map(|k| pts[k]);
            surface.fill_polygon(&quad, colors.face(face, shaded.contains(face)));
            stats.polygons += 1;
        }
        let edge = BORDER_EDGE.map(|k| pts[k]);
        surface.stroke_line(&edge, colors.line(shaded.contains(Face::Top)), width);
        stats.lines += 1;

        if debug {
            // later cubes paint over earlier labels
            let at = projector.project(cube.pos());
            surface.fill_text(&n.to_string(), at, 10.0, DEBUG_COLOR);
        }
    }

    if debug {
        render_debug_overlay(scene, surface);
    }
    log::trace!(
        "frame: octant={:?} cubes={} polys={} shaded={}",
        octant,
        stats.cubes,
        stats.polygons,
        stats.shaded_cubes
    );
    stats
}

/// Octant label and the three grid axes. Cube index labels are drawn by
/// [`render_frame`] as each cube goes down.
pub fn render_debug_overlay<S: Surface + ?Sized>(scene: &Scene, surface: &mut S) {
    let projector = Projector::from_view(scene.view());
    surface.fill_text(
        &format!("PI:{}", scene.octant().index()),
        ScreenPoint::new(projector.origin.x, 50.0),
        30.0,
        DEBUG_COLOR,
    );
    let width = line_width(projector.rotation, projector.size);
    let o = projector.project(GridPos::ORIGIN);
    let axes = [
        ("x", GridPos::new(DEBUG_AXIS_LEN, 0.0, 0.0)),
        ("y", GridPos::new(0.0, DEBUG_AXIS_LEN, 0.0)),
        ("z", GridPos::new(0.0, 0.0, DEBUG_AXIS_LEN)),
    ];
    for (label, end) in axes {
        let tip = projector.project(end);
        surface.stroke_line(&[o, tip], DEBUG_COLOR, width);
        surface.fill_text(label, tip, 30.0, DEBUG_COLOR);
    }
}
