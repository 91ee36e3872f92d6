use isopix_color::Color;
use isopix_geom::GridPos;
use isopix_scene::{Cube, Scene, ViewConfig};

const FLOOR_A: Color = Color::rgb(0x8a, 0x9b, 0x68);
const FLOOR_B: Color = Color::rgb(0x7a, 0x8b, 0x5a);
const STONE: Color = Color::rgb(0x9e, 0x9e, 0xa8);
const BRICK: Color = Color::rgb(0xb0, 0x4a, 0x3a);
const WATER: Color = Color::rgb(0x3a, 0x6e, 0xc8);

/// Built-in scene used when no scene file is given: a checkered floor, a
/// stone tower and a short brick staircase. Grid z grows downward on screen,
/// so stacked cubes use negative z.
pub fn demo_scene(view: ViewConfig) -> Scene {
    let mut cubes = Vec::new();
    for y in 0..6 {
        for x in 0..6 {
            let color = if (x + y) % 2 == 0 { FLOOR_A } else { FLOOR_B };
            cubes.push(Cube::new(color, GridPos::from((x, y, 0))));
        }
    }
    for z in 1..=3 {
        cubes.push(Cube::new(STONE, GridPos::from((1, 1, -z))));
    }
    for step in 0..3 {
        for h in 1..=(3 - step) {
            cubes.push(Cube::new(BRICK, GridPos::from((3 + step, 4, -h))));
        }
    }
    cubes.push(Cube::new(WATER, GridPos::from((4, 1, -1))));
    Scene::with_cubes(view, cubes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use isopix_scene::{DrawList, ShadowMode, render_frame};

    #[test]
    fn demo_scene_renders_every_cube() {
        let mut scene = demo_scene(ViewConfig::default());
        let n = scene.len();
        assert_eq!(n, 36 + 3 + 6 + 1);
        let mut list = DrawList::new();
        let stats = render_frame(&mut scene, &mut list);
        assert_eq!(stats.cubes, n);
        assert_eq!(list.polygons().count(), 3 * n);
    }

    #[test]
    fn demo_tower_shades_covered_tops() {
        let view = ViewConfig {
            shadow_mode: ShadowMode::TopOnly,
            ..Default::default()
        };
        let mut scene = demo_scene(view);
        render_frame(&mut scene, &mut DrawList::new());
        // floor cube under the tower and the two lower tower cubes
        assert!(!scene.shadowed_faces_at(1.0, 1.0, 0.0).is_empty());
        assert!(!scene.shadowed_faces_at(1.0, 1.0, -2.0).is_empty());
        assert!(scene.shadowed_faces_at(1.0, 1.0, -3.0).is_empty());
    }
}
