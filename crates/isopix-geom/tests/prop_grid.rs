use isopix_geom::{GridBounds, GridPos};
use proptest::num::f32::NORMAL;
use proptest::prelude::*;
use proptest::strategy::Strategy;

fn approx(a: f32, b: f32, eps: f32) -> bool {
    (a - b).abs() <= eps
}
fn papprox(a: GridPos, b: GridPos, eps: f32) -> bool {
    approx(a.x, b.x, eps) && approx(a.y, b.y, eps) && approx(a.z, b.z, eps)
}

fn bounded_f32() -> impl Strategy<Value = f32> {
    NORMAL.prop_filter("bounded", |v| v.is_finite() && v.abs() <= 1e4)
}

fn arb_pos() -> impl Strategy<Value = GridPos> {
    (bounded_f32(), bounded_f32(), bounded_f32()).prop_map(|(x, y, z)| GridPos::new(x, y, z))
}

proptest! {
    // a + b == b + a
    #[test]
    fn grid_add_commutative(a in arb_pos(), b in arb_pos()) {
        prop_assert!(papprox(a + b, b + a, 1e-3));
    }

    // Every input point lies inside the computed bounds
    #[test]
    fn bounds_contain_all_points(points in prop::collection::vec(arb_pos(), 1..32)) {
        let b = GridBounds::from_points(points.iter().copied()).unwrap();
        for p in &points {
            prop_assert!(p.x >= b.min.x && p.x <= b.max.x);
            prop_assert!(p.y >= b.min.y && p.y <= b.max.y);
            prop_assert!(p.z >= b.min.z && p.z <= b.max.z);
        }
        prop_assert!(b.extent() >= 0.0);
    }

    // Integer grid offsets are exact for whole-number positions
    #[test]
    fn integer_offsets_exact(x in -500i32..500, y in -500i32..500, z in -500i32..500) {
        let p = GridPos::from((x, y, z));
        let q = p.offset(1.0, 1.0, 1.0);
        prop_assert_eq!(q, GridPos::from((x + 1, y + 1, z + 1)));
    }
}
