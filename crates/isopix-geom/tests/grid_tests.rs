use isopix_geom::{GridBounds, GridPos, ScreenPoint};

fn approx_eq(a: f32, b: f32, eps: f32) -> bool {
    (a - b).abs() <= eps
}

fn pos_approx_eq(a: GridPos, b: GridPos, eps: f32) -> bool {
    approx_eq(a.x, b.x, eps) && approx_eq(a.y, b.y, eps) && approx_eq(a.z, b.z, eps)
}

#[test]
fn grid_origin_constant() {
    assert!(pos_approx_eq(GridPos::ORIGIN, GridPos::new(0.0, 0.0, 0.0), 1e-6));
}

#[test]
fn grid_add_sub() {
    let a = GridPos::new(1.0, 2.0, 3.0);
    let b = GridPos::new(-4.0, 5.0, -6.0);
    let c = a + b;
    assert!(pos_approx_eq(c, GridPos::new(-3.0, 7.0, -3.0), 1e-6));
    assert!(pos_approx_eq(c - a, b, 1e-6));
}

#[test]
fn grid_offset_and_conversions() {
    let p = GridPos::from((2, -1, 3));
    assert_eq!(p.offset(1.0, 1.0, 0.0), GridPos::new(3.0, 0.0, 3.0));
    assert_eq!(GridPos::from([0.5, 1.5, 2.5]).as_array(), [0.5, 1.5, 2.5]);
}

#[test]
fn same_column_ignores_z() {
    let a = GridPos::new(1.0, 2.0, 0.0);
    assert!(a.same_column(GridPos::new(1.0, 2.0, 9.0)));
    assert!(!a.same_column(GridPos::new(1.0, 3.0, 0.0)));
}

#[test]
fn screen_point_ops() {
    let a = ScreenPoint::new(10.0, 20.0);
    let b = ScreenPoint::new(2.5, -5.0);
    assert_eq!(a + b, ScreenPoint::new(12.5, 15.0));
    assert_eq!(a - b, ScreenPoint::new(7.5, 25.0));
}

#[test]
fn bounds_from_points() {
    assert_eq!(GridBounds::from_points(Vec::<GridPos>::new()), None);
    let b = GridBounds::from_points([
        GridPos::new(0.0, 0.0, 0.0),
        GridPos::new(4.0, -2.0, 1.0),
        GridPos::new(-1.0, 3.0, 2.0),
    ])
    .unwrap();
    assert_eq!(b.min, GridPos::new(-1.0, -2.0, 0.0));
    assert_eq!(b.max, GridPos::new(4.0, 3.0, 2.0));
    assert!(approx_eq(b.extent(), 5.0, 1e-6));
}
