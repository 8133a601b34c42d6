use approx::assert_abs_diff_eq;

use facequest_core::geometry::{BoundsFrac, FracPoint, Point, ViewportRect};

#[test]
fn test_default_viewport_is_unmeasured() {
    let v = ViewportRect::default();
    assert!(!v.is_measured());
}

#[test]
fn test_resolve_scales_with_viewport() {
    let frac = FracPoint::new(0.625, 0.3125);
    let small = ViewportRect::new(0.0, 0.0, 160.0, 80.0);
    let large = ViewportRect::new(0.0, 0.0, 320.0, 160.0);

    let p1 = small.resolve(frac);
    let p2 = large.resolve(frac);
    assert_abs_diff_eq!(p1.x, 100.0);
    assert_abs_diff_eq!(p1.y, 25.0);
    assert_abs_diff_eq!(p2.x, p1.x * 2.0);
    assert_abs_diff_eq!(p2.y, p1.y * 2.0);
}

#[test]
fn test_to_local_subtracts_origin() {
    let v = ViewportRect::new(10.0, 20.0, 100.0, 100.0);
    let local = v.to_local(Point::new(15.0, 50.0));
    assert_eq!(local, Point::new(5.0, 30.0));
}

#[test]
fn test_bounds_resolve_and_clamp() {
    let bounds = BoundsFrac {
        min_x: 0.25,
        max_x: 0.75,
        min_y: 0.1,
        max_y: 0.9,
    };
    let v = ViewportRect::new(0.0, 0.0, 400.0, 100.0);
    let resolved = bounds.resolve(&v);

    assert_eq!(resolved.clamp(Point::new(0.0, 0.0)), Point::new(100.0, 10.0));
    assert_eq!(
        resolved.clamp(Point::new(9999.0, 9999.0)),
        Point::new(300.0, 90.0)
    );
    let inside = Point::new(200.0, 50.0);
    assert_eq!(resolved.clamp(inside), inside);
}

#[test]
fn test_bounds_normality() {
    assert!(BoundsFrac::default().is_normal());
    let oversized = BoundsFrac {
        min_x: -0.2,
        max_x: 1.1,
        min_y: 0.0,
        max_y: 1.0,
    };
    assert!(!oversized.is_normal());
}

#[test]
fn test_bounds_contains_target() {
    let bounds = BoundsFrac {
        min_x: 0.25,
        max_x: 0.8,
        min_y: 0.0,
        max_y: 0.5,
    };
    assert!(bounds.contains(FracPoint::new(0.5, 0.4)));
    assert!(!bounds.contains(FracPoint::new(0.1, 0.4)));
    assert!(!bounds.contains(FracPoint::new(0.5, 0.7)));
}
