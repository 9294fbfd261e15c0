use super::*;

fn canvas() -> Canvas {
    Canvas::new(1024, 680).unwrap()
}

#[test]
fn polygon_is_centered_on_canvas() {
    let base = ControlPolygon::base(canvas());
    assert_eq!(base.points()[0], Point::new(0.0, 204.0 - 340.0));
    assert_eq!(base.points()[5], Point::new(0.0, 544.0 - 340.0));
}

#[test]
fn scaling_is_about_origin() {
    let base = ControlPolygon::base(canvas());
    let half = base.scaled(0.5);
    for (a, b) in base.points().iter().zip(half.points()) {
        assert_eq!(b.x, a.x * 0.5);
        assert_eq!(b.y, a.y * 0.5);
    }
}

#[test]
fn silhouette_has_two_points_per_sample() {
    let s = Silhouette::build(&ControlPolygon::base(canvas()), DEFAULT_SAMPLES);
    assert_eq!(s.len(), 2 * DEFAULT_SAMPLES);
    let s = Silhouette::build(&ControlPolygon::final_heart(canvas()), 7);
    assert_eq!(s.len(), 14);
}

#[test]
fn mirrored_points_reflect_across_first_control_x() {
    let poly = ControlPolygon::final_heart(canvas()).scaled(0.9);
    let x0 = poly.points()[0].x;
    let s = Silhouette::build(&poly, 40);
    for pair in s.points().chunks_exact(2) {
        let (orig, mirror) = (pair[0], pair[1]);
        assert_eq!(mirror.x, 2.0 * x0 - orig.x);
        assert_eq!(mirror.y, orig.y);
    }
}

#[test]
fn curve_endpoints_are_first_and_last_control_points() {
    let poly = ControlPolygon::base(canvas());
    let s = Silhouette::build(&poly, 10);
    assert_eq!(s[0], poly.points()[0]);
    assert_eq!(s[s.len() - 2], poly.points()[5]);
}

#[test]
fn blend_is_per_index_and_checks_length() {
    let a = Silhouette::from_points(vec![Point::new(0.0, 0.0), Point::new(10.0, 10.0)]);
    let b = Silhouette::from_points(vec![Point::new(2.0, 4.0), Point::new(20.0, 0.0)]);
    let mid = a.blend(&b, 0.5).unwrap();
    assert_eq!(mid.points(), &[Point::new(1.0, 2.0), Point::new(15.0, 5.0)]);

    let short = Silhouette::from_points(vec![Point::ORIGIN]);
    assert!(matches!(a.blend(&short, 0.5), Err(HeartError::Validation(_))));
}
