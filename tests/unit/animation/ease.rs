use super::*;

#[test]
fn table_has_one_weight_per_frame() {
    assert_eq!(EasingTable::default().len(), DEFAULT_FRAMES);
    assert_eq!(EasingTable::new(12).len(), 12);
    assert!(EasingTable::new(0).is_empty());
}

#[test]
fn endpoints_are_near_zero_and_one() {
    let table = EasingTable::default();
    let first = table.weight(0).unwrap();
    let last = table.weight(DEFAULT_FRAMES - 1).unwrap();
    assert!(first.abs() < 1e-9, "first={first}");
    assert!((last - 1.0).abs() < 1e-9, "last={last}");
}

#[test]
fn weights_stay_in_unit_interval() {
    for w in EasingTable::default().iter() {
        assert!((-1e-12..=1.0 + 1e-12).contains(&w), "w={w}");
    }
}

#[test]
fn pacing_starts_slow_and_finishes_fast() {
    // Reversed + inverted ease: small steps early, large steps near the end.
    let w = EasingTable::default();
    let w = w.weights();
    let early = w[1] - w[0];
    let late = w[DEFAULT_FRAMES - 1] - w[DEFAULT_FRAMES - 2];
    assert!(early < late, "early={early} late={late}");
    assert!(w[DEFAULT_FRAMES / 2] < 0.5);
}

#[test]
fn matches_direct_transform_of_the_curve() {
    let table = EasingTable::new(5);
    let control = EASE_CONTROL.map(|(x, y)| Point::new(x, y));
    for (i, t) in [1.0, 0.75, 0.5, 0.25, 0.0].into_iter().enumerate() {
        let expected = 1.0 - bezier::eval(&control, t).y;
        assert!((table.weight(i).unwrap() - expected).abs() < 1e-12);
    }
}
