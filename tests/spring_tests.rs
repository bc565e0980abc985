use squish::{Point, PopState, Spring, SpringConfig, Vec2};

#[test]
fn spring_at_rest_produces_no_acceleration() {
    // The first endpoint sits on the origin, so the pop-in scale leaves it put.
    let mut points = vec![
        Point::new(Vec2::new(0.0f64, 0.0)),
        Point::new(Vec2::new(6.0, 8.0)),
    ];
    let mut spring = Spring::between(0, 1, &points, &SpringConfig::new());

    for _ in 0..10 {
        spring.update(&mut points);
        assert_eq!(points[0].acceleration.length(), 0.0);
        assert_eq!(points[1].acceleration.length(), 0.0);
    }
    assert_eq!(points[0].position, Vec2::new(0.0, 0.0));
    assert_eq!(points[1].position, Vec2::new(6.0, 8.0));
}

#[test]
fn pop_in_only_on_first_update() {
    let mut points = vec![
        Point::new(Vec2::new(10.0f64, 10.0)),
        Point::new(Vec2::new(20.0, 10.0)),
    ];
    let config = SpringConfig::new().with_stiffness(0.0).with_damping(0.0);
    let mut spring = Spring::between(0, 1, &points, &config);

    spring.update(&mut points);
    assert_eq!(spring.state(), PopState::Fired);
    assert_eq!(points[0].position, Vec2::new(10.0 * 1.1, 10.0 * 1.1));
    assert_eq!(points[1].position, Vec2::new(20.0, 10.0));

    for _ in 0..5 {
        spring.update(&mut points);
    }
    assert_eq!(points[0].position, Vec2::new(10.0 * 1.1, 10.0 * 1.1));
}

#[test]
fn compressed_spring_pushes_apart() {
    let mut points = vec![
        Point::new(Vec2::new(0.0f64, 0.0)),
        Point::new(Vec2::new(2.0, 0.0)),
    ];
    let config = SpringConfig::new().with_stiffness(0.1).with_damping(0.0);
    let mut spring = Spring::new(0, 1, 5.0, &config);
    spring.update(&mut points);

    assert!(points[0].acceleration.x < 0.0);
    assert!(points[1].acceleration.x > 0.0);
    assert_eq!(points[0].acceleration.x, -points[1].acceleration.x);
}

#[test]
fn last_spring_wins_shared_point() {
    // Two springs share point 1; only the second one's result survives.
    let mut points = vec![
        Point::new(Vec2::new(0.0f64, 0.0)),
        Point::new(Vec2::new(1.0, 0.0)),
        Point::new(Vec2::new(2.0, 0.0)),
    ];
    let config = SpringConfig::new().with_stiffness(1.0).with_damping(0.0).with_pop_scale(1.0);
    let mut left = Spring::new(0, 1, 0.5, &config);
    let mut right = Spring::new(1, 2, 1.0, &config);

    left.update(&mut points);
    let after_left = points[1].acceleration;
    assert!(after_left.x < 0.0);

    right.update(&mut points);
    // The right spring is at rest, so it wipes the left spring's pull.
    assert_eq!(points[1].acceleration.x, 0.0);
}

#[test]
fn strain_tracks_stretch() {
    let mut points = vec![
        Point::new(Vec2::new(0.0f64, 0.0)),
        Point::new(Vec2::new(3.0, 0.0)),
    ];
    let spring = Spring::between(0, 1, &points, &SpringConfig::new());
    assert_eq!(spring.strain(&points), 0.0);
    points[1].position = Vec2::new(5.0, 0.0);
    assert_eq!(spring.strain(&points), 2.0);
}

#[test]
fn direction_is_half_the_separation() {
    let mut points = vec![
        Point::new(Vec2::new(0.0f32, 0.0)),
        Point::new(Vec2::new(6.0, 2.0)),
    ];
    let config = SpringConfig::new().with_stiffness(1.0).with_damping(0.0);
    let mut spring = Spring::new(0, 1, 0.0, &config);
    spring.update(&mut points);

    // Separation (6, 2) halves to (3, 1); the force is the full distance.
    let force = Vec2::new(6.0f32, 2.0).length();
    assert_eq!(points[0].acceleration, Vec2::new(3.0 * force, 1.0 * force));
    assert_eq!(points[1].acceleration, Vec2::new(3.0 * -force, 1.0 * -force));
}
