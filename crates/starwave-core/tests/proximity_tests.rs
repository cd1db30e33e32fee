// Host-side tests for the annulus hit-test.

use glam::DVec2;
use starwave_core::{
    detect, Annulus, Star, StarId, StarRegistry, StarSize, TimerHandle, Viewport, WaveFront,
};

fn registry(positions: &[(f64, f64)]) -> StarRegistry {
    StarRegistry::from_stars(
        positions
            .iter()
            .map(|&(x, y)| Star::new(DVec2::new(x, y), StarSize::Default))
            .collect(),
    )
}

fn front(center: (f64, f64), radius: f64) -> WaveFront {
    WaveFront {
        center: DVec2::new(center.0, center.1),
        radius,
        max_radius: 1500.0,
    }
}

const VIEW: Viewport = Viewport::new(1000.0, 800.0);

#[test]
fn reference_scenario_matches_only_the_ring() {
    // Click at the center of a 1000x800 viewport, radius 100px, thickness 5%.
    // In percentage space the ring spans 5..15 points around (50, 50).
    let stars = registry(&[
        (60.0, 50.0), // 100px equivalent
        (51.0, 50.0), // 10px equivalent
        (80.0, 50.0), // 300px equivalent
    ]);
    let hits = detect(&front((500.0, 400.0), 100.0), VIEW, 0.05, &stars);
    assert_eq!(hits.as_slice(), &[StarId(0)]);
}

#[test]
fn boundaries_are_inclusive() {
    let stars = registry(&[
        (55.0, 50.0), // exactly inner
        (65.0, 50.0), // exactly outer
        (50.0, 35.0), // exactly outer, other axis
        (54.0, 50.0), // just inside the hole
        (66.0, 50.0), // just outside
    ]);
    let hits = detect(&front((500.0, 400.0), 100.0), VIEW, 0.05, &stars);
    assert_eq!(hits.as_slice(), &[StarId(0), StarId(1), StarId(2)]);
}

#[test]
fn membership_agrees_with_distance_over_a_sweep() {
    let ring = Annulus::new(&front((500.0, 400.0), 100.0), VIEW, 0.05);
    // d in percentage points along the x axis, 0.0 to 30.0 in 0.25 steps
    for i in 0..=120 {
        let d = i as f64 * 0.25;
        let inside = ring.contains(DVec2::new(50.0 + d, 50.0));
        let expected = (5.0..=15.0).contains(&d);
        assert_eq!(inside, expected, "distance {d}");
    }
}

#[test]
fn sparkling_stars_are_never_rematched() {
    let mut stars = registry(&[(60.0, 50.0), (40.0, 50.0)]);
    assert!(stars.begin_sparkle(StarId(0), TimerHandle(1)));
    let hits = detect(&front((500.0, 400.0), 100.0), VIEW, 0.05, &stars);
    assert_eq!(hits.as_slice(), &[StarId(1)]);

    // Once the clear timer runs, the star is eligible again.
    assert!(stars.end_sparkle(StarId(0), TimerHandle(1)));
    let hits = detect(&front((500.0, 400.0), 100.0), VIEW, 0.05, &stars);
    assert_eq!(hits.as_slice(), &[StarId(0), StarId(1)]);
}

#[test]
fn radius_below_thickness_is_not_an_error() {
    // radius 10px, thickness 50px: inner is -40px, squared it still bounds from below
    let ring = Annulus::new(&front((500.0, 400.0), 10.0), VIEW, 0.05);
    assert!((ring.inner_sq - 16.0).abs() < 1e-9);
    assert!((ring.outer_sq - 36.0).abs() < 1e-9);
    let stars = registry(&[(55.0, 50.0), (50.0, 50.0), (57.0, 50.0)]);
    let hits = detect(&front((500.0, 400.0), 10.0), VIEW, 0.05, &stars);
    assert_eq!(hits.as_slice(), &[StarId(0)]);
}

#[test]
fn degenerate_viewport_matches_nothing() {
    let stars = registry(&[(0.0, 0.0), (50.0, 50.0)]);
    let hits = detect(&front((0.0, 0.0), 0.0), Viewport::new(0.0, 800.0), 0.05, &stars);
    assert!(hits.is_empty());
}

#[test]
fn axes_are_normalized_independently() {
    // Per-axis percentages, radii scaled by the larger dimension.
    let view = Viewport::new(2000.0, 500.0);
    let ring = Annulus::new(&front((1000.0, 250.0), 200.0), view, 0.05);
    assert_eq!(ring.center_percent, DVec2::new(50.0, 50.0));
    // thickness 100px -> ring 100..300px -> 5..15 points
    assert!((ring.inner_sq - 25.0).abs() < 1e-9);
    assert!((ring.outer_sq - 225.0).abs() < 1e-9);
}

#[test]
fn progress_is_clamped() {
    assert_eq!(front((0.0, 0.0), 750.0).progress(), 0.5);
    assert_eq!(front((0.0, 0.0), 3000.0).progress(), 1.0);
}
