// Host-side tests for star population and sparkle bookkeeping.

use rand::rngs::StdRng;
use rand::SeedableRng;
use starwave_core::{StarId, StarRegistry, StarSize, TimerHandle};

#[test]
fn created_stars_stay_in_range() {
    let mut rng = StdRng::seed_from_u64(42);
    let stars = StarRegistry::create_all(175, &mut rng);
    assert_eq!(stars.len(), 175);
    for (_, s) in stars.iter() {
        assert!((0.0..=100.0).contains(&s.position.x));
        assert!((0.0..=100.0).contains(&s.position.y));
        assert!((0.0..3.0).contains(&s.twinkle_delay_s));
        assert!((2.0..4.0).contains(&s.twinkle_duration_s));
        assert!(!s.is_sparkling());
    }
}

#[test]
fn size_classes_follow_the_draw_split() {
    let mut rng = StdRng::seed_from_u64(7);
    let stars = StarRegistry::create_all(3000, &mut rng);
    let count = |size| stars.iter().filter(|(_, s)| s.size == size).count() as f64;
    // Roughly 30% large, 30% medium, 40% default.
    assert!((count(StarSize::Large) / 3000.0 - 0.3).abs() < 0.05);
    assert!((count(StarSize::Medium) / 3000.0 - 0.3).abs() < 0.05);
    assert!((count(StarSize::Default) / 3000.0 - 0.4).abs() < 0.05);
    assert_eq!(StarSize::Large.class_name(), Some("large"));
    assert_eq!(StarSize::Default.class_name(), None);
}

#[test]
fn same_seed_same_sky() {
    let a = StarRegistry::create_all(50, &mut StdRng::seed_from_u64(9));
    let b = StarRegistry::create_all(50, &mut StdRng::seed_from_u64(9));
    for ((_, x), (_, y)) in a.iter().zip(b.iter()) {
        assert_eq!(x.position, y.position);
        assert_eq!(x.size, y.size);
    }
}

#[test]
fn zero_stars_is_fine() {
    let stars = StarRegistry::create_all(0, &mut StdRng::seed_from_u64(1));
    assert!(stars.is_empty());
    assert_eq!(stars.sparkling_count(), 0);
}

#[test]
fn sparkle_flags_are_guarded_by_their_timer() {
    let mut stars = StarRegistry::create_all(2, &mut StdRng::seed_from_u64(3));
    assert!(stars.begin_sparkle(StarId(0), TimerHandle(10)));
    assert!(!stars.begin_sparkle(StarId(0), TimerHandle(11)));
    assert!(!stars.begin_sparkle(StarId(5), TimerHandle(12)));

    // A timer that does not own the sparkle cannot clear it.
    assert!(!stars.end_sparkle(StarId(0), TimerHandle(11)));
    assert!(stars.get(StarId(0)).unwrap().is_sparkling());
    assert!(stars.end_sparkle(StarId(0), TimerHandle(10)));
    assert!(!stars.end_sparkle(StarId(0), TimerHandle(10)));
}

#[test]
fn clear_all_returns_live_timers() {
    let mut stars = StarRegistry::create_all(3, &mut StdRng::seed_from_u64(3));
    stars.begin_sparkle(StarId(0), TimerHandle(1));
    stars.begin_sparkle(StarId(2), TimerHandle(2));
    let pending = stars.clear_all();
    assert_eq!(
        pending,
        vec![(StarId(0), TimerHandle(1)), (StarId(2), TimerHandle(2))]
    );
    assert_eq!(stars.sparkling_count(), 0);
}
