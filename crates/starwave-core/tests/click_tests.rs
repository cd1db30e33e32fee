// Host-side tests for single/double click classification.

use glam::DVec2;
use rand::rngs::StdRng;
use rand::SeedableRng;
use starwave_core::sim::{Simulation, VirtualScheduler};
use starwave_core::{
    ClickDispatcher, ClickOutcome, EffectConfig, Gallery, GalleryTiming, Scheduler, StarRegistry,
    Starfield, Task, Viewport,
};

const VIEW: Viewport = Viewport::new(1000.0, 800.0);

fn sim_with_images(images: &[&str]) -> Simulation {
    let mut rng = StdRng::seed_from_u64(1);
    let gallery = Gallery::new(
        images.iter().map(|s| s.to_string()).collect(),
        GalleryTiming::default(),
        &mut rng,
    );
    let engine =
        Starfield::with_parts(EffectConfig::default(), StarRegistry::default(), gallery).unwrap();
    Simulation::new(engine, VIEW, 16.0)
}

#[test]
fn fast_second_click_suppresses_the_single_click() {
    let mut sim = sim_with_images(&["/img/a.jpg"]);
    assert_eq!(sim.click(0.0, DVec2::new(100.0, 100.0)), ClickOutcome::Pending);
    let second = sim.click(150.0, DVec2::new(200.0, 400.0));
    assert_eq!(
        second,
        ClickOutcome::DoubleClick {
            origin: DVec2::new(200.0, 400.0)
        }
    );
    assert!(!sim.engine.clicks().has_pending());
    assert!(sim.engine.gallery().is_active());
    assert_eq!(sim.surface.gallery_origin, Some(DVec2::new(20.0, 50.0)));

    sim.run_until(2000.0);
    assert_eq!(sim.engine.ripple().runs_started(), 0);
    assert_eq!(sim.surface.wave_activations, 0);
}

#[test]
fn slow_second_click_fires_first_and_arms_its_own_timer() {
    let mut sim = sim_with_images(&[]);
    sim.click(0.0, DVec2::new(100.0, 100.0));
    sim.run_until(300.0);
    assert_eq!(sim.engine.ripple().runs_started(), 1);
    assert!(!sim.engine.clicks().has_pending());

    assert_eq!(sim.click(400.0, DVec2::new(50.0, 50.0)), ClickOutcome::Pending);
    assert!(sim.engine.clicks().has_pending());
    let pending = sim.sched.pending_tasks();
    assert!(pending.contains(&(
        700.0,
        Task::SingleClick {
            origin: DVec2::new(50.0, 50.0)
        }
    )));
    assert!(!sim.engine.gallery().is_active());
}

#[test]
fn triple_click_is_a_double_then_a_fresh_single() {
    let mut sim = sim_with_images(&[]);
    sim.click(0.0, DVec2::ZERO);
    assert!(matches!(
        sim.click(100.0, DVec2::ZERO),
        ClickOutcome::DoubleClick { .. }
    ));
    // The double click reset the history, so the third click starts over.
    assert_eq!(sim.click(200.0, DVec2::ZERO), ClickOutcome::Pending);
    sim.run_until(500.0);
    assert_eq!(sim.engine.ripple().runs_started(), 1);
}

#[test]
fn first_click_is_never_a_double() {
    let mut sched = VirtualScheduler::default();
    let mut clicks = ClickDispatcher::new(300.0);
    assert_eq!(
        clicks.on_click(10.0, DVec2::ZERO, &mut sched),
        ClickOutcome::Pending
    );
    assert_eq!(sched.live_timers(), 1);
}

#[test]
fn rearming_cancels_the_previous_timer() {
    let mut sched = VirtualScheduler::default();
    let mut clicks = ClickDispatcher::new(300.0);
    clicks.on_click(0.0, DVec2::ZERO, &mut sched);
    let first = sched.pending_tasks();
    clicks.on_click(500.0, DVec2::ONE, &mut sched);
    assert_eq!(sched.live_timers(), 1);
    assert_eq!(sched.timers_cancelled, 1);
    assert_ne!(first, sched.pending_tasks());
}

#[test]
fn stale_single_click_delivery_is_ignored() {
    let mut sched = VirtualScheduler::default();
    let mut clicks = ClickDispatcher::new(300.0);
    clicks.on_click(0.0, DVec2::ZERO, &mut sched);
    let stale = sched.set_timeout(300.0, Task::SingleClick { origin: DVec2::ZERO });
    assert!(!clicks.on_single_click_timer(stale));
    assert!(clicks.has_pending());
}
