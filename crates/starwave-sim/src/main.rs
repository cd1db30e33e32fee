use anyhow::Context;
use glam::DVec2;
use rand::rngs::StdRng;
use rand::SeedableRng;
use starwave_core::sim::Simulation;
use starwave_core::{EffectConfig, Starfield, Viewport};

const VIEWPORT: Viewport = Viewport::new(1280.0, 800.0);

/// One scripted session: a refresh rate and the clicks to feed it.
struct Scenario {
    name: &'static str,
    frame_interval_ms: f64,
    clicks: &'static [(f64, f64, f64)],
    run_ms: f64,
}

const SCENARIOS: &[Scenario] = &[
    Scenario {
        name: "single click, 60fps",
        frame_interval_ms: 1000.0 / 60.0,
        clicks: &[(0.0, 640.0, 400.0)],
        run_ms: 4000.0,
    },
    Scenario {
        name: "single click, 20fps",
        frame_interval_ms: 50.0,
        clicks: &[(0.0, 200.0, 150.0)],
        run_ms: 4000.0,
    },
    Scenario {
        name: "click spam during a wave",
        frame_interval_ms: 1000.0 / 60.0,
        clicks: &[(0.0, 640.0, 400.0), (500.0, 100.0, 100.0), (1200.0, 900.0, 700.0)],
        run_ms: 5000.0,
    },
    Scenario {
        name: "double click into the gallery",
        frame_interval_ms: 1000.0 / 60.0,
        clicks: &[(0.0, 320.0, 200.0), (120.0, 320.0, 200.0)],
        run_ms: 6000.0,
    },
];

fn parse_seed() -> anyhow::Result<u64> {
    match std::env::args().nth(1) {
        Some(arg) => arg
            .parse()
            .with_context(|| format!("seed must be an unsigned integer, got {arg:?}")),
        None => Ok(0x5eed),
    }
}

fn run(scenario: &Scenario, seed: u64) -> anyhow::Result<()> {
    let mut rng = StdRng::seed_from_u64(seed);
    let images = vec!["/img/qiqi-ice.jpg".to_string()];
    let engine = Starfield::new(EffectConfig::default(), images, &mut rng)
        .context("engine configuration rejected")?;
    let mut sim = Simulation::new(engine, VIEWPORT, scenario.frame_interval_ms);

    for &(at, x, y) in scenario.clicks {
        let outcome = sim.click(at, DVec2::new(x, y));
        log::debug!("[sim] t={at:.0} click ({x:.0},{y:.0}) -> {outcome:?}");
    }
    sim.run_until(scenario.run_ms);

    let ripple = sim.engine.ripple();
    log::info!(
        "[sim] {}: waves={} detections={} sparkles={} fps={} poll={}ms frames={}",
        scenario.name,
        ripple.runs_started(),
        ripple.detections(),
        sim.surface.total_sparkles(),
        ripple.perf().fps(),
        ripple.perf().poll_interval(),
        sim.frames_delivered(),
    );
    if !sim.surface.gallery_images.is_empty() {
        log::info!("[sim] gallery showed {:?}", sim.surface.gallery_images);
    }

    sim.engine.shutdown(&mut sim.sched, &mut sim.surface);
    anyhow::ensure!(
        sim.sched.live_timers() == 0 && sim.sched.live_frames() == 0,
        "{}: work left queued after shutdown",
        scenario.name
    );
    Ok(())
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let seed = parse_seed()?;
    log::info!("[sim] seed={seed} viewport={}x{}", VIEWPORT.width, VIEWPORT.height);
    for scenario in SCENARIOS {
        run(scenario, seed)?;
    }
    Ok(())
}
