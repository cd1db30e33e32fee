// Host-side tests for configuration validation.

use starwave_core::{ConfigError, EffectConfig, PollStep};

#[test]
fn defaults_are_valid() {
    let cfg = EffectConfig::default();
    assert_eq!(cfg.validate(), Ok(()));
    assert_eq!(cfg.star_count, 175);
    assert_eq!(cfg.thickness_fraction, 0.06);
}

#[test]
fn thickness_must_stay_in_range() {
    for bad in [0.0, 0.049, 0.151, f64::NAN] {
        let cfg = EffectConfig {
            thickness_fraction: bad,
            ..EffectConfig::default()
        };
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::ThicknessOutOfRange(_))
        ));
    }
    for ok in [0.05, 0.1, 0.15] {
        let cfg = EffectConfig {
            thickness_fraction: ok,
            ..EffectConfig::default()
        };
        assert_eq!(cfg.validate(), Ok(()));
    }
}

#[test]
fn durations_must_be_positive() {
    let cfg = EffectConfig {
        sparkle_clear_delay_ms: 0.0,
        ..EffectConfig::default()
    };
    assert_eq!(
        cfg.validate(),
        Err(ConfigError::NonPositive {
            name: "sparkle_clear_delay_ms",
            value: 0.0
        })
    );
}

#[test]
fn safety_timeout_must_outlast_the_wave() {
    let cfg = EffectConfig {
        safety_timeout_ms: 2100.0,
        ..EffectConfig::default()
    };
    assert_eq!(
        cfg.validate(),
        Err(ConfigError::SafetyTooShort {
            safety_ms: 2100.0,
            wave_ms: 2100.0
        })
    );
}

#[test]
fn poll_table_shape_is_checked() {
    let empty = EffectConfig {
        poll_steps: Vec::new(),
        ..EffectConfig::default()
    };
    assert_eq!(empty.validate(), Err(ConfigError::EmptyPollTable));

    let step = |min_fps, interval_ms| PollStep {
        min_fps,
        interval_ms,
    };
    let no_floor = EffectConfig {
        poll_steps: vec![step(10, 300.0), step(30, 200.0)],
        ..EffectConfig::default()
    };
    assert_eq!(no_floor.validate(), Err(ConfigError::UnorderedPollTable(0)));

    let unordered = EffectConfig {
        poll_steps: vec![step(0, 300.0), step(45, 150.0), step(30, 200.0)],
        ..EffectConfig::default()
    };
    assert_eq!(unordered.validate(), Err(ConfigError::UnorderedPollTable(2)));
}

#[test]
fn zero_cadence_is_rejected() {
    let cfg = EffectConfig {
        low_fps_check_every: 0,
        ..EffectConfig::default()
    };
    assert_eq!(cfg.validate(), Err(ConfigError::ZeroCadence));
}

#[test]
fn error_messages_name_the_problem() {
    let msg = ConfigError::NonPositive {
        name: "wave_duration_ms",
        value: -1.0,
    }
    .to_string();
    assert!(msg.contains("wave_duration_ms"));
}
