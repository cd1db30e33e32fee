// Host-side tests for page constants and CSS value formatting.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod style {
    include!("../src/style.rs");
}

use constants::*;
use starwave_core::StarSize;
use style::*;

#[test]
fn css_variables_are_custom_properties() {
    for var in [
        CLICK_X_VAR,
        CLICK_Y_VAR,
        MAX_SIZE_VAR,
        GALLERY_CLICK_X_VAR,
        GALLERY_CLICK_Y_VAR,
    ] {
        assert!(var.starts_with("--"), "{var}");
    }
}

#[test]
fn class_names_are_distinct() {
    let mut names = vec![
        STAR_CLASS,
        SPARKLE_CLASS,
        WAVE_CLASS,
        RIPPLE_CLASS,
        WAVE_LAYER_CLASS,
        GALLERY_MODE_CLASS,
        GALLERY_EXIT_CLASS,
        GALLERY_IMAGE_CLASS,
        FADE_IN_CLASS,
        FADE_OUT_CLASS,
    ];
    let total = names.len();
    names.sort_unstable();
    names.dedup();
    assert_eq!(names.len(), total);
}

#[test]
fn gallery_has_images() {
    assert!(!GALLERY_IMAGES.is_empty());
    assert!(GALLERY_IMAGES.iter().all(|src| src.starts_with('/')));
}

#[test]
fn star_class_names_carry_the_size_modifier() {
    assert_eq!(star_class_name(StarSize::Large), "star large");
    assert_eq!(star_class_name(StarSize::Medium), "star medium");
    assert_eq!(star_class_name(StarSize::Default), "star");
}

#[test]
fn css_units_format_plainly() {
    assert_eq!(percent(12.5), "12.5%");
    assert_eq!(percent(50.0), "50%");
    assert_eq!(px(2000.0), "2000px");
    assert_eq!(seconds(2.25), "2.25s");
}
