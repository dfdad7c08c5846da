// Host-side tests for touch detection and the render tier.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod touch {
    include!("../src/core/touch.rs");
}

use constants::*;
use touch::*;

#[test]
fn touch_primary_from_either_signal() {
    assert!(is_touch_primary(true, 0));
    assert!(is_touch_primary(false, 5));
    assert!(is_touch_primary(true, 10));
    assert!(!is_touch_primary(false, 0));
}

#[test]
fn desktop_interacts_directly() {
    let s = ViewerInteraction::initial(false);
    assert_eq!(s, ViewerInteraction::Direct);
    assert!(s.captures_pointer());
    assert_eq!(s.container_class(), None);
    assert_eq!(s.enable(), ViewerInteraction::Direct);
    assert_eq!(s.disable(), ViewerInteraction::Direct);
}

#[test]
fn touch_starts_locked_and_opts_in() {
    let s = ViewerInteraction::initial(true);
    assert_eq!(s, ViewerInteraction::Locked);
    assert!(!s.captures_pointer());
    assert_eq!(s.container_class(), Some("touch-locked"));

    let active = s.enable();
    assert_eq!(active, ViewerInteraction::Active);
    assert!(active.captures_pointer());
    assert_eq!(active.container_class(), Some("touch-active"));
    assert_eq!(active.enable(), ViewerInteraction::Active);

    assert_eq!(active.disable(), ViewerInteraction::Locked);
    assert_eq!(s.disable(), ViewerInteraction::Locked);
}

#[test]
fn touch_tier_trades_quality_for_cost() {
    let tier = RenderTier::for_device(true);
    assert!(!tier.antialias());
    assert_eq!(tier.sample_count, 1);
    assert_eq!(tier.precision, Precision::Medium);
    assert_eq!(tier.shadow_map_size, TOUCH_SHADOW_MAP_SIZE);
    assert_eq!(tier.pixel_ratio(3.0), TOUCH_PIXEL_RATIO);
    assert!(tier.env_face_size() < ENV_FACE_SIZE);
}

#[test]
fn desktop_tier_caps_pixel_ratio() {
    let tier = RenderTier::for_device(false);
    assert!(tier.antialias());
    assert_eq!(tier.sample_count, MSAA_SAMPLES);
    assert_eq!(tier.precision, Precision::High);
    assert_eq!(tier.shadow_map_size, SHADOW_MAP_SIZE);
    assert_eq!(tier.pixel_ratio(2.0), MAX_PIXEL_RATIO);
    assert_eq!(tier.pixel_ratio(1.0), 1.0);
    assert_eq!(tier.env_face_size(), ENV_FACE_SIZE);
}
