// Host-side tests for constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod core_constants {
    include!("../src/core/constants.rs");
}

use constants::*;
use core_constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn camera_frames_the_model() {
    assert!(CAMERA_NEAR > 0.0 && CAMERA_NEAR < CAMERA_FAR);
    assert!(CAMERA_DISTANCE > CAMERA_NEAR && CAMERA_DISTANCE < CAMERA_FAR);
    // the normalized model fits inside the vertical field of view
    let half_height = CAMERA_DISTANCE * (CAMERA_FOV_DEGREES.to_radians() * 0.5).tan();
    assert!(MODEL_TARGET_SIZE * 0.5 < half_height);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn ratios_and_factors_are_fractions() {
    assert!(ORBIT_DAMPING_FACTOR > 0.0 && ORBIT_DAMPING_FACTOR < 1.0);
    assert!(FOG_LERP_PER_FRAME > 0.0 && FOG_LERP_PER_FRAME <= 1.0);
    assert!(VISIBILITY_THRESHOLD > 0.0 && VISIBILITY_THRESHOLD < 1.0);
    assert!(MATERIAL_ROUGHNESS >= 0.0 && MATERIAL_ROUGHNESS <= 1.0);
    assert!(MATERIAL_METALNESS >= 0.0 && MATERIAL_METALNESS <= 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn render_tiers_are_ordered() {
    assert!(TOUCH_PIXEL_RATIO <= MAX_PIXEL_RATIO);
    assert!(TOUCH_SHADOW_MAP_SIZE < SHADOW_MAP_SIZE);
    assert!(SHADOW_MAP_SIZE.is_power_of_two());
    assert!(ENV_FACE_SIZE.is_power_of_two());
    assert!(MSAA_SAMPLES == 1 || MSAA_SAMPLES == 4);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn key_light_reaches_the_scene() {
    let [x, y, z] = KEY_LIGHT_POSITION;
    let distance = (x * x + y * y + z * z).sqrt();
    assert!(distance > KEY_SHADOW_NEAR && distance < KEY_SHADOW_FAR);
    assert!(KEY_SHADOW_EXTENT > MODEL_TARGET_SIZE * 0.5);
    assert!(BACK_LIGHT_ANGLE > 0.0 && BACK_LIGHT_ANGLE < std::f32::consts::FRAC_PI_2);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn load_timing_is_sane() {
    assert!(OVERLAY_FADE_DELAY_MS > 0);
    assert!(OVERLAY_HIDE_DELAY_MS > 0);
    assert!(MODEL_LOAD_TIMEOUT_MS > OVERLAY_FADE_DELAY_MS + OVERLAY_HIDE_DELAY_MS);
}

#[test]
fn dom_contract_names() {
    assert_eq!(CANVAS_CONTAINER_ID, "canvas-container");
    assert_eq!(LOADER_ID, "loader");
    assert_eq!(PROGRESS_BAR_ID, "progress-bar");
    assert_eq!(HERO_SECTION_ID, "hero");
    assert_eq!(DARK_MODE_CLASS, "dark-mode");
    assert_eq!(MODEL_PATH, "assets/model.glb");
    assert!(GALLERY_SELECTOR.starts_with('.'));
    assert!(DARK_SCHEME_QUERY.contains("prefers-color-scheme"));
}
