// Host-side tests for the procedural room environment.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod env_map {
    include!("../src/core/env_map.rs");
}

use constants::*;
use env_map::*;
use glam::Vec3;

#[test]
fn mip_chain_halves_down_to_one_texel() {
    let cube = room_environment(16);
    assert_eq!(cube.face_size, 16);
    assert_eq!(cube.mip_count(), 5);
    for level in 0..cube.mip_count() {
        let size = cube.level_size(level);
        assert_eq!(size, 16 >> level);
        let expected = (size * size * 4) as usize * CUBE_FACES;
        assert_eq!(cube.levels[level as usize].len(), expected);
    }
}

#[test]
fn odd_face_size_rounds_up_to_power_of_two() {
    let cube = room_environment(20);
    assert_eq!(cube.face_size, 32);
    assert_eq!(room_environment(0).face_size, 1);
}

#[test]
fn face_directions_point_along_their_axis() {
    let axes = [Vec3::X, -Vec3::X, Vec3::Y, -Vec3::Y, Vec3::Z, -Vec3::Z];
    for (face, axis) in axes.iter().enumerate() {
        let d = face_direction(face, 3, 3, 8);
        assert!((d.length() - 1.0).abs() < 1e-5);
        assert!(d.dot(*axis) > 0.9, "face {} center points {:?}", face, d);
    }
}

#[test]
fn ceiling_panel_is_brightest_and_floor_darkest() {
    let up = room_radiance(Vec3::Y);
    let down = room_radiance(-Vec3::Y);
    let wall = room_radiance(Vec3::new(0.3, 0.0, 1.0).normalize());
    assert_eq!(up, Vec3::splat(ENV_RANGE));
    assert!(down.x < wall.x);
    assert!(wall.x < up.x);
}

#[test]
fn encoded_texels_are_opaque_and_in_range() {
    let cube = room_environment(8);
    for level in &cube.levels {
        assert!(level.chunks_exact(4).all(|t| t[3] == 255));
    }
    // the +Y face holds the saturated ceiling panel at its center
    let size = cube.face_size as usize;
    let face_bytes = size * size * 4;
    let center = face_bytes * 2 + ((size / 2) * size + size / 2) * 4;
    assert_eq!(cube.levels[0][center], 255);
}
