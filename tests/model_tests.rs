// Host-side tests for GLB parsing into viewer geometry.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod normalize {
    include!("../src/core/normalize.rs");
}
mod model {
    include!("../src/core/model.rs");
}

use glam::Vec3;
use model::*;

fn pad(mut bytes: Vec<u8>, fill: u8) -> Vec<u8> {
    while bytes.len() % 4 != 0 {
        bytes.push(fill);
    }
    bytes
}

/// Assemble a binary glTF container from a JSON chunk and a BIN chunk.
fn glb(json: &str, bin: &[u8]) -> Vec<u8> {
    let json = pad(json.as_bytes().to_vec(), b' ');
    let bin = pad(bin.to_vec(), 0);
    let bin_chunk = if bin.is_empty() { 0 } else { 8 + bin.len() };
    let total = 12 + 8 + json.len() + bin_chunk;
    let mut out = Vec::with_capacity(total);
    out.extend_from_slice(b"glTF");
    out.extend_from_slice(&2u32.to_le_bytes());
    out.extend_from_slice(&(total as u32).to_le_bytes());
    out.extend_from_slice(&(json.len() as u32).to_le_bytes());
    out.extend_from_slice(b"JSON");
    out.extend_from_slice(&json);
    if !bin.is_empty() {
        out.extend_from_slice(&(bin.len() as u32).to_le_bytes());
        out.extend_from_slice(b"BIN\0");
        out.extend_from_slice(&bin);
    }
    out
}

fn floats(values: &[f32]) -> Vec<u8> {
    values.iter().flat_map(|v| v.to_le_bytes()).collect()
}

const TRIANGLE: [f32; 9] = [0.0, 0.0, 0.0, 2.0, 0.0, 0.0, 0.0, 1.0, 0.0];

fn triangle_json(node: &str) -> String {
    format!(
        r#"{{
  "asset": {{ "version": "2.0" }},
  "scene": 0,
  "scenes": [{{ "nodes": [0] }}],
  "nodes": [{node}],
  "meshes": [{{ "primitives": [{{ "attributes": {{ "POSITION": 0 }} }}] }}],
  "buffers": [{{ "byteLength": 36 }}],
  "bufferViews": [{{ "buffer": 0, "byteOffset": 0, "byteLength": 36 }}],
  "accessors": [{{
    "bufferView": 0, "componentType": 5126, "count": 3, "type": "VEC3",
    "min": [0, 0, 0], "max": [2, 1, 0]
  }}]
}}"#
    )
}

#[test]
fn parses_unindexed_triangle_with_node_transform() {
    let json = triangle_json(r#"{ "mesh": 0, "translation": [1, 0, 0] }"#);
    let data = parse_glb(&glb(&json, &floats(&TRIANGLE))).unwrap();

    assert_eq!(data.mesh_count, 1);
    assert_eq!(data.vertices.len(), 3);
    assert_eq!(data.indices, vec![0, 1, 2]);
    assert_eq!(data.bounds.min, Vec3::new(1.0, 0.0, 0.0));
    assert_eq!(data.bounds.max, Vec3::new(3.0, 1.0, 0.0));
    // generated normals face the viewer
    for v in &data.vertices {
        assert!((Vec3::from(v.normal) - Vec3::Z).length() < 1e-5);
    }
}

#[test]
fn undecodable_embedded_texture_keeps_geometry() {
    let json = r#"{
  "asset": { "version": "2.0" },
  "scene": 0,
  "scenes": [{ "nodes": [0] }],
  "nodes": [{ "mesh": 0 }],
  "meshes": [{ "primitives": [{ "attributes": { "POSITION": 0 } }] }],
  "images": [{ "bufferView": 1, "mimeType": "image/png" }],
  "buffers": [{ "byteLength": 44 }],
  "bufferViews": [
    { "buffer": 0, "byteOffset": 0, "byteLength": 36 },
    { "buffer": 0, "byteOffset": 36, "byteLength": 8 }
  ],
  "accessors": [{
    "bufferView": 0, "componentType": 5126, "count": 3, "type": "VEC3",
    "min": [0, 0, 0], "max": [2, 1, 0]
  }]
}"#;
    let mut bin = floats(&TRIANGLE);
    bin.extend_from_slice(b"notapng!");
    let data = parse_glb(&glb(json, &bin)).unwrap();
    assert_eq!(data.mesh_count, 1);
    assert_eq!(data.indices, vec![0, 1, 2]);
    assert_eq!(data.bounds.max, Vec3::new(2.0, 1.0, 0.0));
}

#[test]
fn child_nodes_inherit_parent_transform() {
    let json = r#"{
  "asset": { "version": "2.0" },
  "scene": 0,
  "scenes": [{ "nodes": [0] }],
  "nodes": [
    { "children": [1], "scale": [2, 2, 2] },
    { "mesh": 0, "translation": [0, 0, 1] }
  ],
  "meshes": [{ "primitives": [{ "attributes": { "POSITION": 0 } }] }],
  "buffers": [{ "byteLength": 36 }],
  "bufferViews": [{ "buffer": 0, "byteOffset": 0, "byteLength": 36 }],
  "accessors": [{
    "bufferView": 0, "componentType": 5126, "count": 3, "type": "VEC3",
    "min": [0, 0, 0], "max": [2, 1, 0]
  }]
}"#;
    let data = parse_glb(&glb(json, &floats(&TRIANGLE))).unwrap();
    assert_eq!(data.bounds.min, Vec3::new(0.0, 0.0, 2.0));
    assert_eq!(data.bounds.max, Vec3::new(4.0, 2.0, 2.0));
}

#[test]
fn scene_without_meshes_is_rejected() {
    let json = r#"{
  "asset": { "version": "2.0" },
  "scene": 0,
  "scenes": [{ "nodes": [0] }],
  "nodes": [{ "name": "empty" }]
}"#;
    let err = parse_glb(&glb(json, &[])).unwrap_err();
    assert!(matches!(err, ModelError::NoMeshes));
}

#[test]
fn garbage_bytes_are_a_gltf_error() {
    let err = parse_glb(b"definitely not a model").unwrap_err();
    assert!(matches!(err, ModelError::Gltf(_)));
    assert!(err.to_string().starts_with("invalid glTF asset"));
}

#[test]
fn smooth_normals_average_adjacent_faces() {
    // two triangles folded 90 degrees along the x axis
    let positions = [
        Vec3::new(0.0, 0.0, 0.0),
        Vec3::new(1.0, 0.0, 0.0),
        Vec3::new(0.0, 1.0, 0.0),
        Vec3::new(0.0, 0.0, 1.0),
    ];
    let indices = [0, 1, 2, 0, 3, 1];
    let normals = vertex_normals(&positions, &indices);
    assert_eq!(normals.len(), 4);
    assert!((normals[2] - Vec3::Z).length() < 1e-6);
    assert!((normals[3] - Vec3::Y).length() < 1e-6);
    let shared = normals[0];
    assert!((shared - Vec3::new(0.0, 1.0, 1.0).normalize()).length() < 1e-6);
}

#[test]
fn unreferenced_vertices_get_a_fallback_normal() {
    let positions = [Vec3::ZERO, Vec3::X, Vec3::Y, Vec3::splat(5.0)];
    let normals = vertex_normals(&positions, &[0, 1, 2]);
    assert_eq!(normals[3], Vec3::Y);
}

#[test]
fn vertex_layout_is_tightly_packed() {
    assert_eq!(std::mem::size_of::<Vertex>(), 24);
    let v = Vertex {
        position: [1.0, 2.0, 3.0],
        normal: [0.0, 1.0, 0.0],
    };
    let bytes: &[u8] = bytemuck::bytes_of(&v);
    assert_eq!(&bytes[0..4], &1.0f32.to_le_bytes());
}
