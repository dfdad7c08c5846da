use super::normalize::Aabb;
use glam::{Mat3, Mat4, Vec3};

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("invalid glTF asset: {0}")]
    Gltf(#[from] gltf::Error),
    #[error("asset has no scene")]
    NoScene,
    #[error("asset has no triangle meshes")]
    NoMeshes,
}

/// Flattened scene geometry: every triangle primitive of the scene graph
/// with node transforms baked in. Authored materials are not kept; the
/// viewer shades everything with one preset.
#[derive(Debug)]
pub struct ModelData {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
    pub bounds: Aabb,
    pub mesh_count: usize,
}

impl ModelData {
    fn new() -> Self {
        Self {
            vertices: Vec::new(),
            indices: Vec::new(),
            bounds: Aabb::empty(),
            mesh_count: 0,
        }
    }
}

/// Parse a binary glTF (or self-contained JSON glTF) into viewer geometry.
/// Embedded images are never decoded.
pub fn parse_glb(bytes: &[u8]) -> Result<ModelData, ModelError> {
    let gltf::Gltf { document, blob } = gltf::Gltf::from_slice(bytes)?;
    let buffers = gltf::import_buffers(&document, None, blob)?;
    let scene = document
        .default_scene()
        .or_else(|| document.scenes().next())
        .ok_or(ModelError::NoScene)?;
    let mut out = ModelData::new();
    for node in scene.nodes() {
        visit(&node, Mat4::IDENTITY, &buffers, &mut out);
    }
    if out.indices.is_empty() {
        return Err(ModelError::NoMeshes);
    }
    Ok(out)
}

fn visit(node: &gltf::Node, parent: Mat4, buffers: &[gltf::buffer::Data], out: &mut ModelData) {
    let world = parent * Mat4::from_cols_array_2d(&node.transform().matrix());
    if let Some(mesh) = node.mesh() {
        let normal_matrix = Mat3::from_mat4(world).inverse().transpose();
        for primitive in mesh.primitives() {
            if primitive.mode() != gltf::mesh::Mode::Triangles {
                continue;
            }
            let reader = primitive.reader(|b| buffers.get(b.index()).map(|d| d.0.as_slice()));
            let Some(positions) = reader.read_positions() else {
                continue;
            };
            let positions: Vec<Vec3> = positions
                .map(|p| world.transform_point3(Vec3::from(p)))
                .collect();
            let count = positions.len() as u32;
            let indices: Vec<u32> = match reader.read_indices() {
                Some(i) => i.into_u32().collect(),
                None => (0..count).collect(),
            };
            // drop triangles that reference missing vertices
            let indices: Vec<u32> = indices
                .chunks_exact(3)
                .filter(|t| t.iter().all(|&i| i < count))
                .flatten()
                .copied()
                .collect();
            let normals: Vec<Vec3> = match reader.read_normals() {
                Some(n) => n
                    .map(|n| (normal_matrix * Vec3::from(n)).normalize_or_zero())
                    .collect(),
                None => Vec::new(),
            };
            let normals = if normals.len() == positions.len() {
                normals
            } else {
                vertex_normals(&positions, &indices)
            };

            let base = out.vertices.len() as u32;
            for (p, n) in positions.iter().zip(normals.iter()) {
                out.bounds.extend(*p);
                out.vertices.push(Vertex {
                    position: p.to_array(),
                    normal: n.to_array(),
                });
            }
            out.indices.extend(indices.iter().map(|i| i + base));
            out.mesh_count += 1;
        }
    }
    for child in node.children() {
        visit(&child, world, buffers, out);
    }
}

/// Area-weighted smooth normals for primitives that ship without them.
pub fn vertex_normals(positions: &[Vec3], indices: &[u32]) -> Vec<Vec3> {
    let mut normals = vec![Vec3::ZERO; positions.len()];
    for tri in indices.chunks_exact(3) {
        let (a, b, c) = (tri[0] as usize, tri[1] as usize, tri[2] as usize);
        let face = (positions[b] - positions[a]).cross(positions[c] - positions[a]);
        normals[a] += face;
        normals[b] += face;
        normals[c] += face;
    }
    normals
        .into_iter()
        .map(|n| {
            let n = n.normalize_or_zero();
            if n == Vec3::ZERO {
                Vec3::Y
            } else {
                n
            }
        })
        .collect()
}
