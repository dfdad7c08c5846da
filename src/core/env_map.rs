use super::constants::ENV_RANGE;
use glam::Vec3;

/// Cube-map face order used by WebGPU/WebGL: +X, -X, +Y, -Y, +Z, -Z.
pub const CUBE_FACES: usize = 6;

/// Prefiltered environment cube stored as RGBA8 with radiance divided by
/// `ENV_RANGE`. `levels[m]` holds the six faces of mip `m` back to back.
#[derive(Debug)]
pub struct EnvCube {
    pub face_size: u32,
    pub levels: Vec<Vec<u8>>,
}

impl EnvCube {
    pub fn mip_count(&self) -> u32 {
        self.levels.len() as u32
    }

    pub fn level_size(&self, level: u32) -> u32 {
        (self.face_size >> level).max(1)
    }
}

/// World direction through the centre of texel (`x`, `y`) on `face`.
pub fn face_direction(face: usize, x: u32, y: u32, size: u32) -> Vec3 {
    let u = 2.0 * (x as f32 + 0.5) / size as f32 - 1.0;
    let v = 2.0 * (y as f32 + 0.5) / size as f32 - 1.0;
    let d = match face {
        0 => Vec3::new(1.0, -v, -u),
        1 => Vec3::new(-1.0, -v, u),
        2 => Vec3::new(u, 1.0, v),
        3 => Vec3::new(u, -1.0, -v),
        4 => Vec3::new(u, -v, 1.0),
        _ => Vec3::new(-u, -v, -1.0),
    };
    d.normalize()
}

/// Radiance seen from the middle of a softly lit studio room: grey walls,
/// a darker floor, a large ceiling panel and two side softboxes.
pub fn room_radiance(dir: Vec3) -> Vec3 {
    let a = dir.abs();
    let t = 1.0 / a.max_element().max(1e-6);
    let p = dir * t;

    let panel = Vec3::splat(ENV_RANGE);
    if p.y > 0.999 {
        if p.x.abs() < 0.45 && p.z.abs() < 0.45 {
            return panel;
        }
        return Vec3::splat(0.55);
    }
    if p.y < -0.999 {
        return Vec3::splat(0.18);
    }
    // softbox on +X and a narrower strip on -Z
    if p.x > 0.999 && (p.y - 0.2).abs() < 0.35 && p.z.abs() < 0.55 {
        return panel * 0.8;
    }
    if p.z < -0.999 && (p.y - 0.3).abs() < 0.25 && p.x.abs() < 0.25 {
        return panel * 0.6;
    }
    // walls brighten toward the ceiling
    let height = (p.y + 1.0) * 0.5;
    Vec3::splat(0.3 + 0.2 * height)
}

/// Build the room cube with a box-filtered mip chain. Rougher surfaces
/// sample deeper mips.
pub fn room_environment(face_size: u32) -> EnvCube {
    let face_size = face_size.max(1).next_power_of_two();
    let mut faces: Vec<Vec<Vec3>> = (0..CUBE_FACES)
        .map(|f| {
            let mut texels = Vec::with_capacity((face_size * face_size) as usize);
            for y in 0..face_size {
                for x in 0..face_size {
                    texels.push(room_radiance(face_direction(f, x, y, face_size)));
                }
            }
            texels
        })
        .collect();

    let mut levels = vec![encode_level(&faces)];
    let mut size = face_size;
    while size > 1 {
        faces = faces.iter().map(|face| downsample(face, size)).collect();
        size /= 2;
        levels.push(encode_level(&faces));
    }
    EnvCube { face_size, levels }
}

fn downsample(face: &[Vec3], size: u32) -> Vec<Vec3> {
    let half = (size / 2).max(1);
    let mut out = Vec::with_capacity((half * half) as usize);
    for y in 0..half {
        for x in 0..half {
            let (x0, y0) = (x * 2, y * 2);
            let at = |xx: u32, yy: u32| face[(yy * size + xx) as usize];
            out.push((at(x0, y0) + at(x0 + 1, y0) + at(x0, y0 + 1) + at(x0 + 1, y0 + 1)) * 0.25);
        }
    }
    out
}

fn encode_level(faces: &[Vec<Vec3>]) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(faces.iter().map(|f| f.len() * 4).sum());
    for face in faces {
        for texel in face {
            let c = (*texel / ENV_RANGE).clamp(Vec3::ZERO, Vec3::ONE) * 255.0;
            bytes.extend_from_slice(&[
                c.x.round() as u8,
                c.y.round() as u8,
                c.z.round() as u8,
                255,
            ]);
        }
    }
    bytes
}
