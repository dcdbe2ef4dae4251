//! STL parsing, binary and ASCII.
//!
//! Binary layout: 80-byte header, little-endian u32 triangle count, then one
//! 50-byte record per triangle (normal, three vertices, attribute byte
//! count). ASCII files are `facet normal …` / `vertex …` records inside a
//! `solid` block. Some exporters write binary files whose header starts with
//! "solid", so the size consistency check wins over the prefix.
//!
//! STL carries no index data; vertices are emitted three per triangle with
//! the facet normal repeated for flat shading, and indices are trivial.

use crate::{
    data_structures::geometry::{Geometry, Vertex},
    resources::MeshError,
};

const HEADER_LEN: usize = 84;
const TRIANGLE_LEN: usize = 50;

/// Parse an STL file, deciding between the binary and ASCII flavor.
pub fn parse(data: &[u8]) -> Result<Geometry, MeshError> {
    if data.len() >= HEADER_LEN {
        let triangle_count = read_u32(data, 80) as usize;
        if binary_len(triangle_count) == Some(data.len()) {
            return parse_binary(data);
        }
    }
    if data.trim_ascii_start().starts_with(b"solid") {
        parse_ascii(data)
    } else {
        parse_binary(data)
    }
}

/// Total file size a well formed binary STL with this many triangles has.
/// `None` when the count does not fit in `usize` arithmetic.
fn binary_len(triangle_count: usize) -> Option<usize> {
    triangle_count
        .checked_mul(TRIANGLE_LEN)
        .and_then(|n| n.checked_add(HEADER_LEN))
}

pub fn parse_binary(data: &[u8]) -> Result<Geometry, MeshError> {
    if data.len() < HEADER_LEN {
        return Err(MeshError::Truncated {
            expected: HEADER_LEN,
            actual: data.len(),
        });
    }

    let triangle_count = read_u32(data, 80) as usize;
    let expected = binary_len(triangle_count).ok_or_else(|| {
        MeshError::Malformed(format!("triangle count {triangle_count} overflows"))
    })?;
    if data.len() < expected {
        return Err(MeshError::Truncated {
            expected,
            actual: data.len(),
        });
    }

    let mut vertices = Vec::with_capacity(triangle_count * 3);
    let mut offset = HEADER_LEN;
    for _ in 0..triangle_count {
        let normal = read_vec3(data, offset);
        offset += 12;
        for _ in 0..3 {
            let position = read_vec3(data, offset);
            offset += 12;
            vertices.push(Vertex { position, normal });
        }
        // attribute byte count
        offset += 2;
    }

    Ok(Geometry {
        indices: (0..vertices.len() as u32).collect(),
        vertices,
    })
}

pub fn parse_ascii(data: &[u8]) -> Result<Geometry, MeshError> {
    let text = std::str::from_utf8(data)
        .map_err(|_| MeshError::Malformed("ascii stl is not valid utf-8".to_string()))?;

    let mut vertices = Vec::new();
    let mut facet_normal = [0.0f32; 3];
    for line in text.lines() {
        let mut words = line.split_whitespace();
        match words.next() {
            Some("facet") => {
                if words.next() != Some("normal") {
                    return Err(MeshError::Malformed(
                        "facet record without a normal".to_string(),
                    ));
                }
                facet_normal = read_triplet(&mut words)
                    .ok_or_else(|| MeshError::Malformed("unreadable facet normal".to_string()))?;
            }
            Some("vertex") => {
                let position = read_triplet(&mut words)
                    .ok_or_else(|| MeshError::Malformed("unreadable vertex".to_string()))?;
                vertices.push(Vertex {
                    position,
                    normal: facet_normal,
                });
            }
            _ => {}
        }
    }

    if vertices.is_empty() || vertices.len() % 3 != 0 {
        return Err(MeshError::Malformed(format!(
            "ascii stl has {} vertices, expected a positive multiple of three",
            vertices.len()
        )));
    }

    Ok(Geometry {
        indices: (0..vertices.len() as u32).collect(),
        vertices,
    })
}

fn read_triplet<'a>(words: &mut impl Iterator<Item = &'a str>) -> Option<[f32; 3]> {
    let x = words.next()?.parse().ok()?;
    let y = words.next()?.parse().ok()?;
    let z = words.next()?.parse().ok()?;
    Some([x, y, z])
}

fn read_u32(data: &[u8], offset: usize) -> u32 {
    u32::from_le_bytes([
        data[offset],
        data[offset + 1],
        data[offset + 2],
        data[offset + 3],
    ])
}

fn read_f32(data: &[u8], offset: usize) -> f32 {
    f32::from_le_bytes([
        data[offset],
        data[offset + 1],
        data[offset + 2],
        data[offset + 3],
    ])
}

fn read_vec3(data: &[u8], offset: usize) -> [f32; 3] {
    [
        read_f32(data, offset),
        read_f32(data, offset + 4),
        read_f32(data, offset + 8),
    ]
}
