//! Shared fixtures: STL bytes built in memory, and temp files for the
//! async loading paths.

use std::path::PathBuf;

use stow_ngin::data_structures::geometry::{Geometry, Vertex};

/// Build a binary STL from `[normal, v0, v1, v2]` records.
pub fn binary_stl(triangles: &[[[f32; 3]; 4]]) -> Vec<u8> {
    let mut buf = vec![0u8; 80];
    buf.extend_from_slice(&(triangles.len() as u32).to_le_bytes());
    for tri in triangles {
        for v in tri {
            for c in v {
                buf.extend_from_slice(&c.to_le_bytes());
            }
        }
        // attribute byte count
        buf.extend_from_slice(&[0, 0]);
    }
    buf
}

/// Two triangles whose bounding box spans x [-2, 2], y [-1, 1], z [-0.5, 0.5]:
/// max dimension 4, already centered on the origin.
pub fn spanning_triangles() -> Vec<[[f32; 3]; 4]> {
    vec![
        [
            [0.0, 1.0, 0.0],
            [-2.0, -1.0, -0.5],
            [2.0, -1.0, -0.5],
            [0.0, 1.0, 0.5],
        ],
        [
            [0.0, 1.0, 0.0],
            [-2.0, -1.0, 0.5],
            [2.0, 1.0, 0.5],
            [0.0, -1.0, -0.5],
        ],
    ]
}

/// The same triangles as plain geometry, for tests that skip the parser.
pub fn spanning_geometry() -> Geometry {
    let mut vertices = Vec::new();
    for tri in spanning_triangles() {
        let normal = tri[0];
        for v in &tri[1..] {
            vertices.push(Vertex {
                position: *v,
                normal,
            });
        }
    }
    Geometry {
        indices: (0..vertices.len() as u32).collect(),
        vertices,
    }
}

/// Write bytes to a uniquely named temp file and return its absolute path.
pub fn write_temp_file(name: &str, bytes: &[u8]) -> PathBuf {
    let path = std::env::temp_dir().join(format!("stow-ngin-test-{}-{}", std::process::id(), name));
    std::fs::write(&path, bytes).expect("write temp fixture");
    path
}

pub fn path_str(path: &PathBuf) -> &str {
    path.to_str().expect("utf-8 temp path")
}
