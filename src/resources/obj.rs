//! OBJ parsing via tobj.
//!
//! Materials and textures are a renderer concern, so the MTL side of the
//! file is ignored; only positions, normals and indices survive. Multiple
//! models inside one file are flattened into a single geometry with
//! rebased indices.

use std::io::{BufReader, Cursor};

use crate::{
    data_structures::geometry::{Geometry, Vertex},
    resources::{MeshError, load_string},
};

pub async fn load(file_name: &str) -> Result<Geometry, MeshError> {
    let obj_text = load_string(file_name).await?;
    let obj_cursor = Cursor::new(obj_text);
    let mut obj_reader = BufReader::new(obj_cursor);

    let (models, _materials) = tobj::load_obj_buf_async(
        &mut obj_reader,
        &tobj::LoadOptions {
            triangulate: true,
            single_index: true,
            ..Default::default()
        },
        // MTL references are irrelevant here; resolve them to nothing.
        |_p| async move { Ok((Vec::new(), Default::default())) },
    )
    .await
    .map_err(|e| MeshError::Malformed(e.to_string()))?;

    let mut vertices = Vec::new();
    let mut indices = Vec::new();
    for m in &models {
        let base = vertices.len() as u32;
        for i in 0..m.mesh.positions.len() / 3 {
            vertices.push(Vertex {
                position: [
                    m.mesh.positions[i * 3],
                    m.mesh.positions[i * 3 + 1],
                    m.mesh.positions[i * 3 + 2],
                ],
                normal: [
                    m.mesh.normals.get(i * 3).map_or(0.0, |f| *f),
                    m.mesh.normals.get(i * 3 + 1).map_or(0.0, |f| *f),
                    m.mesh.normals.get(i * 3 + 2).map_or(0.0, |f| *f),
                ],
            });
        }
        indices.extend(m.mesh.indices.iter().map(|i| i + base));
    }

    if vertices.is_empty() {
        return Err(MeshError::Malformed(format!(
            "{file_name} contains no geometry"
        )));
    }

    Ok(Geometry { vertices, indices })
}
