//! Mesh geometry, bounding boxes, and load-time normalization.
//!
//! Geometry is kept as plain vertex/index buffers in CPU memory. The external
//! renderer uploads them as-is: [`Vertex`] is `repr(C)` and Pod, so
//! [`Geometry::vertex_bytes`] can be written straight into a GPU buffer.
//!
//! Normalization runs exactly once per placed instance, right after its mesh
//! finishes loading: the geometry is recentered on the origin and a uniform
//! scale plus ground offset are computed so that visually disparate source
//! meshes compare consistently at default scale.

use cgmath::Vector3;

/// One mesh vertex: position and (flat) normal.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

/// Parsed triangulated mesh data, ready for GPU upload by the renderer.
#[derive(Debug, Clone, Default)]
pub struct Geometry {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

impl Geometry {
    pub fn aabb(&self) -> Aabb {
        Aabb::of(self.vertices.iter().map(|v| v.position))
    }

    pub fn translate(&mut self, delta: Vector3<f32>) {
        for vertex in &mut self.vertices {
            vertex.position[0] += delta.x;
            vertex.position[1] += delta.y;
            vertex.position[2] += delta.z;
        }
    }

    /// Raw vertex data for GPU upload.
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Raw index data for GPU upload.
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}

/// Axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vector3<f32>,
    pub max: Vector3<f32>,
}

impl Aabb {
    /// Bounding box of a point set. Empty input yields a zero-sized box at
    /// the origin so downstream math stays finite.
    pub fn of(points: impl IntoIterator<Item = [f32; 3]>) -> Self {
        let mut points = points.into_iter();
        let first = match points.next() {
            Some(p) => Vector3::from(p),
            None => Vector3::new(0.0, 0.0, 0.0),
        };
        let mut aabb = Aabb {
            min: first,
            max: first,
        };
        for p in points {
            aabb.min.x = aabb.min.x.min(p[0]);
            aabb.min.y = aabb.min.y.min(p[1]);
            aabb.min.z = aabb.min.z.min(p[2]);
            aabb.max.x = aabb.max.x.max(p[0]);
            aabb.max.y = aabb.max.y.max(p[1]);
            aabb.max.z = aabb.max.z.max(p[2]);
        }
        aabb
    }

    pub fn center(&self) -> Vector3<f32> {
        (self.min + self.max) * 0.5
    }

    pub fn size(&self) -> Vector3<f32> {
        self.max - self.min
    }

    pub fn max_dimension(&self) -> f32 {
        let size = self.size();
        size.x.max(size.y).max(size.z)
    }
}

/// Result of normalizing freshly loaded geometry.
///
/// `uniform_scale` fits the mesh into a 2-unit cube on its longest axis;
/// `ground_y_offset` is the scaled height of the lowest point below the
/// centered origin, so placing the instance at `-ground_y_offset` rests it
/// on the ground plane.
#[derive(Debug, Clone)]
pub struct Normalized {
    pub geometry: Geometry,
    pub uniform_scale: f32,
    pub ground_y_offset: f32,
}

impl Normalized {
    /// The `position.y` that puts the lowest point of the mesh at `y = 0`.
    pub fn resting_height(&self) -> f32 {
        -self.ground_y_offset
    }
}

/// Recenter geometry on the origin and derive its uniform scale and ground
/// offset.
///
/// Source meshes are authored at wildly different sizes and origins; after
/// this, every mesh fits a 2-unit cube on its longest axis and the caller
/// knows how high to place it so it sits flush on `y = 0`.
pub fn normalize(mut geometry: Geometry) -> Normalized {
    let aabb = geometry.aabb();
    geometry.translate(-aabb.center());

    let centered = geometry.aabb();
    let max_dimension = centered.max_dimension();
    // Degenerate meshes (a single point, or an empty file that slipped
    // through parsing) would otherwise produce an infinite scale.
    let uniform_scale = if max_dimension > 1e-9 {
        2.0 / max_dimension
    } else {
        1.0
    };
    let ground_y_offset = centered.min.y * uniform_scale;

    Normalized {
        geometry,
        uniform_scale,
        ground_y_offset,
    }
}
