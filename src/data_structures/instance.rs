//! Placed-instance data: one occurrence of a mesh in the scene.
//!
//! Every placed instance carries its own transform and selection flag.
//! The transform is handed to the renderer as a packed matrix
//! ([`InstanceRaw`], Pod) so multiple instances of the same mesh can be
//! drawn with per-instance data in a single pass.

use std::sync::Arc;

use cgmath::{Matrix4, Rad, Vector3};

use crate::data_structures::geometry::Geometry;

/// One object placed in the scene.
///
/// `id` is unique within the store and never reused; `mesh_path` is
/// immutable after creation. Position and scale are in meters. `geometry`
/// stays `None` until the loader resolves for this instance (and forever,
/// if the load fails).
#[derive(Clone, Debug)]
pub struct PlacedInstance {
    pub id: u32,
    pub mesh_path: String,
    pub position: Vector3<f32>,
    pub scale: Vector3<f32>,
    /// Euler angles in radians. Reserved: no in-scope control mutates it.
    pub rotation: Vector3<f32>,
    pub selected: bool,
    pub geometry: Option<Arc<Geometry>>,
}

impl PlacedInstance {
    pub(crate) fn new(id: u32, mesh_path: &str, position: Vector3<f32>) -> Self {
        Self {
            id,
            mesh_path: mesh_path.to_string(),
            position,
            scale: Vector3::new(2.0, 2.0, 2.0),
            rotation: Vector3::new(0.0, 0.0, 0.0),
            selected: false,
            geometry: None,
        }
    }

    pub fn to_matrix(&self) -> Matrix4<f32> {
        Matrix4::from_translation(self.position)
            * Matrix4::from_angle_z(Rad(self.rotation.z))
            * Matrix4::from_angle_y(Rad(self.rotation.y))
            * Matrix4::from_angle_x(Rad(self.rotation.x))
            * Matrix4::from_nonuniform_scale(self.scale.x, self.scale.y, self.scale.z)
    }

    pub fn to_raw(&self) -> InstanceRaw {
        InstanceRaw {
            model: self.to_matrix().into(),
        }
    }
}

/**
 * The raw instance is the per-instance data the renderer uploads to the GPU.
 */
#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct InstanceRaw {
    pub model: [[f32; 4]; 4],
}
