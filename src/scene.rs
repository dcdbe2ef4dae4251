//! The placed-object store: the authoritative ordered collection of placed
//! instances.
//!
//! All scene mutations go through [`SceneStore`]. Every mutation is
//! synchronous and atomic from the caller's perspective; the only
//! asynchronous input is a mesh-load completion, which is applied through
//! [`SceneStore::apply_geometry`] and matched against current membership by
//! id (instances may be removed while a load is outstanding).
//!
//! Invariants upheld here:
//! - at most one instance is selected at any time
//! - every scale component stays `>= MIN_SCALE` and finite
//! - no instance ever sits below the ground plane (`position.y >= 0`)
//! - ids are assigned monotonically and never reused

use std::sync::Arc;

use cgmath::Vector3;

use crate::data_structures::{
    geometry::Normalized,
    instance::PlacedInstance,
};

/// Mesh used when an `add` has no caller-supplied path and the catalogue has
/// not forwarded one.
pub const DEFAULT_MESH_PATH: &str = "models/base_model.stl";

/// Lower bound for every scale component, in meters.
pub const MIN_SCALE: f32 = 0.01;

/// Ordered collection of placed instances, keyed by id.
///
/// Insertion order is creation order; it only matters for display.
#[derive(Debug, Default)]
pub struct SceneStore {
    instances: Vec<PlacedInstance>,
    next_id: u32,
}

impl SceneStore {
    pub fn new() -> Self {
        Self {
            instances: Vec::new(),
            next_id: 1,
        }
    }

    /// Append a new instance and return its id.
    ///
    /// Fresh instances line up along the x axis (`count * 2` meters) so they
    /// don't overlap before normalization has run, and start at `y = 1`
    /// until the load completion replaces that with the mesh's resting
    /// height.
    pub fn add(&mut self, mesh_path: Option<&str>) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        let lateral = self.instances.len() as f32 * 2.0;
        self.instances.push(PlacedInstance::new(
            id,
            mesh_path.unwrap_or(DEFAULT_MESH_PATH),
            Vector3::new(lateral, 1.0, 0.0),
        ));
        id
    }

    /// Delete the instance with that id. No-op (returns false) if absent;
    /// remaining ids are never renumbered.
    pub fn remove(&mut self, id: u32) -> bool {
        let before = self.instances.len();
        self.instances.retain(|inst| inst.id != id);
        self.instances.len() != before
    }

    /// Set one scale axis, in meters. Unknown ids are a no-op.
    ///
    /// Non-finite input clamps to [`MIN_SCALE`] rather than rejecting the
    /// edit, so the store never holds a non-positive or non-finite scale.
    pub fn set_scale(&mut self, id: u32, axis: usize, value_meters: f32) {
        if axis > 2 {
            log::warn!("ignoring scale edit on unknown axis {axis}");
            return;
        }
        if let Some(inst) = self.get_mut(id) {
            inst.scale[axis] = clamp_scale(value_meters);
        }
    }

    /// Select the instance with that id, deselecting every other one.
    ///
    /// Implemented as a single rewrite of the whole collection's flags, so
    /// no transient double-selection is ever observable. An unknown id
    /// leaves nothing selected.
    pub fn select(&mut self, id: u32) {
        for inst in &mut self.instances {
            inst.selected = inst.id == id;
        }
    }

    /// Move an instance by a delta, clamped to the ground plane
    /// (`position.y >= 0`). Unknown ids are a no-op.
    pub fn translate(&mut self, id: u32, delta: Vector3<f32>) {
        if let Some(inst) = self.get_mut(id) {
            inst.position += delta;
            inst.position.y = inst.position.y.max(0.0);
        }
    }

    /// Apply a finished mesh load to the instance that requested it.
    ///
    /// Sets the geometry, overwrites the scale with the normalized uniform
    /// scale, and rests the instance on the ground plane. A completion for
    /// an id that has since been removed is discarded: removal logically
    /// cancelled interest in the load.
    pub fn apply_geometry(&mut self, id: u32, normalized: Normalized) {
        match self.get_mut(id) {
            Some(inst) => {
                let s = normalized.uniform_scale;
                inst.scale = Vector3::new(s, s, s);
                inst.position.y = normalized.resting_height();
                inst.geometry = Some(Arc::new(normalized.geometry));
            }
            None => log::debug!("discarding mesh load for removed instance {id}"),
        }
    }

    pub fn get(&self, id: u32) -> Option<&PlacedInstance> {
        self.instances.iter().find(|inst| inst.id == id)
    }

    fn get_mut(&mut self, id: u32) -> Option<&mut PlacedInstance> {
        self.instances.iter_mut().find(|inst| inst.id == id)
    }

    pub fn selected_id(&self) -> Option<u32> {
        self.instances
            .iter()
            .find(|inst| inst.selected)
            .map(|inst| inst.id)
    }

    /// Read-only snapshot for the renderer, in display order.
    pub fn instances(&self) -> &[PlacedInstance] {
        &self.instances
    }

    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }
}

fn clamp_scale(value: f32) -> f32 {
    if value.is_finite() {
        value.max(MIN_SCALE)
    } else {
        MIN_SCALE
    }
}
