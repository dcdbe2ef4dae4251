//! High level session: the composition root tying the store, the input
//! controller, the unit choice and the mesh loader together.
//!
//! A [`Visualizer`] is the single logical thread of control the renderer
//! talks to: every user action (add / delete / scale edit / key press /
//! click) is a synchronous call here, and mesh loading is the only
//! operation that suspends. Each `add` queues one tagged load future;
//! pending loads run concurrently and complete in any relative order, and
//! their results are applied back to the store between `await` points only,
//! matched by instance id. No locks anywhere: nothing mutates shared state
//! in parallel.
//!
//! Lifecycle of one placed instance:
//! 1. `add()` appends it to the store and queues `load_geometry` for its path
//! 2. `process_loads().await` (or `poll_loads()` from a render loop) applies
//!    the completion: geometry set, scale normalized, instance rested on the
//!    ground plane
//! 3. scale edits, selection and arrow-key movement mutate it via the store
//! 4. `remove()` deletes it; a still-outstanding load is discarded on arrival

use std::pin::Pin;

use futures::{FutureExt, StreamExt, stream::FuturesUnordered};
use winit::{event::WindowEvent, keyboard::KeyCode};

use crate::{
    data_structures::{
        geometry::{self, Normalized},
        instance::PlacedInstance,
    },
    input::{InputController, Selection},
    resources::{self, MeshError},
    scene::{DEFAULT_MESH_PATH, MIN_SCALE, SceneStore},
    units::{self, DisplayUnit},
};

type LoadCompletion = (u32, Result<Normalized, MeshError>);
// Not Send on purpose: the session is single-threaded and the wasm fetch
// path never could be.
type LoadFuture = Pin<Box<dyn Future<Output = LoadCompletion>>>;

/// One user-facing scene-composition session.
pub struct Visualizer {
    store: SceneStore,
    controller: InputController,
    unit: DisplayUnit,
    default_mesh_path: String,
    pending: FuturesUnordered<LoadFuture>,
}

impl Visualizer {
    pub fn new() -> Self {
        Self {
            store: SceneStore::new(),
            controller: InputController::new(),
            unit: DisplayUnit::default(),
            default_mesh_path: DEFAULT_MESH_PATH.to_string(),
            pending: FuturesUnordered::new(),
        }
    }

    /// The catalogue forwards the mesh the user picked; it becomes the
    /// default for every following `add` without an explicit path.
    pub fn set_default_mesh_path(&mut self, mesh_path: &str) {
        self.default_mesh_path = mesh_path.to_string();
    }

    /// Place a new instance and queue its mesh load.
    pub fn add(&mut self, mesh_path: Option<&str>) -> u32 {
        let path = mesh_path.unwrap_or(&self.default_mesh_path).to_string();
        let id = self.store.add(Some(&path));
        self.pending.push(Box::pin(async move {
            let result = resources::load_geometry(&path).await.map(geometry::normalize);
            (id, result)
        }));
        id
    }

    /// Remove an instance. Its outstanding load, if any, is logically
    /// cancelled: the completion is discarded when it arrives.
    pub fn remove(&mut self, id: u32) {
        if self.store.remove(id) {
            self.controller.instance_removed(id);
        }
    }

    pub fn select(&mut self, id: u32) {
        self.controller.select(&mut self.store, id);
    }

    pub fn handle_window_event(&mut self, event: &WindowEvent) -> bool {
        self.controller.handle_window_event(&mut self.store, event)
    }

    pub fn handle_key(&mut self, code: KeyCode) -> bool {
        self.controller.handle_key(&mut self.store, code)
    }

    /// Drive every queued load to completion, applying results as they
    /// arrive. Returns once the pending set is drained.
    pub async fn process_loads(&mut self) {
        while let Some(completion) = self.pending.next().await {
            apply_completion(&mut self.store, completion);
        }
    }

    /// Apply only the loads that have already completed; never blocks.
    /// Meant to be called once per frame from a render loop.
    pub fn poll_loads(&mut self) {
        while let Some(Some(completion)) = self.pending.next().now_or_never() {
            apply_completion(&mut self.store, completion);
        }
    }

    pub fn pending_loads(&self) -> usize {
        self.pending.len()
    }

    /// Set one scale axis directly, in meters.
    pub fn set_scale(&mut self, id: u32, axis: usize, value_meters: f32) {
        self.store.set_scale(id, axis, value_meters);
    }

    /// Apply a control-panel scale edit, entered in the current display
    /// unit. Input that doesn't parse to a finite number clamps to the
    /// minimum instead of rejecting the edit.
    pub fn set_scale_field(&mut self, id: u32, axis: usize, text: &str) {
        let value_meters = units::parse_display(text, self.unit).unwrap_or(MIN_SCALE);
        self.store.set_scale(id, axis, value_meters);
    }

    /// The control-panel text for one scale axis, in the current unit.
    pub fn scale_field(&self, id: u32, axis: usize) -> Option<String> {
        if axis > 2 {
            return None;
        }
        self.store
            .get(id)
            .map(|inst| units::to_display(inst.scale[axis], self.unit))
    }

    pub fn unit(&self) -> DisplayUnit {
        self.unit
    }

    pub fn set_unit(&mut self, unit: DisplayUnit) {
        self.unit = unit;
    }

    pub fn selection(&self) -> Selection {
        self.controller.selection()
    }

    pub fn movement_hint_visible(&self) -> bool {
        self.controller.movement_hint_visible()
    }

    /// Read-only snapshot for the renderer.
    pub fn instances(&self) -> &[PlacedInstance] {
        self.store.instances()
    }

    pub fn store(&self) -> &SceneStore {
        &self.store
    }
}

impl Default for Visualizer {
    fn default() -> Self {
        Self::new()
    }
}

fn apply_completion(store: &mut SceneStore, (id, result): LoadCompletion) {
    match result {
        Ok(normalized) => store.apply_geometry(id, normalized),
        // A failed load degrades this one instance's visual completeness
        // and nothing else; the renderer shows a placeholder or nothing.
        Err(e) => log::warn!("mesh load failed for instance {id}: {e}"),
    }
}
