//! stow-ngin
//!
//! A lightweight, cross-platform scene-composition engine for a storage-unit
//! visualizer. The crate owns the in-memory model of placed mesh instances,
//! the unit-conversion arithmetic, the mesh-normalization applied on load,
//! the selection state machine and the keyboard movement protocol. Drawing
//! is left to an external renderer, which consumes read-only snapshots of
//! the store and feeds raw click/key events back in.
//!
//! High-level modules
//! - `units`: pure conversion between canonical meters and display units
//! - `data_structures`: engine data models (geometry, placed instances)
//! - `scene`: the authoritative placed-object store and its mutations
//! - `input`: selection state machine and arrow-key movement
//! - `resources`: helpers to load and parse mesh files (STL, OBJ)
//! - `session`: high level composition root wiring everything together
//!

pub mod data_structures;
pub mod input;
pub mod resources;
pub mod scene;
pub mod session;
pub mod units;

// Re-exports commonly used types for convenience in downstream code.
pub use cgmath::*;
pub use winit::event::WindowEvent;
pub use winit::keyboard::{KeyCode, ModifiersState};

/// Initialize logging for the current platform.
///
/// Uses env_logger natively and the browser console on WASM. Safe to call
/// when a logger is already installed; that just logs a warning to stdout.
pub fn init_logging() {
    #[cfg(not(target_arch = "wasm32"))]
    {
        if let Err(e) = env_logger::try_init() {
            println!("Warning: Could not initialize logger: {}", e);
        };
    }

    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::UnwrapThrowExt;
        console_log::init_with_level(log::Level::Info).unwrap_throw();
    }
}
