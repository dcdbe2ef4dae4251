//! Selection state machine and keyboard movement protocol.
//!
//! The controller sits between raw winit events and the placed-object
//! store. It tracks which single instance is active, translates arrow keys
//! into discrete horizontal moves, and times the transient "use arrow keys
//! to move" hint shown after a selection.
//!
//! States:
//! - **Idle** — nothing selected; key presses are ignored
//! - **Active(id)** — exactly one instance selected; arrow keys move it
//!
//! A click on any instance lands in `Active` regardless of prior state (the
//! store's atomic select handles the implicit deselection). Removing the
//! active instance returns to `Idle`; there is no explicit deselect action.

use cgmath::Vector3;
use instant::{Duration, Instant};
use winit::{
    event::{ElementState, KeyEvent, WindowEvent},
    keyboard::{KeyCode, ModifiersState, PhysicalKey},
};

use crate::scene::SceneStore;

/// Step per key press without a modifier, in meters.
pub const BASE_STEP: f32 = 0.2;
/// Step per key press with Shift held.
pub const FAST_STEP: f32 = 0.5;
/// How long the movement hint stays visible after a selection.
pub const MOVEMENT_HINT_DURATION: Duration = Duration::from_secs(3);

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Selection {
    #[default]
    Idle,
    Active(u32),
}

/// Tracks the active instance, the modifier state, and the hint timer.
#[derive(Debug, Default)]
pub struct InputController {
    selection: Selection,
    modifiers: ModifiersState,
    hint_shown_at: Option<Instant>,
}

impl InputController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    /// Handle a click on instance `id`.
    ///
    /// Always restarts the single hint timer rather than stacking a second
    /// one. An id the store doesn't know leaves everything deselected.
    pub fn select(&mut self, store: &mut SceneStore, id: u32) {
        store.select(id);
        match store.selected_id() {
            Some(selected) => {
                self.selection = Selection::Active(selected);
                self.hint_shown_at = Some(Instant::now());
            }
            None => {
                self.selection = Selection::Idle;
                self.hint_shown_at = None;
            }
        }
    }

    /// Drop back to `Idle` if the removed instance was the active one.
    pub fn instance_removed(&mut self, id: u32) {
        if self.selection == Selection::Active(id) {
            self.selection = Selection::Idle;
            self.hint_shown_at = None;
        }
    }

    /// Whether the transient movement hint should currently be drawn.
    pub fn movement_hint_visible(&self) -> bool {
        self.hint_shown_at
            .is_some_and(|shown| shown.elapsed() < MOVEMENT_HINT_DURATION)
    }

    /// When the current hint will dismiss itself, if one is showing.
    pub fn movement_hint_deadline(&self) -> Option<Instant> {
        self.hint_shown_at.map(|shown| shown + MOVEMENT_HINT_DURATION)
    }

    pub fn set_modifiers(&mut self, modifiers: ModifiersState) {
        self.modifiers = modifiers;
    }

    /// Feed a winit window event through the controller.
    ///
    /// Returns true when the event moved an instance; modifier bookkeeping
    /// and ignored keys return false so callers can pass the event on.
    pub fn handle_window_event(&mut self, store: &mut SceneStore, event: &WindowEvent) -> bool {
        match event {
            WindowEvent::ModifiersChanged(modifiers) => {
                self.modifiers = modifiers.state();
                false
            }
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(code),
                        state: ElementState::Pressed,
                        ..
                    },
                ..
            } => self.handle_key(store, *code),
            _ => false,
        }
    }

    /// One key press yields exactly one discrete move; there is no
    /// continuous motion. Effective only in `Active`.
    pub fn handle_key(&mut self, store: &mut SceneStore, code: KeyCode) -> bool {
        let Selection::Active(id) = self.selection else {
            return false;
        };
        let Some(direction) = plane_direction(code) else {
            return false;
        };
        let step = if self.modifiers.shift_key() {
            FAST_STEP
        } else {
            BASE_STEP
        };
        store.translate(id, direction * step);
        true
    }
}

/// Unit movement vector on the horizontal plane for a recognized key.
///
/// "Up" moves away from the default camera, i.e. towards negative z.
fn plane_direction(code: KeyCode) -> Option<Vector3<f32>> {
    match code {
        KeyCode::ArrowUp => Some(Vector3::new(0.0, 0.0, -1.0)),
        KeyCode::ArrowDown => Some(Vector3::new(0.0, 0.0, 1.0)),
        KeyCode::ArrowLeft => Some(Vector3::new(-1.0, 0.0, 0.0)),
        KeyCode::ArrowRight => Some(Vector3::new(1.0, 0.0, 0.0)),
        _ => None,
    }
}
