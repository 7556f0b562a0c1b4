//! Frame-coherent pointer state tracker.
//!
//! [`PointerState`] accumulates winit mouse events during a frame and exposes
//! a clean query API for position, button edges, and cursor-in-window status,
//! plus conversion of the cursor position to normalized device coordinates
//! for picking.

use glam::Vec2;
use winit::event::{ElementState, MouseButton};

/// Per-button press/release tracking for a single frame.
#[derive(Debug, Clone, Copy, Default)]
struct ButtonFrame {
    pressed: bool,
    just_pressed: bool,
    just_released: bool,
}

impl ButtonFrame {
    fn apply(&mut self, state: ElementState) {
        match state {
            ElementState::Pressed => {
                self.pressed = true;
                self.just_pressed = true;
            }
            ElementState::Released => {
                self.pressed = false;
                self.just_released = true;
            }
        }
    }

    fn end_frame(&mut self) {
        self.just_pressed = false;
        self.just_released = false;
    }
}

/// Maps a [`MouseButton`] to an index 0..2.
fn button_index(button: MouseButton) -> usize {
    match button {
        MouseButton::Left => 0,
        MouseButton::Right => 1,
        _ => 2,
    }
}

/// Frame-coherent pointer state.
///
/// # Usage
///
/// 1. Forward winit events via the `on_*` methods during event collection.
/// 2. Query state with the public accessors.
/// 3. Call [`clear_transients`](Self::clear_transients) at end of frame.
#[derive(Debug, Clone)]
pub struct PointerState {
    position: Vec2,
    buttons: [ButtonFrame; 3],
    cursor_in_window: bool,
}

impl Default for PointerState {
    fn default() -> Self {
        Self::new()
    }
}

impl PointerState {
    /// Creates a new `PointerState` with all fields zeroed/false.
    #[must_use]
    pub fn new() -> Self {
        Self {
            position: Vec2::ZERO,
            buttons: [ButtonFrame::default(); 3],
            cursor_in_window: false,
        }
    }

    /// Process a `CursorMoved` event (physical pixel coordinates).
    pub fn on_cursor_moved(&mut self, x: f64, y: f64) {
        self.position = Vec2::new(x as f32, y as f32);
    }

    /// Process a `MouseInput` event.
    pub fn on_button(&mut self, button: MouseButton, state: ElementState) {
        self.buttons[button_index(button)].apply(state);
    }

    /// Process a `CursorEntered` event.
    pub fn on_cursor_entered(&mut self) {
        self.cursor_in_window = true;
    }

    /// Process a `CursorLeft` event.
    pub fn on_cursor_left(&mut self) {
        self.cursor_in_window = false;
    }

    /// Clears per-frame transients: just_pressed, just_released.
    pub fn clear_transients(&mut self) {
        for button in &mut self.buttons {
            button.end_frame();
        }
    }

    /// Current cursor position in physical pixel coordinates.
    #[must_use]
    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// The cursor position mapped to normalized device coordinates over a
    /// surface of the given physical size: x right, y up, both in [-1, 1].
    #[must_use]
    pub fn normalized_coords(&self, surface_width: f32, surface_height: f32) -> Vec2 {
        Vec2::new(
            (self.position.x / surface_width) * 2.0 - 1.0,
            -((self.position.y / surface_height) * 2.0 - 1.0),
        )
    }

    /// Whether a mouse button is currently held.
    #[must_use]
    pub fn is_button_pressed(&self, button: MouseButton) -> bool {
        self.buttons[button_index(button)].pressed
    }

    /// Whether a mouse button was pressed this frame.
    #[must_use]
    pub fn just_button_pressed(&self, button: MouseButton) -> bool {
        self.buttons[button_index(button)].just_pressed
    }

    /// Whether a mouse button was released this frame.
    #[must_use]
    pub fn just_button_released(&self, button: MouseButton) -> bool {
        self.buttons[button_index(button)].just_released
    }

    /// Whether the cursor is inside the window.
    #[must_use]
    pub fn is_cursor_in_window(&self) -> bool {
        self.cursor_in_window
    }
}
