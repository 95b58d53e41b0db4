//! Keyboard and mouse state for the viewer.
//!
//! Raw winit events are folded into per-frame state: keys that went down
//! this frame, keys held, the left-drag delta and the scroll amount. The host
//! loop reads it once per redraw and then calls [`Input::begin_frame`].
//!
//! | Key    | Action                                   |
//! |--------|------------------------------------------|
//! | Space  | queue a spawn batch                      |
//! | Enter  | launch the seed sphere                   |
//! | P      | pause or resume ticking                  |
//! | Escape | exit                                     |

use glam::Vec2;
use std::collections::HashSet;
use winit::event::{ElementState, MouseButton, MouseScrollDelta, WindowEvent};
use winit::keyboard::{KeyCode as WinitKeyCode, PhysicalKey};

/// Keys the viewer reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Space,
    Enter,
    P,
    Escape,
    Other(u32),
}

impl From<WinitKeyCode> for Key {
    fn from(key: WinitKeyCode) -> Self {
        match key {
            WinitKeyCode::Space => Key::Space,
            WinitKeyCode::Enter | WinitKeyCode::NumpadEnter => Key::Enter,
            WinitKeyCode::KeyP => Key::P,
            WinitKeyCode::Escape => Key::Escape,
            _ => Key::Other(key as u32),
        }
    }
}

/// Input state tracking for keyboard and mouse.
#[derive(Debug, Default)]
pub struct Input {
    keys_held: HashSet<Key>,
    keys_pressed: HashSet<Key>,

    dragging: bool,
    cursor: Option<Vec2>,
    drag_delta: Vec2,

    scroll_delta: f32,
}

impl Input {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if a key was pressed this frame (just went down).
    pub fn key_pressed(&self, key: Key) -> bool {
        self.keys_pressed.contains(&key)
    }

    /// Check if a key is currently held down.
    pub fn key_held(&self, key: Key) -> bool {
        self.keys_held.contains(&key)
    }

    /// Cursor movement this frame while the left button is held, in pixels.
    pub fn drag_delta(&self) -> Vec2 {
        self.drag_delta
    }

    /// Scroll wheel delta this frame. Positive values scroll up/forward.
    pub fn scroll_delta(&self) -> f32 {
        self.scroll_delta
    }

    /// Clear per-frame state. Call after the frame has consumed its input.
    pub fn begin_frame(&mut self) {
        self.keys_pressed.clear();
        self.drag_delta = Vec2::ZERO;
        self.scroll_delta = 0.0;
    }

    fn press(&mut self, key: Key) {
        // Auto-repeat arrives as further presses while held; ignore those.
        if self.keys_held.insert(key) {
            self.keys_pressed.insert(key);
        }
    }

    fn release(&mut self, key: Key) {
        self.keys_held.remove(&key);
    }

    fn move_cursor(&mut self, position: Vec2) {
        if let (true, Some(last)) = (self.dragging, self.cursor) {
            self.drag_delta += position - last;
        }
        self.cursor = Some(position);
    }

    /// Process a winit window event.
    pub fn handle_event(&mut self, event: &WindowEvent) {
        match event {
            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(keycode) = event.physical_key {
                    let key = Key::from(keycode);
                    match event.state {
                        ElementState::Pressed => self.press(key),
                        ElementState::Released => self.release(key),
                    }
                }
            }

            WindowEvent::MouseInput {
                state,
                button: MouseButton::Left,
                ..
            } => {
                self.dragging = *state == ElementState::Pressed;
            }

            WindowEvent::CursorMoved { position, .. } => {
                self.move_cursor(Vec2::new(position.x as f32, position.y as f32));
            }

            WindowEvent::CursorLeft { .. } => {
                self.cursor = None;
            }

            WindowEvent::MouseWheel { delta, .. } => {
                self.scroll_delta += match delta {
                    MouseScrollDelta::LineDelta(_, y) => *y,
                    MouseScrollDelta::PixelDelta(pos) => pos.y as f32 / 100.0,
                };
            }

            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_state() {
        let mut input = Input::new();

        assert!(!input.key_held(Key::Space));
        assert!(!input.key_pressed(Key::Space));

        input.press(Key::Space);
        assert!(input.key_held(Key::Space));
        assert!(input.key_pressed(Key::Space));

        // After begin_frame, pressed is cleared but held remains
        input.begin_frame();
        assert!(input.key_held(Key::Space));
        assert!(!input.key_pressed(Key::Space));
    }

    #[test]
    fn test_repeat_is_not_a_new_press() {
        let mut input = Input::new();
        input.press(Key::Space);
        input.begin_frame();
        input.press(Key::Space);
        assert!(!input.key_pressed(Key::Space));

        input.release(Key::Space);
        input.press(Key::Space);
        assert!(input.key_pressed(Key::Space));
    }

    #[test]
    fn test_drag_only_while_dragging() {
        let mut input = Input::new();
        input.move_cursor(Vec2::new(100.0, 100.0));
        input.move_cursor(Vec2::new(150.0, 100.0));
        assert_eq!(input.drag_delta(), Vec2::ZERO);

        input.dragging = true;
        input.move_cursor(Vec2::new(190.0, 130.0));
        assert_eq!(input.drag_delta(), Vec2::new(40.0, 30.0));

        input.begin_frame();
        assert_eq!(input.drag_delta(), Vec2::ZERO);
    }

    #[test]
    fn test_key_mapping() {
        assert_eq!(Key::from(WinitKeyCode::Space), Key::Space);
        assert_eq!(Key::from(WinitKeyCode::NumpadEnter), Key::Enter);
        assert_eq!(Key::from(WinitKeyCode::KeyP), Key::P);
        assert!(matches!(Key::from(WinitKeyCode::KeyQ), Key::Other(_)));
    }
}
