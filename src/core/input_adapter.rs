use winit::event::{ElementState, MouseButton, MouseScrollDelta, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

use super::input::{InputEvent, Key};

/// Wheel pixels that count as one line step
const PIXELS_PER_LINE: f32 = 40.0;

/// Adapter that turns Winit window events into camera input events
#[derive(Debug, Clone, Default)]
pub struct WinitInputAdapter {
    /// Last cursor position (relative to window)
    cursor: Option<(f32, f32)>,
    shift: bool,
    /// Button that started the current drag
    dragging: Option<MouseButton>,
}

impl WinitInputAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Translate one Winit event, `None` for events the camera does not consume
    pub fn translate(&mut self, event: &WindowEvent) -> Option<InputEvent> {
        match event {
            WindowEvent::ModifiersChanged(modifiers) => {
                self.shift = modifiers.state().shift_key();
                None
            }
            WindowEvent::KeyboardInput { event, .. } => {
                let PhysicalKey::Code(keycode) = event.physical_key else {
                    return None;
                };
                let key = Self::keycode_to_key(keycode);
                Some(match event.state {
                    ElementState::Pressed => InputEvent::KeyDown(key),
                    ElementState::Released => InputEvent::KeyUp(key),
                })
            }
            WindowEvent::CursorMoved { position, .. } => {
                let (x, y) = (position.x as f32, position.y as f32);
                self.cursor = Some((x, y));
                self.dragging.map(|button| InputEvent::PointerMove {
                    x,
                    y,
                    shift: self.pan_modifier(button),
                })
            }
            WindowEvent::MouseInput { state, button, .. } => {
                if !matches!(button, MouseButton::Left | MouseButton::Right) {
                    return None;
                }
                let (x, y) = self.cursor?;
                match state {
                    ElementState::Pressed if self.dragging.is_none() => {
                        self.dragging = Some(*button);
                        Some(InputEvent::PointerDown {
                            x,
                            y,
                            shift: self.pan_modifier(*button),
                        })
                    }
                    ElementState::Released if self.dragging == Some(*button) => {
                        self.dragging = None;
                        Some(InputEvent::PointerUp {
                            x,
                            y,
                            shift: self.pan_modifier(*button),
                        })
                    }
                    _ => None,
                }
            }
            WindowEvent::MouseWheel { delta, .. } => {
                // Winit reports positive y when scrolling away from the user
                let lines = match delta {
                    MouseScrollDelta::LineDelta(_, y) => *y,
                    MouseScrollDelta::PixelDelta(position) => position.y as f32 / PIXELS_PER_LINE,
                };
                Some(InputEvent::Wheel { delta: -lines })
            }
            WindowEvent::Focused(true) => Some(InputEvent::FocusGained),
            WindowEvent::Focused(false) => {
                self.dragging = None;
                Some(InputEvent::FocusLost)
            }
            _ => None,
        }
    }

    /// Right drags always pan, left drags pan with shift held
    fn pan_modifier(&self, button: MouseButton) -> bool {
        self.shift || button == MouseButton::Right
    }

    fn keycode_to_key(keycode: KeyCode) -> Key {
        match keycode {
            KeyCode::KeyW => Key::W,
            KeyCode::KeyA => Key::A,
            KeyCode::KeyS => Key::S,
            KeyCode::KeyD => Key::D,
            KeyCode::ArrowUp => Key::ArrowUp,
            KeyCode::ArrowDown => Key::ArrowDown,
            KeyCode::ArrowLeft => Key::ArrowLeft,
            KeyCode::ArrowRight => Key::ArrowRight,
            KeyCode::Space => Key::Space,
            KeyCode::Escape => Key::Escape,
            KeyCode::Digit1 => Key::Digit(1),
            KeyCode::Digit2 => Key::Digit(2),
            KeyCode::Digit3 => Key::Digit(3),
            KeyCode::Digit4 => Key::Digit(4),
            _ => Key::Other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Winit keyboard and device events need private fields to construct, so
    // these tests stick to events with public constructors.

    #[test]
    fn test_new_adapter_empty() {
        let adapter = WinitInputAdapter::new();
        assert_eq!(adapter.cursor, None);
        assert_eq!(adapter.dragging, None);
    }

    #[test]
    fn test_focus_loss_ends_drag() {
        let mut adapter = WinitInputAdapter::new();
        adapter.dragging = Some(MouseButton::Left);
        adapter.translate(&WindowEvent::Focused(false));
        assert_eq!(adapter.dragging, None);
    }

    #[test]
    fn test_focus_events() {
        let mut adapter = WinitInputAdapter::new();
        assert_eq!(
            adapter.translate(&WindowEvent::Focused(false)),
            Some(InputEvent::FocusLost)
        );
        assert_eq!(
            adapter.translate(&WindowEvent::Focused(true)),
            Some(InputEvent::FocusGained)
        );
    }

    #[test]
    fn test_key_mapping() {
        assert_eq!(WinitInputAdapter::keycode_to_key(KeyCode::KeyW), Key::W);
        assert_eq!(WinitInputAdapter::keycode_to_key(KeyCode::ArrowLeft), Key::ArrowLeft);
        assert_eq!(WinitInputAdapter::keycode_to_key(KeyCode::Digit3), Key::Digit(3));
        assert_eq!(WinitInputAdapter::keycode_to_key(KeyCode::KeyZ), Key::Other);
    }

    #[test]
    fn test_right_button_pans() {
        let adapter = WinitInputAdapter::new();
        assert!(adapter.pan_modifier(MouseButton::Right));
        assert!(!adapter.pan_modifier(MouseButton::Left));
    }
}
