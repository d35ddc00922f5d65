/// Keyboard key identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    W,
    A,
    S,
    D,
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Space,
    Escape,
    Digit(u8),
    Other,
}

/// Raw input from the host, pointer coordinates relative to the canvas origin
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    PointerDown { x: f32, y: f32, shift: bool },
    PointerMove { x: f32, y: f32, shift: bool },
    PointerUp { x: f32, y: f32, shift: bool },
    /// Positive moves away from the target
    Wheel { delta: f32 },
    KeyDown(Key),
    KeyUp(Key),
    FocusLost,
    FocusGained,
}

impl InputEvent {
    pub fn name(&self) -> &'static str {
        match self {
            InputEvent::PointerDown { .. } => "pointer-down",
            InputEvent::PointerMove { .. } => "pointer-move",
            InputEvent::PointerUp { .. } => "pointer-up",
            InputEvent::Wheel { .. } => "wheel",
            InputEvent::KeyDown(_) => "key-down",
            InputEvent::KeyUp(_) => "key-up",
            InputEvent::FocusLost => "focus-lost",
            InputEvent::FocusGained => "focus-gained",
        }
    }
}
