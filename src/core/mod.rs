pub mod hemisphere;
pub mod input;
pub mod input_adapter;
pub mod interaction;
pub mod orbit;
pub mod window;

pub use input::{InputEvent, Key};
pub use input_adapter::WinitInputAdapter;
pub use interaction::{Animation, Interaction, InteractionKind};
pub use orbit::Orbit;
pub use window::{CanvasContext, Dimensions};
