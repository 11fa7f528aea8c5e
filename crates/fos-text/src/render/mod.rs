//! Run emission module

pub mod decorations;
mod draw_state;
mod emitter;
mod hook;

pub use decorations::{
    calculate_decorations, draw_decorations, DecorationGeometry, TextDecoration, TextDecorationLine,
};
pub use draw_state::DrawState;
pub use emitter::{emit, EmitOptions};
pub use hook::{CharHook, CharScope, CharacterRun};
