//! Rendering front end
//!
//! The simulation decides what is on screen; this module turns a snapshot
//! of it into a flat draw list (sprite instances, text, debug boxes). Pixel
//! pushing is left to whatever backend consumes the list.

pub mod draw;
pub mod instance;
pub mod snapshot;

pub use draw::{DebugRect, DrawList, TextAlign, TextItem, build_draw_list};
pub use instance::{SpriteInstance, colors};
pub use snapshot::{CloudView, DuckView, PipeView, RenderState};
