// ABOUTME: Nested box layout engine.
// ABOUTME: Turns a layout tree plus per-component sizes into gap-free pixel boxes.

mod engine;
mod error;
mod partition;
mod quantize;
mod request;
mod sizes;
mod tree;

pub use engine::{compute_layout, LayoutResult};
pub use error::LayoutError;
pub use partition::partition;
pub use quantize::quantize;
pub use request::LayoutRequest;
pub use sizes::{is_visible, resolve_size, visible_children, ComponentSize, SizeMap};
pub use tree::LayoutNode;
