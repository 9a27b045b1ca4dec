//! Build HTML as a tree of [`Node`]s and stream it to any [`std::io::Write`].

#[macro_use]
pub mod macros;
pub mod alpine;
pub mod components;
pub mod compose;
#[macro_use]
pub mod html;
pub mod hx;
pub mod model;
pub mod render;
pub mod svg;

pub use compose::{for_each, for_each_indexed, map, repeat, when};
pub use model::{Node, NodeType, Snapshot, SnapshotError};
pub use render::{escape_html, is_void_element, render};
