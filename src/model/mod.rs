pub mod node;
pub mod snapshot;

pub use node::{Node, NodeFn, NodeType, RenderFn};
pub use snapshot::{Snapshot, SnapshotError};
