use super::node::Node;
use crate::render::html::render;
use std::io;
use std::sync::Arc;

/// The error a snapshot hit while capturing. Replaying the snapshot returns it again.
#[derive(Clone, Debug, thiserror::Error)]
#[error("static content failed to render: {source}")]
pub struct SnapshotError {
  source: Arc<io::Error>,
}

impl SnapshotError {
  pub fn kind(&self) -> io::ErrorKind {
    self.source.kind()
  }
}

impl From<SnapshotError> for io::Error {
  fn from(err: SnapshotError) -> io::Error {
    io::Error::new(err.kind(), err)
  }
}

/// Output of a subtree rendered once, up front.
#[derive(Clone, Debug)]
pub struct Snapshot {
  captured: Result<Arc<[u8]>, SnapshotError>,
}

impl Snapshot {
  pub fn capture(node: &Node) -> Snapshot {
    let mut buffer: Vec<u8> = Vec::new();

    let captured = match render(node, &mut buffer) {
      Ok(()) => Ok(Arc::from(buffer)),
      Err(err) => {
        tracing::warn!(error = %err, "static content failed to render");
        Err(SnapshotError {
          source: Arc::new(err),
        })
      }
    };

    Snapshot { captured }
  }

  pub fn captured(&self) -> Result<&[u8], &SnapshotError> {
    self.captured.as_deref()
  }
}
