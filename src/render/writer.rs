use std::io::{self, Write};

/// Wraps the output sink for a single render. The first write error is kept
/// and every write after it is dropped.
pub struct StatefulWriter<'w, W: Write + ?Sized> {
  inner: &'w mut W,
  error: Option<io::Error>,
}

impl<'w, W: Write + ?Sized> StatefulWriter<'w, W> {
  pub fn new(inner: &'w mut W) -> Self {
    StatefulWriter { inner, error: None }
  }

  pub fn failed(&self) -> bool {
    self.error.is_some()
  }

  pub fn write_str(&mut self, value: &str) {
    self.write_bytes(value.as_bytes())
  }

  pub fn write_bytes(&mut self, bytes: &[u8]) {
    if self.failed() {
      return;
    }

    let result = self.inner.write_all(bytes);
    self.record(result);
  }

  /// Hands the raw sink to `f` unless an earlier write failed.
  pub fn with_sink<F>(&mut self, f: F)
  where
    F: FnOnce(&mut dyn Write) -> io::Result<()>,
  {
    if self.failed() {
      return;
    }

    let result = f(&mut self.inner);
    self.record(result);
  }

  pub fn record(&mut self, result: io::Result<()>) {
    if self.failed() {
      return;
    }

    if let Err(err) = result {
      tracing::debug!(error = %err, kind = ?err.kind(), "render stopped after write failure");
      self.error = Some(err);
    }
  }

  pub fn finish(self) -> io::Result<()> {
    match self.error {
      Some(err) => Err(err),
      None => Ok(()),
    }
  }
}
