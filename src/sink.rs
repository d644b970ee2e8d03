//! Where rendered documents go.

use crate::errors::Result;
use crate::render::VectorDocument;

/// Persists each rendered document.
///
/// Called once per navigation step, synchronously. Implementations overwrite
/// their previous output; a failure is fatal to the caller.
pub trait RenderSink {
    fn write(&mut self, document: &VectorDocument) -> Result<()>;
}

impl<S: RenderSink + ?Sized> RenderSink for &mut S {
    fn write(&mut self, document: &VectorDocument) -> Result<()> {
        (**self).write(document)
    }
}

/// Keeps every document in memory, in write order
#[derive(Debug, Default, Clone)]
pub struct MemorySink {
    pub documents: Vec<VectorDocument>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last(&self) -> Option<&VectorDocument> {
        self.documents.last()
    }
}

impl RenderSink for MemorySink {
    fn write(&mut self, document: &VectorDocument) -> Result<()> {
        self.documents.push(document.clone());
        Ok(())
    }
}
