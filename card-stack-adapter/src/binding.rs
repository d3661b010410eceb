use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// A cloneable handle to an externally bound, observable card index.
///
/// The caller keeps one clone and the [`crate::Controller`] another. The controller reads it on
/// construction and writes every commit to it synchronously; the caller may read it at any time
/// or write it and then call `Controller::sync_binding`.
#[derive(Clone, Debug, Default)]
pub struct SharedIndex(Arc<AtomicUsize>);

impl SharedIndex {
    pub fn new(index: usize) -> Self {
        Self(Arc::new(AtomicUsize::new(index)))
    }

    pub fn get(&self) -> usize {
        self.0.load(Ordering::Relaxed)
    }

    pub fn set(&self, index: usize) {
        self.0.store(index, Ordering::Relaxed);
    }
}
