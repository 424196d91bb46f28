use super::Frame;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

struct Published {
    frame: Arc<Frame>,
    version: u64,
}

/// Single-slot hand-off between the simulation and any number of readers.
///
/// The writer builds a complete [`Frame`] outside the lock and swaps it in;
/// readers clone the `Arc`. Nobody can observe a partially written frame, and
/// the critical section is a pointer swap on either side.
pub struct RenderSlot {
    inner: Mutex<Published>,
}

impl Default for RenderSlot {
    fn default() -> Self {
        Self {
            inner: Mutex::new(Published {
                frame: Arc::new(Frame::default()),
                version: 0,
            }),
        }
    }
}

impl RenderSlot {
    fn lock(&self) -> MutexGuard<'_, Published> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Replaces the published frame, returning its version (starts at 1).
    pub fn publish(&self, frame: Frame) -> u64 {
        let frame = Arc::new(frame);
        let (previous, version) = {
            let mut slot = self.lock();
            slot.version += 1;
            (std::mem::replace(&mut slot.frame, frame), slot.version)
        };
        // released outside the lock
        drop(previous);
        version
    }

    /// Most recent frame and its version; version `0` is the empty initial frame.
    pub fn latest(&self) -> (Arc<Frame>, u64) {
        let slot = self.lock();
        (Arc::clone(&slot.frame), slot.version)
    }

    /// The latest frame, if it was published after version `seen`.
    pub fn newer_than(&self, seen: u64) -> Option<(Arc<Frame>, u64)> {
        let slot = self.lock();
        (slot.version > seen).then(|| (Arc::clone(&slot.frame), slot.version))
    }

    pub fn version(&self) -> u64 {
        self.lock().version
    }
}
