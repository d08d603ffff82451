//! Lock-guarded manager for several emitters.

use std::sync::{Mutex, MutexGuard};

use storage_events_core::{EventError, EventResult};

use crate::collection::StorageEvents;
use crate::event::StorageEvent;
use crate::manager::StorageEventManager;

/// A [`StorageEventManager`] that can be emitted into through `&self`.
///
/// - Every emit is one read-modify-write under the lock
/// - A batch from [`emit_events`](Self::emit_events) is never interleaved with
///   another thread's events
/// - Readers get snapshots, never a view into the guarded collection
///
/// If an emitter panics while holding the lock, every later call returns
/// [`EventError::Poisoned`]: the collection may be missing part of a batch and is
/// no longer trusted.
#[derive(Debug, Default)]
pub struct SharedEventManager {
    inner: Mutex<StorageEventManager>,
}

impl SharedEventManager {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> EventResult<MutexGuard<'_, StorageEventManager>> {
        self.inner.lock().map_err(|_| poisoned())
    }

    pub fn emit_event(&self, event: StorageEvent) -> EventResult<()> {
        self.lock()?.emit_event(event);
        Ok(())
    }

    pub fn emit_events<I>(&self, events: I) -> EventResult<()>
    where
        I: IntoIterator<Item = StorageEvent>,
    {
        self.lock()?.emit_events(events);
        Ok(())
    }

    pub fn snapshot(&self) -> EventResult<StorageEvents> {
        Ok(self.lock()?.snapshot())
    }

    pub fn len(&self) -> EventResult<usize> {
        Ok(self.lock()?.len())
    }

    pub fn is_empty(&self) -> EventResult<bool> {
        Ok(self.lock()?.is_empty())
    }

    pub fn into_inner(self) -> EventResult<StorageEventManager> {
        self.inner.into_inner().map_err(|_| poisoned())
    }
}

fn poisoned() -> EventError {
    tracing::warn!("shared storage event manager is poisoned");
    EventError::Poisoned
}

impl From<StorageEventManager> for SharedEventManager {
    fn from(manager: StorageEventManager) -> Self {
        Self {
            inner: Mutex::new(manager),
        }
    }
}
