use std::sync::atomic::{AtomicBool, Ordering as AtomicOrdering};
use std::sync::Mutex;

use log::debug;

use crate::error::Error;
use crate::Result;

/// Shared state for one top-level traversal: the caller's visitor, the
/// per-level worker count, and the stop/first-error pair that coordinates
/// cancellation.
pub(crate) struct RunContext<'w, V> {
    pub(crate) concurrency: usize,
    pub(crate) visitor: &'w V,
    stop: AtomicBool,
    first_error: Mutex<Option<Error>>,
}

impl<'w, V> RunContext<'w, V> {
    pub(crate) fn new(concurrency: usize, visitor: &'w V) -> RunContext<'w, V> {
        RunContext {
            concurrency,
            visitor,
            stop: AtomicBool::new(false),
            first_error: Mutex::new(None),
        }
    }

    pub(crate) fn is_stopped(&self) -> bool {
        self.stop.load(AtomicOrdering::SeqCst)
    }

    /// Record `err` as the walk's error if none is recorded yet and stop
    /// workers from taking on new entries. Later errors are discarded; the
    /// first one observed wins.
    pub(crate) fn record_error(&self, err: Error) {
        self.stop.store(true, AtomicOrdering::SeqCst);
        let mut slot = self.first_error.lock().unwrap();
        if slot.is_none() {
            debug!("stopping walk on first error: {}", err);
            *slot = Some(err);
        }
    }

    pub(crate) fn finish(self) -> Result<()> {
        match self.first_error.into_inner().unwrap() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}
