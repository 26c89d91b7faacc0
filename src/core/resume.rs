use std::fmt;

use crossbeam::channel::Sender;

/// Capability handed to a visitor to release the walk past the current
/// entry.
///
/// The engine suspends the worker that invoked the visitor until
/// [`proceed`](Resume::proceed) fires. The handle is consumed by `proceed`,
/// so resuming twice is impossible. It may be moved to another thread and
/// fired later; the walk waits.
///
/// Dropping the handle without calling `proceed` also releases the walk. A
/// handle that is kept alive and never fired suspends its subtree, and
/// transitively the whole walk, indefinitely; there is no timeout.
pub struct Resume {
    signal: Sender<()>,
}

impl Resume {
    pub(crate) fn new(signal: Sender<()>) -> Resume {
        Resume { signal }
    }

    /// Signal that the visitor is finished with this entry.
    pub fn proceed(self) {
        let _ = self.signal.send(());
    }
}

impl fmt::Debug for Resume {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Resume").finish_non_exhaustive()
    }
}
