//! The traversal engine: recursive work distribution across per-directory
//! worker pools.

mod resume;
mod run_context;
mod work_queue;

pub use resume::Resume;

use std::fs::{self, Metadata};
use std::path::{Path, PathBuf};

use crossbeam::channel;
use log::{debug, trace};

use crate::entry::EntryKind;
use crate::error::Error;
use crate::Result;

use run_context::RunContext;
use work_queue::WorkQueue;

/// Recursively visit every entry reachable from `path`.
///
/// The root is canonicalized once, then stat'ed; if either fails the walk
/// fails with that error and the visitor is never invoked. Otherwise the
/// visitor runs for the root, and when it [resumes](Resume::proceed), a
/// directory root has its children listed and drained by up to
/// `concurrency` workers sharing one queue. Each popped child is visited
/// the same way, with the same `concurrency`, so every directory level gets
/// its own worker pool and total parallelism is not capped across levels.
///
/// Sibling entries are visited in no particular order. The only ordering
/// guarantee is causal: a directory's visitor has resumed before any of its
/// children are visited.
///
/// The first error observed anywhere in the walk wins: workers stop taking
/// on new entries, entries already in flight finish, and that error is
/// returned once all workers have drained. A `concurrency` of zero is
/// rejected before any filesystem access.
pub fn traverse<P, V>(path: P, concurrency: usize, visitor: V) -> Result<()>
where
    P: AsRef<Path>,
    V: Fn(&Path, &Metadata, Resume) + Sync,
{
    if concurrency == 0 {
        return Err(Error::invalid_concurrency());
    }

    let root = fs::canonicalize(path.as_ref())
        .map_err(|err| Error::from_path(path.as_ref().to_path_buf(), err))?;
    debug!("walking {} with concurrency {}", root.display(), concurrency);

    let context = RunContext::new(concurrency, &visitor);
    if let Err(err) = visit(&root, &context) {
        context.record_error(err);
    }
    context.finish()
}

fn visit<V>(path: &Path, context: &RunContext<'_, V>) -> Result<()>
where
    V: Fn(&Path, &Metadata, Resume) + Sync,
{
    let metadata = fs::symlink_metadata(path)
        .map_err(|err| Error::from_path(path.to_path_buf(), err))?;

    // Two-phase visitor protocol: hand out a resume capability and suspend
    // this worker until it fires. An Err from recv means the capability was
    // dropped unfired, which releases the walk all the same.
    let (signal, done) = channel::bounded(1);
    (context.visitor)(path, &metadata, Resume::new(signal));
    let _ = done.recv();

    if EntryKind::of(&metadata) != EntryKind::Dir {
        return Ok(());
    }
    // A stopped walk lets entries already in flight finish but launches no
    // new descendants.
    if context.is_stopped() {
        return Ok(());
    }

    let mut children = Vec::new();
    for entry in fs::read_dir(path).map_err(|err| Error::from_path(path.to_path_buf(), err))? {
        let entry = entry.map_err(|err| Error::from_path(path.to_path_buf(), err))?;
        children.push(entry.path());
    }
    trace!("{}: {} children", path.display(), children.len());

    let queue = WorkQueue::new(children);
    let workers = context.concurrency.min(queue.len());
    if workers <= 1 {
        drain(&queue, context);
    } else {
        // The calling thread is one of the workers.
        let outcome = crossbeam::thread::scope(|scope| {
            for _ in 1..workers {
                scope.spawn(|_| drain(&queue, context));
            }
            drain(&queue, context);
        });
        if let Err(panic) = outcome {
            std::panic::resume_unwind(panic);
        }
    }

    Ok(())
}

/// Worker loop: pop one child at a time and recurse into it, until the
/// queue runs empty, an error surfaces, or the walk is stopped. Errors from
/// descendants are recorded into the shared context; the queue's owner
/// reports nothing itself.
fn drain<V>(queue: &WorkQueue<PathBuf>, context: &RunContext<'_, V>)
where
    V: Fn(&Path, &Metadata, Resume) + Sync,
{
    while !context.is_stopped() {
        let path = match queue.pop() {
            Some(path) => path,
            None => return,
        };
        if let Err(err) = visit(&path, context) {
            context.record_error(err);
            return;
        }
    }
}
