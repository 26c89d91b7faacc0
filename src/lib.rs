#![warn(clippy::all)]

//! Visitor-driven filesystem walk.
//!
//! - Recursion performed in parallel, one worker pool per directory
//! - Visitors decide when the walk proceeds past each entry
//! - Kind and pattern filtering, or collect matching paths directly
//!
//! # Example
//!
//! Recursively visit the "foo" directory, printing every entry:
//!
//! ```no_run
//! use vwalk::Walk;
//!
//! # fn try_main() -> vwalk::Result<()> {
//! Walk::new("foo").each(|path, _metadata, resume| {
//!     println!("{}", path.display());
//!     resume.proceed();
//! })?;
//! # Ok(())
//! # }
//! ```
//!
//! # Collecting Example
//!
//! Gather the full paths of all `.rs` files under "foo", two workers per
//! directory. Collection returns the paths gathered before the first error,
//! if any, in whatever order the workers produced them:
//!
//! ```no_run
//! use regex::Regex;
//! use vwalk::Walk;
//!
//! let (paths, error) = Walk::new("foo")
//!     .concurrency(2)
//!     .pattern(Regex::new(r"\.rs$").unwrap())
//!     .files()
//!     .read();
//! assert!(error.is_none());
//! for path in paths {
//!     println!("{}", path.display());
//! }
//! ```
//!
//! # Visitor protocol
//!
//! A visitor receives `(path, metadata, resume)` for every entry and must
//! let the walk past the entry by consuming the [`Resume`] handle, either
//! by calling [`Resume::proceed`] or by dropping it. The handle can be
//! moved to another thread and fired later; the walk waits for it. See
//! [`traverse`] for the engine's full contract.

pub mod core;

mod entry;
mod error;
mod filter;
mod pattern;

use std::fs::Metadata;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

pub use crate::core::{traverse, Resume};
pub use crate::entry::EntryKind;
pub use crate::error::Error;
pub use crate::pattern::Pattern;

/// A Result that's the same as [`std::result::Result`] with the error
/// defaulting to this crate's [`Error`] type.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// A builder to configure and run a walk of a directory tree.
///
/// All options are named and optional; the twelve ad-hoc entry-point shapes
/// of callback walkers collapse into combinations of [`concurrency`],
/// [`pattern`], [`files`]/[`dirs`], and the two terminal operations
/// [`each`] and [`read`].
///
/// [`concurrency`]: Walk::concurrency
/// [`pattern`]: Walk::pattern
/// [`files`]: Walk::files
/// [`dirs`]: Walk::dirs
/// [`each`]: Walk::each
/// [`read`]: Walk::read
pub struct Walk {
    root: PathBuf,
    options: WalkOptions,
}

#[derive(Clone)]
struct WalkOptions {
    concurrency: usize,
    pattern: Option<Pattern>,
    kind: Option<EntryKind>,
}

impl Walk {
    /// Create a builder for a walk rooted at `root`. The root itself is the
    /// first entry visited, whether it is a directory or a file.
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Walk {
            root: root.as_ref().to_path_buf(),
            options: WalkOptions {
                concurrency: num_cpus::get(),
                pattern: None,
                kind: None,
            },
        }
    }

    /// Root path of the walk.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Number of workers draining each directory's work queue. Defaults to
    /// the number of logical CPUs.
    ///
    /// Every directory level gets its own pool of up to this many workers,
    /// so total parallelism grows with tree depth and width; there is no
    /// global cap. Zero is rejected when the walk runs.
    pub fn concurrency(mut self, concurrency: usize) -> Self {
        self.options.concurrency = concurrency;
        self
    }

    /// Only pass entries whose path matches `pattern` to the visitor, or
    /// into the collected result. Accepts a [`Pattern`] or anything
    /// convertible into one, such as a compiled [`regex::Regex`].
    pub fn pattern<P: Into<Pattern>>(mut self, pattern: P) -> Self {
        self.options.pattern = Some(pattern.into());
        self
    }

    /// Only pass regular files to the visitor, or into the collected
    /// result. Directories are still descended into; their entries are just
    /// not reported.
    pub fn files(mut self) -> Self {
        self.options.kind = Some(EntryKind::File);
        self
    }

    /// Only pass directories to the visitor, or into the collected result.
    pub fn dirs(mut self) -> Self {
        self.options.kind = Some(EntryKind::Dir);
        self
    }

    /// Run the walk, invoking `visitor` for every entry that passes the
    /// configured filters.
    ///
    /// Skipped entries resume immediately on the visitor's behalf, so
    /// filtering never stalls the walk. Returns the first error the walk
    /// observed, if any; see [`traverse`] for the engine's error and
    /// cancellation semantics.
    pub fn each<V>(&self, visitor: V) -> Result<()>
    where
        V: Fn(&Path, &Metadata, Resume) + Sync,
    {
        let visitor = filter::restrict_pattern(self.options.pattern.clone(), visitor);
        let visitor = filter::restrict_kind(self.options.kind, visitor);
        crate::core::traverse(&self.root, self.options.concurrency, visitor)
    }

    /// Run the walk, collecting the path of every entry that passes the
    /// configured filters.
    ///
    /// Returns the collected paths together with the first error the walk
    /// observed, if any. On error the list holds whatever was gathered
    /// before the error was recorded. The order is whatever order the
    /// workers happened to visit entries in: not sorted, and not stable
    /// across runs for directories with more entries than workers.
    pub fn read(&self) -> (Vec<PathBuf>, Option<Error>) {
        let collected = Mutex::new(Vec::new());
        let error = self
            .each(|path, _metadata, resume| {
                collected.lock().unwrap().push(path.to_path_buf());
                resume.proceed();
            })
            .err();
        (collected.into_inner().unwrap(), error)
    }
}
