//! Visitor wrappers that narrow which entries reach the caller's visitor.
//!
//! A skipped entry has its continuation fired immediately; the wrapped
//! visitor never sees it. Wrappers never alter the path or metadata they
//! pass through, and the composed visitor is handed to the general engine
//! rather than recursing on its own.

use std::fs::Metadata;
use std::path::Path;

use crate::core::Resume;
use crate::entry::EntryKind;
use crate::pattern::Pattern;

/// Pass through only entries of the given kind; `None` passes everything.
pub(crate) fn restrict_kind<V>(
    kind: Option<EntryKind>,
    visitor: V,
) -> impl Fn(&Path, &Metadata, Resume) + Sync
where
    V: Fn(&Path, &Metadata, Resume) + Sync,
{
    move |path: &Path, metadata: &Metadata, resume: Resume| match kind {
        Some(kind) if EntryKind::of(metadata) != kind => resume.proceed(),
        _ => visitor(path, metadata, resume),
    }
}

/// Pass through only entries whose path matches the pattern; `None` passes
/// everything.
pub(crate) fn restrict_pattern<V>(
    pattern: Option<Pattern>,
    visitor: V,
) -> impl Fn(&Path, &Metadata, Resume) + Sync
where
    V: Fn(&Path, &Metadata, Resume) + Sync,
{
    move |path: &Path, metadata: &Metadata, resume: Resume| match &pattern {
        Some(pattern) if !pattern.matches(path) => resume.proceed(),
        _ => visitor(path, metadata, resume),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossbeam::channel::{self, Receiver};
    use regex::Regex;
    use std::fs;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn resume_pair() -> (Resume, Receiver<()>) {
        let (signal, done) = channel::bounded(1);
        (Resume::new(signal), done)
    }

    #[test]
    fn kind_mismatch_skips_but_still_resumes() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("a");
        fs::write(&file, b"a").unwrap();
        let metadata = fs::symlink_metadata(&file).unwrap();

        let calls = AtomicUsize::new(0);
        let visitor = restrict_kind(Some(EntryKind::Dir), |_: &Path, _: &Metadata, _| {
            calls.fetch_add(1, Ordering::SeqCst);
        });

        let (resume, done) = resume_pair();
        visitor(&file, &metadata, resume);
        // The skip fired the continuation on the caller's behalf.
        assert!(done.try_recv().is_ok());
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn kind_match_delegates_with_the_continuation() {
        let dir = tempfile::tempdir().unwrap();
        let metadata = fs::symlink_metadata(dir.path()).unwrap();

        let calls = AtomicUsize::new(0);
        let visitor = restrict_kind(Some(EntryKind::Dir), |_: &Path, _: &Metadata, resume: Resume| {
            calls.fetch_add(1, Ordering::SeqCst);
            resume.proceed();
        });

        let (resume, done) = resume_pair();
        visitor(dir.path(), &metadata, resume);
        assert!(done.try_recv().is_ok());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn pattern_mismatch_skips() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("a.log");
        fs::write(&file, b"a").unwrap();
        let metadata = fs::symlink_metadata(&file).unwrap();

        let calls = AtomicUsize::new(0);
        let pattern = Pattern::regex(Regex::new(r"\.txt$").unwrap());
        let visitor = restrict_pattern(Some(pattern), |_: &Path, _: &Metadata, resume: Resume| {
            calls.fetch_add(1, Ordering::SeqCst);
            resume.proceed();
        });

        let (resume, _done) = resume_pair();
        visitor(&file, &metadata, resume);
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn absent_filters_pass_everything_through() {
        let dir = tempfile::tempdir().unwrap();
        let metadata = fs::symlink_metadata(dir.path()).unwrap();

        let calls = AtomicUsize::new(0);
        let visitor = restrict_kind(
            None,
            restrict_pattern(None, |_: &Path, _: &Metadata, resume: Resume| {
                calls.fetch_add(1, Ordering::SeqCst);
                resume.proceed();
            }),
        );

        let (resume, done) = resume_pair();
        visitor(dir.path(), &metadata, resume);
        assert!(done.try_recv().is_ok());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}
