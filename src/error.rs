use std::error;
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// An error produced by recursively walking a directory.
///
/// This error type is a light wrapper around [`std::io::Error`]. In
/// particular, it adds the following information:
///
/// * The path, if any, associated with the IO error.
/// * An indication that the walk was misconfigured (zero concurrency), in
///   which case there is no underlying IO error and no filesystem access
///   took place.
///
/// To maintain good ergonomics, this type has a
/// [`impl From<Error> for std::io::Error`][impl] defined which preserves the
/// original context. This allows you to use an [`io::Result`] with methods
/// in this crate if you don't care about accessing the underlying error data
/// in a structured form.
///
/// [`std::io::Error`]: https://doc.rust-lang.org/stable/std/io/struct.Error.html
/// [`io::Result`]: https://doc.rust-lang.org/stable/std/io/type.Result.html
/// [impl]: struct.Error.html#impl-From%3CError%3E
#[derive(Debug, Clone)]
pub struct Error {
    inner: ErrorInner,
}

#[derive(Debug, Clone)]
enum ErrorInner {
    InvalidConcurrency,
    Io {
        path: Option<PathBuf>,
        err: Arc<io::Error>,
    },
}

impl Error {
    pub(crate) fn invalid_concurrency() -> Self {
        Error {
            inner: ErrorInner::InvalidConcurrency,
        }
    }

    pub(crate) fn from_path(pb: PathBuf, err: io::Error) -> Self {
        Error {
            inner: ErrorInner::Io {
                path: Some(pb),
                err: Arc::new(err),
            },
        }
    }

    /// Returns the path associated with this error if one exists.
    ///
    /// For example, if an error occurred while opening a directory handle,
    /// the error will include the path passed to [`std::fs::read_dir`].
    ///
    /// [`std::fs::read_dir`]: https://doc.rust-lang.org/stable/std/fs/fn.read_dir.html
    pub fn path(&self) -> Option<&Path> {
        match &self.inner {
            ErrorInner::Io { path, .. } => path.as_deref(),
            ErrorInner::InvalidConcurrency => None,
        }
    }

    /// Returns true if this error was raised by option validation before any
    /// filesystem access, rather than by the walk itself.
    pub fn is_configuration(&self) -> bool {
        matches!(&self.inner, ErrorInner::InvalidConcurrency)
    }

    /// Inspect the original [`io::Error`] if there is one.
    ///
    /// [`None`] is returned if the [`Error`] doesn't correspond to an
    /// [`io::Error`]. This is the case for configuration errors.
    ///
    /// This method returns a borrowed value that is bound to the lifetime of
    /// the [`Error`]. To obtain an owned value, the [`into_io_error`] can be
    /// used instead.
    ///
    /// [`None`]: https://doc.rust-lang.org/stable/std/option/enum.Option.html#variant.None
    /// [`io::Error`]: https://doc.rust-lang.org/stable/std/io/struct.Error.html
    /// [`Error`]: struct.Error.html
    /// [`into_io_error`]: struct.Error.html#method.into_io_error
    pub fn io_error(&self) -> Option<&io::Error> {
        match &self.inner {
            ErrorInner::Io { err, .. } => Some(err),
            ErrorInner::InvalidConcurrency => None,
        }
    }

    /// Similar to [`io_error`] except consumes self to convert to the
    /// original [`io::Error`] if one exists.
    ///
    /// [`io_error`]: struct.Error.html#method.io_error
    /// [`io::Error`]: https://doc.rust-lang.org/stable/std/io/struct.Error.html
    pub fn into_io_error(self) -> Option<io::Error> {
        match self.inner {
            ErrorInner::Io { err, .. } => Some(
                Arc::try_unwrap(err)
                    .unwrap_or_else(|arc| io::Error::new(arc.kind(), format!("{}", arc))),
            ),
            ErrorInner::InvalidConcurrency => None,
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        self.io_error().map(|e| e as &(dyn error::Error + 'static))
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.inner {
            ErrorInner::Io {
                path: Some(path),
                err,
            } => {
                write!(f, "IO error for {}: {}", path.display(), err)
            }
            ErrorInner::Io { path: None, err } => {
                write!(f, "IO error: {}", err)
            }
            ErrorInner::InvalidConcurrency => {
                write!(f, "concurrency must be greater than zero")
            }
        }
    }
}

impl From<Error> for io::Error {
    /// Convert the [`Error`] to an [`io::Error`], preserving the original
    /// [`Error`] as the ["inner error"]. Note that this also makes the
    /// display of the error include the context.
    ///
    /// This is different from [`into_io_error`] which returns the original
    /// [`io::Error`].
    ///
    /// [`Error`]: struct.Error.html
    /// [`io::Error`]: https://doc.rust-lang.org/stable/std/io/struct.Error.html
    /// ["inner error"]: https://doc.rust-lang.org/std/io/struct.Error.html#method.into_inner
    /// [`into_io_error`]: struct.Error.html#method.into_io_error
    fn from(walk_err: Error) -> io::Error {
        match walk_err.inner {
            ErrorInner::Io { err, .. } => Arc::try_unwrap(err)
                .unwrap_or_else(|arc| io::Error::new(arc.kind(), format!("{}", arc))),
            ErrorInner::InvalidConcurrency => {
                io::Error::new(io::ErrorKind::InvalidInput, walk_err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configuration_error_has_no_io_side() {
        let err = Error::invalid_concurrency();
        assert!(err.is_configuration());
        assert!(err.path().is_none());
        assert!(err.io_error().is_none());
        assert_eq!(io::Error::from(err).kind(), io::ErrorKind::InvalidInput);
    }

    #[test]
    fn io_error_keeps_path_and_kind() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "gone");
        let err = Error::from_path(PathBuf::from("/nope"), io_err);
        assert!(!err.is_configuration());
        assert_eq!(err.path(), Some(Path::new("/nope")));
        assert_eq!(err.io_error().unwrap().kind(), io::ErrorKind::NotFound);
        assert_eq!(err.into_io_error().unwrap().kind(), io::ErrorKind::NotFound);
    }
}
