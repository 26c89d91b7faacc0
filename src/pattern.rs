use std::fmt;
use std::path::Path;
use std::sync::Arc;

use regex::Regex;

/// A path filter for [`Walk::pattern`](crate::Walk::pattern).
///
/// Either a compiled [`Regex`] tested against the full path, or an arbitrary
/// predicate over the path. Cloning is cheap; the predicate form is
/// reference-counted.
#[derive(Clone)]
pub enum Pattern {
    /// Match paths whose string form matches the regular expression.
    Regex(Regex),
    /// Match paths for which the predicate returns true.
    Predicate(Arc<dyn Fn(&Path) -> bool + Send + Sync>),
}

impl Pattern {
    /// Filter by a compiled regular expression.
    pub fn regex(regex: Regex) -> Pattern {
        Pattern::Regex(regex)
    }

    /// Filter by an arbitrary predicate over the full path.
    pub fn predicate<F>(predicate: F) -> Pattern
    where
        F: Fn(&Path) -> bool + Send + Sync + 'static,
    {
        Pattern::Predicate(Arc::new(predicate))
    }

    /// Test `path` against this pattern.
    ///
    /// Regex patterns are matched against the path rendered as UTF-8. A path
    /// that is not valid UTF-8 silently matches nothing; it is skipped, not
    /// reported as an error.
    pub fn matches(&self, path: &Path) -> bool {
        match self {
            Pattern::Regex(regex) => path
                .to_str()
                .map(|path| regex.is_match(path))
                .unwrap_or(false),
            Pattern::Predicate(predicate) => predicate(path),
        }
    }
}

impl From<Regex> for Pattern {
    fn from(regex: Regex) -> Pattern {
        Pattern::Regex(regex)
    }
}

impl fmt::Debug for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Pattern::Regex(regex) => f.debug_tuple("Regex").field(regex).finish(),
            Pattern::Predicate(_) => f.debug_tuple("Predicate").field(&"..").finish(),
        }
    }
}
