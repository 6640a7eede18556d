/*!
 * Ignore and omit filters
 */

use crate::pattern::Pattern;

/// The two pattern lists supplied for one run.
///
/// Ignored names vanish from every part of the report. Omitted names stay
/// visible in the tree but their contents are replaced by a placeholder.
/// A name matching both lists behaves as ignored, since listings drop ignored
/// names before omission is ever checked.
#[derive(Debug, Clone, Default)]
pub struct FilterSet {
    ignore: Vec<Pattern>,
    omit: Vec<Pattern>,
}

impl FilterSet {
    /// Build a filter set from raw pattern strings
    pub fn new<I, O>(ignore: I, omit: O) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
        O: IntoIterator,
        O::Item: AsRef<str>,
    {
        Self {
            ignore: ignore.into_iter().map(|p| Pattern::parse(p.as_ref())).collect(),
            omit: omit.into_iter().map(|p| Pattern::parse(p.as_ref())).collect(),
        }
    }

    /// True if any ignore pattern matches the name
    pub fn is_ignored(&self, name: &str) -> bool {
        self.ignore.iter().any(|p| p.matches(name))
    }

    /// True if any omit pattern matches the name
    pub fn is_omitted(&self, name: &str) -> bool {
        self.omit.iter().any(|p| p.matches(name))
    }
}
