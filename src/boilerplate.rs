//! Line-level boilerplate removal
//!
//! Template sentences in mandate letters name other ministries without any
//! substantive cross-reference. Any line containing a known fragment is
//! dropped whole before mention extraction.

use std::borrow::Cow;

/// Removes noise lines from raw document text
#[derive(Debug, Clone, Default)]
pub struct BoilerplateFilter {
    /// Case-folded fragments
    fragments: Vec<String>,
}

impl BoilerplateFilter {
    pub fn new<I, S>(fragments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut folded: Vec<String> = Vec::new();
        for fragment in fragments {
            let fragment = fragment.as_ref().to_lowercase();
            if !fragment.is_empty() && !folded.contains(&fragment) {
                folded.push(fragment);
            }
        }
        Self { fragments: folded }
    }

    /// Number of distinct fragments
    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    /// True when the line contains any fragment, ignoring case
    pub fn is_noise(&self, line: &str) -> bool {
        if self.fragments.is_empty() {
            return false;
        }
        let folded = line.to_lowercase();
        self.fragments.iter().any(|f| folded.contains(f.as_str()))
    }

    /// Text with every noise line removed; remaining lines keep their order.
    ///
    /// Borrows the input when nothing is removed.
    pub fn filter<'a>(&self, text: &'a str) -> Cow<'a, str> {
        if !text.lines().any(|line| self.is_noise(line)) {
            return Cow::Borrowed(text);
        }
        let kept: Vec<&str> = text.lines().filter(|line| !self.is_noise(line)).collect();
        Cow::Owned(kept.join("\n"))
    }
}
