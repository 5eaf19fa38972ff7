use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeSet;
use std::fmt;

use crate::core::constants::extensions;

// Separators accepted between entries of a batch of extensions
static BATCH_SEPARATOR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[,;[:space:]]+").expect("Failed to compile extension separator pattern"));

/// A set of file extensions identifying static resources.
///
/// Entries are stored lowercased with a leading dot, so `"PNG"`, `"png"`
/// and `".png"` all refer to the same entry. Iteration is sorted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtensionSet {
    entries: BTreeSet<String>,
}

impl Default for ExtensionSet {
    fn default() -> Self {
        Self::defaults()
    }
}

impl ExtensionSet {
    /// An empty set; filtering with it keeps every URL.
    pub fn empty() -> Self {
        Self {
            entries: BTreeSet::new(),
        }
    }

    /// The built-in static resource set: `.jpg .jpeg .png .gif .css .js`.
    pub fn defaults() -> Self {
        extensions::DEFAULT.iter().copied().collect()
    }

    /// Normalize a raw entry into its stored form.
    ///
    /// Returns `None` for entries with nothing after the dot.
    ///
    /// # Examples
    /// ```
    /// use urlsift::ExtensionSet;
    ///
    /// assert_eq!(ExtensionSet::normalize(" PDF "), Some(".pdf".to_string()));
    /// assert_eq!(ExtensionSet::normalize(".Svg"), Some(".svg".to_string()));
    /// assert_eq!(ExtensionSet::normalize("."), None);
    /// ```
    pub fn normalize(raw: &str) -> Option<String> {
        let trimmed = raw.trim();
        let bare = trimmed.strip_prefix('.').unwrap_or(trimmed);
        if bare.is_empty() {
            return None;
        }
        Some(format!(".{}", bare.to_lowercase()))
    }

    /// Add a single entry. Returns `true` if it was not present before.
    pub fn insert(&mut self, raw: &str) -> bool {
        match Self::normalize(raw) {
            Some(ext) => self.entries.insert(ext),
            None => false,
        }
    }

    /// Add every entry from a list separated by commas, semicolons or whitespace.
    ///
    /// Returns the number of entries that were newly added.
    pub fn insert_batch(&mut self, text: &str) -> usize {
        BATCH_SEPARATOR
            .split(text)
            .filter(|token| self.insert(token))
            .count()
    }

    /// Remove an entry. Returns `true` if it was present.
    pub fn remove(&mut self, raw: &str) -> bool {
        match Self::normalize(raw) {
            Some(ext) => self.entries.remove(&ext),
            None => false,
        }
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Case-insensitive membership test; the leading dot is optional.
    pub fn contains(&self, ext: &str) -> bool {
        Self::normalize(ext).is_some_and(|ext| self.entries.contains(&ext))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over the entries in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }
}

impl<S: AsRef<str>> FromIterator<S> for ExtensionSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = Self::empty();
        set.extend(iter);
        set
    }
}

impl<S: AsRef<str>> Extend<S> for ExtensionSet {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for raw in iter {
            self.insert(raw.as_ref());
        }
    }
}

impl fmt::Display for ExtensionSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined: Vec<&str> = self.iter().collect();
        write!(f, "{}", joined.join(", "))
    }
}
