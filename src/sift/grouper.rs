//! Collapsing of similar URLs.
//!
//! URLs are grouped by [`Signature`] and only the first `cap` URLs seen for
//! each signature survive. Survivors keep their relative input order.

use log::trace;
use rustc_hash::FxHashMap;
use std::collections::BTreeSet;

use crate::core::constants::grouping;
use crate::sift::query::query_shape;
use crate::sift::signature::{Signature, SignatureBuilder};

/// Keep at most `cap` URLs per similarity group, using the default
/// signature rules.
///
/// A `cap` of zero drops everything.
///
/// # Examples
/// ```
/// use urlsift::group_and_truncate;
///
/// let urls = vec![
///     "http://x.com/item/1",
///     "http://x.com/about",
///     "http://x.com/item/2",
///     "http://x.com/item/3",
/// ];
/// assert_eq!(
///     group_and_truncate(urls, 2),
///     vec!["http://x.com/item/1", "http://x.com/about", "http://x.com/item/2"]
/// );
/// ```
pub fn group_and_truncate<I, S>(urls: I, cap: usize) -> Vec<S>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    Grouper::new(cap).apply(urls)
}

/// Configured similarity grouping.
#[derive(Debug)]
pub struct Grouper {
    cap: usize,
    signatures: SignatureBuilder,
    distinct_query: bool,
}

impl Default for Grouper {
    fn default() -> Self {
        Self::new(grouping::DEFAULT_GROUP_CAP)
    }
}

impl Grouper {
    pub fn new(cap: usize) -> Self {
        Self {
            cap,
            signatures: SignatureBuilder::default(),
            distinct_query: false,
        }
    }

    /// Replace the rules used to derive signatures.
    pub fn with_signatures(mut self, signatures: SignatureBuilder) -> Self {
        self.signatures = signatures;
        self
    }

    /// When enabled, a URL whose query shape matches one already kept in its
    /// group is skipped without using up the group's cap.
    pub fn with_distinct_query(mut self, enabled: bool) -> Self {
        self.distinct_query = enabled;
        self
    }

    pub fn cap(&self) -> usize {
        self.cap
    }

    pub fn signatures(&self) -> &SignatureBuilder {
        &self.signatures
    }

    /// Start an incremental pass; see [`Truncator`].
    pub fn truncator(&self) -> Truncator<'_> {
        Truncator {
            grouper: self,
            groups: FxHashMap::default(),
        }
    }

    /// Run a full pass over `urls`.
    pub fn apply<I, S>(&self, urls: I) -> Vec<S>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut truncator = self.truncator();
        urls.into_iter()
            .filter(|url| truncator.offer(url.as_ref()))
            .collect()
    }
}

#[derive(Debug, Default)]
struct GroupState {
    kept: usize,
    shapes: Vec<BTreeSet<String>>,
}

/// Incremental form of [`Grouper::apply`].
///
/// Feeding URLs one at a time through [`Truncator::offer`] gives the same
/// decisions as a single `apply` over the concatenated input.
#[derive(Debug)]
pub struct Truncator<'a> {
    grouper: &'a Grouper,
    groups: FxHashMap<Signature, GroupState>,
}

impl Truncator<'_> {
    /// Decide whether `url` is kept, recording it if so.
    pub fn offer(&mut self, url: &str) -> bool {
        let signature = self.grouper.signatures.signature(url);
        if signature.is_opaque() {
            trace!("{url} does not parse, grouping by its raw text");
        }
        let state = self.groups.entry(signature).or_default();

        if state.kept >= self.grouper.cap {
            trace!("group full, dropping {url}");
            return false;
        }

        if self.grouper.distinct_query {
            let shape = query_shape(url);
            if state.shapes.contains(&shape) {
                trace!("query shape already kept, dropping {url}");
                return false;
            }
            state.shapes.push(shape);
        }

        state.kept += 1;
        true
    }

    /// Number of distinct signatures seen so far.
    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    /// Signatures seen so far with how many URLs each kept.
    pub fn groups(&self) -> impl Iterator<Item = (&Signature, usize)> {
        self.groups.iter().map(|(signature, state)| (signature, state.kept))
    }
}
