//! Similarity signatures.
//!
//! Two URLs are similar when they share scheme, host, port and path shape.
//! Path shape is the lowercased path with every "variable" segment replaced
//! by a placeholder, so `/item/123` and `/item/456` both become `/item/{}`.
//! Which segments count as variable is decided by a [`SegmentRule`].

use percent_encoding::percent_decode_str;
use std::fmt;
use url::Url;

use crate::core::constants::{grouping, segment_rules};
use crate::core::error::{Result, UrlSiftError};

/// Decides whether a path segment holds a variable value such as an id.
///
/// Implemented for plain closures, so ad-hoc rules need no new type:
///
/// ```
/// use urlsift::{SegmentRule, SignatureBuilder};
///
/// let dated = |segment: &str| segment.len() == 10 && segment.as_bytes()[4] == b'-';
/// let builder = SignatureBuilder::new(dated);
/// assert_eq!(
///     builder.signature("https://x.com/news/2024-01-31").to_string(),
///     "https://x.com/news/{}"
/// );
/// ```
pub trait SegmentRule: Send + Sync {
    fn is_variable(&self, segment: &str) -> bool;
}

impl<F> SegmentRule for F
where
    F: Fn(&str) -> bool + Send + Sync,
{
    fn is_variable(&self, segment: &str) -> bool {
        self(segment)
    }
}

/// Purely numeric segments: `/item/123`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Numeric;

impl SegmentRule for Numeric {
    fn is_variable(&self, segment: &str) -> bool {
        !segment.is_empty() && segment.bytes().all(|b| b.is_ascii_digit())
    }
}

/// Segments at least `min_len` characters long, whatever they contain.
#[derive(Debug, Clone, Copy)]
pub struct LongToken {
    pub min_len: usize,
}

impl Default for LongToken {
    fn default() -> Self {
        Self {
            min_len: grouping::DEFAULT_MIN_TOKEN_LEN,
        }
    }
}

impl SegmentRule for LongToken {
    fn is_variable(&self, segment: &str) -> bool {
        segment.chars().count() >= self.min_len
    }
}

/// Hex digests at least `min_len` characters long: `/blob/9f86d081884c7d65`.
#[derive(Debug, Clone, Copy)]
pub struct HexToken {
    pub min_len: usize,
}

impl Default for HexToken {
    fn default() -> Self {
        Self {
            min_len: grouping::DEFAULT_MIN_HEX_LEN,
        }
    }
}

impl SegmentRule for HexToken {
    fn is_variable(&self, segment: &str) -> bool {
        segment.len() >= self.min_len && segment.bytes().all(|b| b.is_ascii_hexdigit())
    }
}

/// Matches when any of its rules matches.
#[derive(Default)]
pub struct AnyRule {
    rules: Vec<Box<dyn SegmentRule>>,
}

impl AnyRule {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, rule: impl SegmentRule + 'static) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    pub fn push(&mut self, rule: Box<dyn SegmentRule>) {
        self.rules.push(rule);
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl SegmentRule for AnyRule {
    fn is_variable(&self, segment: &str) -> bool {
        self.rules.iter().any(|rule| rule.is_variable(segment))
    }
}

impl fmt::Debug for AnyRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnyRule")
            .field("rules", &self.rules.len())
            .finish()
    }
}

/// Build a rule from its configured name.
///
/// `min_token_len` only affects `long-token`.
pub fn rule_from_name(name: &str, min_token_len: usize) -> Result<Box<dyn SegmentRule>> {
    match name.trim().to_lowercase().as_str() {
        segment_rules::NUMERIC => Ok(Box::new(Numeric)),
        segment_rules::LONG_TOKEN => Ok(Box::new(LongToken {
            min_len: min_token_len,
        })),
        segment_rules::HEX => Ok(Box::new(HexToken::default())),
        other => Err(UrlSiftError::Config(format!(
            "Unknown segment rule '{other}'. Expected one of: {}.",
            segment_rules::ALL.join(", ")
        ))),
    }
}

/// The grouping key of a URL.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Signature {
    /// Scheme, host, port and normalized path of a parseable URL
    Parsed(String),
    /// Raw text of something that did not parse; it only groups with itself
    Opaque(String),
}

impl Signature {
    pub fn as_str(&self) -> &str {
        match self {
            Signature::Parsed(s) | Signature::Opaque(s) => s,
        }
    }

    pub fn is_opaque(&self) -> bool {
        matches!(self, Signature::Opaque(_))
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Derives [`Signature`]s using a configurable [`SegmentRule`].
pub struct SignatureBuilder {
    rule: Box<dyn SegmentRule>,
}

impl Default for SignatureBuilder {
    /// Numeric segments and segments of 32 or more characters are variable.
    fn default() -> Self {
        Self::new(AnyRule::new().with(Numeric).with(LongToken::default()))
    }
}

impl fmt::Debug for SignatureBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignatureBuilder").finish_non_exhaustive()
    }
}

impl SignatureBuilder {
    pub fn new(rule: impl SegmentRule + 'static) -> Self {
        Self {
            rule: Box::new(rule),
        }
    }

    /// Combine named rules, see [`rule_from_name`].
    pub fn from_rule_names<S: AsRef<str>>(names: &[S], min_token_len: usize) -> Result<Self> {
        let mut rules = AnyRule::new();
        for name in names {
            rules.push(rule_from_name(name.as_ref(), min_token_len)?);
        }
        Ok(Self::new(rules))
    }

    /// Compute the signature of `url`. Never fails.
    pub fn signature(&self, url: &str) -> Signature {
        match Url::parse(url) {
            Ok(parsed) => Signature::Parsed(self.parsed_signature(&parsed)),
            Err(_) => Signature::Opaque(url.to_string()),
        }
    }

    fn parsed_signature(&self, url: &Url) -> String {
        let mut key = String::with_capacity(url.as_str().len());
        key.push_str(url.scheme());

        match url.host_str() {
            Some(host) => {
                key.push_str("://");
                key.push_str(&host.to_lowercase());
                if let Some(port) = url.port() {
                    key.push(':');
                    key.push_str(&port.to_string());
                }
            }
            None => key.push(':'),
        }

        match url.path_segments() {
            Some(segments) => {
                for segment in segments.filter(|s| !s.is_empty()) {
                    // Rules see the text as written, not its %XX escapes
                    let segment = percent_decode_str(segment)
                        .decode_utf8_lossy()
                        .to_lowercase();
                    key.push('/');
                    if self.rule.is_variable(&segment) {
                        key.push_str(grouping::PLACEHOLDER);
                    } else {
                        key.push_str(&segment);
                    }
                }
            }
            None => key.push_str(&url.path().to_lowercase()),
        }

        key
    }
}
