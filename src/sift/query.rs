//! Query string shape, used to tell apart otherwise similar URLs.

use once_cell::sync::Lazy;
use rustc_hash::FxHashSet;
use std::collections::BTreeSet;
use url::Url;

use crate::core::constants::query;

static NOISE_PARAMS: Lazy<FxHashSet<&'static str>> =
    Lazy::new(|| query::NOISE_PARAMS.iter().copied().collect());

/// Whether a query parameter is tracking or cache-busting noise.
pub fn is_noise_param(key: &str) -> bool {
    NOISE_PARAMS.contains(key.to_lowercase().as_str())
}

/// The set of meaningful, lowercased query keys of a URL.
///
/// Noise parameters such as `utm_source` or `v` are left out. Values are
/// ignored, so `?id=1&sort=asc` and `?sort=desc&id=9` have the same shape.
/// Unparseable URLs have an empty shape.
pub fn query_shape(url: &str) -> BTreeSet<String> {
    let Ok(parsed) = Url::parse(url) else {
        return BTreeSet::new();
    };

    parsed
        .query_pairs()
        .map(|(key, _)| key.to_lowercase())
        .filter(|key| !key.is_empty() && !is_noise_param(key))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shape(url: &str) -> Vec<String> {
        query_shape(url).into_iter().collect()
    }

    #[test]
    fn test_noise_params() {
        assert!(is_noise_param("utm_source"));
        assert!(is_noise_param("UTM_Campaign"));
        assert!(is_noise_param("_"));
        assert!(!is_noise_param("id"));
    }

    #[test]
    fn test_shape_ignores_values_and_order() {
        assert_eq!(
            query_shape("http://x.com/a?id=1&sort=asc"),
            query_shape("http://x.com/a?sort=desc&id=9")
        );
        assert_eq!(shape("http://x.com/a?id=1&sort=asc"), vec!["id", "sort"]);
    }

    #[test]
    fn test_shape_drops_noise() {
        assert_eq!(
            shape("http://x.com/a?Page=2&utm_source=mail&v=3&fbclid=abc"),
            vec!["page"]
        );
    }

    #[test]
    fn test_shape_empty_cases() {
        assert!(query_shape("http://x.com/a").is_empty());
        assert!(query_shape("http://x.com/a?").is_empty());
        assert!(query_shape("not a url?id=1").is_empty());
    }
}
