//! Removal of URLs that point at static resources.

use log::trace;
use url::Url;

use crate::core::types::ExtensionSet;

/// Extract the file extension of a URL's final path segment.
///
/// The returned value is lowercased and starts with a dot. Query strings and
/// fragments are never consulted. Returns `None` when the URL does not parse,
/// has no hierarchical path, ends in a slash, or its final segment has no dot.
///
/// # Examples
/// ```
/// use urlsift::path_extension;
///
/// assert_eq!(path_extension("https://x.com/a/logo.PNG"), Some(".png".to_string()));
/// assert_eq!(path_extension("https://x.com/page?v=1.2"), None);
/// assert_eq!(path_extension("https://x.com/dir/"), None);
/// ```
pub fn path_extension(url: &str) -> Option<String> {
    let parsed = Url::parse(url).ok()?;
    let last_segment = parsed.path_segments()?.next_back()?;
    let (_, ext) = last_segment.rsplit_once('.')?;
    if ext.is_empty() {
        return None;
    }
    Some(format!(".{}", ext.to_lowercase()))
}

/// Whether a URL's path ends in one of the given extensions.
pub fn has_static_extension(url: &str, extensions: &ExtensionSet) -> bool {
    if extensions.is_empty() {
        return false;
    }
    path_extension(url).is_some_and(|ext| extensions.contains(&ext))
}

/// Drop every URL whose path ends in one of `extensions`.
///
/// Relative order of the remaining URLs is preserved. Anything that cannot
/// be parsed is kept.
pub fn filter_by_extension<I, S>(urls: I, extensions: &ExtensionSet) -> Vec<S>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    urls.into_iter()
        .filter(|url| {
            let url: &str = url.as_ref();
            let is_static = has_static_extension(url, extensions);
            if is_static {
                trace!("dropping static resource {url}");
            }
            !is_static
        })
        .collect()
}
