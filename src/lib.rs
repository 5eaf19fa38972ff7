//! urlsift - strip static resources from URL lists and collapse similar URLs.
//!
//! The library exposes two pure list transformations and a pipeline that
//! chains them:
//!
//! ```
//! use urlsift::{ExtensionSet, filter_by_extension, group_and_truncate};
//!
//! let urls = vec![
//!     "http://x.com/logo.png",
//!     "http://x.com/item/1",
//!     "http://x.com/item/2",
//!     "http://x.com/item/3",
//!     "http://x.com/item/4",
//! ];
//! let kept = filter_by_extension(urls, &ExtensionSet::defaults());
//! let grouped = group_and_truncate(kept, 3);
//! assert_eq!(
//!     grouped,
//!     vec!["http://x.com/item/1", "http://x.com/item/2", "http://x.com/item/3"]
//! );
//! ```

pub mod config;
pub mod core;
pub mod input;
pub mod reporting;
pub mod sift;
pub mod ui;

pub use crate::core::error::{Result, UrlSiftError};
pub use crate::core::types::ExtensionSet;
pub use crate::sift::extension::{filter_by_extension, path_extension};
pub use crate::sift::grouper::{Grouper, Truncator, group_and_truncate};
pub use crate::sift::pipeline::{Pipeline, PipelineOutput, PipelineStats, ProgressSink, Stage};
pub use crate::sift::signature::{
    AnyRule, HexToken, LongToken, Numeric, SegmentRule, Signature, SignatureBuilder,
};
