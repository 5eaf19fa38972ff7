//! URL sifting
//!
//! This module holds the list transformations: dropping static resources
//! by extension and collapsing URLs that share a similarity signature.

pub mod extension;
pub mod grouper;
pub mod pipeline;
pub mod query;
pub mod signature;

// Re-export commonly used items
pub use extension::{filter_by_extension, path_extension};
pub use grouper::{Grouper, Truncator, group_and_truncate};
pub use pipeline::{Pipeline, PipelineOutput, PipelineStats, ProgressSink, Stage};
pub use signature::{SegmentRule, Signature, SignatureBuilder};
