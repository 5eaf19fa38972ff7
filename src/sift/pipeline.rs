//! The full sift: extension filter followed by similarity grouping.

use serde::Serialize;

use crate::core::constants::files::PROCESS_BATCH_SIZE;
use crate::core::types::ExtensionSet;
use crate::input::parse_lines;
use crate::reporting::logging;
use crate::sift::extension::filter_by_extension;
use crate::sift::grouper::Grouper;

/// Pipeline stage, reported to a [`ProgressSink`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Filter,
    Group,
}

impl Stage {
    pub fn label(self) -> &'static str {
        match self {
            Stage::Filter => "Filtering static resources",
            Stage::Group => "Grouping similar URLs",
        }
    }
}

/// Receives progress updates while a pipeline runs.
///
/// All methods default to doing nothing; `()` is the silent sink.
pub trait ProgressSink {
    fn start(&mut self, _stage: Stage, _total: usize) {}
    fn advance(&mut self, _stage: Stage, _processed: usize) {}
    fn finish(&mut self, _stage: Stage) {}
}

impl ProgressSink for () {}

/// Counts collected during a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PipelineStats {
    /// URLs fed in
    pub input: usize,
    /// URLs left after the extension filter
    pub after_filter: usize,
    /// URLs left after grouping
    pub output: usize,
    /// Distinct similarity signatures among filtered URLs
    pub groups: usize,
}

impl PipelineStats {
    pub fn static_removed(&self) -> usize {
        self.input - self.after_filter
    }

    pub fn similar_removed(&self) -> usize {
        self.after_filter - self.output
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PipelineOutput {
    pub urls: Vec<String>,
    pub stats: PipelineStats,
}

#[derive(Debug, Default)]
pub struct Pipeline {
    extensions: ExtensionSet,
    grouper: Grouper,
}

impl Pipeline {
    pub fn new(extensions: ExtensionSet, grouper: Grouper) -> Self {
        Self {
            extensions,
            grouper,
        }
    }

    pub fn extensions(&self) -> &ExtensionSet {
        &self.extensions
    }

    pub fn grouper(&self) -> &Grouper {
        &self.grouper
    }

    /// Run over raw multi-line text, one URL per line; blank lines are skipped.
    pub fn run_text(&self, text: &str) -> PipelineOutput {
        self.run(parse_lines(text).as_slice())
    }

    pub fn run<S: AsRef<str>>(&self, urls: &[S]) -> PipelineOutput {
        self.run_with_progress(urls, &mut ())
    }

    /// Run both stages, reporting progress once per batch of input.
    pub fn run_with_progress<S: AsRef<str>>(
        &self,
        urls: &[S],
        progress: &mut dyn ProgressSink,
    ) -> PipelineOutput {
        let urls: Vec<&str> = urls.iter().map(AsRef::<str>::as_ref).collect();

        progress.start(Stage::Filter, urls.len());
        let mut filtered: Vec<&str> = Vec::with_capacity(urls.len());
        let mut processed = 0;
        for batch in urls.chunks(PROCESS_BATCH_SIZE) {
            filtered.extend(filter_by_extension(batch.iter().copied(), &self.extensions));
            processed += batch.len();
            progress.advance(Stage::Filter, processed);
        }
        progress.finish(Stage::Filter);
        logging::log_stage_complete(Stage::Filter, urls.len(), filtered.len());

        progress.start(Stage::Group, filtered.len());
        let mut truncator = self.grouper.truncator();
        let mut kept = Vec::with_capacity(filtered.len());
        processed = 0;
        for batch in filtered.chunks(PROCESS_BATCH_SIZE) {
            kept.extend(
                batch
                    .iter()
                    .filter(|url| truncator.offer(url))
                    .map(|url| url.to_string()),
            );
            processed += batch.len();
            progress.advance(Stage::Group, processed);
        }
        progress.finish(Stage::Group);
        logging::log_stage_complete(Stage::Group, filtered.len(), kept.len());

        let stats = PipelineStats {
            input: urls.len(),
            after_filter: filtered.len(),
            output: kept.len(),
            groups: truncator.group_count(),
        };

        PipelineOutput { urls: kept, stats }
    }
}
