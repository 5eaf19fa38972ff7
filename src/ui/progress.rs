use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::time::Duration;

use crate::sift::pipeline::{ProgressSink, Stage};

const BAR_TEMPLATE: &str =
    "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg} ({eta})";

/// Progress bars on stderr, one per pipeline stage.
pub struct ProgressReporter {
    bar: Option<ProgressBar>,
    enabled: bool,
}

impl ProgressReporter {
    pub fn new(enabled: bool) -> Self {
        Self { bar: None, enabled }
    }

    pub fn finish_and_clear(&mut self) {
        if let Some(pb) = self.bar.take() {
            pb.finish_and_clear();
        }
    }
}

impl ProgressSink for ProgressReporter {
    fn start(&mut self, stage: Stage, total: usize) {
        if !self.enabled {
            return;
        }
        self.finish_and_clear();

        let pb = ProgressBar::with_draw_target(Some(total as u64), ProgressDrawTarget::stderr());
        if let Ok(style) = ProgressStyle::default_bar().template(BAR_TEMPLATE) {
            pb.set_style(style.progress_chars("#>-"));
        }
        pb.set_message(stage.label());
        pb.enable_steady_tick(Duration::from_millis(120));
        self.bar = Some(pb);
    }

    fn advance(&mut self, _stage: Stage, processed: usize) {
        if let Some(ref pb) = self.bar {
            pb.set_position(processed as u64);
        }
    }

    fn finish(&mut self, stage: Stage) {
        if let Some(ref pb) = self.bar {
            pb.finish_with_message(format!("✓ {}", stage.label()));
        }
    }
}
