//! Output formatting and display logic for urlsift

use serde::Serialize;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

use crate::core::constants::output_formats;
use crate::core::error::Result;
use crate::core::types::ExtensionSet;
use crate::sift::pipeline::{PipelineOutput, PipelineStats};
use crate::ui::color::{Colors, colorize};

/// Machine-readable report emitted by `--format json`
#[derive(Debug, Serialize)]
pub struct JsonReport<'a> {
    pub urls: &'a [String],
    pub stats: PipelineStats,
    pub extensions: Vec<&'a str>,
    pub generated_at: String,
}

impl<'a> JsonReport<'a> {
    pub fn new(output: &'a PipelineOutput, extensions: &'a ExtensionSet) -> Self {
        Self {
            urls: &output.urls,
            stats: output.stats,
            extensions: extensions.iter().collect(),
            generated_at: chrono::Utc::now()
                .format("%Y-%m-%d %H:%M:%S UTC")
                .to_string(),
        }
    }
}

/// Render the result in the requested format, ready to print to stdout
pub fn render(
    output: &PipelineOutput,
    extensions: &ExtensionSet,
    output_format: &str,
) -> Result<String> {
    match output_format {
        output_formats::JSON => {
            let report = JsonReport::new(output, extensions);
            Ok(serde_json::to_string_pretty(&report)?)
        }
        _ => Ok(output.urls.join("\n")),
    }
}

/// Print the result to stdout
pub fn display_results(
    output: &PipelineOutput,
    extensions: &ExtensionSet,
    output_format: &str,
) -> Result<()> {
    let rendered = render(output, extensions, output_format)?;
    let mut stdout = io::stdout().lock();
    if !rendered.is_empty() {
        writeln!(stdout, "{rendered}")?;
    }
    stdout.flush()?;
    Ok(())
}

/// One-line human summary of a run
pub fn summary_line(stats: &PipelineStats) -> String {
    format!(
        "Kept {} of {} URL(s): {} static resource(s) and {} similar URL(s) removed across {} group(s)",
        stats.output,
        stats.input,
        stats.static_removed(),
        stats.similar_removed(),
        stats.groups
    )
}

/// Summary line with marker, colored when the terminal allows it
pub fn format_summary(stats: &PipelineStats) -> String {
    let marker = if stats.output == stats.input {
        colorize("✓", Colors::GREEN)
    } else {
        colorize("✂", Colors::YELLOW)
    };
    format!(
        "{} {}",
        marker,
        colorize(
            &colorize(&summary_line(stats), Colors::BOLD),
            Colors::BRIGHT_WHITE
        )
    )
}

/// Print the summary to stderr so stdout stays pipeable
pub fn display_summary(stats: &PipelineStats) {
    eprintln!("{}", format_summary(stats));
}

/// Print a non-fatal problem to stderr
pub fn display_warning(message: &str) {
    eprintln!("{} {message}", colorize("Warning:", Colors::YELLOW));
}

/// Print the extension set, one per line
pub fn display_extensions(extensions: &ExtensionSet) {
    for ext in extensions.iter() {
        println!("{ext}");
    }
}

pub trait WriteToFile {
    fn write_to_file(&self, path: &Path, lines: &[String]) -> io::Result<()>;
}

/// Exports result lines, replacing any existing file
#[derive(Default)]
pub struct Writer;

impl WriteToFile for Writer {
    fn write_to_file(&self, path: &Path, lines: &[String]) -> io::Result<()> {
        let mut file = fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(path)?;

        for line in lines {
            writeln!(file, "{line}")?;
        }
        file.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_output() -> PipelineOutput {
        PipelineOutput {
            urls: vec![
                "http://x.com/item/1".to_string(),
                "http://x.com/about".to_string(),
            ],
            stats: PipelineStats {
                input: 5,
                after_filter: 3,
                output: 2,
                groups: 2,
            },
        }
    }

    #[test]
    fn test_render_text_and_minimal() -> Result<()> {
        let output = sample_output();
        let extensions = ExtensionSet::defaults();
        let expected = "http://x.com/item/1\nhttp://x.com/about";
        assert_eq!(render(&output, &extensions, output_formats::TEXT)?, expected);
        assert_eq!(render(&output, &extensions, output_formats::MINIMAL)?, expected);
        Ok(())
    }

    #[test]
    fn test_render_empty() -> Result<()> {
        let output = PipelineOutput::default();
        assert_eq!(render(&output, &ExtensionSet::empty(), output_formats::TEXT)?, "");
        Ok(())
    }

    #[test]
    fn test_render_json() -> Result<()> {
        let output = sample_output();
        let extensions: ExtensionSet = ["png", ".CSS"].into_iter().collect();
        let rendered = render(&output, &extensions, output_formats::JSON)?;

        let value: serde_json::Value = serde_json::from_str(&rendered)?;
        assert_eq!(value["urls"][0], "http://x.com/item/1");
        assert_eq!(value["urls"].as_array().map(Vec::len), Some(2));
        assert_eq!(value["stats"]["input"], 5);
        assert_eq!(value["stats"]["after_filter"], 3);
        assert_eq!(value["stats"]["groups"], 2);
        assert_eq!(value["extensions"], serde_json::json!([".css", ".png"]));
        assert!(
            value["generated_at"]
                .as_str()
                .is_some_and(|ts| ts.ends_with(" UTC"))
        );
        Ok(())
    }

    #[test]
    fn test_summary_line() {
        assert_eq!(
            summary_line(&sample_output().stats),
            "Kept 2 of 5 URL(s): 2 static resource(s) and 1 similar URL(s) removed across 2 group(s)"
        );
    }

    #[test]
    fn test_format_summary_plain_without_color_support() {
        if std::env::var("FORCE_COLOR").is_err() {
            let summary = format_summary(&sample_output().stats);
            assert!(!summary.contains('\x1b'));
            assert!(summary.starts_with("✂ Kept 2 of 5 URL(s)"));
        }
    }

    #[test]
    fn test_writer_replaces_existing_file() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("out.txt");
        fs::write(&path, "stale content that is longer than the new one\n")?;

        Writer.write_to_file(&path, &sample_output().urls)?;
        assert_eq!(
            fs::read_to_string(&path)?,
            "http://x.com/item/1\nhttp://x.com/about\n"
        );
        Ok(())
    }

    #[test]
    fn test_writer_empty_result() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("empty.txt");
        Writer.write_to_file(&path, &[])?;
        assert_eq!(fs::read_to_string(&path)?, "");
        Ok(())
    }
}
