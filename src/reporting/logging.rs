use crate::config::Config;
use crate::sift::pipeline::{PipelineStats, Stage};
use log::{debug, error, info};
use std::io::Write;

/// Initialize the logger with appropriate level based on verbosity
pub fn init_logger(verbose: bool, quiet: bool) {
    let level = if quiet {
        log::LevelFilter::Off
    } else if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Off // Only show structured logs in verbose mode
    };

    env_logger::Builder::from_default_env()
        .filter_level(level)
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .init();

    debug!("Logger initialized with level: {level:?}");
}

/// Log configuration information
pub fn log_config_info(config: &Config) {
    let extensions = config.extension_set();
    let cap = config.group_cap();
    let rules = config.segment_rule_names().join(", ");
    let min_token_len = config.min_token_len();
    let distinct_query = config.distinct_query.unwrap_or(false);

    info!("Extensions ({}): {extensions}", extensions.len());
    info!("Grouping: cap={cap}, rules=[{rules}], min_token_len={min_token_len}");
    info!("Distinct query shapes: {distinct_query}");
}

/// Log input discovery information
pub fn log_input_info(source_count: usize, url_count: usize) {
    if source_count == 0 {
        info!("Read {url_count} URL(s) from stdin");
    } else {
        info!("Read {url_count} URL(s) from {source_count} source(s)");
    }
}

/// Log the outcome of one pipeline stage
pub fn log_stage_complete(stage: Stage, before: usize, after: usize) {
    debug!(
        "{}: {after}/{before} kept, {} removed",
        stage.label(),
        before - after
    );
}

/// Log the final pipeline counts
pub fn log_summary(stats: &PipelineStats) {
    info!(
        "Kept {} of {} URL(s): {} static, {} similar removed across {} group(s)",
        stats.output,
        stats.input,
        stats.static_removed(),
        stats.similar_removed(),
        stats.groups
    );
}

/// Log where the result was exported
pub fn log_export(path: &str, url_count: usize) {
    info!("Wrote {url_count} URL(s) to {path}");
}

/// Log error information
pub fn log_error(message: &str, source: Option<&dyn std::error::Error>) {
    match source {
        Some(err) => error!("{message}: {err}"),
        None => error!("{message}"),
    }
}
