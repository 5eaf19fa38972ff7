// Command-line interface definitions and parsing for urlsift

use crate::config::CliConfig;
use crate::core::constants::{output_formats, segment_rules};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Files with one URL per line (reads stdin when none or '-')
    pub files: Vec<String>,

    // Extension Filter
    /// Extra static extensions to drop (e.g., pdf,svg or "woff ttf")
    #[arg(
        short = 'e',
        long = "ext",
        value_name = "EXTENSIONS",
        help_heading = "Extension Filter"
    )]
    pub ext: Vec<String>,

    /// Do not start from the built-in extensions (.jpg .jpeg .png .gif .css .js)
    #[arg(long, help_heading = "Extension Filter")]
    pub no_default_extensions: bool,

    /// Keep static resources, only group similar URLs
    #[arg(long, help_heading = "Extension Filter")]
    pub keep_static: bool,

    // Grouping
    /// URLs kept per group of similar URLs (default: 3)
    #[arg(short = 'c', long, value_name = "COUNT", help_heading = "Grouping")]
    pub cap: Option<usize>,

    /// Rule marking a path segment as variable (default: numeric, long-token)
    #[arg(
        long = "segment-rule",
        value_name = "RULE",
        value_parser = segment_rules::ALL,
        help_heading = "Grouping"
    )]
    pub segment_rule: Vec<String>,

    /// Minimum length of a segment matched by the long-token rule (default: 32)
    #[arg(long, value_name = "LENGTH", help_heading = "Grouping")]
    pub min_token_len: Option<usize>,

    /// Skip URLs whose query keys repeat ones already kept in their group
    #[arg(long, help_heading = "Grouping")]
    pub distinct_query: bool,

    // Output & Verbosity
    /// Also write the resulting URLs to a file
    #[arg(short = 'o', long, value_name = "FILE", help_heading = "Output & Verbosity")]
    pub output: Option<String>,

    /// Output format (default: text)
    #[arg(long, value_name = "FORMAT", value_parser = output_formats::ALL, help_heading = "Output & Verbosity")]
    pub format: Option<String>,

    /// Suppress summary and progress output
    #[arg(short = 'q', long, help_heading = "Output & Verbosity")]
    pub quiet: bool,

    /// Enable verbose logging
    #[arg(short = 'v', long, help_heading = "Output & Verbosity")]
    pub verbose: bool,

    /// Disable progress bars
    #[arg(long, help_heading = "Output & Verbosity")]
    pub no_progress: bool,

    // Configuration
    /// Use specific config file
    #[arg(long, value_name = "FILE", help_heading = "Configuration")]
    pub config: Option<String>,

    /// Ignore config files
    #[arg(long, help_heading = "Configuration")]
    pub no_config: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate shell completions
    #[command(name = "completion-generate", arg_required_else_help = true)]
    CompletionGenerate {
        /// The shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
    /// Print the effective static extension set
    #[command(name = "extensions")]
    Extensions,
}

/// Convert derive-based CLI arguments to CliConfig structure
pub fn cli_to_config(cli: &Cli) -> CliConfig {
    CliConfig {
        extensions: (!cli.ext.is_empty()).then(|| cli.ext.clone()),
        no_default_extensions: cli.no_default_extensions,
        keep_static: cli.keep_static,
        group_cap: cli.cap,
        segment_rules: (!cli.segment_rule.is_empty()).then(|| cli.segment_rule.clone()),
        min_token_len: cli.min_token_len,
        distinct_query: cli.distinct_query,
        quiet: cli.quiet,
        verbose: cli.verbose,
        output_format: cli.format.clone(),
        output_file: cli.output.clone(),
        no_progress: cli.no_progress,
        config_file: cli.config.clone(),
        no_config: cli.no_config,
    }
}
