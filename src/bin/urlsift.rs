use clap::{CommandFactory, Parser};
use urlsift::config::{CliConfig, Config};
use urlsift::input::{parse_lines, read_sources};
use urlsift::reporting::logging;
use urlsift::ui::completion::print_completions;
use urlsift::ui::output::{self, WriteToFile, Writer};
use urlsift::ui::{Cli, Commands, ProgressReporter, cli_to_config};
use urlsift::Result;
use urlsift::core::constants::output_formats;

use std::io::IsTerminal;
use std::path::Path;

fn main() {
    let cli = Cli::parse();

    // Handle completion commands first
    if let Some(Commands::CompletionGenerate { shell }) = cli.command {
        let mut app = Cli::command();
        print_completions(shell, &mut app);
        std::process::exit(0);
    }

    if let Err(e) = run_urlsift_logic(&cli) {
        logging::log_error("urlsift failed", Some(&e));
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

/// Main sifting logic extracted from main() for testing
fn run_urlsift_logic(cli: &Cli) -> Result<()> {
    let cli_config = cli_to_config(cli);
    let (config, skipped_configs) = load_and_merge_config(&cli_config)?;

    logging::init_logger(config.verbose.unwrap_or(false), cli_config.quiet);
    if !cli_config.quiet {
        for message in &skipped_configs {
            output::display_warning(message);
        }
    }

    if let Some(Commands::Extensions) = cli.command {
        output::display_extensions(&config.extension_set());
        return Ok(());
    }

    logging::log_config_info(&config);

    let text = read_sources(&cli.files)?;
    let urls = parse_lines(&text);
    logging::log_input_info(cli.files.len(), urls.len());

    let pipeline = config.pipeline()?;
    let mut progress = ProgressReporter::new(
        !cli_config.quiet && !cli_config.no_progress && std::io::stderr().is_terminal(),
    );
    let result = pipeline.run_with_progress(urls.as_slice(), &mut progress);
    progress.finish_and_clear();
    logging::log_summary(&result.stats);

    if let Some(ref path) = cli_config.output_file {
        Writer.write_to_file(Path::new(path), &result.urls)?;
        logging::log_export(path, result.urls.len());
    }

    let output_format = config.output_format();
    output::display_results(&result, pipeline.extensions(), output_format)?;

    if output_format == output_formats::TEXT && !cli_config.quiet {
        output::display_summary(&result.stats);
    }

    Ok(())
}

/// Load configuration from file and merge with CLI arguments.
///
/// Also returns a message per config file that was found but skipped.
fn load_and_merge_config(cli_config: &CliConfig) -> Result<(Config, Vec<String>)> {
    let (mut config, skipped) = if cli_config.no_config {
        (Config::default(), Vec::new())
    } else if let Some(ref config_path) = cli_config.config_file {
        (Config::load_from_file(config_path)?, Vec::new())
    } else {
        Config::load_from_standard_locations()
    };

    config.merge_with_cli(cli_config);
    config.validate()?;
    Ok((config, skipped))
}
