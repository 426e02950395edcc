//! md2adf - Convert Markdown into Atlassian Document Format.
//!
//! This binary provides the CLI interface to the mdadf library, reading
//! Markdown from files or stdin and printing ADF JSON.

mod cli;

use clap::Parser as ClapParser;
use cli::{Cli, OutputMode};
use log::{debug, error, info, warn, LevelFilter};
use std::fs;
use std::io::{self, Read, Write};

use mdadf_config::Config;
use mdadf_core::{ConvertOptions, Result};
use mdadf_parser::Converter;

fn main() {
    let cli = <Cli as ClapParser>::parse();

    // Handle --paths flag
    if cli.show_paths {
        cli::show_paths();
        return;
    }

    setup_logging(&cli.log_level);
    info!("md2adf v{}", env!("CARGO_PKG_VERSION"));

    if cli.init_config {
        match Config::ensure_config_file() {
            Ok(path) => println!("{}", path.display()),
            Err(e) => {
                error!("Error: {}", e);
                std::process::exit(1);
            }
        }
        return;
    }

    if let Err(e) = run(&cli) {
        error!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Set up logging based on the log level argument.
fn setup_logging(level: &str) {
    env_logger::Builder::new()
        .filter_level(parse_level(level))
        .format(|buf, record| {
            writeln!(
                buf,
                "[{}] {}: {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();
}

fn parse_level(level: &str) -> LevelFilter {
    match level.to_lowercase().as_str() {
        "trace" => LevelFilter::Trace,
        "debug" => LevelFilter::Debug,
        "info" => LevelFilter::Info,
        "warn" => LevelFilter::Warn,
        "error" => LevelFilter::Error,
        "off" => LevelFilter::Off,
        _ => LevelFilter::Warn,
    }
}

/// Main application logic.
fn run(cli: &Cli) -> Result<()> {
    let mode = cli.output_mode()?;
    let config = load_config(cli)?;
    let pretty = config.output.pretty && !cli.compact;
    let converter = Converter::with_options(convert_options(cli, &config));
    debug!("Converter options: {:?}", converter.options());

    let mut stdout = io::stdout().lock();

    if cli.should_read_stdin() {
        info!("Reading from stdin");
        let mut markdown = String::new();
        io::stdin().read_to_string(&mut markdown)?;
        writeln!(stdout, "{}", convert(&markdown, &converter, &mode, pretty)?)?;
    } else {
        for path in &cli.files {
            info!("Processing file: {}", path.display());
            let markdown = fs::read_to_string(path)?;
            writeln!(stdout, "{}", convert(&markdown, &converter, &mode, pretty)?)?;
        }
    }

    stdout.flush()?;
    Ok(())
}

/// Load configuration with an optional override.
///
/// A broken default config file is reported and ignored; a broken
/// `--config` override is an error.
fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = Config::load().unwrap_or_else(|e| {
        warn!("Ignoring config file: {}", e);
        Config::default()
    });

    if let Some(ref config_arg) = cli.config {
        config.apply_override(config_arg)?;
        debug!("Merged config override: {}", config_arg);
    }

    Ok(config)
}

/// Converter options from config, with command line overrides applied.
fn convert_options(cli: &Cli, config: &Config) -> ConvertOptions {
    let options = config.convert_options();
    match cli.language {
        Some(ref language) => options.with_code_language(language.as_str()),
        None => options,
    }
}

/// Convert one Markdown input and serialize it for output.
fn convert(markdown: &str, converter: &Converter, mode: &OutputMode, pretty: bool) -> Result<String> {
    let doc = converter.convert(markdown);
    debug!("Document has {} top-level block(s)", doc.blocks().len());
    mode.render(&doc, pretty)
}
