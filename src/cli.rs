//! Command-line interface for md2adf.

use clap::Parser;
use mdadf_core::{AdfError, Document, PageRequest, Result};
use std::path::PathBuf;

/// md2adf - Convert Markdown into Atlassian Document Format.
///
/// Prints one ADF JSON document per input, or a Confluence v2 page request
/// body wrapping it when a page title is given.
#[derive(Parser, Debug)]
#[command(
    name = "md2adf",
    author = "mdadf Contributors",
    version,
    about = "Convert Markdown into Atlassian Document Format (ADF)",
    after_help = "Examples:\n  \
                  cat README.md | md2adf\n  \
                  md2adf --compact notes.md\n  \
                  md2adf --title 'Release notes' --space-id 98304 notes.md\n  \
                  md2adf --title 'Release notes' --page-id 1234 --page-version 8 notes.md"
)]
pub struct Cli {
    /// Input files to convert (reads from stdin if not provided)
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// Set the logging level (trace, debug, info, warn, error)
    #[arg(short = 'l', long = "loglevel", default_value = "warn")]
    pub log_level: String,

    /// Use a custom config file or inline TOML
    #[arg(short = 'c', long = "config")]
    pub config: Option<String>,

    /// Print JSON on a single line
    #[arg(long = "compact")]
    pub compact: bool,

    /// Language for code fences without a tag
    #[arg(long = "language", value_name = "LANG")]
    pub language: Option<String>,

    /// Page title; required with --space-id, renames the page with --page-id
    #[arg(long = "title")]
    pub title: Option<String>,

    /// Space to create the page in
    #[arg(long = "space-id", value_name = "ID")]
    pub space_id: Option<String>,

    /// Page to update
    #[arg(long = "page-id", value_name = "ID")]
    pub page_id: Option<String>,

    /// New version number of the updated page (current version + 1)
    #[arg(long = "page-version", value_name = "N")]
    pub page_version: Option<u64>,

    /// Parent page of the created or updated page
    #[arg(long = "parent-id", value_name = "ID")]
    pub parent_id: Option<String>,

    /// Show configuration paths and exit
    #[arg(long = "paths")]
    pub show_paths: bool,

    /// Write the default config file if missing and exit
    #[arg(long = "init-config")]
    pub init_config: bool,
}

/// What gets printed for each converted input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputMode {
    /// The ADF document itself
    Document,
    /// A page creation body
    CreatePage {
        space_id: String,
        title: String,
        parent_id: Option<String>,
    },
    /// A page update body
    UpdatePage {
        page_id: String,
        title: Option<String>,
        version: u64,
        parent_id: Option<String>,
    },
}

impl OutputMode {
    /// Serialize a converted document in this mode.
    pub fn render(&self, doc: &Document, pretty: bool) -> Result<String> {
        let request = match self {
            OutputMode::Document => {
                return if pretty {
                    doc.to_json_pretty()
                } else {
                    doc.to_json()
                };
            }
            OutputMode::CreatePage {
                space_id,
                title,
                parent_id,
            } => with_parent(PageRequest::create(space_id, title, doc)?, parent_id),
            OutputMode::UpdatePage {
                page_id,
                title,
                version,
                parent_id,
            } => {
                let request = PageRequest::update(page_id, *version, doc)?;
                let request = match title {
                    Some(title) => request.with_title(title),
                    None => request,
                };
                with_parent(request, parent_id)
            }
        };

        let json = if pretty {
            serde_json::to_string_pretty(&request)?
        } else {
            serde_json::to_string(&request)?
        };
        Ok(json)
    }
}

fn with_parent(request: PageRequest, parent_id: &Option<String>) -> PageRequest {
    match parent_id {
        Some(id) => request.with_parent(id),
        None => request,
    }
}

impl Cli {
    /// Check if we should read from stdin.
    pub fn should_read_stdin(&self) -> bool {
        self.files.is_empty()
    }

    /// Work out the output mode from the page flags.
    pub fn output_mode(&self) -> Result<OutputMode> {
        let page_flags = self.title.is_some()
            || self.space_id.is_some()
            || self.page_id.is_some()
            || self.page_version.is_some()
            || self.parent_id.is_some();
        if !page_flags {
            return Ok(OutputMode::Document);
        }

        match (&self.space_id, &self.page_id, self.page_version) {
            (Some(space_id), None, None) => {
                let Some(title) = self.title.clone() else {
                    return Err(AdfError::Usage("--space-id requires --title".to_string()));
                };
                Ok(OutputMode::CreatePage {
                    space_id: space_id.clone(),
                    title,
                    parent_id: self.parent_id.clone(),
                })
            }
            (None, Some(page_id), Some(version)) => Ok(OutputMode::UpdatePage {
                page_id: page_id.clone(),
                title: self.title.clone(),
                version,
                parent_id: self.parent_id.clone(),
            }),
            (None, Some(_), None) => Err(AdfError::Usage(
                "--page-id requires --page-version".to_string(),
            )),
            (None, None, _) => Err(AdfError::Usage(
                "page options require --space-id or --page-id".to_string(),
            )),
            _ => Err(AdfError::Usage(
                "--space-id cannot be combined with --page-id or --page-version".to_string(),
            )),
        }
    }
}

/// Show paths information.
pub fn show_paths() {
    use mdadf_config::Config;

    let config_path = Config::config_path()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "(not found)".to_string());

    println!("paths:");
    println!("  config                {}", config_path);
}
