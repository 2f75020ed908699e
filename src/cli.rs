//! CLI module - Command-line interface definition and handler

use anyhow::{bail, Context, Result};
use clap::Parser;
use std::io::IsTerminal;
use tracing::info;

use crate::core::render::{OutputFormat, RenderConfig, Renderer};
use crate::rewrite::rules::default_rules;
use crate::rewrite::runner::{ErrorPolicy, FileRewriter, RewriteConfig};

/// restyle - rewrite survey components in place.
#[derive(Parser, Debug)]
#[command(name = "restyle")]
#[command(
    author,
    version,
    about,
    long_about = r#"restyle walks app/survey under the current directory and rewrites every
.tsx file in place:

  1. bg-gray-50          -> bg-gray-100
  2. hover:bg-orange-50  -> hover:bg-blue-50
  3. </span> directly followed by a non-space character gets one space inserted

Files are processed in path order. A file is only written when its content
changes; one status line is printed per file.

Examples:
    restyle
    restyle --keep-going
    restyle --format jsonl
"#
)]
pub struct Cli {
    /// Output format (text/jsonl/json/md).
    #[arg(
        long,
        default_value = "text",
        value_parser = ["text", "jsonl", "json", "md"],
        value_name = "FORMAT",
        long_help = "Select the report format.\n\n\
Supported values:\n\
- text (default): one status line per file plus a summary\n\
- jsonl: one JSON object per file\n\
- json: a single JSON array, printed when the run completes\n\
- md: Markdown grouped by status, printed when the run completes"
    )]
    pub format: String,

    /// Pretty-print JSON/JSONL output with indentation.
    #[arg(
        long,
        long_help = "Pretty-print JSON and JSONL output with indentation for human readability.\n\n\
Has no effect on text/md formats."
    )]
    pub pretty: bool,

    /// Disable colored output.
    #[arg(
        long,
        long_help = "Disable colored status words. Color is also off when stdout is not a terminal."
    )]
    pub no_color: bool,

    /// Quiet mode (minimal output).
    #[arg(
        short,
        long,
        long_help = "Suppress the summary line and all diagnostics except errors.\n\
Per-file status lines are still printed."
    )]
    pub quiet: bool,

    /// Verbose mode (more diagnostics).
    #[arg(
        short,
        long,
        long_help = "Enable debug diagnostics on stderr. RUST_LOG overrides this flag."
    )]
    pub verbose: bool,

    /// Keep processing remaining files when one cannot be read or written.
    #[arg(
        long,
        long_help = "By default the first file that cannot be read, decoded or written stops\n\
the run; files already rewritten stay rewritten.\n\n\
With --keep-going the failure is reported and the run continues. The exit\n\
status is still non-zero if any file failed."
    )]
    pub keep_going: bool,
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<()> {
    let format: OutputFormat = cli.format.parse().unwrap_or_default();
    let color = !cli.no_color && std::io::stdout().is_terminal();
    let renderer = Renderer::with_config(
        RenderConfig::new(format)
            .with_pretty(cli.pretty)
            .with_color(color),
    );

    let policy = if cli.keep_going {
        ErrorPolicy::Continue
    } else {
        ErrorPolicy::Abort
    };
    let config = RewriteConfig::default().with_error_policy(policy);
    let root = config.root.clone();

    let rewriter = FileRewriter::new(config, default_rules());

    let report = rewriter
        .run(|item| {
            if renderer.is_streaming() {
                println!("{}", renderer.render_item(item));
            }
        })
        .with_context(|| format!("Rewrite of {} aborted", root.display()))?;

    if report.is_empty() {
        info!(root = %root.display(), "no matching files");
    }

    if !renderer.is_streaming() {
        println!("{}", renderer.render_report(&report));
    } else if format == OutputFormat::Text && !cli.quiet {
        println!("{}", renderer.render_summary(&report));
    }

    if report.has_failures() {
        bail!(
            "{} of {} file(s) could not be rewritten",
            report.summary().failed,
            report.len()
        );
    }

    Ok(())
}
