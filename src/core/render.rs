//! Renderer module
//!
//! Renders file reports as text lines, jsonl, json or markdown. Text and
//! jsonl stream one line per file; json and markdown render the whole run.

use colored::Colorize;

use crate::core::model::{FileReport, RunReport, Status};

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Jsonl,
    Json,
    Markdown,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "jsonl" => Ok(OutputFormat::Jsonl),
            "json" => Ok(OutputFormat::Json),
            "md" | "markdown" => Ok(OutputFormat::Markdown),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}

/// Render configuration combining format and options
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderConfig {
    pub format: OutputFormat,
    pub pretty: bool,
    pub color: bool,
}

impl RenderConfig {
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            pretty: false,
            color: false,
        }
    }

    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }
}

/// Renderer for file reports
pub struct Renderer {
    config: RenderConfig,
}

impl Renderer {
    pub fn with_config(config: RenderConfig) -> Self {
        Self { config }
    }

    /// Whether each file is rendered as soon as it is processed
    pub fn is_streaming(&self) -> bool {
        matches!(self.config.format, OutputFormat::Text | OutputFormat::Jsonl)
    }

    /// Render a single file report (streaming formats)
    pub fn render_item(&self, item: &FileReport) -> String {
        match self.config.format {
            OutputFormat::Jsonl => self.to_json(item),
            _ => self.render_text_line(item),
        }
    }

    /// Render the whole run (non-streaming formats)
    pub fn render_report(&self, report: &RunReport) -> String {
        match self.config.format {
            OutputFormat::Json => self.to_json(&report.items),
            OutputFormat::Markdown => self.render_markdown(report),
            OutputFormat::Jsonl => report
                .items
                .iter()
                .map(|item| self.to_json(item))
                .collect::<Vec<_>>()
                .join("\n"),
            OutputFormat::Text => report
                .items
                .iter()
                .map(|item| self.render_text_line(item))
                .collect::<Vec<_>>()
                .join("\n"),
        }
    }

    /// One-line totals for the text format
    pub fn render_summary(&self, report: &RunReport) -> String {
        let summary = report.summary();
        let line = format!(
            "{} updated, {} skipped, {} failed",
            summary.updated, summary.skipped, summary.failed
        );
        if self.config.color {
            line.bold().to_string()
        } else {
            line
        }
    }

    fn to_json<T: serde::Serialize + ?Sized>(&self, value: &T) -> String {
        let rendered = if self.config.pretty {
            serde_json::to_string_pretty(value)
        } else {
            serde_json::to_string(value)
        };
        rendered.unwrap_or_else(|_| "null".to_string())
    }

    fn render_text_line(&self, item: &FileReport) -> String {
        match item.status {
            Status::Updated => {
                let word = self.paint("Updated", |s| s.green().to_string());
                format!("✅ {} {}", word, item.path)
            }
            Status::Skipped => {
                let word = self.paint("Skipped", |s| s.dimmed().to_string());
                format!("{} {} (no matches)", word, item.path)
            }
            Status::Failed => {
                let word = self.paint("Failed", |s| s.red().to_string());
                let reason = item
                    .errors
                    .first()
                    .map(|e| e.message.as_str())
                    .unwrap_or("unknown error");
                format!("❌ {} {}: {}", word, item.path, reason)
            }
        }
    }

    fn paint(&self, word: &str, style: impl Fn(&str) -> String) -> String {
        if self.config.color {
            style(word)
        } else {
            word.to_string()
        }
    }

    /// Render as Markdown, grouped by status
    fn render_markdown(&self, report: &RunReport) -> String {
        let mut output = String::new();
        let summary = report.summary();

        output.push_str("# Restyle Report\n\n");
        output.push_str(&format!(
            "{} updated, {} skipped, {} failed\n\n",
            summary.updated, summary.skipped, summary.failed
        ));

        for (status, heading) in [
            (Status::Failed, "Failed"),
            (Status::Updated, "Updated"),
            (Status::Skipped, "Skipped"),
        ] {
            let items: Vec<_> = report.items.iter().filter(|i| i.status == status).collect();
            if items.is_empty() {
                continue;
            }

            output.push_str(&format!("## {}\n\n", heading));
            for item in items {
                output.push_str(&format!("- `{}`", item.path));
                match item.status {
                    Status::Updated => {
                        let rules: Vec<_> = item
                            .hits
                            .iter()
                            .map(|h| format!("{} ×{}", h.rule, h.count))
                            .collect();
                        output.push_str(&format!(
                            " ({} {}: {})",
                            item.total_hits(),
                            if item.total_hits() == 1 {
                                "replacement"
                            } else {
                                "replacements"
                            },
                            rules.join(", ")
                        ));
                    }
                    Status::Failed => {
                        for error in &item.errors {
                            output.push_str(&format!(" **{}**: {}", error.code, error.message));
                        }
                    }
                    Status::Skipped => {}
                }
                output.push('\n');
            }
            output.push('\n');
        }

        output
    }
}
