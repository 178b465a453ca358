//! Output formatting for the CLI.
//!
//! This module provides human-readable and JSON output formatters for lookup
//! reports.

use crate::cli::lookup::{LookupOutcome, LookupReport, RuleSummary};
use colored::Colorize;
use serde::Serialize;
use std::io::Write;

/// One lookup in JSON format.
///
/// `id` repeats the path so each entry can be keyed on its own.
#[derive(Debug, Serialize)]
pub struct JsonLookup {
    /// Identifier of the entry (the path).
    pub id: String,
    /// The path as supplied.
    pub path: String,
    /// Owners of the winning rule; `null` when no rule applied.
    pub owners: Option<Vec<String>>,
    /// Line of the winning rule.
    pub line: Option<usize>,
    /// Trailing comment of the winning rule.
    pub comment: Option<String>,
    /// Why the lookup failed.
    pub error: Option<String>,
    /// Every matching rule, when requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matching_rules: Option<Vec<JsonRule>>,
}

/// A matching rule in JSON format.
#[derive(Debug, Serialize)]
pub struct JsonRule {
    /// Line number of the rule.
    pub line: usize,
    /// The pattern as written.
    pub pattern: String,
    /// The rule's owners.
    pub owners: Vec<String>,
}

impl From<&RuleSummary> for JsonRule {
    fn from(rule: &RuleSummary) -> Self {
        Self {
            line: rule.line,
            pattern: rule.pattern.clone(),
            owners: rule.owners.clone(),
        }
    }
}

impl From<&LookupReport> for JsonLookup {
    fn from(report: &LookupReport) -> Self {
        let mut entry = Self {
            id: report.path.clone(),
            path: report.path.clone(),
            owners: report.owners().map(<[String]>::to_vec),
            line: None,
            comment: None,
            error: report.failure_message(),
            matching_rules: None,
        };

        if let LookupOutcome::Matched {
            rule,
            matching_rules,
        } = &report.outcome
        {
            entry.line = Some(rule.line);
            entry.comment = rule.comment.clone();
            entry.matching_rules = matching_rules
                .as_ref()
                .map(|rules| rules.iter().map(JsonRule::from).collect());
        }

        entry
    }
}

/// Writes all reports as a pretty-printed JSON array.
pub fn write_json<W: Write>(writer: &mut W, reports: &[LookupReport]) -> std::io::Result<()> {
    let entries: Vec<JsonLookup> = reports.iter().map(JsonLookup::from).collect();
    let json = serde_json::to_string_pretty(&entries).map_err(std::io::Error::other)?;
    writeln!(writer, "{}", json)
}

/// Output formatter for human-readable console output.
pub struct HumanOutput<W: Write> {
    writer: W,
    use_colors: bool,
}

impl<W: Write> HumanOutput<W> {
    /// Creates a new human output formatter.
    pub fn new(writer: W, use_colors: bool) -> Self {
        Self { writer, use_colors }
    }

    /// Writes one report: the path, then its owners or the failure.
    pub fn write_report(&mut self, report: &LookupReport) -> std::io::Result<()> {
        match &report.outcome {
            LookupOutcome::Matched {
                rule,
                matching_rules,
            } => {
                let owners = if rule.owners.is_empty() {
                    "(unowned)".to_string()
                } else {
                    rule.owners.join(" ")
                };
                if self.use_colors {
                    let owners = if rule.owners.is_empty() {
                        owners.yellow()
                    } else {
                        owners.green()
                    };
                    writeln!(self.writer, "{:<40} {}", report.path.bold(), owners)?;
                } else {
                    writeln!(self.writer, "{:<40} {}", report.path, owners)?;
                }

                if let Some(rules) = matching_rules {
                    for matched in rules {
                        self.write_matching_rule(matched, matched.line == rule.line)?;
                    }
                }
            }
            LookupOutcome::Unmatched | LookupOutcome::Failed(_) => {
                let message = report.failure_message().unwrap_or_default();
                if self.use_colors {
                    writeln!(self.writer, "{:<40} {}", report.path.bold(), message.red())?;
                } else {
                    writeln!(self.writer, "{:<40} {}", report.path, message)?;
                }
            }
        }
        Ok(())
    }

    fn write_matching_rule(&mut self, rule: &RuleSummary, winner: bool) -> std::io::Result<()> {
        let marker = if winner { "*" } else { " " };
        let text = format!(
            "  {} line {}: {} {}",
            marker,
            rule.line,
            rule.pattern,
            rule.owners.join(" ")
        );
        let text = text.trim_end();
        if self.use_colors && !winner {
            writeln!(self.writer, "{}", text.dimmed())
        } else {
            writeln!(self.writer, "{}", text)
        }
    }

    /// Writes a summary when some lookups failed; nothing otherwise.
    pub fn write_summary(&mut self, total: usize, failed: usize) -> std::io::Result<()> {
        if failed == 0 {
            return Ok(());
        }

        let message = format!("✗ {} of {} path(s) could not be resolved", failed, total);
        writeln!(self.writer)?;
        if self.use_colors {
            writeln!(self.writer, "{}", message.red().bold())?;
        } else {
            writeln!(self.writer, "{}", message)?;
        }
        Ok(())
    }

    /// Writes a startup error.
    pub fn write_error(&mut self, message: &str) -> std::io::Result<()> {
        if self.use_colors {
            writeln!(self.writer, "{} {}", "Error:".red().bold(), message)?;
        } else {
            writeln!(self.writer, "Error: {}", message)?;
        }
        Ok(())
    }
}

/// Writes all reports followed by the failure summary.
pub fn write_human<W: Write>(
    writer: &mut W,
    reports: &[LookupReport],
    use_colors: bool,
) -> std::io::Result<()> {
    let mut output = HumanOutput::new(writer, use_colors);
    for report in reports {
        output.write_report(report)?;
    }
    let failed = reports.iter().filter(|r| r.is_failure()).count();
    output.write_summary(reports.len(), failed)
}
