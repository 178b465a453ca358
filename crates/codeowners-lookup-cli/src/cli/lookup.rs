//! Concurrent path resolution against a shared engine.
//!
//! The engine is built once and shared through an [`Arc`]; paths are split
//! into chunks resolved on tokio's blocking pool and reassembled in input
//! order.

use codeowners_lookup_core::{MatchError, OwnershipEngine, Rule};
use std::sync::Arc;
use tokio::task::{JoinError, JoinSet};
use tracing::{debug, trace};

/// A rule as reported to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleSummary {
    /// 1-based line number in the CODEOWNERS file.
    pub line: usize,
    /// The pattern as written.
    pub pattern: String,
    /// Owners, possibly empty.
    pub owners: Vec<String>,
    /// Trailing comment, if any.
    pub comment: Option<String>,
}

impl From<&Rule> for RuleSummary {
    fn from(rule: &Rule) -> Self {
        Self {
            line: rule.line_number(),
            pattern: rule.pattern().as_str().to_string(),
            owners: rule.owners().to_vec(),
            comment: rule.comment().map(str::to_string),
        }
    }
}

/// How a single lookup ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupOutcome {
    /// A rule matched.
    Matched {
        /// The winning rule.
        rule: RuleSummary,
        /// Every matching rule in file order, when requested.
        matching_rules: Option<Vec<RuleSummary>>,
    },
    /// No rule matched.
    Unmatched,
    /// The path was malformed.
    Failed(MatchError),
}

/// The result of looking up one path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupReport {
    /// The path as supplied.
    pub path: String,
    /// What happened.
    pub outcome: LookupOutcome,
}

impl LookupReport {
    /// Creates a report.
    pub fn new(path: impl Into<String>, outcome: LookupOutcome) -> Self {
        Self {
            path: path.into(),
            outcome,
        }
    }

    /// Resolves `path` against `engine`.
    pub fn resolve<E: OwnershipEngine>(engine: &E, path: String, all_matching: bool) -> Self {
        let outcome = match engine.match_path(&path) {
            Ok(Some(rule)) => {
                trace!(
                    "{}: line={}, comment={:?}, owners={:?}",
                    path,
                    rule.line_number(),
                    rule.comment(),
                    rule.owners()
                );
                let matching_rules = if all_matching {
                    engine
                        .matching_rules(&path)
                        .ok()
                        .map(|rules| rules.into_iter().map(RuleSummary::from).collect())
                } else {
                    None
                };
                LookupOutcome::Matched {
                    rule: RuleSummary::from(rule),
                    matching_rules,
                }
            }
            Ok(None) => LookupOutcome::Unmatched,
            Err(error) => LookupOutcome::Failed(error),
        };
        Self::new(path, outcome)
    }

    /// Owners of the winning rule, if a rule matched.
    pub fn owners(&self) -> Option<&[String]> {
        match &self.outcome {
            LookupOutcome::Matched { rule, .. } => Some(rule.owners.as_slice()),
            _ => None,
        }
    }

    /// Returns true if the path matched no rule or was malformed.
    pub fn is_failure(&self) -> bool {
        !matches!(self.outcome, LookupOutcome::Matched { .. })
    }

    /// Describes a failed lookup; `None` when a rule matched.
    pub fn failure_message(&self) -> Option<String> {
        match &self.outcome {
            LookupOutcome::Matched { .. } => None,
            LookupOutcome::Unmatched => Some(format!("No CODEOWNERS matched path {}", self.path)),
            LookupOutcome::Failed(error) => Some(format!("Failed to match {}: {}", self.path, error)),
        }
    }
}

/// Resolves every path concurrently, returning reports in input order.
pub async fn resolve_all<E>(
    engine: Arc<E>,
    paths: Vec<String>,
    all_matching: bool,
) -> Result<Vec<LookupReport>, JoinError>
where
    E: OwnershipEngine + 'static,
{
    if paths.is_empty() {
        return Ok(Vec::new());
    }

    let workers = std::thread::available_parallelism().map_or(1, |n| n.get());
    let chunk_size = paths.len().div_ceil(workers);
    debug!(
        "Resolving {} path(s) in chunks of {} across {} worker(s)",
        paths.len(),
        chunk_size,
        workers
    );

    let mut tasks = JoinSet::new();
    let mut remaining = paths;
    let mut index = 0;
    while !remaining.is_empty() {
        let rest = remaining.split_off(chunk_size.min(remaining.len()));
        let chunk = std::mem::replace(&mut remaining, rest);
        let engine = Arc::clone(&engine);
        tasks.spawn_blocking(move || {
            let reports: Vec<LookupReport> = chunk
                .into_iter()
                .map(|path| LookupReport::resolve(&*engine, path, all_matching))
                .collect();
            (index, reports)
        });
        index += 1;
    }

    let mut chunks: Vec<Option<Vec<LookupReport>>> = (0..index).map(|_| None).collect();
    while let Some(joined) = tasks.join_next().await {
        let (index, reports) = joined?;
        chunks[index] = Some(reports);
    }

    Ok(chunks.into_iter().flatten().flatten().collect())
}
