//! Configuration handling for the CLI.
//!
//! This module checks CLI arguments and resolves the repository and
//! CODEOWNERS file locations.

use crate::cli::Args;
use crate::cli::lookup::LookupReport;
use codeowners_lookup_core::source::{CODEOWNERS_LOCATIONS, find_codeowners_file};
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Missing required configuration.
    #[error("missing required configuration: {0}")]
    MissingRequired(String),

    /// Invalid configuration value.
    #[error("invalid configuration: {0}")]
    Invalid(String),

    /// No CODEOWNERS file could be located.
    #[error("CODEOWNERS file not found: {0}")]
    CodeownersNotFound(String),
}

/// Application exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Every path resolved to a rule.
    Success = 0,
    /// Application startup failed (wrong configuration, unreadable or
    /// unparsable CODEOWNERS file, or internal error).
    StartupFailure = 1,
    /// At least one path matched no rule or was malformed.
    LookupFailed = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> Self {
        code as i32
    }
}

/// Which paths to look up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupTargets {
    /// Paths given on the command line.
    Paths(Vec<String>),
    /// Every file in the repository.
    AllFiles,
}

/// Validated and processed configuration for running lookups.
#[derive(Debug)]
pub struct ValidatedConfig {
    /// Path to the repository root.
    pub repo_path: PathBuf,
    /// Path to the CODEOWNERS file.
    pub codeowners_path: PathBuf,
    /// Paths to resolve.
    pub targets: LookupTargets,
    /// Whether to report every matching rule.
    pub all_matching_rules: bool,
    /// Whether to output JSON.
    pub json_output: bool,
}

impl ValidatedConfig {
    /// Creates a validated configuration from CLI arguments.
    pub fn from_args(args: &Args) -> Result<Self, ConfigError> {
        let repo_path = args.repository_path.canonicalize().map_err(|e| {
            ConfigError::Invalid(format!(
                "repository path '{}' is invalid: {}",
                args.repository_path.display(),
                e
            ))
        })?;

        let codeowners_path = match &args.codeowners_file {
            Some(relative) => {
                let path = repo_path.join(relative);
                if !path.is_file() {
                    return Err(ConfigError::CodeownersNotFound(format!(
                        "'{}' does not exist",
                        path.display()
                    )));
                }
                path
            }
            None => find_codeowners_file(&repo_path).ok_or_else(|| {
                ConfigError::CodeownersNotFound(format!(
                    "no CODEOWNERS file in repository '{}'. Searched in: {}",
                    repo_path.display(),
                    CODEOWNERS_LOCATIONS.join(", ")
                ))
            })?,
        };

        let targets = if args.all_files {
            LookupTargets::AllFiles
        } else if args.paths.is_empty() {
            return Err(ConfigError::MissingRequired(
                "at least one path, or --all-files".to_string(),
            ));
        } else {
            LookupTargets::Paths(args.paths.clone())
        };

        Ok(Self {
            repo_path,
            codeowners_path,
            targets,
            all_matching_rules: args.all_matching_rules,
            json_output: args.json,
        })
    }

    /// Determines the exit code based on lookup results.
    pub fn exit_code_for_reports(&self, reports: &[LookupReport]) -> ExitCode {
        if reports.iter().any(LookupReport::is_failure) {
            ExitCode::LookupFailed
        } else {
            ExitCode::Success
        }
    }
}
