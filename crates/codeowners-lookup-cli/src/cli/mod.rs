//! CLI module for the CODEOWNERS lookup tool.
//!
//! Command-line arguments are parsed with Clap, with environment variable
//! fallbacks for the repository settings.

pub mod config;
pub mod lookup;
pub mod output;

use clap::Parser;
use std::path::PathBuf;

/// CODEOWNERS lookup - resolves the owners of repository paths.
///
/// Loads the repository's CODEOWNERS file once and reports, for each path,
/// the owners of the last matching rule. Supports both human-readable and
/// JSON output formats.
#[derive(Parser, Debug)]
#[command(name = "codeowners-lookup")]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Paths to look up, relative to the repository root.
    pub paths: Vec<String>,

    /// Path to the repository root.
    #[arg(long, env = "REPOSITORY_PATH", default_value = ".")]
    pub repository_path: PathBuf,

    /// CODEOWNERS file, relative to the repository root.
    /// Discovered in .github/, the root, or docs/ when not given.
    #[arg(long, env = "CODEOWNERS_PATH")]
    pub codeowners_file: Option<PathBuf>,

    /// Look up every file in the repository (honors .gitignore).
    #[arg(long, conflicts_with = "paths")]
    pub all_files: bool,

    /// Also report every rule that matches each path, not just the winner.
    #[arg(long)]
    pub all_matching_rules: bool,

    /// Output lookup results as JSON instead of human-readable format.
    #[arg(long, short = 'j')]
    pub json: bool,

    /// Increase verbosity level (-v for info, -vv for debug, -vvv for trace).
    #[arg(long, short = 'v', action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positional_paths() {
        let args = Args::parse_from(["codeowners-lookup", "src/main.rs", "docs/x.md"]);
        assert_eq!(args.paths, vec!["src/main.rs", "docs/x.md"]);
        assert!(!args.all_files);
    }

    #[test]
    fn test_all_files_flag() {
        let args = Args::parse_from(["codeowners-lookup", "--all-files"]);
        assert!(args.all_files);
        assert!(args.paths.is_empty());
    }

    #[test]
    fn test_all_files_conflicts_with_paths() {
        let result = Args::try_parse_from(["codeowners-lookup", "--all-files", "src/main.rs"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_codeowners_file_flag() {
        let args = Args::parse_from([
            "codeowners-lookup",
            "--codeowners-file",
            "config/OWNERS",
            "a",
        ]);
        assert_eq!(args.codeowners_file, Some(PathBuf::from("config/OWNERS")));
    }

    #[test]
    fn test_json_output_flag() {
        let args = Args::parse_from(["codeowners-lookup", "--json", "a"]);
        assert!(args.json);

        let args = Args::parse_from(["codeowners-lookup", "-j", "a"]);
        assert!(args.json);
    }

    #[test]
    fn test_verbose_flag() {
        let args = Args::parse_from(["codeowners-lookup", "a"]);
        assert_eq!(args.verbose, 0);

        let args = Args::parse_from(["codeowners-lookup", "-vv", "a"]);
        assert_eq!(args.verbose, 2);
    }

    #[test]
    fn test_default_repository_path() {
        let args = Args::parse_from(["codeowners-lookup", "a"]);
        assert_eq!(args.repository_path, PathBuf::from("."));
        assert!(!args.all_matching_rules);
    }
}
