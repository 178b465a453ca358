//! Repository file listing for whole-repo ownership reports.

use ignore::WalkBuilder;
use log::{debug, trace};
use std::path::Path;

/// Configuration for file walking behavior.
#[derive(Debug, Clone)]
pub struct WalkConfig {
    /// Whether to include hidden files and directories (starting with `.`).
    /// The `.git` directory is always skipped.
    pub include_hidden: bool,
    /// Whether to respect `.gitignore` rules (only works in git repos).
    pub respect_gitignore: bool,
}

impl Default for WalkConfig {
    fn default() -> Self {
        Self {
            include_hidden: true,
            respect_gitignore: true,
        }
    }
}

impl WalkConfig {
    /// Creates a new config with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether to include hidden files.
    pub fn with_hidden(mut self, include: bool) -> Self {
        self.include_hidden = include;
        self
    }

    /// Sets whether to respect .gitignore rules.
    pub fn with_gitignore(mut self, respect: bool) -> Self {
        self.respect_gitignore = respect;
        self
    }
}

/// Lists the files in a repository.
///
/// Returns sorted paths relative to `repo_path` with forward slashes, ready
/// to be passed to a lookup.
pub fn list_files(repo_path: &Path, config: &WalkConfig) -> Vec<String> {
    debug!(
        "Listing files in {:?} (hidden={}, gitignore={})",
        repo_path, config.include_hidden, config.respect_gitignore
    );

    let walker = WalkBuilder::new(repo_path)
        .hidden(!config.include_hidden)
        .ignore(false)
        .git_ignore(config.respect_gitignore)
        .git_global(config.respect_gitignore)
        .git_exclude(config.respect_gitignore)
        .require_git(false)
        .follow_links(false)
        .filter_entry(|entry| entry.file_name() != ".git")
        .build();

    let mut files: Vec<String> = walker
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_some_and(|ft| ft.is_file()))
        .filter_map(|entry| {
            let relative = entry.path().strip_prefix(repo_path).ok()?;
            Some(relative.to_str()?.replace('\\', "/"))
        })
        .collect();
    files.sort();

    debug!("Found {} files", files.len());
    trace!("Files: {:?}", files);
    files
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::{self, File};
    use tempfile::TempDir;

    fn setup_test_dir() -> TempDir {
        let dir = TempDir::new().unwrap();

        fs::create_dir_all(dir.path().join("src")).unwrap();
        File::create(dir.path().join("src/main.rs")).unwrap();
        File::create(dir.path().join("visible.txt")).unwrap();

        fs::create_dir_all(dir.path().join(".github")).unwrap();
        File::create(dir.path().join(".github/CODEOWNERS")).unwrap();

        fs::create_dir_all(dir.path().join(".git")).unwrap();
        File::create(dir.path().join(".git/HEAD")).unwrap();

        fs::create_dir_all(dir.path().join("target")).unwrap();
        File::create(dir.path().join("target/out.bin")).unwrap();
        fs::write(dir.path().join(".gitignore"), "target/\n").unwrap();

        dir
    }

    #[test]
    fn default_lists_hidden_and_honors_gitignore() {
        let dir = setup_test_dir();
        let files = list_files(dir.path(), &WalkConfig::default());

        assert_eq!(
            files,
            vec![
                ".github/CODEOWNERS".to_string(),
                ".gitignore".to_string(),
                "src/main.rs".to_string(),
                "visible.txt".to_string(),
            ]
        );
    }

    #[test]
    fn excluding_hidden_files() {
        let dir = setup_test_dir();
        let files = list_files(dir.path(), &WalkConfig::new().with_hidden(false));

        assert!(files.contains(&"src/main.rs".to_string()));
        assert!(!files.iter().any(|f| f.starts_with('.')));
    }

    #[test]
    fn ignoring_gitignore() {
        let dir = setup_test_dir();
        let files = list_files(dir.path(), &WalkConfig::new().with_gitignore(false));

        assert!(files.contains(&"target/out.bin".to_string()));
        assert!(!files.iter().any(|f| f.starts_with(".git/")));
    }

    #[test]
    fn directories_are_not_listed() {
        let dir = setup_test_dir();
        let files = list_files(dir.path(), &WalkConfig::default());
        assert!(!files.contains(&"src".to_string()));
    }
}
