//! Locating and loading CODEOWNERS files from disk.

use crate::engine::OwnershipEngine;
use crate::matching::Ruleset;
use crate::parse::ParseError;
use log::{debug, info};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Locations searched for a CODEOWNERS file, relative to the repository root.
pub const CODEOWNERS_LOCATIONS: [&str; 3] = [".github/CODEOWNERS", "CODEOWNERS", "docs/CODEOWNERS"];

/// Errors raised while loading a CODEOWNERS file into an engine.
#[derive(Debug, Error)]
pub enum LoadError {
    /// No CODEOWNERS file exists in any of the standard locations.
    #[error("no CODEOWNERS file found in {}", repo.display())]
    NotFound {
        /// The repository root that was searched.
        repo: PathBuf,
    },

    /// The file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        /// The file that was read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The file was read but could not be parsed.
    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        /// The file that was parsed.
        path: PathBuf,
        /// The first parse error.
        #[source]
        source: ParseError,
    },
}

/// Finds the CODEOWNERS file in a repository.
///
/// Searches in the following locations (in order):
/// 1. `.github/CODEOWNERS`
/// 2. `CODEOWNERS`
/// 3. `docs/CODEOWNERS`
///
/// Returns `Some(path)` if found, `None` otherwise.
pub fn find_codeowners_file(repo_path: &Path) -> Option<PathBuf> {
    CODEOWNERS_LOCATIONS
        .iter()
        .map(|location| repo_path.join(location))
        .find(|path| path.is_file())
}

/// Reads and parses the CODEOWNERS file at `path` into any engine.
pub fn load_engine<E: OwnershipEngine>(path: &Path) -> Result<E, LoadError> {
    debug!("Reading CODEOWNERS file {:?}", path);
    let content = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let engine = E::parse(&content).map_err(|source| LoadError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    info!("Loaded {} rules from {:?}", engine.rule_count(), path);
    Ok(engine)
}

/// Reads and parses the CODEOWNERS file at `path` into a [`Ruleset`].
pub fn load_ruleset(path: &Path) -> Result<Ruleset, LoadError> {
    load_engine(path)
}

/// Discovers and loads the CODEOWNERS file of the repository at `repo_path`.
pub fn discover_engine<E: OwnershipEngine>(repo_path: &Path) -> Result<(PathBuf, E), LoadError> {
    let path = find_codeowners_file(repo_path).ok_or_else(|| LoadError::NotFound {
        repo: repo_path.to_path_buf(),
    })?;
    let engine = load_engine(&path)?;
    Ok((path, engine))
}
