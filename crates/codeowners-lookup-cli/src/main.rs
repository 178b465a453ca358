//! CODEOWNERS Lookup CLI
//!
//! A command-line tool that reports who owns repository paths according to
//! the repository's CODEOWNERS file.

use clap::Parser;
use std::io::{self, IsTerminal, Write};
use std::process::ExitCode as StdExitCode;
use std::sync::Arc;
use tracing::{Level, debug, error, info};
use tracing_subscriber::EnvFilter;

mod cli;

use cli::Args;
use cli::config::{ExitCode, LookupTargets, ValidatedConfig};
use cli::lookup::{LookupReport, resolve_all};
use cli::output::{HumanOutput, write_human, write_json};
use codeowners_lookup_core::source::{LoadError, load_engine};
use codeowners_lookup_core::walk::{WalkConfig, list_files};
use codeowners_lookup_core::{OwnershipEngine, Ruleset};

#[tokio::main]
async fn main() -> StdExitCode {
    let args = Args::parse();

    init_tracing(args.verbose, args.json);

    let exit_code = run(args).await;

    StdExitCode::from(i32::from(exit_code) as u8)
}

/// Initialize tracing based on verbosity level.
fn init_tracing(verbosity: u8, json_output: bool) {
    // Logs would interleave with the JSON document
    if json_output {
        return;
    }

    let level = match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    let mut filter = EnvFilter::from_default_env().add_directive(level.into());
    for quiet in ["globset=warn", "ignore=warn"] {
        if let Ok(directive) = quiet.parse() {
            filter = filter.add_directive(directive);
        }
    }

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .init();
}

/// Run the lookup with the given arguments.
async fn run(args: Args) -> ExitCode {
    let config = match ValidatedConfig::from_args(&args) {
        Ok(config) => config,
        Err(e) => {
            let use_colors = !args.json && io::stderr().is_terminal();
            write_error(&e.to_string(), use_colors);
            return ExitCode::StartupFailure;
        }
    };

    let use_colors = !config.json_output && io::stdout().is_terminal();

    debug!("Validated configuration: {:?}", config);
    info!("Repository path: {}", config.repo_path.display());
    info!("CODEOWNERS file: {}", config.codeowners_path.display());

    let reports = match lookup::<Ruleset>(&config).await {
        Ok(reports) => reports,
        Err(message) => {
            write_error(&message, !config.json_output && io::stderr().is_terminal());
            return ExitCode::StartupFailure;
        }
    };

    let mut stdout = io::stdout().lock();
    let written = if config.json_output {
        write_json(&mut stdout, &reports)
    } else {
        write_human(&mut stdout, &reports, use_colors)
    };
    if let Err(e) = written {
        error!("Failed to write output: {}", e);
        return ExitCode::StartupFailure;
    }

    config.exit_code_for_reports(&reports)
}

/// Loads the engine, collects the paths to resolve and resolves them.
async fn lookup<E>(config: &ValidatedConfig) -> Result<Vec<LookupReport>, String>
where
    E: OwnershipEngine + 'static,
{
    let engine: E = load_engine(&config.codeowners_path).map_err(|e| match &e {
        LoadError::Parse { source, .. } => format!("{}\n  {}", e, source.raw()),
        _ => e.to_string(),
    })?;

    let paths = match &config.targets {
        LookupTargets::Paths(paths) => paths.clone(),
        LookupTargets::AllFiles => list_files(&config.repo_path, &WalkConfig::default()),
    };
    info!("Resolving {} path(s)", paths.len());

    resolve_all(Arc::new(engine), paths, config.all_matching_rules)
        .await
        .map_err(|e| format!("lookup task failed: {}", e))
}

/// Write an error message to stderr.
fn write_error(message: &str, use_colors: bool) {
    let mut stderr = io::stderr().lock();
    let _ = HumanOutput::new(&mut stderr, use_colors).write_error(message);
    let _ = stderr.flush();
}
