//! Benchmark fixtures, generated at runtime and cached for the whole run.
//!
//! All generation is deterministic.

use codeowners_lookup_core::Ruleset;
use codeowners_lookup_core::generate::{GeneratorConfig, generate, generate_paths};
use std::sync::LazyLock;

static SMALL: LazyLock<String> = LazyLock::new(|| generate(&GeneratorConfig::small()));
static MEDIUM: LazyLock<String> = LazyLock::new(|| generate(&GeneratorConfig::medium()));
static LARGE: LazyLock<String> = LazyLock::new(|| generate(&GeneratorConfig::large()));

/// Paths used for lookup benchmarks.
static PATHS: LazyLock<Vec<String>> = LazyLock::new(|| generate_paths(1_000, 11));

/// CODEOWNERS texts by name.
pub fn fixtures() -> &'static [(&'static str, &'static str)] {
    static FIXTURES: LazyLock<Vec<(&'static str, &'static str)>> = LazyLock::new(|| {
        vec![
            ("small", SMALL.as_str()),
            ("medium", MEDIUM.as_str()),
            ("large", LARGE.as_str()),
        ]
    });
    FIXTURES.as_slice()
}

/// Compiled rulesets by name.
pub fn rulesets() -> &'static [(&'static str, Ruleset)] {
    static RULESETS: LazyLock<Vec<(&'static str, Ruleset)>> = LazyLock::new(|| {
        fixtures()
            .iter()
            .map(|(name, content)| {
                let ruleset = Ruleset::parse(content).expect("generated fixture should parse");
                (*name, ruleset)
            })
            .collect()
    });
    RULESETS.as_slice()
}

/// Lookup paths shared by every lookup benchmark.
pub fn paths() -> &'static [String] {
    PATHS.as_slice()
}
