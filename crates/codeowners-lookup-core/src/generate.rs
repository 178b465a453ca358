//! Seeded generation of CODEOWNERS files and lookup paths.
//!
//! Used by the benchmarks and by tests that need realistic inputs at scale.
//! Generated files are built from AST nodes, so they always parse; spans on
//! those nodes are placeholders.

use crate::parse::{CodeownersFile, Line, Owner, Pattern, Span};
use rand::prelude::*;
use rand::rngs::StdRng;

/// Configuration for generating CODEOWNERS files.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Number of rule lines to generate.
    pub num_rules: usize,
    /// Number of section comment lines to generate.
    pub num_comments: usize,
    /// Maximum owners per rule.
    pub max_owners_per_rule: usize,
    /// Percentage of rules generated without owners.
    pub unowned_percent: u32,
    /// Seed for deterministic generation.
    pub seed: u64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            num_rules: 100,
            num_comments: 20,
            max_owners_per_rule: 3,
            unowned_percent: 5,
            seed: 42,
        }
    }
}

impl GeneratorConfig {
    /// Creates a config with `num_rules` rules and comments for ~20% of them.
    pub fn new(num_rules: usize) -> Self {
        Self {
            num_rules,
            num_comments: num_rules / 5,
            ..Default::default()
        }
    }

    /// ~10 rules.
    pub fn small() -> Self {
        Self::new(10)
    }

    /// ~100 rules.
    pub fn medium() -> Self {
        Self::new(100)
    }

    /// ~1000 rules.
    pub fn large() -> Self {
        Self::new(1_000)
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Sets the number of comments explicitly.
    pub fn with_comments(mut self, num_comments: usize) -> Self {
        self.num_comments = num_comments;
        self
    }

    /// Sets the maximum owners per rule (at least 1).
    pub fn with_max_owners(mut self, max: usize) -> Self {
        self.max_owners_per_rule = max.max(1);
        self
    }

    /// Sets the percentage of rules without owners, capped at 100.
    pub fn with_unowned_percent(mut self, percent: u32) -> Self {
        self.unowned_percent = percent.min(100);
        self
    }
}

mod vocabulary {
    pub const PATTERN_TEMPLATES: &[&str] = &[
        "*.{ext}",
        "**/*.{ext}",
        "/{dir}/",
        "/{dir}/**",
        "/{dir}/*.{ext}",
        "{dir}/",
        "/src/{dir}/",
        "/src/**/*.{ext}",
        "/{dir}/**/test_*.{ext}",
        "docs/**/*.md",
        "{dir}",
    ];

    pub const EXTENSIONS: &[&str] = &["rs", "py", "js", "ts", "go", "md", "yaml", "json", "toml"];
    pub const DIRECTORIES: &[&str] = &[
        "src", "lib", "tests", "docs", "config", "scripts", "api", "core",
    ];
    pub const FILE_STEMS: &[&str] = &["main", "lib", "mod", "index", "test_api", "README"];
    pub const USERNAMES: &[&str] = &["alice", "bob", "charlie", "dev", "maintainer", "reviewer"];
    pub const ORGS: &[&str] = &["acme", "github", "myorg"];
    pub const TEAMS: &[&str] = &["core", "platform", "frontend", "backend", "infra", "docs"];
    pub const SECTION_NAMES: &[&str] = &["Frontend", "Backend", "Infrastructure", "Documentation"];
}

/// Percentage of owners that are `@user` handles; teams take the next 30%,
/// emails the rest.
const WEIGHT_USER: u32 = 50;
const WEIGHT_TEAM: u32 = 30;

/// Chance (percent) of inserting a section comment before a rule.
const COMMENT_PROBABILITY: u32 = 20;

/// Chance (percent) of a rule carrying a trailing comment.
const TRAILING_COMMENT_PROBABILITY: u32 = 10;

fn placeholder_span() -> Span {
    Span::new(0, 0, 0, 0)
}

fn pick<'a>(rng: &mut StdRng, items: &[&'a str]) -> &'a str {
    items[rng.random_range(0..items.len())]
}

/// Generates a random CODEOWNERS AST.
pub fn generate_ast(config: &GeneratorConfig) -> CodeownersFile {
    use vocabulary::*;

    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut lines = Vec::with_capacity(config.num_rules + 2 * config.num_comments + 2);

    lines.push(Line::comment(
        " Generated CODEOWNERS fixture",
        placeholder_span(),
    ));
    lines.push(Line::blank(placeholder_span()));

    let mut comments_added = 0;
    for rule_idx in 0..config.num_rules {
        if comments_added < config.num_comments
            && rule_idx > 0
            && rng.random_ratio(COMMENT_PROBABILITY, 100)
        {
            lines.push(Line::blank(placeholder_span()));
            lines.push(Line::comment(
                format!(" {} section", pick(&mut rng, SECTION_NAMES)),
                placeholder_span(),
            ));
            comments_added += 1;
        }

        let pattern_text = pick(&mut rng, PATTERN_TEMPLATES)
            .replace("{ext}", pick(&mut rng, EXTENSIONS))
            .replace("{dir}", pick(&mut rng, DIRECTORIES));
        let pattern = Pattern::new(pattern_text, placeholder_span());

        let owners: Vec<Owner> = if rng.random_ratio(config.unowned_percent, 100) {
            Vec::new()
        } else {
            let count = rng.random_range(1..=config.max_owners_per_rule.max(1));
            (0..count).map(|_| generate_owner(&mut rng)).collect()
        };

        let comment = rng
            .random_ratio(TRAILING_COMMENT_PROBABILITY, 100)
            .then(|| format!("rule {}", rule_idx + 1));

        lines.push(Line::rule(pattern, owners, comment, placeholder_span()));
    }

    CodeownersFile::new(lines)
}

fn generate_owner(rng: &mut StdRng) -> Owner {
    use vocabulary::*;

    let roll = rng.random_range(0..100);
    let text = if roll < WEIGHT_USER {
        format!("@{}", pick(rng, USERNAMES))
    } else if roll < WEIGHT_USER + WEIGHT_TEAM {
        format!("@{}/{}", pick(rng, ORGS), pick(rng, TEAMS))
    } else {
        format!("{}@example.com", pick(rng, USERNAMES))
    };
    Owner::new(text, placeholder_span())
}

/// Generates a CODEOWNERS file as a string.
pub fn generate(config: &GeneratorConfig) -> String {
    generate_ast(config).to_string()
}

/// Generates `count` repository-relative file paths drawn from the same
/// vocabulary as the patterns, so lookups hit a realistic mix of rules.
pub fn generate_paths(count: usize, seed: u64) -> Vec<String> {
    use vocabulary::*;

    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            let depth = rng.random_range(0..4);
            let mut path: Vec<String> = (0..depth)
                .map(|_| pick(&mut rng, DIRECTORIES).to_string())
                .collect();
            path.push(format!(
                "{}.{}",
                pick(&mut rng, FILE_STEMS),
                pick(&mut rng, EXTENSIONS)
            ));
            path.join("/")
        })
        .collect()
}
