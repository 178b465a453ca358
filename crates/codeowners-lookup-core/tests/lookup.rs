//! End-to-end parse and lookup behavior through the public API.

use codeowners_lookup_core::{MatchError, OwnershipEngine, ParseError, Ruleset, parse_ruleset};
use std::sync::Arc;

const EXAMPLE: &str = "* @default-owner\n/docs/ @doc-team\n*.go @go-team @go-team2\n";

fn owners(ruleset: &Ruleset, path: &str) -> Option<Vec<String>> {
    ruleset
        .match_path(path)
        .expect("well-formed path")
        .map(|rule| rule.owners().to_vec())
}

#[test]
fn three_rule_example() {
    let ruleset = parse_ruleset(EXAMPLE).unwrap();

    assert_eq!(owners(&ruleset, "docs/x.md"), Some(vec!["@doc-team".into()]));
    assert_eq!(
        owners(&ruleset, "src/main.go"),
        Some(vec!["@go-team".into(), "@go-team2".into()])
    );
    assert_eq!(
        owners(&ruleset, "random.txt"),
        Some(vec!["@default-owner".into()])
    );
}

#[test]
fn later_go_rule_beats_docs_directory() {
    let ruleset = parse_ruleset(EXAMPLE).unwrap();
    let rule = ruleset.match_path("/docs/tool.go").unwrap().unwrap();
    assert_eq!(rule.line_number(), 3);
}

#[test]
fn realistic_file_with_comments_and_unowned_paths() {
    let input = r#"
# Global owners
*       @org/everyone

# Frontend
/web/   @org/frontend   # UI code
*.css   @designer

# Generated code has no owner
/web/generated/

/build/logs/ @ops
/scripts/*   @ops @release
"#;
    let ruleset = parse_ruleset(input).unwrap();
    assert_eq!(ruleset.len(), 6);

    let rule = ruleset.match_path("web/app/main.ts").unwrap().unwrap();
    assert_eq!(rule.owners(), ["@org/frontend".to_string()]);
    assert_eq!(rule.comment(), Some("UI code"));

    assert_eq!(owners(&ruleset, "web/theme.css"), Some(vec!["@designer".into()]));
    assert_eq!(owners(&ruleset, "web/generated/api.ts"), Some(vec![]));
    assert_eq!(owners(&ruleset, "build/logs/today.log"), Some(vec!["@ops".into()]));
    assert_eq!(
        owners(&ruleset, "scripts/deploy.sh"),
        Some(vec!["@ops".into(), "@release".into()])
    );
    assert_eq!(
        owners(&ruleset, "scripts/nested/deploy.sh"),
        Some(vec!["@org/everyone".into()])
    );
}

#[test]
fn no_match_is_not_an_error() {
    let ruleset = parse_ruleset("/src/ @dev\n").unwrap();
    assert!(matches!(ruleset.match_path("README.md"), Ok(None)));
}

#[test]
fn malformed_path_does_not_poison_later_lookups() {
    let ruleset = parse_ruleset(EXAMPLE).unwrap();
    assert!(matches!(
        ruleset.match_path(""),
        Err(MatchError::EmptyPath { .. })
    ));
    assert_eq!(owners(&ruleset, "docs/x.md"), Some(vec!["@doc-team".into()]));
}

#[test]
fn parse_fails_fast_on_first_bad_line() {
    let input = "* @a\n/docs/ @b\n/src//oops @c\n!negated @d\n";
    let error = parse_ruleset(input).unwrap_err();
    assert_eq!(error.line(), 3);
    assert_eq!(error.raw(), "/src//oops @c");
    assert!(matches!(error, ParseError::InvalidPattern { .. }));
}

#[test]
fn concurrent_lookups_match_sequential_results() {
    let ruleset = Arc::new(parse_ruleset(EXAMPLE).unwrap());
    let paths: Vec<String> = (0..64)
        .map(|i| match i % 4 {
            0 => format!("docs/page{i}.md"),
            1 => format!("cmd/tool{i}/main.go"),
            2 => format!("notes{i}.txt"),
            _ => format!("docs/gen{i}.go"),
        })
        .collect();

    let sequential: Vec<_> = paths.iter().map(|p| owners(&ruleset, p)).collect();

    let concurrent: Vec<_> = std::thread::scope(|scope| {
        let handles: Vec<_> = paths
            .iter()
            .map(|path| {
                let ruleset = Arc::clone(&ruleset);
                scope.spawn(move || owners(&ruleset, path))
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert_eq!(concurrent, sequential);
}

#[test]
fn engine_trait_is_usable_generically() {
    fn lookup_line<E: OwnershipEngine>(engine: &E, path: &str) -> Option<usize> {
        engine
            .match_path(path)
            .ok()
            .flatten()
            .map(|rule| rule.line_number())
    }

    let engine = <Ruleset as OwnershipEngine>::parse(EXAMPLE).unwrap();
    assert_eq!(lookup_line(&engine, "a/b.go"), Some(3));
    assert_eq!(lookup_line(&engine, "docs/a.md"), Some(2));
    assert_eq!(lookup_line(&engine, ""), None);
}

#[test]
fn brackets_and_braces_are_literal() {
    let ruleset = parse_ruleset("* @default\n/app/[slug]/ @web\n/cfg/file{1}.txt @cfg\n").unwrap();

    assert_eq!(owners(&ruleset, "app/[slug]/page.tsx"), Some(vec!["@web".into()]));
    assert_eq!(owners(&ruleset, "app/s/page.tsx"), Some(vec!["@default".into()]));
    assert_eq!(owners(&ruleset, "cfg/file{1}.txt"), Some(vec!["@cfg".into()]));
    assert_eq!(owners(&ruleset, "cfg/file1.txt"), Some(vec!["@default".into()]));
    assert!(parse_ruleset("/pages/[id.tsx @web\n").is_ok());
}
