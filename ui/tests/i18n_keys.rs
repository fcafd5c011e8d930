//! Keeps the Fluent bundles and the `t!` call sites in step.
//!
//! Every key passed to `t!` under `src/` must exist in each locale, and every
//! locale must define exactly the keys the fallback (en-US) defines.

use std::collections::BTreeSet;
use std::path::Path;

const LOCALES: &[(&str, &str)] = &[
    ("en-US", include_str!("../i18n/en-US/mindcheck-ui.ftl")),
    ("es-ES", include_str!("../i18n/es-ES/mindcheck-ui.ftl")),
];

/// Message ids defined at the start of a line (`key = value`).
fn ftl_keys(src: &str) -> BTreeSet<String> {
    src.lines()
        .filter(|line| !line.starts_with(['#', ' ', '\t', '.']))
        .filter_map(|line| line.split_once('='))
        .map(|(key, _)| key.trim().to_string())
        .filter(|key| !key.is_empty())
        .collect()
}

/// Literal keys from `t!("...")` invocations in a source file.
fn t_keys(src: &str) -> Vec<String> {
    src.match_indices("t!(\"")
        // Skip `format!(`, `print!(` and friends.
        .filter(|(at, _)| {
            !src[..*at]
                .chars()
                .next_back()
                .is_some_and(|c| c.is_alphanumeric() || c == '_')
        })
        .filter_map(|(at, open)| {
            let rest = &src[at + open.len()..];
            rest.find('"').map(|end| rest[..end].to_string())
        })
        .collect()
}

fn collect_used(dir: &Path, used: &mut BTreeSet<String>) {
    let entries = std::fs::read_dir(dir).unwrap_or_else(|err| panic!("{}: {err}", dir.display()));
    for entry in entries {
        let path = entry.unwrap().path();
        if path.is_dir() {
            collect_used(&path, used);
        } else if path.extension().is_some_and(|ext| ext == "rs") {
            let src = std::fs::read_to_string(&path).unwrap();
            used.extend(t_keys(&src));
        }
    }
}

fn used_keys() -> BTreeSet<String> {
    let mut used = BTreeSet::new();
    collect_used(&Path::new(env!("CARGO_MANIFEST_DIR")).join("src"), &mut used);
    used
}

#[test]
fn every_t_key_is_translated() {
    let used = used_keys();
    assert!(used.contains("results-title"), "scanner found no t! keys");

    for (locale, src) in LOCALES {
        let defined = ftl_keys(src);
        let missing: Vec<_> = used.difference(&defined).collect();
        assert!(missing.is_empty(), "{locale} lacks keys used in src/: {missing:?}");
    }
}

#[test]
fn locales_define_the_same_keys() {
    let fallback = ftl_keys(LOCALES[0].1);
    for (locale, src) in &LOCALES[1..] {
        let keys = ftl_keys(src);
        assert_eq!(keys, fallback, "{locale} diverges from en-US");
    }
}

#[test]
fn no_key_is_defined_twice() {
    for (locale, src) in LOCALES {
        let mut seen = BTreeSet::new();
        for line in src.lines().filter(|line| !line.starts_with(['#', ' ', '\t', '.'])) {
            if let Some((key, _)) = line.split_once('=') {
                assert!(seen.insert(key.trim()), "{locale} defines {} twice", key.trim());
            }
        }
    }
}

#[test]
fn scanner_reads_keys_with_arguments() {
    let src = r#"let a = t!("trend-meta", count = 2); let b = crate::t!("results-title"); format!("x");"#;
    assert_eq!(t_keys(src), vec!["trend-meta", "results-title"]);
}
