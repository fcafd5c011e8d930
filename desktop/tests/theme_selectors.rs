#![cfg(test)]
/*!
Theme selector lint for the desktop build.

Purpose:
- Ensure that critical CSS selectors required by the desktop UI (the results page and
  its score tiers) remain present in the unified shared theme: ui/assets/theme/main.css
- Fail fast if a refactor accidentally drops or renames core classes, preventing a
  silent styling regression in packaged (embedded) desktop builds.

How it works:
- We compile-time embed the unified theme using `include_str!` pointing to the shared
  `ui/` location (mirrors the constant in `desktop/src/main.rs`).
- We assert presence of a curated set of selectors / tokens.
- If you intentionally rename or remove a selector:
    1. Update the Dioxus component markup.
    2. Adjust this test's REQUIRED_SELECTORS accordingly.

Extending:
- Add new selectors to REQUIRED_SELECTORS when introducing structural CSS relied
  upon by Rust components (charts, tables, export panel).
*/

const THEME_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

/// Core selectors / tokens that must exist in the shared theme for desktop.
const REQUIRED_SELECTORS: &[&str] = &[
    // Global / layout
    ":root",
    "body {",
    ".page {",
    // Buttons & shared UI
    ".button {",
    ".button--primary",
    ".button--accent",
    ".button--ghost",
    // Results container & cards
    ".results__header",
    ".results__actions",
    ".results-card",
    ".results-card__header",
    ".results-card__meta",
    ".results-card__placeholder",
    // Summary
    ".results-highlights",
    ".results-highlight",
    ".results-highlight__value",
    ".results-detail__grid",
    ".results-detail__metric-label",
    // Trend chart
    ".results-chart__canvas",
    ".results-chart__title",
    ".results-chart__line",
    ".results-chart__marker",
    // Response table
    ".results-table__grid",
    ".results-table__row",
    ".results-table__answer",
    // Export panel
    ".results-export__actions",
    // Media query token (sanity check responsive block exists)
    "@media (max-width: 720px)",
];

/// Modifier classes emitted by `ScoreTier::css_class`.
const SCORE_TIER_CLASSES: &[&str] = &[
    ".score--excellent",
    ".score--good",
    ".score--fair",
    ".score--attention",
];

#[test]
fn unified_theme_contains_required_selectors() {
    let mut missing = Vec::new();
    for sel in REQUIRED_SELECTORS {
        if !THEME_CSS.contains(sel) {
            missing.push(*sel);
        }
    }

    if !missing.is_empty() {
        panic!(
            "Missing {} required CSS selectors/tokens in unified theme:\n{}",
            missing.len(),
            missing.join("\n")
        );
    }
}

#[test]
fn unified_theme_not_trivially_empty() {
    let non_ws_len = THEME_CSS.chars().filter(|c| !c.is_whitespace()).count();
    assert!(
        non_ws_len > 4_000,
        "Embedded theme appears unexpectedly small ({} non-whitespace chars) - \
         did the file get truncated or path change?",
        non_ws_len
    );
}

#[test]
fn score_tier_classes_are_all_styled() {
    let missing: Vec<_> = SCORE_TIER_CLASSES
        .iter()
        .filter(|class| !THEME_CSS.contains(*class))
        .collect();
    assert!(missing.is_empty(), "Score tier classes missing: {missing:?}");
}
