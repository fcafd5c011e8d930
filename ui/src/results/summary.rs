use dioxus::prelude::*;

use crate::{
    assessment::{AssessmentResult, ScoreTier, CATEGORY_MAX, OVERALL_MAX},
    core::format,
};

#[component]
pub fn ResultsSummary(result: AssessmentResult) -> Element {
    let tier = result.tier();
    let overall = format::format_out_of(result.overall_score, OVERALL_MAX);

    let categories: Vec<(String, String, ScoreTier)> = result
        .scores
        .iter()
        .map(|(name, score)| {
            (
                format::humanize_key(name),
                format::format_out_of(*score, CATEGORY_MAX),
                // Category bands reuse the overall thresholds on a 0–10 scale.
                ScoreTier::for_score(score * OVERALL_MAX / CATEGORY_MAX),
            )
        })
        .collect();

    let metrics: Vec<(String, String)> = result
        .metrics
        .iter()
        .map(|(key, value)| (format::humanize_key(key), format::format_score(*value)))
        .collect();

    let insights = result.insights.trim().to_string();

    rsx! {
        section { class: "results-card results-summary",
            div { class: "results-card__header",
                h2 { {crate::t!("summary-title")} }
            }

            div { class: "results-highlights",
                div { class: "results-highlight results-highlight--overall {tier.css_class()}",
                    span { class: "results-highlight__label", {crate::t!("summary-overall")} }
                    strong {
                        class: "results-highlight__value",
                        style: "color: {tier.color()}",
                        "{overall}"
                    }
                    span { class: "results-highlight__meta", "{tier.label()}" }
                }

                for (name, score, band) in categories.into_iter() {
                    div { class: "results-highlight {band.css_class()}",
                        span { class: "results-highlight__label", "{name}" }
                        strong { class: "results-highlight__value", "{score}" }
                    }
                }
            }

            div { class: "results-summary__insights",
                h3 { {crate::t!("summary-insights")} }
                if insights.is_empty() {
                    p { class: "results-card__placeholder", {crate::t!("summary-no-insights")} }
                } else {
                    p { "{insights}" }
                }
            }

            if !metrics.is_empty() {
                div { class: "results-summary__metrics",
                    h3 { {crate::t!("summary-metrics")} }
                    ul { class: "results-detail__grid",
                        for (label, value) in metrics.into_iter() {
                            li {
                                span { class: "results-detail__metric-label", "{label}" }
                                span { class: "results-detail__metric-value", "{value}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
