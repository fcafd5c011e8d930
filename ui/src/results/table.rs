use dioxus::prelude::*;

use crate::{assessment::ResponseEntry, core::format};

#[component]
pub fn ResponseTable(entries: Vec<ResponseEntry>) -> Element {
    rsx! {
        section { class: "results-card results-table",
            div { class: "results-card__header",
                h2 { {crate::t!("table-title")} }
                if !entries.is_empty() {
                    span { class: "results-card__meta", "{entries.len()}" }
                }
            }

            if entries.is_empty() {
                p { class: "results-card__placeholder", {crate::t!("table-empty")} }
            } else {
                table { class: "results-table__grid",
                    thead {
                        tr {
                            th { "#" }
                            th { {crate::t!("table-col-question")} }
                            th { {crate::t!("table-col-category")} }
                            th { {crate::t!("table-col-answer")} }
                            th { {crate::t!("table-col-score")} }
                        }
                    }
                    tbody {
                        for entry in entries.into_iter() {
                            {render_row(entry)}
                        }
                    }
                }
            }
        }
    }
}

fn render_row(entry: ResponseEntry) -> Element {
    let score = entry
        .score
        .map(|value| format::format_score(f64::from(value)))
        .unwrap_or_else(|| "—".to_string());

    rsx! {
        tr { key: "{entry.question_id}", class: "results-table__row",
            td { class: "results-table__id", "{entry.question_id}" }
            td { class: "results-table__question", "{entry.question}" }
            td { class: "results-table__category", "{format::humanize_key(&entry.category)}" }
            td { class: "results-table__answer", "{entry.label}" }
            td { class: "results-table__score", "{score}" }
        }
    }
}
