use std::fmt::Write as _;

use dioxus::prelude::*;

use crate::{
    assessment::{
        answer_label, answer_score, find_question, AssessmentResult, ResponseMap, CATEGORY_MAX,
        OVERALL_MAX, UNKNOWN_QUESTION,
    },
    core::format,
};

#[derive(Clone, Debug, PartialEq)]
enum ExportStatus {
    Idle,
    Working(String),
    Done(String),
    Error(String),
}

#[component]
pub fn ResultsExportPanel(result: AssessmentResult, responses: ResponseMap) -> Element {
    let status = use_signal(|| ExportStatus::Idle);
    let busy = use_signal(|| false);

    let feedback = match &status() {
        ExportStatus::Idle => None,
        ExportStatus::Working(label) => {
            Some(("results-card__meta".to_string(), format!("{label}…")))
        }
        ExportStatus::Done(message) => Some((
            "results-card__meta results-card__meta--success".to_string(),
            format!("✅ {message}"),
        )),
        ExportStatus::Error(err) => Some((
            "results-card__meta results-card__meta--error".to_string(),
            format!("⚠️ {err}"),
        )),
    };

    let download_handler = {
        let mut status_signal = status;
        let mut busy_signal = busy;
        move |_| {
            if busy_signal() {
                return;
            }
            busy_signal.set(true);
            status_signal.set(ExportStatus::Working(crate::t!("export-working")));

            let text = build_export_text(&result, &responses);
            spawn(async move {
                match perform_text_export(text).await {
                    Ok(message) => {
                        tracing::info!("{message}");
                        status_signal.set(ExportStatus::Done(message));
                    }
                    Err(err) => {
                        tracing::warn!("export failed: {err}");
                        status_signal.set(ExportStatus::Error(err));
                    }
                }
                busy_signal.set(false);
            });
        }
    };

    rsx! {
        section { class: "results-card results-export",
            div { class: "results-card__header",
                h2 { {crate::t!("export-title")} }
            }

            p { {crate::t!("export-intro")} }

            div { class: "results-export__actions",
                button {
                    r#type: "button",
                    class: "button button--primary",
                    disabled: busy(),
                    onclick: download_handler,
                    {crate::t!("export-download")}
                }
            }

            if let Some((class_name, message)) = feedback {
                p { class: "{class_name}", "{message}" }
            }
        }
    }
}

/// Plain-text report of a result and its answers.
///
/// Depends only on its inputs: answers are listed in response order and
/// category scores by name.
pub fn build_export_text(result: &AssessmentResult, responses: &ResponseMap) -> String {
    let mut out = String::new();

    out.push_str("Assessment Results\n");
    out.push_str("==================\n\n");
    let _ = writeln!(
        out,
        "Overall Score: {}",
        format::format_out_of(result.overall_score, OVERALL_MAX)
    );

    if !result.scores.is_empty() {
        out.push_str("\nCategory Scores:\n");
        for (category, score) in &result.scores {
            let _ = writeln!(
                out,
                "- {}: {}",
                format::humanize_key(category),
                format::format_out_of(*score, CATEGORY_MAX)
            );
        }
    }

    out.push_str("\nInsights:\n");
    let insights = result.insights.trim();
    if !insights.is_empty() {
        out.push_str(insights);
        out.push('\n');
    }

    out.push_str("\nResponses:\n");
    for (id, code) in responses.iter() {
        let question = find_question(id)
            .map(|q| q.text)
            .unwrap_or(UNKNOWN_QUESTION);
        let answer = match answer_score(code.as_str()) {
            Some(_) => format!("{} ({code})", answer_label(code.as_str())),
            None => code.to_string(),
        };
        let _ = writeln!(out, "Q{id}: {question}");
        let _ = writeln!(out, "A{id}: {answer}");
    }

    out
}

/// `assessment-results-<epoch-ms>.txt`
pub fn export_filename(epoch_ms: i128) -> String {
    format!("assessment-results-{epoch_ms}.txt")
}

fn now_epoch_ms() -> i128 {
    time::OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000
}

async fn perform_text_export(text: String) -> Result<String, String> {
    let filename = export_filename(now_epoch_ms());
    let delivery = download_bytes(&filename, "text/plain", text.into_bytes()).await?;
    Ok(match delivery {
        Some(path) => format!("Results saved to {path}"),
        None => format!("Download of {filename} started"),
    })
}

/// Hand bytes to the host's save facility. Returns the saved path when the
/// host writes to disk itself, `None` when the browser takes over.
async fn download_bytes(
    filename: &str,
    mime: &str,
    bytes: Vec<u8>,
) -> Result<Option<String>, String> {
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;
        use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

        let array = js_sys::Uint8Array::from(bytes.as_slice());
        let parts = js_sys::Array::new();
        parts.push(&array.buffer());

        let opts = BlobPropertyBag::new();
        opts.set_type(mime);
        let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &opts)
            .map_err(|_| "Failed to create blob".to_string())?;
        let url = Url::create_object_url_with_blob(&blob)
            .map_err(|_| "Unable to create download".to_string())?;

        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or("Document unavailable")?;
        let anchor: HtmlAnchorElement = document
            .create_element("a")
            .map_err(|_| "Unable to create anchor")?
            .dyn_into()
            .map_err(|_| "Anchor cast failed")?;
        anchor.set_href(&url);
        anchor.set_download(filename);
        anchor.style().set_property("display", "none").ok();

        document
            .body()
            .ok_or("Missing body")?
            .append_child(&anchor)
            .ok();
        anchor.click();
        anchor.remove();
        Url::revoke_object_url(&url).ok();

        Ok(None)
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        use std::fs;
        use std::io::Write;

        let _ = mime;
        let dir = desktop_export_dir()?;
        fs::create_dir_all(&dir).map_err(|err| err.to_string())?;
        let path = dir.join(filename);
        let mut file = fs::File::create(&path).map_err(|err| err.to_string())?;
        file.write_all(&bytes).map_err(|err| err.to_string())?;
        Ok(Some(path.to_string_lossy().to_string()))
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn desktop_export_dir() -> Result<std::path::PathBuf, String> {
    let dirs = directories::ProjectDirs::from("com", "Mindcheck", "Mindcheck")
        .ok_or("Unable to determine export directory")?;
    Ok(dirs.data_dir().join("exports"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_result() -> AssessmentResult {
        AssessmentResult {
            overall_score: 42.0,
            insights: "Good balance".into(),
            ..Default::default()
        }
    }

    #[test]
    fn report_has_score_insights_and_ordered_answers() {
        let responses = ResponseMap::from_pairs([(1, "4"), (2, "5")]);
        let text = build_export_text(&sample_result(), &responses);

        assert!(text.contains("42/50"));
        assert!(text.contains("Good balance"));

        let q1 = text.find("Q1: How would you rate your overall mood").unwrap();
        let a1 = text.find("A1: Good (4)").unwrap();
        let q2 = text.find("Q2: How well have you been able to manage").unwrap();
        let a2 = text.find("A2: Excellent (5)").unwrap();
        assert!(q1 < a1 && a1 < q2 && q2 < a2);
    }

    #[test]
    fn report_is_deterministic() {
        let responses = ResponseMap::from_pairs([(2, "3"), (1, "1")]);
        let first = build_export_text(&sample_result(), &responses);
        let second = build_export_text(&sample_result(), &responses);
        assert_eq!(first, second);
        assert!(first.find("Q2:").unwrap() < first.find("Q1:").unwrap());
    }

    #[test]
    fn unknown_questions_and_codes_are_kept_verbatim() {
        let responses = ResponseMap::from_pairs([(99, "n/a")]);
        let text = build_export_text(&sample_result(), &responses);
        assert!(text.contains("Q99: Unknown question"));
        assert!(text.contains("A99: n/a"));
    }

    #[test]
    fn category_scores_are_listed_by_name() {
        let mut result = sample_result();
        result.scores.insert("sleep".into(), 6.0);
        result.scores.insert("emotional".into(), 8.5);
        let text = build_export_text(&result, &ResponseMap::default());

        let emotional = text.find("- Emotional: 8.5/10").unwrap();
        let sleep = text.find("- Sleep: 6/10").unwrap();
        assert!(emotional < sleep);
    }

    #[test]
    fn filename_embeds_epoch_millis() {
        assert_eq!(
            export_filename(1_714_000_000_123),
            "assessment-results-1714000000123.txt"
        );
    }
}
