use dioxus::prelude::*;

use crate::assessment::HandoffSlot;

/// Landing spot for the questionnaire flow, which lives in its own module of the app.
#[component]
pub fn StartAssessment() -> Element {
    let _lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let _lang_marker = _lang_code.as_ref().map(|s| s()).unwrap_or_default();

    // A new attempt replaces whatever the results page was showing.
    let handoff = try_use_context::<HandoffSlot>();
    use_effect(move || {
        if let Some(mut slot) = handoff {
            slot.clear();
        }
    });

    rsx! {
        div { style: "display:none", "{_lang_marker}" }
        section { class: "page page-assessment",
            h1 { {crate::t!("page-assessment-title")} }
            p { {crate::t!("page-assessment-intro")} }
        }
    }
}
