use dioxus::prelude::*;

use crate::core::nav::NavTarget;

#[component]
pub fn Dashboard(on_navigate: EventHandler<NavTarget>) -> Element {
    // Subscribe to global language code (if provided) so we re-render on change.
    let _lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let _lang_current = _lang_code
        .as_ref()
        .map(|s| s())
        .unwrap_or_else(|| "en-US".to_string());

    #[cfg(debug_assertions)]
    tracing::debug!(lang = %_lang_current, "dashboard render");

    rsx! {
        section { class: "page page-dashboard",
            h1 { {crate::t!("page-dashboard-title")} }
            p { {crate::t!("page-dashboard-intro")} }
            p { class: "page-dashboard__cta",
                button {
                    r#type: "button",
                    class: "button button--primary",
                    onclick: move |_| on_navigate.call(NavTarget::StartAssessment),
                    {crate::t!("results-start-cta")}
                }
            }
        }
    }
}
