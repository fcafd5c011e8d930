use dioxus::prelude::*;

use api::HistoryRecord;

use crate::assessment::HandoffSlot;
use crate::core::{backend::Backend, nav::NavTarget};
use crate::results::{
    load_on_mount, MountOutcome, ResponseTable, ResultsExportPanel, ResultsState, ResultsSummary,
    ResultsTrendChart, MIN_TREND_POINTS,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SessionCheck {
    Pending,
    SignedIn,
    SignedOut,
}

/// Results page shown after the questionnaire.
///
/// Reads the [`HandoffSlot`] payload, checks the session (redirecting
/// through `on_navigate` when signed out) and loads recent history for the chart.
#[component]
pub fn ResultsPage(on_navigate: EventHandler<NavTarget>) -> Element {
    // Re-render when the language changes elsewhere.
    let _lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let _lang_marker = _lang_code.as_ref().map(|s| s()).unwrap_or_default();

    let backend = use_context::<Backend>();
    let handoff = try_use_context::<HandoffSlot>();
    let results = use_hook(move || {
        let payload = handoff.and_then(|slot| slot.current());
        ResultsState::from_navigation(payload)
    });

    let mut session = use_signal(|| SessionCheck::Pending);
    let mut history = use_signal(Vec::<HistoryRecord>::new);

    let has_results = results.is_some();
    use_future(move || {
        let backend = backend.clone();
        async move {
            let outcome =
                load_on_mount(backend.session.as_ref(), backend.store.as_ref(), has_results)
                    .await;
            match outcome {
                MountOutcome::SignedOut => {
                    session.set(SessionCheck::SignedOut);
                    on_navigate.call(NavTarget::SignIn);
                }
                MountOutcome::SignedIn {
                    user_id,
                    history: records,
                } => {
                    tracing::debug!(%user_id, records = records.len(), "results page ready");
                    history.set(records);
                    session.set(SessionCheck::SignedIn);
                }
            }
        }
    });

    let body = match (session(), results) {
        (SessionCheck::SignedOut, _) => rsx! {},
        (_, None) => render_placeholder(on_navigate),
        (SessionCheck::Pending, Some(_)) => rsx! {
            p { class: "results-card results-card__placeholder results__loading",
                {crate::t!("results-checking-session")}
            }
        },
        (SessionCheck::SignedIn, Some(state)) => {
            let records = history();
            let show_trend = records.len() >= MIN_TREND_POINTS;
            let ResultsState {
                result,
                responses,
                entries,
            } = state;

            rsx! {
                ResultsSummary { result: result.clone() }

                if show_trend {
                    ResultsTrendChart { history: records }
                }

                ResponseTable { entries }
                ResultsExportPanel { result, responses }

                div { class: "results__actions",
                    button {
                        r#type: "button",
                        class: "button button--accent",
                        onclick: move |_| on_navigate.call(NavTarget::StartAssessment),
                        {crate::t!("results-retake-cta")}
                    }
                    button {
                        r#type: "button",
                        class: "button button--ghost",
                        onclick: move |_| on_navigate.call(NavTarget::Dashboard),
                        {crate::t!("results-dashboard-cta")}
                    }
                }
            }
        }
    };

    rsx! {
        div { style: "display:none", "{_lang_marker}" }
        section { class: "page page-results",
            div { class: "results__header",
                h1 { {crate::t!("results-title")} }
                p { {crate::t!("results-intro")} }
            }
            {body}
        }
    }
}

fn render_placeholder(on_navigate: EventHandler<NavTarget>) -> Element {
    rsx! {
        section { class: "results-card results-empty",
            h2 { {crate::t!("results-empty-title")} }
            p { class: "results-card__placeholder", {crate::t!("results-empty-body")} }
            button {
                r#type: "button",
                class: "button button--primary",
                onclick: move |_| on_navigate.call(NavTarget::StartAssessment),
                {crate::t!("results-start-cta")}
            }
        }
    }
}
