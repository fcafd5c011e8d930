use dioxus::prelude::*;

use ui::assessment::HandoffSlot;
use ui::core::storage::pending_handoff;
use ui::components::app_navbar::{register_nav, NavBuilder};
use ui::components::AppNavbar;
use ui::views::ResultsPage;
use ui::{Backend, NavTarget};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebNavbar)]
    #[redirect("/", || Route::Dashboard {})]
    #[route("/dashboard")]
    Dashboard {},
    #[route("/assessment")]
    StartAssessment {},
    #[route("/results")]
    Results {},
    #[route("/auth")]
    SignIn {},
}

const MAIN_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

fn nav_dashboard(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::Dashboard {},
        "{label}"
    })
}
fn nav_assessment(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::StartAssessment {},
        "{label}"
    })
}
fn nav_results(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::Results {},
        "{label}"
    })
}

fn route_for(target: NavTarget) -> Route {
    match target {
        NavTarget::SignIn => Route::SignIn {},
        NavTarget::StartAssessment => Route::StartAssessment {},
        NavTarget::Dashboard => Route::Dashboard {},
    }
}

/// Sign-in redirects replace the history entry so "back" doesn't bounce.
fn go(nav: Navigator, target: NavTarget) {
    let route = route_for(target);
    if target == NavTarget::SignIn {
        let _ = nav.replace(route);
    } else {
        let _ = nav.push(route);
    }
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    {
        ui::i18n::init();
        // Register localized navigation builder (Option A)
        register_nav(NavBuilder {
            dashboard: nav_dashboard,
            assessment: nav_assessment,
            results: nav_results,
        });
    }

    let lang_code = use_signal(|| "en-US".to_string());
    use_context_provider(|| lang_code);
    use_context_provider(Backend::from_env);
    let handoff = use_signal(pending_handoff);
    use_context_provider(|| HandoffSlot(handoff));

    rsx! {
        document::Style { "{MAIN_CSS_INLINE}" }

        Router::<Route> {}
    }
}

#[component]
fn Dashboard() -> Element {
    let nav = navigator();
    rsx! {
        ui::views::Dashboard { on_navigate: move |target: NavTarget| go(nav, target) }
    }
}

#[component]
fn StartAssessment() -> Element {
    rsx! { ui::views::StartAssessment {} }
}

#[component]
fn Results() -> Element {
    let nav = navigator();
    rsx! {
        ResultsPage { on_navigate: move |target: NavTarget| go(nav, target) }
    }
}

#[component]
fn SignIn() -> Element {
    rsx! { ui::views::SignIn {} }
}

/// A web-specific Router around the shared `Navbar` component
/// which allows us to use the web-specific `Route` enum.
#[component]
fn WebNavbar() -> Element {
    rsx! {
        AppNavbar { }
        Outlet::<Route> {}
    }
}
