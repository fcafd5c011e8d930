#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

#[cfg(feature = "desktop")]
use std::path::PathBuf;

#[cfg(feature = "desktop")]
use dioxus::desktop::{tao::window::WindowBuilder, Config};
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
    #[layout(DesktopNavbar)]
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
)); // Embedded shared theme (ui/assets/theme/main.css); no separate desktop /assets needed.

#[cfg(feature = "desktop")]
fn main() {
    let resource_dir = resolve_resource_dir();

    LaunchBuilder::desktop()
        .with_cfg(
            Config::new()
                .with_window(
                    WindowBuilder::new()
                        .with_title(format!("Mindcheck – v{}", env!("CARGO_PKG_VERSION")))
                        .with_maximized(true),
                )
                .with_resource_directory(resource_dir),
        )
        .launch(App);
}

#[cfg(all(feature = "server", not(feature = "desktop")))]
fn main() {
    LaunchBuilder::server().launch(App);
}

fn nav_dashboard(label: &str) -> Element {
    rsx!(Link { class: "navbar__link", to: Route::Dashboard {}, "{label}" })
}
fn nav_assessment(label: &str) -> Element {
    rsx!(Link { class: "navbar__link", to: Route::StartAssessment {}, "{label}" })
}
fn nav_results(label: &str) -> Element {
    rsx!(Link { class: "navbar__link", to: Route::Results {}, "{label}" })
}

fn route_for(target: NavTarget) -> Route {
    match target {
        NavTarget::SignIn => Route::SignIn {},
        NavTarget::StartAssessment => Route::StartAssessment {},
        NavTarget::Dashboard => Route::Dashboard {},
    }
}

fn go(nav: Navigator, target: NavTarget) {
    let route = route_for(target);
    if target == NavTarget::SignIn {
        let _ = nav.replace(route);
    } else {
        let _ = nav.push(route);
    }
}

#[component]
fn App() -> Element {
    // Initialize i18n once
    ui::i18n::init();

    // Provide global reactive language code signal
    // AppNavbar (shared) will update this via context on language selection.
    let lang_code = use_signal(|| "en-US".to_string());
    use_context_provider(|| lang_code);

    use_context_provider(Backend::from_env);
    let handoff = use_signal(pending_handoff);
    use_context_provider(|| HandoffSlot(handoff));

    // Register localized navigation builder (desktop)
    register_nav(NavBuilder {
        dashboard: nav_dashboard,
        assessment: nav_assessment,
        results: nav_results,
    });

    // Runtime maximize fallback (in case initial builder maximize is ignored by WM)
    #[cfg(feature = "desktop")]
    {
        let win = dioxus::desktop::use_window();
        use_effect(move || {
            win.set_maximized(true);
        });
    }

    rsx! {
        // Always inline embedded CSS (no external file dependency for desktop builds)
        document::Style { "{MAIN_CSS_INLINE}" }

        // Keyed wrapper div to force full remount on language change and include a hidden
        // reactive marker so we always depend on the lang_code signal.
        div {
            key: "{lang_code()}",
            div { style: "display:none", "{lang_code()}" }
            Router::<Route> { }
        }
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

#[cfg(feature = "desktop")]
fn resolve_resource_dir() -> PathBuf {
    #[cfg(debug_assertions)]
    {
        PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/assets"))
    }

    #[cfg(not(debug_assertions))]
    {
        std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(|dir| dir.join("assets")))
            .unwrap_or_else(|| PathBuf::from("assets"))
    }
}

/// A desktop-specific Router around the shared `Navbar` component
/// which allows us to use the desktop-specific `Route` enum.
#[component]
fn DesktopNavbar() -> Element {
    rsx! {
        AppNavbar { }

        Outlet::<Route> {}
    }
}
