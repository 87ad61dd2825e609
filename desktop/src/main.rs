#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

#[cfg(feature = "desktop")]
use dioxus::desktop::{tao::window::WindowBuilder, Config};
use dioxus::prelude::*;

use ui::core::outbound::{self, register_launcher};
use ui::core::platform::register_scheme_hint;
use ui::Site;

const MAIN_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
)); // Shared theme (ui/assets/theme/main.css), embedded so packaged builds need no assets folder.

#[cfg(feature = "desktop")]
fn main() {
    // Links open from inside the webview, which hands them to the system browser.
    register_launcher(outbound::open_via_eval);
    register_scheme_hint(window_prefers_dark);

    LaunchBuilder::desktop()
        .with_cfg(
            Config::new().with_window(
                WindowBuilder::new()
                    .with_title(format!("VoidGrief – v{}", env!("CARGO_PKG_VERSION")))
                    .with_maximized(true),
            ),
        )
        .launch(App);
}

/// Reads the OS theme the main window was created with.
#[cfg(feature = "desktop")]
fn window_prefers_dark() -> bool {
    dioxus::desktop::window().theme() == dioxus::desktop::tao::window::Theme::Dark
}

#[component]
fn App() -> Element {
    rsx! {
        document::Style { "{MAIN_CSS_INLINE}" }

        Site {}
    }
}
