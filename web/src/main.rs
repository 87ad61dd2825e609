use dioxus::prelude::*;

use ui::core::outbound::{self, register_launcher};
use ui::Site;

fn main() {
    register_launcher(outbound::open_in_new_tab);
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Title { "VoidGrief" }
        document::Link { rel: "stylesheet", href: ui::THEME_CSS }

        Site {}
    }
}
