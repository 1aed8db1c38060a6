use dioxus::prelude::*;

use ui::{AppProvider, AppShell};

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        AppProvider {
            AppShell {}
        }
    }
}
