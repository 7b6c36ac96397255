use dioxus::prelude::*;

mod catalog;
mod components;
mod settings;

use components::AppRoot;

const APP_CSS: Asset = asset!("/assets/styling/app.css");

fn main() {
    dioxus::logger::initialize_default();
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Title { "albumdeck" }
        document::Meta { name: "theme-color", content: "#1b1b2f" }
        document::Stylesheet { href: APP_CSS }

        AppRoot {}
    }
}
