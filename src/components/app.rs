use crate::catalog::{SharedCatalog, StaticCatalog};
use crate::components::views::{AlbumView, Library, NotFound};
use crate::settings::PlayerSettings;
use dioxus::logger::tracing::error;
use dioxus::prelude::*;

#[derive(Routable, Clone, PartialEq, Debug)]
#[rustfmt::skip]
pub enum Route {
    #[layout(AppShell)]
        #[route("/")]
        Library {},
        #[route("/album/:slug")]
        AlbumView { slug: String },
    #[end_layout]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

/// Provides the catalog and settings to every view.
#[component]
pub fn AppRoot() -> Element {
    use_context_provider(|| {
        let catalog = StaticCatalog::bundled().unwrap_or_else(|err| {
            error!("bundled catalog rejected: {err}");
            StaticCatalog::default()
        });
        SharedCatalog::new(catalog)
    });
    use_context_provider(PlayerSettings::bundled);

    rsx! {
        Router::<Route> {}
    }
}

#[component]
fn AppShell() -> Element {
    rsx! {
        nav { class: "navbar",
            Link { class: "logo", to: Route::Library {}, "albumdeck" }
            div { class: "links-container",
                Link { class: "navbar-link", to: Route::Library {}, "Library" }
            }
        }
        main { Outlet::<Route> {} }
    }
}
