use crate::catalog::{Album, SharedCatalog};
use crate::components::{Icon, Route};
use dioxus::prelude::*;

#[component]
pub fn Library() -> Element {
    let catalog = use_context::<SharedCatalog>();
    let albums = catalog.0.albums().to_vec();
    let is_empty = albums.is_empty();

    rsx! {
        section { class: "library",
            if is_empty {
                p { class: "empty", "No albums yet" }
            }
            for album in albums {
                AlbumCard { key: "{album.slug}", album }
            }
        }
    }
}

#[component]
fn AlbumCard(album: Album) -> Element {
    rsx! {
        Link {
            class: "album-card",
            to: Route::AlbumView {
                slug: album.slug.clone(),
            },
            {
                match album.album_cover.clone() {
                    Some(url) => rsx! {
                        img { src: "{url}", alt: "{album.title}" }
                    },
                    None => rsx! {
                        div { class: "cover-placeholder",
                            Icon { name: "album".to_string(), class: "icon icon-xl".to_string() }
                        }
                    },
                }
            }
            div { class: "album-title", "{album.title}" }
            div { class: "album-artist", "{album.artist}" }
            div { class: "album-song-count", "{album.song_count()} songs" }
        }
    }
}
