use crate::catalog::{format_duration, Album, SharedCatalog};
use crate::components::{format_time, AlbumPlayer, Icon, PlatformMedia, PlayerBar};
use crate::components::views::album_song_row::AlbumSongRow;
use crate::components::views::not_found::MissingPanel;
use crate::settings::PlayerSettings;
use dioxus::core::{Runtime, RuntimeGuard};
use dioxus::logger::tracing::{error, warn};
use dioxus::prelude::*;

type SessionSignal = Signal<Option<AlbumPlayer<PlatformMedia>>>;

fn with_player(mut session: SessionSignal, f: impl FnOnce(&mut AlbumPlayer<PlatformMedia>)) {
    if let Some(player) = session.write().as_mut() {
        f(player);
    }
}

/// Route target for `/album/:slug`.
#[component]
pub fn AlbumView(slug: String) -> Element {
    let catalog = use_context::<SharedCatalog>();

    match catalog.0.find_by_slug(&slug) {
        Ok(album) => rsx! {
            AlbumSession { key: "{album.slug}", album: album.clone() }
        },
        Err(err) => {
            warn!("album lookup failed: {err}");
            rsx! {
                MissingPanel { message: "Album not found".to_string() }
            }
        }
    }
}

/// Owns the media element for as long as the album is on screen.
#[component]
fn AlbumSession(album: Album) -> Element {
    let settings = use_context::<PlayerSettings>();
    let session: SessionSignal = use_signal(move || {
        let opened = PlatformMedia::open(&settings)
            .and_then(|media| AlbumPlayer::new(album.clone(), media, &settings));
        match opened {
            Ok(player) => Some(player),
            Err(err) => {
                error!("could not start album session: {err}");
                None
            }
        }
    });

    // Media callbacks arrive outside any Dioxus scope.
    use_effect(move || {
        let runtime = Runtime::current();
        with_player(session, |player| {
            player.subscribe(Box::new(move |event| {
                let _guard = RuntimeGuard::new(runtime.clone());
                with_player(session, |player| player.handle_media_event(event));
            }));
        });
    });

    let Some((album, state, rows, current_song)) = session.read().as_ref().map(|player| {
        let rows: Vec<_> = (0..player.album().songs.len())
            .map(|index| player.row_control(index))
            .collect();
        (
            player.album().clone(),
            player.state().clone(),
            rows,
            player.current_song().clone(),
        )
    }) else {
        return rsx! {
            MissingPanel { message: "Playback is unavailable in this browser".to_string() }
        };
    };

    rsx! {
        section { class: "album",
            section { id: "album-info",
                {
                    match album.album_cover.clone() {
                        Some(url) => rsx! {
                            img { id: "album-cover-art", src: "{url}", alt: "{album.title}" }
                        },
                        None => rsx! {
                            div { id: "album-cover-art", class: "cover-placeholder",
                                Icon { name: "album".to_string(), class: "icon icon-xl".to_string() }
                            }
                        },
                    }
                }
                div { class: "album-details",
                    h1 { id: "album-title", "{album.title}" }
                    h2 { class: "artist", "{album.artist}" }
                    div { id: "release-info", "{album.release_info}" }
                    div { class: "album-summary",
                        "{album.song_count()} songs · {format_duration(album.total_duration())}"
                    }
                }
            }
            table { id: "song-list",
                colgroup {
                    col { id: "song-number-column" }
                    col { id: "song-title-column" }
                    col { id: "song-duration-column" }
                }
                thead {
                    tr {
                        th { "Number" }
                        th { "Title" }
                        th { "Duration" }
                    }
                }
                tbody {
                    for (index , song) in album.songs.iter().enumerate() {
                        AlbumSongRow {
                            key: "{index}",
                            song: song.clone(),
                            control: rows[index],
                            is_current: index == state.current,
                            onclick: move |_| with_player(session, |player| player.toggle(index)),
                            onhover: move |entered: bool| {
                                with_player(session, |player| {
                                    player.hover(if entered { Some(index) } else { None })
                                })
                            },
                        }
                    }
                }
            }
            PlayerBar {
                is_playing: state.is_playing,
                current_song,
                current_time: state.current_time,
                duration: state.duration,
                volume: state.volume,
                on_play_pause: move |_| with_player(session, |player| player.toggle_current()),
                on_previous: move |_| with_player(session, |player| player.previous()),
                on_next: move |_| with_player(session, |player| player.next()),
                on_scrub: move |fraction: f64| with_player(session, |player| player.scrub(fraction)),
                on_volume_change: move |value: f64| {
                    with_player(session, |player| player.set_volume(value))
                },
                format_time: move |seconds: f64| format_time(seconds),
            }
        }
    }
}
