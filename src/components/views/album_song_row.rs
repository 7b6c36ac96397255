use crate::catalog::{format_duration, Song};
use crate::components::{Icon, RowControl};
use dioxus::prelude::*;

/// One track-table row. The leading cell swaps between the track number
/// and a play/pause glyph while hovered.
#[component]
pub fn AlbumSongRow(
    song: Song,
    control: RowControl,
    is_current: bool,
    onclick: EventHandler<()>,
    onhover: EventHandler<bool>,
) -> Element {
    let class = if is_current { "song current" } else { "song" };

    rsx! {
        tr {
            class: "{class}",
            onclick: move |_| onclick.call(()),
            onmouseenter: move |_| onhover.call(true),
            onmouseleave: move |_| onhover.call(false),
            td { class: "song-number",
                {
                    match control {
                        RowControl::Number(number) => rsx! {
                            span { "{number}" }
                        },
                        RowControl::Play => rsx! {
                            button {
                                class: "row-control ion-play",
                                r#type: "button",
                                aria_label: "Play",
                                onclick: move |evt: MouseEvent| {
                                    evt.stop_propagation();
                                    onclick.call(());
                                },
                                Icon { name: "play".to_string(), class: "icon".to_string() }
                            }
                        },
                        RowControl::Pause => rsx! {
                            button {
                                class: "row-control ion-pause",
                                r#type: "button",
                                aria_label: "Pause",
                                onclick: move |evt: MouseEvent| {
                                    evt.stop_propagation();
                                    onclick.call(());
                                },
                                Icon { name: "pause".to_string(), class: "icon".to_string() }
                            }
                        },
                    }
                }
            }
            td { class: "song-title", "{song.title}" }
            td { class: "song-duration", "{format_duration(song.duration)}" }
        }
    }
}
