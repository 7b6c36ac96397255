use crate::catalog::Song;
use dioxus::prelude::*;

mod controls;

use controls::{NextButton, PlayPauseButton, PrevButton};

use super::Icon;

/// Transport bar for the album view. Holds no state of its own.
#[component]
pub fn PlayerBar(
    is_playing: bool,
    current_song: Song,
    current_time: f64,
    duration: f64,
    volume: f64,
    on_play_pause: EventHandler<()>,
    on_previous: EventHandler<()>,
    on_next: EventHandler<()>,
    // fraction in [0, 1]
    on_scrub: EventHandler<f64>,
    on_volume_change: EventHandler<f64>,
    format_time: Callback<f64, String>,
) -> Element {
    let progress = if duration.is_finite() && duration > 0.0 {
        (current_time / duration).clamp(0.0, 1.0)
    } else {
        0.0
    };

    let on_seek_input = move |e: Event<FormData>| {
        if let Ok(fraction) = e.value().parse::<f64>() {
            on_scrub.call(fraction);
        }
    };

    let on_volume_input = move |e: Event<FormData>| {
        if let Ok(value) = e.value().parse::<f64>() {
            on_volume_change.call(value);
        }
    };

    rsx! {
        section { class: "player-bar",
            section { id: "buttons",
                PrevButton { onclick: move |_| on_previous.call(()) }
                PlayPauseButton { is_playing, onclick: move |_| on_play_pause.call(()) }
                NextButton { onclick: move |_| on_next.call(()) }
            }
            section { id: "time-control",
                div { class: "now-playing", "{current_song.title}" }
                div { class: "time-row",
                    span { class: "current-time", "{format_time.call(current_time)}" }
                    input {
                        r#type: "range",
                        class: "seek-bar",
                        min: "0",
                        max: "1",
                        step: "0.001",
                        value: "{progress}",
                        aria_label: "Seek",
                        oninput: on_seek_input,
                    }
                    span { class: "total-time", "{format_time.call(duration)}" }
                }
            }
            section { id: "volume-control",
                Icon {
                    name: if volume > 0.0 { "volume".to_string() } else { "volume-off".to_string() },
                    class: "icon".to_string(),
                }
                input {
                    r#type: "range",
                    class: "seek-bar",
                    min: "0",
                    max: "1",
                    step: "0.01",
                    value: "{volume}",
                    aria_label: "Volume",
                    oninput: on_volume_input,
                }
            }
        }
    }
}
