use crate::components::Icon;
use dioxus::prelude::*;

/// Play/Pause button
#[component]
pub(super) fn PlayPauseButton(is_playing: bool, onclick: EventHandler<()>) -> Element {
    rsx! {
        button {
            id: "play-pause-btn",
            class: "control-button play-pause",
            r#type: "button",
            aria_label: if is_playing { "Pause" } else { "Play" },
            onclick: move |_| onclick.call(()),
            Icon {
                name: if is_playing { "pause".to_string() } else { "play".to_string() },
                class: "icon icon-lg".to_string(),
            }
        }
    }
}

#[component]
pub(super) fn PrevButton(onclick: EventHandler<()>) -> Element {
    rsx! {
        button {
            id: "prev-btn",
            class: "control-button",
            r#type: "button",
            aria_label: "Previous",
            onclick: move |_| onclick.call(()),
            Icon { name: "prev".to_string(), class: "icon".to_string() }
        }
    }
}

#[component]
pub(super) fn NextButton(onclick: EventHandler<()>) -> Element {
    rsx! {
        button {
            id: "next-btn",
            class: "control-button",
            r#type: "button",
            aria_label: "Next",
            onclick: move |_| onclick.call(()),
            Icon { name: "next".to_string(), class: "icon".to_string() }
        }
    }
}
