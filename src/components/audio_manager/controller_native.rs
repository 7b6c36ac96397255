// Stand-in element for targets without a browser audio element.
use super::{MediaElement, MediaListener, PlaybackError};
use crate::settings::PlayerSettings;
use dioxus::logger::tracing::debug;

/// Holds whatever the session assigns but never produces sound or events.
#[derive(Debug, Default)]
pub struct DetachedMedia {
    source: Option<String>,
    current_time: f64,
    volume: f64,
    playing: bool,
}

impl DetachedMedia {
    pub fn open(settings: &PlayerSettings) -> Result<Self, PlaybackError> {
        debug!(
            "no browser audio on this target; {} is detached",
            settings.audio_element_id
        );
        Ok(Self {
            volume: 1.0,
            ..Self::default()
        })
    }
}

impl MediaElement for DetachedMedia {
    fn set_source(&mut self, src: &str) {
        self.source = Some(src.to_string());
        self.current_time = 0.0;
    }

    fn play(&mut self) {
        self.playing = self.source.is_some();
    }

    fn pause(&mut self) {
        self.playing = false;
    }

    fn current_time(&self) -> f64 {
        self.current_time
    }

    fn set_current_time(&mut self, seconds: f64) {
        self.current_time = seconds;
    }

    fn duration(&self) -> f64 {
        f64::NAN
    }

    fn volume(&self) -> f64 {
        self.volume
    }

    fn set_volume(&mut self, volume: f64) {
        self.volume = volume;
    }

    fn subscribe(&mut self, _listener: MediaListener) {}

    fn release(&mut self) {
        self.playing = false;
        self.source = None;
    }
}
