// Album session: mirrors one media element into view state.
use super::{MediaElement, MediaEvent, MediaListener, PlaybackError};
use crate::catalog::{Album, Song};
use crate::settings::PlayerSettings;
use dioxus::logger::tracing::{debug, warn};

/// What the view renders from.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaybackState {
    /// Index into the album's songs.
    pub current: usize,
    pub is_playing: bool,
    pub current_time: f64,
    pub duration: f64,
    pub volume: f64,
    pub hovered: Option<usize>,
}

/// Glyph shown in a track row's leading cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowControl {
    Number(usize),
    Play,
    Pause,
}

pub struct AlbumPlayer<M: MediaElement> {
    album: Album,
    media: M,
    state: PlaybackState,
}

impl<M: MediaElement> AlbumPlayer<M> {
    /// Bind `media` to `album`, cued on the first song.
    pub fn new(album: Album, mut media: M, settings: &PlayerSettings) -> Result<Self, PlaybackError> {
        let Some(first) = album.songs.first() else {
            return Err(PlaybackError::EmptyAlbum(album.slug.clone()));
        };
        let volume = settings.initial_volume.clamp(0.0, 1.0);
        media.set_source(&first.audio_src);
        media.set_volume(volume);

        let state = PlaybackState {
            current: 0,
            is_playing: false,
            current_time: 0.0,
            duration: f64::from(first.duration),
            volume,
            hovered: None,
        };
        debug!("album session opened for {}", album.slug);
        Ok(Self {
            album,
            media,
            state,
        })
    }

    pub fn album(&self) -> &Album {
        &self.album
    }

    pub fn state(&self) -> &PlaybackState {
        &self.state
    }

    pub fn current_song(&self) -> &Song {
        &self.album.songs[self.state.current]
    }

    pub fn subscribe(&mut self, listener: MediaListener) {
        self.media.subscribe(listener);
    }

    fn play(&mut self) {
        self.media.play();
        self.state.is_playing = true;
    }

    fn pause(&mut self) {
        self.media.pause();
        self.state.is_playing = false;
    }

    fn set_song(&mut self, index: usize) {
        let song = &self.album.songs[index];
        self.media.set_source(&song.audio_src);
        self.state.current = index;
        self.state.current_time = 0.0;
        self.state.duration = f64::from(song.duration);
    }

    /// Row click: pause the playing song, otherwise cue `index` and play.
    pub fn toggle(&mut self, index: usize) {
        if index >= self.album.songs.len() {
            warn!("ignoring toggle for track {index} of {}", self.album.slug);
            return;
        }
        let is_same_song = index == self.state.current;
        if self.state.is_playing && is_same_song {
            self.pause();
        } else {
            if !is_same_song {
                self.set_song(index);
            }
            self.play();
        }
    }

    pub fn toggle_current(&mut self) {
        self.toggle(self.state.current);
    }

    pub fn previous(&mut self) {
        let index = self.state.current.saturating_sub(1);
        self.set_song(index);
        self.play();
    }

    pub fn next(&mut self) {
        let last = self.album.songs.len() - 1;
        let index = (self.state.current + 1).min(last);
        self.set_song(index);
        self.play();
    }

    /// Seek to `fraction` of the loaded song.
    pub fn scrub(&mut self, fraction: f64) {
        let total = self.media.duration();
        if !total.is_finite() || total <= 0.0 || fraction.is_nan() {
            debug!("scrub ignored, duration not known yet");
            return;
        }
        let new_time = total * fraction.clamp(0.0, 1.0);
        self.media.set_current_time(new_time);
        self.state.current_time = new_time;
    }

    pub fn set_volume(&mut self, value: f64) {
        if !value.is_finite() {
            warn!("ignoring volume {value}");
            return;
        }
        let volume = value.clamp(0.0, 1.0);
        self.media.set_volume(volume);
        self.state.volume = volume;
    }

    pub fn hover(&mut self, index: Option<usize>) {
        self.state.hovered = index.filter(|i| *i < self.album.songs.len());
    }

    pub fn row_control(&self, index: usize) -> RowControl {
        if self.state.hovered != Some(index) {
            return RowControl::Number(index + 1);
        }
        if self.state.is_playing && self.state.current == index {
            RowControl::Pause
        } else {
            RowControl::Play
        }
    }

    /// Copy the element's reported property into state.
    pub fn handle_media_event(&mut self, event: MediaEvent) {
        match event {
            MediaEvent::TimeUpdate => {
                self.state.current_time = clamp_time(self.media.current_time(), self.state.duration);
            }
            MediaEvent::DurationChange => {
                self.state.duration = self.media.duration();
                self.state.current_time = clamp_time(self.state.current_time, self.state.duration);
            }
            MediaEvent::VolumeChange => {
                let volume = self.media.volume();
                if volume.is_finite() {
                    self.state.volume = volume.clamp(0.0, 1.0);
                }
            }
            MediaEvent::Ended => {
                self.state.is_playing = false;
            }
        }
    }
}

impl<M: MediaElement> Drop for AlbumPlayer<M> {
    fn drop(&mut self) {
        self.media.release();
        debug!("album session closed for {}", self.album.slug);
    }
}

fn clamp_time(time: f64, duration: f64) -> f64 {
    if !time.is_finite() {
        return 0.0;
    }
    if duration.is_finite() && duration > 0.0 {
        time.clamp(0.0, duration)
    } else {
        time.max(0.0)
    }
}

/// Elapsed-time label: `m:s` without zero padding, `-:--` when unknown.
pub fn format_time(seconds: f64) -> String {
    if !seconds.is_finite() || seconds <= 0.0 {
        return "-:--".to_string();
    }
    let minutes = (seconds / 60.0).floor();
    let secs = (seconds - minutes * 60.0).floor();
    format!("{}:{}", minutes as u64, secs as u64)
}
