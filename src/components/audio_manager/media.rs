// Capability surface of the single media element an album view owns.

/// Notifications the media element emits on its own schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaEvent {
    TimeUpdate,
    DurationChange,
    VolumeChange,
    Ended,
}

impl MediaEvent {
    pub const ALL: [MediaEvent; 4] = [
        MediaEvent::TimeUpdate,
        MediaEvent::DurationChange,
        MediaEvent::VolumeChange,
        MediaEvent::Ended,
    ];

    /// DOM event type this maps to.
    pub fn dom_name(self) -> &'static str {
        match self {
            MediaEvent::TimeUpdate => "timeupdate",
            MediaEvent::DurationChange => "durationchange",
            MediaEvent::VolumeChange => "volumechange",
            MediaEvent::Ended => "ended",
        }
    }
}

pub type MediaListener = Box<dyn FnMut(MediaEvent)>;

/// Imperative playback primitive.
///
/// Commands return immediately; the element reports the resulting
/// properties later through the subscribed listener.
pub trait MediaElement {
    fn set_source(&mut self, src: &str);
    fn play(&mut self);
    fn pause(&mut self);

    fn current_time(&self) -> f64;
    fn set_current_time(&mut self, seconds: f64);
    /// NaN until the source's metadata is known.
    fn duration(&self) -> f64;
    fn volume(&self) -> f64;
    fn set_volume(&mut self, volume: f64);

    fn subscribe(&mut self, listener: MediaListener);
    /// Detach listeners and drop the source.
    fn release(&mut self);
}
