// Browser backend: wraps an `<audio>` element created for the album view.
use super::{MediaElement, MediaEvent, MediaListener, PlaybackError};
use crate::settings::PlayerSettings;
use dioxus::logger::tracing::{debug, warn};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{window, HtmlAudioElement};

pub struct HtmlAudioMedia {
    audio: HtmlAudioElement,
    listeners: Vec<(MediaEvent, Closure<dyn FnMut()>)>,
}

fn js_error(err: JsValue) -> PlaybackError {
    PlaybackError::MediaUnavailable(format!("{err:?}"))
}

impl HtmlAudioMedia {
    pub fn open(settings: &PlayerSettings) -> Result<Self, PlaybackError> {
        let document = window()
            .and_then(|w| w.document())
            .ok_or_else(|| PlaybackError::MediaUnavailable("no document".to_string()))?;

        let audio: HtmlAudioElement = document
            .create_element("audio")
            .map_err(js_error)?
            .dyn_into()
            .map_err(|_| PlaybackError::MediaUnavailable("not an audio element".to_string()))?;
        audio.set_id(&settings.audio_element_id);
        // Keep preload light so we stream instead of buffering entire files
        audio
            .set_attribute("preload", &settings.preload)
            .map_err(js_error)?;

        Ok(Self {
            audio,
            listeners: Vec::new(),
        })
    }
}

impl MediaElement for HtmlAudioMedia {
    fn set_source(&mut self, src: &str) {
        self.audio.set_src(src);
    }

    fn play(&mut self) {
        match self.audio.play() {
            Ok(promise) => {
                wasm_bindgen_futures::spawn_local(async move {
                    if let Err(err) = wasm_bindgen_futures::JsFuture::from(promise).await {
                        warn!("audio playback was rejected: {err:?}");
                    }
                });
            }
            Err(err) => warn!("audio play() threw: {err:?}"),
        }
    }

    fn pause(&mut self) {
        if let Err(err) = self.audio.pause() {
            warn!("audio pause() threw: {err:?}");
        }
    }

    fn current_time(&self) -> f64 {
        self.audio.current_time()
    }

    fn set_current_time(&mut self, seconds: f64) {
        self.audio.set_current_time(seconds);
    }

    fn duration(&self) -> f64 {
        self.audio.duration()
    }

    fn volume(&self) -> f64 {
        self.audio.volume()
    }

    fn set_volume(&mut self, volume: f64) {
        self.audio.set_volume(volume);
    }

    fn subscribe(&mut self, listener: MediaListener) {
        let listener = Rc::new(RefCell::new(listener));
        for event in MediaEvent::ALL {
            let listener = listener.clone();
            let callback = Closure::wrap(Box::new(move || {
                // Events are dispatched as separate tasks, so this never nests.
                if let Ok(mut listener) = listener.try_borrow_mut() {
                    (&mut *listener)(event);
                }
            }) as Box<dyn FnMut()>);
            if let Err(err) = self
                .audio
                .add_event_listener_with_callback(event.dom_name(), callback.as_ref().unchecked_ref())
            {
                warn!("could not listen for {}: {err:?}", event.dom_name());
                continue;
            }
            self.listeners.push((event, callback));
        }
    }

    fn release(&mut self) {
        for (event, callback) in self.listeners.drain(..) {
            let _ = self.audio.remove_event_listener_with_callback(
                event.dom_name(),
                callback.as_ref().unchecked_ref(),
            );
        }
        let _ = self.audio.pause();
        let _ = self.audio.remove_attribute("src");
        self.audio.load();
        debug!("released audio element {}", self.audio.id());
    }
}
