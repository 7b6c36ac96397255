//! Audio Manager - owns the album view's media element and mirrors it into state.
//! The view drives `AlbumPlayer`; the platform backend is picked per target.

mod media;
mod playback_api;

#[cfg(target_arch = "wasm32")]
mod controller_web;
#[cfg(not(target_arch = "wasm32"))]
mod controller_native;


pub use media::*;
pub use playback_api::*;

#[cfg(target_arch = "wasm32")]
pub use controller_web::HtmlAudioMedia as PlatformMedia;
#[cfg(not(target_arch = "wasm32"))]
pub use controller_native::DetachedMedia as PlatformMedia;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlaybackError {
    #[error("album \"{0}\" has no songs")]
    EmptyAlbum(String),

    #[error("audio element unavailable: {0}")]
    MediaUnavailable(String),
}
