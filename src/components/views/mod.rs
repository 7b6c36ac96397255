mod album;
mod album_song_row;
mod library;
mod not_found;

pub use album::AlbumView;
pub use library::Library;
pub use not_found::NotFound;
