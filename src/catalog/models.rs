use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Song {
    pub title: String,
    /// Advisory length in seconds. The media element reports the real one once loaded.
    #[serde(default)]
    pub duration: u32,
    #[serde(alias = "audioSrc")]
    pub audio_src: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Album {
    pub slug: String,
    pub title: String,
    #[serde(default)]
    pub artist: String,
    #[serde(default, alias = "releaseInfo")]
    pub release_info: String,
    #[serde(default, alias = "albumCover")]
    pub album_cover: Option<String>,
    /// Playback order.
    #[serde(default)]
    pub songs: Vec<Song>,
}

impl Album {
    pub fn song_count(&self) -> usize {
        self.songs.len()
    }

    pub fn total_duration(&self) -> u32 {
        self.songs.iter().map(|song| song.duration).sum()
    }
}

/// Format an advisory song length for the track table.
pub fn format_duration(seconds: u32) -> String {
    let mins = seconds / 60;
    let secs = seconds % 60;
    format!("{}:{:02}", mins, secs)
}
