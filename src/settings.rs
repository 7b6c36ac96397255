use dioxus::logger::tracing::warn;
use serde::{Deserialize, Serialize};

const BUNDLED_SETTINGS: &str = include_str!("../assets/settings.json");

/// Player settings shipped with the app.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerSettings {
    pub initial_volume: f64,
    /// Value for the audio element's `preload` attribute.
    pub preload: String,
    pub audio_element_id: String,
}

impl Default for PlayerSettings {
    fn default() -> Self {
        Self {
            initial_volume: 1.0,
            preload: "metadata".to_string(),
            audio_element_id: "albumdeck-audio".to_string(),
        }
    }
}

impl PlayerSettings {
    pub fn bundled() -> Self {
        Self::from_json(BUNDLED_SETTINGS).unwrap_or_else(|err| {
            warn!("bundled settings are unreadable, using defaults: {err}");
            Self::default()
        })
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let mut settings: Self = serde_json::from_str(json)?;
        settings.initial_volume = normalize_volume(settings.initial_volume);
        if settings.preload.trim().is_empty() {
            settings.preload = Self::default().preload;
        }
        Ok(settings)
    }
}

/// Bring a stored volume into `[0, 1]`, treating values above 1 as percentages.
pub fn normalize_volume(mut value: f64) -> f64 {
    if !value.is_finite() {
        return 1.0;
    }
    let mut passes = 0;
    while value > 1.0 && passes < 4 {
        value /= 100.0;
        passes += 1;
    }
    value.clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_keys_fall_back_to_defaults() {
        let settings = PlayerSettings::from_json("{}").unwrap();
        assert_eq!(settings, PlayerSettings::default());
    }

    #[test]
    fn percent_volume_is_normalized() {
        let settings = PlayerSettings::from_json(r#"{ "initial_volume": 80 }"#).unwrap();
        assert!((settings.initial_volume - 0.8).abs() < 1e-9);
    }

    #[test]
    fn normalize_volume_clamps() {
        assert_eq!(normalize_volume(-0.5), 0.0);
        assert_eq!(normalize_volume(f64::NAN), 1.0);
        assert_eq!(normalize_volume(0.25), 0.25);
    }

    #[test]
    fn bundled_settings_parse() {
        let settings = PlayerSettings::bundled();
        assert!((0.0..=1.0).contains(&settings.initial_volume));
        assert!(!settings.audio_element_id.is_empty());
    }
}
