//! Display configuration

use serde::Deserialize;

use crate::domain::pricing::Locale;

/// Display configuration
#[derive(Debug, Clone, Deserialize, Default)]
pub struct DisplayConfig {
    /// Language for rendered labels (`en` or `fr`)
    #[serde(default)]
    pub locale: Locale,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_defaults_to_english() {
        assert_eq!(DisplayConfig::default().locale, Locale::En);
    }

    #[test]
    fn test_display_deserialization() {
        let config: DisplayConfig = serde_json::from_str(r#"{"locale": "fr"}"#).unwrap();
        assert_eq!(config.locale, Locale::Fr);
    }
}
