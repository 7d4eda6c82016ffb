//! The settings a palette set is generated from.

/// How the palettes for a piece of text are generated. This is a plain value: build a new one to
/// generate with different settings. Serializes with camelCase field names.
/// # Example
/// ```
/// # use hashtint::config::PaletteConfig;
/// let config = PaletteConfig { gradient_size: 9, ..PaletteConfig::default() };
/// assert_eq!(config.base_count, 5);
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PaletteConfig {
    /// How many colors are derived directly from the text's digest.
    pub base_count: usize,
    /// The saturation, in percent, of every base color.
    pub base_saturation: f64,
    /// The lightness, in percent, of every base color.
    pub base_lightness: f64,
    /// How many colors each derived palette has.
    pub gradient_size: usize,
}

impl Default for PaletteConfig {
    /// Five base colors at 80% saturation and 50% lightness, and seven-color derived palettes.
    fn default() -> PaletteConfig {
        PaletteConfig {
            base_count: 5,
            base_saturation: 80.0,
            base_lightness: 50.0,
            gradient_size: 7,
        }
    }
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;

    #[test]
    fn test_serialized_field_names() {
        let json = serde_json::to_string(&PaletteConfig::default()).unwrap();
        assert_eq!(
            json,
            r#"{"baseCount":5,"baseSaturation":80.0,"baseLightness":50.0,"gradientSize":7}"#
        );
        let back: PaletteConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, PaletteConfig::default());
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config: PaletteConfig = serde_json::from_str(r#"{"baseCount":3}"#).unwrap();
        assert_eq!(config, PaletteConfig { base_count: 3, ..PaletteConfig::default() });
        let empty: PaletteConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(empty, PaletteConfig::default());
    }
}
