use log::Level;

use crate::trail::point::TrailConfig;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose while developing locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Id of the optional `<script type="application/json">` block that
/// overrides the trail defaults.
pub const TRAIL_CONFIG_ID: &str = "trail-config";

pub fn parse_trail_config(raw: &str) -> Result<TrailConfig, serde_json::Error> {
    serde_json::from_str(raw)
}

/// Trail settings for this page, falling back to the defaults when the
/// page has no override or the override does not parse.
pub fn trail_config() -> TrailConfig {
    let raw = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|doc| doc.get_element_by_id(TRAIL_CONFIG_ID))
        .and_then(|el| el.text_content());

    let Some(raw) = raw else {
        return TrailConfig::default();
    };

    match parse_trail_config(&raw) {
        Ok(config) => config,
        Err(err) => {
            gloo_console::warn!(format!("Ignoring malformed {}: {}", TRAIL_CONFIG_ID, err));
            TrailConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trail::point::Rgba;

    #[test]
    fn empty_object_keeps_defaults() {
        assert_eq!(parse_trail_config("{}").unwrap(), TrailConfig::default());
    }

    #[test]
    fn partial_override() {
        let config = parse_trail_config(
            r#"{ "lifetime": 80, "tail_color": { "r": 255, "g": 0, "b": 128, "a": 0.3 } }"#,
        )
        .unwrap();

        assert_eq!(config.lifetime, 80);
        assert_eq!(config.tail_color, Rgba::new(255, 0, 128, 0.3));
        assert_eq!(config.min_distance, 5.0);
        assert_eq!(config.max_width, 10.0);
    }

    #[test]
    fn colour_alpha_defaults_to_opaque() {
        let config = parse_trail_config(r#"{ "head_color": { "r": 1, "g": 2, "b": 3 } }"#).unwrap();
        assert_eq!(config.head_color.a, 1.0);
    }

    #[test]
    fn malformed_config_is_an_error() {
        assert!(parse_trail_config("{ lifetime: }").is_err());
        assert!(parse_trail_config(r#"{ "lifetime": -4 }"#).is_err());
    }
}
