//! Upstream endpoints and credentials

use std::time::Duration;

pub const DEFAULT_API_BASE: &str = "https://api.openweathermap.org/data/2.5";
pub const DEFAULT_ICON_BASE: &str = "https://openweathermap.org";

/// Everything the API client needs to reach OpenWeatherMap.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiConfig {
    pub api_base: String,
    pub icon_base: String,
    /// May be empty; upstream then answers 401, shown as a request failure.
    pub api_key: String,
    /// No timeout unless set.
    pub timeout: Option<Duration>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.into(),
            icon_base: DEFAULT_ICON_BASE.into(),
            api_key: String::new(),
            timeout: None,
        }
    }
}

impl ApiConfig {
    /// Current-weather URL for a city, in metric units.
    pub fn lookup_url(&self, city: &str) -> String {
        format!(
            "{}/weather?q={}&units=metric&appid={}",
            self.api_base.trim_end_matches('/'),
            urlencoding::encode(city),
            self.api_key
        )
    }
}

/// Image URL for an OpenWeatherMap icon id (e.g. "04d").
pub fn icon_url(icon_base: &str, icon: &str) -> String {
    format!("{}/img/wn/{}@2x.png", icon_base.trim_end_matches('/'), icon)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_url_encodes_city() {
        let config = ApiConfig {
            api_key: "KEY".into(),
            ..Default::default()
        };

        assert_eq!(
            config.lookup_url("São Paulo"),
            "https://api.openweathermap.org/data/2.5/weather?q=S%C3%A3o%20Paulo&units=metric&appid=KEY"
        );
    }

    #[test]
    fn test_lookup_url_with_empty_key_and_trailing_slash() {
        let config = ApiConfig {
            api_base: "http://127.0.0.1:9000/".into(),
            ..Default::default()
        };

        assert_eq!(
            config.lookup_url("London"),
            "http://127.0.0.1:9000/weather?q=London&units=metric&appid="
        );
    }

    #[test]
    fn test_icon_url() {
        assert_eq!(
            icon_url(DEFAULT_ICON_BASE, "04d"),
            "https://openweathermap.org/img/wn/04d@2x.png"
        );
    }
}
