//! Application state - single source of truth

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tui_dispatch::DataResource;

use crate::config::{self, DEFAULT_ICON_BASE};

/// Current weather, normalized from the upstream response
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct WeatherResult {
    pub name: String,
    pub country: Option<String>,
    /// °C, rounded
    pub temp: Option<i32>,
    /// °C, rounded
    pub feels_like: Option<i32>,
    /// percent
    pub humidity: Option<f64>,
    /// m/s
    pub wind_speed: Option<f64>,
    pub description: Option<String>,
    pub icon: Option<String>,
}

impl WeatherResult {
    /// "London, GB", or just the name when the country is unknown
    pub fn place(&self) -> String {
        match &self.country {
            Some(country) => format!("{}, {}", self.name, country),
            None => self.name.clone(),
        }
    }
}

/// Animation timing for the header gradient.
pub const LOADING_ANIM_TICK_MS: u64 = 15;
pub const LOADING_ANIM_CYCLE_TICKS: u32 = 60;

/// Application state - everything the UI needs to render
#[derive(Clone, Debug, tui_dispatch::DebugState, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AppState {
    /// City name as typed
    #[debug(section = "Lookup", label = "Query")]
    pub query: String,

    /// Lookup lifecycle: Empty (idle) → Loading → Loaded/Failed
    #[debug(section = "Lookup", label = "Weather", debug_fmt)]
    pub lookup: DataResource<WeatherResult>,

    /// Token of the most recent request; older outcomes are ignored
    #[debug(section = "Lookup", label = "Request #")]
    pub request_seq: u64,

    /// Base URL for weather icon images
    #[debug(section = "Config", label = "Icons")]
    pub icon_base: String,

    // --- Animation internals (skipped) ---
    #[debug(skip)]
    pub tick_count: u32,

    /// Remaining ticks to finish the current animation cycle after loading
    #[debug(skip)]
    pub loading_anim_ticks_remaining: u32,
}

impl AppState {
    /// Create idle state with an initial query
    pub fn new(query: impl Into<String>, icon_base: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            lookup: DataResource::Empty,
            request_seq: 0,
            icon_base: icon_base.into(),
            tick_count: 0,
            loading_anim_ticks_remaining: 0,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.lookup.is_loading()
    }

    pub fn error_message(&self) -> Option<&str> {
        self.lookup.error()
    }

    pub fn weather(&self) -> Option<&WeatherResult> {
        self.lookup.data()
    }

    /// Whether a reset would clear anything
    pub fn has_content(&self) -> bool {
        !self.query.is_empty() || self.lookup.is_loaded() || self.lookup.is_failed()
    }

    /// Icon image URL for the displayed result, if it has an icon
    pub fn icon_url(&self) -> Option<String> {
        self.weather()
            .and_then(|w| w.icon.as_deref())
            .map(|icon| config::icon_url(&self.icon_base, icon))
    }

    pub fn loading_anim_active(&self) -> bool {
        self.lookup.is_loading() || self.loading_anim_ticks_remaining > 0
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(String::new(), DEFAULT_ICON_BASE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_idle() {
        let state = AppState::default();
        assert!(state.query.is_empty());
        assert!(state.lookup.is_empty());
        assert!(!state.is_loading());
        assert_eq!(state.error_message(), None);
        assert_eq!(state.weather(), None);
        assert!(!state.has_content());
    }

    #[test]
    fn test_place_with_and_without_country() {
        let mut weather = WeatherResult {
            name: "London".into(),
            country: Some("GB".into()),
            ..Default::default()
        };
        assert_eq!(weather.place(), "London, GB");

        weather.country = None;
        assert_eq!(weather.place(), "London");
    }

    #[test]
    fn test_icon_url_only_with_icon() {
        let mut state = AppState {
            lookup: DataResource::Loaded(WeatherResult {
                icon: Some("10n".into()),
                ..Default::default()
            }),
            ..Default::default()
        };
        assert_eq!(
            state.icon_url().as_deref(),
            Some("https://openweathermap.org/img/wn/10n@2x.png")
        );

        state.lookup = DataResource::Loaded(WeatherResult::default());
        assert_eq!(state.icon_url(), None);
    }
}
