//! OpenWeatherMap current-weather client

use reqwest::Client;
use serde::Deserialize;

use crate::config::ApiConfig;
use crate::error::LookupError;
use crate::state::WeatherResult;

// ============================================================================
// Upstream payload
// ============================================================================

/// Current weather response; every field may be missing or null
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CurrentWeatherResponse {
    name: Option<String>,
    sys: Option<SysInfo>,
    main: Option<MainInfo>,
    wind: Option<WindInfo>,
    weather: Option<Vec<Condition>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct SysInfo {
    country: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct MainInfo {
    temp: Option<f64>,
    feels_like: Option<f64>,
    humidity: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct WindInfo {
    speed: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Condition {
    description: Option<String>,
    icon: Option<String>,
}

// ============================================================================
// Normalization
// ============================================================================

/// Map the upstream shape to the display model. Never fails.
pub fn normalize(raw: CurrentWeatherResponse) -> WeatherResult {
    let main = raw.main.unwrap_or_default();
    let condition = raw
        .weather
        .and_then(|conditions| conditions.into_iter().next())
        .unwrap_or_default();

    WeatherResult {
        name: raw.name.unwrap_or_default(),
        country: raw.sys.and_then(|sys| sys.country),
        temp: main.temp.and_then(round_celsius),
        feels_like: main.feels_like.and_then(round_celsius),
        humidity: main.humidity,
        wind_speed: raw.wind.and_then(|wind| wind.speed),
        description: condition.description,
        icon: condition.icon,
    }
}

/// Parse and normalize a success body.
pub fn parse_weather(body: &str) -> Result<WeatherResult, LookupError> {
    let raw: CurrentWeatherResponse = serde_json::from_str(body)?;
    Ok(normalize(raw))
}

/// Round half away from zero. Readings outside `i32` are dropped rather than
/// clamped.
fn round_celsius(value: f64) -> Option<i32> {
    let rounded = value.round();
    if rounded.is_finite() && rounded >= i32::MIN as f64 && rounded <= i32::MAX as f64 {
        Some(rounded as i32)
    } else {
        tracing::warn!(value, "temperature out of range");
        None
    }
}

// ============================================================================
// Client
// ============================================================================

/// Build the shared HTTP client, honoring the optional timeout.
pub fn build_client(config: &ApiConfig) -> Result<Client, LookupError> {
    let mut builder = Client::builder();
    if let Some(timeout) = config.timeout {
        builder = builder.timeout(timeout);
    }
    Ok(builder.build()?)
}

/// Fetch and normalize current weather for `city`.
pub async fn fetch_current_weather(
    client: &Client,
    config: &ApiConfig,
    city: &str,
) -> Result<WeatherResult, LookupError> {
    tracing::debug!(city, "requesting current weather");

    let response = client.get(config.lookup_url(city)).send().await?;

    let status = response.status();
    if !status.is_success() {
        tracing::info!(city, status = status.as_u16(), "weather lookup rejected");
        return Err(LookupError::from_status(status.as_u16()));
    }

    let body = response.text().await?;
    let weather = parse_weather(&body).inspect_err(|err| {
        tracing::warn!(city, error = %err, "unreadable weather response");
    })?;

    tracing::info!(city, name = %weather.name, "weather lookup succeeded");
    Ok(weather)
}
