// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use serde::{Deserialize, Deserializer};

/// Raw OpenWeather `weather` endpoint payload, decoded field-for-field.
/// Readings keep their textual form: they land in a message untouched, so
/// "20.54" must stay "20.54" and not pick up float formatting artifacts.
#[derive(Debug, Clone, Deserialize)]
pub struct WeatherResponse {
  pub name: String,
  pub main: MainReadings,
  pub weather: Vec<Condition>,
  pub wind: Wind,
  pub sys: SunTimes,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MainReadings {
  #[serde(deserialize_with = "number_as_text")]
  pub temp: String,
  #[serde(deserialize_with = "number_as_text")]
  pub humidity: String,
  #[serde(deserialize_with = "number_as_text")]
  pub pressure: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Condition {
  pub main: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Wind {
  #[serde(deserialize_with = "number_as_text")]
  pub speed: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SunTimes {
  pub sunrise: i64,
  pub sunset: i64,
}

/// The API ships readings as JSON numbers, but older payloads carried some
/// of them as strings; accept both and render as text.
fn number_as_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
  D: Deserializer<'de>,
{
  let value = serde_json::Value::deserialize(deserializer)?;
  match value {
    serde_json::Value::String(s) => Ok(s),
    serde_json::Value::Number(n) => Ok(n.to_string()),
    other => Err(serde::de::Error::custom(format!(
      "expected number or string, got {other}"
    ))),
  }
}
