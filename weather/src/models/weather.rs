// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use super::api::WeatherResponse;
use crate::error::FetchError;

/// One weather observation, ready for formatting. Built from exactly one
/// API response and never reused across requests.
#[derive(Debug, Clone)]
pub struct WeatherRecord {
  pub city: String,
  pub temp: String,
  pub humidity: String,
  pub pressure: String,
  pub wind: String,
  /// Condition code from `weather[0].main`, e.g. "Clear" or "Rain".
  pub condition: String,
  pub sunrise: i64,
  pub sunset: i64,
}

impl WeatherRecord {
  pub(crate) fn from_response(response: WeatherResponse) -> Result<Self, FetchError> {
    let condition = response
      .weather
      .into_iter()
      .next()
      .ok_or_else(|| FetchError::Decode("weather array is empty".into()))?;

    Ok(Self {
      city: response.name,
      temp: response.main.temp,
      humidity: response.main.humidity,
      pressure: response.main.pressure,
      wind: response.wind.speed,
      condition: condition.main,
      sunrise: response.sys.sunrise,
      sunset: response.sys.sunset,
    })
  }
}
