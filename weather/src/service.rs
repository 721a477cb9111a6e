// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use crate::{
  config::WeatherConfig,
  error::FetchError,
  models::{api::WeatherResponse, weather::WeatherRecord},
};
use async_trait::async_trait;
use tracing::{debug, instrument};
use url::Url;

#[async_trait]
pub trait WeatherProvider: Send + Sync {
  async fn fetch(&self, city: &str) -> Result<WeatherRecord, FetchError>;
}

/// OpenWeather-backed provider. One GET per lookup, no caching, no retry;
/// the HTTP client keeps its default timeouts.
pub struct WeatherService {
  config: WeatherConfig,
  client: reqwest::Client,
}

impl WeatherService {
  pub fn new(config: WeatherConfig) -> Self {
    Self {
      config,
      client: reqwest::Client::new(),
    }
  }

  fn request_url(&self, city: &str) -> Url {
    let mut url = self.config.uri.clone();
    url
      .query_pairs_mut()
      .append_pair("q", city)
      .append_pair("appid", &self.config.api_key)
      .append_pair("units", "metric");
    url
  }
}

#[async_trait]
impl WeatherProvider for WeatherService {
  #[instrument(skip(self))]
  async fn fetch(&self, city: &str) -> Result<WeatherRecord, FetchError> {
    debug!("Requesting current weather");
    let response = self
      .client
      .get(self.request_url(city))
      .send()
      .await?
      .error_for_status()?;

    let body = response.text().await?;
    let payload: WeatherResponse = serde_json::from_str(&body)?;

    WeatherRecord::from_response(payload)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn service() -> WeatherService {
    WeatherService::new(
      WeatherConfig::new("https://api.openweathermap.org/data/2.5/weather", "secret").unwrap(),
    )
  }

  #[test]
  fn request_url_carries_city_key_and_metric_units() {
    let url = service().request_url("New York");
    assert_eq!(url.host_str(), Some("api.openweathermap.org"));
    assert_eq!(url.path(), "/data/2.5/weather");

    let pairs: Vec<(String, String)> = url
      .query_pairs()
      .map(|(k, v)| (k.into_owned(), v.into_owned()))
      .collect();
    assert!(pairs.contains(&("q".to_string(), "New York".to_string())));
    assert!(pairs.contains(&("appid".to_string(), "secret".to_string())));
    assert!(pairs.contains(&("units".to_string(), "metric".to_string())));
  }

  #[test]
  fn garbage_body_is_a_decode_failure() {
    let result: Result<WeatherResponse, FetchError> =
      serde_json::from_str("<html>oops</html>").map_err(FetchError::from);
    assert!(matches!(result, Err(FetchError::Decode(_))));
  }
}
