// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use anyhow::{ensure, Context, Result};
use url::Url;

#[derive(Debug, Clone)]
pub struct WeatherConfig {
  pub(crate) uri: Url,
  pub(crate) api_key: String,
}

impl WeatherConfig {
  pub fn new(uri: &str, api_key: impl Into<String>) -> Result<Self> {
    let api_key = api_key.into();
    ensure!(!api_key.trim().is_empty(), "Weather API key cannot be empty");

    let uri = Url::parse(uri).context("Invalid weather API base URI")?;

    Ok(Self { uri, api_key })
  }
}
