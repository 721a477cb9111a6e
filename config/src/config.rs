// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use anyhow::{ensure, Context};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::instrument;

const DEFAULT_WEATHER_URI: &str = "https://api.openweathermap.org/data/2.5/weather";

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
  pub bot: BotSettings,
  #[serde(rename = "open-weather")]
  pub open_weather: OpenWeatherSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BotSettings {
  pub token: String,
  pub username: String,
  /// Webhook URL; absent in long-polling deployments.
  pub uri: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OpenWeatherSettings {
  #[serde(default = "default_weather_uri")]
  pub uri: String,
  pub token: String,
}

fn default_weather_uri() -> String {
  DEFAULT_WEATHER_URI.to_string()
}

impl Settings {
  #[instrument(skip(path))]
  pub fn from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
    let content = fs::read_to_string(path).context("Failed to read settings file")?;
    let settings = Self::from_toml(&content)?;
    tracing::debug!("Loaded settings successfully");
    Ok(settings)
  }

  pub fn from_toml(content: &str) -> anyhow::Result<Self> {
    let settings: Self = toml::from_str(content).context("Failed to parse settings")?;
    settings.validate()?;
    Ok(settings)
  }

  fn validate(&self) -> anyhow::Result<()> {
    ensure!(!self.bot.token.trim().is_empty(), "bot.token cannot be empty");
    ensure!(
      !self.open_weather.token.trim().is_empty(),
      "open-weather.token cannot be empty"
    );
    Ok(())
  }
}
