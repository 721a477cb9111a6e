// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
mod dispatcher;

use anyhow::{Context, Result};
use config::Settings;
use dispatcher::UpdateDispatcher;
use std::{env, sync::Arc};
use telegram::{LongPolling, TelegramClient, Transport};
use tracing::{info, warn};
use weather::{ConditionTable, ReportFormatter, WeatherConfig, WeatherService};

const DEFAULT_SETTINGS_PATH: &str = "pogodabot.toml";

#[cfg(debug_assertions)]
fn setup_logging() {
  tracing_subscriber::fmt()
    .with_file(true)
    .with_line_number(true)
    .with_thread_ids(true)
    .init();
}

#[cfg(not(debug_assertions))]
fn setup_logging() {
  tracing_subscriber::fmt().init();
}

#[tokio::main]
async fn main() -> Result<()> {
  setup_logging();

  let settings_path = env::args()
    .nth(1)
    .unwrap_or_else(|| DEFAULT_SETTINGS_PATH.to_string());
  let settings = Settings::from_file(&settings_path)
    .with_context(|| format!("Failed to load settings from {settings_path}"))?;

  let service = WeatherService::new(WeatherConfig::new(
    &settings.open_weather.uri,
    settings.open_weather.token.clone(),
  )?);

  let client = TelegramClient::builder()
    .token(settings.bot.token.clone())
    .build()?;

  let me = client.get_me().await.context("getMe failed")?;
  match me.username.as_deref() {
    Some(username) if username == settings.bot.username => {
      info!("Starting bot @{username}");
    }
    Some(username) => {
      warn!(
        "Token belongs to @{username}, settings say @{}",
        settings.bot.username
      );
    }
    None => warn!("Platform reported a bot without a username"),
  }

  let transport = Arc::new(LongPolling::new(client));
  transport
    .register()
    .await
    .context("Failed to register with the platform")?;

  let dispatcher = UpdateDispatcher::new(
    Box::new(service),
    ReportFormatter::new(ConditionTable::default()),
    transport.clone(),
  );

  info!("Listening for updates");
  transport.run(&dispatcher).await?;
  Ok(())
}
