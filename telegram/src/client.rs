// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use crate::{
  builders::TelegramClientBuilder,
  config::{TelegramConfig, POLL_TIMEOUT_SLACK_SECS, TELEGRAM_API_BASE},
  types::{BotInfo, MeResponse, OutgoingMessage, TelegramResponse, Update, UpdatesResponse},
};
use error::Error;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, instrument};

#[derive(Clone)]
pub struct TelegramClient {
  pub(crate) config: TelegramConfig,
  pub(crate) client: Client,
}

impl TelegramClient {
  pub fn builder() -> TelegramClientBuilder {
    TelegramClientBuilder::default()
  }

  fn method_url(&self, method: &str) -> String {
    format!("{}{}/{}", TELEGRAM_API_BASE, self.config.token, method)
  }

  #[instrument(skip(self, message), fields(chat_id = message.chat_id))]
  pub async fn send_message(&self, message: &OutgoingMessage) -> Result<(), Error> {
    let url = self.method_url("sendMessage");

    let response = self
      .client
      .post(url)
      .json(message)
      .send()
      .await
      .map_err(Error::HttpError)?;

    let status = response.status();

    if status.as_u16() == 429 {
      return Err(Error::RateLimitExceeded);
    }

    let telegram_response: TelegramResponse = response.json().await.map_err(Error::HttpError)?;

    if !telegram_response.ok {
      return Err(Error::ApiError(format!(
        "{}: {}",
        status, telegram_response.description
      )));
    }

    debug!("Message sent successfully");
    Ok(())
  }

  /// Fetches pending updates via long polling. `offset` acknowledges all
  /// updates with a smaller id; pass the last seen `update_id + 1`.
  #[instrument(skip(self))]
  pub async fn get_updates(&self, offset: Option<i64>) -> Result<Vec<Update>, Error> {
    let url = self.method_url("getUpdates");

    let mut params: Vec<(&str, String)> = vec![("timeout", self.config.poll_timeout.to_string())];
    if let Some(offset) = offset {
      params.push(("offset", offset.to_string()));
    }

    let response = self
      .client
      .get(url)
      .query(&params)
      .timeout(Duration::from_secs(
        self.config.poll_timeout + POLL_TIMEOUT_SLACK_SECS,
      ))
      .send()
      .await
      .map_err(Error::HttpError)?;

    let status = response.status();

    if status.as_u16() == 429 {
      return Err(Error::RateLimitExceeded);
    }

    let updates_response: UpdatesResponse = response.json().await.map_err(Error::HttpError)?;

    if !updates_response.ok {
      return Err(Error::ApiError(format!(
        "{}: {}",
        status, updates_response.description
      )));
    }

    debug!(count = updates_response.result.len(), "Fetched updates");
    Ok(updates_response.result)
  }

  /// Asks the platform who this token belongs to.
  #[instrument(skip(self))]
  pub async fn get_me(&self) -> Result<BotInfo, Error> {
    let url = self.method_url("getMe");

    let response = self.client.get(url).send().await.map_err(Error::HttpError)?;
    let status = response.status();
    let me_response: MeResponse = response.json().await.map_err(Error::HttpError)?;

    if !me_response.ok {
      return Err(Error::ApiError(format!(
        "{}: {}",
        status, me_response.description
      )));
    }

    me_response
      .result
      .ok_or_else(|| Error::ApiError("getMe returned no result".into()))
  }

  #[instrument(skip(self))]
  pub async fn set_webhook(&self, webhook_url: &str) -> Result<(), Error> {
    self
      .call_side_effect("setWebhook", &[("url", webhook_url)])
      .await
  }

  /// Removes any installed webhook; required before `getUpdates` can
  /// deliver anything.
  #[instrument(skip(self))]
  pub async fn delete_webhook(&self) -> Result<(), Error> {
    self.call_side_effect("deleteWebhook", &[]).await
  }

  async fn call_side_effect(&self, method: &str, params: &[(&str, &str)]) -> Result<(), Error> {
    let url = self.method_url(method);

    let response = self
      .client
      .post(url)
      .query(params)
      .send()
      .await
      .map_err(Error::HttpError)?;

    let status = response.status();

    if status.as_u16() == 429 {
      return Err(Error::RateLimitExceeded);
    }

    let telegram_response: TelegramResponse = response.json().await.map_err(Error::HttpError)?;

    if !telegram_response.ok {
      return Err(Error::ApiError(format!(
        "{} {}: {}",
        method, status, telegram_response.description
      )));
    }

    debug!(method, "Bot API call succeeded");
    Ok(())
  }
}
