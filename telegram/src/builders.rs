// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use crate::{
  client::TelegramClient,
  config::{TelegramConfig, MAX_MESSAGE_LENGTH},
  types::{OutgoingMessage, ParseMode},
};
use error::Error;

#[derive(Default)]
pub struct MessageBuilder {
  pub(crate) chat_id: Option<i64>,
  pub(crate) text: Option<String>,
  pub(crate) parse_mode: Option<ParseMode>,
}

impl MessageBuilder {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn chat_id(mut self, id: i64) -> Self {
    self.chat_id = Some(id);
    self
  }

  pub fn text(mut self, text: impl Into<String>) -> Self {
    self.text = Some(text.into());
    self
  }

  pub fn parse_mode(mut self, mode: ParseMode) -> Self {
    self.parse_mode = Some(mode);
    self
  }

  pub fn build(self) -> Result<OutgoingMessage, Error> {
    let chat_id = self
      .chat_id
      .ok_or_else(|| Error::ApiError("Chat ID is required".into()))?;

    let text = self
      .text
      .ok_or_else(|| Error::ApiError("Message text is required".into()))?;

    if text.len() > MAX_MESSAGE_LENGTH {
      return Err(Error::ApiError(format!(
        "Message too long: {} characters (max {})",
        text.len(),
        MAX_MESSAGE_LENGTH
      )));
    }

    Ok(OutgoingMessage {
      chat_id,
      text,
      parse_mode: self.parse_mode,
    })
  }
}

#[derive(Default)]
pub struct TelegramClientBuilder {
  pub(crate) config: TelegramConfig,
}

impl TelegramClientBuilder {
  pub fn token(mut self, token: impl Into<String>) -> Self {
    self.config.token = token.into();
    self
  }

  pub fn timeout(mut self, timeout: std::time::Duration) -> Self {
    self.config.timeout = timeout;
    self
  }

  /// Long-poll window (seconds) passed to `getUpdates`.
  pub fn poll_timeout(mut self, seconds: u64) -> Self {
    self.config.poll_timeout = seconds;
    self
  }

  pub fn build(self) -> Result<TelegramClient, Error> {
    if self.config.token.is_empty() {
      return Err(Error::ConfigError("Bot token cannot be empty".into()));
    }

    let client = reqwest::Client::builder()
      .timeout(self.config.timeout)
      .build()
      .map_err(Error::HttpError)?;

    Ok(TelegramClient {
      config: self.config,
      client,
    })
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn builds_message_with_parse_mode() {
    let message = MessageBuilder::new()
      .chat_id(42)
      .text("<b>hi</b>")
      .parse_mode(ParseMode::Html)
      .build()
      .unwrap();
    assert_eq!(message.chat_id, 42);
    assert_eq!(message.text, "<b>hi</b>");
    assert_eq!(message.parse_mode, Some(ParseMode::Html));
  }

  #[test]
  fn rejects_missing_chat_id() {
    assert!(MessageBuilder::new().text("hi").build().is_err());
  }

  #[test]
  fn rejects_missing_text() {
    assert!(MessageBuilder::new().chat_id(42).build().is_err());
  }

  #[test]
  fn rejects_oversized_text() {
    let text = "x".repeat(MAX_MESSAGE_LENGTH + 1);
    assert!(MessageBuilder::new().chat_id(42).text(text).build().is_err());
  }

  #[test]
  fn client_builder_rejects_empty_token() {
    assert!(TelegramClient::builder().build().is_err());
  }
}
