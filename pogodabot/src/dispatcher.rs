// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use async_trait::async_trait;
use std::sync::Arc;
use telegram::{OutgoingMessage, ParseMode, Transport, Update, UpdateHandler};
use tracing::{debug, error};
use weather::{normalize_city, FetchError, ReportFormatter, WeatherProvider};

pub(crate) const UNSUPPORTED_TYPE_REPLY: &str = "Not support message type";
pub(crate) const CITY_NOT_FOUND_REPLY: &str = "Такого города у openWeather не нашлось...";
pub(crate) const BAD_RESPONSE_REPLY: &str = "openWeather отправил нам точно не json 0_o";

/// The whole pipeline for one inbound update: validate, normalize, fetch,
/// format, send. Every failure is terminal for that update only; nothing
/// is retried and nothing escapes to the caller.
pub struct UpdateDispatcher {
  provider: Box<dyn WeatherProvider>,
  formatter: ReportFormatter,
  transport: Arc<dyn Transport>,
}

impl UpdateDispatcher {
  pub fn new(
    provider: Box<dyn WeatherProvider>,
    formatter: ReportFormatter,
    transport: Arc<dyn Transport>,
  ) -> Self {
    Self {
      provider,
      formatter,
      transport,
    }
  }

  async fn weather_reply(&self, text: &str) -> (String, Option<ParseMode>) {
    let city = normalize_city(text);
    debug!(%city, "Resolving weather");

    match self.provider.fetch(&city).await {
      Ok(record) => (self.formatter.format(&record), Some(ParseMode::Html)),
      Err(e @ FetchError::Transport(_)) => {
        error!("Weather request failed: {e}");
        (CITY_NOT_FOUND_REPLY.to_string(), None)
      }
      Err(e @ FetchError::Decode(_)) => {
        error!("Weather response unreadable: {e}");
        (BAD_RESPONSE_REPLY.to_string(), None)
      }
    }
  }
}

#[async_trait]
impl UpdateHandler for UpdateDispatcher {
  async fn handle(&self, update: Update) {
    let Some(message) = update.message else {
      error!(update_id = update.update_id, "Update carries no message");
      return;
    };

    let (text, parse_mode) = match message.text.as_deref() {
      Some(text) => self.weather_reply(text).await,
      None => (UNSUPPORTED_TYPE_REPLY.to_string(), None),
    };

    let mut builder = telegram::MessageBuilder::new()
      .chat_id(message.chat.id)
      .text(text);
    if let Some(mode) = parse_mode {
      builder = builder.parse_mode(mode);
    }

    let outgoing = match builder.build() {
      Ok(outgoing) => outgoing,
      Err(e) => {
        error!("Failed to build reply: {e}");
        return;
      }
    };

    if let Err(e) = self.transport.send(&outgoing).await {
      error!(chat_id = message.chat.id, "Failed to deliver reply: {e}");
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use error::Error;
  use std::sync::Mutex;
  use telegram::{Chat, Message};
  use weather::{ConditionTable, WeatherRecord};

  struct RecordingTransport {
    sent: Mutex<Vec<OutgoingMessage>>,
    fail_sends: bool,
  }

  impl RecordingTransport {
    fn new() -> Arc<Self> {
      Arc::new(Self {
        sent: Mutex::new(Vec::new()),
        fail_sends: false,
      })
    }

    fn failing() -> Arc<Self> {
      Arc::new(Self {
        sent: Mutex::new(Vec::new()),
        fail_sends: true,
      })
    }

    fn sent(&self) -> Vec<OutgoingMessage> {
      self.sent.lock().unwrap().clone()
    }
  }

  #[async_trait]
  impl Transport for RecordingTransport {
    async fn register(&self) -> Result<(), Error> {
      Ok(())
    }

    async fn send(&self, message: &OutgoingMessage) -> Result<(), Error> {
      self.sent.lock().unwrap().push(message.clone());
      if self.fail_sends {
        return Err(Error::ApiError("boom".into()));
      }
      Ok(())
    }
  }

  enum Outcome {
    Report,
    TransportFailure,
    DecodeFailure,
  }

  struct StubProvider {
    outcome: Outcome,
  }

  impl StubProvider {
    fn new(outcome: Outcome) -> Self {
      Self { outcome }
    }
  }

  // Builder errors from reqwest never touch the network, which makes them
  // a convenient stand-in for transport failures.
  async fn transport_error() -> reqwest::Error {
    reqwest::Client::new()
      .get("http://")
      .send()
      .await
      .unwrap_err()
  }

  #[async_trait]
  impl WeatherProvider for StubProvider {
    async fn fetch(&self, city: &str) -> Result<WeatherRecord, FetchError> {
      match self.outcome {
        Outcome::Report => Ok(WeatherRecord {
          city: city.to_string(),
          temp: "20".to_string(),
          humidity: "50".to_string(),
          pressure: "1013".to_string(),
          wind: "3".to_string(),
          condition: "Clear".to_string(),
          sunrise: 1717210800,
          sunset: 1717254000,
        }),
        Outcome::TransportFailure => Err(FetchError::Transport(transport_error().await)),
        Outcome::DecodeFailure => Err(FetchError::Decode("not json".into())),
      }
    }
  }

  fn dispatcher(outcome: Outcome, transport: Arc<RecordingTransport>) -> UpdateDispatcher {
    UpdateDispatcher::new(
      Box::new(StubProvider::new(outcome)),
      ReportFormatter::new(ConditionTable::default()),
      transport,
    )
  }

  fn text_update(text: &str) -> Update {
    Update {
      update_id: 1,
      message: Some(Message {
        message_id: 10,
        chat: Chat { id: 99 },
        text: Some(text.to_string()),
      }),
    }
  }

  #[tokio::test]
  async fn update_without_message_sends_nothing() {
    let transport = RecordingTransport::new();
    let dispatcher = dispatcher(Outcome::Report, transport.clone());

    dispatcher
      .handle(Update {
        update_id: 1,
        message: None,
      })
      .await;

    assert!(transport.sent().is_empty());
  }

  #[tokio::test]
  async fn non_text_message_gets_the_canned_reply() {
    let transport = RecordingTransport::new();
    let dispatcher = dispatcher(Outcome::Report, transport.clone());

    dispatcher
      .handle(Update {
        update_id: 1,
        message: Some(Message {
          message_id: 10,
          chat: Chat { id: 99 },
          text: None,
        }),
      })
      .await;

    let sent = transport.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].chat_id, 99);
    assert_eq!(sent[0].text, UNSUPPORTED_TYPE_REPLY);
    assert_eq!(sent[0].parse_mode, None);
  }

  #[tokio::test]
  async fn text_message_gets_an_html_report() {
    let transport = RecordingTransport::new();
    let dispatcher = dispatcher(Outcome::Report, transport.clone());

    dispatcher.handle(text_update("берлин")).await;

    let sent = transport.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].parse_mode, Some(ParseMode::Html));
    assert!(sent[0].text.contains("Погода в городе <b>Берлин</b>"));
    assert!(sent[0].text.contains("Продолжительность дня"));
  }

  #[tokio::test]
  async fn city_is_normalized_before_the_lookup() {
    let transport = RecordingTransport::new();
    let provider = StubProvider::new(Outcome::Report);
    let dispatcher = UpdateDispatcher::new(
      Box::new(provider),
      ReportFormatter::new(ConditionTable::default()),
      transport.clone(),
    );

    dispatcher.handle(text_update("NEW-YORK")).await;

    let sent = transport.sent();
    assert!(sent[0].text.contains("New-York"));
  }

  #[tokio::test]
  async fn transport_failure_becomes_city_not_found() {
    let transport = RecordingTransport::new();
    let dispatcher = dispatcher(Outcome::TransportFailure, transport.clone());

    dispatcher.handle(text_update("атлантида")).await;

    let sent = transport.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].text, CITY_NOT_FOUND_REPLY);
    assert_eq!(sent[0].parse_mode, None);
  }

  #[tokio::test]
  async fn decode_failure_becomes_bad_response() {
    let transport = RecordingTransport::new();
    let dispatcher = dispatcher(Outcome::DecodeFailure, transport.clone());

    dispatcher.handle(text_update("москва")).await;

    let sent = transport.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].text, BAD_RESPONSE_REPLY);
  }

  #[tokio::test]
  async fn send_failure_is_swallowed() {
    let transport = RecordingTransport::failing();
    let dispatcher = dispatcher(Outcome::Report, transport.clone());

    dispatcher.handle(text_update("москва")).await;

    assert_eq!(transport.sent().len(), 1);
  }
}
