// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use crate::{
  client::TelegramClient,
  config::POLL_RETRY_DELAY,
  types::{OutgoingMessage, Update},
};
use async_trait::async_trait;
use error::Error;
use tracing::{debug, instrument, warn};

/// Receives decoded updates from a transport. The dispatcher implements
/// this; transports stay ignorant of what a "weather bot" is.
#[async_trait]
pub trait UpdateHandler: Send + Sync {
  async fn handle(&self, update: Update);
}

/// Platform lifecycle owned by a deployment: register once at startup,
/// send replies afterwards. Long polling and webhook delivery are the two
/// interchangeable implementations; pick one per deployment.
#[async_trait]
pub trait Transport: Send + Sync {
  async fn register(&self) -> Result<(), Error>;
  async fn send(&self, message: &OutgoingMessage) -> Result<(), Error>;
}

/// Pull-style delivery: an offset-tracking `getUpdates` loop.
pub struct LongPolling {
  client: TelegramClient,
}

impl LongPolling {
  pub fn new(client: TelegramClient) -> Self {
    Self { client }
  }

  /// Drives the poll loop forever. Each update is handled to completion
  /// before the next one; poll failures are logged and retried after a
  /// short delay.
  #[instrument(skip(self, handler))]
  pub async fn run(&self, handler: &dyn UpdateHandler) -> Result<(), Error> {
    let mut offset: Option<i64> = None;

    loop {
      match self.client.get_updates(offset).await {
        Ok(updates) => {
          for update in updates {
            offset = Some(update.update_id + 1);
            debug!(update_id = update.update_id, "Handling update");
            handler.handle(update).await;
          }
        }
        Err(e) => {
          warn!("Polling failed: {e}. Retrying...");
          tokio::time::sleep(POLL_RETRY_DELAY).await;
        }
      }
    }
  }
}

#[async_trait]
impl Transport for LongPolling {
  async fn register(&self) -> Result<(), Error> {
    self.client.delete_webhook().await
  }

  async fn send(&self, message: &OutgoingMessage) -> Result<(), Error> {
    self.client.send_message(message).await
  }
}

/// Push-style delivery: registration installs the webhook, the embedding
/// HTTP front end feeds decoded updates through [`Webhook::handle_update`].
/// Serving the endpoint itself is the embedder's business.
pub struct Webhook {
  client: TelegramClient,
  url: String,
}

impl Webhook {
  pub fn new(client: TelegramClient, url: impl Into<String>) -> Self {
    Self {
      client,
      url: url.into(),
    }
  }

  pub async fn handle_update(&self, update: Update, handler: &dyn UpdateHandler) {
    debug!(update_id = update.update_id, "Handling webhook update");
    handler.handle(update).await;
  }
}

#[async_trait]
impl Transport for Webhook {
  async fn register(&self) -> Result<(), Error> {
    self.client.set_webhook(&self.url).await
  }

  async fn send(&self, message: &OutgoingMessage) -> Result<(), Error> {
    self.client.send_message(message).await
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::types::{Chat, Message};
  use std::sync::Mutex;

  struct RecordingHandler {
    seen: Mutex<Vec<i64>>,
  }

  #[async_trait]
  impl UpdateHandler for RecordingHandler {
    async fn handle(&self, update: Update) {
      self.seen.lock().unwrap().push(update.update_id);
    }
  }

  #[tokio::test]
  async fn webhook_forwards_update_to_handler() {
    let client = TelegramClient::builder().token("dummy").build().unwrap();
    let webhook = Webhook::new(client, "https://bot.example.com/update");
    let handler = RecordingHandler {
      seen: Mutex::new(Vec::new()),
    };

    let update = Update {
      update_id: 77,
      message: Some(Message {
        message_id: 1,
        chat: Chat { id: 5 },
        text: Some("омск".to_string()),
      }),
    };

    webhook.handle_update(update, &handler).await;
    assert_eq!(*handler.seen.lock().unwrap(), vec![77]);
  }
}
