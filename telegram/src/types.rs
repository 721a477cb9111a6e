// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Clone, Copy, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum ParseMode {
  Markdown,
  Html,
  MarkdownV2,
}

/// One inbound event from the Bot API. Only the message subset is decoded;
/// other update kinds leave `message` empty.
#[derive(Debug, Clone, Deserialize)]
pub struct Update {
  pub update_id: i64,
  pub message: Option<Message>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Message {
  pub message_id: i64,
  pub chat: Chat,
  /// Present only for text messages; photos, stickers and the like arrive
  /// with no text.
  pub text: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Chat {
  pub id: i64,
}

/// Bot identity as reported by `getMe`.
#[derive(Debug, Clone, Deserialize)]
pub struct BotInfo {
  pub id: i64,
  pub username: Option<String>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct OutgoingMessage {
  pub chat_id: i64,
  pub text: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub parse_mode: Option<ParseMode>,
}

#[derive(Deserialize)]
pub(crate) struct TelegramResponse {
  pub ok: bool,
  #[serde(default)]
  pub description: String,
}

#[derive(Deserialize)]
pub(crate) struct UpdatesResponse {
  pub ok: bool,
  #[serde(default)]
  pub result: Vec<Update>,
  #[serde(default)]
  pub description: String,
}

#[derive(Deserialize)]
pub(crate) struct MeResponse {
  pub ok: bool,
  pub result: Option<BotInfo>,
  #[serde(default)]
  pub description: String,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn decodes_text_update() {
    let raw = r#"{
      "update_id": 10001,
      "message": {
        "message_id": 1365,
        "chat": {"id": 1111, "type": "private"},
        "date": 1441645532,
        "text": "moscow"
      }
    }"#;
    let update: Update = serde_json::from_str(raw).unwrap();
    assert_eq!(update.update_id, 10001);
    let message = update.message.unwrap();
    assert_eq!(message.chat.id, 1111);
    assert_eq!(message.text.as_deref(), Some("moscow"));
  }

  #[test]
  fn decodes_update_without_text() {
    let raw = r#"{
      "update_id": 10002,
      "message": {
        "message_id": 1366,
        "chat": {"id": 1111, "type": "private"},
        "date": 1441645533,
        "sticker": {"file_id": "abc", "width": 512, "height": 512}
      }
    }"#;
    let update: Update = serde_json::from_str(raw).unwrap();
    assert!(update.message.unwrap().text.is_none());
  }

  #[test]
  fn decodes_update_without_message() {
    let raw = r#"{"update_id": 10003, "edited_message": {"message_id": 1}}"#;
    let update: Update = serde_json::from_str(raw).unwrap();
    assert!(update.message.is_none());
  }

  #[test]
  fn parse_mode_serializes_lowercase() {
    let message = OutgoingMessage {
      chat_id: 7,
      text: "hi".to_string(),
      parse_mode: Some(ParseMode::Html),
    };
    let json = serde_json::to_string(&message).unwrap();
    assert!(json.contains("\"parse_mode\":\"html\""));
  }

  #[test]
  fn parse_mode_is_omitted_when_unset() {
    let message = OutgoingMessage {
      chat_id: 7,
      text: "hi".to_string(),
      parse_mode: None,
    };
    let json = serde_json::to_string(&message).unwrap();
    assert!(!json.contains("parse_mode"));
  }
}
