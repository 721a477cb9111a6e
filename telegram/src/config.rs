// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use std::time::Duration;

pub(crate) const TELEGRAM_API_BASE: &str = "https://api.telegram.org/bot";
pub(crate) const DEFAULT_TIMEOUT_SECS: u64 = 10;
pub(crate) const MAX_MESSAGE_LENGTH: usize = 4096;
pub(crate) const DEFAULT_POLL_TIMEOUT_SECS: u64 = 30;
// Extra room on top of the long-poll window so the HTTP request does not
// expire while Telegram is still holding the connection open.
pub(crate) const POLL_TIMEOUT_SLACK_SECS: u64 = 10;
pub(crate) const POLL_RETRY_DELAY: Duration = Duration::from_secs(5);

#[derive(Clone, Debug)]
pub struct TelegramConfig {
  pub(crate) token: String,
  pub(crate) timeout: Duration,
  pub(crate) poll_timeout: u64,
}

impl Default for TelegramConfig {
  fn default() -> Self {
    Self {
      token: String::new(),
      timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
      poll_timeout: DEFAULT_POLL_TIMEOUT_SECS,
    }
  }
}
