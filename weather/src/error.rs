// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use thiserror::Error;

/// The two ways a weather lookup goes wrong: the API was unreachable or
/// answered with a non-success status, or it answered with something that
/// is not the expected JSON.
#[derive(Debug, Error)]
pub enum FetchError {
  #[error("Weather API request failed: {0}")]
  Transport(#[from] reqwest::Error),
  #[error("Failed to decode weather API response: {0}")]
  Decode(String),
}

impl From<serde_json::Error> for FetchError {
  fn from(e: serde_json::Error) -> Self {
    Self::Decode(e.to_string())
  }
}
