// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
pub mod config;
pub mod error;
pub mod format;
pub mod models;
pub mod normalize;
pub mod service;

pub use config::WeatherConfig;
pub use error::FetchError;
pub use format::{ConditionTable, ReportFormatter};
pub use models::weather::WeatherRecord;
pub use normalize::normalize_city;
pub use service::{WeatherProvider, WeatherService};
