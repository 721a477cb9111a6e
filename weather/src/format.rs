// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use crate::models::weather::WeatherRecord;
use chrono::{DateTime, FixedOffset, Locale, TimeZone, Utc};
use std::collections::HashMap;

// Reports are rendered in a fixed UTC+3 offset regardless of the city's
// actual timezone, matching what subscribers have always seen.
const REPORT_UTC_OFFSET_SECS: i32 = 3 * 3600;
const HEADER_FORMAT: &str = "---%d %B %Y, %H:%M---";
const SUN_TIME_FORMAT: &str = "%H:%M";
const DEFAULT_CONDITION: &str = "Лучше не выходить";

/// Condition-code lookup for the temperature line. Immutable for the
/// process lifetime; construct once and hand to the formatter.
#[derive(Debug, Clone)]
pub struct ConditionTable {
  entries: HashMap<String, String>,
}

impl ConditionTable {
  pub fn new<K, V, I>(entries: I) -> Self
  where
    K: Into<String>,
    V: Into<String>,
    I: IntoIterator<Item = (K, V)>,
  {
    Self {
      entries: entries
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect(),
    }
  }

  /// Display text for a condition code; unknown codes get the fixed
  /// stay-at-home fallback.
  pub fn display(&self, code: &str) -> &str {
    self
      .entries
      .get(code)
      .map(String::as_str)
      .unwrap_or(DEFAULT_CONDITION)
  }
}

impl Default for ConditionTable {
  fn default() -> Self {
    Self::new([
      ("Clear", "Ясно ☀️"),
      ("Clouds", "Облачно ☁️"),
      ("Rain", "Дождь 🌧️"),
      ("Drizzle", "Моросит 🌧️"),
      ("Thunderstorm", "Гроза 🌩️"),
      ("Snow", "Снег 🌨️"),
      ("Mist", "Туман 🌫️"),
    ])
  }
}

/// Renders a [`WeatherRecord`] into the fixed nine-line HTML report.
pub struct ReportFormatter {
  conditions: ConditionTable,
}

impl ReportFormatter {
  pub fn new(conditions: ConditionTable) -> Self {
    Self { conditions }
  }

  pub fn format(&self, record: &WeatherRecord) -> String {
    self.format_at(record, Utc::now().with_timezone(&report_offset()))
  }

  /// Same as [`format`](Self::format) with the header clock injected;
  /// the only non-deterministic input, so tests pin it here.
  pub fn format_at(&self, record: &WeatherRecord, now: DateTime<FixedOffset>) -> String {
    let sunrise = sun_time(record.sunrise);
    let sunset = sun_time(record.sunset);

    // Day length keeps the historical decomposition: whole hours from the
    // total, minutes via a modulo on total minutes.
    let day_secs = record.sunset - record.sunrise;
    let hours = day_secs / 3600;
    let minutes = day_secs / 60 % 60;

    [
      now
        .format_localized(HEADER_FORMAT, Locale::ru_RU)
        .to_string(),
      format!("<i>Погода в городе <b>{}</b></i>", record.city),
      format!(
        "<b>Температура:</b> {}°C {}",
        record.temp,
        self.conditions.display(&record.condition)
      ),
      format!("<b>Влажность:</b> {} %", record.humidity),
      format!("<b>Давление:</b> {} мм.рт.ст", record.pressure),
      format!("<b>Ветер:</b> {} м/с", record.wind),
      format!("<b>Восход солнца:</b> {}", sunrise),
      format!("<b>Закат солнца:</b> {}", sunset),
      format!("<b>Продолжительность дня:</b> {} ч. {} м.", hours, minutes),
    ]
    .join("\n")
  }
}

pub(crate) fn report_offset() -> FixedOffset {
  FixedOffset::east_opt(REPORT_UTC_OFFSET_SECS).expect("Valid fixed offset")
}

fn sun_time(epoch_secs: i64) -> String {
  report_offset()
    .timestamp_opt(epoch_secs, 0)
    .single()
    .map(|dt| dt.format(SUN_TIME_FORMAT).to_string())
    .unwrap_or_else(|| "--:--".to_string())
}
