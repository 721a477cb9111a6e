// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.

/// Canonicalizes free-text city input so "NEW-YORK" and "new york" hit the
/// API identically. Hyphenated names split on `-`, everything else on
/// spaces; each token is lowercased and capitalized, and the original
/// separator survives the round trip.
pub fn normalize_city(input: &str) -> String {
  let separator = if input.contains('-') { "-" } else { " " };
  input
    .split(separator)
    .map(capitalize)
    .collect::<Vec<_>>()
    .join(separator)
}

fn capitalize(token: &str) -> String {
  let lowered = token.to_lowercase();
  let mut chars = lowered.chars();
  match chars.next() {
    Some(first) => first.to_uppercase().chain(chars).collect(),
    None => String::new(),
  }
}
