use std::fmt::Write;

use thiserror::Error;

/// Пустой массив, который отдаётся клиенту при любой ошибке кодирования
pub const EMPTY_ARRAY: &str = "[]";

/// Ошибки сборки JSON-ответа с подсказками
#[derive(Debug, Error)]
pub enum JsonEncodeError {
    #[error("Failed to write JSON payload: {0}")]
    Write(#[from] std::fmt::Error),
}

/// Экранирует строку для JSON-литерала
///
/// Экранирование строже минимального: `/` и каждый код UTF-16 вне
/// печатного ASCII уходят как `\uXXXX`, так что ответ всегда чистый ASCII.
/// Символы вне BMP кодируются суррогатной парой.
pub fn escape_into(out: &mut String, s: &str) -> std::fmt::Result {
    for unit in s.encode_utf16() {
        match unit {
            0x5C => out.push_str("\\\\"),
            0x22 => out.push_str("\\\""),
            0x2F => out.push_str("\\/"),
            0x08 => out.push_str("\\b"),
            0x0C => out.push_str("\\f"),
            0x0A => out.push_str("\\n"),
            0x0D => out.push_str("\\r"),
            0x09 => out.push_str("\\t"),
            u if u <= 0x1F || u >= 0x7F => write!(out, "\\u{:04x}", u)?,
            u => out.push(char::from(u as u8)),
        }
    }
    Ok(())
}

/// Собирает JSON-массив строковых литералов
pub fn try_encode_array<I, S>(items: I) -> Result<String, JsonEncodeError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let items = items.into_iter();
    let mut json = String::with_capacity(items.size_hint().0 * 32 + 2);
    json.push('[');
    for (i, item) in items.enumerate() {
        if i > 0 {
            json.push(',');
        }
        json.push('"');
        escape_into(&mut json, item.as_ref())?;
        json.push('"');
    }
    json.push(']');
    Ok(json)
}

/// Как `try_encode_array`, но никогда не возвращает ошибку: при сбое
/// пишет в лог и отдаёт `[]`
pub fn encode_array_or_empty<I, S>(items: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    match try_encode_array(items) {
        Ok(json) => json,
        Err(e) => {
            tracing::error!("Suggestion payload encoding failed: {}", e);
            EMPTY_ARRAY.to_string()
        }
    }
}
