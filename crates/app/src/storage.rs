//! Browser `localStorage` access through the document eval bridge.

use dioxus::prelude::*;
use shared_types::AppError;

/// Read the raw string stored under `key`. `None` when the key is unset.
pub async fn read_item(key: &str) -> Result<Option<String>, AppError> {
    let key = json_literal(key)?;
    let eval = document::eval(&format!("return window.localStorage.getItem({key});"));
    eval.join::<Option<String>>().await.map_err(|e| {
        tracing::warn!(error = %e, "localStorage read failed");
        AppError::storage("Could not read browser storage")
    })
}

/// Overwrite the string stored under `key`.
pub async fn write_item(key: &str, value: &str) -> Result<(), AppError> {
    let key = json_literal(key)?;
    let value = json_literal(value)?;
    let eval = document::eval(&format!(
        "window.localStorage.setItem({key}, {value}); return true;"
    ));
    eval.join::<bool>().await.map(|_| ()).map_err(|e| {
        tracing::warn!(error = %e, "localStorage write failed");
        AppError::storage("Could not write browser storage")
    })
}

/// Quote a string as a JavaScript literal.
fn json_literal(s: &str) -> Result<String, AppError> {
    serde_json::to_string(s).map_err(|_| AppError::storage("Could not encode storage value"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn literals_escape_quotes() {
        assert_eq!(json_literal(r#"a"b"#).unwrap(), r#""a\"b""#);
        assert_eq!(json_literal("registeredUsers").unwrap(), r#""registeredUsers""#);
    }
}
