use axum::extract::Path;
use axum::Json;
use serde_json::{Map, Value};

use crate::errors::AppError;
use crate::i18n::{Lang, MessageKey};

// GET /api/i18n/:lang
pub async fn messages(Path(lang): Path<String>) -> Result<Json<Value>, AppError> {
    let lang = Lang::parse(&lang)
        .ok_or_else(|| AppError::NotFound(format!("language {lang}")))?;

    let mut messages = Map::new();
    for key in MessageKey::ALL {
        let name = serde_json::to_value(key)
            .ok()
            .and_then(|v| v.as_str().map(str::to_string))
            .unwrap_or_default();
        messages.insert(name, Value::String(key.text(lang).to_string()));
    }

    Ok(Json(serde_json::json!({
        "lang": lang.as_str(),
        "dir": if lang.is_rtl() { "rtl" } else { "ltr" },
        "messages": messages,
    })))
}
