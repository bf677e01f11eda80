use serde_json::Value;

/// Text of a dynamic value as it should appear in the document.
///
/// Strings are used as is instead of their quoted JSON form, `null` becomes
/// empty text, and anything else uses its compact JSON rendering.
pub(crate) fn value_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}
