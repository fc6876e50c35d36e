use serde_json::Value;

pub fn result() -> Value {
    serde_json::json!({"success":true})
}
