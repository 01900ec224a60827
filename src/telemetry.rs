use serde::Serialize;
use std::cmp::Ordering;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
}

impl PartialOrd for LogLevel {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for LogLevel {
    fn cmp(&self, other: &Self) -> Ordering {
        fn rank(level: LogLevel) -> u8 {
            match level {
                LogLevel::Debug => 0,
                LogLevel::Info => 1,
                LogLevel::Warn => 2,
            }
        }

        rank(*self).cmp(&rank(*other))
    }
}

impl LogLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
        }
    }

    pub fn from_str(value: &str) -> Option<Self> {
        match value {
            "debug" => Some(Self::Debug),
            "info" => Some(Self::Info),
            "warn" => Some(Self::Warn),
            _ => None,
        }
    }
}

/// Emits one structured JSON line when `level` passes `threshold`.
pub fn log_event(threshold: LogLevel, level: LogLevel, event: &str, fields: serde_json::Value) {
    if let Some(line) = format_event(threshold, level, event, fields, now_unix_millis()) {
        write_line(level, &line);
    }
}

fn format_event(
    threshold: LogLevel,
    level: LogLevel,
    event: &str,
    fields: serde_json::Value,
    ts: u64,
) -> Option<String> {
    if level < threshold {
        return None;
    }

    let mut payload = serde_json::Map::new();
    payload.insert(
        "ts".to_string(),
        serde_json::Value::Number(serde_json::Number::from(ts)),
    );
    payload.insert("level".to_string(), serde_json::Value::String(level.as_str().to_string()));
    payload.insert("event".to_string(), serde_json::Value::String(event.to_string()));

    if let serde_json::Value::Object(extra) = fields {
        for (key, value) in extra {
            payload.insert(key, value);
        }
    }

    Some(serde_json::Value::Object(payload).to_string())
}

#[cfg(target_arch = "wasm32")]
fn write_line(level: LogLevel, line: &str) {
    let value = wasm_bindgen::JsValue::from_str(line);
    match level {
        LogLevel::Warn => web_sys::console::warn_1(&value),
        LogLevel::Debug | LogLevel::Info => web_sys::console::log_1(&value),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn write_line(_level: LogLevel, line: &str) {
    println!("{line}");
}

#[cfg(target_arch = "wasm32")]
fn now_unix_millis() -> u64 {
    let millis = js_sys::Date::now();
    if millis.is_finite() && millis > 0.0 {
        millis as u64
    } else {
        0
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn now_unix_millis() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};

    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|value| u64::try_from(value.as_millis()).unwrap_or(u64::MAX))
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn events_below_threshold_are_dropped() {
        let line = format_event(LogLevel::Info, LogLevel::Debug, "noise", json!({}), 1);

        assert!(line.is_none());
    }

    #[test]
    fn event_line_merges_fields_after_envelope() {
        let line = format_event(
            LogLevel::Info,
            LogLevel::Warn,
            "behavior_skipped",
            json!({ "behavior": "image_modal", "reason": "missing_element" }),
            42,
        )
        .expect("warn passes info threshold");
        let parsed: serde_json::Value = serde_json::from_str(&line).expect("valid JSON line");

        assert_eq!(parsed["ts"], 42);
        assert_eq!(parsed["level"], "warn");
        assert_eq!(parsed["event"], "behavior_skipped");
        assert_eq!(parsed["behavior"], "image_modal");
        assert_eq!(parsed["reason"], "missing_element");
    }

    #[test]
    fn non_object_fields_are_ignored() {
        let line = format_event(LogLevel::Debug, LogLevel::Info, "site_started", json!("loose"), 7)
            .expect("info passes debug threshold");
        let parsed: serde_json::Value = serde_json::from_str(&line).expect("valid JSON line");

        assert_eq!(parsed.as_object().map(|object| object.len()), Some(3));
    }

    #[test]
    fn levels_order_debug_info_warn() {
        assert!(LogLevel::Debug < LogLevel::Info);
        assert!(LogLevel::Info < LogLevel::Warn);
        assert_eq!(LogLevel::from_str("warn"), Some(LogLevel::Warn));
        assert_eq!(LogLevel::from_str("trace"), None);
    }
}
