use log::{Level, LevelFilter};
use serde_json::{Map, Value};

pub trait Reporter {
    fn report(&self, level: Level, event: &str, fields: Value);
}

/// Flattens `fields` into one JSON object next to `level` and `event`.
pub fn event_payload(level: Level, event: &str, fields: Value) -> Value {
    let mut payload = Map::new();
    payload.insert(
        "level".to_string(),
        Value::String(level.as_str().to_ascii_lowercase()),
    );
    payload.insert("event".to_string(), Value::String(event.to_string()));

    if let Value::Object(extra) = fields {
        for (key, value) in extra {
            payload.insert(key, value);
        }
    }

    Value::Object(payload)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LogReporter {
    max_level: LevelFilter,
}

impl LogReporter {
    pub fn new(max_level: LevelFilter) -> Self {
        Self { max_level }
    }
}

impl Reporter for LogReporter {
    fn report(&self, level: Level, event: &str, fields: Value) {
        if level > self.max_level {
            return;
        }

        log::log!(level, "{}", event_payload(level, event, fields));
    }
}

#[cfg(test)]
pub(crate) use recording::RecordingReporter;
