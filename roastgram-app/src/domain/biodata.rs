use roastgram_errors::AppError;
use serde_json::{Map, Value};

/// Ordered profile attributes fed into the roast prompt.
///
/// Keeps the key order of the JSON object it was built from.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Biodata {
    entries: Vec<(String, Value)>,
}

impl Biodata {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_object(object: Map<String, Value>) -> Self {
        Self {
            entries: object.into_iter().collect(),
        }
    }

    /// Parses a JSON-encoded object. Anything else is rejected.
    pub fn from_json_str(raw: &str) -> Result<Self, AppError> {
        match serde_json::from_str::<Value>(raw) {
            Ok(Value::Object(object)) => Ok(Self::from_object(object)),
            _ => Err(AppError::invalid_input("Invalid biodata format")),
        }
    }

    pub fn with_entry(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.entries.push((key.into(), value.into()));
        self
    }

    /// Drops every entry named `key`.
    pub fn without(mut self, key: &str) -> Self {
        self.entries.retain(|(k, _)| k != key);
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

/// Renders a JSON value the way a JavaScript template literal would.
pub fn display_value(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => match n.as_f64() {
            Some(f) if !n.is_i64() && !n.is_u64() => display_float(f),
            _ => n.to_string(),
        },
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::Null => String::new(),
                other => display_value(other),
            })
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

/// JavaScript switches to exponent notation outside `[1e-6, 1e21)` and
/// always signs the exponent.
fn display_float(f: f64) -> String {
    let magnitude = f.abs();
    if f == 0.0 {
        return "0".to_string();
    }
    if magnitude >= 1e-6 && magnitude < 1e21 {
        return f.to_string();
    }
    let exponent_form = format!("{:e}", f);
    match exponent_form.split_once('e') {
        Some((mantissa, exp)) if !exp.starts_with('-') => format!("{}e+{}", mantissa, exp),
        _ => exponent_form,
    }
}
