// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Go `text/template` rendering of resource templates.

use gtmpl::{Context, Template, Value};
use serde_json::Value as JsonValue;
use std::collections::HashMap;

/// Rendered in place of a missing map key
const NO_VALUE: &str = "<no value>";

/// Render `source` with `data` as the template's dot.
///
/// A reference to a key that is not present in `data` is an error rather than
/// an empty value.
pub fn render(source: &str, data: &JsonValue) -> Result<String, String> {
    let mut tmpl = Template::default();
    tmpl.parse(source).map_err(|e| format!("template parse error: {}", e))?;

    let context = Context::from(json_to_gtmpl(data));
    let rendered = tmpl
        .render(&context)
        .map_err(|e| format!("template execution error: {}", e))?;

    if rendered.contains(NO_VALUE) {
        return Err("template references a key that is not set in the data".to_string());
    }
    Ok(rendered)
}

/// Convert serde_json::Value to gtmpl::Value
fn json_to_gtmpl(value: &JsonValue) -> Value {
    match value {
        JsonValue::Null => Value::Nil,
        JsonValue::Bool(b) => Value::Bool(*b),
        JsonValue::Number(n) => {
            if let Some(i) = n.as_i64() {
                Value::Number(i.into())
            } else if let Some(u) = n.as_u64() {
                Value::Number(u.into())
            } else if let Some(f) = n.as_f64() {
                Value::Number(f.into())
            } else {
                Value::Nil
            }
        }
        JsonValue::String(s) => Value::String(s.clone()),
        JsonValue::Array(items) => Value::Array(items.iter().map(json_to_gtmpl).collect()),
        JsonValue::Object(obj) => {
            let map: HashMap<String, Value> = obj
                .iter()
                .map(|(k, v)| (k.clone(), json_to_gtmpl(v)))
                .collect();
            Value::Map(map)
        }
    }
}
