//! JSON schema generation for tool definitions and structured model output.

use schemars::{JsonSchema, schema_for};
use serde_json::{Value, json};

/// Upper bound on `$ref` nesting followed while inlining definitions
const MAX_INLINE_DEPTH: usize = 16;

/// Generates a self-contained schema for `T` in the format accepted by Amazon
/// Bedrock tool definitions.
///
/// `$schema`, `title` and `format` keys are removed, `$defs` references are
/// inlined, and optional values (`anyOf: [T, null]`) collapse to `T`.
#[must_use]
pub fn tool_schema<T: JsonSchema>() -> Value {
    let mut schema = serde_json::to_value(schema_for!(T)).unwrap_or_else(|_| json!({}));

    if let Some(obj) = schema.as_object_mut() {
        obj.remove("$schema");
        obj.remove("title");
        let defs = obj.remove("$defs").unwrap_or(Value::Null);
        for (key, value) in obj.iter_mut() {
            simplify(value, &defs, 0, key == "properties");
        }
    }

    schema
}

/// Schema for structured model output.
///
/// Strict structured-output modes require `additionalProperties: false` on the
/// root object.
#[must_use]
pub fn output_schema<T: JsonSchema>() -> Value {
    let mut schema = tool_schema::<T>();
    if let Some(obj) = schema.as_object_mut() {
        obj.insert("additionalProperties".to_string(), json!(false));
    }
    schema
}

/// Names of the required properties of a flattened object schema
#[must_use]
pub fn required_fields(schema: &Value) -> Vec<&str> {
    schema
        .get("required")
        .and_then(Value::as_array)
        .map(|fields| fields.iter().filter_map(Value::as_str).collect())
        .unwrap_or_default()
}

/// `property_map` marks the value of a `properties` keyword, whose keys are
/// field names rather than schema keywords.
fn simplify(value: &mut Value, defs: &Value, depth: usize, property_map: bool) {
    if depth > MAX_INLINE_DEPTH {
        return;
    }

    match value {
        Value::Object(obj) if property_map => {
            for child in obj.values_mut() {
                simplify(child, defs, depth + 1, false);
            }
        }
        Value::Object(obj) => {
            if let Some(Value::Object(def)) = obj
                .get("$ref")
                .and_then(Value::as_str)
                .and_then(|r| r.strip_prefix("#/$defs/"))
                .and_then(|name| defs.get(name))
                .cloned()
            {
                obj.remove("$ref");
                for (key, def_value) in def {
                    obj.entry(key).or_insert(def_value);
                }
            }

            obj.remove("format");
            obj.remove("title");

            if let Some(Value::Array(variants)) = obj.get("anyOf")
                && variants.len() == 2
                && let Some(inner) = variants.iter().find(|v| v.get("type") != Some(&json!("null")))
                && variants.iter().any(|v| v.get("type") == Some(&json!("null")))
            {
                let inner = inner.clone();
                obj.remove("anyOf");
                if let Value::Object(inner) = inner {
                    for (key, inner_value) in inner {
                        obj.entry(key).or_insert(inner_value);
                    }
                }
                // The inlined variant may itself be a reference
                simplify(value, defs, depth + 1, false);
                return;
            }

            for (key, child) in obj.iter_mut() {
                simplify(child, defs, depth + 1, key == "properties");
            }
        }
        Value::Array(items) => {
            for item in items {
                simplify(item, defs, depth + 1, false);
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        AnomalyAnalysisResponse, ListAnomaliesRequest, LiveCaptureRequest, ProtocolSummaryRequest,
    };

    #[test]
    fn test_tool_schema_strips_metadata() {
        let schema = tool_schema::<ProtocolSummaryRequest>();
        assert!(schema.get("$schema").is_none());
        assert!(schema.get("title").is_none());
        assert_eq!(schema["type"], "object");
        assert_eq!(schema["properties"]["packetSummary"]["type"], "string");

        let required = required_fields(&schema);
        assert!(required.contains(&"protocol"));
        assert!(required.contains(&"packetSummary"));
    }

    #[test]
    fn test_output_schema_is_closed() {
        let schema = output_schema::<AnomalyAnalysisResponse>();
        assert_eq!(schema["additionalProperties"], false);
        let required = required_fields(&schema);
        assert_eq!(required.len(), 2);
        assert!(required.contains(&"analysis"));
        assert!(required.contains(&"recommendation"));
    }

    #[test]
    fn test_optional_enum_is_inlined() {
        let schema = tool_schema::<ListAnomaliesRequest>();
        let severity = &schema["properties"]["severity"];
        assert_eq!(severity["type"], "string");
        assert!(severity.get("anyOf").is_none());
        assert!(severity["enum"].as_array().is_some_and(|v| v.len() == 4));
        assert!(schema.get("$defs").is_none());
    }

    #[test]
    fn test_nested_struct_is_inlined() {
        let schema = tool_schema::<LiveCaptureRequest>();
        let session = &schema["properties"]["session"];
        assert_eq!(session["type"], "object");
        assert!(session["properties"]["userId"].is_object());
        assert!(!schema.to_string().contains("$ref"));
    }
}
