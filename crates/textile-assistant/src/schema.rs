//! Answer schema: the shape the completion service must produce
//!
//! The schema is declared once in [`FIELDS`]. [`describe`] renders it into
//! prompt text and [`validate`] checks a decoded payload against it.

use crate::error::SchemaError;
use serde_json::{json, Map, Value};
use std::fmt;
use textile_domain::AnswerRecord;

/// Declared type of an answer field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// JSON string
    Text,
    /// JSON array of strings
    TextList,
    /// Non-negative JSON number
    Price,
}

impl FieldKind {
    /// JSON Schema fragment for this kind
    fn json_schema(self) -> Value {
        match self {
            FieldKind::Text => json!({ "type": "string" }),
            FieldKind::TextList => json!({ "type": "array", "items": { "type": "string" } }),
            FieldKind::Price => json!({ "type": "number", "minimum": 0 }),
        }
    }

    /// Check that a value has this kind
    fn check(self, name: &str, value: &Value) -> Result<(), SchemaError> {
        let matches = match self {
            FieldKind::Text => as_text(value).is_some(),
            FieldKind::TextList => as_text_list(value).is_some(),
            FieldKind::Price => as_price(value).is_some(),
        };
        if matches {
            Ok(())
        } else {
            Err(mismatch(name, self, value))
        }
    }

    /// Short human-readable type name
    pub fn label(self) -> &'static str {
        match self {
            FieldKind::Text => "string",
            FieldKind::TextList => "array of strings",
            FieldKind::Price => "non-negative number",
        }
    }
}

/// One field of the answer schema
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// JSON key
    pub name: &'static str,
    /// Declared type
    pub kind: FieldKind,
    /// Whether the key must be present
    pub required: bool,
    /// Description shown to the model
    pub description: &'static str,
}

/// Answer fields in declaration order
pub const FIELDS: [FieldSpec; 5] = [
    FieldSpec {
        name: "product_name",
        kind: FieldKind::Text,
        required: true,
        description: "The name of the textile product.",
    },
    FieldSpec {
        name: "material",
        kind: FieldKind::Text,
        required: true,
        description: "The primary material of the product.",
    },
    FieldSpec {
        name: "sizes_available",
        kind: FieldKind::TextList,
        required: true,
        description: "A list of sizes that are in stock.",
    },
    FieldSpec {
        name: "price",
        kind: FieldKind::Price,
        required: true,
        description: "The price of the product in USD.",
    },
    FieldSpec {
        name: "care_instructions",
        kind: FieldKind::Text,
        required: true,
        description: "Specific instructions for washing and drying the product.",
    },
];

/// Output-format instructions embedded in the prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatInstructions(String);

impl FormatInstructions {
    /// The instructions as text
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FormatInstructions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// JSON Schema object for the answer record
pub fn json_schema() -> Value {
    let mut properties = Map::new();
    let mut required = Vec::new();

    for field in &FIELDS {
        let mut property = field.kind.json_schema();
        if let Some(obj) = property.as_object_mut() {
            obj.insert("description".to_string(), json!(field.description));
        }
        properties.insert(field.name.to_string(), property);
        if field.required {
            required.push(field.name);
        }
    }

    json!({
        "type": "object",
        "properties": properties,
        "required": required,
    })
}

/// Render the output contract for the completion service
///
/// Pure: repeated calls return identical text.
pub fn describe() -> FormatInstructions {
    let mut text = String::from(
        "Respond with a single JSON object that conforms to the JSON schema below. \
         Every field listed under \"required\" must be present. \
         Return only the JSON object, without explanations.\n\nFields:\n",
    );

    for field in &FIELDS {
        text.push_str(&format!(
            "- {} ({}, {}): {}\n",
            field.name,
            field.kind.label(),
            if field.required { "required" } else { "optional" },
            field.description
        ));
    }

    text.push_str("\nJSON schema:\n");
    text.push_str(&json_schema().to_string());

    FormatInstructions(text)
}

/// Check a decoded payload and build the answer record
///
/// Presence and type are checked against [`FIELDS`] in declaration order and
/// the first failure is reported. Numeric strings are accepted for `price`;
/// unknown keys are ignored.
pub fn validate(candidate: &Value) -> Result<AnswerRecord, SchemaError> {
    let obj = candidate
        .as_object()
        .ok_or_else(|| SchemaError::NotAnObject(candidate.to_string()))?;

    for field in &FIELDS {
        match obj.get(field.name) {
            Some(value) => field.kind.check(field.name, value)?,
            None if field.required => {
                return Err(SchemaError::MissingField(field.name.to_string()));
            }
            None => {}
        }
    }

    Ok(AnswerRecord {
        product_name: take(obj, "product_name", FieldKind::Text, as_text)?,
        material: take(obj, "material", FieldKind::Text, as_text)?,
        sizes_available: take(obj, "sizes_available", FieldKind::TextList, as_text_list)?,
        price: take(obj, "price", FieldKind::Price, as_price)?,
        care_instructions: take(obj, "care_instructions", FieldKind::Text, as_text)?,
    })
}

fn take<T>(
    obj: &Map<String, Value>,
    name: &str,
    kind: FieldKind,
    convert: fn(&Value) -> Option<T>,
) -> Result<T, SchemaError> {
    let value = obj
        .get(name)
        .ok_or_else(|| SchemaError::MissingField(name.to_string()))?;
    convert(value).ok_or_else(|| mismatch(name, kind, value))
}

fn mismatch(name: &str, kind: FieldKind, actual: &Value) -> SchemaError {
    SchemaError::TypeMismatch {
        field: name.to_string(),
        expected: kind.label().to_string(),
        actual: actual.to_string(),
    }
}

fn as_text(value: &Value) -> Option<String> {
    value.as_str().map(str::to_string)
}

fn as_text_list(value: &Value) -> Option<Vec<String>> {
    value
        .as_array()?
        .iter()
        .map(|item| item.as_str().map(str::to_string))
        .collect()
}

fn as_price(value: &Value) -> Option<f64> {
    let price = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }?;

    // -0.0 is stored as 0.0
    (price.is_finite() && price >= 0.0).then_some(price + 0.0)
}
