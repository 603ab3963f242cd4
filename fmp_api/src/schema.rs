//! Declarative record schemas and the JSON-to-record mapping.
//!
//! A [`Schema`] is a table of [`FieldSpec`]s pairing the canonical (Rust)
//! field name with the key used on the wire. Decoding walks that table: each
//! wire key is looked up, checked against the declared [`FieldKind`], and
//! either stored or reported as a [`SchemaValidationError`]. Unknown keys in
//! the payload are ignored. Numeric strings are never coerced.

use std::fmt;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::SchemaValidationError;

/// Semantic type of a record field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    String,
    Integer,
    Float,
    Boolean,
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FieldKind::String => "string",
            FieldKind::Integer => "integer",
            FieldKind::Float => "float",
            FieldKind::Boolean => "boolean",
        };
        f.write_str(name)
    }
}

/// One declared field of a record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct FieldSpec {
    /// Name used in code.
    pub canonical: &'static str,
    /// Key used in the JSON payload.
    pub wire: &'static str,
    pub kind: FieldKind,
    /// Absence of a required field fails decoding; optional fields become `None`.
    pub required: bool,
}

/// Field table for one record type.
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct Schema {
    pub entity: &'static str,
    pub fields: &'static [FieldSpec],
}

impl Schema {
    /// Looks up a field by its canonical name.
    pub fn field(&self, canonical: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.canonical == canonical)
    }

    /// Wire name for a canonical field name.
    pub fn wire_name(&self, canonical: &str) -> Option<&'static str> {
        self.field(canonical).map(|f| f.wire)
    }

    /// Canonical name for a wire key.
    pub fn canonical_name(&self, wire: &str) -> Option<&'static str> {
        self.fields
            .iter()
            .find(|f| f.wire == wire)
            .map(|f| f.canonical)
    }

    /// Fields whose absence fails decoding.
    pub fn required_fields(&self) -> impl Iterator<Item = &FieldSpec> {
        self.fields.iter().filter(|f| f.required)
    }
}

/// A response entity decoded through its [`Schema`].
pub trait Record: Sized {
    /// The field table this record is decoded with.
    fn schema() -> &'static Schema;

    /// Decodes a record from a JSON object.
    fn from_object(object: &Map<String, Value>) -> Result<Self, SchemaValidationError>;

    /// Decodes a record from any JSON value; non-objects are rejected.
    fn from_json(value: &Value) -> Result<Self, SchemaValidationError> {
        match value {
            Value::Object(object) => Self::from_object(object),
            other => Err(SchemaValidationError::UnexpectedShape {
                entity: Self::schema().entity,
                expected: "object",
                actual: json_kind(other),
            }),
        }
    }
}

/// Decodes a top-level JSON array into records.
///
/// Fails on the first element that does not validate; no partial lists are
/// returned.
pub fn parse_records<T: Record>(value: &Value) -> Result<Vec<T>, SchemaValidationError> {
    let items = value
        .as_array()
        .ok_or_else(|| SchemaValidationError::UnexpectedShape {
            entity: T::schema().entity,
            expected: "array",
            actual: json_kind(value),
        })?;
    items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            T::from_json(item).inspect_err(|e| {
                tracing::error!("Record {} of {} failed validation: {}", index, items.len(), e);
            })
        })
        .collect()
}

/// Name of a JSON value's type, as reported in validation errors.
pub fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(n) if n.is_f64() => "float",
        Value::Number(n) if n.is_i64() => "integer",
        Value::Number(_) => "integer (out of range)",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Why a single field failed to decode.
#[derive(Debug)]
pub enum FieldError {
    Missing,
    Mismatch(&'static str),
}

/// Rust types that can hold a record field.
///
/// Implemented for the four scalar kinds and their `Option` forms.
pub trait FieldValue: Sized {
    const KIND: FieldKind;
    const REQUIRED: bool;

    /// Decodes the value found under the wire key, `None` when the key is absent.
    fn decode(value: Option<&Value>) -> Result<Self, FieldError>;
}

fn decode_required<T>(
    value: Option<&Value>,
    extract: fn(&Value) -> Option<T>,
) -> Result<T, FieldError> {
    match value {
        None | Some(Value::Null) => Err(FieldError::Missing),
        Some(v) => extract(v).ok_or(FieldError::Mismatch(json_kind(v))),
    }
}

fn decode_optional<T>(
    value: Option<&Value>,
    extract: fn(&Value) -> Option<T>,
) -> Result<Option<T>, FieldError> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(v) => extract(v)
            .map(Some)
            .ok_or(FieldError::Mismatch(json_kind(v))),
    }
}

fn as_integer(value: &Value) -> Option<i64> {
    value.as_i64().or_else(|| {
        let x = value.as_f64()?;
        // `i64::MAX as f64` rounds up to 2^63.
        let in_range = x >= i64::MIN as f64 && x < i64::MAX as f64;
        (x.fract() == 0.0 && in_range).then_some(x as i64)
    })
}

macro_rules! field_value {
    ($ty:ty, $kind:expr, $extract:expr) => {
        impl FieldValue for $ty {
            const KIND: FieldKind = $kind;
            const REQUIRED: bool = true;

            fn decode(value: Option<&Value>) -> Result<Self, FieldError> {
                decode_required(value, $extract)
            }
        }

        impl FieldValue for Option<$ty> {
            const KIND: FieldKind = $kind;
            const REQUIRED: bool = false;

            fn decode(value: Option<&Value>) -> Result<Self, FieldError> {
                decode_optional(value, $extract)
            }
        }
    };
}

field_value!(String, FieldKind::String, |v| v.as_str().map(str::to_owned));
// Integral floats such as `1000.0` narrow into integers; fractions never do.
field_value!(i64, FieldKind::Integer, as_integer);
// Integers widen into floats; strings never do.
field_value!(f64, FieldKind::Float, Value::as_f64);
field_value!(bool, FieldKind::Boolean, Value::as_bool);

/// Reads declared fields out of one JSON object, attributing failures to
/// the record being built.
pub struct FieldReader<'a> {
    entity: &'static str,
    object: &'a Map<String, Value>,
}

impl<'a> FieldReader<'a> {
    pub fn new(entity: &'static str, object: &'a Map<String, Value>) -> Self {
        Self { entity, object }
    }

    pub fn read<T: FieldValue>(
        &self,
        field: &'static str,
        wire: &'static str,
    ) -> Result<T, SchemaValidationError> {
        T::decode(self.object.get(wire)).map_err(|e| match e {
            FieldError::Missing => SchemaValidationError::MissingField {
                entity: self.entity,
                field,
                wire,
            },
            FieldError::Mismatch(actual) => SchemaValidationError::TypeMismatch {
                entity: self.entity,
                field,
                expected: T::KIND,
                actual,
            },
        })
    }
}
