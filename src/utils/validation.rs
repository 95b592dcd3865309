use crate::utils::error::{Result, ZuriPayError};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Primitive JSON kinds a request field can be declared as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    String,
    Number,
    Boolean,
    /// Paging counters, which must fit `u32`.
    Count,
}

impl ValueKind {
    pub fn name(self) -> &'static str {
        match self {
            ValueKind::String => "string",
            ValueKind::Number => "number",
            ValueKind::Boolean => "boolean",
            ValueKind::Count => "non-negative integer",
        }
    }

    fn matches(self, value: &Value) -> bool {
        match self {
            ValueKind::String => value.is_string(),
            ValueKind::Number => value.is_number(),
            ValueKind::Boolean => value.is_boolean(),
            ValueKind::Count => value.as_u64().is_some_and(|n| n <= u64::from(u32::MAX)),
        }
    }
}

/// Fails when `value` is absent, `null` or an empty string.
pub fn validate_required(field_name: &str, value: Option<&Value>) -> Result<()> {
    match value {
        None | Some(Value::Null) => Err(missing(field_name)),
        Some(Value::String(s)) if s.is_empty() => Err(missing(field_name)),
        Some(_) => Ok(()),
    }
}

/// [`validate_required`] for identifiers passed as plain strings.
pub fn validate_required_str(field_name: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(missing(field_name));
    }
    Ok(())
}

/// Fails when the JSON kind of `value` differs from `expected`. Array elements are not inspected.
pub fn validate_type(field_name: &str, value: &Value, expected: ValueKind) -> Result<()> {
    if expected.matches(value) {
        Ok(())
    } else {
        Err(ZuriPayError::validation(format!(
            "Parameter '{}' must be a {}.",
            field_name,
            expected.name()
        )))
    }
}

fn missing(field_name: &str) -> ZuriPayError {
    ZuriPayError::validation(format!("Parameter '{}' is required.", field_name))
}

#[derive(Debug, Clone, Copy)]
pub enum FieldKind {
    Scalar(ValueKind),
    /// Array of objects, each checked against the nested rules.
    List(&'static [FieldRule]),
}

/// One entry of an operation's field contract.
#[derive(Debug, Clone, Copy)]
pub struct FieldRule {
    pub name: &'static str,
    pub kind: FieldKind,
    pub required: bool,
}

impl FieldRule {
    pub const fn required(name: &'static str, kind: ValueKind) -> Self {
        Self {
            name,
            kind: FieldKind::Scalar(kind),
            required: true,
        }
    }

    pub const fn optional(name: &'static str, kind: ValueKind) -> Self {
        Self {
            name,
            kind: FieldKind::Scalar(kind),
            required: false,
        }
    }

    pub const fn list(name: &'static str, elements: &'static [FieldRule]) -> Self {
        Self {
            name,
            kind: FieldKind::List(elements),
            required: false,
        }
    }
}

/// Checks a JSON object against a field contract.
///
/// Required fields go through [`validate_required`]; every present, non-null field
/// goes through [`validate_type`]. List elements are reported as `name[index].field`.
pub fn check_fields(object: &Map<String, Value>, rules: &[FieldRule], prefix: &str) -> Result<()> {
    for rule in rules {
        let field_name = if prefix.is_empty() {
            rule.name.to_string()
        } else {
            format!("{}.{}", prefix, rule.name)
        };
        let value = object.get(rule.name);

        if rule.required {
            validate_required(&field_name, value)?;
        }

        let Some(value) = value.filter(|v| !v.is_null()) else {
            continue;
        };

        match rule.kind {
            FieldKind::Scalar(kind) => validate_type(&field_name, value, kind)?,
            FieldKind::List(elements) => {
                let items = value.as_array().ok_or_else(|| {
                    ZuriPayError::validation(format!("Parameter '{}' must be an array.", field_name))
                })?;
                for (index, item) in items.iter().enumerate() {
                    let item_name = format!("{}[{}]", field_name, index);
                    let item_object = item.as_object().ok_or_else(|| {
                        ZuriPayError::validation(format!(
                            "Parameter '{}' must be an object.",
                            item_name
                        ))
                    })?;
                    check_fields(item_object, elements, &item_name)?;
                }
            }
        }
    }

    Ok(())
}

/// Request payloads sent to the API.
///
/// `validate` runs before every request; `from_value` builds the typed payload out of
/// untyped JSON so that wrong primitive kinds surface as validation errors naming the field.
pub trait RequestOptions: Serialize + DeserializeOwned {
    const FIELDS: &'static [FieldRule];

    /// Cross-field rules, e.g. "at least one contact method".
    fn check_invariants(&self) -> Result<()> {
        Ok(())
    }

    fn validate(&self) -> Result<()> {
        let value = serde_json::to_value(self)?;
        let object = value
            .as_object()
            .ok_or_else(|| ZuriPayError::validation("Request options must be a JSON object."))?;
        check_fields(object, Self::FIELDS, "")?;
        self.check_invariants()
    }

    fn from_value(value: Value) -> Result<Self> {
        {
            let object = value
                .as_object()
                .ok_or_else(|| ZuriPayError::validation("Request options must be a JSON object."))?;
            check_fields(object, Self::FIELDS, "")?;
        }

        let options: Self = serde_json::from_value(value)
            .map_err(|e| ZuriPayError::validation(format!("Invalid request options: {}", e)))?;
        options.check_invariants()?;
        Ok(options)
    }
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(ZuriPayError::config(format!("{}: URL cannot be empty", field_name)));
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(ZuriPayError::config(format!(
                "{}: unsupported URL scheme: {}",
                field_name, scheme
            ))),
        },
        Err(e) => Err(ZuriPayError::config(format!(
            "{}: invalid URL format '{}': {}",
            field_name, url_str, e
        ))),
    }
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ZuriPayError::config(format!(
            "{}: value cannot be empty or whitespace-only",
            field_name
        )));
    }
    Ok(())
}
