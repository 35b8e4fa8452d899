//! YAML parsing into the configuration tree model.

use confguard_types::{ConfigMap, ConfigValue, Scalar};
use serde_yaml::Value;

use crate::error::{LoadError, LoadResult};
use crate::format::Format;
use crate::load::MAX_DEPTH;

/// Parse a YAML document into a [`ConfigMap`].
///
/// The document root must be a mapping; scalar-, sequence-, and null-rooted
/// documents (including the empty document) are rejected rather than
/// guessed at.
pub(crate) fn parse(input: &str) -> LoadResult<ConfigMap> {
    let root: Value = serde_yaml::from_str(input)
        .map_err(|e| LoadError::malformed(Format::Yaml, e.to_string()))?;

    match root {
        Value::Mapping(mapping) => convert_mapping(mapping, 1),
        other => Err(LoadError::malformed(
            Format::Yaml,
            format!("document root is not a mapping (found {})", kind_name(&other)),
        )),
    }
}

fn convert_mapping(mapping: serde_yaml::Mapping, depth: usize) -> LoadResult<ConfigMap> {
    if depth > MAX_DEPTH {
        return Err(LoadError::malformed(
            Format::Yaml,
            format!("nesting depth exceeds the limit of {MAX_DEPTH}"),
        ));
    }

    let mut map = ConfigMap::new();
    for (key, value) in mapping {
        let key = match key {
            Value::String(s) => s,
            other => {
                return Err(LoadError::malformed(
                    Format::Yaml,
                    format!("mapping key is not a string (found {})", kind_name(&other)),
                ))
            }
        };
        map.insert(key, convert_value(value, depth)?);
    }
    Ok(map)
}

fn convert_value(value: Value, depth: usize) -> LoadResult<ConfigValue> {
    Ok(match value {
        Value::Null => ConfigValue::Scalar(Scalar::Null),
        Value::Bool(b) => ConfigValue::Scalar(Scalar::Bool(b)),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                ConfigValue::Scalar(Scalar::Int(i))
            } else if let Some(f) = n.as_f64() {
                ConfigValue::Scalar(Scalar::Float(f))
            } else {
                return Err(LoadError::malformed(
                    Format::Yaml,
                    format!("unrepresentable number: {n}"),
                ));
            }
        }
        Value::String(s) => ConfigValue::Scalar(Scalar::String(s)),
        Value::Sequence(items) => ConfigValue::List(
            items
                .into_iter()
                .map(|item| convert_value(item, depth))
                .collect::<LoadResult<Vec<_>>>()?,
        ),
        Value::Mapping(mapping) => ConfigValue::Map(convert_mapping(mapping, depth + 1)?),
        // Tags carry no comparison semantics; unwrap to the inner value.
        Value::Tagged(tagged) => convert_value(tagged.value, depth)?,
    })
}

fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a sequence",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}
