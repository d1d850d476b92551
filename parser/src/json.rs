use models::LocalizedString;

use crate::DatasetError;

#[derive(Debug)]
pub struct JsonValue<T>(pub T);

fn lookup<'a>(value: &'a serde_json::Value, fields: &[&str]) -> &'a serde_json::Value {
    fields.iter().fold(value, |ptr, field| &ptr[*field])
}

/// Human readable name of a json node for error messages.
pub fn describe(value: &serde_json::Value) -> String {
    match value["id"].as_str() {
        Some(id) => format!("character {id:?}"),
        None => "<unnamed entry>".to_string(),
    }
}

fn missing(value: &serde_json::Value, fields: &[&str]) -> anyhow::Error {
    DatasetError::MissingField {
        context: describe(value),
        field: fields.join("."),
    }
    .into()
}

fn invalid(value: &serde_json::Value, fields: &[&str], reason: impl ToString) -> anyhow::Error {
    DatasetError::InvalidField {
        id: describe(value),
        field: fields.join("."),
        reason: reason.to_string(),
    }
    .into()
}

impl JsonValue<String> {
    pub fn extract(
        value: &serde_json::Value,
        fields: &[&str],
    ) -> anyhow::Result<JsonValue<String>> {
        match lookup(value, fields) {
            serde_json::Value::Null => Err(missing(value, fields)),
            ptr => ptr
                .as_str()
                .map(|s| JsonValue(s.to_string()))
                .ok_or_else(|| invalid(value, fields, "expected a string")),
        }
    }
}

impl JsonValue<Option<String>> {
    pub fn extract(
        value: &serde_json::Value,
        fields: &[&str],
    ) -> anyhow::Result<JsonValue<Option<String>>> {
        match lookup(value, fields) {
            serde_json::Value::Null => Ok(JsonValue(None)),
            ptr => ptr
                .as_str()
                .map(|s| JsonValue(Some(s.to_string())))
                .ok_or_else(|| invalid(value, fields, "expected a string")),
        }
    }
}

impl JsonValue<Vec<String>> {
    pub fn extract(
        value: &serde_json::Value,
        fields: &[&str],
    ) -> anyhow::Result<JsonValue<Vec<String>>> {
        let ptr = lookup(value, fields);
        if ptr.is_null() {
            return Err(missing(value, fields));
        }
        ptr.as_array()
            .ok_or_else(|| invalid(value, fields, "expected a list"))?
            .iter()
            .map(|s| {
                s.as_str()
                    .map(|s| s.to_string())
                    .ok_or_else(|| invalid(value, fields, format!("non-string entry {s}")))
            })
            .collect::<anyhow::Result<Vec<String>>>()
            .map(JsonValue)
    }
}

impl JsonValue<Option<Vec<serde_json::Value>>> {
    pub fn extract(
        value: &serde_json::Value,
        fields: &[&str],
    ) -> anyhow::Result<JsonValue<Option<Vec<serde_json::Value>>>> {
        match lookup(value, fields) {
            serde_json::Value::Null => Ok(JsonValue(None)),
            ptr => ptr
                .as_array()
                .map(|a| JsonValue(Some(a.clone())))
                .ok_or_else(|| invalid(value, fields, "expected a list")),
        }
    }
}

impl JsonValue<LocalizedString> {
    pub fn extract(
        value: &serde_json::Value,
        fields: &[&str],
    ) -> anyhow::Result<JsonValue<LocalizedString>> {
        match lookup(value, fields) {
            serde_json::Value::Null => Err(missing(value, fields)),
            ptr => serde_json::from_value(ptr.clone())
                .map(JsonValue)
                .map_err(|e| invalid(value, fields, e)),
        }
    }
}

impl JsonValue<Option<LocalizedString>> {
    pub fn extract(
        value: &serde_json::Value,
        fields: &[&str],
    ) -> anyhow::Result<JsonValue<Option<LocalizedString>>> {
        match lookup(value, fields) {
            serde_json::Value::Null => Ok(JsonValue(None)),
            ptr => serde_json::from_value(ptr.clone())
                .map(|s| JsonValue(Some(s)))
                .map_err(|e| invalid(value, fields, e)),
        }
    }
}

impl JsonValue<Option<Vec<LocalizedString>>> {
    pub fn extract(
        value: &serde_json::Value,
        fields: &[&str],
    ) -> anyhow::Result<JsonValue<Option<Vec<LocalizedString>>>> {
        match lookup(value, fields) {
            serde_json::Value::Null => Ok(JsonValue(None)),
            ptr => serde_json::from_value(ptr.clone())
                .map(|s| JsonValue(Some(s)))
                .map_err(|e| invalid(value, fields, e)),
        }
    }
}

/// Parses a raw field through a model `TryFrom<&str>` conversion.
pub fn parse_field<T>(value: &serde_json::Value, field: &str, raw: &str) -> anyhow::Result<T>
where
    T: for<'a> TryFrom<&'a str, Error = anyhow::Error>,
{
    T::try_from(raw).map_err(|e| invalid(value, &[field], e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn extract_walks_nested_fields() {
        let value = json!({ "id": "kalka", "build": { "weapons": ["Flame"] } });
        let JsonValue(weapons) = JsonValue::<Vec<String>>::extract(&value, &["build", "weapons"])
            .expect("nested list should extract");
        assert_eq!(weapons, vec!["Flame".to_string()]);
    }

    #[test]
    fn missing_required_field_is_typed() {
        let value = json!({ "id": "kalka" });
        let error = JsonValue::<String>::extract(&value, &["role"]).unwrap_err();
        assert!(matches!(
            error.downcast_ref::<DatasetError>(),
            Some(DatasetError::MissingField { field, .. }) if field == "role"
        ));
    }

    #[test]
    fn optional_field_absent_is_none() {
        let value = json!({ "id": "kalka", "cooldown": null });
        let JsonValue(cooldown) = JsonValue::<Option<String>>::extract(&value, &["cooldown"])
            .expect("null is an absent optional");
        assert_eq!(cooldown, None);
        let JsonValue(overview) =
            JsonValue::<Option<LocalizedString>>::extract(&value, &["overview"]).unwrap();
        assert_eq!(overview, None);
    }

    #[test]
    fn wrong_type_is_invalid_field() {
        let value = json!({ "id": "kalka", "role": 3 });
        let error = JsonValue::<String>::extract(&value, &["role"]).unwrap_err();
        assert!(matches!(
            error.downcast_ref::<DatasetError>(),
            Some(DatasetError::InvalidField { .. })
        ));
    }
}
