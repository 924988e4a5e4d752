// Dashboard snapshot - Fixed-schema view of loosely typed upstream JSON
use serde::Serialize;
use serde_json::{Map, Value};

/// One field of a dashboard schema and the alternate upstream keys it accepts.
/// The primary name is always checked before any alias.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub name: &'static str,
    pub aliases: &'static [&'static str],
}

impl FieldSpec {
    pub const fn new(name: &'static str) -> Self {
        Self { name, aliases: &[] }
    }

    pub const fn with_aliases(name: &'static str, aliases: &'static [&'static str]) -> Self {
        Self { name, aliases }
    }

    /// First non-null value under the primary name, then each alias in order
    fn coalesce<'a>(&self, source: &'a Map<String, Value>) -> Option<&'a Value> {
        std::iter::once(self.name)
            .chain(self.aliases.iter().copied())
            .filter_map(|key| source.get(key))
            .find(|value| !value.is_null())
    }
}

#[derive(Debug, Clone, Copy)]
pub struct SnapshotSchema {
    fields: &'static [FieldSpec],
}

impl SnapshotSchema {
    pub const fn new(fields: &'static [FieldSpec]) -> Self {
        Self { fields }
    }

    #[cfg(test)]
    pub fn field_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().map(|f| f.name)
    }

    /// Per-field coalesce of `upstream` over `defaults`.
    ///
    /// The result carries exactly the schema's fields; unknown upstream keys are
    /// dropped. A non-object upstream body contributes nothing.
    pub fn normalize(&self, upstream: &Value, defaults: &Value) -> DashboardSnapshot {
        let empty = Map::new();
        let source = upstream.as_object().unwrap_or(&empty);

        let fields = self
            .fields
            .iter()
            .map(|field| {
                let value = field
                    .coalesce(source)
                    .or_else(|| defaults.get(field.name))
                    .cloned()
                    .unwrap_or(Value::Null);
                (field.name.to_string(), value)
            })
            .collect::<Map<String, Value>>();

        DashboardSnapshot(Value::Object(fields))
    }
}

/// Metric name to value mapping for one identity domain, built once per request.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct DashboardSnapshot(Value);

impl DashboardSnapshot {
    pub fn from_value(value: Value) -> Self {
        Self(value)
    }

    #[cfg(test)]
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }
}
