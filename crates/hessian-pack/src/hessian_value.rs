//! [`HessianValue`] — the value type produced by the Hessian decoder.

/// Value decoded from one Hessian 2.0 tag.
///
/// Covers the scalar subset of the wire format plus the string-keyed map
/// used as the placeholder for tag families the decoder does not handle
/// yet.
#[derive(Debug, Clone, PartialEq)]
pub enum HessianValue {
    /// 'N'
    Null,
    /// 'T' / 'F'
    Bool(bool),
    /// Compact or full 32-bit integer
    Int32(i32),
    /// Compact long, or a long carried as a full 32-bit integer ('Y')
    Int64(i64),
    /// Object-like value (ordered key-value pairs). Currently only produced
    /// empty, as the fallback for unrecognized tags.
    Map(Vec<(String, HessianValue)>),
}

impl From<HessianValue> for serde_json::Value {
    fn from(v: HessianValue) -> Self {
        match v {
            HessianValue::Null => serde_json::Value::Null,
            HessianValue::Bool(b) => serde_json::Value::Bool(b),
            HessianValue::Int32(i) => serde_json::json!(i),
            HessianValue::Int64(i) => serde_json::json!(i),
            HessianValue::Map(entries) => serde_json::Value::Object(
                entries
                    .into_iter()
                    .map(|(k, v)| (k, serde_json::Value::from(v)))
                    .collect(),
            ),
        }
    }
}
