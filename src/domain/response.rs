/// Decoded JSON response body: an opaque string-keyed mapping.
///
/// Response shapes are operation-specific and deliberately not validated by
/// this crate; callers pick out the fields they need.
pub type JsonObject = serde_json::Map<String, serde_json::Value>;
