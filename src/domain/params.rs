/// A single value in the argument bag: a scalar, a sequence, or a nested
/// string-keyed mapping (insertion order preserved).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamValue {
    Scalar(String),
    Seq(Vec<ParamValue>),
    Map(Vec<(String, ParamValue)>),
}

impl ParamValue {
    /// Build an ordered nested mapping from `(key, value)` pairs.
    pub fn map<K, V, I>(entries: I) -> Self
    where
        K: Into<String>,
        V: Into<ParamValue>,
        I: IntoIterator<Item = (K, V)>,
    {
        Self::Map(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// Build a sequence from an iterator of values.
    pub fn seq<V, I>(items: I) -> Self
    where
        V: Into<ParamValue>,
        I: IntoIterator<Item = V>,
    {
        Self::Seq(items.into_iter().map(Into::into).collect())
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        Self::Scalar(value.to_owned())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        Self::Scalar(value)
    }
}

impl From<&String> for ParamValue {
    fn from(value: &String) -> Self {
        Self::Scalar(value.clone())
    }
}

impl From<u64> for ParamValue {
    fn from(value: u64) -> Self {
        Self::Scalar(value.to_string())
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        Self::Scalar(value.to_string())
    }
}

impl From<u32> for ParamValue {
    fn from(value: u32) -> Self {
        Self::Scalar(value.to_string())
    }
}

impl From<u8> for ParamValue {
    fn from(value: u8) -> Self {
        Self::Scalar(value.to_string())
    }
}

impl From<bool> for ParamValue {
    /// Booleans cross the wire as `1`/`0`.
    fn from(value: bool) -> Self {
        Self::Scalar(if value { "1" } else { "0" }.to_owned())
    }
}

impl<V: Into<ParamValue>> From<Vec<V>> for ParamValue {
    fn from(value: Vec<V>) -> Self {
        Self::seq(value)
    }
}

/// Ordered argument bag for one API call.
///
/// Keys are unique: [`Params::set`] removes any previous occurrence before
/// appending, so injected fields (`api_key`, `format`) always overwrite
/// caller-supplied values instead of being duplicated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params(Vec<(String, ParamValue)>);

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a key, replacing any previous occurrence.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> &mut Self {
        let key = key.into();
        self.0.retain(|(existing, _)| *existing != key);
        self.0.push((key, value.into()));
        self
    }

    /// Chainable [`Params::set`].
    pub fn with(mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.set(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.0
            .iter()
            .find_map(|(existing, value)| (existing == key).then_some(value))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
