//! Shared query infrastructure: [`Params`], the [`Query`] trait, [`QueryCommon`]
//! pagination fields and [`DateRange`].

use std::fmt;

use chrono::NaiveDate;
use url::Url;

/// A single query-parameter value prior to serialization.
#[derive(Clone, Debug, PartialEq)]
pub enum ParamValue {
    Str(String),
    Int(i64),
    Float(f64),
    Bool(bool),
}

/// Booleans are always sent as lowercase `true` / `false`.
impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::Str(s) => f.write_str(s),
            ParamValue::Int(i) => write!(f, "{}", i),
            ParamValue::Float(x) => write!(f, "{}", x),
            ParamValue::Bool(true) => f.write_str("true"),
            ParamValue::Bool(false) => f.write_str("false"),
        }
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::Str(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        ParamValue::Str(value)
    }
}

impl From<&String> for ParamValue {
    fn from(value: &String) -> Self {
        ParamValue::Str(value.clone())
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        ParamValue::Int(value)
    }
}

impl From<i32> for ParamValue {
    fn from(value: i32) -> Self {
        ParamValue::Int(value.into())
    }
}

impl From<u32> for ParamValue {
    fn from(value: u32) -> Self {
        ParamValue::Int(value.into())
    }
}

impl From<f64> for ParamValue {
    fn from(value: f64) -> Self {
        ParamValue::Float(value)
    }
}

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        ParamValue::Bool(value)
    }
}

impl From<NaiveDate> for ParamValue {
    fn from(value: NaiveDate) -> Self {
        ParamValue::Str(value.format("%Y-%m-%d").to_string())
    }
}

/// Ordered query parameters for one request.
///
/// Keys are unique: setting an existing key replaces its value in place.
/// Unset optional values never produce a key.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Params {
    pairs: Vec<(String, ParamValue)>,
}

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `key` to `value`, replacing any previous value.
    pub fn insert(&mut self, key: &str, value: impl Into<ParamValue>) {
        let value = value.into();
        match self.pairs.iter_mut().find(|(k, _)| k == key) {
            Some((_, existing)) => *existing = value,
            None => self.pairs.push((key.to_string(), value)),
        }
    }

    pub fn with(mut self, key: &str, value: impl Into<ParamValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Sets `key` only when `value` is present.
    pub fn with_opt<V: Into<ParamValue>>(mut self, key: &str, value: Option<V>) -> Self {
        if let Some(value) = value {
            self.insert(key, value);
        }
        self
    }

    /// Sets `key` only when it has not been set already.
    pub fn with_default(mut self, key: &str, value: impl Into<ParamValue>) -> Self {
        if self.get(key).is_none() {
            self.insert(key, value);
        }
        self
    }

    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.pairs.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn remove(&mut self, key: &str) -> Option<ParamValue> {
        let index = self.pairs.iter().position(|(k, _)| k == key)?;
        Some(self.pairs.remove(index).1)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Serialized `(key, value)` pairs in insertion order.
    pub fn to_pairs(&self) -> Vec<(String, String)> {
        self.pairs
            .iter()
            .map(|(k, v)| (k.clone(), v.to_string()))
            .collect()
    }

    /// Appends every parameter to the URL's query string.
    pub fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        if !self.pairs.is_empty() {
            let mut query = url.query_pairs_mut();
            for (key, value) in self.iter() {
                query.append_pair(key, &value.to_string());
            }
        }
        url
    }
}

/// Trait implemented by all query builders. Provides parameter serialization
/// and shared builder methods for pagination.
pub trait Query {
    /// Parameters this query contributes to the request.
    fn to_params(&self) -> Params;

    /// Returns a mutable reference to the common query fields.
    fn get_common(&mut self) -> &mut QueryCommon;

    /// Appends this query's parameters to the given URL, returning the modified URL.
    fn add_to_url(&self, url: &Url) -> Url {
        self.to_params().add_to_url(url)
    }

    /// Sets the page number (0-indexed on this API).
    fn with_page(mut self, page: u32) -> Self
    where
        Self: Sized,
    {
        self.get_common().page = Some(page);
        self
    }

    /// Sets the maximum number of results.
    fn with_limit(mut self, limit: u32) -> Self
    where
        Self: Sized,
    {
        self.get_common().limit = Some(limit);
        self
    }
}

/// Pagination fields shared by all query types. Both are passed through
/// verbatim; `None` uses the API default.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct QueryCommon {
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

impl QueryCommon {
    /// Writes `page` and `limit` when set.
    pub fn apply(&self, params: Params) -> Params {
        params
            .with_opt("page", self.page)
            .with_opt("limit", self.limit)
    }
}

/// Optional `from` / `to` date bounds.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DateRange {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl DateRange {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_from(mut self, from: NaiveDate) -> Self {
        self.from = Some(from);
        self
    }

    pub fn with_to(mut self, to: NaiveDate) -> Self {
        self.to = Some(to);
        self
    }

    /// Writes `from` and `to` as `YYYY-MM-DD` when set.
    pub fn apply(&self, params: Params) -> Params {
        params.with_opt("from", self.from).with_opt("to", self.to)
    }
}
