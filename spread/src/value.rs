//! The [`Value`] and [`Data`] types.
use std::{
    borrow::Cow,
    collections::{BTreeMap, HashMap, btree_map},
};

use crate::Fragment;

/// A bindable value.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Value {
    /// Absent value, every declared marker starts as `Null`.
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    UInt(u64),
    Float(f64),
    Str(Box<str>),
    /// Expanded into one sibling per item at text position.
    List(Vec<Value>),
    /// Nested data, walked by dotted marker names.
    Map(Data),
    /// Rendered and spliced in at text position.
    Fragment(Box<Fragment>),
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns `true` for values that have a text form.
    pub fn is_scalar(&self) -> bool {
        !matches!(self, Value::List(_) | Value::Map(_) | Value::Fragment(_))
    }

    /// Value kind name used in diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) | Value::UInt(_) => "integer",
            Value::Float(_) => "float",
            Value::Str(_) => "string",
            Value::List(_) => "list",
            Value::Map(_) => "map",
            Value::Fragment(_) => "fragment",
        }
    }

    /// The text form of a scalar value.
    ///
    /// `Null` is empty, integers are formatted with [`itoa`], floats with the shortest
    /// round-trip form from [`ryu`], booleans are `true` or `false`.
    ///
    /// Returns [`None`] for list, map, and fragment.
    pub fn as_text(&self) -> Option<Cow<'_, str>> {
        let text = match self {
            Value::Null => Cow::Borrowed(""),
            Value::Bool(true) => Cow::Borrowed("true"),
            Value::Bool(false) => Cow::Borrowed("false"),
            Value::Int(int) => Cow::Owned(itoa::Buffer::new().format(*int).to_owned()),
            Value::UInt(int) => Cow::Owned(itoa::Buffer::new().format(*int).to_owned()),
            Value::Float(float) => Cow::Owned(ryu::Buffer::new().format(*float).to_owned()),
            Value::Str(s) => Cow::Borrowed(&**s),
            Value::List(_) | Value::Map(_) | Value::Fragment(_) => return None,
        };
        Some(text)
    }

    /// Walk one path segment, into a map or into a bound fragment top level data.
    pub fn get(&self, key: &str) -> Option<&Value> {
        match self {
            Value::Map(data) => data.get(key),
            Value::Fragment(fragment) => fragment.data().get(key),
            _ => None,
        }
    }
}

macro_rules! from_int {
    ($variant:ident($target:ty): $($t:ty),*) => {
        $(
            impl From<$t> for Value {
                fn from(value: $t) -> Self {
                    Value::$variant(value as $target)
                }
            }
        )*
    };
}

from_int!(Int(i64): i8, i16, i32, i64, isize, u8, u16, u32);
from_int!(UInt(u64): u64, usize);

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Value::Float(value.into())
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<char> for Value {
    fn from(value: char) -> Self {
        Value::Str(value.to_string().into_boxed_str())
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Str(value.into())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Str(value.into_boxed_str())
    }
}

impl From<Box<str>> for Value {
    fn from(value: Box<str>) -> Self {
        Value::Str(value)
    }
}

impl From<Cow<'_, str>> for Value {
    fn from(value: Cow<'_, str>) -> Self {
        Value::Str(value.into())
    }
}

impl From<Data> for Value {
    fn from(value: Data) -> Self {
        Value::Map(value)
    }
}

impl From<Fragment> for Value {
    fn from(value: Fragment) -> Self {
        Value::Fragment(Box::new(value))
    }
}

impl From<&Fragment> for Value {
    fn from(value: &Fragment) -> Self {
        Value::Fragment(Box::new(value.clone()))
    }
}

impl<T> From<Option<T>> for Value where T: Into<Value> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

impl<T> From<Vec<T>> for Value where T: Into<Value> {
    fn from(value: Vec<T>) -> Self {
        Value::List(value.into_iter().map(Into::into).collect())
    }
}

// ===== Data =====

/// A key to [`Value`] mapping.
///
/// Used as [`Fragment::bind`] input and as the nested data of a [`Fragment`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Data {
    map: BTreeMap<Box<str>, Value>,
}

impl Data {
    /// Create new empty [`Data`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a value, returns the replaced value if any.
    pub fn insert(&mut self, key: impl Into<Box<str>>, value: impl Into<Value>) -> Option<Value> {
        self.map.insert(key.into(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.map.get(key)
    }

    /// Returns the value at `key`, inserting [`Value::Null`] if absent.
    pub(crate) fn entry(&mut self, key: &str) -> &mut Value {
        self.map.entry(key.into()).or_default()
    }

    pub(crate) fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
        self.map.get_mut(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.map.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Iterate entries sorted by key.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.map.iter().map(|(k,v)|(&**k,v))
    }
}

impl<K, V> FromIterator<(K, V)> for Data where K: Into<Box<str>>, V: Into<Value> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut data = Data::new();
        data.extend(iter);
        data
    }
}

impl<K, V> Extend<(K, V)> for Data where K: Into<Box<str>>, V: Into<Value> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key,value) in iter {
            self.insert(key, value);
        }
    }
}

impl IntoIterator for Data {
    type Item = (Box<str>, Value);
    type IntoIter = btree_map::IntoIter<Box<str>, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.map.into_iter()
    }
}

impl<K, V, const N: usize> From<[(K, V); N]> for Data where K: Into<Box<str>>, V: Into<Value> {
    fn from(value: [(K, V); N]) -> Self {
        value.into_iter().collect()
    }
}

impl<K, V> From<Vec<(K, V)>> for Data where K: Into<Box<str>>, V: Into<Value> {
    fn from(value: Vec<(K, V)>) -> Self {
        value.into_iter().collect()
    }
}

impl<K, V, S> From<HashMap<K, V, S>> for Data where K: Into<Box<str>>, V: Into<Value> {
    fn from(value: HashMap<K, V, S>) -> Self {
        value.into_iter().collect()
    }
}

impl<K, V> From<BTreeMap<K, V>> for Data where K: Into<Box<str>>, V: Into<Value> {
    fn from(value: BTreeMap<K, V>) -> Self {
        value.into_iter().collect()
    }
}
