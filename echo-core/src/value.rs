// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

//! The language-native value tree fed into and produced by every serializer.

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use chrono::NaiveDateTime;
use indexmap::IndexMap;
use serde_json::Value as JsonValue;

/// Ordered field map used for struct-shaped values.
pub type Fields = IndexMap<String, Value>;

/// A value that is computed on demand, resolved once at the start of `to_raw`.
#[derive(Clone)]
pub struct Resolvable(Arc<dyn Fn() -> Value + Send + Sync>);

impl Resolvable {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn() -> Value + Send + Sync + 'static,
    {
        Resolvable(Arc::new(f))
    }

    pub fn resolve(&self) -> Value {
        (self.0)()
    }
}

impl fmt::Debug for Resolvable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Resolvable(..)")
    }
}

/// Dynamic value accepted by `to_raw` and returned by `read_from_buffer`.
///
/// `Null` stands for an absent/undefined value. Integers are carried as
/// `i128`, which holds every `u64` and `i64` without loss.
#[derive(Clone, Debug, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Int(i128),
    Str(String),
    Bytes(Vec<u8>),
    Array(Vec<Value>),
    Object(Fields),
    Lazy(Resolvable),
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Bytes(a), Value::Bytes(b)) => a == b,
            (Value::Array(a), Value::Array(b)) => a == b,
            (Value::Object(a), Value::Object(b)) => a == b,
            (Value::Lazy(a), Value::Lazy(b)) => Arc::ptr_eq(&a.0, &b.0),
            _ => false,
        }
    }
}

impl Value {
    pub fn lazy<F>(f: F) -> Value
    where
        F: Fn() -> Value + Send + Sync + 'static,
    {
        Value::Lazy(Resolvable::new(f))
    }

    /// Follows `Lazy` indirections until a literal value is reached.
    pub fn resolve(&self) -> Cow<'_, Value> {
        match self {
            Value::Lazy(r) => {
                let mut v = r.resolve();
                while let Value::Lazy(inner) = v {
                    v = inner.resolve();
                }
                Cow::Owned(v)
            }
            v => Cow::Borrowed(v),
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Short name of the variant, used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "integer",
            Value::Str(_) => "string",
            Value::Bytes(_) => "bytes",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
            Value::Lazy(_) => "lazy value",
        }
    }

    pub fn as_int(&self) -> Option<i128> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Value::Bytes(b) => Some(b),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(a) => Some(a),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&Fields> {
        match self {
            Value::Object(o) => Some(o),
            _ => None,
        }
    }

    /// Field lookup on an object; `None` for other variants and missing keys.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_object().and_then(|o| o.get(key))
    }

    /// Converts RPC JSON into a value tree.
    ///
    /// Integral numbers become [`Value::Int`]. Any other number keeps its
    /// decimal text as [`Value::Str`], so integer codecs reject it instead of
    /// silently rounding.
    pub fn from_json(json: JsonValue) -> Value {
        match json {
            JsonValue::Null => Value::Null,
            JsonValue::Bool(b) => Value::Bool(b),
            JsonValue::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Value::Int(i as i128)
                } else if let Some(u) = n.as_u64() {
                    Value::Int(u as i128)
                } else {
                    match n.as_f64() {
                        Some(f) if f.fract() == 0.0 && f.abs() <= 9_007_199_254_740_992.0 => {
                            Value::Int(f as i128)
                        }
                        _ => Value::Str(n.to_string()),
                    }
                }
            }
            JsonValue::String(s) => Value::Str(s),
            JsonValue::Array(a) => Value::Array(a.into_iter().map(Value::from_json).collect()),
            JsonValue::Object(o) => Value::Object(
                o.into_iter()
                    .map(|(k, v)| (k, Value::from_json(v)))
                    .collect(),
            ),
        }
    }

    /// Schema-less JSON rendering. Bytes become lowercase hex; integers that
    /// do not fit a JSON number losslessly become decimal strings.
    pub fn to_json(&self) -> JsonValue {
        match &*self.resolve() {
            Value::Null => JsonValue::Null,
            Value::Bool(b) => JsonValue::Bool(*b),
            Value::Int(i) => int_to_json(*i),
            Value::Str(s) => JsonValue::String(s.clone()),
            Value::Bytes(b) => JsonValue::String(hex::encode(b)),
            Value::Array(a) => JsonValue::Array(a.iter().map(Value::to_json).collect()),
            Value::Object(o) => JsonValue::Object(
                o.iter()
                    .map(|(k, v)| (k.clone(), v.to_json()))
                    .collect(),
            ),
            Value::Lazy(_) => JsonValue::Null,
        }
    }
}

fn int_to_json(i: i128) -> JsonValue {
    if let Ok(v) = i64::try_from(i) {
        JsonValue::from(v)
    } else if let Ok(v) = u64::try_from(i) {
        JsonValue::from(v)
    } else {
        JsonValue::String(i.to_string())
    }
}

macro_rules! impl_from_int {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                fn from(v: $ty) -> Self {
                    Value::Int(v as i128)
                }
            }
        )*
    };
}

impl_from_int!(u8, u16, u32, u64, i8, i16, i32, i64, i128, usize);

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Str(v.to_owned())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Str(v)
    }
}

impl From<Vec<u8>> for Value {
    fn from(v: Vec<u8>) -> Self {
        Value::Bytes(v)
    }
}

impl From<Vec<Value>> for Value {
    fn from(v: Vec<Value>) -> Self {
        Value::Array(v)
    }
}

impl From<Fields> for Value {
    fn from(v: Fields) -> Self {
        Value::Object(v)
    }
}

impl From<JsonValue> for Value {
    fn from(v: JsonValue) -> Self {
        Value::from_json(v)
    }
}

impl From<NaiveDateTime> for Value {
    fn from(v: NaiveDateTime) -> Self {
        Value::Int(v.and_utc().timestamp() as i128)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::Null, Into::into)
    }
}

impl<A: Into<Value>, B: Into<Value>> From<(A, B)> for Value {
    fn from((a, b): (A, B)) -> Self {
        Value::Array(vec![a.into(), b.into()])
    }
}
