// Copyright 2015-2024 Swim Inc.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::collections::BTreeMap;
use std::fmt::Write;
use std::fmt::{Display, Formatter};

use static_assertions::assert_impl_all;

use crate::Func;

/// The core Scrutiny model type. A dynamically typed value against which validation checks
/// are run.
#[derive(Clone, Debug, PartialEq, Default)]
pub enum Value {
    /// The undefined sentinel, the value of something that was never provided.
    #[default]
    Undefined,

    /// An explicit null. Distinct from [`Value::Undefined`].
    Null,

    /// A boolean wrapped as a [`Value`].
    BooleanValue(bool),

    /// A 64-bit floating point number wrapped as a [`Value`]. The not-a-number value and
    /// the infinities are representable; not-a-number compares unequal to everything,
    /// itself included.
    NumberValue(f64),

    /// A textual value.
    Text(String),

    /// A callable wrapped as a [`Value`]. Functions compare by identity.
    Func(Func),

    /// An ordered sequence of values.
    Array(Vec<Value>),

    /// A record of uniquely named fields. Fields iterate in key order, so operations over
    /// them are reproducible.
    Object(BTreeMap<String, Value>),
}

assert_impl_all!(Value: Send, Sync);

/// The kinds of [`Value`], separated from any payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Undefined,
    Null,
    Boolean,
    Number,
    Text,
    Func,
    Array,
    Object,
}

impl Display for ValueKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ValueKind::Undefined => write!(f, "Undefined"),
            ValueKind::Null => write!(f, "Null"),
            ValueKind::Boolean => write!(f, "Boolean"),
            ValueKind::Number => write!(f, "Number"),
            ValueKind::Text => write!(f, "Text"),
            ValueKind::Func => write!(f, "Func"),
            ValueKind::Array => write!(f, "Array"),
            ValueKind::Object => write!(f, "Object"),
        }
    }
}

impl Value {
    /// The kind of this value.
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Undefined => ValueKind::Undefined,
            Value::Null => ValueKind::Null,
            Value::BooleanValue(_) => ValueKind::Boolean,
            Value::NumberValue(_) => ValueKind::Number,
            Value::Text(_) => ValueKind::Text,
            Value::Func(_) => ValueKind::Func,
            Value::Array(_) => ValueKind::Array,
            Value::Object(_) => ValueKind::Object,
        }
    }

    /// Create a text value from anything that can be converted to a [`String`].
    pub fn text<T: ToString>(x: T) -> Value {
        Value::Text(x.to_string())
    }

    /// Create an array from a vector of anything that can be converted to [`Value`]s.
    pub fn from_vec<V: Into<Value>>(items: Vec<V>) -> Value {
        Value::Array(items.into_iter().map(Into::into).collect())
    }

    /// Create an array with no elements.
    pub fn empty_array() -> Value {
        Value::Array(vec![])
    }

    /// Create an object from a vector of named fields. Later entries overwrite earlier
    /// entries with the same name.
    pub fn object<K, V>(fields: Vec<(K, V)>) -> Value
    where
        K: Into<String>,
        V: Into<Value>,
    {
        Value::Object(
            fields
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }

    /// Create an object with no fields.
    pub fn empty_object() -> Value {
        Value::Object(BTreeMap::new())
    }

    /// Create a callable value.
    pub fn func<F>(f: F) -> Value
    where
        F: Fn(&[Value]) -> Value + Send + Sync + 'static,
    {
        Value::Func(Func::new(f))
    }
}

fn write_string_literal(literal: &str, f: &mut Formatter<'_>) -> std::fmt::Result {
    f.write_str("\"")?;
    for c in literal.chars() {
        match c {
            '"' => f.write_str("\\\"")?,
            '\\' => f.write_str("\\\\")?,
            '\r' => f.write_str("\\r")?,
            '\n' => f.write_str("\\n")?,
            '\t' => f.write_str("\\t")?,
            ow => f.write_char(ow)?,
        }
    }
    f.write_str("\"")
}

impl Display for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Undefined => f.write_str("undefined"),
            Value::Null => f.write_str("null"),
            Value::BooleanValue(p) => write!(f, "{}", p),
            Value::NumberValue(n) => write!(f, "{}", n),
            Value::Text(text) => write_string_literal(text, f),
            Value::Func(func) => write!(f, "{}", func),
            Value::Array(items) => {
                f.write_str("[")?;
                let mut first = true;
                for item in items {
                    if !first {
                        f.write_str(", ")?;
                    }
                    first = false;
                    write!(f, "{}", item)?;
                }
                f.write_str("]")
            }
            Value::Object(fields) => {
                f.write_str("{")?;
                let mut first = true;
                for (key, value) in fields {
                    if !first {
                        f.write_str(", ")?;
                    }
                    first = false;
                    write_string_literal(key, f)?;
                    f.write_str(": ")?;
                    write!(f, "{}", value)?;
                }
                f.write_str("}")
            }
        }
    }
}

impl From<bool> for Value {
    fn from(p: bool) -> Value {
        Value::BooleanValue(p)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Value {
        Value::NumberValue(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Value {
        Value::NumberValue(n.into())
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Value {
        Value::NumberValue(n.into())
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Value {
        Value::Text(s.to_owned())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Value {
        Value::Text(s)
    }
}

impl From<Func> for Value {
    fn from(func: Func) -> Value {
        Value::Func(func)
    }
}

impl<V: Into<Value>> From<Vec<V>> for Value {
    fn from(items: Vec<V>) -> Value {
        Value::from_vec(items)
    }
}

impl<V: Into<Value>> From<Option<V>> for Value {
    fn from(option: Option<V>) -> Value {
        match option {
            Some(value) => value.into(),
            None => Value::Null,
        }
    }
}
