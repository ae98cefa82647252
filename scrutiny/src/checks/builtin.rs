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

use super::{Check, CheckFuture, SharedCheck};
use crate::error::{CheckError, ValidationError, ValidationErrorKind};
use crate::validator::Scrutiny;
use futures::future::ready;
use futures::FutureExt;
use lazy_static::lazy_static;
use scrutiny_model::{Value, ValueKind};
use smol_str::SmolStr;
use std::collections::HashMap;
use std::sync::Arc;

struct Any;

impl Check for Any {
    fn apply<'a>(&'a self, _scrutiny: &'a Scrutiny, _value: &'a Value) -> CheckFuture<'a> {
        ready(Ok(())).boxed()
    }
}

/// Accepts exactly the values of one kind.
struct OfKind {
    expected: ValueKind,
    otherwise: ValidationErrorKind,
}

impl Check for OfKind {
    fn apply<'a>(&'a self, _scrutiny: &'a Scrutiny, value: &'a Value) -> CheckFuture<'a> {
        let result: Result<(), CheckError> = if value.kind() == self.expected {
            Ok(())
        } else {
            Err(ValidationError::new(self.otherwise.clone()).into())
        };
        ready(result).boxed()
    }
}

/// Accepts numbers other than NaN. NaN indicates a failed computation rather
/// than a numeric value so it does not count as a number here.
struct Numeric;

impl Check for Numeric {
    fn apply<'a>(&'a self, _scrutiny: &'a Scrutiny, value: &'a Value) -> CheckFuture<'a> {
        let result: Result<(), CheckError> = match value {
            Value::NumberValue(n) if !n.is_nan() => Ok(()),
            _ => Err(ValidationError::new(ValidationErrorKind::InvalidNumber).into()),
        };
        ready(result).boxed()
    }
}

fn of_kind(expected: ValueKind, otherwise: ValidationErrorKind) -> SharedCheck {
    Arc::new(OfKind { expected, otherwise })
}

lazy_static! {
    static ref ANY: SharedCheck = Arc::new(Any);
    static ref UNDEF: SharedCheck =
        of_kind(ValueKind::Undefined, ValidationErrorKind::ValueDefined);
    static ref STRING: SharedCheck = of_kind(ValueKind::Text, ValidationErrorKind::InvalidString);
    static ref BOOLEAN: SharedCheck =
        of_kind(ValueKind::Boolean, ValidationErrorKind::InvalidBool);
    static ref NUMBER: SharedCheck = Arc::new(Numeric);
    static ref FUNC: SharedCheck = of_kind(ValueKind::Func, ValidationErrorKind::InvalidFunc);
    static ref ARRAY: SharedCheck = of_kind(ValueKind::Array, ValidationErrorKind::InvalidArray);
    static ref OBJECT: SharedCheck =
        of_kind(ValueKind::Object, ValidationErrorKind::InvalidObject);
    static ref BUILTIN_CHECKS: HashMap<SmolStr, SharedCheck> = {
        let mut checks = HashMap::new();
        checks.insert(SmolStr::new("any"), any());
        checks.insert(SmolStr::new("undef"), undef());
        checks.insert(SmolStr::new("string"), string());
        checks.insert(SmolStr::new("bool"), boolean());
        checks.insert(SmolStr::new("number"), number());
        checks.insert(SmolStr::new("func"), func());
        checks.insert(SmolStr::new("array"), array());
        checks.insert(SmolStr::new("object"), object());
        checks
    };
}

/// A check that every value passes.
pub fn any() -> SharedCheck {
    ANY.clone()
}

/// A check that only the undefined value passes.
pub fn undef() -> SharedCheck {
    UNDEF.clone()
}

/// A check that only strings pass.
pub fn string() -> SharedCheck {
    STRING.clone()
}

/// A check that only booleans pass. Registered under the name `bool`.
pub fn boolean() -> SharedCheck {
    BOOLEAN.clone()
}

/// A check that only numbers pass. NaN is rejected, infinities are accepted.
pub fn number() -> SharedCheck {
    NUMBER.clone()
}

/// A check that only functions pass.
pub fn func() -> SharedCheck {
    FUNC.clone()
}

/// A check that only arrays pass, regardless of their items.
pub fn array() -> SharedCheck {
    ARRAY.clone()
}

/// A check that only objects pass, regardless of their fields.
pub fn object() -> SharedCheck {
    OBJECT.clone()
}

/// The checks that every new registry starts with, keyed by name.
pub(crate) fn builtin_checks() -> HashMap<SmolStr, SharedCheck> {
    BUILTIN_CHECKS.clone()
}
