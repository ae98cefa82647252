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

use super::{builtin, Check, CheckFuture, SharedCheck};
use crate::error::{CheckError, ValidationError, ValidationErrorKind};
use crate::validator::Scrutiny;
use futures::future::ready;
use futures::FutureExt;
use regex::Regex;
use scrutiny_model::Value;
use smol_str::SmolStr;
use std::sync::Arc;

/// Record the failure of an inner check as the cause of a failure of kind
/// `kind`. Defects in user code pass through untouched.
fn rewrap(result: Result<(), CheckError>, kind: ValidationErrorKind) -> Result<(), CheckError> {
    match result {
        Ok(()) => Ok(()),
        Err(CheckError::Invalid(cause)) => Err(ValidationError::new(kind).caused_by(cause).into()),
        Err(defect) => Err(defect),
    }
}

struct OneOf {
    values: Vec<Value>,
}

impl Check for OneOf {
    fn apply<'a>(&'a self, _scrutiny: &'a Scrutiny, value: &'a Value) -> CheckFuture<'a> {
        let result: Result<(), CheckError> = if self.values.contains(value) {
            Ok(())
        } else {
            Err(ValidationError::new(ValidationErrorKind::NotOneOf).into())
        };
        ready(result).boxed()
    }
}

struct ArrayOf {
    item: SharedCheck,
}

impl Check for ArrayOf {
    fn apply<'a>(&'a self, scrutiny: &'a Scrutiny, value: &'a Value) -> CheckFuture<'a> {
        async move {
            let ArrayOf { item } = self;
            let array = builtin::array();
            rewrap(
                array.apply(scrutiny, value).await,
                ValidationErrorKind::NotArrayOf,
            )?;
            if let Value::Array(items) = value {
                let applied: Vec<CheckFuture<'_>> = items
                    .iter()
                    .map(|entry| item.apply(scrutiny, entry))
                    .collect();
                rewrap(
                    scrutiny.join_strategy().try_join_all(applied).await,
                    ValidationErrorKind::NotArrayOf,
                )?;
            }
            Ok(())
        }
        .boxed()
    }
}

struct ObjectOf {
    field: SharedCheck,
}

impl Check for ObjectOf {
    fn apply<'a>(&'a self, scrutiny: &'a Scrutiny, value: &'a Value) -> CheckFuture<'a> {
        async move {
            let ObjectOf { field } = self;
            let object = builtin::object();
            rewrap(
                object.apply(scrutiny, value).await,
                ValidationErrorKind::NotObjectOf,
            )?;
            if let Value::Object(fields) = value {
                let applied: Vec<CheckFuture<'_>> = fields
                    .values()
                    .map(|entry| field.apply(scrutiny, entry))
                    .collect();
                rewrap(
                    scrutiny.join_strategy().try_join_all(applied).await,
                    ValidationErrorKind::NotObjectOf,
                )?;
            }
            Ok(())
        }
        .boxed()
    }
}

struct OneOfType {
    variants: Vec<SharedCheck>,
}

impl Check for OneOfType {
    fn apply<'a>(&'a self, scrutiny: &'a Scrutiny, value: &'a Value) -> CheckFuture<'a> {
        async move {
            let OneOfType { variants } = self;
            let applied: Vec<CheckFuture<'_>> = variants
                .iter()
                .map(|variant| variant.apply(scrutiny, value))
                .collect();
            let results = scrutiny.join_strategy().join_all(applied).await;
            if results.iter().any(Result::is_ok) {
                return Ok(());
            }
            for result in results {
                if let Err(defect @ CheckError::UserCodeError(_)) = result {
                    return Err(defect);
                }
            }
            Err(ValidationError::new(ValidationErrorKind::NotOneOfType).into())
        }
        .boxed()
    }
}

struct Shape {
    fields: Vec<(SmolStr, SharedCheck)>,
}

impl Check for Shape {
    fn apply<'a>(&'a self, scrutiny: &'a Scrutiny, value: &'a Value) -> CheckFuture<'a> {
        async move {
            let Shape { fields: expected } = self;
            let object = builtin::object();
            rewrap(
                object.apply(scrutiny, value).await,
                ValidationErrorKind::InvalidShape,
            )?;
            if let Value::Object(fields) = value {
                if expected.len() > fields.len() {
                    return Err(ValidationError::with_message(
                        ValidationErrorKind::InvalidShape,
                        "The value has fewer fields than the shape requires.",
                    )
                    .into());
                }
                let mut applied: Vec<CheckFuture<'_>> = Vec::with_capacity(expected.len());
                for (name, check) in expected {
                    match fields.get(name.as_str()) {
                        Some(field) => applied.push(check.apply(scrutiny, field)),
                        None => {
                            return Err(ValidationError::with_message(
                                ValidationErrorKind::InvalidShape,
                                format!("The field '{}' is absent.", name),
                            )
                            .into())
                        }
                    }
                }
                rewrap(
                    scrutiny.join_strategy().try_join_all(applied).await,
                    ValidationErrorKind::InvalidShape,
                )?;
            }
            Ok(())
        }
        .boxed()
    }
}

struct Matching {
    pattern: Regex,
}

impl Check for Matching {
    fn apply<'a>(&'a self, scrutiny: &'a Scrutiny, value: &'a Value) -> CheckFuture<'a> {
        async move {
            let Matching { pattern } = self;
            let string = builtin::string();
            string.apply(scrutiny, value).await?;
            if let Value::Text(text) = value {
                if !pattern.is_match(text) {
                    return Err(ValidationError::with_message(
                        ValidationErrorKind::NoMatch,
                        format!("'{}' does not match {}.", text, pattern),
                    )
                    .into());
                }
            }
            Ok(())
        }
        .boxed()
    }
}

/// A check that passes values equal to a member of `values`.
pub fn one_of<I: IntoIterator<Item = Value>>(values: I) -> SharedCheck {
    Arc::new(OneOf {
        values: values.into_iter().collect(),
    })
}

/// A check that passes arrays where every item passes `item`. The failure of
/// an item is recorded as the cause of the failure of the array.
pub fn array_of(item: SharedCheck) -> SharedCheck {
    Arc::new(ArrayOf { item })
}

/// A check that passes objects where the value of every field passes `field`.
/// The failure of a field is recorded as the cause of the failure of the
/// object.
pub fn object_of(field: SharedCheck) -> SharedCheck {
    Arc::new(ObjectOf { field })
}

/// A check that passes values satisfying at least one of `variants`. An error
/// raised by the user code of one variant only propagates if no other variant
/// passes the value.
pub fn one_of_type<I: IntoIterator<Item = SharedCheck>>(variants: I) -> SharedCheck {
    Arc::new(OneOfType {
        variants: variants.into_iter().collect(),
    })
}

/// A check that passes objects with at least the fields named by `fields`,
/// where the value of each named field passes the check paired with it.
/// Fields of the object that the shape does not name are ignored. Later
/// entries replace earlier entries with the same name.
pub fn shape<I, K>(fields: I) -> SharedCheck
where
    I: IntoIterator<Item = (K, SharedCheck)>,
    K: Into<SmolStr>,
{
    let mut named: Vec<(SmolStr, SharedCheck)> = Vec::new();
    for (name, check) in fields {
        let name = name.into();
        match named.iter().position(|(existing, _)| *existing == name) {
            Some(i) => named[i].1 = check,
            None => named.push((name, check)),
        }
    }
    Arc::new(Shape { fields: named })
}

/// A check that passes strings matching `pattern`.
pub fn matching(pattern: &str) -> Result<SharedCheck, regex::Error> {
    Ok(Arc::new(Matching {
        pattern: Regex::new(pattern)?,
    }))
}
