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

use crate::error::CheckError;
use crate::validator::Scrutiny;
use futures::future::ready;
use futures::future::BoxFuture;
use futures::FutureExt;
use scrutiny_model::Value;
use std::sync::Arc;

mod builtin;
mod combinator;

pub(crate) use builtin::builtin_checks;
pub use builtin::{any, array, boolean, func, number, object, string, undef};
pub use combinator::{array_of, matching, object_of, one_of, one_of_type, shape};

/// The type of futures produced by applying a check to a value.
pub type CheckFuture<'a> = BoxFuture<'a, Result<(), CheckError>>;

/// A reference counted check that can be shared between validator instances.
pub type SharedCheck = Arc<dyn Check>;

/// An asynchronous test that a [`Value`] either passes or fails.
pub trait Check: Send + Sync {
    /// Apply this check to a single value.
    ///
    /// # Arguments
    /// * `scrutiny` - The validator running the check. Composite checks use it
    ///    to apply their inner checks.
    /// * `value` - The value under scrutiny.
    fn apply<'a>(&'a self, scrutiny: &'a Scrutiny, value: &'a Value) -> CheckFuture<'a>;
}

struct FnCheck<F>(F);

impl<F> Check for FnCheck<F>
where
    F: Fn(&Scrutiny, &Value) -> Result<(), CheckError> + Send + Sync,
{
    fn apply<'a>(&'a self, scrutiny: &'a Scrutiny, value: &'a Value) -> CheckFuture<'a> {
        let FnCheck(f) = self;
        ready(f(scrutiny, value)).boxed()
    }
}

/// Create a check from a synchronous function.
pub fn from_fn<F>(f: F) -> SharedCheck
where
    F: Fn(&Scrutiny, &Value) -> Result<(), CheckError> + Send + Sync + 'static,
{
    Arc::new(FnCheck(f))
}

struct AsyncCheck<F>(F);

impl<F> Check for AsyncCheck<F>
where
    F: for<'a> Fn(&'a Scrutiny, &'a Value) -> CheckFuture<'a> + Send + Sync,
{
    fn apply<'a>(&'a self, scrutiny: &'a Scrutiny, value: &'a Value) -> CheckFuture<'a> {
        let AsyncCheck(f) = self;
        f(scrutiny, value)
    }
}

/// Create a check from a function that produces a boxed future.
pub fn from_async<F>(f: F) -> SharedCheck
where
    F: for<'a> Fn(&'a Scrutiny, &'a Value) -> CheckFuture<'a> + Send + Sync + 'static,
{
    Arc::new(AsyncCheck(f))
}
