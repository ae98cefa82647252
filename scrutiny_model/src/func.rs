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

use std::fmt::{Debug, Display, Formatter};
use std::sync::Arc;

use crate::Value;

/// A callable wrapped as a [`Value`](crate::Value). The behavior of a function is opaque to
/// validation; two functions are equal only when they are the same shared callable.
#[derive(Clone)]
pub struct Func(Arc<dyn Fn(&[Value]) -> Value + Send + Sync>);

impl Func {
    /// Wrap a function as a value.
    pub fn new<F>(f: F) -> Func
    where
        F: Fn(&[Value]) -> Value + Send + Sync + 'static,
    {
        Func(Arc::new(f))
    }

    /// Invoke the function with a sequence of arguments.
    pub fn call(&self, args: &[Value]) -> Value {
        (self.0)(args)
    }
}

impl PartialEq for Func {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Debug for Func {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Func(<fn>)")
    }
}

impl Display for Func {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "<fn>")
    }
}
