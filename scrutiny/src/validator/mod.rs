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

use crate::checks::{builtin_checks, CheckFuture, SharedCheck};
use crate::error::{CheckError, RegistrationError};
use scrutiny_model::Value;
use smol_str::SmolStr;
use static_assertions::assert_impl_all;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

pub mod join;

use join::{JoinStrategy, OrderedJoin};

/// The named checks known to a validator instance. Every registry starts out
/// with the standard built-in checks and grows as further checks are
/// registered.
#[derive(Clone)]
pub struct Checks {
    checks: HashMap<SmolStr, SharedCheck>,
}

impl Default for Checks {
    fn default() -> Self {
        Checks {
            checks: builtin_checks(),
        }
    }
}

impl Checks {
    /// Get the check registered under `name`, if there is one.
    pub fn get(&self, name: &str) -> Option<SharedCheck> {
        self.checks.get(name).cloned()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.checks.contains_key(name)
    }

    /// The names of the registered checks, in no particular order.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.checks.keys().map(SmolStr::as_str)
    }

    pub fn len(&self) -> usize {
        self.checks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.checks.is_empty()
    }

    fn insert(&mut self, name: SmolStr, check: SharedCheck) {
        self.checks.insert(name, check);
    }
}

/// An asynchronous value validator. Each instance owns an independent registry
/// of named checks and the strategy with which simultaneously applied checks
/// are joined.
pub struct Scrutiny {
    checks: Checks,
    join: Arc<dyn JoinStrategy>,
}

assert_impl_all!(Scrutiny: Send, Sync);

impl Default for Scrutiny {
    fn default() -> Self {
        Scrutiny::new()
    }
}

impl Scrutiny {
    /// A validator joining checks with [`OrderedJoin`], which reports failures
    /// deterministically.
    pub fn new() -> Scrutiny {
        Scrutiny::with_join_strategy(OrderedJoin)
    }

    /// A validator joining checks with the provided strategy.
    pub fn with_join_strategy<J: JoinStrategy + 'static>(join: J) -> Scrutiny {
        Scrutiny {
            checks: Checks::default(),
            join: Arc::new(join),
        }
    }

    /// The checks registered with this validator.
    pub fn checks(&self) -> &Checks {
        &self.checks
    }

    /// The strategy with which this validator joins concurrent checks.
    pub fn join_strategy(&self) -> &dyn JoinStrategy {
        self.join.as_ref()
    }

    /// Register `check` under `name`. Names are unique within an instance and
    /// the built-in checks cannot be replaced.
    pub fn register(&mut self, name: &str, check: SharedCheck) -> Result<(), RegistrationError> {
        if name.is_empty() {
            return Err(RegistrationError::EmptyName);
        }
        if self.checks.contains(name) {
            return Err(RegistrationError::DuplicateCheck(SmolStr::new(name)));
        }
        debug!(name = %name, "Registering a new check.");
        self.checks.insert(SmolStr::new(name), check);
        Ok(())
    }

    /// Apply every one of `checks` to `value` concurrently. Resolves to the
    /// value itself when all of the checks pass and to the error of a failed
    /// check otherwise. A value to which no checks are applied is trivially
    /// valid.
    ///
    /// The future only completes once the outcome is decided. A check that
    /// neither passes nor fails leaves the future pending unless another
    /// check fails in the meantime; there is no timeout here, so callers
    /// needing one must race the returned future against their own, for
    /// example with `tokio::time::timeout`.
    pub async fn validate<'a>(
        &self,
        value: &'a Value,
        checks: &[SharedCheck],
    ) -> Result<&'a Value, CheckError> {
        if checks.is_empty() {
            return Ok(value);
        }
        let applied: Vec<CheckFuture<'_>> = checks
            .iter()
            .map(|check| check.apply(self, value))
            .collect();
        self.join.try_join_all(applied).await?;
        Ok(value)
    }
}
