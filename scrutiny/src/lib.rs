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

//! # Scrutiny
//!
//! An asynchronous validation library for dynamically typed values. A value is
//! validated by applying checks to it concurrently. Validation resolves to the
//! value itself when every check passes and fails with the error of a failed
//! check otherwise.
//!
//! Every [`Scrutiny`] instance owns an independent registry of named checks,
//! seeded with the built-in checks of the [`checks`] module. Composite checks
//! are assembled with the factory functions of the same module and further
//! checks can be made available under new names with [`Scrutiny::register`].
//!
//! # Examples
//!
//! ```
//! use scrutiny::model::Value;
//! use scrutiny::{checks, Scrutiny};
//!
//! # futures::executor::block_on(async {
//! let scrutiny = Scrutiny::new();
//!
//! let hero = Value::object(vec![
//!     ("name", Value::text("Gilgamesh")),
//!     ("enemies", Value::from(vec!["Humbaba", "Gugalanna"])),
//! ]);
//!
//! let heroic = checks::shape(vec![
//!     ("name", checks::string()),
//!     ("enemies", checks::array_of(checks::string())),
//! ]);
//!
//! assert!(scrutiny.validate(&hero, &[heroic]).await.is_ok());
//! # });
//! ```

#[doc(inline)]
pub use scrutiny_model as model;

pub mod checks;
pub mod error;
pub mod validator;

pub use self::{
    checks::{Check, CheckFuture, SharedCheck},
    error::{CheckError, RegistrationError, ValidationError, ValidationErrorKind},
    validator::{
        join::{JoinStrategy, OrderedJoin, UnorderedJoin},
        Checks, Scrutiny,
    },
};
