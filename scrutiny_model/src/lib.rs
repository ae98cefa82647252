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

//! # Scrutiny Value Model
//!
//! A dynamically typed value model for the Scrutiny validation engine. [`Value`] spans the
//! kinds of data a loosely typed caller can present for validation (booleans, numbers,
//! text, callables, arrays and keyed objects, along with an explicit null and an undefined
//! sentinel) and [`ValueKind`] names those kinds for reporting.

mod func;
#[cfg(test)]
mod tests;
mod value;

pub use func::Func;
pub use value::{Value, ValueKind};
