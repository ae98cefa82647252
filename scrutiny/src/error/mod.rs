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

use smol_str::SmolStr;
use std::borrow::Cow;
use std::fmt::{self, Display, Formatter};
use thiserror::Error;

#[cfg(test)]
mod tests;

/// The ways in which a value can fail validation.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ValidationErrorKind {
    /// A value was present where none was expected.
    ValueDefined,
    /// The value is not a string.
    InvalidString,
    /// The value is not a boolean.
    InvalidBool,
    /// The value is not a finite or infinite number.
    InvalidNumber,
    /// The value is not a function.
    InvalidFunc,
    /// The value is not an array.
    InvalidArray,
    /// The value is not an object.
    InvalidObject,
    /// The value is not a member of a set of permitted values.
    NotOneOf,
    /// The value is not an array with items of the expected type.
    NotArrayOf,
    /// The value is not an object with fields of the expected type.
    NotObjectOf,
    /// The value satisfies none of a set of alternative checks.
    NotOneOfType,
    /// The value does not conform to an object shape.
    InvalidShape,
    /// The text does not match a pattern.
    NoMatch,
    /// A tag chosen by a user defined check.
    Custom(SmolStr),
}

impl Display for ValidationErrorKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ValidationErrorKind::ValueDefined => write!(f, "The value is defined."),
            ValidationErrorKind::InvalidString => write!(f, "The value is not a string."),
            ValidationErrorKind::InvalidBool => write!(f, "The value is not a boolean."),
            ValidationErrorKind::InvalidNumber => write!(f, "The value is not a number."),
            ValidationErrorKind::InvalidFunc => write!(f, "The value is not a function."),
            ValidationErrorKind::InvalidArray => write!(f, "The value is not an array."),
            ValidationErrorKind::InvalidObject => write!(f, "The value is not an object."),
            ValidationErrorKind::NotOneOf => {
                write!(f, "The value is not one of the permitted values.")
            }
            ValidationErrorKind::NotArrayOf => {
                write!(f, "The value is not an array of the expected type.")
            }
            ValidationErrorKind::NotObjectOf => {
                write!(f, "The value is not an object of the expected type.")
            }
            ValidationErrorKind::NotOneOfType => {
                write!(f, "The value does not match any of the permitted types.")
            }
            ValidationErrorKind::InvalidShape => {
                write!(f, "The value does not have the expected shape.")
            }
            ValidationErrorKind::NoMatch => {
                write!(f, "The text does not match the expected pattern.")
            }
            ValidationErrorKind::Custom(tag) => write!(f, "{}", tag),
        }
    }
}

/// A value was rejected by one of the checks applied to it. Failures of the
/// inner checks of a combinator are recorded as the cause of the outer
/// failure, forming a chain that can be walked with [`std::error::Error::source`].
#[derive(Clone, Debug, PartialEq)]
pub struct ValidationError {
    pub kind: ValidationErrorKind,
    pub message: Option<Cow<'static, str>>,
    pub cause: Option<Box<ValidationError>>,
}

impl ValidationError {
    pub fn new(kind: ValidationErrorKind) -> ValidationError {
        ValidationError {
            kind,
            message: None,
            cause: None,
        }
    }

    /// A validation error that displays `message` in place of the standard
    /// description of its kind.
    pub fn with_message<M>(kind: ValidationErrorKind, message: M) -> ValidationError
    where
        M: Into<Cow<'static, str>>,
    {
        ValidationError {
            kind,
            message: Some(message.into()),
            cause: None,
        }
    }

    /// A validation error with a tag chosen by the caller, for checks that are
    /// not covered by the standard kinds.
    pub fn custom<T: Into<SmolStr>>(tag: T) -> ValidationError {
        ValidationError::new(ValidationErrorKind::Custom(tag.into()))
    }

    /// Attach the failure of an inner check to this error.
    pub fn caused_by(mut self, cause: ValidationError) -> ValidationError {
        self.cause = Some(Box::new(cause));
        self
    }
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match &self.message {
            Some(message) => write!(f, "{}", message)?,
            None => write!(f, "{}", self.kind)?,
        }
        if let Some(cause) = &self.cause {
            write!(f, " Caused by: {}", cause)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.cause
            .as_ref()
            .map(|cause| cause.as_ref() as &(dyn std::error::Error + 'static))
    }
}

/// Error type produced when a value is validated. Distinguishes values that
/// were genuinely rejected from defects in user supplied checks.
#[derive(Error, Debug)]
pub enum CheckError {
    #[error("{0}")]
    Invalid(#[from] ValidationError),
    #[error("Error in user code (likely a check implementation): {0}")]
    UserCodeError(Box<dyn std::error::Error + Send>),
}

impl CheckError {
    /// Wrap an error raised by a check implementation, as opposed to a value
    /// failing validation.
    pub fn user_code<E>(error: E) -> CheckError
    where
        E: std::error::Error + Send + 'static,
    {
        CheckError::UserCodeError(Box::new(error))
    }

    pub fn is_invalid(&self) -> bool {
        matches!(self, CheckError::Invalid(_))
    }

    pub fn validation_error(&self) -> Option<&ValidationError> {
        match self {
            CheckError::Invalid(error) => Some(error),
            CheckError::UserCodeError(_) => None,
        }
    }
}

/// Error type produced when a check cannot be added to a registry.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum RegistrationError {
    #[error("Check names must be non-empty.")]
    EmptyName,
    #[error("Multiple checks with the same name: {0}")]
    DuplicateCheck(SmolStr),
}
