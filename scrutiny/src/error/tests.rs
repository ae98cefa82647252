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

use super::{CheckError, RegistrationError, ValidationError, ValidationErrorKind};
use std::error::Error;
use thiserror::Error as ThisError;

#[test]
fn kind_descriptions() {
    assert_eq!(
        ValidationErrorKind::ValueDefined.to_string(),
        "The value is defined."
    );
    assert_eq!(
        ValidationErrorKind::InvalidString.to_string(),
        "The value is not a string."
    );
    assert_eq!(
        ValidationErrorKind::NotOneOfType.to_string(),
        "The value does not match any of the permitted types."
    );
    assert_eq!(
        ValidationErrorKind::Custom("ERR_ITS_WRONG".into()).to_string(),
        "ERR_ITS_WRONG"
    );
}

#[test]
fn message_replaces_description() {
    let error = ValidationError::with_message(
        ValidationErrorKind::InvalidShape,
        "The field 'name' is absent.",
    );
    assert_eq!(error.to_string(), "The field 'name' is absent.");
    assert_eq!(error.kind, ValidationErrorKind::InvalidShape);
}

#[test]
fn causes_are_displayed() {
    let error = ValidationError::new(ValidationErrorKind::NotArrayOf)
        .caused_by(ValidationError::new(ValidationErrorKind::InvalidNumber));
    assert_eq!(
        error.to_string(),
        "The value is not an array of the expected type. Caused by: The value is not a number."
    );
}

#[test]
fn source_walks_the_cause_chain() {
    let error = ValidationError::new(ValidationErrorKind::NotArrayOf).caused_by(
        ValidationError::new(ValidationErrorKind::InvalidShape)
            .caused_by(ValidationError::new(ValidationErrorKind::InvalidString)),
    );

    let middle = error.source().expect("No cause.");
    assert_eq!(
        middle.to_string(),
        "The value does not have the expected shape. Caused by: The value is not a string."
    );
    let inner = middle.source().expect("No inner cause.");
    assert_eq!(inner.to_string(), "The value is not a string.");
    assert!(inner.source().is_none());
}

#[test]
fn custom_errors_carry_their_tag() {
    let error = ValidationError::custom("ERR_INVALID_VEGGIE");
    assert_eq!(
        error.kind,
        ValidationErrorKind::Custom("ERR_INVALID_VEGGIE".into())
    );
    assert_eq!(error.to_string(), "ERR_INVALID_VEGGIE");
}

#[derive(Debug, ThisError)]
#[error("The check is broken.")]
struct BrokenCheck;

#[test]
fn check_error_inspection() {
    let invalid = CheckError::from(ValidationError::new(ValidationErrorKind::InvalidBool));
    assert!(invalid.is_invalid());
    assert_eq!(
        invalid.validation_error().map(|error| &error.kind),
        Some(&ValidationErrorKind::InvalidBool)
    );
    assert_eq!(invalid.to_string(), "The value is not a boolean.");

    let defect = CheckError::user_code(BrokenCheck);
    assert!(!defect.is_invalid());
    assert!(defect.validation_error().is_none());
    assert_eq!(
        defect.to_string(),
        "Error in user code (likely a check implementation): The check is broken."
    );
}

#[test]
fn registration_errors() {
    assert_eq!(
        RegistrationError::EmptyName.to_string(),
        "Check names must be non-empty."
    );
    assert_eq!(
        RegistrationError::DuplicateCheck("string".into()).to_string(),
        "Multiple checks with the same name: string"
    );
}
