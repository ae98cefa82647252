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

use scrutiny::checks::{self, matching};
use scrutiny::model::Value;
use scrutiny::{CheckError, Scrutiny};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

const EMAIL_PATTERN: &str = r"^[a-z0-9._%+-]+@[a-z0-9.-]+\.[a-z]+$";

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut scrutiny = Scrutiny::new();
    let email = matching(EMAIL_PATTERN).expect("Invalid email pattern.");
    scrutiny.register("email", email).expect("The name is taken.");

    let email = scrutiny.checks().get("email").expect("Not registered.");
    let signup = checks::shape(vec![("name", checks::string()), ("email", email)]);

    let candidates = vec![
        Value::object(vec![
            ("name", Value::text("Ada")),
            ("email", Value::text("ada@example.com")),
        ]),
        Value::object(vec![
            ("name", Value::text("Bob")),
            ("email", Value::text("bob at example dot com")),
        ]),
        Value::text("not a signup"),
    ];

    for candidate in &candidates {
        match scrutiny.validate(candidate, &[signup.clone()]).await {
            Ok(valid) => info!(candidate = %valid, "The signup is valid."),
            Err(CheckError::Invalid(reason)) => {
                info!(candidate = %candidate, reason = %reason, "The signup was rejected.")
            }
            Err(defect) => error!(error = %defect, "A check failed to run."),
        }
    }
}
