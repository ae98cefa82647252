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

use crate::{Func, Value, ValueKind};

#[test]
fn value_kinds() {
    assert_eq!(Value::Undefined.kind(), ValueKind::Undefined);
    assert_eq!(Value::Null.kind(), ValueKind::Null);
    assert_eq!(Value::BooleanValue(false).kind(), ValueKind::Boolean);
    assert_eq!(Value::NumberValue(2.5).kind(), ValueKind::Number);
    assert_eq!(Value::text("hello").kind(), ValueKind::Text);
    assert_eq!(Value::func(|_| Value::Undefined).kind(), ValueKind::Func);
    assert_eq!(Value::empty_array().kind(), ValueKind::Array);
    assert_eq!(Value::empty_object().kind(), ValueKind::Object);
}

#[test]
fn default_value_is_undefined() {
    assert_eq!(Value::default(), Value::Undefined);
}

#[test]
fn structural_equality() {
    assert_eq!(
        Value::from_vec(vec![1, 2, 3]),
        Value::from_vec(vec![1, 2, 3])
    );
    assert_ne!(Value::from_vec(vec![1, 2]), Value::from_vec(vec![2, 1]));
    assert_eq!(
        Value::object(vec![("a", 1), ("b", 2)]),
        Value::object(vec![("b", 2), ("a", 1)])
    );
    assert_ne!(Value::Null, Value::Undefined);
}

#[test]
fn nan_is_never_equal() {
    let nan = Value::NumberValue(f64::NAN);
    assert_ne!(nan, nan.clone());
    assert_ne!(nan, Value::NumberValue(f64::NAN));
}

#[test]
fn functions_compare_by_identity() {
    let func = Func::new(|_| Value::Null);
    let value = Value::Func(func.clone());
    assert_eq!(value, Value::Func(func));
    assert_ne!(Value::func(|_| Value::Null), Value::func(|_| Value::Null));
}

#[test]
fn functions_are_callable() {
    let double = Func::new(|args| match args.first() {
        Some(Value::NumberValue(n)) => Value::NumberValue(n * 2.0),
        _ => Value::Undefined,
    });
    assert_eq!(double.call(&[Value::from(4.0)]), Value::from(8.0));
    assert_eq!(double.call(&[]), Value::Undefined);
}

#[test]
fn display_forms() {
    assert_eq!(Value::Undefined.to_string(), "undefined");
    assert_eq!(Value::Null.to_string(), "null");
    assert_eq!(Value::from(true).to_string(), "true");
    assert_eq!(Value::from(2.5).to_string(), "2.5");
    assert_eq!(Value::text("hello").to_string(), r#""hello""#);
    assert_eq!(Value::text("say \"hi\"").to_string(), r#""say \"hi\"""#);
    assert_eq!(Value::text("a\tb\n").to_string(), r#""a\tb\n""#);
    assert_eq!(Value::func(|_| Value::Undefined).to_string(), "<fn>");
    assert_eq!(Value::from_vec(vec![1, 2]).to_string(), "[1, 2]");
    assert_eq!(Value::empty_array().to_string(), "[]");
    assert_eq!(
        Value::object(vec![("b", 1), ("a", 2)]).to_string(),
        r#"{"a": 2, "b": 1}"#
    );
    assert_eq!(Value::empty_object().to_string(), "{}");
}

#[test]
fn conversions() {
    assert_eq!(Value::from(5i32), Value::NumberValue(5.0));
    assert_eq!(Value::from(5u32), Value::NumberValue(5.0));
    assert_eq!(Value::from("text"), Value::Text("text".to_owned()));
    assert_eq!(
        Value::from("text".to_owned()),
        Value::Text("text".to_owned())
    );
    assert_eq!(Value::from(Some(3)), Value::NumberValue(3.0));
    assert_eq!(Value::from(Option::<i32>::None), Value::Null);
    assert_eq!(
        Value::from(vec!["a", "b"]),
        Value::Array(vec![Value::text("a"), Value::text("b")])
    );
}

#[test]
fn object_fields_iterate_in_key_order() {
    let value = Value::object(vec![("c", 3), ("a", 1), ("b", 2)]);
    if let Value::Object(fields) = value {
        let keys: Vec<&str> = fields.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["a", "b", "c"]);
    } else {
        panic!("Not an object.");
    }
}
