// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

use std::sync::Arc;

use echo::codec::{
    map, optional, pair, set, static_variant, string, uint16, uint32, uint8, vector,
    StaticVariantSerializer, StructSerializer,
};
use echo::{struct_serializer, Config, Error, Reader, Serializer, SerializerRef, Value};
use serde_json::json;
use tests::{assert_round_trip, value};

fn account() -> SerializerRef {
    struct_serializer! {
        name: string(),
        weight: uint16(),
        tags: vector(string()),
    }
}

#[test]
fn test_struct_is_plain_concatenation() {
    let bytes = assert_round_trip(
        account().as_ref(),
        &value(json!({"name": "ab", "weight": 258, "tags": ["x"]})),
    );
    assert_eq!(bytes, vec![2, b'a', b'b', 2, 1, 1, 1, b'x']);
}

#[test]
fn test_struct_field_order_is_schema_order() {
    let a = account()
        .serialize(&value(json!({"tags": [], "weight": 1, "name": "n"})))
        .unwrap();
    let b = account()
        .serialize(&value(json!({"name": "n", "weight": 1, "tags": []})))
        .unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_struct_error_names_the_field() {
    let err = account()
        .to_raw(&value(json!({"name": "n", "weight": 70000, "tags": []})))
        .unwrap_err();
    assert!(err.is_validation());
    assert!(
        err.to_string().starts_with("struct key \"weight\": "),
        "{err}"
    );

    let err = account()
        .to_raw(&value(json!({"name": "n", "weight": 1, "tags": ["a", 5]})))
        .unwrap_err();
    assert!(err.to_string().starts_with("struct key \"tags\": element 1: "), "{err}");
}

#[test]
fn test_struct_unknown_and_missing_keys() {
    let err = account()
        .to_raw(&value(json!({"name": "n", "weight": 1, "tags": [], "extra": 1})))
        .unwrap_err();
    assert_eq!(err.to_string(), "unknown struct key \"extra\"");
    assert!(account().to_raw(&value(json!({"name": "n"}))).is_err());

    let lenient = StructSerializer::new([("name", string())]).ignore_unknown_keys();
    let raw = lenient
        .to_raw(&value(json!({"name": "n", "extra": 1})))
        .unwrap();
    assert_eq!(raw, value(json!({"name": "n"})));
}

#[test]
fn test_struct_decode_error_path() {
    let err = account().deserialize(&[2, b'a']).unwrap_err();
    assert!(err.is_decode());
    assert!(err.to_string().starts_with("struct key \"name\": "), "{err}");
}

#[test]
fn test_vector_preserves_order() {
    let ser = vector(uint8());
    let bytes = assert_round_trip(ser.as_ref(), &value(json!([3, 1, 2])));
    assert_eq!(bytes, vec![3, 3, 1, 2]);
}

#[test]
fn test_set_canonical_order() {
    let ser = set(uint32());
    let a = ser.serialize(&value(json!([3, 1, 2]))).unwrap();
    let b = ser.serialize(&value(json!([1, 2, 3]))).unwrap();
    assert_eq!(a, b);
    assert_round_trip(ser.as_ref(), &value(json!([3, 1, 2])));
}

#[test]
fn test_set_duplicates_by_serialized_bytes() {
    let ser = set(uint32());
    let err = ser.to_raw(&value(json!([1, "1"]))).unwrap_err();
    assert!(err.is_validation());
    assert!(err.to_string().contains("duplicate"));

    // composite elements are checked the same way
    let ser = set(pair(uint8(), string()));
    assert!(ser.to_raw(&value(json!([[1, "a"], ["1", "a"]]))).is_err());
    assert!(ser.to_raw(&value(json!([[1, "a"], [1, "b"]]))).is_ok());
}

#[test]
fn test_set_decode_rejects_duplicates() {
    let ser = set(uint8());
    assert!(ser.deserialize(&[2, 5, 5]).unwrap_err().is_decode());
    assert_eq!(ser.deserialize(&[2, 5, 4]).unwrap(), value(json!([4, 5])));
}

#[test]
fn test_map_inputs() {
    let ser = map(string(), uint8());
    let from_pairs = assert_round_trip(ser.as_ref(), &value(json!([["b", 2], ["a", 1]])));
    let from_record = ser.serialize(&value(json!({"a": 1, "b": 2}))).unwrap();
    assert_eq!(from_pairs, from_record);
    assert_eq!(from_pairs, vec![2, 1, b'a', 1, 1, b'b', 2]);
    assert_eq!(
        ser.to_object(&ser.to_raw(&value(json!({"b": 2, "a": 1}))).unwrap())
            .unwrap(),
        json!([["a", 1], ["b", 2]])
    );

    let numeric_keys = map(uint16(), uint8());
    assert!(numeric_keys.to_raw(&value(json!({"1": 1}))).is_err());
    assert!(numeric_keys.to_raw(&value(json!([[1, 1], [1, 2]]))).is_err());
}

#[test]
fn test_optional_scenarios() {
    let ser = optional(uint32());
    assert_eq!(ser.serialize(&Value::Null).unwrap(), vec![0x00]);
    assert_eq!(
        ser.serialize(&Value::Int(5)).unwrap(),
        vec![0x01, 0x05, 0x00, 0x00, 0x00]
    );
    // an absent value skips inner validation entirely
    assert_eq!(ser.to_raw(&Value::Null).unwrap(), Value::Null);
    assert!(ser.deserialize(&[0x02]).unwrap_err().is_decode());
}

#[test]
fn test_optional_struct_fields_may_be_omitted() {
    let ser = struct_serializer! {
        id: uint8(),
        memo: optional(string()),
    };
    let bytes = assert_round_trip(ser.as_ref(), &value(json!({"id": 1})));
    assert_eq!(bytes, vec![1, 0]);
    let raw = ser.deserialize(&bytes).unwrap();
    assert_eq!(ser.to_object(&raw).unwrap(), json!({"id": 1}));
}

#[test]
fn test_pair() {
    let ser = pair(uint16(), string());
    let bytes = assert_round_trip(ser.as_ref(), &value(json!([1, "z"])));
    assert_eq!(bytes, vec![1, 0, 1, b'z']);
}

#[test]
fn test_static_variant_scenario() {
    let ser = static_variant([(0, uint32()), (1, string())]);
    let bytes = ser.serialize(&value(json!([1, "qwe"]))).unwrap();
    assert_eq!(ser.deserialize(&bytes).unwrap(), value(json!([1, "qwe"])));

    let err = ser.serialize(&value(json!([4, "qwe"]))).unwrap_err();
    assert!(err.is_validation());
    assert_eq!(err.to_string(), "serializer with key 4 not found");
}

#[test]
fn test_static_variant_depth_limit() {
    let mut ser: SerializerRef = Arc::new(StaticVariantSerializer::new([(1, uint8())]));
    for _ in 0..40 {
        ser = Arc::new(StaticVariantSerializer::new([(0, ser), (1, uint8())]));
    }
    let mut bytes = vec![0u8; 40];
    bytes.extend([1, 9]);
    let err = ser.deserialize(&bytes).unwrap_err();
    assert!(matches!(err, Error::DepthExceed(_)));
    assert!(err.is_decode());

    let config = Config::new().max_depth(64);
    let mut reader = Reader::with_config(&bytes, &config);
    assert!(ser.read_from_buffer(&mut reader).is_ok());
}

#[test]
fn test_lazy_fields() {
    let ser = account();
    let mut fields = echo::Fields::new();
    fields.insert("name".to_string(), Value::lazy(|| Value::from("late")));
    fields.insert("weight".to_string(), Value::Int(1));
    fields.insert("tags".to_string(), Value::lazy(|| Value::Array(vec![])));
    let bytes = ser.serialize(&Value::Object(fields)).unwrap();
    assert_eq!(bytes, vec![4, b'l', b'a', b't', b'e', 1, 0, 0]);
}
