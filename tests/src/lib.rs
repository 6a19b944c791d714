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

//! Shared fixtures for the integration tests.

use echo::serializer::{encode_public_key, KeyScheme};
use echo::{Serializer, Value};

pub fn value(json: serde_json::Value) -> Value {
    Value::from_json(json)
}

/// Serializes `input`, checks that decoding yields its canonical form and
/// that canonicalization is idempotent, and returns the bytes.
pub fn assert_round_trip(ser: &dyn Serializer, input: &Value) -> Vec<u8> {
    let raw = ser.to_raw(input).unwrap();
    assert_eq!(ser.to_raw(&raw).unwrap(), raw, "to_raw is not idempotent");
    let bytes = ser.serialize(input).unwrap();
    assert_eq!(ser.deserialize(&bytes).unwrap(), raw, "decode differs from to_raw");
    assert_eq!(ser.serialize(&raw).unwrap(), bytes, "re-encoding changed bytes");
    bytes
}

/// A syntactically valid compressed point; the codecs never check curve membership.
pub fn sample_point(seed: u8) -> Vec<u8> {
    let mut point = vec![0x02 | (seed & 1)];
    point.extend((0..32u8).map(|i| i.wrapping_mul(7).wrapping_add(seed)));
    point
}

pub fn sample_key(seed: u8) -> String {
    encode_public_key(KeyScheme::Secp256k1, "ECHO", &sample_point(seed))
}
