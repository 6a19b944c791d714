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

use echo::codec::{
    bool, bytes, int16, int64, int8, string, time_point_sec, uint16, uint32, uint64, uint8,
    varint32,
};
use echo::{Serializer, Value};
use serde_json::json;
use tests::assert_round_trip;

#[test]
fn test_uint16_range() {
    let ser = uint16();
    assert!(ser.to_raw(&Value::Int(70000)).unwrap_err().is_validation());
    assert!(ser.to_raw(&Value::Int(-1)).unwrap_err().is_validation());
    assert_eq!(ser.to_raw(&Value::Int(0)).unwrap(), Value::Int(0));
    assert_eq!(ser.to_raw(&Value::Int(65535)).unwrap(), Value::Int(65535));
}

#[test]
fn test_fixed_width_little_endian() {
    assert_eq!(uint8().serialize(&Value::Int(0xAB)).unwrap(), vec![0xAB]);
    assert_eq!(uint16().serialize(&Value::Int(0x1234)).unwrap(), vec![0x34, 0x12]);
    assert_eq!(
        uint32().serialize(&Value::Int(0x12345678)).unwrap(),
        vec![0x78, 0x56, 0x34, 0x12]
    );
    assert_eq!(int8().serialize(&Value::Int(-1)).unwrap(), vec![0xFF]);
    assert_eq!(int16().serialize(&Value::Int(-2)).unwrap(), vec![0xFE, 0xFF]);
    assert!(int8().to_raw(&Value::Int(128)).is_err());
}

#[test]
fn test_64_bit_text_form() {
    let ser = uint64();
    let raw = ser.to_raw(&Value::from("18446744073709551615")).unwrap();
    assert_eq!(raw, Value::Int(u64::MAX as i128));
    assert_eq!(ser.serialize(&raw).unwrap(), vec![0xFF; 8]);
    assert_eq!(ser.to_object(&raw).unwrap(), json!("18446744073709551615"));
    assert!(ser.to_raw(&Value::from("18446744073709551616")).is_err());

    let ser = int64();
    assert_eq!(ser.to_object(&Value::Int(-5)).unwrap(), json!("-5"));
    // non-integral input never reaches the codec as a float
    assert!(ser.to_raw(&Value::from_json(json!(1.5))).unwrap_err().is_validation());
    assert!(ser.to_raw(&Value::from("12abc")).unwrap_err().is_validation());
}

#[test]
fn test_varint32() {
    let ser = varint32();
    assert_eq!(ser.serialize(&Value::Int(300)).unwrap(), vec![0xAC, 0x02]);
    assert_eq!(ser.deserialize(&[0xAC, 0x02]).unwrap(), Value::Int(300));
    assert!(ser.to_raw(&Value::Int(-1)).is_err());
    assert!(ser.to_raw(&Value::Int(u32::MAX as i128 + 1)).is_err());
}

#[test]
fn test_bool() {
    let ser = bool();
    assert_eq!(ser.serialize(&Value::Bool(true)).unwrap(), vec![1]);
    assert_eq!(ser.deserialize(&[0]).unwrap(), Value::Bool(false));
    assert!(ser.deserialize(&[2]).unwrap_err().is_decode());
}

#[test]
fn test_fixed_bytes_truncation() {
    let ser = bytes(Some(20));
    let err = ser.deserialize(&[0u8; 19]).unwrap_err();
    assert!(err.is_decode());
    assert!(ser.to_raw(&Value::Bytes(vec![0; 19])).unwrap_err().is_validation());
    assert!(ser.to_raw(&Value::Bytes(vec![0; 21])).unwrap_err().is_validation());
    let bytes = assert_round_trip(ser.as_ref(), &Value::from("00".repeat(20)));
    assert_eq!(bytes, vec![0; 20]);
}

#[test]
fn test_variable_bytes() {
    let ser = bytes(None);
    let bytes = assert_round_trip(ser.as_ref(), &Value::from("deadbeef"));
    assert_eq!(bytes, vec![4, 0xde, 0xad, 0xbe, 0xef]);
    assert_eq!(
        ser.to_object(&Value::Bytes(vec![0xde, 0xad])).unwrap(),
        json!("dead")
    );
}

#[test]
fn test_string() {
    let ser = string();
    let bytes = assert_round_trip(ser.as_ref(), &Value::from("héllo"));
    assert_eq!(bytes[0], 6);
    assert_eq!(&bytes[1..], "héllo".as_bytes());
    assert!(ser.deserialize(&[2, 0xC3, 0x28]).unwrap_err().is_decode());
}

#[test]
fn test_time_point_sec() {
    let ser = time_point_sec();
    let from_iso = ser.serialize(&Value::from("2019-03-01T12:00:00")).unwrap();
    let from_iso_z = ser.serialize(&Value::from("2019-03-01T12:00:00.000Z")).unwrap();
    let from_secs = ser.serialize(&Value::Int(1551441600)).unwrap();
    assert_eq!(from_iso, from_secs);
    assert_eq!(from_iso_z, from_secs);
    assert_eq!(from_secs, 1551441600u32.to_le_bytes().to_vec());
    let raw = ser.deserialize(&from_secs).unwrap();
    assert_eq!(ser.to_object(&raw).unwrap(), json!("2019-03-01T12:00:00"));
}

#[test]
fn test_time_point_from_chrono() {
    let dt = chrono::NaiveDate::from_ymd_opt(2019, 3, 1)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap();
    let ser = time_point_sec();
    assert_eq!(
        ser.serialize(&Value::from(dt)).unwrap(),
        ser.serialize(&Value::Int(1551441600)).unwrap()
    );
}

#[test]
fn test_trailing_bytes_rejected() {
    let ser = uint16();
    assert_eq!(ser.deserialize(&[1, 0]).unwrap(), Value::Int(1));
    let err = ser.deserialize(&[1, 0, 0]).unwrap_err();
    assert!(err.is_decode());
    // the lower-level read does not require full consumption
    assert_eq!(ser.read_at(&[9, 1, 0, 0], 1).unwrap(), (Value::Int(1), 3));
}

#[test]
fn test_lazy_value_resolved_once_per_call() {
    let ser = uint32();
    let lazy = Value::lazy(|| Value::Int(7));
    assert_eq!(ser.serialize(&lazy).unwrap(), vec![7, 0, 0, 0]);
}
