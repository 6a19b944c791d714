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

use echo::hash::{ripemd160, sha512};
use echo::serializer::{
    address, any_object_id, ed25519_public_key, encode_public_key, protocol_id, protocol_id_of,
    public_key, Address, AddressScheme, KeyScheme,
};
use echo::types::{ProtocolObjectType, ReservedSpace};
use echo::{ObjectId, Serializer, Value};
use serde_json::json;
use tests::{assert_round_trip, sample_key, sample_point, value};

#[test]
fn test_object_id_scenario() {
    let ser = protocol_id(ProtocolObjectType::ACCOUNT);
    let from_text = ser.serialize(&Value::from("1.2.11")).unwrap();
    let from_instance = ser.serialize(&Value::Int(11)).unwrap();
    assert_eq!(from_text, from_instance);
    assert_eq!(ser.deserialize(&from_text).unwrap(), Value::from("1.2.11"));
    assert_eq!(ser.serialize(&Value::from("11")).unwrap(), from_text);
}

#[test]
fn test_object_id_large_instance_is_varint() {
    let ser = protocol_id(ProtocolObjectType::ACCOUNT);
    let bytes = assert_round_trip(ser.as_ref(), &Value::from("1.2.300"));
    assert_eq!(bytes, vec![0xAC, 0x02]);
}

#[test]
fn test_object_id_validation() {
    let ser = protocol_id(ProtocolObjectType::ASSET);
    for bad in ["1.2.0", "2.3.0", "1.3", "1.3.x", "1.3.4294967296"] {
        let err = ser.to_raw(&Value::from(bad)).unwrap_err();
        assert!(err.is_validation(), "{bad}");
    }
}

#[test]
fn test_object_id_multi_type_decode_is_ambiguous() {
    let ser = protocol_id_of(&[ProtocolObjectType::ACCOUNT, ProtocolObjectType::CONTRACT]).unwrap();
    let bytes = ser.serialize(&Value::from("1.10.4")).unwrap();
    assert_eq!(bytes, vec![4]);
    let err = ser.deserialize(&bytes).unwrap_err();
    assert!(err.is_decode(), "{err}");
    assert!(err.to_string().contains("ambiguous object type"), "{err}");

    let single = protocol_id_of(&[ProtocolObjectType::CONTRACT]).unwrap();
    assert_round_trip(single.as_ref(), &Value::from("1.10.4"));
    assert!(matches!(protocol_id_of(&[]), Err(e) if e.is_validation()));
}

#[test]
fn test_object_id_type() {
    let id: ObjectId = "1.2.11".parse().unwrap();
    assert_eq!(id.space, u8::from(ReservedSpace::Protocol));
    assert_eq!(id.object_type, u8::from(ProtocolObjectType::ACCOUNT));
    assert_eq!(id.instance, 11);
    assert_eq!(ObjectId::from_packed(id.packed().unwrap()), id);
    assert_eq!(id.packed().unwrap(), 0x0102_0000_0000_000B);
}

#[test]
fn test_any_object_id() {
    let ser = any_object_id();
    let bytes = assert_round_trip(ser.as_ref(), &Value::from("1.10.7"));
    assert_eq!(bytes, 0x010A_0000_0000_0007u64.to_le_bytes().to_vec());
    assert!(ser.to_raw(&Value::Int(7)).is_err());
}

#[test]
fn test_public_key_round_trip() {
    let ser = public_key("ECHO");
    let key = sample_key(1);
    let bytes = assert_round_trip(ser.as_ref(), &Value::from(key.as_str()));
    assert_eq!(bytes, sample_point(1));
    assert_eq!(bytes.len(), 33);
    assert_eq!(ser.to_object(&ser.to_raw(&Value::from(key.as_str())).unwrap()).unwrap(), json!(key));
}

#[test]
fn test_public_key_rejects_bad_text() {
    let ser = public_key("ECHO");
    let key = sample_key(2);
    let wrong_prefix = key.replacen("ECHO", "GPH", 1);
    assert!(ser.to_raw(&Value::from(wrong_prefix)).unwrap_err().is_validation());

    let mut data = bs58::decode(&key["ECHO".len()..]).into_vec().unwrap();
    data[5] ^= 0x01;
    let tampered = format!("ECHO{}", bs58::encode(&data).into_string());
    let err = ser.to_raw(&Value::from(tampered)).unwrap_err();
    assert!(err.to_string().contains("checksum"), "{err}");
}

#[test]
fn test_public_key_decode_rejects_uncompressed_prefix() {
    let ser = public_key("ECHO");
    let err = ser.deserialize(&[0x05; 33]).unwrap_err();
    assert!(err.is_decode(), "{err}");
    assert!(err.to_string().contains("not compressed"), "{err}");
    assert!(ser.deserialize(&sample_point(4)).is_ok());
}

#[test]
fn test_ed25519_key() {
    let ser = ed25519_public_key("ECHO");
    let key = encode_public_key(KeyScheme::Ed25519, "ECHO", &[9u8; 32]);
    let bytes = assert_round_trip(ser.as_ref(), &Value::from(key));
    assert_eq!(bytes, vec![9u8; 32]);
}

#[test]
fn test_address_from_public_key() {
    let point = sample_point(3);
    let graphene = Address::from_public_key(AddressScheme::Graphene, &point);
    assert_eq!(graphene.as_bytes(), ripemd160(&sha512(&point)));

    let ser = address("ECHO");
    let text = graphene.to_text("ECHO");
    let bytes = assert_round_trip(ser.as_ref(), &Value::from(text.as_str()));
    assert_eq!(bytes, graphene.as_bytes());

    let pts = Address::from_public_key(AddressScheme::Pts, &point);
    assert_eq!(pts.as_bytes().len(), 25);
    assert_ne!(&pts.as_bytes()[1..21], graphene.as_bytes());
}

#[test]
fn test_authority_composition() {
    let protocol = echo::protocol();
    let authority = &protocol.common().authority;
    let input = value(json!({
        "weight_threshold": 1,
        "account_auths": [["1.2.5", 1], ["1.2.4", 2]],
        "key_auths": [[sample_key(4), 1], [sample_key(5), 1]],
    }));
    let bytes = assert_round_trip(authority.as_ref(), &input);
    assert_eq!(&bytes[..4], &[1, 0, 0, 0]);
    // account_auths sorted by instance bytes
    assert_eq!(&bytes[4..11], &[2, 4, 2, 0, 5, 1, 0]);
    assert_eq!(bytes[11], 2);
    assert_eq!(bytes.len(), 12 + 2 * (33 + 2));
}

#[test]
fn test_authority_accepts_key_record() {
    let protocol = echo::protocol();
    let authority = &protocol.common().authority;
    let mut key_auths = serde_json::Map::new();
    key_auths.insert(sample_key(6), json!(1));
    let input = value(json!({
        "weight_threshold": 1,
        "account_auths": [],
        "key_auths": key_auths,
    }));
    assert!(authority.serialize(&input).is_ok());
}
