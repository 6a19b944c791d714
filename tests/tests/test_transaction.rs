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

use echo::types::{ImplementationObjectType, ProtocolObjectType};
use echo::{protocol, transaction_digest, transaction_id, ObjectId, Serializer, Value};
use serde_json::json;
use tests::{assert_round_trip, sample_key, value};

const TX_HEX: &str = "341278563412c01e795c01001400000000000000000b0ce803000000000000000000";

fn sample_transaction() -> serde_json::Value {
    json!({
        "ref_block_num": 4660,
        "ref_block_prefix": 305419896,
        "expiration": "2019-03-01T12:00:00",
        "operations": [[0, {
            "fee": {"amount": 20, "asset_id": "1.3.0"},
            "from": "1.2.11",
            "to": "1.2.12",
            "amount": {"amount": "1000", "asset_id": "1.3.0"},
            "extensions": [],
        }]],
        "extensions": [],
    })
}

#[test]
fn test_transaction_bytes() {
    let tx = protocol().transaction();
    let bytes = assert_round_trip(tx.as_ref(), &value(sample_transaction()));
    assert_eq!(hex::encode(&bytes), TX_HEX);
}

#[test]
fn test_transaction_to_object() {
    let tx = protocol().transaction();
    let raw = tx.to_raw(&value(sample_transaction())).unwrap();
    let json = tx.to_object(&raw).unwrap();
    assert_eq!(json["expiration"], json!("2019-03-01T12:00:00"));
    assert_eq!(json["operations"][0][1]["fee"]["amount"], json!("20"));
    assert_eq!(json["extensions"], json!([]));
}

#[test]
fn test_transaction_trailing_byte() {
    let tx = protocol().transaction();
    let mut bytes = hex::decode(TX_HEX).unwrap();
    assert!(tx.deserialize(&bytes).is_ok());
    bytes.push(0);
    assert!(tx.deserialize(&bytes).unwrap_err().is_decode());
    bytes.truncate(bytes.len() - 3);
    assert!(tx.deserialize(&bytes).unwrap_err().is_decode());
}

#[test]
fn test_transaction_digest_and_id() {
    let bytes = hex::decode(TX_HEX).unwrap();
    assert_eq!(transaction_id(&bytes), "fa6eed26bb471820fb316cd68345952479a60171");
    let chain_id = hex::decode("e1d8f5a2".repeat(8)).unwrap();
    assert_eq!(
        hex::encode(transaction_digest(&chain_id, &bytes)),
        "7050b7602d46be6b77ddb34297fdeaa8a21d512e2972af4e93e3a914906538be"
    );
}

#[test]
fn test_signed_transaction() {
    let mut tx = sample_transaction();
    tx["signatures"] = json!(["ab".repeat(64)]);
    tx["signed_with_echorand_key"] = json!(true);
    let ser = protocol().signed_transaction();
    let bytes = assert_round_trip(ser.as_ref(), &value(tx));
    let unsigned = hex::decode(TX_HEX).unwrap();
    assert_eq!(&bytes[..unsigned.len()], unsigned.as_slice());
    assert_eq!(bytes.len(), unsigned.len() + 1 + 64 + 1);
    assert_eq!(bytes[unsigned.len()], 1);
    assert_eq!(*bytes.last().unwrap(), 1);

    let mut short = sample_transaction();
    short["signatures"] = json!(["ab".repeat(63)]);
    short["signed_with_echorand_key"] = json!(false);
    let err = ser.to_raw(&value(short)).unwrap_err();
    assert!(err.to_string().starts_with("struct key \"signatures\": element 0: "), "{err}");
}

#[test]
fn test_processed_transaction() {
    let mut tx = sample_transaction();
    tx["signatures"] = json!([]);
    tx["signed_with_echorand_key"] = json!(false);
    tx["operation_results"] = json!([[0, {}], [1, "1.11.5"], [2, {"amount": 3, "asset_id": "1.3.0"}]]);
    tx["fees_collected"] = json!("20");
    let ser = protocol().processed_transaction();
    assert_round_trip(ser.as_ref(), &value(tx.clone()));
    let raw = ser.deserialize(&ser.serialize(&value(tx)).unwrap()).unwrap();
    let json = ser.to_object(&raw).unwrap();
    assert_eq!(json["operation_results"][0], json!([0, {}]));
    assert_eq!(json["operation_results"][1], json!([1, "1.11.5"]));
    assert_eq!(json["fees_collected"], json!("20"));
}

#[test]
fn test_signed_block() {
    let mut processed = sample_transaction();
    processed["signatures"] = json!([]);
    processed["signed_with_echorand_key"] = json!(false);
    processed["operation_results"] = json!([[0, {}]]);
    processed["fees_collected"] = json!(20);
    let block = value(json!({
        "previous": "00".repeat(20),
        "timestamp": "2019-03-01T12:00:00",
        "account": "1.2.6",
        "delegate": "1.2.6",
        "transaction_merkle_root": "11".repeat(20),
        "vm_root": ["0.0"],
        "extensions": [],
        "ed_signatures": [{
            "producer": 6,
            "step": 1,
            "value": 0,
            "signature": "22".repeat(64),
            "bba_sign": "33".repeat(64),
        }],
        "transactions": [processed],
    }));
    let ser = protocol().signed_block();
    let bytes = assert_round_trip(ser.as_ref(), &block);
    let header = protocol()
        .block_header()
        .read_at(&bytes, 0)
        .unwrap();
    assert_eq!(header.1, 20 + 4 + 1 + 1 + 20 + 5 + 1);
    assert_eq!(header.0.get("account"), Some(&Value::from("1.2.6")));
}

#[test]
fn test_chain_object_normalization() {
    let protocol = protocol();
    let node_object = value(json!({
        "id": "2.1.0",
        "head_block_number": 100,
        "head_block_id": "aa".repeat(20),
        "time": "2019-03-01T12:00:00",
        "next_maintenance_time": "2019-03-02T00:00:00",
        "last_maintenance_time": "2019-03-01T00:00:00",
        "last_irreversible_block_num": 90,
        "recent_slots_filled": "340282366920938463463374607431768211455",
    }));
    let id: ObjectId = "2.1.0".parse().unwrap();
    assert_eq!(id, ObjectId::implementation(ImplementationObjectType::DYNAMIC_GLOBAL_PROPERTY, 0));
    let ser = protocol.chain_object(&id).unwrap();
    let raw = ser.to_raw(&node_object).unwrap();
    let json = ser.to_object(&raw).unwrap();
    assert!(json.get("recent_slots_filled").is_none());
    assert_eq!(json["head_block_id"], json!("aa".repeat(20)));
    assert_eq!(json["time"], json!("2019-03-01T12:00:00"));

    assert!(protocol
        .chain_object(&ObjectId::protocol(ProtocolObjectType::PROPOSAL, 1))
        .is_none());
}

#[test]
fn test_account_object() {
    let account = value(json!({
        "id": "1.2.11",
        "registrar": "1.2.1",
        "name": "alice",
        "active": {
            "weight_threshold": 1,
            "account_auths": [],
            "key_auths": [[sample_key(9), 1]],
        },
        "echorand_key": echo::serializer::encode_public_key(
            echo::serializer::KeyScheme::Ed25519, "ECHO", &[1u8; 32]),
        "options": {"delegating_account": "1.2.1", "delegate_share": 0, "extensions": []},
        "statistics": "2.5.11",
        "whitelisting_accounts": [],
        "blacklisting_accounts": [],
        "whitelisted_accounts": [],
        "blacklisted_accounts": [],
        "top_n_control_flags": 0,
        "active_special_authority": [0, {}],
        "owner_special_authority": [0, {}],
    }));
    let ser = protocol()
        .chain_object(&"1.2.11".parse().unwrap())
        .unwrap();
    assert_round_trip(ser.as_ref(), &account);
}
