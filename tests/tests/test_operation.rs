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

use echo::types::OperationId;
use echo::{protocol, ChainConfig, Protocol, Serializer, Value};
use serde_json::json;
use tests::{assert_round_trip, sample_key, value};

fn transfer(fee: Option<serde_json::Value>) -> Value {
    let mut fields = json!({
        "from": "1.2.11",
        "to": "1.2.12",
        "amount": {"amount": "1000", "asset_id": "1.3.0"},
    });
    if let Some(fee) = fee {
        fields["fee"] = fee;
    }
    value(json!([OperationId::TRANSFER.id(), fields]))
}

#[test]
fn test_every_operation_registered() {
    let protocol = protocol();
    for id in 0..OperationId::COUNT {
        let op = OperationId::try_from(id).unwrap();
        assert!(protocol.operation_fields(op).is_some(), "{op:?}");
    }
    let err = protocol
        .operation()
        .to_raw(&value(json!([OperationId::COUNT, {}])))
        .unwrap_err();
    assert_eq!(err.to_string(), "serializer with key 66 not found");
    assert!(protocol.operation().deserialize(&[66]).unwrap_err().is_decode());
}

#[test]
fn test_transfer_layout() {
    let op = protocol().operation();
    let bytes = assert_round_trip(
        &**op,
        &transfer(Some(json!({"amount": 20, "asset_id": "1.3.0"}))),
    );
    let expected =
        hex::decode("001400000000000000000b0ce8030000000000000000").unwrap();
    assert_eq!(bytes, expected);
}

#[test]
fn test_unrequired_fee_injected() {
    let op = protocol().operation();
    let input = transfer(None);
    let raw = op.to_raw_with_unrequired_fee(&input).unwrap();
    assert_eq!(
        raw.as_array().unwrap()[1].get("fee"),
        Some(&value(json!({"amount": 0, "asset_id": "1.3.0"})))
    );
    // the caller's value is untouched
    assert!(input.as_array().unwrap()[1].get("fee").is_none());
    // without the mode the fee is required
    let err = op.to_raw(&input).unwrap_err();
    assert!(
        err.to_string().starts_with("operation with id 0: struct key \"fee\": "),
        "{err}"
    );
}

#[test]
fn test_unrequired_fee_keeps_supplied_fee() {
    let op = protocol().operation();
    let fee = json!({"amount": 15, "asset_id": "1.3.1"});
    let raw = op
        .to_raw_with_unrequired_fee(&transfer(Some(fee.clone())))
        .unwrap();
    assert_eq!(raw.as_array().unwrap()[1].get("fee"), Some(&value(fee)));
}

#[test]
fn test_unrequired_fee_uses_configured_asset() -> anyhow::Result<()> {
    let protocol = Protocol::new(ChainConfig::new().core_asset_id("1.3.7"))?;
    let raw = protocol
        .operation()
        .to_raw_with_unrequired_fee(&transfer(None))?;
    let fee = raw.as_array().unwrap()[1].get("fee").cloned().unwrap();
    assert_eq!(fee.get("asset_id"), Some(&Value::from("1.3.7")));
    Ok(())
}

#[test]
fn test_transaction_unrequired_fee_mode() {
    let tx = value(json!({
        "ref_block_num": 1,
        "ref_block_prefix": 2,
        "expiration": 3,
        "operations": [[0, {
            "from": "1.2.11",
            "to": "1.2.12",
            "amount": {"amount": 1, "asset_id": "1.3.0"},
        }]],
    }));
    assert!(protocol().transaction().to_raw(&tx).is_err());
    assert!(protocol().transaction_with_unrequired_fee().serialize(&tx).is_ok());
}

fn proposal(inner: serde_json::Value) -> Value {
    value(json!([OperationId::PROPOSAL_CREATE.id(), {
        "fee": {"amount": 0, "asset_id": "1.3.0"},
        "fee_paying_account": "1.2.11",
        "expiration_time": "2019-03-01T12:00:00",
        "proposed_ops": [{"op": inner}],
    }]))
}

#[test]
fn test_proposal_nests_operations() {
    let inner = json!([0, {
        "fee": {"amount": 20, "asset_id": "1.3.0"},
        "from": "1.2.11",
        "to": "1.2.12",
        "amount": {"amount": "1000", "asset_id": "1.3.0"},
    }]);
    let op = protocol().operation();
    let bytes = assert_round_trip(&**op, &proposal(inner));
    assert_eq!(bytes[0], 16);
    let raw = op.deserialize(&bytes).unwrap();
    let json = op.to_object(&raw).unwrap();
    assert_eq!(json[1]["proposed_ops"][0]["op"][1]["from"], json!("1.2.11"));
    assert_eq!(json[1]["proposed_ops"][0]["op"][1]["amount"]["amount"], json!("1000"));
}

#[test]
fn test_nested_error_path() {
    let inner = json!([0, {
        "fee": {"amount": 20, "asset_id": "1.3.0"},
        "from": "1.3.0",
        "to": "1.2.12",
        "amount": {"amount": "1000", "asset_id": "1.3.0"},
    }]);
    let err = protocol().operation().to_raw(&proposal(inner)).unwrap_err();
    assert!(err.is_validation());
    assert!(
        err.to_string().starts_with(
            "operation with id 16: struct key \"proposed_ops\": element 0: \
             struct key \"op\": operation with id 0: struct key \"from\": "
        ),
        "{err}"
    );
}

#[test]
fn test_account_create() {
    let op = value(json!([OperationId::ACCOUNT_CREATE.id(), {
        "fee": {"amount": 0, "asset_id": "1.3.0"},
        "registrar": "1.2.1",
        "name": "alice",
        "active": {
            "weight_threshold": 1,
            "account_auths": [],
            "key_auths": [[sample_key(1), 1]],
        },
        "echorand_key": echo::serializer::encode_public_key(
            echo::serializer::KeyScheme::Ed25519, "ECHO", &[3u8; 32]),
        "options": {"delegating_account": "1.2.1", "delegate_share": 2000},
    }]));
    let bytes = assert_round_trip(&**protocol().operation(), &op);
    assert_eq!(bytes[0], 3);
}

#[test]
fn test_vesting_policy_variant() {
    let op = value(json!([OperationId::VESTING_BALANCE_CREATE.id(), {
        "fee": {"amount": 0, "asset_id": "1.3.0"},
        "creator": "1.2.1",
        "owner": "1.2.2",
        "amount": {"amount": 100, "asset_id": "1.3.0"},
        "policy": [1, {"start_claim": "2019-03-01T12:00:00", "vesting_seconds": 60}],
    }]));
    assert_round_trip(&**protocol().operation(), &op);

    let bad = value(json!([OperationId::VESTING_BALANCE_CREATE.id(), {
        "fee": {"amount": 0, "asset_id": "1.3.0"},
        "creator": "1.2.1",
        "owner": "1.2.2",
        "amount": {"amount": 100, "asset_id": "1.3.0"},
        "policy": [2, {}],
    }]));
    let err = protocol().operation().to_raw(&bad).unwrap_err();
    assert!(err.to_string().ends_with("serializer with key 2 not found"), "{err}");
}

#[test]
fn test_contract_call_with_any_object_ids() {
    let op = value(json!([OperationId::CONTRACT_INTERNAL_CALL.id(), {
        "fee": {"amount": 0, "asset_id": "1.3.0"},
        "caller": "1.10.1",
        "callee": "1.2.5",
        "method": "a9059cbb",
        "value": {"amount": 0, "asset_id": "1.3.0"},
    }]));
    let bytes = assert_round_trip(&**protocol().operation(), &op);
    assert_eq!(&bytes[10..18], &0x010A_0000_0000_0001u64.to_le_bytes());
}
