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

use std::collections::HashSet;
use std::sync::Arc;
use std::thread;

use echo::codec::{set, uint32};
use echo::{protocol, ChainConfig, Protocol, Serializer, Value};
use serde_json::json;
use tests::value;

fn transfer_tx(to: u32) -> Value {
    value(json!({
        "ref_block_num": 1,
        "ref_block_prefix": 2,
        "expiration": 3,
        "operations": [[0, {
            "fee": {"amount": 20, "asset_id": "1.3.0"},
            "from": "1.2.11",
            "to": format!("1.2.{to}"),
            "amount": {"amount": "1000", "asset_id": "1.3.0"},
        }]],
    }))
}

#[test]
fn test_shared_serializer_across_threads() {
    let ser = set(uint32());
    let src: HashSet<u32> = [41, 42, 43, 45, 46, 47].into_iter().collect();
    let mut handles = vec![];
    for item in &src {
        let ser = Arc::clone(&ser);
        let item = *item;
        handles.push(thread::spawn(move || {
            ser.serialize(&Value::Array(vec![Value::from(item), Value::from(item + 1000)]))
                .unwrap()
        }));
    }
    let serialized: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();

    let mut handles = vec![];
    for bytes in serialized {
        let ser = Arc::clone(&ser);
        handles.push(thread::spawn(move || ser.deserialize(&bytes).unwrap()));
    }
    let mut dest = HashSet::new();
    for handle in handles {
        let decoded = handle.join().unwrap();
        // elements come back in byte order, not numeric order
        let smallest = decoded
            .as_array()
            .unwrap()
            .iter()
            .filter_map(Value::as_int)
            .min()
            .unwrap();
        dest.insert(smallest as u32);
    }
    assert_eq!(dest, src);
}

#[test]
fn test_global_protocol_across_threads() {
    let expected: Vec<Vec<u8>> = (0..8)
        .map(|i| protocol().transaction().serialize(&transfer_tx(100 + i)).unwrap())
        .collect();
    let handles: Vec<_> = (0..8)
        .map(|i| {
            thread::spawn(move || {
                let tx = protocol().transaction();
                let bytes = tx.serialize(&transfer_tx(100 + i)).unwrap();
                let decoded = tx.deserialize(&bytes).unwrap();
                assert_eq!(tx.serialize(&decoded).unwrap(), bytes);
                bytes
            })
        })
        .collect();
    for (i, handle) in handles.into_iter().enumerate() {
        assert_eq!(handle.join().unwrap(), expected[i]);
    }
}

#[test]
fn test_owned_protocol_shared_by_arc() -> anyhow::Result<()> {
    let protocol = Arc::new(Protocol::new(ChainConfig::default())?);
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let protocol = Arc::clone(&protocol);
            thread::spawn(move || {
                protocol
                    .operation()
                    .to_raw_with_unrequired_fee(&value(json!([0, {
                        "from": "1.2.1",
                        "to": format!("1.2.{i}"),
                        "amount": {"amount": i, "asset_id": "1.3.0"},
                    }])))
                    .map(|raw| protocol.operation().serialize(&raw))
            })
        })
        .collect();
    for handle in handles {
        assert!(handle.join().unwrap()?.is_ok());
    }
    Ok(())
}
