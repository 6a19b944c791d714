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

//! Transactions and blocks, assembled purely from the shared schemas.

use std::sync::Arc;

use echo_core::serializer::{
    bool, bytes, int64, static_variant, string, time_point_sec, uint16, uint32, uint8, vector,
    void, StructSerializer,
};
use echo_core::{struct_serializer, SerializerRef};

use crate::hash::sha256;
use crate::protocol::common::Common;
use crate::serializer::any_object_id;

pub(crate) struct TransactionSchemas {
    pub transaction: SerializerRef,
    pub signed_transaction: SerializerRef,
    pub processed_transaction: SerializerRef,
    pub operation_result: SerializerRef,
    pub block_header: SerializerRef,
    pub signed_block: SerializerRef,
}

pub(crate) fn transaction_fields(c: &Common, operation: &SerializerRef) -> StructSerializer {
    StructSerializer::new([
        ("ref_block_num", uint16()),
        ("ref_block_prefix", uint32()),
        ("expiration", time_point_sec()),
        ("operations", vector(operation.clone())),
        ("extensions", c.future_extensions.clone()),
    ])
}

impl TransactionSchemas {
    pub fn new(c: &Common, operation: &SerializerRef) -> Self {
        let transaction = transaction_fields(c, operation);
        let signed = transaction.extend([
            ("signatures", vector(bytes(Some(64)))),
            ("signed_with_echorand_key", bool()),
        ]);
        let operation_result = static_variant([
            (0, void()),
            (1, any_object_id()),
            (2, c.asset.clone()),
        ]);
        let processed = signed.extend([
            ("operation_results", vector(operation_result.clone())),
            ("fees_collected", int64()),
        ]);
        let processed: SerializerRef = Arc::new(processed);

        let header = StructSerializer::new([
            ("previous", bytes(Some(20))),
            ("timestamp", time_point_sec()),
            ("account", c.account_id.clone()),
            ("delegate", c.account_id.clone()),
            ("transaction_merkle_root", bytes(Some(20))),
            ("vm_root", vector(string())),
            ("extensions", c.future_extensions.clone()),
        ]);
        let echorand_signature = struct_serializer! {
            producer: uint32(),
            step: uint8(),
            value: uint8(),
            signature: bytes(Some(64)),
            bba_sign: bytes(Some(64)),
        };
        let signed_block = header.extend([
            ("ed_signatures", vector(echorand_signature)),
            ("transactions", vector(processed.clone())),
        ]);

        TransactionSchemas {
            transaction: Arc::new(transaction),
            signed_transaction: Arc::new(signed),
            processed_transaction: processed,
            operation_result,
            block_header: Arc::new(header),
            signed_block: Arc::new(signed_block),
        }
    }
}

/// Bytes a transaction signature commits to: `sha256(chain_id ++ tx_bytes)`.
pub fn transaction_digest(chain_id: &[u8], tx_bytes: &[u8]) -> [u8; 32] {
    let mut data = Vec::with_capacity(chain_id.len() + tx_bytes.len());
    data.extend_from_slice(chain_id);
    data.extend_from_slice(tx_bytes);
    sha256(&data)
}

/// Hex of the first 20 bytes of `sha256(tx_bytes)`.
pub fn transaction_id(tx_bytes: &[u8]) -> String {
    hex::encode(&sha256(tx_bytes)[..20])
}
