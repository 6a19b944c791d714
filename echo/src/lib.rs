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

//! # Echo
//!
//! Byte-exact codecs for the ECHO blockchain wire format.
//!
//! This crate layers the chain's schema on the generic combinators of
//! [`echo_core`]: object ids, public keys and addresses, the operation
//! registry with every operation's fields, transactions, blocks and the chain
//! objects a client caches.
//!
//! ## Usage
//!
//! ```rust
//! use echo::{protocol, Serializer, Value};
//! use serde_json::json;
//!
//! let transfer = json!([0, {
//!     "fee": {"amount": 20, "asset_id": "1.3.0"},
//!     "from": "1.2.11",
//!     "to": "1.2.12",
//!     "amount": {"amount": "1000", "asset_id": "1.3.0"},
//!     "extensions": [],
//! }]);
//! let operation = protocol().operation();
//! let bytes = operation.serialize(&Value::from_json(transfer)).unwrap();
//! let decoded = operation.deserialize(&bytes).unwrap();
//! assert_eq!(operation.serialize(&decoded).unwrap(), bytes);
//! ```
//!
//! Fee estimation encodes operations before their fee is known; the
//! unrequired-fee mode fills in a zero fee in the core asset:
//!
//! ```rust
//! use echo::{protocol, Value};
//! use serde_json::json;
//!
//! let op = Value::from_json(json!([0, {
//!     "from": "1.2.11",
//!     "to": "1.2.12",
//!     "amount": {"amount": 1, "asset_id": "1.3.0"},
//! }]));
//! let raw = protocol().operation().to_raw_with_unrequired_fee(&op).unwrap();
//! assert!(raw.as_array().unwrap()[1].get("fee").is_some());
//! ```

use std::sync::OnceLock;

pub use echo_core::{
    bail, ensure, error, serializer as codec, struct_serializer, Config, Error, Fields, Reader,
    Resolvable, Serializer, SerializerRef, Value, Writer,
};

pub mod config;
pub mod hash;
pub mod protocol;
pub mod serializer;
pub mod types;

pub use crate::config::ChainConfig;
pub use crate::protocol::{transaction_digest, transaction_id, Protocol};
pub use crate::serializer::ObjectId;
pub use crate::types::OperationId;

/// Process-wide protocol schema with the default [`ChainConfig`].
pub fn protocol() -> &'static Protocol {
    static PROTOCOL: OnceLock<Protocol> = OnceLock::new();
    PROTOCOL.get_or_init(|| {
        Protocol::new(ChainConfig::default()).expect("default protocol schema is valid")
    })
}
