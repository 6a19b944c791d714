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

//! Codecs for chain-specific scalars, layered on the generic combinators.

use std::sync::Arc;

use echo_core::{Error, SerializerRef};

use crate::types::{ImplementationObjectType, ProtocolObjectType, ReservedSpace};

mod address;
mod object_id;
mod public_key;

pub use self::address::{Address, AddressScheme, AddressSerializer, PTS_VERSION};
pub use self::object_id::{AnyObjectIdSerializer, ObjectId, ObjectIdSerializer, MAX_INSTANCE};
pub use self::public_key::{decode_public_key, encode_public_key, KeyScheme, PublicKeySerializer};

pub fn protocol_id(object_type: ProtocolObjectType) -> SerializerRef {
    Arc::new(ObjectIdSerializer::protocol(object_type))
}

pub fn implementation_id(object_type: ImplementationObjectType) -> SerializerRef {
    Arc::new(ObjectIdSerializer::implementation(object_type))
}

/// Protocol-space id accepting any of `types`. With more than one type the
/// codec encodes but cannot decode.
pub fn protocol_id_of(types: &[ProtocolObjectType]) -> Result<SerializerRef, Error> {
    let types: Vec<u8> = types.iter().map(|t| u8::from(*t)).collect();
    Ok(Arc::new(ObjectIdSerializer::with_types(
        ReservedSpace::Protocol,
        &types,
    )?))
}

pub fn any_object_id() -> SerializerRef {
    Arc::new(AnyObjectIdSerializer)
}

pub fn public_key(prefix: &str) -> SerializerRef {
    Arc::new(PublicKeySerializer::new(KeyScheme::Secp256k1, prefix))
}

pub fn ed25519_public_key(prefix: &str) -> SerializerRef {
    Arc::new(PublicKeySerializer::new(KeyScheme::Ed25519, prefix))
}

pub fn address(prefix: &str) -> SerializerRef {
    Arc::new(AddressSerializer::new(AddressScheme::Graphene, prefix))
}

pub fn pts_address() -> SerializerRef {
    Arc::new(AddressSerializer::new(AddressScheme::Pts, ""))
}
