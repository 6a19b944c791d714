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

//! Chain objects as returned by the node, for normalizing cached state.
//! Unknown keys are dropped, since the node attaches bookkeeping fields the
//! client never interprets.

use std::sync::Arc;

use echo_core::serializer::{
    bytes, optional, string, time_point_sec, uint32, uint8, StructSerializer,
};
use echo_core::SerializerRef;

use crate::protocol::common::Common;
use crate::serializer::{implementation_id, protocol_id};
use crate::types::{ImplementationObjectType as I, ProtocolObjectType as T};

pub(crate) struct ObjectSchemas {
    pub account: SerializerRef,
    pub asset: SerializerRef,
    pub dynamic_global_property: SerializerRef,
    pub balance: SerializerRef,
}

fn object<F, K>(fields: F) -> SerializerRef
where
    F: IntoIterator<Item = (K, SerializerRef)>,
    K: Into<std::borrow::Cow<'static, str>>,
{
    Arc::new(StructSerializer::new(fields).ignore_unknown_keys())
}

impl ObjectSchemas {
    pub fn new(c: &Common) -> Self {
        let account = object([
            ("id", c.account_id.clone()),
            ("registrar", c.account_id.clone()),
            ("name", string()),
            ("active", c.authority.clone()),
            ("echorand_key", c.echorand_key.clone()),
            ("options", c.account_options.clone()),
            ("statistics", implementation_id(I::ACCOUNT_STATISTICS)),
            ("whitelisting_accounts", c.account_set()),
            ("blacklisting_accounts", c.account_set()),
            ("whitelisted_accounts", c.account_set()),
            ("blacklisted_accounts", c.account_set()),
            ("top_n_control_flags", uint8()),
        ]);
        let asset = object([
            ("id", c.asset_id.clone()),
            ("symbol", string()),
            ("precision", uint8()),
            ("issuer", c.account_id.clone()),
            ("options", c.asset_options.clone()),
            ("dynamic_asset_data_id", implementation_id(I::ASSET_DYNAMIC_DATA)),
            (
                "bitasset_data_id",
                optional(implementation_id(I::ASSET_BITASSET_DATA)),
            ),
        ]);
        let dynamic_global_property = object([
            ("id", implementation_id(I::DYNAMIC_GLOBAL_PROPERTY)),
            ("head_block_number", uint32()),
            ("head_block_id", bytes(Some(20))),
            ("time", time_point_sec()),
            ("next_maintenance_time", time_point_sec()),
            ("last_maintenance_time", time_point_sec()),
            ("last_irreversible_block_num", uint32()),
        ]);
        let balance = object([
            ("id", protocol_id(T::BALANCE)),
            ("owner", c.address.clone()),
            ("balance", c.asset.clone()),
            ("last_claim_date", time_point_sec()),
        ]);
        ObjectSchemas {
            account,
            asset,
            dynamic_global_property,
            balance,
        }
    }
}
