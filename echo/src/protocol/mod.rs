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

//! The ECHO protocol schema: every operation, transaction, block and chain
//! object codec, built once from a [`ChainConfig`].

use std::sync::Arc;

use echo_core::{struct_serializer, Error, SerializerRef};
use tracing::debug;

use crate::config::ChainConfig;
use crate::serializer::ObjectId;
use crate::types::{ImplementationObjectType, OperationId, ProtocolObjectType, ReservedSpace};

mod common;
mod objects;
mod operation;
mod operations;
mod transaction;

pub use self::common::Common;
pub use self::operation::{OperationRegistry, OperationSerializer};
pub use self::transaction::{transaction_digest, transaction_id};

use self::objects::ObjectSchemas;
use self::transaction::TransactionSchemas;

/// One immutable serializer graph. Cheap to share: every accessor hands out
/// a reference to a codec that may be used from any thread.
pub struct Protocol {
    config: ChainConfig,
    common: Common,
    registry: Arc<OperationRegistry>,
    operation: Arc<OperationSerializer>,
    transaction_with_unrequired_fee: SerializerRef,
    transactions: TransactionSchemas,
    objects: ObjectSchemas,
}

impl Protocol {
    pub fn new(config: ChainConfig) -> Result<Protocol, Error> {
        let common = Common::new(&config);

        let registry = OperationRegistry::new();
        let nested: SerializerRef = Arc::new(OperationSerializer::nested(
            &registry,
            &config.core_asset_id,
        ));
        let op_wrapper = struct_serializer! { op: nested };
        registry.install(operations::operations(&common, &op_wrapper))?;

        let operation = Arc::new(OperationSerializer::new(
            registry.clone(),
            config.core_asset_id.clone(),
        ));
        let operation_ref: SerializerRef = operation.clone();
        let transactions = TransactionSchemas::new(&common, &operation_ref);
        let fee_estimating: SerializerRef = Arc::new(operation.unrequired_fee_mode());
        let transaction_with_unrequired_fee =
            Arc::new(transaction::transaction_fields(&common, &fee_estimating));
        let objects = ObjectSchemas::new(&common);

        debug!(
            address_prefix = %config.address_prefix,
            core_asset_id = %config.core_asset_id,
            "constructed protocol schema"
        );
        Ok(Protocol {
            config,
            common,
            registry,
            operation,
            transaction_with_unrequired_fee,
            transactions,
            objects,
        })
    }

    pub fn config(&self) -> &ChainConfig {
        &self.config
    }

    pub fn common(&self) -> &Common {
        &self.common
    }

    pub fn registry(&self) -> &Arc<OperationRegistry> {
        &self.registry
    }

    pub fn operation(&self) -> &Arc<OperationSerializer> {
        &self.operation
    }

    pub fn operation_fields(&self, id: OperationId) -> Option<&SerializerRef> {
        self.registry.fields(id)
    }

    pub fn transaction(&self) -> &SerializerRef {
        &self.transactions.transaction
    }

    /// Transaction codec whose operations get a zero default fee when none
    /// is given, for fee estimation.
    pub fn transaction_with_unrequired_fee(&self) -> &SerializerRef {
        &self.transaction_with_unrequired_fee
    }

    pub fn signed_transaction(&self) -> &SerializerRef {
        &self.transactions.signed_transaction
    }

    pub fn processed_transaction(&self) -> &SerializerRef {
        &self.transactions.processed_transaction
    }

    pub fn operation_result(&self) -> &SerializerRef {
        &self.transactions.operation_result
    }

    pub fn block_header(&self) -> &SerializerRef {
        &self.transactions.block_header
    }

    pub fn signed_block(&self) -> &SerializerRef {
        &self.transactions.signed_block
    }

    pub fn account_object(&self) -> &SerializerRef {
        &self.objects.account
    }

    pub fn asset_object(&self) -> &SerializerRef {
        &self.objects.asset
    }

    pub fn dynamic_global_property_object(&self) -> &SerializerRef {
        &self.objects.dynamic_global_property
    }

    pub fn balance_object(&self) -> &SerializerRef {
        &self.objects.balance
    }

    /// Schema for the object stored under `id`, if the cache normalizes it.
    pub fn chain_object(&self, id: &ObjectId) -> Option<&SerializerRef> {
        let space = ReservedSpace::try_from(id.space).ok()?;
        match space {
            ReservedSpace::Protocol => match ProtocolObjectType::try_from(id.object_type).ok()? {
                ProtocolObjectType::ACCOUNT => Some(&self.objects.account),
                ProtocolObjectType::ASSET => Some(&self.objects.asset),
                ProtocolObjectType::BALANCE => Some(&self.objects.balance),
                _ => None,
            },
            ReservedSpace::Implementation => {
                match ImplementationObjectType::try_from(id.object_type).ok()? {
                    ImplementationObjectType::DYNAMIC_GLOBAL_PROPERTY => {
                        Some(&self.objects.dynamic_global_property)
                    }
                    _ => None,
                }
            }
            ReservedSpace::Relative => None,
        }
    }
}
