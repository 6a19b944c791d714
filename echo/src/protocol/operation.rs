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

//! The operation registry and the operation codec.
//!
//! Operation schemas refer back to the operation codec (a proposal carries
//! operations of its own), so the graph is built in two phases: an empty
//! [`OperationRegistry`] is shared first, codecs that need to embed
//! operations are built against it, and the id table is installed once at
//! the end.

use std::borrow::Cow;
use std::sync::{Arc, OnceLock, Weak};

use echo_core::serializer::StaticVariantSerializer;
use echo_core::{Error, Fields, Reader, Serializer, SerializerRef, Value, Writer};
use serde_json::Value as JsonValue;
use tracing::{debug, trace};

use crate::types::OperationId;

const OPERATION_LABEL: &str = "operation with id";

/// Immutable id → schema table, filled exactly once.
#[derive(Default)]
pub struct OperationRegistry {
    variants: OnceLock<StaticVariantSerializer>,
}

impl OperationRegistry {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Installs the operation table. Fails if a table is already installed.
    pub fn install<I>(&self, operations: I) -> Result<(), Error>
    where
        I: IntoIterator<Item = (OperationId, SerializerRef)>,
    {
        let variants = StaticVariantSerializer::new(
            operations.into_iter().map(|(id, ser)| (id.id(), ser)),
        )
        .with_label(OPERATION_LABEL);
        let count = variants.tags().count();
        self.variants
            .set(variants)
            .map_err(|_| Error::registry("operation registry is already installed"))?;
        debug!(count, "installed operation registry");
        Ok(())
    }

    pub fn is_installed(&self) -> bool {
        self.variants.get().is_some()
    }

    pub fn variants(&self) -> Result<&StaticVariantSerializer, Error> {
        self.variants
            .get()
            .ok_or_else(|| Error::registry("operation registry is not installed"))
    }

    /// Schema of the fields of operation `id`.
    pub fn fields(&self, id: OperationId) -> Option<&SerializerRef> {
        self.variants.get().and_then(|v| v.variant(id.id()))
    }
}

#[derive(Clone)]
enum RegistryLink {
    Owned(Arc<OperationRegistry>),
    // operations nested inside operation schemas; avoids an Arc cycle
    Nested(Weak<OperationRegistry>),
}

/// `[operation_id, fields]`, dispatched through an [`OperationRegistry`].
#[derive(Clone)]
pub struct OperationSerializer {
    registry: RegistryLink,
    default_fee_asset: String,
    unrequired_fee: bool,
}

impl OperationSerializer {
    pub fn new(registry: Arc<OperationRegistry>, default_fee_asset: impl Into<String>) -> Self {
        OperationSerializer {
            registry: RegistryLink::Owned(registry),
            default_fee_asset: default_fee_asset.into(),
            unrequired_fee: false,
        }
    }

    /// Codec for operations embedded in operation schemas. It does not keep
    /// the registry alive.
    pub(crate) fn nested(registry: &Arc<OperationRegistry>, default_fee_asset: &str) -> Self {
        OperationSerializer {
            registry: RegistryLink::Nested(Arc::downgrade(registry)),
            default_fee_asset: default_fee_asset.to_string(),
            unrequired_fee: false,
        }
    }

    /// A copy whose `to_raw` always behaves like
    /// [`OperationSerializer::to_raw_with_unrequired_fee`].
    pub fn unrequired_fee_mode(&self) -> Self {
        OperationSerializer {
            unrequired_fee: true,
            ..self.clone()
        }
    }

    fn with_variants<R>(
        &self,
        f: impl FnOnce(&StaticVariantSerializer) -> Result<R, Error>,
    ) -> Result<R, Error> {
        match &self.registry {
            RegistryLink::Owned(registry) => f(registry.variants()?),
            RegistryLink::Nested(weak) => {
                let registry = weak
                    .upgrade()
                    .ok_or_else(|| Error::registry("operation registry was dropped"))?;
                f(registry.variants()?)
            }
        }
    }

    /// `to_raw` that first fills in a zero fee in the default asset when the
    /// caller supplied none. The input value is never modified.
    pub fn to_raw_with_unrequired_fee(&self, value: &Value) -> Result<Value, Error> {
        let resolved = value.resolve();
        let with_fee = self.inject_fee(&resolved)?;
        let target: &Value = with_fee.as_ref().unwrap_or(&*resolved);
        self.with_variants(|v| v.to_raw(target))
    }

    fn inject_fee(&self, value: &Value) -> Result<Option<Value>, Error> {
        let Some([id, fields]) = value.as_array() else {
            return Ok(None);
        };
        let resolved = fields.resolve();
        let Some(object) = resolved.as_object() else {
            return Ok(None);
        };
        if object.get("fee").is_some_and(|fee| !fee.is_null()) {
            // Hand on the resolved fields so a lazy value is not resolved twice.
            return Ok(match resolved {
                Cow::Owned(fields) => Some(Value::Array(vec![id.clone(), fields])),
                Cow::Borrowed(_) => None,
            });
        }
        trace!(
            asset_id = %self.default_fee_asset,
            "injecting zero fee into operation"
        );
        let mut fee = Fields::with_capacity(2);
        fee.insert("asset_id".to_string(), Value::from(self.default_fee_asset.as_str()));
        fee.insert("amount".to_string(), Value::Int(0));
        let mut object = object.clone();
        object.insert("fee".to_string(), Value::Object(fee));
        Ok(Some(Value::Array(vec![id.clone(), Value::Object(object)])))
    }
}

impl Serializer for OperationSerializer {
    fn to_raw(&self, value: &Value) -> Result<Value, Error> {
        if self.unrequired_fee {
            return self.to_raw_with_unrequired_fee(value);
        }
        self.with_variants(|v| v.to_raw(value))
    }

    fn append_to_buffer(&self, raw: &Value, writer: &mut Writer) -> Result<(), Error> {
        self.with_variants(|v| v.append_to_buffer(raw, writer))
    }

    fn read_from_buffer(&self, reader: &mut Reader<'_>) -> Result<Value, Error> {
        self.with_variants(|v| v.read_from_buffer(reader))
    }

    fn to_object(&self, raw: &Value) -> Result<JsonValue, Error> {
        self.with_variants(|v| v.to_object(raw))
    }
}
