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

use std::borrow::Cow;

use serde_json::{Map as JsonMap, Value as JsonValue};

use crate::buffer::{Reader, Writer};
use crate::error::Error;
use crate::serializer::{Serializer, SerializerRef};
use crate::value::{Fields, Value};

/// Ordered named fields. Field order is both the schema and the wire
/// contract: the encoding is the plain concatenation of every field's
/// encoding, with no per-field prefix.
///
/// Missing fields are presented to their serializer as [`Value::Null`], so
/// only optional fields may be omitted. Unknown keys are rejected unless
/// [`StructSerializer::ignore_unknown_keys`] is set.
#[derive(Clone)]
pub struct StructSerializer {
    fields: Vec<(Cow<'static, str>, SerializerRef)>,
    ignore_unknown_keys: bool,
}

#[inline]
fn key_context(name: &str) -> String {
    format!("struct key \"{name}\"")
}

impl StructSerializer {
    pub fn new<I, K>(fields: I) -> Self
    where
        I: IntoIterator<Item = (K, SerializerRef)>,
        K: Into<Cow<'static, str>>,
    {
        StructSerializer {
            fields: fields.into_iter().map(|(k, s)| (k.into(), s)).collect(),
            ignore_unknown_keys: false,
        }
    }

    /// Drops keys the schema does not name instead of failing; used for
    /// objects received from the node, which carry extra bookkeeping fields.
    pub fn ignore_unknown_keys(mut self) -> Self {
        self.ignore_unknown_keys = true;
        self
    }

    /// A copy of this schema with `fields` appended after the existing ones.
    pub fn extend<I, K>(&self, fields: I) -> Self
    where
        I: IntoIterator<Item = (K, SerializerRef)>,
        K: Into<Cow<'static, str>>,
    {
        let mut extended = self.clone();
        extended
            .fields
            .extend(fields.into_iter().map(|(k, s)| (k.into(), s)));
        extended
    }

    pub fn field(&self, name: &str) -> Option<&SerializerRef> {
        self.fields
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, s)| s)
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(k, _)| &**k)
    }

    fn expect_object<'a>(&self, value: &'a Value) -> Result<&'a Fields, Error> {
        value
            .as_object()
            .ok_or_else(|| Error::validation(format!("expected object, got {}", value.kind())))
    }
}

impl Serializer for StructSerializer {
    fn to_raw(&self, value: &Value) -> Result<Value, Error> {
        let value = value.resolve();
        let object = self.expect_object(&value)?;
        if !self.ignore_unknown_keys {
            if let Some(unknown) = object.keys().find(|k| self.field(k).is_none()) {
                return Err(Error::validation(format!("unknown struct key \"{unknown}\"")));
            }
        }
        let mut raw = Fields::with_capacity(self.fields.len());
        for (name, serializer) in &self.fields {
            let field = object.get(&**name).unwrap_or(&Value::Null);
            let field_raw = serializer
                .to_raw(field)
                .map_err(|e| e.with_context(key_context(name)))?;
            raw.insert(name.to_string(), field_raw);
        }
        Ok(Value::Object(raw))
    }

    fn append_to_buffer(&self, raw: &Value, writer: &mut Writer) -> Result<(), Error> {
        let object = self.expect_object(raw)?;
        for (name, serializer) in &self.fields {
            let field = object.get(&**name).unwrap_or(&Value::Null);
            serializer
                .append_to_buffer(field, writer)
                .map_err(|e| e.with_context(key_context(name)))?;
        }
        Ok(())
    }

    fn read_from_buffer(&self, reader: &mut Reader<'_>) -> Result<Value, Error> {
        let mut raw = Fields::with_capacity(self.fields.len());
        for (name, serializer) in &self.fields {
            let field = serializer
                .read_from_buffer(reader)
                .map_err(|e| e.with_context(key_context(name)))?;
            raw.insert(name.to_string(), field);
        }
        Ok(Value::Object(raw))
    }

    fn to_object(&self, raw: &Value) -> Result<JsonValue, Error> {
        let object = self.expect_object(raw)?;
        let mut json = JsonMap::with_capacity(self.fields.len());
        for (name, serializer) in &self.fields {
            let field = object.get(&**name).unwrap_or(&Value::Null);
            // absent optionals are omitted, matching the node's JSON
            if field.is_null() {
                continue;
            }
            let field_json = serializer
                .to_object(field)
                .map_err(|e| e.with_context(key_context(name)))?;
            json.insert(name.to_string(), field_json);
        }
        Ok(JsonValue::Object(json))
    }
}
