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

use serde_json::Value as JsonValue;

use crate::buffer::{Reader, Writer};
use crate::error::Error;
use crate::serializer::collection::sort_unique;
use crate::serializer::list::{element_context, write_len};
use crate::serializer::util::{capacity_hint, expect_array};
use crate::serializer::{raw_bytes, Serializer, SerializerRef};
use crate::value::Value;

/// A vector kept in canonical order: sorted by each element's serialized
/// bytes, without duplicates. An absent value is the empty set.
#[derive(Clone)]
pub struct SetSerializer {
    element: SerializerRef,
}

impl SetSerializer {
    pub fn new(element: SerializerRef) -> Self {
        SetSerializer { element }
    }
}

impl Serializer for SetSerializer {
    fn to_raw(&self, value: &Value) -> Result<Value, Error> {
        let value = value.resolve();
        if value.is_null() {
            return Ok(Value::Array(Vec::new()));
        }
        let items = expect_array(&value, "set")?;
        let mut entries = Vec::with_capacity(items.len());
        for (i, item) in items.iter().enumerate() {
            let raw = self
                .element
                .to_raw(item)
                .map_err(|e| e.with_context(element_context(i)))?;
            let bytes = raw_bytes(self.element.as_ref(), &raw)
                .map_err(|e| e.with_context(element_context(i)))?;
            entries.push((bytes, raw));
        }
        let sorted = sort_unique(entries, |h| {
            Error::validation(format!("duplicate set element {h}"))
        })?;
        Ok(Value::Array(sorted))
    }

    fn append_to_buffer(&self, raw: &Value, writer: &mut Writer) -> Result<(), Error> {
        let items = expect_array(raw, "set")?;
        write_len(items.len(), writer)?;
        for (i, item) in items.iter().enumerate() {
            self.element
                .append_to_buffer(item, writer)
                .map_err(|e| e.with_context(element_context(i)))?;
        }
        Ok(())
    }

    fn read_from_buffer(&self, reader: &mut Reader<'_>) -> Result<Value, Error> {
        let len = reader.read_varuint32()?;
        let mut entries = Vec::with_capacity(capacity_hint(len, reader.remaining()));
        for i in 0..len as usize {
            let start = reader.get_cursor();
            let item = self
                .element
                .read_from_buffer(reader)
                .map_err(|e| e.with_context(element_context(i)))?;
            entries.push((reader.slice_from(start).to_vec(), item));
        }
        let sorted = sort_unique(entries, |h| {
            Error::decode(format!("duplicate set element {h}"))
        })?;
        Ok(Value::Array(sorted))
    }

    fn to_object(&self, raw: &Value) -> Result<JsonValue, Error> {
        let items = expect_array(raw, "set")?;
        items
            .iter()
            .enumerate()
            .map(|(i, item)| {
                self.element
                    .to_object(item)
                    .map_err(|e| e.with_context(element_context(i)))
            })
            .collect::<Result<Vec<_>, Error>>()
            .map(JsonValue::Array)
    }
}
