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
use crate::serializer::util::{capacity_hint, expect_array};
use crate::serializer::{Serializer, SerializerRef};
use crate::value::Value;

#[inline]
pub(crate) fn element_context(index: usize) -> String {
    format!("element {index}")
}

pub(crate) fn write_len(len: usize, writer: &mut Writer) -> Result<(), Error> {
    let len = u32::try_from(len)
        .map_err(|_| Error::validation(format!("collection of {len} elements is too long")))?;
    writer.write_varuint32(len);
    Ok(())
}

/// Varint32 element count, then every element in input order.
#[derive(Clone)]
pub struct VectorSerializer {
    element: SerializerRef,
}

impl VectorSerializer {
    pub fn new(element: SerializerRef) -> Self {
        VectorSerializer { element }
    }
}

impl Serializer for VectorSerializer {
    fn to_raw(&self, value: &Value) -> Result<Value, Error> {
        let value = value.resolve();
        let items = expect_array(&value, "vector")?;
        items
            .iter()
            .enumerate()
            .map(|(i, item)| {
                self.element
                    .to_raw(item)
                    .map_err(|e| e.with_context(element_context(i)))
            })
            .collect::<Result<Vec<_>, Error>>()
            .map(Value::Array)
    }

    fn append_to_buffer(&self, raw: &Value, writer: &mut Writer) -> Result<(), Error> {
        let items = expect_array(raw, "vector")?;
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
        let mut items = Vec::with_capacity(capacity_hint(len, reader.remaining()));
        for i in 0..len as usize {
            let item = self
                .element
                .read_from_buffer(reader)
                .map_err(|e| e.with_context(element_context(i)))?;
            items.push(item);
        }
        Ok(Value::Array(items))
    }

    fn to_object(&self, raw: &Value) -> Result<JsonValue, Error> {
        let items = expect_array(raw, "vector")?;
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
