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
use crate::serializer::list::write_len;
use crate::serializer::util::capacity_hint;
use crate::serializer::{raw_bytes, Serializer, SerializerRef};
use crate::value::Value;

#[inline]
fn key_context(index: usize) -> String {
    format!("key {index}")
}

#[inline]
fn value_context(index: usize) -> String {
    format!("value {index}")
}

/// Sorted `(key, value)` pairs, ordered and de-duplicated by the key's
/// serialized bytes. Raw form is an array of 2-element arrays.
///
/// Input may be an array of pairs or, when the key's canonical form is a
/// string, a plain record. An absent value is the empty map.
#[derive(Clone)]
pub struct MapSerializer {
    key: SerializerRef,
    value: SerializerRef,
}

impl MapSerializer {
    pub fn new(key: SerializerRef, value: SerializerRef) -> Self {
        MapSerializer { key, value }
    }

    fn input_pairs(&self, value: &Value) -> Result<Vec<(Value, Value)>, Error> {
        match value {
            Value::Null => Ok(Vec::new()),
            Value::Object(record) => {
                if !self.key.has_text_form() {
                    return Err(Error::validation(
                        "map keys of this type cannot be given as a record",
                    ));
                }
                Ok(record
                    .iter()
                    .map(|(k, v)| (Value::Str(k.clone()), v.clone()))
                    .collect())
            }
            Value::Array(items) => items
                .iter()
                .enumerate()
                .map(|(i, item)| split_pair(&item.resolve(), i))
                .collect(),
            other => Err(Error::validation(format!(
                "expected map as array of pairs or record, got {}",
                other.kind()
            ))),
        }
    }
}

fn split_pair(item: &Value, index: usize) -> Result<(Value, Value), Error> {
    match item.as_array() {
        Some([k, v]) => Ok((k.clone(), v.clone())),
        _ => Err(Error::validation(format!(
            "map entry {index} is not a [key, value] pair"
        ))),
    }
}

fn raw_pair(raw: &Value, index: usize) -> Result<(&Value, &Value), Error> {
    match raw.as_array() {
        Some([k, v]) => Ok((k, v)),
        _ => Err(Error::validation(format!(
            "map entry {index} is not a canonical [key, value] pair"
        ))),
    }
}

fn raw_entries(raw: &Value) -> Result<&[Value], Error> {
    raw.as_array().ok_or_else(|| {
        Error::validation(format!("expected canonical map array, got {}", raw.kind()))
    })
}

impl Serializer for MapSerializer {
    fn to_raw(&self, value: &Value) -> Result<Value, Error> {
        let value = value.resolve();
        let pairs = self.input_pairs(&value)?;
        let mut entries = Vec::with_capacity(pairs.len());
        for (i, (k, v)) in pairs.iter().enumerate() {
            let k_raw = self
                .key
                .to_raw(k)
                .map_err(|e| e.with_context(key_context(i)))?;
            let v_raw = self
                .value
                .to_raw(v)
                .map_err(|e| e.with_context(value_context(i)))?;
            let bytes = raw_bytes(self.key.as_ref(), &k_raw)
                .map_err(|e| e.with_context(key_context(i)))?;
            entries.push((bytes, Value::Array(vec![k_raw, v_raw])));
        }
        let sorted = sort_unique(entries, |h| {
            Error::validation(format!("duplicate map key {h}"))
        })?;
        Ok(Value::Array(sorted))
    }

    fn append_to_buffer(&self, raw: &Value, writer: &mut Writer) -> Result<(), Error> {
        let entries = raw_entries(raw)?;
        write_len(entries.len(), writer)?;
        for (i, entry) in entries.iter().enumerate() {
            let (k, v) = raw_pair(entry, i)?;
            self.key
                .append_to_buffer(k, writer)
                .map_err(|e| e.with_context(key_context(i)))?;
            self.value
                .append_to_buffer(v, writer)
                .map_err(|e| e.with_context(value_context(i)))?;
        }
        Ok(())
    }

    fn read_from_buffer(&self, reader: &mut Reader<'_>) -> Result<Value, Error> {
        let len = reader.read_varuint32()?;
        let mut entries = Vec::with_capacity(capacity_hint(len, reader.remaining()));
        for i in 0..len as usize {
            let start = reader.get_cursor();
            let k = self
                .key
                .read_from_buffer(reader)
                .map_err(|e| e.with_context(key_context(i)))?;
            let key_bytes = reader.slice_from(start).to_vec();
            let v = self
                .value
                .read_from_buffer(reader)
                .map_err(|e| e.with_context(value_context(i)))?;
            entries.push((key_bytes, Value::Array(vec![k, v])));
        }
        let sorted = sort_unique(entries, |h| Error::decode(format!("duplicate map key {h}")))?;
        Ok(Value::Array(sorted))
    }

    fn to_object(&self, raw: &Value) -> Result<JsonValue, Error> {
        let entries = raw_entries(raw)?;
        let mut json = Vec::with_capacity(entries.len());
        for (i, entry) in entries.iter().enumerate() {
            let (k, v) = raw_pair(entry, i)?;
            let k_json = self
                .key
                .to_object(k)
                .map_err(|e| e.with_context(key_context(i)))?;
            let v_json = self
                .value
                .to_object(v)
                .map_err(|e| e.with_context(value_context(i)))?;
            json.push(JsonValue::Array(vec![k_json, v_json]));
        }
        Ok(JsonValue::Array(json))
    }
}
