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

//! Tagged unions.
//!
//! The wire form is a varint32 tag followed by the payload encoded with the
//! serializer registered under that tag. Both the input and raw forms are a
//! `[tag, payload]` array.

use std::collections::BTreeMap;

use serde_json::Value as JsonValue;

use crate::buffer::{Reader, Writer};
use crate::error::Error;
use crate::serializer::util::int_in_range;
use crate::serializer::{Serializer, SerializerRef};
use crate::value::Value;

const DEFAULT_LABEL: &str = "static variant with key";

#[derive(Clone)]
pub struct StaticVariantSerializer {
    variants: BTreeMap<u32, SerializerRef>,
    label: &'static str,
}

impl StaticVariantSerializer {
    pub fn new<I>(variants: I) -> Self
    where
        I: IntoIterator<Item = (u32, SerializerRef)>,
    {
        StaticVariantSerializer {
            variants: variants.into_iter().collect(),
            label: DEFAULT_LABEL,
        }
    }

    /// Sets the prefix used when a payload error is reported, e.g.
    /// `"operation with id"` gives `operation with id 0: ...`.
    pub fn with_label(mut self, label: &'static str) -> Self {
        self.label = label;
        self
    }

    pub fn variant(&self, tag: u32) -> Option<&SerializerRef> {
        self.variants.get(&tag)
    }

    pub fn tags(&self) -> impl Iterator<Item = u32> + '_ {
        self.variants.keys().copied()
    }

    fn lookup(&self, tag: u32, make_err: fn(String) -> Error) -> Result<&SerializerRef, Error> {
        self.variants
            .get(&tag)
            .ok_or_else(|| make_err(format!("serializer with key {tag} not found")))
    }

    fn split<'a>(&self, value: &'a Value) -> Result<(&'a Value, &'a Value), Error> {
        match value.as_array() {
            Some([tag, payload]) => Ok((tag, payload)),
            _ => Err(Error::validation(format!(
                "expected static variant as [tag, payload], got {}",
                value.kind()
            ))),
        }
    }

    fn context(&self, tag: u32) -> String {
        format!("{} {tag}", self.label)
    }
}

fn validation(msg: String) -> Error {
    Error::validation(msg)
}

fn decode(msg: String) -> Error {
    Error::decode(msg)
}

impl Serializer for StaticVariantSerializer {
    fn to_raw(&self, value: &Value) -> Result<Value, Error> {
        let value = value.resolve();
        let (tag, payload) = self.split(&value)?;
        let tag = int_in_range(&tag.resolve(), 0, u32::MAX as i128, "static variant key")? as u32;
        let serializer = self.lookup(tag, validation)?;
        let payload = serializer
            .to_raw(payload)
            .map_err(|e| e.with_context(self.context(tag)))?;
        Ok(Value::Array(vec![Value::Int(tag as i128), payload]))
    }

    fn append_to_buffer(&self, raw: &Value, writer: &mut Writer) -> Result<(), Error> {
        let (tag, payload) = self.split(raw)?;
        let tag = int_in_range(tag, 0, u32::MAX as i128, "static variant key")? as u32;
        let serializer = self.lookup(tag, validation)?;
        writer.write_varuint32(tag);
        serializer
            .append_to_buffer(payload, writer)
            .map_err(|e| e.with_context(self.context(tag)))
    }

    fn read_from_buffer(&self, reader: &mut Reader<'_>) -> Result<Value, Error> {
        let tag = reader.read_varuint32()?;
        let serializer = self.lookup(tag, decode)?;
        reader.enter()?;
        let payload = serializer
            .read_from_buffer(reader)
            .map_err(|e| e.with_context(self.context(tag)));
        reader.leave();
        Ok(Value::Array(vec![Value::Int(tag as i128), payload?]))
    }

    fn to_object(&self, raw: &Value) -> Result<JsonValue, Error> {
        let (tag, payload) = self.split(raw)?;
        let tag = int_in_range(tag, 0, u32::MAX as i128, "static variant key")? as u32;
        let payload = self
            .lookup(tag, validation)?
            .to_object(payload)
            .map_err(|e| e.with_context(self.context(tag)))?;
        Ok(JsonValue::Array(vec![JsonValue::from(tag), payload]))
    }
}
