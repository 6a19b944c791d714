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
use crate::serializer::{Serializer, SerializerRef};
use crate::value::Value;

/// Two heterogeneous values written back to back; raw form is `[first, second]`.
#[derive(Clone)]
pub struct PairSerializer {
    first: SerializerRef,
    second: SerializerRef,
}

impl PairSerializer {
    pub fn new(first: SerializerRef, second: SerializerRef) -> Self {
        PairSerializer { first, second }
    }

    fn parts<'a>(&self, value: &'a Value) -> Result<(&'a Value, &'a Value), Error> {
        match value.as_array() {
            Some([a, b]) => Ok((a, b)),
            _ => Err(Error::validation(format!(
                "expected pair as 2-element array, got {}",
                value.kind()
            ))),
        }
    }
}

impl Serializer for PairSerializer {
    fn to_raw(&self, value: &Value) -> Result<Value, Error> {
        let value = value.resolve();
        let (a, b) = self.parts(&value)?;
        let a = self.first.to_raw(a).map_err(|e| e.with_context("element 0"))?;
        let b = self.second.to_raw(b).map_err(|e| e.with_context("element 1"))?;
        Ok(Value::Array(vec![a, b]))
    }

    fn append_to_buffer(&self, raw: &Value, writer: &mut Writer) -> Result<(), Error> {
        let (a, b) = self.parts(raw)?;
        self.first
            .append_to_buffer(a, writer)
            .map_err(|e| e.with_context("element 0"))?;
        self.second
            .append_to_buffer(b, writer)
            .map_err(|e| e.with_context("element 1"))
    }

    fn read_from_buffer(&self, reader: &mut Reader<'_>) -> Result<Value, Error> {
        let a = self
            .first
            .read_from_buffer(reader)
            .map_err(|e| e.with_context("element 0"))?;
        let b = self
            .second
            .read_from_buffer(reader)
            .map_err(|e| e.with_context("element 1"))?;
        Ok(Value::Array(vec![a, b]))
    }

    fn to_object(&self, raw: &Value) -> Result<JsonValue, Error> {
        let (a, b) = self.parts(raw)?;
        Ok(JsonValue::Array(vec![
            self.first.to_object(a)?,
            self.second.to_object(b)?,
        ]))
    }
}
