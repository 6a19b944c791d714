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

/// One presence byte, then the inner value when present.
#[derive(Clone)]
pub struct OptionalSerializer {
    inner: SerializerRef,
}

impl OptionalSerializer {
    pub fn new(inner: SerializerRef) -> Self {
        OptionalSerializer { inner }
    }
}

impl Serializer for OptionalSerializer {
    fn to_raw(&self, value: &Value) -> Result<Value, Error> {
        let value = value.resolve();
        if value.is_null() {
            return Ok(Value::Null);
        }
        self.inner.to_raw(&value)
    }

    fn append_to_buffer(&self, raw: &Value, writer: &mut Writer) -> Result<(), Error> {
        if raw.is_null() {
            writer.write_u8(0);
            return Ok(());
        }
        writer.write_u8(1);
        self.inner.append_to_buffer(raw, writer)
    }

    fn read_from_buffer(&self, reader: &mut Reader<'_>) -> Result<Value, Error> {
        match reader.read_u8()? {
            0 => Ok(Value::Null),
            1 => self.inner.read_from_buffer(reader),
            flag => Err(Error::decode(format!("invalid optional flag {flag}"))),
        }
    }

    fn to_object(&self, raw: &Value) -> Result<JsonValue, Error> {
        if raw.is_null() {
            return Ok(JsonValue::Null);
        }
        self.inner.to_object(raw)
    }
}
