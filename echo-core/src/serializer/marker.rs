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

use serde_json::{Map as JsonMap, Value as JsonValue};

use crate::buffer::{Reader, Writer};
use crate::error::Error;
use crate::serializer::Serializer;
use crate::value::Value;

/// Zero-byte placeholder, used as the only variant of future extensions.
#[derive(Clone, Copy, Debug, Default)]
pub struct VoidSerializer;

impl Serializer for VoidSerializer {
    fn to_raw(&self, value: &Value) -> Result<Value, Error> {
        match &*value.resolve() {
            Value::Null => Ok(Value::Null),
            Value::Object(fields) if fields.is_empty() => Ok(Value::Null),
            other => Err(Error::validation(format!(
                "expected void as null or empty object, got {}",
                other.kind()
            ))),
        }
    }

    fn append_to_buffer(&self, _raw: &Value, _writer: &mut Writer) -> Result<(), Error> {
        Ok(())
    }

    fn read_from_buffer(&self, _reader: &mut Reader<'_>) -> Result<Value, Error> {
        Ok(Value::Null)
    }

    fn to_object(&self, _raw: &Value) -> Result<JsonValue, Error> {
        Ok(JsonValue::Object(JsonMap::new()))
    }
}
