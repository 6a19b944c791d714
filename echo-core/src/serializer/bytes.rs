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
use crate::serializer::Serializer;
use crate::value::Value;

/// Raw byte blob, fixed-size or varint32-length-prefixed. Canonical textual
/// form is lowercase hex.
#[derive(Clone, Copy, Debug, Default)]
pub struct BytesSerializer {
    size: Option<usize>,
}

impl BytesSerializer {
    pub fn new(size: Option<usize>) -> Self {
        BytesSerializer { size }
    }

    pub fn fixed(size: usize) -> Self {
        Self::new(Some(size))
    }

    pub fn size(&self) -> Option<usize> {
        self.size
    }

    fn check_size(&self, len: usize) -> Result<(), Error> {
        match self.size {
            Some(size) if size != len => Err(Error::validation(format!(
                "expected {size} bytes, got {len}"
            ))),
            _ => Ok(()),
        }
    }
}

impl Serializer for BytesSerializer {
    fn to_raw(&self, value: &Value) -> Result<Value, Error> {
        let bytes = match &*value.resolve() {
            Value::Bytes(b) => b.clone(),
            Value::Str(s) => hex::decode(s)
                .map_err(|e| Error::validation(format!("invalid hex string: {e}")))?,
            other => {
                return Err(Error::validation(format!(
                    "expected bytes or hex string, got {}",
                    other.kind()
                )))
            }
        };
        self.check_size(bytes.len())?;
        Ok(Value::Bytes(bytes))
    }

    fn append_to_buffer(&self, raw: &Value, writer: &mut Writer) -> Result<(), Error> {
        let bytes = raw.as_bytes().ok_or_else(|| {
            Error::validation(format!("expected canonical bytes, got {}", raw.kind()))
        })?;
        self.check_size(bytes.len())?;
        if self.size.is_none() {
            let len = u32::try_from(bytes.len())
                .map_err(|_| Error::validation("byte blob longer than u32::MAX"))?;
            writer.write_varuint32(len);
        }
        writer.write_bytes(bytes);
        Ok(())
    }

    fn read_from_buffer(&self, reader: &mut Reader<'_>) -> Result<Value, Error> {
        let len = match self.size {
            Some(size) => size,
            None => reader.read_varuint32()? as usize,
        };
        Ok(Value::Bytes(reader.read_bytes(len)?.to_vec()))
    }

    fn to_object(&self, raw: &Value) -> Result<JsonValue, Error> {
        let bytes = raw.as_bytes().ok_or_else(|| {
            Error::validation(format!("expected canonical bytes, got {}", raw.kind()))
        })?;
        Ok(JsonValue::String(hex::encode(bytes)))
    }

    fn has_text_form(&self) -> bool {
        true
    }
}
