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

use crate::buffer::{Reader, Writer};
use crate::error::Error;
use crate::serializer::Serializer;
use crate::value::Value;

/// Varint32 length prefix followed by UTF-8 bytes.
#[derive(Clone, Copy, Debug, Default)]
pub struct StringSerializer;

impl Serializer for StringSerializer {
    fn to_raw(&self, value: &Value) -> Result<Value, Error> {
        match &*value.resolve() {
            Value::Str(s) => Ok(Value::Str(s.clone())),
            Value::Bytes(b) => String::from_utf8(b.clone())
                .map(Value::Str)
                .map_err(|e| Error::validation(format!("string is not valid utf-8: {e}"))),
            other => Err(Error::validation(format!(
                "expected string, got {}",
                other.kind()
            ))),
        }
    }

    fn append_to_buffer(&self, raw: &Value, writer: &mut Writer) -> Result<(), Error> {
        let s = raw.as_str().ok_or_else(|| {
            Error::validation(format!("expected canonical string, got {}", raw.kind()))
        })?;
        let len =
            u32::try_from(s.len()).map_err(|_| Error::validation("string longer than u32::MAX"))?;
        writer.write_varuint32(len);
        writer.write_bytes(s.as_bytes());
        Ok(())
    }

    fn read_from_buffer(&self, reader: &mut Reader<'_>) -> Result<Value, Error> {
        let len = reader.read_varuint32()? as usize;
        let bytes = reader.read_bytes(len)?;
        let s = std::str::from_utf8(bytes)
            .map_err(|e| Error::decode(format!("string is not valid utf-8: {e}")))?;
        Ok(Value::Str(s.to_owned()))
    }

    fn has_text_form(&self) -> bool {
        true
    }
}
