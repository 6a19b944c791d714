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

/// One byte, `0` or `1`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BoolSerializer;

impl Serializer for BoolSerializer {
    fn to_raw(&self, value: &Value) -> Result<Value, Error> {
        match &*value.resolve() {
            Value::Bool(b) => Ok(Value::Bool(*b)),
            Value::Int(0) => Ok(Value::Bool(false)),
            Value::Int(1) => Ok(Value::Bool(true)),
            other => Err(Error::validation(format!(
                "expected bool, got {}",
                other.kind()
            ))),
        }
    }

    fn append_to_buffer(&self, raw: &Value, writer: &mut Writer) -> Result<(), Error> {
        match raw {
            Value::Bool(b) => {
                writer.write_u8(if *b { 1 } else { 0 });
                Ok(())
            }
            other => Err(Error::validation(format!(
                "expected canonical bool, got {}",
                other.kind()
            ))),
        }
    }

    fn read_from_buffer(&self, reader: &mut Reader<'_>) -> Result<Value, Error> {
        match reader.read_u8()? {
            0 => Ok(Value::Bool(false)),
            1 => Ok(Value::Bool(true)),
            other => Err(Error::decode(format!("invalid bool byte {other:#04x}"))),
        }
    }
}
