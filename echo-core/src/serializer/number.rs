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
use crate::serializer::util::{int_in_range, raw_int};
use crate::serializer::Serializer;
use crate::value::Value;

macro_rules! impl_num_serializer {
    ($name:ident, $ty:ty, $writer:expr, $reader:expr, $text:expr) => {
        #[derive(Clone, Copy, Debug, Default)]
        pub struct $name;

        impl Serializer for $name {
            fn to_raw(&self, value: &Value) -> Result<Value, Error> {
                let value = value.resolve();
                let v = int_in_range(
                    &value,
                    <$ty>::MIN as i128,
                    <$ty>::MAX as i128,
                    stringify!($ty),
                )?;
                Ok(Value::Int(v))
            }

            #[inline(always)]
            fn append_to_buffer(&self, raw: &Value, writer: &mut Writer) -> Result<(), Error> {
                let v = int_in_range(raw, <$ty>::MIN as i128, <$ty>::MAX as i128, stringify!($ty))?;
                $writer(writer, v as $ty);
                Ok(())
            }

            #[inline(always)]
            fn read_from_buffer(&self, reader: &mut Reader<'_>) -> Result<Value, Error> {
                Ok(Value::Int($reader(reader)? as i128))
            }

            fn to_object(&self, raw: &Value) -> Result<JsonValue, Error> {
                let v = raw_int(raw, stringify!($ty))? as $ty;
                if $text {
                    Ok(JsonValue::String(v.to_string()))
                } else {
                    Ok(JsonValue::from(v))
                }
            }

            fn has_text_form(&self) -> bool {
                $text
            }
        }
    };
}

impl_num_serializer!(Int8Serializer, i8, Writer::write_i8, Reader::read_i8, false);
impl_num_serializer!(Int16Serializer, i16, Writer::write_i16, Reader::read_i16, false);
impl_num_serializer!(Int32Serializer, i32, Writer::write_i32, Reader::read_i32, false);
impl_num_serializer!(UInt8Serializer, u8, Writer::write_u8, Reader::read_u8, false);
impl_num_serializer!(UInt16Serializer, u16, Writer::write_u16, Reader::read_u16, false);
impl_num_serializer!(UInt32Serializer, u32, Writer::write_u32, Reader::read_u32, false);
// 64-bit values exceed the exact range of a JSON double, so their canonical
// textual form is a base-10 string.
impl_num_serializer!(Int64Serializer, i64, Writer::write_i64, Reader::read_i64, true);
impl_num_serializer!(UInt64Serializer, u64, Writer::write_u64, Reader::read_u64, true);

/// Non-negative 32-bit integer in LEB128 form.
#[derive(Clone, Copy, Debug, Default)]
pub struct VarInt32Serializer;

impl Serializer for VarInt32Serializer {
    fn to_raw(&self, value: &Value) -> Result<Value, Error> {
        let value = value.resolve();
        Ok(Value::Int(int_in_range(
            &value,
            0,
            u32::MAX as i128,
            "varint32",
        )?))
    }

    fn append_to_buffer(&self, raw: &Value, writer: &mut Writer) -> Result<(), Error> {
        let v = int_in_range(raw, 0, u32::MAX as i128, "varint32")?;
        writer.write_varuint32(v as u32);
        Ok(())
    }

    fn read_from_buffer(&self, reader: &mut Reader<'_>) -> Result<Value, Error> {
        Ok(Value::Int(reader.read_varuint32()? as i128))
    }
}
