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

//! The serializer contract and the combinators built on it.
//!
//! A serializer is an immutable value describing one wire type. Composite
//! serializers own their children as [`SerializerRef`] and delegate to them
//! field by field or element by element, so any schema is assembled purely by
//! composition.

use std::sync::Arc;

use serde_json::Value as JsonValue;
use tracing::trace;

use crate::buffer::{Reader, Writer};
use crate::error::Error;
use crate::value::Value;

mod boolean;
mod bytes;
pub mod collection;
mod datetime;
pub mod enum_;
mod list;
pub mod map;
mod marker;
mod number;
mod option;
mod set;
mod string;
pub mod struct_;
mod tuple;
pub mod util;

pub use self::boolean::BoolSerializer;
pub use self::bytes::BytesSerializer;
pub use self::datetime::TimePointSecSerializer;
pub use self::enum_::StaticVariantSerializer;
pub use self::list::VectorSerializer;
pub use self::map::MapSerializer;
pub use self::marker::VoidSerializer;
pub use self::number::{
    Int16Serializer, Int32Serializer, Int64Serializer, Int8Serializer, UInt16Serializer,
    UInt32Serializer, UInt64Serializer, UInt8Serializer, VarInt32Serializer,
};
pub use self::option::OptionalSerializer;
pub use self::set::SetSerializer;
pub use self::string::StringSerializer;
pub use self::struct_::StructSerializer;
pub use self::tuple::PairSerializer;

/// Shared handle to an immutable serializer.
pub type SerializerRef = Arc<dyn Serializer>;

pub trait Serializer: Send + Sync + 'static {
    /// Validates `value` and maps it to the canonical representation that
    /// [`Serializer::append_to_buffer`] encodes.
    fn to_raw(&self, value: &Value) -> Result<Value, Error>;

    /// Writes the canonical bytes of `raw`, which must come from `to_raw`.
    fn append_to_buffer(&self, raw: &Value, writer: &mut Writer) -> Result<(), Error>;

    /// Parses one value starting at the reader's cursor.
    fn read_from_buffer(&self, reader: &mut Reader<'_>) -> Result<Value, Error>;

    /// Canonical JSON form of `raw`, as sent over RPC.
    fn to_object(&self, raw: &Value) -> Result<JsonValue, Error> {
        Ok(raw.to_json())
    }

    /// Whether the canonical form is a string, so values may key a plain record.
    fn has_text_form(&self) -> bool {
        false
    }

    fn validate(&self, value: &Value) -> Result<(), Error> {
        self.to_raw(value).map(|_| ())
    }

    /// Entry point of serialization: `to_raw` followed by `append_to_buffer`.
    fn serialize(&self, value: &Value) -> Result<Vec<u8>, Error> {
        let raw = self.to_raw(value)?;
        let mut writer = Writer::default();
        self.append_to_buffer(&raw, &mut writer)?;
        Ok(writer.into_inner())
    }

    /// Entry point of deserialization; every byte of `bf` must be consumed.
    fn deserialize(&self, bf: &[u8]) -> Result<Value, Error> {
        let mut reader = Reader::new(bf);
        let value = self.read_from_buffer(&mut reader)?;
        finish(&reader)?;
        Ok(value)
    }

    /// Decodes one value at `offset`, returning it with the offset just past it.
    fn read_at(&self, bf: &[u8], offset: usize) -> Result<(Value, usize), Error> {
        let mut reader = Reader::at(bf, offset)?;
        let value = self.read_from_buffer(&mut reader)?;
        Ok((value, reader.get_cursor()))
    }
}

/// Rejects trailing bytes after a complete decode.
pub fn finish(reader: &Reader<'_>) -> Result<(), Error> {
    let remaining = reader.remaining();
    if remaining != 0 {
        trace!(remaining, "rejecting trailing bytes after decode");
        return Err(Error::decode(format!(
            "{remaining} unexpected trailing bytes after decode"
        )));
    }
    Ok(())
}

/// Canonical bytes of an already-canonical value.
pub fn raw_bytes(serializer: &dyn Serializer, raw: &Value) -> Result<Vec<u8>, Error> {
    let mut writer = Writer::default();
    serializer.append_to_buffer(raw, &mut writer)?;
    Ok(writer.into_inner())
}

pub fn int8() -> SerializerRef {
    Arc::new(Int8Serializer)
}

pub fn int16() -> SerializerRef {
    Arc::new(Int16Serializer)
}

pub fn int32() -> SerializerRef {
    Arc::new(Int32Serializer)
}

pub fn int64() -> SerializerRef {
    Arc::new(Int64Serializer)
}

pub fn uint8() -> SerializerRef {
    Arc::new(UInt8Serializer)
}

pub fn uint16() -> SerializerRef {
    Arc::new(UInt16Serializer)
}

pub fn uint32() -> SerializerRef {
    Arc::new(UInt32Serializer)
}

pub fn uint64() -> SerializerRef {
    Arc::new(UInt64Serializer)
}

pub fn varint32() -> SerializerRef {
    Arc::new(VarInt32Serializer)
}

pub fn bool() -> SerializerRef {
    Arc::new(BoolSerializer)
}

/// Fixed-length bytes when `size` is given, otherwise varint32-prefixed.
pub fn bytes(size: Option<usize>) -> SerializerRef {
    Arc::new(BytesSerializer::new(size))
}

pub fn string() -> SerializerRef {
    Arc::new(StringSerializer)
}

pub fn time_point_sec() -> SerializerRef {
    Arc::new(TimePointSecSerializer)
}

pub fn void() -> SerializerRef {
    Arc::new(VoidSerializer)
}

pub fn vector(element: SerializerRef) -> SerializerRef {
    Arc::new(VectorSerializer::new(element))
}

pub fn set(element: SerializerRef) -> SerializerRef {
    Arc::new(SetSerializer::new(element))
}

pub fn map(key: SerializerRef, value: SerializerRef) -> SerializerRef {
    Arc::new(MapSerializer::new(key, value))
}

pub fn optional(inner: SerializerRef) -> SerializerRef {
    Arc::new(OptionalSerializer::new(inner))
}

pub fn pair(first: SerializerRef, second: SerializerRef) -> SerializerRef {
    Arc::new(PairSerializer::new(first, second))
}

pub fn static_variant<I>(variants: I) -> SerializerRef
where
    I: IntoIterator<Item = (u32, SerializerRef)>,
{
    Arc::new(StaticVariantSerializer::new(variants))
}

/// Builds a [`StructSerializer`] from `name: serializer` pairs in wire order.
///
/// ```
/// use echo_core::serializer::{string, uint16, Serializer};
/// use echo_core::struct_serializer;
/// use echo_core::Value;
/// use serde_json::json;
///
/// let account = struct_serializer! {
///     name: string(),
///     weight: uint16(),
/// };
/// let bytes = account
///     .serialize(&Value::from_json(json!({"name": "ab", "weight": 1})))
///     .unwrap();
/// assert_eq!(bytes, vec![2, b'a', b'b', 1, 0]);
/// ```
#[macro_export]
macro_rules! struct_serializer {
    ($($name:ident : $ser:expr),* $(,)?) => {
        ::std::sync::Arc::new($crate::serializer::StructSerializer::new(vec![
            $((stringify!($name), $ser)),*
        ])) as $crate::serializer::SerializerRef
    };
}
