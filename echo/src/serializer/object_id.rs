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

//! Chain object identifiers.
//!
//! An id is the triple `space.type.instance`. [`ObjectIdSerializer`] is
//! bound to one reserved space and a set of allowed types, so only the
//! instance travels on the wire. [`AnyObjectIdSerializer`] carries all three
//! in the packed 64-bit form.

use std::fmt;
use std::str::FromStr;

use echo_core::serializer::util::{int_in_range, parse_decimal};
use echo_core::{Error, Reader, Serializer, Value, Writer};
use serde_json::Value as JsonValue;

use crate::types::{ImplementationObjectType, ProtocolObjectType, ReservedSpace};

/// Largest instance representable in the packed form.
pub const MAX_INSTANCE: u64 = (1 << 48) - 1;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId {
    pub space: u8,
    pub object_type: u8,
    pub instance: u64,
}

impl ObjectId {
    pub const fn new(space: u8, object_type: u8, instance: u64) -> Self {
        ObjectId {
            space,
            object_type,
            instance,
        }
    }

    pub fn protocol(object_type: ProtocolObjectType, instance: u64) -> Self {
        Self::new(ReservedSpace::Protocol.into(), object_type.into(), instance)
    }

    pub fn implementation(object_type: ImplementationObjectType, instance: u64) -> Self {
        Self::new(
            ReservedSpace::Implementation.into(),
            object_type.into(),
            instance,
        )
    }

    /// `space << 56 | type << 48 | instance`.
    pub fn packed(&self) -> Result<u64, Error> {
        if self.instance > MAX_INSTANCE {
            return Err(Error::validation(format!(
                "instance of object id {self} does not fit 48 bits"
            )));
        }
        Ok((self.space as u64) << 56 | (self.object_type as u64) << 48 | self.instance)
    }

    pub fn from_packed(packed: u64) -> Self {
        ObjectId {
            space: (packed >> 56) as u8,
            object_type: (packed >> 48) as u8,
            instance: packed & MAX_INSTANCE,
        }
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.space, self.object_type, self.instance)
    }
}

impl FromStr for ObjectId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || Error::validation(format!("invalid object id \"{s}\""));
        let mut parts = s.split('.');
        let (Some(space), Some(object_type), Some(instance), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(invalid());
        };
        let field = |part: &str, max: i128| -> Result<i128, Error> {
            let v = parse_decimal(part).map_err(|_| invalid())?;
            if v < 0 || v > max {
                return Err(invalid());
            }
            Ok(v)
        };
        Ok(ObjectId {
            space: field(space, u8::MAX as i128)? as u8,
            object_type: field(object_type, u8::MAX as i128)? as u8,
            instance: field(instance, u64::MAX as i128)? as u64,
        })
    }
}

impl From<ObjectId> for Value {
    fn from(id: ObjectId) -> Self {
        Value::Str(id.to_string())
    }
}

/// Id restricted to one reserved space and a set of object types; the wire
/// form is `varint32(instance)`.
///
/// A bare instance (number or decimal string) takes the first configured
/// type. The wire form carries no type, so only a single-type codec can
/// decode; a multi-type codec reports the type as ambiguous.
#[derive(Clone, Debug)]
pub struct ObjectIdSerializer {
    space: u8,
    types: Vec<u8>,
}

impl ObjectIdSerializer {
    pub fn new(space: impl Into<u8>, object_type: u8) -> Self {
        ObjectIdSerializer {
            space: space.into(),
            types: vec![object_type],
        }
    }

    /// Accepts any of `types`, which must not be empty.
    pub fn with_types(space: impl Into<u8>, types: &[u8]) -> Result<Self, Error> {
        if types.is_empty() {
            return Err(Error::validation(
                "object id serializer needs at least one type",
            ));
        }
        Ok(ObjectIdSerializer {
            space: space.into(),
            types: types.to_vec(),
        })
    }

    pub fn protocol(object_type: ProtocolObjectType) -> Self {
        Self::new(ReservedSpace::Protocol, object_type.into())
    }

    pub fn implementation(object_type: ImplementationObjectType) -> Self {
        Self::new(ReservedSpace::Implementation, object_type.into())
    }

    fn default_type(&self) -> u8 {
        self.types[0]
    }

    fn parse(&self, value: &Value) -> Result<ObjectId, Error> {
        let id = match value {
            Value::Str(s) if s.contains('.') => s.parse::<ObjectId>()?,
            other => {
                let instance = int_in_range(other, 0, u32::MAX as i128, "object id instance")?;
                ObjectId::new(self.space, self.default_type(), instance as u64)
            }
        };
        if id.space != self.space {
            return Err(Error::validation(format!(
                "object id {id} is not in reserved space {}",
                self.space
            )));
        }
        if !self.types.contains(&id.object_type) {
            return Err(Error::validation(format!(
                "object id {id} has type {}, expected one of {:?}",
                id.object_type, self.types
            )));
        }
        if id.instance > u32::MAX as u64 {
            return Err(Error::validation(format!(
                "instance of object id {id} does not fit varint32"
            )));
        }
        Ok(id)
    }
}

impl Serializer for ObjectIdSerializer {
    fn to_raw(&self, value: &Value) -> Result<Value, Error> {
        Ok(self.parse(&value.resolve())?.into())
    }

    fn append_to_buffer(&self, raw: &Value, writer: &mut Writer) -> Result<(), Error> {
        let id = self.parse(raw)?;
        writer.write_varuint32(id.instance as u32);
        Ok(())
    }

    fn read_from_buffer(&self, reader: &mut Reader<'_>) -> Result<Value, Error> {
        if self.types.len() > 1 {
            return Err(Error::decode(format!(
                "ambiguous object type: wire form does not say which of {:?}",
                self.types
            )));
        }
        let instance = reader.read_varuint32()?;
        Ok(ObjectId::new(self.space, self.default_type(), instance as u64).into())
    }

    fn to_object(&self, raw: &Value) -> Result<JsonValue, Error> {
        Ok(JsonValue::String(self.parse(raw)?.to_string()))
    }

    fn has_text_form(&self) -> bool {
        true
    }
}

/// Id of any space and type, written as the packed little-endian `u64`.
#[derive(Clone, Copy, Debug, Default)]
pub struct AnyObjectIdSerializer;

impl AnyObjectIdSerializer {
    fn parse(value: &Value) -> Result<ObjectId, Error> {
        match value {
            Value::Str(s) => s.parse(),
            other => Err(Error::validation(format!(
                "expected object id as \"space.type.instance\", got {}",
                other.kind()
            ))),
        }
    }
}

impl Serializer for AnyObjectIdSerializer {
    fn to_raw(&self, value: &Value) -> Result<Value, Error> {
        let id = Self::parse(&value.resolve())?;
        id.packed()?;
        Ok(id.into())
    }

    fn append_to_buffer(&self, raw: &Value, writer: &mut Writer) -> Result<(), Error> {
        writer.write_u64(Self::parse(raw)?.packed()?);
        Ok(())
    }

    fn read_from_buffer(&self, reader: &mut Reader<'_>) -> Result<Value, Error> {
        Ok(ObjectId::from_packed(reader.read_u64()?).into())
    }

    fn to_object(&self, raw: &Value) -> Result<JsonValue, Error> {
        Ok(JsonValue::String(Self::parse(raw)?.to_string()))
    }

    fn has_text_form(&self) -> bool {
        true
    }
}
