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

//! Addresses derived one-way from a public key.

use echo_core::{Error, Reader, Serializer, Value, Writer};
use serde_json::Value as JsonValue;

use crate::hash::{ripemd160, ripemd_checksum, sha256, sha256d, sha512};

/// Version byte of PTS addresses.
pub const PTS_VERSION: u8 = 56;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AddressScheme {
    /// `ripemd160(sha512(point))`; text is prefixed base58 with a ripemd checksum.
    Graphene,
    /// `version ++ ripemd160(sha256(point)) ++ sha256d[0..4]`; text is plain base58.
    Pts,
}

impl AddressScheme {
    pub const fn wire_len(self) -> usize {
        match self {
            AddressScheme::Graphene => 20,
            AddressScheme::Pts => 25,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Address {
    scheme: AddressScheme,
    bytes: Vec<u8>,
}

impl Address {
    pub fn from_public_key(scheme: AddressScheme, point: &[u8]) -> Self {
        let bytes = match scheme {
            AddressScheme::Graphene => ripemd160(&sha512(point)).to_vec(),
            AddressScheme::Pts => {
                let mut bytes = Vec::with_capacity(25);
                bytes.push(PTS_VERSION);
                bytes.extend_from_slice(&ripemd160(&sha256(point)));
                let checksum = sha256d(&bytes);
                bytes.extend_from_slice(&checksum[..4]);
                bytes
            }
        };
        Address { scheme, bytes }
    }

    pub fn from_bytes(scheme: AddressScheme, bytes: &[u8]) -> Result<Self, Error> {
        if bytes.len() != scheme.wire_len() {
            return Err(Error::validation(format!(
                "address must be {} bytes, got {}",
                scheme.wire_len(),
                bytes.len()
            )));
        }
        if scheme == AddressScheme::Pts {
            check_pts(bytes)?;
        }
        Ok(Address {
            scheme,
            bytes: bytes.to_vec(),
        })
    }

    pub fn parse(scheme: AddressScheme, prefix: &str, text: &str) -> Result<Self, Error> {
        let body = match scheme {
            AddressScheme::Graphene => text.strip_prefix(prefix).ok_or_else(|| {
                Error::validation(format!("address \"{text}\" does not start with {prefix}"))
            })?,
            AddressScheme::Pts => text,
        };
        let data = bs58::decode(body)
            .into_vec()
            .map_err(|e| Error::validation(format!("address \"{text}\" is not base58: {e}")))?;
        match scheme {
            AddressScheme::Graphene => {
                if data.len() != 24 {
                    return Err(Error::validation(format!(
                        "address \"{text}\" decodes to {} bytes, expected 24",
                        data.len()
                    )));
                }
                let (addr, checksum) = data.split_at(20);
                if checksum != ripemd_checksum(addr) {
                    return Err(Error::validation(format!(
                        "address \"{text}\" has an invalid checksum"
                    )));
                }
                Self::from_bytes(scheme, addr)
            }
            AddressScheme::Pts => Self::from_bytes(scheme, &data),
        }
    }

    pub fn scheme(&self) -> AddressScheme {
        self.scheme
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn to_text(&self, prefix: &str) -> String {
        match self.scheme {
            AddressScheme::Graphene => {
                let mut data = self.bytes.clone();
                data.extend_from_slice(&ripemd_checksum(&self.bytes));
                format!("{prefix}{}", bs58::encode(data).into_string())
            }
            AddressScheme::Pts => bs58::encode(&self.bytes).into_string(),
        }
    }
}

fn check_pts(bytes: &[u8]) -> Result<(), Error> {
    let (body, checksum) = bytes.split_at(21);
    if checksum != &sha256d(body)[..4] {
        return Err(Error::validation("pts address has an invalid checksum"));
    }
    Ok(())
}

/// Address as fixed bytes on the wire; raw form is the text.
#[derive(Clone, Debug)]
pub struct AddressSerializer {
    scheme: AddressScheme,
    prefix: String,
}

impl AddressSerializer {
    pub fn new(scheme: AddressScheme, prefix: impl Into<String>) -> Self {
        AddressSerializer {
            scheme,
            prefix: prefix.into(),
        }
    }

    fn address(&self, value: &Value) -> Result<Address, Error> {
        match value {
            Value::Str(text) => Address::parse(self.scheme, &self.prefix, text),
            Value::Bytes(bytes) => Address::from_bytes(self.scheme, bytes),
            other => Err(Error::validation(format!(
                "expected address as string or bytes, got {}",
                other.kind()
            ))),
        }
    }
}

impl Serializer for AddressSerializer {
    fn to_raw(&self, value: &Value) -> Result<Value, Error> {
        let address = self.address(&value.resolve())?;
        Ok(Value::Str(address.to_text(&self.prefix)))
    }

    fn append_to_buffer(&self, raw: &Value, writer: &mut Writer) -> Result<(), Error> {
        writer.write_bytes(self.address(raw)?.as_bytes());
        Ok(())
    }

    fn read_from_buffer(&self, reader: &mut Reader<'_>) -> Result<Value, Error> {
        let bytes = reader.read_bytes(self.scheme.wire_len())?;
        let address = Address::from_bytes(self.scheme, bytes)
            .map_err(|e| Error::decode(e.to_string()))?;
        Ok(Value::Str(address.to_text(&self.prefix)))
    }

    fn to_object(&self, raw: &Value) -> Result<JsonValue, Error> {
        Ok(JsonValue::String(self.address(raw)?.to_text(&self.prefix)))
    }

    fn has_text_form(&self) -> bool {
        true
    }
}
