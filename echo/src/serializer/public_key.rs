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

//! Public keys: fixed-length points on the wire, prefixed base58 in text.

use echo_core::{Error, Reader, Serializer, Value, Writer};
use serde_json::Value as JsonValue;

use crate::hash::{ripemd160, sha512};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyScheme {
    /// 33-byte compressed point; text carries a 4-byte checksum.
    Secp256k1,
    /// 32-byte key; text is the flat base58 encoding.
    Ed25519,
}

impl KeyScheme {
    pub const fn key_len(self) -> usize {
        match self {
            KeyScheme::Secp256k1 => 33,
            KeyScheme::Ed25519 => 32,
        }
    }
}

fn key_checksum(point: &[u8]) -> [u8; 4] {
    let h = ripemd160(&sha512(point));
    [h[0], h[1], h[2], h[3]]
}

/// Renders `point` as `prefix + base58(...)`.
pub fn encode_public_key(scheme: KeyScheme, prefix: &str, point: &[u8]) -> String {
    let body = match scheme {
        KeyScheme::Secp256k1 => {
            let mut data = point.to_vec();
            data.extend_from_slice(&key_checksum(point));
            bs58::encode(data).into_string()
        }
        KeyScheme::Ed25519 => bs58::encode(point).into_string(),
    };
    format!("{prefix}{body}")
}

/// Parses the text form back to point bytes, checking prefix, length and
/// checksum.
pub fn decode_public_key(scheme: KeyScheme, prefix: &str, text: &str) -> Result<Vec<u8>, Error> {
    let body = text.strip_prefix(prefix).ok_or_else(|| {
        Error::validation(format!("public key \"{text}\" does not start with {prefix}"))
    })?;
    let data = bs58::decode(body)
        .into_vec()
        .map_err(|e| Error::validation(format!("public key \"{text}\" is not base58: {e}")))?;
    let len = scheme.key_len();
    let point = match scheme {
        KeyScheme::Secp256k1 => {
            if data.len() != len + 4 {
                return Err(Error::validation(format!(
                    "public key \"{text}\" decodes to {} bytes, expected {}",
                    data.len(),
                    len + 4
                )));
            }
            let (point, checksum) = data.split_at(len);
            if checksum != key_checksum(point) {
                return Err(Error::validation(format!(
                    "public key \"{text}\" has an invalid checksum"
                )));
            }
            point.to_vec()
        }
        KeyScheme::Ed25519 => data,
    };
    check_point(scheme, &point)?;
    Ok(point)
}

fn check_point(scheme: KeyScheme, point: &[u8]) -> Result<(), Error> {
    if point.len() != scheme.key_len() {
        return Err(Error::validation(format!(
            "public key must be {} bytes, got {}",
            scheme.key_len(),
            point.len()
        )));
    }
    if scheme == KeyScheme::Secp256k1 && !matches!(point[0], 2 | 3) {
        return Err(Error::validation(format!(
            "public key point prefix {:#04x} is not compressed",
            point[0]
        )));
    }
    Ok(())
}

/// Raw form is the canonical text, so keys can index a plain record.
#[derive(Clone, Debug)]
pub struct PublicKeySerializer {
    scheme: KeyScheme,
    prefix: String,
}

impl PublicKeySerializer {
    pub fn new(scheme: KeyScheme, prefix: impl Into<String>) -> Self {
        PublicKeySerializer {
            scheme,
            prefix: prefix.into(),
        }
    }

    pub fn scheme(&self) -> KeyScheme {
        self.scheme
    }

    fn point(&self, value: &Value) -> Result<Vec<u8>, Error> {
        match value {
            Value::Str(text) => decode_public_key(self.scheme, &self.prefix, text),
            Value::Bytes(point) => {
                check_point(self.scheme, point)?;
                Ok(point.clone())
            }
            other => Err(Error::validation(format!(
                "expected public key as string or bytes, got {}",
                other.kind()
            ))),
        }
    }
}

impl Serializer for PublicKeySerializer {
    fn to_raw(&self, value: &Value) -> Result<Value, Error> {
        let point = self.point(&value.resolve())?;
        Ok(Value::Str(encode_public_key(self.scheme, &self.prefix, &point)))
    }

    fn append_to_buffer(&self, raw: &Value, writer: &mut Writer) -> Result<(), Error> {
        writer.write_bytes(&self.point(raw)?);
        Ok(())
    }

    fn read_from_buffer(&self, reader: &mut Reader<'_>) -> Result<Value, Error> {
        let point = reader.read_bytes(self.scheme.key_len())?;
        check_point(self.scheme, point).map_err(|e| Error::decode(e.to_string()))?;
        Ok(Value::Str(encode_public_key(self.scheme, &self.prefix, point)))
    }

    fn to_object(&self, raw: &Value) -> Result<JsonValue, Error> {
        match raw {
            Value::Str(text) => Ok(JsonValue::String(text.clone())),
            other => Err(Error::validation(format!(
                "expected canonical public key string, got {}",
                other.kind()
            ))),
        }
    }

    fn has_text_form(&self) -> bool {
        true
    }
}
