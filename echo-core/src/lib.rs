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

//! # Echo Core
//!
//! Composable binary codecs for the ECHO transaction wire format.
//!
//! Every wire type is described by an immutable [`Serializer`]. Composite
//! serializers (structs, vectors, sets, maps, optionals, static variants)
//! own their children and are assembled purely by composition, so a full
//! protocol schema is a graph of shared [`SerializerRef`] handles.
//!
//! ## Architecture
//!
//! - **`value`**: the dynamic [`Value`] tree passed in and out of every codec
//! - **`buffer`**: little-endian [`Writer`] and bounds-checked [`Reader`]
//! - **`serializer`**: the [`Serializer`] trait and every generic codec
//! - **`config`**: decode-side limits
//! - **`error`**: the shared error taxonomy
//!
//! ## Phases
//!
//! Serialization is split in two: `to_raw` validates a loose input and maps
//! it to a canonical raw value, then `append_to_buffer` writes that raw value
//! with no further validation. Decoding is the single `read_from_buffer` pass,
//! and `to_object` renders a raw value as the JSON the node expects.
//!
//! ```rust
//! use echo_core::serializer::{set, uint16, Serializer};
//! use echo_core::Value;
//!
//! let ser = set(uint16());
//! let a = ser.serialize(&Value::Array(vec![3u16.into(), 1u16.into(), 2u16.into()])).unwrap();
//! let b = ser.serialize(&Value::Array(vec![1u16.into(), 2u16.into(), 3u16.into()])).unwrap();
//! assert_eq!(a, b);
//! ```

pub mod buffer;
pub mod config;
pub mod error;
pub mod serializer;
pub mod value;

pub use crate::buffer::{Reader, Writer};
pub use crate::config::Config;
pub use crate::error::Error;
pub use crate::serializer::{Serializer, SerializerRef};
pub use crate::value::{Fields, Resolvable, Value};
