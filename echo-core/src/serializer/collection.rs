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

//! Canonical ordering shared by sets and maps.
//!
//! Elements are ordered by their own serialized bytes. Comparing byte
//! strings lexicographically gives the same order as comparing their
//! lowercase hex, which is what the node sorts by. Two entries with equal
//! bytes are duplicates no matter how they were written in the input.

use crate::error::Error;
use crate::value::Value;

/// Sorts `(key_bytes, value)` entries and rejects duplicates.
///
/// `on_duplicate` builds the error from the hex of the duplicated key, so the
/// caller decides whether it is a validation or a decode failure.
pub fn sort_unique<F>(mut entries: Vec<(Vec<u8>, Value)>, on_duplicate: F) -> Result<Vec<Value>, Error>
where
    F: Fn(String) -> Error,
{
    entries.sort_by(|a, b| a.0.cmp(&b.0));
    if let Some(dup) = entries.windows(2).find(|w| w[0].0 == w[1].0) {
        return Err(on_duplicate(hex::encode(&dup[0].0)));
    }
    Ok(entries.into_iter().map(|(_, v)| v).collect())
}
