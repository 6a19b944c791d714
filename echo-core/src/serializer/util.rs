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

use crate::error::Error;
use crate::value::Value;

/// Reads an integer from `Int` or a base-10 string, then range-checks it.
pub fn int_in_range(value: &Value, min: i128, max: i128, type_name: &str) -> Result<i128, Error> {
    let v = match value {
        Value::Int(i) => *i,
        Value::Str(s) => parse_decimal(s)?,
        other => {
            return Err(Error::validation(format!(
                "expected {type_name} as integer or decimal string, got {}",
                other.kind()
            )))
        }
    };
    if v < min || v > max {
        return Err(Error::validation(format!(
            "value {v} is out of range for {type_name} [{min}, {max}]"
        )));
    }
    Ok(v)
}

/// Strict base-10 parse: optional leading `-`, digits only.
pub fn parse_decimal(s: &str) -> Result<i128, Error> {
    let digits = s.strip_prefix('-').unwrap_or(s);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Error::validation(format!(
            "\"{s}\" is not a base-10 integer"
        )));
    }
    s.parse::<i128>()
        .map_err(|_| Error::validation(format!("\"{s}\" is out of range")))
}

/// Raw values handed to `append_to_buffer` must already be integers.
pub fn raw_int(raw: &Value, type_name: &str) -> Result<i128, Error> {
    raw.as_int().ok_or_else(|| {
        Error::validation(format!(
            "expected canonical {type_name} integer, got {}",
            raw.kind()
        ))
    })
}

pub fn expect_array<'a>(value: &'a Value, what: &str) -> Result<&'a [Value], Error> {
    value
        .as_array()
        .ok_or_else(|| Error::validation(format!("expected {what} as array, got {}", value.kind())))
}

/// Pre-allocation for a decoded collection, bounded by the unread input so a
/// corrupt length prefix cannot force a huge allocation.
pub fn capacity_hint(len: u32, remaining: usize) -> usize {
    (len as usize).min(remaining)
}
