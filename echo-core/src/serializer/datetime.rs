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

use chrono::{DateTime, NaiveDateTime};
use serde_json::Value as JsonValue;

use crate::buffer::{Reader, Writer};
use crate::error::Error;
use crate::serializer::util::{int_in_range, raw_int};
use crate::serializer::Serializer;
use crate::value::Value;

const ISO_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// UNIX seconds as u32. Accepts seconds or an ISO-8601 string (trailing `Z`
/// and fractional seconds allowed, fractions truncated); the canonical
/// textual form is `YYYY-MM-DDTHH:MM:SS` without the `Z`.
#[derive(Clone, Copy, Debug, Default)]
pub struct TimePointSecSerializer;

fn parse_iso(s: &str) -> Result<i128, Error> {
    let trimmed = s.strip_suffix('Z').unwrap_or(s);
    let dt = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S%.f")
        .map_err(|e| Error::validation(format!("invalid time point \"{s}\": {e}")))?;
    Ok(dt.and_utc().timestamp() as i128)
}

impl Serializer for TimePointSecSerializer {
    fn to_raw(&self, value: &Value) -> Result<Value, Error> {
        let value = value.resolve();
        let secs = match &*value {
            Value::Str(s) if s.contains('T') => {
                int_in_range(&Value::Int(parse_iso(s)?), 0, u32::MAX as i128, "time_point_sec")?
            }
            other => int_in_range(other, 0, u32::MAX as i128, "time_point_sec")?,
        };
        Ok(Value::Int(secs))
    }

    fn append_to_buffer(&self, raw: &Value, writer: &mut Writer) -> Result<(), Error> {
        let secs = int_in_range(raw, 0, u32::MAX as i128, "time_point_sec")?;
        writer.write_u32(secs as u32);
        Ok(())
    }

    fn read_from_buffer(&self, reader: &mut Reader<'_>) -> Result<Value, Error> {
        Ok(Value::Int(reader.read_u32()? as i128))
    }

    fn to_object(&self, raw: &Value) -> Result<JsonValue, Error> {
        let secs = raw_int(raw, "time_point_sec")?;
        let dt = i64::try_from(secs)
            .ok()
            .and_then(|s| DateTime::from_timestamp(s, 0))
            .ok_or_else(|| Error::validation(format!("time point {secs} is out of range")))?;
        Ok(JsonValue::String(dt.naive_utc().format(ISO_FORMAT).to_string()))
    }

    fn has_text_form(&self) -> bool {
        true
    }
}
