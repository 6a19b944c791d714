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

use crate::config::Config;
use crate::error::Error;
use byteorder::{ByteOrder, LittleEndian};

/// Growable little-endian output buffer.
#[derive(Default)]
pub struct Writer {
    pub(crate) bf: Vec<u8>,
}

impl Writer {
    pub fn with_capacity(capacity: usize) -> Writer {
        Writer {
            bf: Vec::with_capacity(capacity),
        }
    }

    pub fn reset(&mut self) {
        // keep capacity and reset len to 0
        self.bf.clear();
    }

    pub fn dump(&self) -> Vec<u8> {
        self.bf.clone()
    }

    pub fn into_inner(self) -> Vec<u8> {
        self.bf
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.bf
    }

    pub fn len(&self) -> usize {
        self.bf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bf.is_empty()
    }

    pub fn reserve(&mut self, additional: usize) {
        self.bf.reserve(additional);
    }

    pub fn write_bytes(&mut self, v: &[u8]) -> usize {
        self.bf.extend_from_slice(v);
        v.len()
    }

    pub fn write_u8(&mut self, value: u8) {
        self.bf.push(value);
    }

    pub fn write_i8(&mut self, value: i8) {
        self.bf.push(value as u8);
    }

    pub fn write_u16(&mut self, value: u16) {
        let mut buf = [0u8; 2];
        LittleEndian::write_u16(&mut buf, value);
        self.bf.extend_from_slice(&buf);
    }

    pub fn write_i16(&mut self, value: i16) {
        let mut buf = [0u8; 2];
        LittleEndian::write_i16(&mut buf, value);
        self.bf.extend_from_slice(&buf);
    }

    pub fn write_u32(&mut self, value: u32) {
        let mut buf = [0u8; 4];
        LittleEndian::write_u32(&mut buf, value);
        self.bf.extend_from_slice(&buf);
    }

    pub fn write_i32(&mut self, value: i32) {
        let mut buf = [0u8; 4];
        LittleEndian::write_i32(&mut buf, value);
        self.bf.extend_from_slice(&buf);
    }

    pub fn write_u64(&mut self, value: u64) {
        let mut buf = [0u8; 8];
        LittleEndian::write_u64(&mut buf, value);
        self.bf.extend_from_slice(&buf);
    }

    pub fn write_i64(&mut self, value: i64) {
        let mut buf = [0u8; 8];
        LittleEndian::write_i64(&mut buf, value);
        self.bf.extend_from_slice(&buf);
    }

    /// LEB128: seven bits per byte, low group first, high bit set on every
    /// byte except the last. At most 5 bytes.
    pub fn write_varuint32(&mut self, value: u32) {
        if value < 0x80 {
            self.write_u8(value as u8);
        } else if value < 0x4000 {
            // 2 bytes
            let u1 = ((value as u8) & 0x7F) | 0x80;
            let u2 = (value >> 7) as u8;
            self.write_u16(((u2 as u16) << 8) | u1 as u16);
        } else if value < 0x200000 {
            // 3 bytes
            let u1 = ((value as u8) & 0x7F) | 0x80;
            let u2 = (((value >> 7) as u8) & 0x7F) | 0x80;
            let u3 = (value >> 14) as u8;
            self.write_u16(((u2 as u16) << 8) | u1 as u16);
            self.write_u8(u3);
        } else if value < 0x10000000 {
            // 4 bytes
            let u1 = ((value as u8) & 0x7F) | 0x80;
            let u2 = (((value >> 7) as u8) & 0x7F) | 0x80;
            let u3 = (((value >> 14) as u8) & 0x7F) | 0x80;
            let u4 = (value >> 21) as u8;
            self.write_u32(
                ((u4 as u32) << 24) | ((u3 as u32) << 16) | ((u2 as u32) << 8) | u1 as u32,
            );
        } else {
            // 5 bytes
            let u1 = ((value as u8) & 0x7F) | 0x80;
            let u2 = (((value >> 7) as u8) & 0x7F) | 0x80;
            let u3 = (((value >> 14) as u8) & 0x7F) | 0x80;
            let u4 = (((value >> 21) as u8) & 0x7F) | 0x80;
            let u5 = (value >> 28) as u8;
            self.write_u32(
                ((u4 as u32) << 24) | ((u3 as u32) << 16) | ((u2 as u32) << 8) | u1 as u32,
            );
            self.write_u8(u5);
        }
    }
}

/// Bounds-checked cursor over an input slice.
///
/// Every read fails with [`Error::BufferOutOfBound`] instead of reading past
/// the end. The reader also tracks static-variant nesting depth against
/// [`Config::max_depth`].
pub struct Reader<'a> {
    bf: &'a [u8],
    cursor: usize,
    depth: u32,
    max_depth: u32,
}

impl<'a> Reader<'a> {
    pub fn new(bf: &'a [u8]) -> Reader<'a> {
        Self::with_config(bf, &Config::default())
    }

    pub fn with_config(bf: &'a [u8], config: &Config) -> Reader<'a> {
        Reader {
            bf,
            cursor: 0,
            depth: 0,
            max_depth: config.max_depth,
        }
    }

    /// Starts reading at `offset`; fails if the offset lies past the end.
    pub fn at(bf: &'a [u8], offset: usize) -> Result<Reader<'a>, Error> {
        if offset > bf.len() {
            return Err(Error::buffer_out_of_bound(offset, 0, bf.len()));
        }
        let mut reader = Reader::new(bf);
        reader.cursor = offset;
        Ok(reader)
    }

    #[inline(always)]
    fn check_bound(&self, n: usize) -> Result<(), Error> {
        if self.cursor + n > self.bf.len() {
            return Err(Error::buffer_out_of_bound(self.cursor, n, self.bf.len()));
        }
        Ok(())
    }

    #[inline(always)]
    fn take(&mut self, n: usize) -> Result<&'a [u8], Error> {
        self.check_bound(n)?;
        let s = &self.bf[self.cursor..self.cursor + n];
        self.cursor += n;
        Ok(s)
    }

    pub fn get_cursor(&self) -> usize {
        self.cursor
    }

    pub fn remaining(&self) -> usize {
        self.bf.len() - self.cursor
    }

    pub fn slice_after_cursor(&self) -> &'a [u8] {
        &self.bf[self.cursor..]
    }

    /// Bytes between `start` and the current cursor.
    pub fn slice_from(&self, start: usize) -> &'a [u8] {
        &self.bf[start.min(self.cursor)..self.cursor]
    }

    pub fn read_u8(&mut self) -> Result<u8, Error> {
        Ok(self.take(1)?[0])
    }

    pub fn read_i8(&mut self) -> Result<i8, Error> {
        Ok(self.read_u8()? as i8)
    }

    pub fn read_u16(&mut self) -> Result<u16, Error> {
        Ok(LittleEndian::read_u16(self.take(2)?))
    }

    pub fn read_i16(&mut self) -> Result<i16, Error> {
        Ok(LittleEndian::read_i16(self.take(2)?))
    }

    pub fn read_u32(&mut self) -> Result<u32, Error> {
        Ok(LittleEndian::read_u32(self.take(4)?))
    }

    pub fn read_i32(&mut self) -> Result<i32, Error> {
        Ok(LittleEndian::read_i32(self.take(4)?))
    }

    pub fn read_u64(&mut self) -> Result<u64, Error> {
        Ok(LittleEndian::read_u64(self.take(8)?))
    }

    pub fn read_i64(&mut self) -> Result<i64, Error> {
        Ok(LittleEndian::read_i64(self.take(8)?))
    }

    pub fn read_varuint32(&mut self) -> Result<u32, Error> {
        let mut result: u64 = 0;
        for i in 0..5 {
            let b = self.read_u8()?;
            result |= ((b & 0x7F) as u64) << (7 * i);
            if b & 0x80 == 0 {
                if result > u32::MAX as u64 {
                    return Err(Error::decode(format!(
                        "varint32 value {result} overflows 32 bits"
                    )));
                }
                return Ok(result as u32);
            }
        }
        Err(Error::decode("varint32 is longer than 5 bytes"))
    }

    pub fn read_bytes(&mut self, len: usize) -> Result<&'a [u8], Error> {
        self.take(len)
    }

    /// Enters one level of static-variant nesting.
    pub fn enter(&mut self) -> Result<(), Error> {
        if self.depth >= self.max_depth {
            return Err(Error::depth_exceed(format!(
                "maximum decode depth {} exceeded",
                self.max_depth
            )));
        }
        self.depth += 1;
        Ok(())
    }

    pub fn leave(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }
}
