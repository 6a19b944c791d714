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

/// Decode-side limits applied by a [`Reader`](crate::buffer::Reader).
///
/// Serializer graphs themselves are immutable and carry no configuration;
/// everything that varies per call lives here.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Maximum nesting of static variants while decoding. Operations nest
    /// through proposals, so untrusted input could otherwise recurse without bound.
    pub max_depth: u32,
}

impl Default for Config {
    fn default() -> Self {
        Config { max_depth: 32 }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn max_depth(mut self, max_depth: u32) -> Self {
        self.max_depth = max_depth;
        self
    }
}
