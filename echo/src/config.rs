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

/// Chain-level constants shared by the domain codecs.
///
/// Public keys and addresses are rendered with `address_prefix`; the
/// unrequired-fee mode of the operation codec injects a zero fee in
/// `core_asset_id`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChainConfig {
    pub address_prefix: String,
    pub core_asset_id: String,
}

pub const DEFAULT_ADDRESS_PREFIX: &str = "ECHO";
pub const DEFAULT_CORE_ASSET_ID: &str = "1.3.0";

impl Default for ChainConfig {
    fn default() -> Self {
        ChainConfig {
            address_prefix: DEFAULT_ADDRESS_PREFIX.to_string(),
            core_asset_id: DEFAULT_CORE_ASSET_ID.to_string(),
        }
    }
}

impl ChainConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn address_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.address_prefix = prefix.into();
        self
    }

    pub fn core_asset_id(mut self, asset_id: impl Into<String>) -> Self {
        self.core_asset_id = asset_id.into();
        self
    }
}
