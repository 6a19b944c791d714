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

//! Numeric tables fixed by the chain: reserved spaces, object types and
//! operation ids.

use num_enum::{IntoPrimitive, TryFromPrimitive};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, TryFromPrimitive, IntoPrimitive)]
#[repr(u8)]
pub enum ReservedSpace {
    Relative = 0,
    Protocol = 1,
    Implementation = 2,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, TryFromPrimitive, IntoPrimitive)]
#[allow(non_camel_case_types)]
#[repr(u8)]
pub enum ProtocolObjectType {
    NULL = 0,
    BASE = 1,
    ACCOUNT = 2,
    ASSET = 3,
    COMMITTEE_MEMBER = 4,
    PROPOSAL = 5,
    OPERATION_HISTORY = 6,
    VESTING_BALANCE = 7,
    BALANCE = 8,
    FROZEN_BALANCE = 9,
    CONTRACT = 10,
    CONTRACT_RESULT = 11,
    BLOCK_RESULT = 12,
    ETH_ADDRESS = 13,
    DEPOSIT_ETH = 14,
    WITHDRAW_ETH = 15,
    ERC20_TOKEN = 16,
    DEPOSIT_ERC20_TOKEN = 17,
    WITHDRAW_ERC20_TOKEN = 18,
    BTC_ADDRESS = 19,
    BTC_INTERMEDIATE_DEPOSIT = 20,
    BTC_DEPOSIT = 21,
    BTC_WITHDRAW = 22,
    BTC_AGGREGATING = 23,
    EVM_ADDRESS = 24,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, TryFromPrimitive, IntoPrimitive)]
#[allow(non_camel_case_types)]
#[repr(u8)]
pub enum ImplementationObjectType {
    GLOBAL_PROPERTY = 0,
    DYNAMIC_GLOBAL_PROPERTY = 1,
    ASSET_DYNAMIC_DATA = 2,
    ASSET_BITASSET_DATA = 3,
    ACCOUNT_BALANCE = 4,
    ACCOUNT_STATISTICS = 5,
    TRANSACTION = 6,
    BLOCK_SUMMARY = 7,
    ACCOUNT_TRANSACTION_HISTORY = 8,
    CHAIN_PROPERTY = 9,
    SPECIAL_AUTHORITY = 10,
    CONTRACT_BALANCE = 11,
    CONTRACT_HISTORY = 12,
    CONTRACT_STATISTICS = 13,
    ACCOUNT_ADDRESS = 14,
    CONTRACT_POOL = 15,
    MALICIOUS_COMMITTEEMEN = 16,
    BTC_BLOCK = 17,
}

/// Stable operation ids; the index into the operation registry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, TryFromPrimitive, IntoPrimitive)]
#[allow(non_camel_case_types)]
#[repr(u32)]
pub enum OperationId {
    TRANSFER = 0,
    TRANSFER_TO_ADDRESS = 1,
    OVERRIDE_TRANSFER = 2,
    ACCOUNT_CREATE = 3,
    ACCOUNT_UPDATE = 4,
    ACCOUNT_WHITELIST = 5,
    ACCOUNT_ADDRESS_CREATE = 6,
    ASSET_CREATE = 7,
    ASSET_UPDATE = 8,
    ASSET_UPDATE_BITASSET = 9,
    ASSET_UPDATE_FEED_PRODUCERS = 10,
    ASSET_ISSUE = 11,
    ASSET_RESERVE = 12,
    ASSET_FUND_FEE_POOL = 13,
    ASSET_PUBLISH_FEED = 14,
    ASSET_CLAIM_FEES = 15,
    PROPOSAL_CREATE = 16,
    PROPOSAL_UPDATE = 17,
    PROPOSAL_DELETE = 18,
    COMMITTEE_MEMBER_CREATE = 19,
    COMMITTEE_MEMBER_UPDATE = 20,
    COMMITTEE_MEMBER_UPDATE_GLOBAL_PARAMETERS = 21,
    COMMITTEE_MEMBER_ACTIVATE = 22,
    COMMITTEE_MEMBER_DEACTIVATE = 23,
    COMMITTEE_FROZEN_BALANCE_DEPOSIT = 24,
    COMMITTEE_FROZEN_BALANCE_WITHDRAW = 25,
    VESTING_BALANCE_CREATE = 26,
    VESTING_BALANCE_WITHDRAW = 27,
    BALANCE_CLAIM = 28,
    BALANCE_FREEZE = 29,
    BALANCE_UNFREEZE = 30,
    CONTRACT_CREATE = 31,
    CONTRACT_CALL = 32,
    CONTRACT_INTERNAL_CREATE = 33,
    CONTRACT_INTERNAL_CALL = 34,
    CONTRACT_SELFDESTRUCT = 35,
    CONTRACT_UPDATE = 36,
    CONTRACT_FUND_POOL = 37,
    CONTRACT_WHITELIST = 38,
    SIDECHAIN_ETH_CREATE_ADDRESS = 39,
    SIDECHAIN_ETH_APPROVE_ADDRESS = 40,
    SIDECHAIN_ETH_DEPOSIT = 41,
    SIDECHAIN_ETH_SEND_DEPOSIT = 42,
    SIDECHAIN_ETH_WITHDRAW = 43,
    SIDECHAIN_ETH_SEND_WITHDRAW = 44,
    SIDECHAIN_ETH_APPROVE_WITHDRAW = 45,
    SIDECHAIN_ETH_UPDATE_CONTRACT_ADDRESS = 46,
    SIDECHAIN_ISSUE = 47,
    SIDECHAIN_BURN = 48,
    SIDECHAIN_ERC20_REGISTER_TOKEN = 49,
    SIDECHAIN_ERC20_DEPOSIT_TOKEN = 50,
    SIDECHAIN_ERC20_SEND_DEPOSIT_TOKEN = 51,
    SIDECHAIN_ERC20_WITHDRAW_TOKEN = 52,
    SIDECHAIN_ERC20_SEND_WITHDRAW_TOKEN = 53,
    SIDECHAIN_ERC20_APPROVE_TOKEN_WITHDRAW = 54,
    SIDECHAIN_ERC20_ISSUE = 55,
    SIDECHAIN_ERC20_BURN = 56,
    SIDECHAIN_BTC_CREATE_ADDRESS = 57,
    SIDECHAIN_BTC_CREATE_INTERMEDIATE_DEPOSIT = 58,
    SIDECHAIN_BTC_INTERMEDIATE_DEPOSIT = 59,
    SIDECHAIN_BTC_DEPOSIT = 60,
    SIDECHAIN_BTC_WITHDRAW = 61,
    SIDECHAIN_BTC_AGGREGATE = 62,
    SIDECHAIN_BTC_APPROVE_AGGREGATE = 63,
    BLOCK_REWARD = 64,
    EVM_ADDRESS_REGISTER = 65,
}

impl OperationId {
    pub const COUNT: u32 = 66;

    pub fn id(self) -> u32 {
        self.into()
    }
}
