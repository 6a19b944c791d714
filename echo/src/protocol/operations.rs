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

//! Field schemas of every operation, in registry order.

use echo_core::serializer::{
    bool, int64, map, optional, set, string, time_point_sec, uint16, uint32, uint64,
    uint8, vector,
};
use echo_core::{struct_serializer, SerializerRef};

use crate::protocol::common::Common;
use crate::serializer::{any_object_id, protocol_id};
use crate::types::{OperationId, ProtocolObjectType as T};

/// `op_wrapper` embeds an operation, as used by proposals.
pub(crate) fn operations(c: &Common, op_wrapper: &SerializerRef) -> Vec<(OperationId, SerializerRef)> {
    use OperationId::*;

    let fee = || c.asset.clone();
    let account = || c.account_id.clone();
    let asset = || c.asset.clone();
    let asset_id = || c.asset_id.clone();
    let contract = || c.contract_id.clone();
    let ext = || c.future_extensions.clone();
    let eth_address = || c.eth_address.clone();
    let tx_hash = || c.sha256.clone();

    vec![
        (
            TRANSFER,
            struct_serializer! {
                fee: fee(),
                from: account(),
                to: account(),
                amount: asset(),
                extensions: ext(),
            },
        ),
        (
            TRANSFER_TO_ADDRESS,
            struct_serializer! {
                fee: fee(),
                from: account(),
                to: c.address.clone(),
                amount: asset(),
                extensions: ext(),
            },
        ),
        (
            OVERRIDE_TRANSFER,
            struct_serializer! {
                fee: fee(),
                issuer: account(),
                from: account(),
                to: account(),
                amount: asset(),
                extensions: ext(),
            },
        ),
        (
            ACCOUNT_CREATE,
            struct_serializer! {
                fee: fee(),
                registrar: account(),
                name: string(),
                active: c.authority.clone(),
                echorand_key: c.echorand_key.clone(),
                evm_address: optional(eth_address()),
                options: c.account_options.clone(),
                extensions: ext(),
            },
        ),
        (
            ACCOUNT_UPDATE,
            struct_serializer! {
                fee: fee(),
                account: account(),
                active: optional(c.authority.clone()),
                echorand_key: optional(c.echorand_key.clone()),
                new_options: optional(c.account_options.clone()),
                extensions: ext(),
            },
        ),
        (
            ACCOUNT_WHITELIST,
            struct_serializer! {
                fee: fee(),
                authorizing_account: account(),
                account_to_list: account(),
                new_listing: uint8(),
                extensions: ext(),
            },
        ),
        (
            ACCOUNT_ADDRESS_CREATE,
            struct_serializer! {
                fee: fee(),
                owner: account(),
                label: string(),
                extensions: ext(),
            },
        ),
        (
            ASSET_CREATE,
            struct_serializer! {
                fee: fee(),
                issuer: account(),
                symbol: string(),
                precision: uint8(),
                common_options: c.asset_options.clone(),
                bitasset_opts: optional(c.bitasset_options.clone()),
                extensions: ext(),
            },
        ),
        (
            ASSET_UPDATE,
            struct_serializer! {
                fee: fee(),
                issuer: account(),
                asset_to_update: asset_id(),
                new_issuer: c.optional_account(),
                new_options: c.asset_options.clone(),
                extensions: ext(),
            },
        ),
        (
            ASSET_UPDATE_BITASSET,
            struct_serializer! {
                fee: fee(),
                issuer: account(),
                asset_to_update: asset_id(),
                new_options: c.bitasset_options.clone(),
                extensions: ext(),
            },
        ),
        (
            ASSET_UPDATE_FEED_PRODUCERS,
            struct_serializer! {
                fee: fee(),
                issuer: account(),
                asset_to_update: asset_id(),
                new_feed_producers: c.account_set(),
                extensions: ext(),
            },
        ),
        (
            ASSET_ISSUE,
            struct_serializer! {
                fee: fee(),
                issuer: account(),
                asset_to_issue: asset(),
                issue_to_account: account(),
                extensions: ext(),
            },
        ),
        (
            ASSET_RESERVE,
            struct_serializer! {
                fee: fee(),
                payer: account(),
                amount_to_reserve: asset(),
                extensions: ext(),
            },
        ),
        (
            ASSET_FUND_FEE_POOL,
            struct_serializer! {
                fee: fee(),
                from_account: account(),
                asset_id: asset_id(),
                amount: int64(),
                extensions: ext(),
            },
        ),
        (
            ASSET_PUBLISH_FEED,
            struct_serializer! {
                fee: fee(),
                publisher: account(),
                asset_id: asset_id(),
                core_exchange_rate: c.price.clone(),
                extensions: ext(),
            },
        ),
        (
            ASSET_CLAIM_FEES,
            struct_serializer! {
                fee: fee(),
                issuer: account(),
                amount_to_claim: asset(),
                extensions: ext(),
            },
        ),
        (
            PROPOSAL_CREATE,
            struct_serializer! {
                fee: fee(),
                fee_paying_account: account(),
                expiration_time: time_point_sec(),
                proposed_ops: vector(op_wrapper.clone()),
                review_period_seconds: optional(uint32()),
                extensions: ext(),
            },
        ),
        (
            PROPOSAL_UPDATE,
            struct_serializer! {
                fee: fee(),
                fee_paying_account: account(),
                proposal: protocol_id(T::PROPOSAL),
                active_approvals_to_add: c.account_set(),
                active_approvals_to_remove: c.account_set(),
                key_approvals_to_add: set(c.public_key.clone()),
                key_approvals_to_remove: set(c.public_key.clone()),
                extensions: ext(),
            },
        ),
        (
            PROPOSAL_DELETE,
            struct_serializer! {
                fee: fee(),
                fee_paying_account: account(),
                using_owner_authority: bool(),
                proposal: protocol_id(T::PROPOSAL),
                extensions: ext(),
            },
        ),
        (
            COMMITTEE_MEMBER_CREATE,
            struct_serializer! {
                fee: fee(),
                committee_member_account: account(),
                url: string(),
                eth_address: string(),
                btc_public_key: string(),
                deposit: asset(),
                extensions: ext(),
            },
        ),
        (
            COMMITTEE_MEMBER_UPDATE,
            struct_serializer! {
                fee: fee(),
                committee_member: c.committee_member_id.clone(),
                committee_member_account: account(),
                new_url: optional(string()),
                new_eth_address: optional(string()),
                new_btc_public_key: optional(string()),
                extensions: ext(),
            },
        ),
        (
            COMMITTEE_MEMBER_UPDATE_GLOBAL_PARAMETERS,
            struct_serializer! {
                fee: fee(),
                new_parameters: c.chain_parameters.clone(),
                extensions: ext(),
            },
        ),
        (
            COMMITTEE_MEMBER_ACTIVATE,
            struct_serializer! {
                fee: fee(),
                committee_to_activate: c.committee_member_id.clone(),
                extensions: ext(),
            },
        ),
        (
            COMMITTEE_MEMBER_DEACTIVATE,
            struct_serializer! {
                fee: fee(),
                committee_to_deactivate: c.committee_member_id.clone(),
                extensions: ext(),
            },
        ),
        (
            COMMITTEE_FROZEN_BALANCE_DEPOSIT,
            struct_serializer! {
                fee: fee(),
                committee_member: c.committee_member_id.clone(),
                committee_member_account: account(),
                amount: asset(),
                extensions: ext(),
            },
        ),
        (
            COMMITTEE_FROZEN_BALANCE_WITHDRAW,
            struct_serializer! {
                fee: fee(),
                committee_member_account: account(),
                amount: asset(),
                extensions: ext(),
            },
        ),
        (
            VESTING_BALANCE_CREATE,
            struct_serializer! {
                fee: fee(),
                creator: account(),
                owner: account(),
                amount: asset(),
                policy: c.vesting_policy_initializer.clone(),
                extensions: ext(),
            },
        ),
        (
            VESTING_BALANCE_WITHDRAW,
            struct_serializer! {
                fee: fee(),
                vesting_balance: protocol_id(T::VESTING_BALANCE),
                owner: account(),
                amount: asset(),
                extensions: ext(),
            },
        ),
        (
            BALANCE_CLAIM,
            struct_serializer! {
                fee: fee(),
                deposit_to_account: account(),
                balance_to_claim: protocol_id(T::BALANCE),
                balance_owner_key: c.public_key.clone(),
                total_claimed: asset(),
                extensions: ext(),
            },
        ),
        (
            BALANCE_FREEZE,
            struct_serializer! {
                fee: fee(),
                account: account(),
                amount: asset(),
                duration: uint16(),
                extensions: ext(),
            },
        ),
        (
            BALANCE_UNFREEZE,
            struct_serializer! {
                fee: fee(),
                account: account(),
                amount: asset(),
                extensions: ext(),
            },
        ),
        (
            CONTRACT_CREATE,
            struct_serializer! {
                fee: fee(),
                registrar: account(),
                value: asset(),
                code: string(),
                eth_accuracy: bool(),
                supported_asset_id: optional(asset_id()),
                extensions: ext(),
            },
        ),
        (
            CONTRACT_CALL,
            struct_serializer! {
                fee: fee(),
                registrar: account(),
                value: asset(),
                code: string(),
                callee: contract(),
                extensions: ext(),
            },
        ),
        (
            CONTRACT_INTERNAL_CREATE,
            struct_serializer! {
                fee: fee(),
                caller: any_object_id(),
                new_contract: contract(),
                value: asset(),
                eth_accuracy: bool(),
                supported_asset_id: optional(asset_id()),
                extensions: ext(),
            },
        ),
        (
            CONTRACT_INTERNAL_CALL,
            struct_serializer! {
                fee: fee(),
                caller: any_object_id(),
                callee: any_object_id(),
                method: string(),
                value: asset(),
                extensions: ext(),
            },
        ),
        (
            CONTRACT_SELFDESTRUCT,
            struct_serializer! {
                fee: fee(),
                contract: contract(),
                recipient: any_object_id(),
                extensions: ext(),
            },
        ),
        (
            CONTRACT_UPDATE,
            struct_serializer! {
                fee: fee(),
                sender: account(),
                contract: contract(),
                new_owner: c.optional_account(),
                extensions: ext(),
            },
        ),
        (
            CONTRACT_FUND_POOL,
            struct_serializer! {
                fee: fee(),
                sender: account(),
                contract: contract(),
                amount: asset(),
                extensions: ext(),
            },
        ),
        (
            CONTRACT_WHITELIST,
            struct_serializer! {
                fee: fee(),
                sender: account(),
                contract: contract(),
                add_to_whitelist: c.account_set(),
                remove_from_whitelist: c.account_set(),
                add_to_blacklist: c.account_set(),
                remove_from_blacklist: c.account_set(),
                extensions: ext(),
            },
        ),
        (
            SIDECHAIN_ETH_CREATE_ADDRESS,
            struct_serializer! {
                fee: fee(),
                account: account(),
                extensions: ext(),
            },
        ),
        (
            SIDECHAIN_ETH_APPROVE_ADDRESS,
            struct_serializer! {
                fee: fee(),
                committee_member_id: account(),
                malicious_committeemen: c.account_set(),
                account: account(),
                eth_addr: eth_address(),
                transaction_hash: tx_hash(),
                extensions: ext(),
            },
        ),
        (
            SIDECHAIN_ETH_DEPOSIT,
            struct_serializer! {
                fee: fee(),
                committee_member_id: account(),
                deposit_id: uint64(),
                account: account(),
                value: uint64(),
                transaction_hash: tx_hash(),
                extensions: ext(),
            },
        ),
        (
            SIDECHAIN_ETH_SEND_DEPOSIT,
            struct_serializer! {
                fee: fee(),
                committee_member_id: account(),
                deposit_id: protocol_id(T::DEPOSIT_ETH),
                extensions: ext(),
            },
        ),
        (
            SIDECHAIN_ETH_WITHDRAW,
            struct_serializer! {
                fee: fee(),
                account: account(),
                eth_addr: eth_address(),
                value: uint64(),
                extensions: ext(),
            },
        ),
        (
            SIDECHAIN_ETH_SEND_WITHDRAW,
            struct_serializer! {
                fee: fee(),
                committee_member_id: account(),
                withdraw_id: protocol_id(T::WITHDRAW_ETH),
                extensions: ext(),
            },
        ),
        (
            SIDECHAIN_ETH_APPROVE_WITHDRAW,
            struct_serializer! {
                fee: fee(),
                committee_member_id: account(),
                withdraw_id: uint64(),
                transaction_hash: tx_hash(),
                extensions: ext(),
            },
        ),
        (
            SIDECHAIN_ETH_UPDATE_CONTRACT_ADDRESS,
            struct_serializer! {
                fee: fee(),
                new_addr: eth_address(),
                extensions: ext(),
            },
        ),
        (
            SIDECHAIN_ISSUE,
            struct_serializer! {
                fee: fee(),
                value: asset(),
                account: account(),
                deposit_id: protocol_id(T::DEPOSIT_ETH),
                extensions: ext(),
            },
        ),
        (
            SIDECHAIN_BURN,
            struct_serializer! {
                fee: fee(),
                value: asset(),
                account: account(),
                withdraw_id: protocol_id(T::WITHDRAW_ETH),
                extensions: ext(),
            },
        ),
        (
            SIDECHAIN_ERC20_REGISTER_TOKEN,
            struct_serializer! {
                fee: fee(),
                account: account(),
                eth_addr: eth_address(),
                name: string(),
                symbol: string(),
                decimals: uint8(),
                extensions: ext(),
            },
        ),
        (
            SIDECHAIN_ERC20_DEPOSIT_TOKEN,
            struct_serializer! {
                fee: fee(),
                committee_member_id: account(),
                malicious_committeemen: c.account_set(),
                account: account(),
                erc20_token_addr: string(),
                value: string(),
                transaction_hash: string(),
                extensions: ext(),
            },
        ),
        (
            SIDECHAIN_ERC20_SEND_DEPOSIT_TOKEN,
            struct_serializer! {
                fee: fee(),
                committee_member_id: account(),
                deposit_id: protocol_id(T::DEPOSIT_ERC20_TOKEN),
                extensions: ext(),
            },
        ),
        (
            SIDECHAIN_ERC20_WITHDRAW_TOKEN,
            struct_serializer! {
                fee: fee(),
                account: account(),
                to: eth_address(),
                erc20_token: protocol_id(T::ERC20_TOKEN),
                value: string(),
                extensions: ext(),
            },
        ),
        (
            SIDECHAIN_ERC20_SEND_WITHDRAW_TOKEN,
            struct_serializer! {
                fee: fee(),
                committee_member_id: account(),
                withdraw_id: protocol_id(T::WITHDRAW_ERC20_TOKEN),
                extensions: ext(),
            },
        ),
        (
            SIDECHAIN_ERC20_APPROVE_TOKEN_WITHDRAW,
            struct_serializer! {
                fee: fee(),
                committee_member_id: account(),
                withdraw_id: uint64(),
                transaction_hash: string(),
                extensions: ext(),
            },
        ),
        (
            SIDECHAIN_ERC20_ISSUE,
            struct_serializer! {
                fee: fee(),
                deposit: protocol_id(T::DEPOSIT_ERC20_TOKEN),
                account: account(),
                token: protocol_id(T::ERC20_TOKEN),
                amount: uint64(),
                extensions: ext(),
            },
        ),
        (
            SIDECHAIN_ERC20_BURN,
            struct_serializer! {
                fee: fee(),
                withdraw: protocol_id(T::WITHDRAW_ERC20_TOKEN),
                account: account(),
                token: protocol_id(T::ERC20_TOKEN),
                amount: uint64(),
                extensions: ext(),
            },
        ),
        (
            SIDECHAIN_BTC_CREATE_ADDRESS,
            struct_serializer! {
                fee: fee(),
                account: account(),
                backup_address: string(),
                extensions: ext(),
            },
        ),
        (
            SIDECHAIN_BTC_CREATE_INTERMEDIATE_DEPOSIT,
            struct_serializer! {
                fee: fee(),
                committee_member_id: account(),
                account: account(),
                btc_address_id: protocol_id(T::BTC_ADDRESS),
                tx_info: c.btc_transaction_details.clone(),
                extensions: ext(),
            },
        ),
        (
            SIDECHAIN_BTC_INTERMEDIATE_DEPOSIT,
            struct_serializer! {
                fee: fee(),
                committee_member_id: account(),
                intermediate_address_id: protocol_id(T::BTC_INTERMEDIATE_DEPOSIT),
                signature: string(),
                extensions: ext(),
            },
        ),
        (
            SIDECHAIN_BTC_DEPOSIT,
            struct_serializer! {
                fee: fee(),
                committee_member_id: account(),
                account: account(),
                intermediate_deposit_id: protocol_id(T::BTC_INTERMEDIATE_DEPOSIT),
                tx_info: c.btc_transaction_details.clone(),
                extensions: ext(),
            },
        ),
        (
            SIDECHAIN_BTC_WITHDRAW,
            struct_serializer! {
                fee: fee(),
                account: account(),
                btc_addr: string(),
                value: uint64(),
                extensions: ext(),
            },
        ),
        (
            SIDECHAIN_BTC_AGGREGATE,
            struct_serializer! {
                fee: fee(),
                committee_member_id: account(),
                transaction_id: tx_hash(),
                deposits: set(protocol_id(T::BTC_DEPOSIT)),
                withdrawals: set(protocol_id(T::BTC_WITHDRAW)),
                aggregation_out_value: uint64(),
                sma_address: string(),
                committee_member_ins: map(account(), string()),
                previous_aggregation: optional(protocol_id(T::BTC_AGGREGATING)),
                cpfp_depth: uint8(),
                signatures: map(uint32(), string()),
                extensions: ext(),
            },
        ),
        (
            SIDECHAIN_BTC_APPROVE_AGGREGATE,
            struct_serializer! {
                fee: fee(),
                committee_member_id: account(),
                transaction_id: tx_hash(),
                extensions: ext(),
            },
        ),
        (
            BLOCK_REWARD,
            struct_serializer! {
                fee: fee(),
                receivers: map(account(), uint64()),
                extensions: ext(),
            },
        ),
        (
            EVM_ADDRESS_REGISTER,
            struct_serializer! {
                fee: fee(),
                owner: account(),
                evm_address: eth_address(),
                extensions: ext(),
            },
        ),
    ]
}
