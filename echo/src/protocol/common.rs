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

//! Schemas shared by many operations and chain objects.

use echo_core::serializer::{
    bool, bytes, int64, map, optional, set, static_variant, string, time_point_sec, uint16,
    uint32, uint64, uint8, void,
};
use echo_core::{struct_serializer, SerializerRef};

use crate::config::ChainConfig;
use crate::serializer::{address, ed25519_public_key, protocol_id, public_key};
use crate::types::{OperationId, ProtocolObjectType as T};

/// Building blocks of every operation, transaction and object schema.
#[derive(Clone)]
pub struct Common {
    pub account_id: SerializerRef,
    pub asset_id: SerializerRef,
    pub contract_id: SerializerRef,
    pub committee_member_id: SerializerRef,
    pub public_key: SerializerRef,
    pub echorand_key: SerializerRef,
    pub address: SerializerRef,
    pub eth_address: SerializerRef,
    pub sha256: SerializerRef,
    pub future_extensions: SerializerRef,
    pub asset: SerializerRef,
    pub price: SerializerRef,
    pub price_feed: SerializerRef,
    pub authority: SerializerRef,
    pub account_options: SerializerRef,
    pub asset_options: SerializerRef,
    pub bitasset_options: SerializerRef,
    pub vesting_policy_initializer: SerializerRef,
    pub btc_transaction_details: SerializerRef,
    pub fee_parameters: SerializerRef,
    pub fee_schedule: SerializerRef,
    pub chain_parameters: SerializerRef,
}

impl Common {
    pub fn new(config: &ChainConfig) -> Self {
        let prefix = config.address_prefix.as_str();
        let account_id = protocol_id(T::ACCOUNT);
        let asset_id = protocol_id(T::ASSET);
        let public_key = public_key(prefix);
        let eth_address = bytes(Some(20));

        // extensions reserved for future protocol versions; always empty today
        let future_extensions = set(static_variant([(0, void())]));

        let asset = struct_serializer! {
            amount: int64(),
            asset_id: asset_id.clone(),
        };
        let price = struct_serializer! {
            base: asset.clone(),
            quote: asset.clone(),
        };
        let price_feed = struct_serializer! {
            settlement_price: price.clone(),
            maintenance_collateral_ratio: uint16(),
            maximum_short_squeeze_ratio: uint16(),
            core_exchange_rate: price.clone(),
        };
        let authority = struct_serializer! {
            weight_threshold: uint32(),
            account_auths: map(account_id.clone(), uint16()),
            key_auths: map(public_key.clone(), uint16()),
        };
        let account_options = struct_serializer! {
            delegating_account: account_id.clone(),
            delegate_share: uint16(),
            extensions: future_extensions.clone(),
        };
        let asset_options = struct_serializer! {
            max_supply: int64(),
            issuer_permissions: uint16(),
            flags: uint16(),
            core_exchange_rate: price.clone(),
            whitelist_authorities: set(account_id.clone()),
            blacklist_authorities: set(account_id.clone()),
            description: string(),
            extensions: future_extensions.clone(),
        };
        let bitasset_options = struct_serializer! {
            feed_lifetime_sec: uint32(),
            minimum_feeds: uint8(),
            short_backing_asset: asset_id.clone(),
            extensions: future_extensions.clone(),
        };
        let vesting_policy_initializer = static_variant([
            (
                0,
                struct_serializer! {
                    begin_timestamp: time_point_sec(),
                    vesting_cliff_seconds: uint32(),
                    vesting_duration_seconds: uint32(),
                },
            ),
            (
                1,
                struct_serializer! {
                    start_claim: time_point_sec(),
                    vesting_seconds: uint32(),
                },
            ),
        ]);
        let btc_transaction_details = struct_serializer! {
            block_number: uint64(),
            out: struct_serializer! {
                tx_id: string(),
                index: uint32(),
                amount: uint64(),
            },
        };
        let fee_parameters = fee_parameters();
        let fee_schedule = struct_serializer! {
            parameters: set(fee_parameters.clone()),
            scale: uint32(),
        };
        let chain_parameters =
            chain_parameters(&fee_schedule, &eth_address, &future_extensions);

        Common {
            account_id,
            asset_id,
            contract_id: protocol_id(T::CONTRACT),
            committee_member_id: protocol_id(T::COMMITTEE_MEMBER),
            public_key,
            echorand_key: ed25519_public_key(prefix),
            address: address(prefix),
            eth_address,
            sha256: bytes(Some(32)),
            future_extensions,
            asset,
            price,
            price_feed,
            authority,
            account_options,
            asset_options,
            bitasset_options,
            vesting_policy_initializer,
            btc_transaction_details,
            fee_parameters,
            fee_schedule,
            chain_parameters,
        }
    }

    pub fn optional_account(&self) -> SerializerRef {
        optional(self.account_id.clone())
    }

    pub fn account_set(&self) -> SerializerRef {
        set(self.account_id.clone())
    }
}

/// Fee parameters of every operation, keyed by operation id. Virtual
/// operations are never paid for and carry no parameters.
fn fee_parameters() -> SerializerRef {
    use OperationId::*;

    let flat = || struct_serializer! { fee: uint64() };
    let per_kbyte = || {
        struct_serializer! {
            fee: uint64(),
            price_per_kbyte: uint32(),
        }
    };
    let variants = (0..OperationId::COUNT).filter_map(|id| {
        let op = OperationId::try_from(id).ok()?;
        let params = match op {
            ACCOUNT_CREATE => struct_serializer! {
                basic_fee: uint64(),
                premium_fee: uint64(),
                price_per_kbyte: uint32(),
            },
            ASSET_CREATE => struct_serializer! {
                symbol3: uint64(),
                symbol4: uint64(),
                long_symbol: uint64(),
                price_per_kbyte: uint32(),
            },
            TRANSFER | TRANSFER_TO_ADDRESS | OVERRIDE_TRANSFER | ACCOUNT_UPDATE | ASSET_UPDATE
            | ASSET_ISSUE | PROPOSAL_CREATE | PROPOSAL_UPDATE | COMMITTEE_MEMBER_CREATE
            | CONTRACT_CREATE | CONTRACT_CALL => per_kbyte(),
            CONTRACT_INTERNAL_CREATE | CONTRACT_INTERNAL_CALL | CONTRACT_SELFDESTRUCT
            | SIDECHAIN_ISSUE | SIDECHAIN_BURN | SIDECHAIN_ERC20_ISSUE | SIDECHAIN_ERC20_BURN
            | BLOCK_REWARD => void(),
            _ => flat(),
        };
        Some((id, params))
    });
    static_variant(variants)
}

fn chain_parameters(
    fee_schedule: &SerializerRef,
    eth_address: &SerializerRef,
    future_extensions: &SerializerRef,
) -> SerializerRef {
    let eth_method = || {
        struct_serializer! {
            method: string(),
            gas: uint64(),
        }
    };
    let echorand_config = struct_serializer! {
        time_net_1mb: uint32(),
        time_net_256b: uint32(),
        creator_count: uint32(),
        verifier_count: uint32(),
        ok_threshold: uint32(),
        max_bba_steps: uint32(),
        gc1_delay: uint32(),
    };
    let sidechain_config = struct_serializer! {
        eth_contract_address: eth_address.clone(),
        eth_committee_update_method: eth_method(),
        eth_gen_address_method: eth_method(),
        eth_withdraw_method: eth_method(),
        eth_update_addr_method: eth_method(),
        eth_withdraw_token_method: eth_method(),
        eth_collect_tokens_method: eth_method(),
        eth_committee_updated_topic: bytes(Some(32)),
        eth_gen_address_topic: bytes(Some(32)),
        eth_deposit_topic: bytes(Some(32)),
        eth_withdraw_topic: bytes(Some(32)),
        erc20_deposit_topic: bytes(Some(32)),
        erc20_withdraw_topic: bytes(Some(32)),
        eth_asset_id: protocol_id(T::ASSET),
        btc_asset_id: protocol_id(T::ASSET),
        fines: struct_serializer! { create_eth_address: int64() },
        waiting_blocks: uint32(),
        waiting_eth_blocks: uint32(),
        waiting_btc_blocks: uint32(),
        satoshis_per_byte: uint32(),
        coefficient_waiting_blocks: uint32(),
        btc_deposit_withdrawal_min: uint64(),
        btc_deposit_withdrawal_fee: uint64(),
    };
    let erc20_config = struct_serializer! {
        contract_code: string(),
        create_token_fee: uint64(),
        transfer_topic: bytes(Some(32)),
        check_balance_method: eth_method(),
        burn_method: eth_method(),
        issue_method: eth_method(),
    };
    let gas_price = struct_serializer! {
        price: uint64(),
        gas_amount: uint64(),
    };
    struct_serializer! {
        current_fees: fee_schedule.clone(),
        maintenance_interval: uint32(),
        maintenance_duration_seconds: uint8(),
        committee_proposal_review_period: uint32(),
        maximum_transaction_size: uint32(),
        maximum_block_size: uint32(),
        maximum_time_until_expiration: uint32(),
        maximum_proposal_lifetime: uint32(),
        maximum_asset_whitelist_authorities: uint8(),
        maximum_asset_feed_publishers: uint8(),
        maximum_authority_membership: uint16(),
        max_authority_depth: uint8(),
        block_emission_amount: uint64(),
        block_producer_reward_ratio: uint16(),
        committee_frozen_balance_to_activate: uint64(),
        committee_maintenance_intervals_to_deposit: uint64(),
        committee_balance_unfreeze_duration_seconds: uint32(),
        frozen_balances_multipliers: map(uint16(), uint32()),
        echorand_config: echorand_config,
        sidechain_config: sidechain_config,
        erc20_config: erc20_config,
        gas_price: gas_price,
        valid_fee_asset: optional(protocol_id(T::ASSET)),
        economy_config: struct_serializer! {
            blocks_in_interval: uint64(),
            maintenances_in_interval: uint8(),
            block_emission_amount: uint64(),
            block_producer_reward_ratio: uint16(),
            pool_divider: uint16(),
            allow_eth_fee_payment: bool(),
        },
        extensions: future_extensions.clone(),
    }
}
