//! Flash perpetuals account layouts.
//!
//! `Position` is fixed size, so each field sits at a known offset and can be
//! used directly in a memcmp filter when scanning the program's accounts.

use borsh::{BorshDeserialize, BorshSerialize};
use solana_sdk::pubkey::Pubkey;

use crate::{
    codec,
    discriminator::{Discriminator, DISCRIMINATOR_LEN},
    filters::AccountFilter,
    types::CodecError,
};

/// A price scaled by `10^exponent`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub struct OraclePrice {
    pub price: u64,
    pub exponent: i32,
}

impl OraclePrice {
    pub const BYTES: usize = 12;

    pub fn new(price: u64, exponent: i32) -> Self {
        Self { price, exponent }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub struct Position {
    pub owner: Pubkey,
    pub market: Pubkey,
    pub delegate: Pubkey,
    pub open_time: i64,
    pub update_time: i64,
    pub entry_price: OraclePrice,
    pub size_amount: u64,
    pub size_usd: u64,
    pub locked_amount: u64,
    pub locked_usd: u64,
    pub collateral_amount: u64,
    pub collateral_usd: u64,
    pub unsettled_amount: u64,
    pub unsettled_fees_usd: u64,
    pub cumulative_lock_fee_snapshot: u128,
    pub degen_size_usd: u64,
    pub buffer: u128,
    pub size_decimals: u8,
    pub locked_decimals: u8,
    pub collateral_decimals: u8,
    pub bump: u8,
    pub padding: [u8; 12],
}

impl Position {
    pub const BYTES: usize = 252;

    pub const DISCRIMINATOR: Discriminator =
        Discriminator::from_bytes([170, 188, 143, 228, 122, 64, 247, 208]);

    pub const OWNER_OFFSET: usize = DISCRIMINATOR_LEN;
    pub const MARKET_OFFSET: usize = Self::OWNER_OFFSET + 32;
    pub const DELEGATE_OFFSET: usize = Self::MARKET_OFFSET + 32;
    pub const OPEN_TIME_OFFSET: usize = Self::DELEGATE_OFFSET + 32;
    pub const UPDATE_TIME_OFFSET: usize = Self::OPEN_TIME_OFFSET + 8;
    pub const ENTRY_PRICE_OFFSET: usize = Self::UPDATE_TIME_OFFSET + 8;
    pub const SIZE_AMOUNT_OFFSET: usize = Self::ENTRY_PRICE_OFFSET + OraclePrice::BYTES;
    pub const SIZE_USD_OFFSET: usize = Self::SIZE_AMOUNT_OFFSET + 8;
    pub const LOCKED_AMOUNT_OFFSET: usize = Self::SIZE_USD_OFFSET + 8;
    pub const LOCKED_USD_OFFSET: usize = Self::LOCKED_AMOUNT_OFFSET + 8;
    pub const COLLATERAL_AMOUNT_OFFSET: usize = Self::LOCKED_USD_OFFSET + 8;
    pub const COLLATERAL_USD_OFFSET: usize = Self::COLLATERAL_AMOUNT_OFFSET + 8;
    pub const UNSETTLED_AMOUNT_OFFSET: usize = Self::COLLATERAL_USD_OFFSET + 8;
    pub const UNSETTLED_FEES_USD_OFFSET: usize = Self::UNSETTLED_AMOUNT_OFFSET + 8;
    pub const CUMULATIVE_LOCK_FEE_SNAPSHOT_OFFSET: usize = Self::UNSETTLED_FEES_USD_OFFSET + 8;
    pub const DEGEN_SIZE_USD_OFFSET: usize = Self::CUMULATIVE_LOCK_FEE_SNAPSHOT_OFFSET + 16;
    pub const BUFFER_OFFSET: usize = Self::DEGEN_SIZE_USD_OFFSET + 8;
    pub const SIZE_DECIMALS_OFFSET: usize = Self::BUFFER_OFFSET + 16;
    pub const LOCKED_DECIMALS_OFFSET: usize = Self::SIZE_DECIMALS_OFFSET + 1;
    pub const COLLATERAL_DECIMALS_OFFSET: usize = Self::LOCKED_DECIMALS_OFFSET + 1;
    pub const BUMP_OFFSET: usize = Self::COLLATERAL_DECIMALS_OFFSET + 1;
    pub const PADDING_OFFSET: usize = Self::BUMP_OFFSET + 1;

    /// Decode raw account data, discriminator included.
    pub fn read(data: &[u8]) -> Result<Self, CodecError> {
        codec::decode_account(&Self::DISCRIMINATOR, data)
    }

    /// Encode as account data, discriminator included.
    pub fn to_account_data(&self) -> Result<Vec<u8>, CodecError> {
        let mut data = vec![0u8; Self::BYTES];
        let i = Self::DISCRIMINATOR.write(&mut data, 0)?;
        codec::write(self, &mut data, i)?;
        Ok(data)
    }

    /// Filters selecting every position account.
    pub fn filters() -> Vec<AccountFilter> {
        vec![
            AccountFilter::data_size(Self::BYTES),
            AccountFilter::discriminator(&Self::DISCRIMINATOR),
        ]
    }

    /// Filters selecting the positions of `owner`, optionally in one `market`.
    pub fn owner_filters(owner: &Pubkey, market: Option<&Pubkey>) -> Vec<AccountFilter> {
        let mut filters = Self::filters();
        filters.push(AccountFilter::memcmp(Self::OWNER_OFFSET, owner.to_bytes().to_vec()));
        if let Some(market) = market {
            filters.push(AccountFilter::memcmp(
                Self::MARKET_OFFSET,
                market.to_bytes().to_vec(),
            ));
        }
        filters
    }

    pub fn delegate_filter(delegate: &Pubkey) -> AccountFilter {
        AccountFilter::memcmp(Self::DELEGATE_OFFSET, delegate.to_bytes().to_vec())
    }
}

/// Custody pricing limits. Leverage and spreads are in basis points.
#[derive(Debug, Clone, Default, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub struct PricingParams {
    pub trade_spread_min: u64,
    pub trade_spread_max: u64,
    pub swap_spread: u64,
    pub min_init_leverage: u32,
    pub min_init_degen_leverage: u32,
    pub max_init_leverage: u32,
    pub max_init_degen_leverage: u32,
    pub max_leverage: u32,
    pub max_degen_leverage: u32,
    pub min_collateral_usd: u32,
    pub min_degen_collateral_usd: u32,
    pub delay_seconds: i64,
    pub max_utilization: u32,
    pub degen_position_factor: u16,
    pub degen_exposure_factor: u16,
    pub max_position_locked_usd: u64,
    pub max_exposure_usd: u64,
}

impl PricingParams {
    pub const BYTES: usize = 88;
}
