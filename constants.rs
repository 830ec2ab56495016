//! Hardcoded program ids and seed literals.
//!
//! Seed literals are part of each program's external interface and must match
//! byte for byte.

use solana_sdk::{pubkey, pubkey::Pubkey};

/// Kamino Lending program ID (mainnet)
pub const KAMINO_LEND_PROGRAM_ID: Pubkey = pubkey!("KLend2g3cP87fffoy8q1mQqGKjrxjC8boSyAYavgmjD");

/// Kamino Scope prices account (mainnet)
pub const KAMINO_SCOPE_PRICES: Pubkey = pubkey!("3NJYftD5sjVfxSnUdZ1wVML8f3aC6mp1CXCL6L7TnU8C");

/// Kamino Farms program ID (mainnet)
pub const KAMINO_FARMS_PROGRAM_ID: Pubkey = pubkey!("FarmsPZpWu9i7Kky8tPN37rs2TpmMrAZrC7S7vJa91Hr");

/// Kamino Vaults program ID (mainnet)
pub const KAMINO_VAULTS_PROGRAM_ID: Pubkey = pubkey!("KvauGMspG5k6rtzrqqn7WNn3oZdyKqLKwK2XWQ8FLjd");

/// System program ID
pub const SYSTEM_PROGRAM_ID: Pubkey = pubkey!("11111111111111111111111111111111");

/// SPL Token program ID
pub const SPL_TOKEN_PROGRAM_ID: Pubkey = pubkey!("TokenkegQfeZyiNwAJbNbGKPFXCWuBvf9Ss623VQ5DA");

/// Rent sysvar
pub const RENT_SYSVAR_ID: Pubkey = pubkey!("SysvarRent111111111111111111111111111111111");

/// Seed literals, grouped by program.
pub mod seeds {
    pub mod kamino {
        pub const LENDING_MARKET_AUTH: &[u8] = b"lma";
        pub const RESERVE_LIQ_SUPPLY: &[u8] = b"reserve_liq_supply";
        pub const FEE_RECEIVER: &[u8] = b"fee_receiver";
        pub const RESERVE_COLL_MINT: &[u8] = b"reserve_coll_mint";
        pub const RESERVE_COLL_SUPPLY: &[u8] = b"reserve_coll_supply";
        pub const USER_META: &[u8] = b"user_meta";
        pub const REFERRER_ACC: &[u8] = b"referrer_acc";
        pub const REFERRER_STATE: &[u8] = b"ref_state";
        pub const SHORT_URL: &[u8] = b"short_url";
        pub const EVENT_AUTHORITY: &[u8] = b"__event_authority";
    }

    pub mod glam {
        pub const FUND: &[u8] = b"fund";
        pub const TREASURY: &[u8] = b"treasury";
        pub const OPENFUNDS: &[u8] = b"openfunds";
    }
}

/// Get the Kamino Lending program ID
pub fn kamino_lend_program_id() -> Pubkey {
    KAMINO_LEND_PROGRAM_ID
}

/// Get the System program ID
pub fn system_program_id() -> Pubkey {
    SYSTEM_PROGRAM_ID
}

/// Get the SPL Token program ID
pub fn spl_token_program_id() -> Pubkey {
    SPL_TOKEN_PROGRAM_ID
}

/// Get the Token-2022 program ID
pub fn token_2022_program_id() -> Pubkey {
    spl_token_2022::id()
}

/// Get the Associated Token Account program ID
pub fn associated_token_program_id() -> Pubkey {
    spl_associated_token_account::id()
}

/// Get the rent sysvar
pub fn rent_sysvar_id() -> Pubkey {
    RENT_SYSVAR_ID
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_well_known_ids_match_sdk() {
        assert_eq!(system_program_id(), solana_sdk::system_program::id());
        assert_eq!(rent_sysvar_id(), solana_sdk::sysvar::rent::id());
        assert_eq!(
            token_2022_program_id().to_string(),
            "TokenzQdBNbLqP5VEhdkAS6EPFLC1PHnBqCXEpPxuEb"
        );
    }

    #[test]
    fn test_seed_literals_fit_seed_limit() {
        for seed in [
            seeds::kamino::RESERVE_LIQ_SUPPLY,
            seeds::kamino::RESERVE_COLL_SUPPLY,
            seeds::kamino::EVENT_AUTHORITY,
            seeds::glam::OPENFUNDS,
        ] {
            assert!(seed.len() <= crate::address::MAX_SEED_LEN);
        }
    }
}
