//! Kamino lending client.
//!
//! PDA helpers for the lending market, reserve vaults, user metadata and
//! referrer accounts, instruction builders for the account setup and
//! reserve refresh flow, and the `UserMetadata` account layout.

use borsh::{BorshDeserialize, BorshSerialize};
use solana_sdk::pubkey::Pubkey;

use crate::{
    accounts::AccountRole::{ReadOnly, ReadOnlySigner, Writable, WritableSigner},
    address::{find_program_address, verify_program_address},
    codec,
    config::ClientConfig,
    constants::{rent_sysvar_id, seeds::kamino as seeds, system_program_id},
    discriminator::{Discriminator, DISCRIMINATOR_LEN},
    filters::AccountFilter,
    instruction::{AccountSlot, InstructionRecord, InstructionSchema},
    types::{AddressError, ClientError, CodecError, ProgramDerivedAddress},
};

pub const INIT_USER_METADATA: InstructionSchema = InstructionSchema {
    name: "init_user_metadata",
    discriminator: Discriminator::from_bytes([117, 169, 176, 69, 197, 23, 15, 162]),
    accounts: &[
        AccountSlot::new("owner", ReadOnlySigner),
        AccountSlot::new("fee_payer", WritableSigner),
        AccountSlot::new("user_metadata", Writable),
        AccountSlot::new("referrer_user_metadata", ReadOnly),
        AccountSlot::new("rent", ReadOnly),
        AccountSlot::new("system_program", ReadOnly),
    ],
};

pub const REFRESH_RESERVE: InstructionSchema = InstructionSchema {
    name: "refresh_reserve",
    discriminator: Discriminator::from_bytes([2, 218, 138, 235, 79, 201, 25, 102]),
    accounts: &[
        AccountSlot::new("reserve", Writable),
        AccountSlot::new("lending_market", ReadOnly),
        AccountSlot::new("pyth_oracle", ReadOnly),
        AccountSlot::new("switchboard_price_oracle", ReadOnly),
        AccountSlot::new("switchboard_twap_oracle", ReadOnly),
        AccountSlot::new("scope_prices", ReadOnly),
    ],
};

/// Refreshes every reserve passed as remaining accounts.
pub const REFRESH_RESERVES_BATCH: InstructionSchema = InstructionSchema {
    name: "refresh_reserves_batch",
    discriminator: Discriminator::from_bytes([144, 110, 26, 103, 162, 204, 252, 147]),
    accounts: &[],
};

pub const INIT_OBLIGATION: InstructionSchema = InstructionSchema {
    name: "init_obligation",
    discriminator: Discriminator::from_bytes([251, 10, 231, 76, 27, 11, 159, 96]),
    accounts: &[
        AccountSlot::new("obligation_owner", ReadOnlySigner),
        AccountSlot::new("fee_payer", WritableSigner),
        AccountSlot::new("obligation", Writable),
        AccountSlot::new("lending_market", ReadOnly),
        AccountSlot::new("seed1_account", ReadOnly),
        AccountSlot::new("seed2_account", ReadOnly),
        AccountSlot::new("owner_user_metadata", ReadOnly),
        AccountSlot::new("rent", ReadOnly),
        AccountSlot::new("system_program", ReadOnly),
    ],
};

pub const INIT_REFERRER_STATE_AND_SHORT_URL: InstructionSchema = InstructionSchema {
    name: "init_referrer_state_and_short_url",
    discriminator: Discriminator::from_bytes([165, 19, 25, 127, 100, 55, 31, 90]),
    accounts: &[
        AccountSlot::new("referrer", WritableSigner),
        AccountSlot::new("referrer_state", Writable),
        AccountSlot::new("referrer_short_url", Writable),
        AccountSlot::new("referrer_user_metadata", ReadOnly),
        AccountSlot::new("rent", ReadOnly),
        AccountSlot::new("system_program", ReadOnly),
    ],
};

pub const UPDATE_LENDING_MARKET: InstructionSchema = InstructionSchema {
    name: "update_lending_market",
    discriminator: Discriminator::from_bytes([209, 157, 53, 210, 97, 180, 31, 45]),
    accounts: &[
        AccountSlot::new("lending_market_owner", ReadOnlySigner),
        AccountSlot::new("lending_market", Writable),
    ],
};

/// Length of the value blob carried by `update_lending_market`.
pub const LENDING_MARKET_VALUE_LEN: usize = 72;

#[derive(Debug, Clone, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub struct InitUserMetadataParams {
    pub user_lookup_table: Pubkey,
}

#[derive(Debug, Clone, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub struct RefreshReservesBatchParams {
    pub skip_price_updates: bool,
}

/// `tag` selects the obligation kind (0 is a vanilla obligation) and `id`
/// lets one owner hold several obligations of the same kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub struct InitObligationArgs {
    pub tag: u8,
    pub id: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub struct InitObligationParams {
    pub args: InitObligationArgs,
}

#[derive(Debug, Clone, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub struct InitReferrerStateAndShortUrlParams {
    pub short_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub struct UpdateLendingMarketParams {
    pub mode: u64,
    pub value: [u8; LENDING_MARKET_VALUE_LEN],
}

/// Derive the lending market authority.
pub fn lending_market_auth_pda(
    lending_market: &Pubkey,
    program_id: &Pubkey,
) -> Result<ProgramDerivedAddress, AddressError> {
    find_program_address(&[seeds::LENDING_MARKET_AUTH, lending_market.as_ref()], program_id)
}

pub fn reserve_liq_supply_pda(
    lending_market: &Pubkey,
    mint: &Pubkey,
    program_id: &Pubkey,
) -> Result<ProgramDerivedAddress, AddressError> {
    reserve_pda(seeds::RESERVE_LIQ_SUPPLY, lending_market, mint, program_id)
}

pub fn reserve_fee_vault_pda(
    lending_market: &Pubkey,
    mint: &Pubkey,
    program_id: &Pubkey,
) -> Result<ProgramDerivedAddress, AddressError> {
    reserve_pda(seeds::FEE_RECEIVER, lending_market, mint, program_id)
}

pub fn reserve_collateral_mint_pda(
    lending_market: &Pubkey,
    mint: &Pubkey,
    program_id: &Pubkey,
) -> Result<ProgramDerivedAddress, AddressError> {
    reserve_pda(seeds::RESERVE_COLL_MINT, lending_market, mint, program_id)
}

pub fn reserve_collateral_supply_pda(
    lending_market: &Pubkey,
    mint: &Pubkey,
    program_id: &Pubkey,
) -> Result<ProgramDerivedAddress, AddressError> {
    reserve_pda(seeds::RESERVE_COLL_SUPPLY, lending_market, mint, program_id)
}

fn reserve_pda(
    seed: &[u8],
    lending_market: &Pubkey,
    mint: &Pubkey,
    program_id: &Pubkey,
) -> Result<ProgramDerivedAddress, AddressError> {
    find_program_address(&[seed, lending_market.as_ref(), mint.as_ref()], program_id)
}

pub fn user_metadata_pda(
    user: &Pubkey,
    program_id: &Pubkey,
) -> Result<ProgramDerivedAddress, AddressError> {
    find_program_address(&[seeds::USER_META, user.as_ref()], program_id)
}

/// Referrer token state for a reserve. There is none without a referrer, so
/// the default key yields `None`.
pub fn referrer_token_state_pda(
    referrer: &Pubkey,
    reserve: &Pubkey,
    program_id: &Pubkey,
) -> Result<Option<ProgramDerivedAddress>, AddressError> {
    if *referrer == Pubkey::default() {
        return Ok(None);
    }
    find_program_address(
        &[seeds::REFERRER_ACC, referrer.as_ref(), reserve.as_ref()],
        program_id,
    )
    .map(Some)
}

pub fn referrer_state_pda(
    referrer: &Pubkey,
    program_id: &Pubkey,
) -> Result<ProgramDerivedAddress, AddressError> {
    find_program_address(&[seeds::REFERRER_STATE, referrer.as_ref()], program_id)
}

/// The short url is used as raw ASCII bytes, so it is limited to 32 characters.
pub fn short_url_pda(
    short_url: &str,
    program_id: &Pubkey,
) -> Result<ProgramDerivedAddress, AddressError> {
    find_program_address(&[seeds::SHORT_URL, short_url.as_bytes()], program_id)
}

/// Obligation address: `[tag, id, owner, market, seed1, seed2]`. Vanilla
/// obligations use the system program for both seed accounts.
pub fn obligation_pda(
    args: InitObligationArgs,
    owner: &Pubkey,
    lending_market: &Pubkey,
    seed1: &Pubkey,
    seed2: &Pubkey,
    program_id: &Pubkey,
) -> Result<ProgramDerivedAddress, AddressError> {
    find_program_address(
        &[
            &[args.tag],
            &[args.id],
            owner.as_ref(),
            lending_market.as_ref(),
            seed1.as_ref(),
            seed2.as_ref(),
        ],
        program_id,
    )
}

/// Event authority of an Anchor program that emits CPI events.
pub fn event_authority_pda(program_id: &Pubkey) -> Result<ProgramDerivedAddress, AddressError> {
    find_program_address(&[seeds::EVENT_AUTHORITY], program_id)
}

/// Builds Kamino lending instructions for one owner paying their own fees.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KaminoLendClient {
    program_id: Pubkey,
    scope_prices: Pubkey,
    owner: Pubkey,
    fee_payer: Pubkey,
    owner_metadata: ProgramDerivedAddress,
}

impl KaminoLendClient {
    pub fn new(config: &ClientConfig, owner: Pubkey) -> Result<Self, ClientError> {
        Self::with_fee_payer(config, owner, owner)
    }

    pub fn with_fee_payer(
        config: &ClientConfig,
        owner: Pubkey,
        fee_payer: Pubkey,
    ) -> Result<Self, ClientError> {
        let program_id = config.kamino_lend_program;
        Ok(Self {
            program_id,
            scope_prices: config.kamino_scope_prices,
            owner,
            fee_payer,
            owner_metadata: user_metadata_pda(&owner, &program_id)?,
        })
    }

    pub fn program_id(&self) -> Pubkey {
        self.program_id
    }

    pub fn owner(&self) -> Pubkey {
        self.owner
    }

    /// The owner's `UserMetadata` account.
    pub fn owner_metadata(&self) -> ProgramDerivedAddress {
        self.owner_metadata
    }

    /// Create the owner's metadata account.
    ///
    /// # Arguments
    ///
    /// * `referrer_user_metadata` - The referrer's metadata account, or `None`
    /// * `user_lookup_table` - Address lookup table recorded for the owner
    pub fn init_user_metadata(
        &self,
        referrer_user_metadata: Option<Pubkey>,
        user_lookup_table: Pubkey,
    ) -> Result<InstructionRecord, ClientError> {
        INIT_USER_METADATA.build(
            self.program_id,
            &[
                self.owner,
                self.fee_payer,
                self.owner_metadata.address,
                self.optional(referrer_user_metadata),
                rent_sysvar_id(),
                system_program_id(),
            ],
            &InitUserMetadataParams { user_lookup_table },
        )
    }

    /// Refresh a reserve priced through Scope; the unused Pyth and
    /// Switchboard slots are filled with the program id.
    pub fn refresh_reserve(
        &self,
        lending_market: Pubkey,
        reserve: Pubkey,
    ) -> Result<InstructionRecord, ClientError> {
        REFRESH_RESERVE.build(
            self.program_id,
            &[
                reserve,
                lending_market,
                self.program_id,
                self.program_id,
                self.program_id,
                self.scope_prices,
            ],
            &(),
        )
    }

    /// Batch refresh. Reserves and their markets go in the remaining
    /// accounts, appended by the caller.
    pub fn refresh_reserves_batch(
        &self,
        skip_price_updates: bool,
    ) -> Result<InstructionRecord, ClientError> {
        REFRESH_RESERVES_BATCH.build(
            self.program_id,
            &[],
            &RefreshReservesBatchParams { skip_price_updates },
        )
    }

    /// Create an obligation. Returns the instruction and the obligation address.
    pub fn init_obligation(
        &self,
        lending_market: Pubkey,
        args: InitObligationArgs,
    ) -> Result<(InstructionRecord, Pubkey), ClientError> {
        let system_program = system_program_id();
        let obligation = obligation_pda(
            args,
            &self.owner,
            &lending_market,
            &system_program,
            &system_program,
            &self.program_id,
        )?
        .address;
        let ix = INIT_OBLIGATION.build(
            self.program_id,
            &[
                self.owner,
                self.fee_payer,
                obligation,
                lending_market,
                system_program,
                system_program,
                self.owner_metadata.address,
                rent_sysvar_id(),
                system_program,
            ],
            &InitObligationParams { args },
        )?;
        Ok((ix, obligation))
    }

    /// Register the owner as a referrer under `short_url`.
    pub fn init_referrer_state_and_short_url(
        &self,
        short_url: &str,
    ) -> Result<InstructionRecord, ClientError> {
        let referrer_state = referrer_state_pda(&self.owner, &self.program_id)?;
        let short_url_account = short_url_pda(short_url, &self.program_id)?;
        INIT_REFERRER_STATE_AND_SHORT_URL.build(
            self.program_id,
            &[
                self.owner,
                referrer_state.address,
                short_url_account.address,
                self.owner_metadata.address,
                rent_sysvar_id(),
                system_program_id(),
            ],
            &InitReferrerStateAndShortUrlParams {
                short_url: short_url.to_string(),
            },
        )
    }

    /// Update one lending market setting. `value` is the setting's Borsh
    /// encoding, zero padded to 72 bytes.
    pub fn update_lending_market(
        &self,
        lending_market: Pubkey,
        mode: u64,
        value: &[u8],
    ) -> Result<InstructionRecord, ClientError> {
        if value.len() > LENDING_MARKET_VALUE_LEN {
            return Err(CodecError::BufferOverflow {
                offset: 0,
                needed: value.len(),
                capacity: LENDING_MARKET_VALUE_LEN,
            }
            .into());
        }
        let mut padded = [0u8; LENDING_MARKET_VALUE_LEN];
        padded[..value.len()].copy_from_slice(value);
        UPDATE_LENDING_MARKET.build(
            self.program_id,
            &[self.owner, lending_market],
            &UpdateLendingMarketParams {
                mode,
                value: padded,
            },
        )
    }

    // Anchor passes the program id in place of an absent optional account.
    fn optional(&self, account: Option<Pubkey>) -> Pubkey {
        account.unwrap_or(self.program_id)
    }
}

/// Per-user metadata account.
#[derive(Debug, Clone, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub struct UserMetadata {
    pub referrer: Pubkey,
    pub bump: u64,
    pub user_lookup_table: Pubkey,
    pub owner: Pubkey,
    pub padding1: [u64; 51],
    pub padding2: [u64; 64],
}

impl UserMetadata {
    pub const BYTES: usize = 1032;
    pub const REFERRER_OFFSET: usize = DISCRIMINATOR_LEN;
    pub const BUMP_OFFSET: usize = Self::REFERRER_OFFSET + 32;
    pub const USER_LOOKUP_TABLE_OFFSET: usize = Self::BUMP_OFFSET + 8;
    pub const OWNER_OFFSET: usize = Self::USER_LOOKUP_TABLE_OFFSET + 32;
    pub const PADDING1_OFFSET: usize = Self::OWNER_OFFSET + 32;
    pub const PADDING2_OFFSET: usize = Self::PADDING1_OFFSET + 51 * 8;

    pub const DISCRIMINATOR: Discriminator =
        Discriminator::from_bytes([157, 214, 220, 235, 98, 135, 171, 28]);

    pub fn new(owner: Pubkey, referrer: Pubkey, user_lookup_table: Pubkey, bump: u8) -> Self {
        Self {
            referrer,
            bump: bump.into(),
            user_lookup_table,
            owner,
            padding1: [0; 51],
            padding2: [0; 64],
        }
    }

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

    /// Check that `address` is this account's PDA for the recorded bump.
    pub fn verify_address(&self, address: &Pubkey, program_id: &Pubkey) -> Result<(), ClientError> {
        let bump = u8::try_from(self.bump).map_err(|_| CodecError::Malformed {
            offset: Self::BUMP_OFFSET,
            reason: format!("bump {} does not fit in a byte", self.bump),
        })?;
        verify_program_address(address, &[seeds::USER_META, self.owner.as_ref()], bump, program_id)?;
        Ok(())
    }

    pub fn size_filter() -> AccountFilter {
        AccountFilter::data_size(Self::BYTES)
    }

    pub fn discriminator_filter() -> AccountFilter {
        AccountFilter::discriminator(&Self::DISCRIMINATOR)
    }

    pub fn owner_filter(owner: &Pubkey) -> AccountFilter {
        AccountFilter::memcmp(Self::OWNER_OFFSET, owner.to_bytes().to_vec())
    }

    pub fn referrer_filter(referrer: &Pubkey) -> AccountFilter {
        AccountFilter::memcmp(Self::REFERRER_OFFSET, referrer.to_bytes().to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::accounts::{AccountRole, RoleMeta};

    fn client() -> KaminoLendClient {
        KaminoLendClient::new(&ClientConfig::default(), Pubkey::new_unique()).unwrap()
    }

    #[test]
    fn test_discriminators_match_instruction_names() {
        for schema in [
            INIT_USER_METADATA,
            REFRESH_RESERVE,
            REFRESH_RESERVES_BATCH,
            INIT_OBLIGATION,
            INIT_REFERRER_STATE_AND_SHORT_URL,
            UPDATE_LENDING_MARKET,
        ] {
            assert_eq!(
                schema.discriminator,
                Discriminator::instruction(schema.name),
                "{}",
                schema.name
            );
        }
        assert_eq!(UserMetadata::DISCRIMINATOR, Discriminator::account("UserMetadata"));
    }

    #[test]
    fn test_pdas_match_sdk() {
        let program = ClientConfig::default().kamino_lend_program;
        let market = Pubkey::new_unique();
        let mint = Pubkey::new_unique();

        let (expected, bump) =
            Pubkey::find_program_address(&[b"lma", market.as_ref()], &program);
        let pda = lending_market_auth_pda(&market, &program).unwrap();
        assert_eq!((pda.address, pda.bump), (expected, bump));

        let (expected, _) = Pubkey::find_program_address(
            &[b"reserve_coll_supply", market.as_ref(), mint.as_ref()],
            &program,
        );
        assert_eq!(
            reserve_collateral_supply_pda(&market, &mint, &program).unwrap().address,
            expected
        );
        assert_ne!(
            reserve_liq_supply_pda(&market, &mint, &program).unwrap(),
            reserve_fee_vault_pda(&market, &mint, &program).unwrap()
        );
    }

    #[test]
    fn test_no_referrer_has_no_token_state() {
        let program = Pubkey::new_unique();
        let reserve = Pubkey::new_unique();
        assert_eq!(
            referrer_token_state_pda(&Pubkey::default(), &reserve, &program).unwrap(),
            None
        );
        assert!(referrer_token_state_pda(&Pubkey::new_unique(), &reserve, &program)
            .unwrap()
            .is_some());
    }

    #[test]
    fn test_short_url_length_is_bounded() {
        let program = Pubkey::new_unique();
        assert!(short_url_pda("kamino", &program).is_ok());
        assert!(matches!(
            short_url_pda(&"x".repeat(33), &program),
            Err(AddressError::MaxSeedLengthExceeded { index: 1, len: 33, .. })
        ));
    }

    #[test]
    fn test_init_user_metadata_layout() {
        let client = client();
        let table = Pubkey::new_unique();
        let ix = client.init_user_metadata(None, table).unwrap();

        assert_eq!(ix.program_id(), client.program_id());
        assert_eq!(ix.accounts().len(), 6);
        assert_eq!(ix.accounts()[0], RoleMeta::readonly_signer(client.owner()));
        assert_eq!(ix.accounts()[1].role, AccountRole::WritableSigner);
        assert_eq!(ix.accounts()[2], RoleMeta::writable(client.owner_metadata().address));
        assert_eq!(ix.accounts()[3], RoleMeta::readonly(client.program_id()));

        let mut expected = INIT_USER_METADATA.discriminator.as_bytes().to_vec();
        expected.extend_from_slice(table.as_ref());
        assert_eq!(ix.data(), expected.as_slice());
    }

    #[test]
    fn test_refresh_reserve_uses_scope_prices() {
        let client = client();
        let ix = client
            .refresh_reserve(Pubkey::new_unique(), Pubkey::new_unique())
            .unwrap();
        assert_eq!(ix.data(), REFRESH_RESERVE.discriminator.as_bytes());
        assert_eq!(
            ix.accounts()[REFRESH_RESERVE.position("scope_prices").unwrap()].pubkey,
            ClientConfig::default().kamino_scope_prices
        );
        assert_eq!(ix.accounts()[2].pubkey, client.program_id());
    }

    #[test]
    fn test_refresh_reserves_batch_payload() {
        let ix = client().refresh_reserves_batch(true).unwrap();
        assert!(ix.accounts().is_empty());
        assert_eq!(ix.data(), &[144, 110, 26, 103, 162, 204, 252, 147, 1]);
    }

    #[test]
    fn test_init_obligation_derives_obligation() {
        let client = client();
        let market = Pubkey::new_unique();
        let (ix, obligation) = client
            .init_obligation(market, InitObligationArgs::default())
            .unwrap();

        let system = system_program_id();
        let (expected, _) = Pubkey::find_program_address(
            &[
                &[0u8],
                &[0u8],
                client.owner().as_ref(),
                market.as_ref(),
                system.as_ref(),
                system.as_ref(),
            ],
            &client.program_id(),
        );
        assert_eq!(obligation, expected);
        assert_eq!(ix.accounts()[2], RoleMeta::writable(obligation));
        assert_eq!(
            INIT_OBLIGATION
                .decode_params::<InitObligationParams>(ix.data())
                .unwrap()
                .args,
            InitObligationArgs { tag: 0, id: 0 }
        );
    }

    #[test]
    fn test_init_referrer_state_encodes_short_url() {
        let ix = client().init_referrer_state_and_short_url("abc").unwrap();
        assert_eq!(&ix.data()[8..], &[3, 0, 0, 0, b'a', b'b', b'c']);
    }

    #[test]
    fn test_update_lending_market_pads_value() {
        let client = client();
        let ix = client
            .update_lending_market(Pubkey::new_unique(), 4, &[1, 2])
            .unwrap();
        assert_eq!(ix.data().len(), 8 + 8 + LENDING_MARKET_VALUE_LEN);
        let params = UPDATE_LENDING_MARKET
            .decode_params::<UpdateLendingMarketParams>(ix.data())
            .unwrap();
        assert_eq!(params.mode, 4);
        assert_eq!(&params.value[..3], &[1, 2, 0]);

        assert!(matches!(
            client.update_lending_market(Pubkey::new_unique(), 4, &[0; 73]),
            Err(ClientError::Codec(CodecError::BufferOverflow { .. }))
        ));
    }

    #[test]
    fn test_user_metadata_account_round_trip() {
        let program = Pubkey::new_unique();
        let owner = Pubkey::new_unique();
        let pda = user_metadata_pda(&owner, &program).unwrap();
        let metadata = UserMetadata::new(owner, Pubkey::new_unique(), Pubkey::new_unique(), pda.bump);

        let data = metadata.to_account_data().unwrap();
        assert_eq!(data.len(), UserMetadata::BYTES);
        assert_eq!(&data[UserMetadata::OWNER_OFFSET..][..32], owner.as_ref());
        assert_eq!(data[UserMetadata::BUMP_OFFSET], pda.bump);
        assert_eq!(UserMetadata::PADDING2_OFFSET + 64 * 8, UserMetadata::BYTES);

        assert_eq!(UserMetadata::read(&data).unwrap(), metadata);
        assert!(metadata.verify_address(&pda.address, &program).is_ok());

        assert!(UserMetadata::size_filter().matches(&data));
        assert!(UserMetadata::discriminator_filter().matches(&data));
        assert!(UserMetadata::owner_filter(&owner).matches(&data));
        assert!(!UserMetadata::referrer_filter(&owner).matches(&data));
    }

    #[test]
    fn test_user_metadata_rejects_truncated_data() {
        let data = UserMetadata::new(
            Pubkey::new_unique(),
            Pubkey::default(),
            Pubkey::default(),
            255,
        )
        .to_account_data()
        .unwrap();
        assert!(matches!(
            UserMetadata::read(&data[..UserMetadata::BYTES - 1]),
            Err(CodecError::BufferUnderflow { .. })
        ));
    }
}
