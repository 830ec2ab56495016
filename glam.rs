//! Glam fund client: fund PDAs and the Drift integration entrypoints.

use borsh::{BorshDeserialize, BorshSerialize};
use solana_sdk::pubkey::Pubkey;

use crate::{
    accounts::AccountRole::{ReadOnly, Writable, WritableSigner},
    address::{associated_token_address, find_program_address},
    config::ClientConfig,
    constants::{rent_sysvar_id, seeds::glam as seeds, spl_token_program_id, system_program_id},
    discriminator::Discriminator,
    instruction::{AccountSlot, InstructionRecord, InstructionSchema},
    types::{AddressError, ClientError, ProgramDerivedAddress},
};

pub const DRIFT_INITIALIZE: InstructionSchema = InstructionSchema {
    name: "drift_initialize",
    discriminator: Discriminator::from_bytes([21, 21, 69, 55, 41, 129, 44, 198]),
    accounts: &[
        AccountSlot::new("fund", ReadOnly),
        AccountSlot::new("treasury", ReadOnly),
        AccountSlot::new("user_stats", Writable),
        AccountSlot::new("user", Writable),
        AccountSlot::new("state", Writable),
        AccountSlot::new("manager", WritableSigner),
        AccountSlot::new("drift_program", ReadOnly),
        AccountSlot::new("rent", ReadOnly),
        AccountSlot::new("system_program", ReadOnly),
    ],
};

pub const DRIFT_DEPOSIT: InstructionSchema = InstructionSchema {
    name: "drift_deposit",
    discriminator: Discriminator::from_bytes([252, 63, 250, 201, 98, 55, 130, 12]),
    accounts: &[
        AccountSlot::new("fund", ReadOnly),
        AccountSlot::new("treasury", ReadOnly),
        AccountSlot::new("user_stats", Writable),
        AccountSlot::new("user", Writable),
        AccountSlot::new("state", Writable),
        AccountSlot::new("treasury_ata", Writable),
        AccountSlot::new("drift_ata", Writable),
        AccountSlot::new("manager", WritableSigner),
        AccountSlot::new("drift_program", ReadOnly),
        AccountSlot::new("token_program", ReadOnly),
    ],
};

/// `trader` is the optional delegate allowed to trade the fund's Drift account.
#[derive(Debug, Clone, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub struct DriftInitializeParams {
    pub trader: Option<Pubkey>,
}

#[derive(Debug, Clone, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub struct DriftDepositParams {
    pub amount: u64,
}

/// Fund address. `created` is the creation key recorded in the fund model.
pub fn fund_pda(
    manager: &Pubkey,
    created: &[u8],
    program_id: &Pubkey,
) -> Result<ProgramDerivedAddress, AddressError> {
    find_program_address(&[seeds::FUND, manager.as_ref(), created], program_id)
}

pub fn treasury_pda(fund: &Pubkey, program_id: &Pubkey) -> Result<ProgramDerivedAddress, AddressError> {
    find_program_address(&[seeds::TREASURY, fund.as_ref()], program_id)
}

pub fn openfunds_pda(fund: &Pubkey, program_id: &Pubkey) -> Result<ProgramDerivedAddress, AddressError> {
    find_program_address(&[seeds::OPENFUNDS, fund.as_ref()], program_id)
}

/// Drift accounts owned by a fund's treasury. Drift derives these itself,
/// so they are supplied by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DriftAccounts {
    pub program: Pubkey,
    pub state: Pubkey,
    pub user: Pubkey,
    pub user_stats: Pubkey,
}

/// Builds Glam instructions for one fund and its manager.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlamFundClient {
    program_id: Pubkey,
    manager: Pubkey,
    fund: Pubkey,
    treasury: ProgramDerivedAddress,
}

impl GlamFundClient {
    /// Requires `glam_program` to be set in `config`.
    pub fn new(config: &ClientConfig, manager: Pubkey, fund: Pubkey) -> Result<Self, ClientError> {
        let program_id = config.glam_program()?;
        Ok(Self {
            program_id,
            manager,
            fund,
            treasury: treasury_pda(&fund, &program_id)?,
        })
    }

    pub fn program_id(&self) -> Pubkey {
        self.program_id
    }

    pub fn fund(&self) -> Pubkey {
        self.fund
    }

    pub fn treasury(&self) -> ProgramDerivedAddress {
        self.treasury
    }

    /// The treasury's token account for `mint` under the classic token program.
    pub fn treasury_ata(&self, mint: &Pubkey) -> Result<Pubkey, AddressError> {
        associated_token_address(&self.treasury.address, mint, &spl_token_program_id())
            .map(|pda| pda.address)
    }

    /// Create the treasury's Drift user, optionally delegating trading to `trader`.
    pub fn drift_initialize(
        &self,
        drift: &DriftAccounts,
        trader: Option<Pubkey>,
    ) -> Result<InstructionRecord, ClientError> {
        DRIFT_INITIALIZE.build(
            self.program_id,
            &[
                self.fund,
                self.treasury.address,
                drift.user_stats,
                drift.user,
                drift.state,
                self.manager,
                drift.program,
                rent_sysvar_id(),
                system_program_id(),
            ],
            &DriftInitializeParams { trader },
        )
    }

    /// Move `amount` of `mint` from the treasury into the Drift spot market vault.
    pub fn drift_deposit(
        &self,
        drift: &DriftAccounts,
        mint: &Pubkey,
        drift_vault: Pubkey,
        amount: u64,
    ) -> Result<InstructionRecord, ClientError> {
        DRIFT_DEPOSIT.build(
            self.program_id,
            &[
                self.fund,
                self.treasury.address,
                drift.user_stats,
                drift.user,
                drift.state,
                self.treasury_ata(mint)?,
                drift_vault,
                self.manager,
                drift.program,
                spl_token_program_id(),
            ],
            &DriftDepositParams { amount },
        )
    }
}
