//! Instruction assembly.
//!
//! An instruction payload is `discriminator (8 bytes) || borsh(params)`. The
//! account list is taken verbatim from the caller; ordering is dictated by the
//! target program and is neither checked nor rearranged here.

use borsh::{BorshDeserialize, BorshSerialize};
use solana_sdk::{
    instruction::{AccountMeta, Instruction},
    pubkey::Pubkey,
};

use crate::{
    accounts::{AccountRole, RoleMeta},
    codec,
    discriminator::{Discriminator, DISCRIMINATOR_LEN},
    types::{ClientError, CodecError},
};

/// A fully assembled instruction: target program, ordered accounts and payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstructionRecord {
    program: RoleMeta,
    accounts: Vec<RoleMeta>,
    data: Vec<u8>,
}

impl InstructionRecord {
    pub fn program(&self) -> &RoleMeta {
        &self.program
    }

    pub fn program_id(&self) -> Pubkey {
        self.program.pubkey
    }

    pub fn accounts(&self) -> &[RoleMeta] {
        &self.accounts
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// The discriminator at the head of the payload.
    pub fn discriminator(&self) -> Result<Discriminator, CodecError> {
        Discriminator::read(&self.data, 0)
    }

    /// Decode the parameter struct, checking the discriminator first.
    pub fn params<T: BorshDeserialize>(&self, expected: &Discriminator) -> Result<T, CodecError> {
        decode_instruction_data(expected, &self.data)
    }

    pub fn into_instruction(self) -> Instruction {
        self.into()
    }
}

impl From<InstructionRecord> for Instruction {
    fn from(record: InstructionRecord) -> Self {
        Instruction {
            program_id: record.program.pubkey,
            accounts: record.accounts.iter().map(AccountMeta::from).collect(),
            data: record.data,
        }
    }
}

/// Concatenate `discriminator` and an already encoded parameter payload.
pub fn assemble(
    program_id: Pubkey,
    accounts: Vec<RoleMeta>,
    discriminator: &Discriminator,
    encoded_params: &[u8],
) -> InstructionRecord {
    let mut data = Vec::with_capacity(DISCRIMINATOR_LEN + encoded_params.len());
    data.extend_from_slice(discriminator.as_bytes());
    data.extend_from_slice(encoded_params);

    InstructionRecord {
        program: RoleMeta::invoked(program_id),
        accounts,
        data,
    }
}

/// Encode `params` behind `discriminator` into an exactly sized payload and
/// assemble the instruction.
pub fn encode_instruction<T: BorshSerialize + ?Sized>(
    program_id: Pubkey,
    accounts: Vec<RoleMeta>,
    discriminator: &Discriminator,
    params: &T,
) -> Result<InstructionRecord, CodecError> {
    let mut data = vec![0u8; DISCRIMINATOR_LEN + codec::size_of(params)?];
    let mut i = discriminator.write(&mut data, 0)?;
    i += codec::write(params, &mut data, i)?;
    debug_assert_eq!(i, data.len());

    Ok(InstructionRecord {
        program: RoleMeta::invoked(program_id),
        accounts,
        data,
    })
}

/// Parse an instruction payload back into its parameter struct.
pub fn decode_instruction_data<T: BorshDeserialize>(
    expected: &Discriminator,
    data: &[u8],
) -> Result<T, CodecError> {
    expected.check(data)?;
    codec::decode(&data[DISCRIMINATOR_LEN..])
}

/// One named position in an instruction's account list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccountSlot {
    pub name: &'static str,
    pub role: AccountRole,
}

impl AccountSlot {
    pub const fn new(name: &'static str, role: AccountRole) -> Self {
        Self { name, role }
    }
}

/// Static description of one instruction: its discriminator and the role of
/// each account, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InstructionSchema {
    pub name: &'static str,
    pub discriminator: Discriminator,
    pub accounts: &'static [AccountSlot],
}

impl InstructionSchema {
    /// Pair `keys` with the declared slots and encode `params`.
    ///
    /// `keys` must have exactly one entry per slot.
    pub fn build<T: BorshSerialize + ?Sized>(
        &self,
        program_id: Pubkey,
        keys: &[Pubkey],
        params: &T,
    ) -> Result<InstructionRecord, ClientError> {
        if keys.len() != self.accounts.len() {
            return Err(ClientError::AccountCountMismatch {
                instruction: self.name,
                expected: self.accounts.len(),
                actual: keys.len(),
            });
        }
        let accounts = self
            .accounts
            .iter()
            .zip(keys)
            .map(|(slot, key)| slot.role.meta(*key))
            .collect();
        Ok(encode_instruction(
            program_id,
            accounts,
            &self.discriminator,
            params,
        )?)
    }

    /// Decode the parameters of a payload built from this schema.
    pub fn decode_params<T: BorshDeserialize>(&self, data: &[u8]) -> Result<T, CodecError> {
        decode_instruction_data(&self.discriminator, data)
    }

    /// Index of the slot called `name`.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.accounts.iter().position(|slot| slot.name == name)
    }
}
