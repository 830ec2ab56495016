//! Account query filters.
//!
//! Program account scans narrow results with data size and byte comparison
//! filters. Comparison bytes come from the codec, so a filter on a field is
//! built from the same encoding the account uses.

use borsh::BorshSerialize;
use serde::{Serialize, Serializer};

use crate::{codec, discriminator::Discriminator, types::CodecError};

/// A filter in the JSON-RPC shape: `{"dataSize": n}` or
/// `{"memcmp": {"offset": n, "bytes": "<base58>"}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum AccountFilter {
    DataSize(u64),
    Memcmp(Memcmp),
}

/// Compare `bytes` against account data starting at `offset`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Memcmp {
    pub offset: usize,
    #[serde(serialize_with = "serialize_base58")]
    pub bytes: Vec<u8>,
}

impl AccountFilter {
    pub fn data_size(len: usize) -> Self {
        Self::DataSize(len as u64)
    }

    pub fn memcmp(offset: usize, bytes: impl Into<Vec<u8>>) -> Self {
        Self::Memcmp(Memcmp {
            offset,
            bytes: bytes.into(),
        })
    }

    /// Match accounts whose field at `offset` encodes to `value`.
    pub fn field<T: BorshSerialize + ?Sized>(offset: usize, value: &T) -> Result<Self, CodecError> {
        Ok(Self::memcmp(offset, codec::encode(value)?))
    }

    /// Match accounts of one Anchor account type.
    pub fn discriminator(discriminator: &Discriminator) -> Self {
        Self::memcmp(0, discriminator.as_bytes().to_vec())
    }

    /// Evaluate the filter against raw account data.
    pub fn matches(&self, data: &[u8]) -> bool {
        match self {
            Self::DataSize(len) => data.len() as u64 == *len,
            Self::Memcmp(Memcmp { offset, bytes }) => offset
                .checked_add(bytes.len())
                .and_then(|end| data.get(*offset..end))
                .is_some_and(|window| window == bytes.as_slice()),
        }
    }
}

fn serialize_base58<S: Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&bs58::encode(bytes).into_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use solana_sdk::pubkey::Pubkey;

    #[test]
    fn test_json_shape() {
        let size = serde_json::to_value(AccountFilter::data_size(252)).unwrap();
        assert_eq!(size, serde_json::json!({ "dataSize": 252 }));

        let owner = Pubkey::new_unique();
        let memcmp = serde_json::to_value(AccountFilter::field(8, &owner).unwrap()).unwrap();
        assert_eq!(
            memcmp,
            serde_json::json!({ "memcmp": { "offset": 8, "bytes": owner.to_string() } })
        );
    }

    #[test]
    fn test_matches() {
        let disc = Discriminator::from_bytes([1, 2, 3, 4, 5, 6, 7, 8]);
        let mut data = disc.as_bytes().to_vec();
        data.extend_from_slice(&42u64.to_le_bytes());

        assert!(AccountFilter::discriminator(&disc).matches(&data));
        assert!(AccountFilter::field(8, &42u64).unwrap().matches(&data));
        assert!(!AccountFilter::field(8, &41u64).unwrap().matches(&data));
        assert!(!AccountFilter::field(12, &42u64).unwrap().matches(&data));
        assert!(!AccountFilter::memcmp(usize::MAX, vec![1]).matches(&data));
        assert!(AccountFilter::data_size(16).matches(&data));
        assert!(!AccountFilter::data_size(17).matches(&data));
    }
}
