//! Borsh payload codec.
//!
//! Values are described by their `BorshSerialize` / `BorshDeserialize`
//! implementations, usually derived on a plain struct whose field order is the
//! wire order. Sizing, writing and reading all run through that one
//! implementation, so [`size_of`] always equals the number of bytes [`write`]
//! produces and [`read`] consumes.
//!
//! Layout summary:
//!
//! | type                   | encoding                                   |
//! |------------------------|--------------------------------------------|
//! | `u8..u128`, `i8..i128` | little endian, two's complement            |
//! | `bool`                 | one byte, `0` or `1`                       |
//! | `String`, `Vec<u8>`    | `u32` LE length, then the raw bytes        |
//! | `Vec<T>`               | `u32` LE count, then each element          |
//! | `Pubkey`, `[T; N]`     | elements back to back, no prefix           |
//! | `Option<T>`            | `0`, or `1` followed by the inner encoding |
//! | struct                 | fields in declaration order, no padding    |
//! | enum                   | one byte variant tag, then the payload     |

use std::io::{self, Read};

use borsh::{BorshDeserialize, BorshSerialize};
use log::trace;

use crate::{discriminator::Discriminator, types::CodecError};

/// Exact encoded length of `value`, computed without allocating the payload.
pub fn size_of<T: BorshSerialize + ?Sized>(value: &T) -> Result<usize, CodecError> {
    borsh::object_length(value).map_err(|e| CodecError::Serialize(e.to_string()))
}

/// Write `value` into `buffer` starting at `offset`.
///
/// Returns the number of bytes written. Capacity is checked up front, so a
/// failed write leaves `buffer` untouched; only `[offset, offset + size_of(value))`
/// is ever modified.
pub fn write<T: BorshSerialize + ?Sized>(
    value: &T,
    buffer: &mut [u8],
    offset: usize,
) -> Result<usize, CodecError> {
    let needed = size_of(value)?;
    let capacity = buffer.len();
    let end = offset
        .checked_add(needed)
        .filter(|end| *end <= capacity)
        .ok_or_else(|| {
            trace!("codec write of {needed} bytes at {offset} overflows {capacity} byte buffer");
            CodecError::BufferOverflow {
                offset,
                needed,
                capacity,
            }
        })?;

    let mut window = &mut buffer[offset..end];
    value
        .serialize(&mut window)
        .map_err(|e| CodecError::Serialize(e.to_string()))?;
    Ok(needed)
}

/// Read a `T` from `buffer` starting at `offset`.
///
/// Returns the value and the number of bytes consumed.
pub fn read<T: BorshDeserialize>(buffer: &[u8], offset: usize) -> Result<(T, usize), CodecError> {
    let len = buffer.len();
    let data = buffer
        .get(offset..)
        .ok_or(CodecError::BufferUnderflow { offset, len })?;

    let mut reader = BoundedReader::new(data);
    match T::deserialize_reader(&mut reader) {
        Ok(value) => Ok((value, reader.position)),
        Err(err) => {
            let at = offset + reader.position;
            trace!("codec read failed at {at} of {len}: {err}");
            if reader.overrun {
                Err(CodecError::BufferUnderflow { offset: at, len })
            } else {
                Err(CodecError::Malformed {
                    offset: at,
                    reason: err.to_string(),
                })
            }
        }
    }
}

/// Encode `value` into a freshly allocated, exactly sized buffer.
pub fn encode<T: BorshSerialize + ?Sized>(value: &T) -> Result<Vec<u8>, CodecError> {
    let mut buffer = vec![0u8; size_of(value)?];
    write(value, &mut buffer, 0)?;
    Ok(buffer)
}

/// Decode a `T` that must span all of `data`.
pub fn decode<T: BorshDeserialize>(data: &[u8]) -> Result<T, CodecError> {
    let (value, consumed) = read(data, 0)?;
    if consumed != data.len() {
        return Err(CodecError::TrailingBytes {
            remaining: data.len() - consumed,
        });
    }
    Ok(value)
}

/// Decode Anchor account data: the 8 byte account discriminator followed by
/// the account body.
pub fn decode_account<T: BorshDeserialize>(
    discriminator: &Discriminator,
    data: &[u8],
) -> Result<T, CodecError> {
    discriminator.check(data)?;
    decode(&data[crate::discriminator::DISCRIMINATOR_LEN..])
}

/// `Read` over a slice that remembers whether a read ran off the end, so a
/// truncated buffer can be told apart from a corrupt one.
struct BoundedReader<'a> {
    data: &'a [u8],
    position: usize,
    overrun: bool,
}

impl<'a> BoundedReader<'a> {
    fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            position: 0,
            overrun: false,
        }
    }

    fn remaining(&self) -> &'a [u8] {
        &self.data[self.position..]
    }
}

impl Read for BoundedReader<'_> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let remaining = self.remaining();
        if remaining.is_empty() && !buf.is_empty() {
            self.overrun = true;
            return Ok(0);
        }
        let n = remaining.len().min(buf.len());
        buf[..n].copy_from_slice(&remaining[..n]);
        self.position += n;
        Ok(n)
    }

    fn read_exact(&mut self, buf: &mut [u8]) -> io::Result<()> {
        let remaining = self.remaining();
        if buf.len() > remaining.len() {
            self.overrun = true;
            return Err(io::Error::from(io::ErrorKind::UnexpectedEof));
        }
        buf.copy_from_slice(&remaining[..buf.len()]);
        self.position += buf.len();
        Ok(())
    }
}
