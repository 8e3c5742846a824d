//! Base-128 varints and the length-delimited runs built on them.

use std::convert::TryFrom;

use crate::error::{Error, Result, VarIntFault};

/// The longest a varint holding a `u64` can be.
pub const MAX_VARINT_LEN: usize = 10;

/// A base-128 varint: 7 bits per byte, least-significant group first, with the high bit set on
/// every byte except the last.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct VarInt {
    n: [u8; MAX_VARINT_LEN],
    len: u8,
}

impl VarInt {
    pub fn from_u64(mut i: u64) -> VarInt {
        let mut n = [0u8; MAX_VARINT_LEN];
        let mut len = 0;
        loop {
            let group = (i & 0x7F) as u8;
            i >>= 7;
            if i == 0 {
                n[len] = group;
                len += 1;
                break;
            }
            n[len] = group | 0x80;
            len += 1;
        }
        VarInt { n, len: len as u8 }
    }

    pub fn to_u64(self) -> u64 {
        self.as_bytes()
            .iter()
            .enumerate()
            .fold(0u64, |acc, (i, b)| acc | (((b & 0x7F) as u64) << (7 * i)))
    }

    pub fn len(&self) -> usize {
        self.len as usize
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.n[..self.len as usize]
    }

    pub fn write(&self, buf: &mut Vec<u8>) {
        buf.extend_from_slice(self.as_bytes());
    }

    /// Read a varint off the front of `buf`, advancing it. On failure, `buf` is left untouched.
    pub fn read(buf: &mut &[u8]) -> Result<VarInt> {
        let mut n = [0u8; MAX_VARINT_LEN];
        for (i, &b) in buf.iter().take(MAX_VARINT_LEN).enumerate() {
            n[i] = b;
            if b & 0x80 == 0 {
                // The 10th byte only has room for bit 63.
                if i == MAX_VARINT_LEN - 1 && b > 1 {
                    return Err(Error::MalformedVarint(VarIntFault::Overlong));
                }
                *buf = &buf[i + 1..];
                return Ok(VarInt {
                    n,
                    len: (i + 1) as u8,
                });
            }
        }
        if buf.len() >= MAX_VARINT_LEN {
            Err(Error::MalformedVarint(VarIntFault::Overlong))
        } else {
            Err(Error::MalformedVarint(VarIntFault::Truncated))
        }
    }
}

impl From<u64> for VarInt {
    fn from(n: u64) -> Self {
        VarInt::from_u64(n)
    }
}

impl From<VarInt> for u64 {
    fn from(v: VarInt) -> u64 {
        v.to_u64()
    }
}

/// Encode a value as a varint.
pub fn encode_varint(v: u64) -> VarInt {
    VarInt::from_u64(v)
}

/// Decode the varint starting at `offset`, returning the value and the number of bytes it used.
pub fn decode_varint(buf: &[u8], offset: usize) -> Result<(u64, usize)> {
    let mut data = buf
        .get(offset..)
        .ok_or(Error::MalformedVarint(VarIntFault::Truncated))?;
    let v = VarInt::read(&mut data)?;
    Ok((v.to_u64(), v.len()))
}

/// Number of bytes `v` takes as a varint.
pub fn varint_len(v: u64) -> usize {
    ((64 - (v | 1).leading_zeros() as usize) + 6) / 7
}

/// Write `bytes` with a varint length prefix.
pub fn write_len_delimited(buf: &mut Vec<u8>, bytes: &[u8]) {
    VarInt::from_u64(bytes.len() as u64).write(buf);
    buf.extend_from_slice(bytes);
}

/// Read a varint length prefix and that many bytes off the front of `buf`.
pub fn read_len_delimited<'a>(buf: &mut &'a [u8]) -> Result<&'a [u8]> {
    let mut data = *buf;
    let len = VarInt::read(&mut data)?.to_u64();
    let len = usize::try_from(len).map_err(|_| Error::TruncatedPayload {
        step: "get length-delimited content",
        actual: data.len(),
        expected: usize::MAX,
    })?;
    if len > data.len() {
        return Err(Error::TruncatedPayload {
            step: "get length-delimited content",
            actual: data.len(),
            expected: len,
        });
    }
    let (bytes, rest) = data.split_at(len);
    *buf = rest;
    Ok(bytes)
}
