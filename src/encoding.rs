//! Base32 bit-packing encoder.

use crate::{
    alphabet::{Alphabet, PAD},
    errors::{Error, Result},
};
use core::str;
use zeroize::Zeroize;

#[cfg(feature = "alloc")]
use alloc::string::String;
#[cfg(feature = "alloc")]
use zeroize::Zeroizing;

/// Input bytes per Base32 block.
const BLOCK_BYTES: usize = 5;

/// Output symbols per Base32 block.
const BLOCK_SYMBOLS: usize = 8;

/// Symbols needed for a trailing partial block of `0..5` bytes.
const TAIL_SYMBOLS: [usize; BLOCK_BYTES] = [0, 2, 4, 5, 7];

/// Shift register turning 8-bit input into 5-bit groups, most significant
/// bits first.
///
/// Holds at most 4 pending bits between bytes, so 12 significant bits once
/// a new byte is shifted in. The register is wiped on drop.
#[derive(Default)]
struct Accumulator {
    buffer: u16,
    bits: u8,
}

impl Accumulator {
    fn push(&mut self, byte: u8) {
        debug_assert!(self.bits < 8);
        self.buffer = (self.buffer << 8) | u16::from(byte);
        self.bits += 8;
    }

    /// Take the next complete 5-bit group, if one is available.
    fn pop(&mut self) -> Option<u8> {
        if self.bits < 5 {
            return None;
        }

        self.bits -= 5;
        Some(((self.buffer >> self.bits) & 0x1F) as u8)
    }

    /// Left-align the 1-4 leftover bits in a final zero-filled group.
    fn flush(&mut self) -> Option<u8> {
        if self.bits == 0 {
            return None;
        }

        let group = ((self.buffer << (5 - self.bits)) & 0x1F) as u8;
        self.bits = 0;
        Some(group)
    }
}

impl Drop for Accumulator {
    fn drop(&mut self) {
        self.buffer.zeroize();
        self.bits.zeroize();
    }
}

/// Feed `src` through the accumulator, handing each symbol to `emit`.
///
/// Emits exactly [`unpadded_len`]`(src.len())` symbols.
fn pack(alphabet: &Alphabet, src: &[u8], mut emit: impl FnMut(u8)) {
    let mut acc = Accumulator::default();

    for &byte in src {
        acc.push(byte);
        while let Some(group) = acc.pop() {
            emit(alphabet.lookup(group));
        }
    }

    if let Some(group) = acc.flush() {
        emit(alphabet.lookup(group));
    }
}

/// Get the length of padded Base32 produced by encoding `len` bytes.
pub const fn encoded_len(len: usize) -> usize {
    len.div_ceil(BLOCK_BYTES) * BLOCK_SYMBOLS
}

/// Get the number of Base32 symbols, excluding padding, produced by
/// encoding `len` bytes. Equal to `ceil(len * 8 / 5)`.
pub const fn unpadded_len(len: usize) -> usize {
    (len / BLOCK_BYTES) * BLOCK_SYMBOLS + TAIL_SYMBOLS[len % BLOCK_BYTES]
}

impl Alphabet {
    /// Encode the input byte slice as padded Base32.
    ///
    /// Writes the result into the front of `dst`, returning an ASCII string
    /// borrowed from it. `dst` must hold at least [`encoded_len`] bytes,
    /// otherwise [`Error::InvalidLength`] is returned and `dst` is untouched.
    pub fn encode<'a>(&self, src: &[u8], dst: &'a mut [u8]) -> Result<&'a str> {
        let elen = encoded_len(src.len());
        let dst = dst.get_mut(..elen).ok_or(Error::InvalidLength)?;

        let mut pos = 0;
        pack(self, src, |symbol| {
            dst[pos] = symbol;
            pos += 1;
        });

        debug_assert_eq!(pos, unpadded_len(src.len()));
        dst[pos..].fill(PAD);

        str::from_utf8(dst).map_err(|_| Error::Internal)
    }

    /// Encode the input byte slice into a [`String`] containing padded Base32.
    #[cfg(feature = "alloc")]
    pub fn encode_string(&self, src: &[u8]) -> String {
        let elen = encoded_len(src.len());
        let mut out = String::with_capacity(elen);

        pack(self, src, |symbol| out.push(char::from(symbol)));
        while out.len() < elen {
            out.push(char::from(PAD));
        }

        out
    }
}

/// Encode `bytes` with the given alphabet.
///
/// Absent input is an error, distinct from empty input, which encodes to an
/// empty string without padding.
///
/// ```
/// use base32_variants::{encode, Error, RFC4648};
///
/// assert_eq!(encode(&RFC4648, Some(b"foobar")).unwrap(), "MZXW6YTBOI======");
/// assert_eq!(encode(&RFC4648, Some(b"")).unwrap(), "");
/// assert_eq!(encode(&RFC4648, None), Err(Error::NullInput));
/// ```
#[cfg(feature = "alloc")]
pub fn encode(alphabet: &Alphabet, bytes: Option<&[u8]>) -> Result<String> {
    let bytes = bytes.ok_or(Error::NullInput)?;
    Ok(alphabet.encode_string(bytes))
}

/// Like [`encode`], but the returned string is wiped from memory on drop.
///
/// Useful when the input is key material, e.g. a TOTP shared secret.
#[cfg(feature = "alloc")]
pub fn encode_zeroizing(alphabet: &Alphabet, bytes: Option<&[u8]>) -> Result<Zeroizing<String>> {
    encode(alphabet, bytes).map(Zeroizing::new)
}
