#![cfg_attr(not(test), no_std)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![doc = include_str!("../README.md")]
#![doc(html_logo_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo_small.png")]
#![warn(
    clippy::mod_module_files,
    clippy::unwrap_used,
    missing_docs,
    rust_2018_idioms,
    unused_lifetimes,
    unused_qualifications
)]

//! # Supported variants
//!
//! | Variant         | Alphabet                           |
//! |-----------------|------------------------------------|
//! | RFC 4648        | `ABCDEFGHIJKLMNOPQRSTUVWXYZ234567` |
//! | Extended Hex    | `0123456789ABCDEFGHIJKLMNOPQRSTUV` |
//! | z-base-32       | `ybndrfg8ejkmcpqxot1uwisza345h768` |
//! | Crockford       | `0123456789abcdefghjkmnpqrstvwxyz` |
//! | Electrologica   | `ABCDEFGHIJKLMNOPQRSTUVWXYZ234567` |
//! | Geohash         | `0123456789bcdefghjkmnpqrstuvwxyz` |
//! | Word-safe       | `abcdefghijklmnopqrstuvwxyz234567` |
//!
//! Every variant pads its output with `=` to a multiple of 8 symbols.
//!
//! # Usage
//!
//! ## Named variants
//!
#![cfg_attr(feature = "alloc", doc = "```")]
#![cfg_attr(not(feature = "alloc"), doc = "```ignore")]
//! use base32_variants::{encode_crockford, encode_rfc4648, Error};
//!
//! assert_eq!(encode_rfc4648(Some(b"foobar"))?, "MZXW6YTBOI======");
//! assert_eq!(encode_crockford(Some(b"foobar"))?, "csqpyrk1e8======");
//!
//! // Absent input is an error; empty input is not.
//! assert_eq!(encode_rfc4648(None), Err(Error::NullInput));
//! assert_eq!(encode_rfc4648(Some(&[]))?, "");
//! # Ok::<(), Error>(())
//! ```
//!
//! ## Without allocating
//!
//! ```
//! use base32_variants::{encoded_len, ZBASE32};
//!
//! let mut buf = [0u8; 16];
//! assert_eq!(encoded_len(5), 8);
//! assert_eq!(ZBASE32.encode(b"hello", &mut buf)?, "pb1sa5dx");
//! # Ok::<(), base32_variants::Error>(())
//! ```
//!
//! ## Custom alphabets
//!
//! ```
//! use base32_variants::{Alphabet, Error};
//!
//! const UPPER_CROCKFORD: Alphabet = Alphabet::new(b"0123456789ABCDEFGHJKMNPQRSTVWXYZ");
//!
//! let mut buf = [0u8; 8];
//! assert_eq!(UPPER_CROCKFORD.encode(&[0xff], &mut buf)?, "ZW======");
//!
//! // Tables supplied at runtime are validated too.
//! assert_eq!(
//!     Alphabet::try_new(b"ABCDEFGHIJKLMNOPQRSTUVWXYZ23456="),
//!     Err(Error::InvalidSymbol { index: 31 })
//! );
//! # Ok::<(), Error>(())
//! ```

#[cfg(any(feature = "alloc", test))]
extern crate alloc;

pub mod alphabet;
pub mod errors;

mod encoding;
mod variant;

pub use crate::{
    alphabet::{
        Alphabet, CROCKFORD, ELECTROLOGICA, EXTENDED_HEX, GEOHASH, RECOMMENDED, RFC4648, WORDSAFE,
        ZBASE32,
    },
    encoding::{encoded_len, unpadded_len},
    errors::{Error, Result},
    variant::Variant,
};

#[cfg(feature = "alloc")]
pub use crate::encoding::{encode, encode_zeroizing};

#[cfg(feature = "alloc")]
use alloc::string::String;

/// Encode `bytes` as Base32 with the [`RFC4648`] alphabet.
#[cfg(feature = "alloc")]
pub fn encode_rfc4648(bytes: Option<&[u8]>) -> Result<String> {
    encode(&RFC4648, bytes)
}

/// Encode `bytes` as Base32 with the [`EXTENDED_HEX`] alphabet.
#[cfg(feature = "alloc")]
pub fn encode_extended_hex(bytes: Option<&[u8]>) -> Result<String> {
    encode(&EXTENDED_HEX, bytes)
}

/// Encode `bytes` as Base32 with the [`ZBASE32`] alphabet.
#[cfg(feature = "alloc")]
pub fn encode_zbase32(bytes: Option<&[u8]>) -> Result<String> {
    encode(&ZBASE32, bytes)
}

/// Encode `bytes` as Base32 with the [`CROCKFORD`] alphabet.
#[cfg(feature = "alloc")]
pub fn encode_crockford(bytes: Option<&[u8]>) -> Result<String> {
    encode(&CROCKFORD, bytes)
}

/// Encode `bytes` as Base32 with the [`ELECTROLOGICA`] alphabet.
#[cfg(feature = "alloc")]
pub fn encode_electrologica(bytes: Option<&[u8]>) -> Result<String> {
    encode(&ELECTROLOGICA, bytes)
}

/// Encode `bytes` as Base32 with the [`GEOHASH`] alphabet.
#[cfg(feature = "alloc")]
pub fn encode_geohash(bytes: Option<&[u8]>) -> Result<String> {
    encode(&GEOHASH, bytes)
}

/// Encode `bytes` as Base32 with the [`WORDSAFE`] alphabet.
#[cfg(feature = "alloc")]
pub fn encode_wordsafe(bytes: Option<&[u8]>) -> Result<String> {
    encode(&WORDSAFE, bytes)
}

/// Encode `bytes` as Base32 with the [`RECOMMENDED`] alphabet, currently
/// [`RFC4648`].
#[cfg(feature = "alloc")]
pub fn encode_recommended(bytes: Option<&[u8]>) -> Result<String> {
    encode_rfc4648(bytes)
}
