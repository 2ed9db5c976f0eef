//! Named Base32 variants.

use crate::{
    alphabet::{self, Alphabet},
    errors::{Error, Result},
};
use core::{fmt, str::FromStr};

#[cfg(feature = "alloc")]
use alloc::string::String;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Base32 variants supported by this crate, each selecting an [`Alphabet`].
///
/// All variants share the same bit packing and `=` padding; only the symbol
/// table differs.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Variant {
    /// [RFC 4648 §6](https://datatracker.ietf.org/doc/html/rfc4648#section-6)
    #[default]
    Rfc4648,
    /// [RFC 4648 §7](https://datatracker.ietf.org/doc/html/rfc4648#section-7)
    ExtendedHex,
    /// z-base-32
    #[cfg_attr(feature = "serde", serde(rename = "z-base-32"))]
    ZBase32,
    /// Crockford's Base32
    Crockford,
    /// Electrologica X1
    Electrologica,
    /// Geohash
    #[cfg_attr(feature = "serde", serde(rename = "geohash"))]
    GeoHash,
    /// Lower case RFC 4648
    WordSafe,
}

impl Variant {
    /// Every variant, in declaration order.
    pub const ALL: [Variant; 7] = [
        Variant::Rfc4648,
        Variant::ExtendedHex,
        Variant::ZBase32,
        Variant::Crockford,
        Variant::Electrologica,
        Variant::GeoHash,
        Variant::WordSafe,
    ];

    /// Variant to use when no particular one is required.
    pub const RECOMMENDED: Variant = Variant::Rfc4648;

    /// Symbol table for this variant.
    pub const fn alphabet(self) -> &'static Alphabet {
        match self {
            Variant::Rfc4648 => &alphabet::RFC4648,
            Variant::ExtendedHex => &alphabet::EXTENDED_HEX,
            Variant::ZBase32 => &alphabet::ZBASE32,
            Variant::Crockford => &alphabet::CROCKFORD,
            Variant::Electrologica => &alphabet::ELECTROLOGICA,
            Variant::GeoHash => &alphabet::GEOHASH,
            Variant::WordSafe => &alphabet::WORDSAFE,
        }
    }

    /// Canonical name, as accepted by [`FromStr`].
    pub const fn name(self) -> &'static str {
        match self {
            Variant::Rfc4648 => "rfc4648",
            Variant::ExtendedHex => "extended-hex",
            Variant::ZBase32 => "z-base-32",
            Variant::Crockford => "crockford",
            Variant::Electrologica => "electrologica",
            Variant::GeoHash => "geohash",
            Variant::WordSafe => "word-safe",
        }
    }

    /// Encode `bytes` with this variant's alphabet. See [`crate::encode`].
    #[cfg(feature = "alloc")]
    pub fn encode(self, bytes: Option<&[u8]>) -> Result<String> {
        crate::encode(self.alphabet(), bytes)
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Variant {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        if s.eq_ignore_ascii_case("recommended") {
            return Ok(Self::RECOMMENDED);
        }

        Self::ALL
            .into_iter()
            .find(|variant| variant.name().eq_ignore_ascii_case(s))
            .ok_or(Error::UnknownVariant)
    }
}

impl From<Variant> for Alphabet {
    fn from(variant: Variant) -> Alphabet {
        *variant.alphabet()
    }
}
