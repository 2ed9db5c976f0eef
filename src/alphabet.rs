//! Base32 alphabets.

mod tables;

pub use self::tables::{
    CROCKFORD, ELECTROLOGICA, EXTENDED_HEX, GEOHASH, RECOMMENDED, RFC4648, WORDSAFE, ZBASE32,
};

use crate::errors::{Error, Result};
use core::fmt::{self, Write};
use subtle::{ConditionallySelectable, ConstantTimeEq};

/// Number of symbols in a Base32 alphabet.
pub const ALPHABET_LEN: usize = 32;

/// Padding character appended until the output is a multiple of 8 symbols.
pub const PAD: u8 = b'=';

/// Ordered table of 32 symbols mapping 5-bit values to characters.
///
/// Every symbol is a printable ASCII byte other than [`PAD`]; both
/// constructors enforce this, so encoded output is always ASCII. Symbols are
/// not required to be distinct: a table with a repeated symbol still encodes,
/// but the output can no longer be decoded unambiguously. The [`ZBASE32`]
/// table repeats `8` at indices 7 and 31.
#[derive(Clone, Copy, Eq, Hash, PartialEq)]
pub struct Alphabet {
    symbols: [u8; ALPHABET_LEN],
}

impl Alphabet {
    /// Create an alphabet from a fixed table of symbols.
    ///
    /// Intended for `const` items: an invalid table fails const evaluation
    /// and is rejected at compile time. Use [`Alphabet::try_new`] for tables
    /// supplied at runtime.
    ///
    /// # Panics
    ///
    /// If a symbol is not printable ASCII, or is `=`.
    pub const fn new(symbols: &[u8; ALPHABET_LEN]) -> Self {
        match validate(symbols) {
            Ok(()) => Self { symbols: *symbols },
            Err(_) => panic!("invalid Base32 alphabet symbol"),
        }
    }

    /// Create an alphabet from a runtime-supplied table of symbols.
    pub fn try_new(symbols: &[u8]) -> Result<Self> {
        let symbols: &[u8; ALPHABET_LEN] =
            symbols.try_into().map_err(|_| Error::InvalidLength)?;
        validate(symbols)?;

        Ok(Self { symbols: *symbols })
    }

    /// Symbol for the given 5-bit value, or `None` if `index >= 32`.
    pub fn symbol(&self, index: u8) -> Option<u8> {
        self.symbols.get(usize::from(index)).copied()
    }

    /// 5-bit value encoded by the given symbol, if it belongs to this alphabet.
    ///
    /// For a repeated symbol this is its first position.
    pub fn position(&self, symbol: u8) -> Option<u8> {
        self.symbols
            .iter()
            .zip(0u8..)
            .find_map(|(&s, i)| (s == symbol).then_some(i))
    }

    /// Borrow the raw symbol table.
    pub fn as_bytes(&self) -> &[u8; ALPHABET_LEN] {
        &self.symbols
    }

    /// Translate a 5-bit value into its symbol without a data-dependent
    /// memory access.
    ///
    /// Every entry is visited and the match is selected with
    /// [`ConditionallySelectable`], so the access pattern is the same for all
    /// inputs. Only the low 5 bits of `index` are used.
    pub(crate) fn lookup(&self, index: u8) -> u8 {
        let index = index & 0x1F;
        let mut symbol = 0u8;

        for (&candidate, i) in self.symbols.iter().zip(0u8..) {
            symbol.conditional_assign(&candidate, index.ct_eq(&i));
        }

        symbol
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &symbol in &self.symbols {
            f.write_char(char::from(symbol))?;
        }
        Ok(())
    }
}

impl fmt::Debug for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Alphabet")
            .field(&format_args!("{self}"))
            .finish()
    }
}

impl TryFrom<&[u8]> for Alphabet {
    type Error = Error;

    fn try_from(symbols: &[u8]) -> Result<Self> {
        Self::try_new(symbols)
    }
}

impl TryFrom<&str> for Alphabet {
    type Error = Error;

    fn try_from(symbols: &str) -> Result<Self> {
        Self::try_new(symbols.as_bytes())
    }
}

/// Check that every symbol is printable, non-padding ASCII.
const fn validate(symbols: &[u8; ALPHABET_LEN]) -> Result<()> {
    let mut i = 0;
    while i < ALPHABET_LEN {
        let symbol = symbols[i];
        if !symbol.is_ascii_graphic() || symbol == PAD {
            return Err(Error::InvalidSymbol { index: i });
        }
        i += 1;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::format;

    #[test]
    fn lookup_matches_direct_indexing() {
        for alphabet in [RFC4648, EXTENDED_HEX, ZBASE32, CROCKFORD, GEOHASH, WORDSAFE] {
            for index in 0..32u8 {
                assert_eq!(Some(alphabet.lookup(index)), alphabet.symbol(index));
            }
        }
    }

    #[test]
    fn lookup_masks_high_bits() {
        assert_eq!(RFC4648.lookup(0x20), b'A');
        assert_eq!(RFC4648.lookup(0xFF), b'7');
    }

    #[test]
    fn symbol_out_of_range() {
        assert_eq!(RFC4648.symbol(31), Some(b'7'));
        assert_eq!(RFC4648.symbol(32), None);
    }

    #[test]
    fn position_inverts_symbol() {
        for index in 0..32u8 {
            let symbol = RFC4648.symbol(index).unwrap();
            assert_eq!(RFC4648.position(symbol), Some(index));
        }
        assert_eq!(RFC4648.position(b'a'), None);
        assert_eq!(RFC4648.position(PAD), None);
    }

    #[test]
    fn zbase32_repeats_eight() {
        assert_eq!(ZBASE32.symbol(7), Some(b'8'));
        assert_eq!(ZBASE32.symbol(31), Some(b'8'));
        assert_eq!(ZBASE32.lookup(31), b'8');
        assert_eq!(ZBASE32.position(b'8'), Some(7));
    }

    #[test]
    fn try_new_accepts_valid_table() {
        let alphabet = Alphabet::try_new(b"ABCDEFGHIJKLMNOPQRSTUVWXYZ234567").unwrap();
        assert_eq!(alphabet, RFC4648);
        assert_eq!(Alphabet::try_from("ybndrfg8ejkmcpqxot1uwisza345h768"), Ok(ZBASE32));
    }

    #[test]
    fn try_new_rejects_wrong_length() {
        assert_eq!(
            Alphabet::try_new(b"ABCDEFGHIJKLMNOPQRSTUVWXYZ23456"),
            Err(Error::InvalidLength)
        );
        assert_eq!(
            Alphabet::try_new(b"ABCDEFGHIJKLMNOPQRSTUVWXYZ2345678"),
            Err(Error::InvalidLength)
        );
    }

    #[test]
    fn repeated_symbols_are_accepted() {
        let alphabet = Alphabet::try_new(b"ABCDEFGHIJKLMNOPQRSTUVWXYZ234566").unwrap();
        assert_eq!(alphabet.lookup(30), b'6');
        assert_eq!(alphabet.lookup(31), b'6');
        assert_eq!(alphabet.position(b'6'), Some(30));
    }

    #[test]
    fn try_new_rejects_padding_and_unprintable_symbols() {
        assert_eq!(
            Alphabet::try_new(b"ABCDEFGHIJKLMNOPQRSTUVWXYZ23456="),
            Err(Error::InvalidSymbol { index: 31 })
        );
        assert_eq!(
            Alphabet::try_new(b" BCDEFGHIJKLMNOPQRSTUVWXYZ234567"),
            Err(Error::InvalidSymbol { index: 0 })
        );
        let mut table = *RFC4648.as_bytes();
        table[7] = 0xC3;
        assert_eq!(
            Alphabet::try_new(&table),
            Err(Error::InvalidSymbol { index: 7 })
        );
    }

    #[test]
    #[should_panic(expected = "invalid Base32 alphabet symbol")]
    fn new_panics_on_padding_symbol() {
        Alphabet::new(b"=BCDEFGHIJKLMNOPQRSTUVWXYZ234567");
    }

    #[test]
    fn display_and_debug() {
        assert_eq!(format!("{CROCKFORD}"), "0123456789abcdefghjkmnpqrstvwxyz");
        assert_eq!(
            format!("{GEOHASH:?}"),
            "Alphabet(0123456789bcdefghjkmnpqrstuvwxyz)"
        );
    }
}
