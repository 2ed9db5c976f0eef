//! Named Base32 alphabets.

use super::Alphabet;

/// RFC 4648 §6 Base32 alphabet.
///
/// ```text
/// [A-Z]      [2-7]
/// 0x41-0x5a, 0x32-0x37
/// ```
pub const RFC4648: Alphabet = Alphabet::new(b"ABCDEFGHIJKLMNOPQRSTUVWXYZ234567");

/// RFC 4648 §7 "Extended Hex" Base32 alphabet, which preserves sort order.
///
/// ```text
/// [0-9]      [A-V]
/// 0x30-0x39, 0x41-0x56
/// ```
pub const EXTENDED_HEX: Alphabet = Alphabet::new(b"0123456789ABCDEFGHIJKLMNOPQRSTUV");

/// z-base-32 alphabet, permuted so the easier-to-read symbols occur more often.
///
/// `8` appears at both index 7 and index 31, so values 7 and 31 encode to
/// the same symbol.
pub const ZBASE32: Alphabet = Alphabet::new(b"ybndrfg8ejkmcpqxot1uwisza345h768");

/// Crockford Base32 alphabet in lower case: no `i`, `l`, `o` or `u`.
pub const CROCKFORD: Alphabet = Alphabet::new(b"0123456789abcdefghjkmnpqrstvwxyz");

/// Electrologica X1 alphabet. Shares its symbol table with [`RFC4648`].
pub const ELECTROLOGICA: Alphabet = Alphabet::new(b"ABCDEFGHIJKLMNOPQRSTUVWXYZ234567");

/// Geohash alphabet: digits and lower case letters without `a`, `i`, `l`, `o`.
pub const GEOHASH: Alphabet = Alphabet::new(b"0123456789bcdefghjkmnpqrstuvwxyz");

/// Lower case [`RFC4648`] alphabet.
pub const WORDSAFE: Alphabet = Alphabet::new(b"abcdefghijklmnopqrstuvwxyz234567");

/// Alphabet used when no particular variant is required.
pub const RECOMMENDED: Alphabet = RFC4648;
