//! New Base 60 (sexagesimal) codec for short codes.
//!
//! Resource IDs are written most-significant digit first over a 60 character
//! alphabet that leaves out the easily confused `I`, `O` and `l`:
//!
//! ```text
//! 0123456789 ABCDEFGH JKLMN PQRSTUVWXYZ _ abcdefghijk mnopqrstuvwxyz
//! ```
//!
//! Decoding is lenient: `I` and `l` are read as `1`, `O` as `0`, and any
//! other character outside the alphabet counts as the digit `0`. [`decode`]
//! never fails.
//!
//! # Examples
//!
//! ```
//! use hum::utils::base60::{decode, encode};
//!
//! assert_eq!(encode(123), "23");
//! assert_eq!(decode("23"), 123);
//! assert_eq!(decode("2l"), 121);
//! ```

/// Digit alphabet in ascending value order.
pub const ALPHABET: &[u8; 60] = b"0123456789ABCDEFGHJKLMNPQRSTUVWXYZ_abcdefghijkmnopqrstuvwxyz";

const RADIX: u64 = 60;

/// Digit value for every ASCII byte. Bytes outside the alphabet stay `0`.
const DIGITS: [u8; 128] = {
    let mut lookup = [0u8; 128];
    let mut i = 0;
    while i < ALPHABET.len() {
        lookup[ALPHABET[i] as usize] = i as u8;
        i += 1;
    }
    lookup[b'I' as usize] = 1;
    lookup[b'l' as usize] = 1;
    lookup[b'O' as usize] = 0;
    lookup
};

/// Encodes `n` as a short code.
///
/// Zero encodes to the single digit `"0"`, not to an empty string. Callers
/// that build paths from a resource ID are expected to have handled the
/// "no resource" sentinel before getting here.
pub fn encode(mut n: u64) -> String {
    if n == 0 {
        return "0".to_string();
    }

    let mut digits = Vec::with_capacity(11);
    while n > 0 {
        digits.push(ALPHABET[(n % RADIX) as usize]);
        n /= RADIX;
    }
    digits.reverse();

    // alphabet is pure ASCII
    digits.into_iter().map(char::from).collect()
}

/// Encodes an optional ID; an absent ID encodes like zero.
pub fn encode_opt(n: Option<u64>) -> String {
    encode(n.unwrap_or(0))
}

/// Returns the value of a single short-code character.
///
/// Unknown characters, including anything outside ASCII, are worth `0`.
pub fn digit_value(c: char) -> u64 {
    if c.is_ascii() {
        u64::from(DIGITS[c as usize])
    } else {
        0
    }
}

/// Decodes a short code into an integer.
///
/// The empty string decodes to `0`. Codes too long for a `u64` saturate at
/// `u64::MAX`, which no resource store hands out.
pub fn decode(code: &str) -> u64 {
    code.chars().fold(0u64, |acc, c| {
        acc.checked_mul(RADIX)
            .and_then(|v| v.checked_add(digit_value(c)))
            .unwrap_or(u64::MAX)
    })
}
