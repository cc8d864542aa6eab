//! Alphabet index arithmetic for the 26-letter rotor alphabet.
//!
//! All rotor offsets and positions are indices into the fixed sequence
//! `'A'..='Z'`, combined with true mathematical modulo so that subtraction
//! never produces a negative index.

/// The machine alphabet, in wheel order.
pub const ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Number of symbols in the alphabet.
pub const LEN: i32 = 26;

/// True mathematical modulo: the result is always in `[0, m)`, even for
/// negative `n`.
///
/// This differs from Rust's `%` operator, which truncates toward zero and
/// returns negative remainders for negative operands.
///
/// # Parameters
/// - `n`: The dividend (may be negative).
/// - `m`: The modulus (must be positive).
///
/// # Returns
/// `n mod m` in the range `[0, m)`.
///
/// # Examples
///
/// ```
/// use enigma::alphabet::modulo;
///
/// assert_eq!(modulo(-1, 26), 25);
/// assert_eq!(modulo(7, 5), 2);
/// ```
pub fn modulo(n: i32, m: i32) -> i32 {
    ((n % m) + m) % m
}

/// Returns the alphabet index of `c`, case-insensitive.
///
/// # Parameters
/// - `c`: The character to look up.
///
/// # Returns
/// `Some(index)` in `0..26` for an ASCII letter, `None` otherwise.
pub fn index_of(c: char) -> Option<i32> {
    if c.is_ascii_alphabetic() {
        Some((c.to_ascii_uppercase() as u8 - b'A') as i32)
    } else {
        None
    }
}

/// Returns the alphabet symbol at `index`.
///
/// # Parameters
/// - `index`: Alphabet index in `0..26`.
///
/// # Panics
/// Panics if `index` is outside `0..26`. All callers derive indices via
/// [`modulo`], which keeps them in range.
pub fn char_at(index: i32) -> char {
    ALPHABET.as_bytes()[index as usize] as char
}
