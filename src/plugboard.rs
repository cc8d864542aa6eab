//! Plugboard: involutive letter-swap table.
//!
//! The plugboard (Steckerbrett) crosses pairs of letters before the signal
//! enters the rotor stack and again after it returns. Swapping is symmetric
//! and involutive, so applying it twice restores the original letter.

use crate::alphabet;
use crate::error::EnigmaError;

/// Validated plugboard configuration.
///
/// Pairs are stored as alphabet indices and scanned in insertion order.
/// Construction rejects pairs containing non-letters and letters that
/// appear more than once across all pairs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plugboard {
    pairs: Vec<(i32, i32)>,
}

impl Plugboard {
    /// Builds a plugboard from letter pairs, validating the configuration.
    ///
    /// # Parameters
    /// - `pairs`: Letter pairs to cross (case-insensitive, possibly empty).
    ///
    /// # Errors
    /// - [`EnigmaError::PlugboardNonLetter`] if a pair member is not a letter.
    /// - [`EnigmaError::PlugboardDuplicateLetter`] if a letter appears in more
    ///   than one pair, or twice within one pair.
    ///
    /// # Examples
    ///
    /// ```
    /// use enigma::plugboard::Plugboard;
    ///
    /// assert!(Plugboard::new(&[('A', 'B'), ('C', 'D')]).is_ok());
    /// assert!(Plugboard::new(&[('A', 'B'), ('B', 'C')]).is_err());
    /// ```
    pub fn new(pairs: &[(char, char)]) -> Result<Self, EnigmaError> {
        let mut used = [false; 26];
        let mut indexed = Vec::with_capacity(pairs.len());
        for &(a, b) in pairs {
            let ia = alphabet::index_of(a).ok_or(EnigmaError::PlugboardNonLetter(a))?;
            let ib = alphabet::index_of(b).ok_or(EnigmaError::PlugboardNonLetter(b))?;
            if used[ia as usize] || ia == ib {
                return Err(EnigmaError::PlugboardDuplicateLetter(alphabet::char_at(ia)));
            }
            used[ia as usize] = true;
            if used[ib as usize] {
                return Err(EnigmaError::PlugboardDuplicateLetter(alphabet::char_at(ib)));
            }
            used[ib as usize] = true;
            indexed.push((ia, ib));
        }
        Ok(Plugboard { pairs: indexed })
    }

    /// Swaps an alphabet index through the plugboard.
    ///
    /// Scans the pairs in order; the first pair containing `index` yields its
    /// partner. Indices not present in any pair pass through unchanged.
    ///
    /// # Parameters
    /// - `index`: Alphabet index in `0..26`.
    ///
    /// # Returns
    /// The partner index, or `index` itself if unplugged.
    pub fn swap(&self, index: i32) -> i32 {
        for &(a, b) in &self.pairs {
            if index == a {
                return b;
            }
            if index == b {
                return a;
            }
        }
        index
    }
}
