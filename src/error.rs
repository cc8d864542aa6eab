//! Error types for the Enigma library.

use std::fmt;

/// Errors produced by the Enigma library.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnigmaError {
    /// A rotor selection index does not exist in the rotor catalog.
    RotorIndexOutOfRange(usize),
    /// A plugboard pair contains a character that is not a letter.
    PlugboardNonLetter(char),
    /// A letter appears in more than one plugboard pair.
    PlugboardDuplicateLetter(char),
}

impl fmt::Display for EnigmaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EnigmaError::RotorIndexOutOfRange(index) => {
                write!(f, "Rotor index {} is outside the rotor catalog", index)
            }
            EnigmaError::PlugboardNonLetter(c) => {
                write!(f, "Plugboard pair contains non-letter character {:?}", c)
            }
            EnigmaError::PlugboardDuplicateLetter(c) => {
                write!(f, "Letter '{}' appears in more than one plugboard pair", c)
            }
        }
    }
}

impl std::error::Error for EnigmaError {}
