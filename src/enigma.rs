//! Enigma: the machine orchestrator.
//!
//! Owns the ordered rotor triple (left, middle, right), the plugboard, and
//! the reflector, and drives the per-character pipeline: step the rotors,
//! then plugboard, forward pass right-to-left, reflector, backward pass
//! left-to-right, plugboard again.

use crate::alphabet;
use crate::catalog::{ReflectorSpec, RotorSpec, REFLECTOR_B, ROTORS};
use crate::error::EnigmaError;
use crate::plugboard::Plugboard;
use crate::reflector::Reflector;
use crate::rotor::Rotor;

/// Enigma I machine with three rotors, plugboard, and reflector.
///
/// The only state that mutates after construction is each rotor's position,
/// advanced by the stepping mechanism before every alphabetic character.
/// Encryption and decryption are the same operation: a second machine built
/// with the identical configuration turns ciphertext back into plaintext.
pub struct Enigma {
    rotors: [Rotor; 3],
    plugboard: Plugboard,
    reflector: Reflector,
}

impl Enigma {
    /// Creates a machine with the standard UKW-B reflector.
    ///
    /// Rotor selections index into the historical catalog
    /// ([`ROTORS`](crate::catalog::ROTORS)); positions and ring settings are
    /// given left-to-right and normalized into `[0, 25]`.
    ///
    /// # Parameters
    /// - `rotor_selection`: Catalog indices for the left, middle, right rotor.
    /// - `positions`: Initial rotor positions, left-to-right.
    /// - `ring_settings`: Ring settings, left-to-right.
    /// - `plugboard_pairs`: Letter pairs to cross on the plugboard.
    ///
    /// # Errors
    /// - [`EnigmaError::RotorIndexOutOfRange`] for a selection outside the catalog.
    /// - [`EnigmaError::PlugboardNonLetter`] /
    ///   [`EnigmaError::PlugboardDuplicateLetter`] for malformed pairs.
    ///
    /// # Examples
    ///
    /// ```
    /// use enigma::Enigma;
    ///
    /// let mut machine = Enigma::new([0, 1, 2], [0, 0, 0], [0, 0, 0], &[]).unwrap();
    /// assert_eq!(machine.process("AAAAA"), "BDZGO");
    /// ```
    pub fn new(
        rotor_selection: [usize; 3],
        positions: [i32; 3],
        ring_settings: [i32; 3],
        plugboard_pairs: &[(char, char)],
    ) -> Result<Self, EnigmaError> {
        Self::with_reflector(
            rotor_selection,
            positions,
            ring_settings,
            plugboard_pairs,
            &REFLECTOR_B,
        )
    }

    /// Creates a machine with an explicit reflector spec.
    ///
    /// Same contract as [`new`](Self::new) with the reflector taken from the
    /// caller instead of defaulting to UKW-B.
    ///
    /// # Errors
    /// See [`new`](Self::new).
    pub fn with_reflector(
        rotor_selection: [usize; 3],
        positions: [i32; 3],
        ring_settings: [i32; 3],
        plugboard_pairs: &[(char, char)],
        reflector: &ReflectorSpec,
    ) -> Result<Self, EnigmaError> {
        let specs: [&RotorSpec; 3] = [
            Self::catalog_spec(rotor_selection[0])?,
            Self::catalog_spec(rotor_selection[1])?,
            Self::catalog_spec(rotor_selection[2])?,
        ];
        let rotors = [
            Rotor::from_spec(specs[0], ring_settings[0], positions[0]),
            Rotor::from_spec(specs[1], ring_settings[1], positions[1]),
            Rotor::from_spec(specs[2], ring_settings[2], positions[2]),
        ];
        Ok(Enigma {
            rotors,
            plugboard: Plugboard::new(plugboard_pairs)?,
            reflector: Reflector::from_spec(reflector),
        })
    }

    fn catalog_spec(index: usize) -> Result<&'static RotorSpec, EnigmaError> {
        ROTORS
            .get(index)
            .ok_or(EnigmaError::RotorIndexOutOfRange(index))
    }

    /// Advances the rotor stack one keypress.
    ///
    /// Both notch flags are read before anything moves, then the three rules
    /// apply in priority order:
    /// 1. Middle rotor at its notch: the left rotor steps AND the middle
    ///    rotor steps again with it (the double-step anomaly).
    /// 2. Otherwise, right rotor at its notch: the middle rotor steps.
    /// 3. The right rotor always steps, every call.
    pub fn step_rotors(&mut self) {
        let middle_at_notch = self.rotors[1].at_notch();
        let right_at_notch = self.rotors[2].at_notch();
        if middle_at_notch {
            self.rotors[0].step();
            self.rotors[1].step();
        } else if right_at_notch {
            self.rotors[1].step();
        }
        self.rotors[2].step();
    }

    /// Encrypts a single character.
    ///
    /// Non-alphabetic characters are returned unchanged and do NOT advance
    /// the rotors. Alphabetic characters first step the rotor stack, then
    /// pass through plugboard, rotors (right to left), reflector, rotors
    /// (left to right), and plugboard again. The output letter is always
    /// uppercase and never equal to the (uppercased) input.
    ///
    /// # Parameters
    /// - `c`: The character to encrypt.
    ///
    /// # Returns
    /// The substituted uppercase letter, or `c` itself if non-alphabetic.
    pub fn encrypt_char(&mut self, c: char) -> char {
        let index = match alphabet::index_of(c) {
            Some(index) => index,
            None => return c,
        };
        self.step_rotors();
        let mut signal = self.plugboard.swap(index);
        signal = self.rotors[2].forward(signal);
        signal = self.rotors[1].forward(signal);
        signal = self.rotors[0].forward(signal);
        signal = self.reflector.reflect(signal);
        signal = self.rotors[0].backward(signal);
        signal = self.rotors[1].backward(signal);
        signal = self.rotors[2].backward(signal);
        alphabet::char_at(self.plugboard.swap(signal))
    }

    /// Encrypts a whole message.
    ///
    /// Uppercases the input and encrypts character by character, strictly in
    /// order: each character's rotor step completes before the next character
    /// is considered. Non-alphabetic characters keep their positions in the
    /// output.
    ///
    /// # Parameters
    /// - `text`: The message to encrypt (or decrypt).
    ///
    /// # Returns
    /// The transformed message, same length as the input.
    ///
    /// # Examples
    ///
    /// ```
    /// use enigma::Enigma;
    ///
    /// let mut machine = Enigma::new([0, 1, 2], [0, 0, 0], [0, 0, 0], &[]).unwrap();
    /// assert_eq!(machine.process("HELLO123WORLD"), "ILBDA123AMTAZ");
    /// ```
    pub fn process(&mut self, text: &str) -> String {
        text.chars()
            .map(|c| self.encrypt_char(c.to_ascii_uppercase()))
            .collect()
    }

    /// Returns the current rotor positions, left-to-right.
    pub fn rotor_positions(&self) -> [i32; 3] {
        [
            self.rotors[0].position(),
            self.rotors[1].position(),
            self.rotors[2].position(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn machine(positions: [i32; 3]) -> Enigma {
        Enigma::new([0, 1, 2], positions, [0, 0, 0], &[]).unwrap()
    }

    #[test]
    fn test_rejects_unknown_rotor() {
        let result = Enigma::new([0, 1, 9], [0, 0, 0], [0, 0, 0], &[]);
        assert_eq!(result.err(), Some(EnigmaError::RotorIndexOutOfRange(9)));
    }

    #[test]
    fn test_rejects_malformed_plugboard() {
        let result = Enigma::new([0, 1, 2], [0, 0, 0], [0, 0, 0], &[('A', 'B'), ('A', 'C')]);
        assert_eq!(result.err(), Some(EnigmaError::PlugboardDuplicateLetter('A')));
    }

    #[test]
    fn test_always_steps_right_rotor() {
        let mut machine = machine([0, 0, 0]);
        machine.step_rotors();
        assert_eq!(machine.rotor_positions(), [0, 0, 1]);
    }

    #[test]
    fn test_right_notch_steps_middle() {
        // Rotor III notch 'V' is position 21.
        let mut machine = machine([0, 0, 21]);
        machine.step_rotors();
        assert_eq!(machine.rotor_positions(), [0, 1, 22]);
    }

    #[test]
    fn test_double_step() {
        // Rotor II notch 'E' is position 4: the middle rotor at its own
        // notch drags the left rotor AND advances itself.
        let mut machine = machine([0, 4, 0]);
        machine.step_rotors();
        assert_eq!(machine.rotor_positions(), [1, 5, 1]);
    }

    #[test]
    fn test_no_extra_middle_step_when_both_at_notch() {
        let mut machine = machine([0, 4, 21]);
        machine.step_rotors();
        assert_eq!(machine.rotor_positions(), [1, 5, 22]);
    }

    #[test]
    fn test_position_overflow_wraps() {
        let mut machine = machine([25, 25, 25]);
        machine.step_rotors();
        assert_eq!(machine.rotor_positions()[2], 0);
    }

    #[test]
    fn test_encrypt_char_steps_before_substitution() {
        let mut machine = machine([0, 0, 0]);
        machine.encrypt_char('A');
        assert_eq!(machine.rotor_positions(), [0, 0, 1]);
    }

    #[test]
    fn test_non_alphabetic_does_not_step() {
        let mut machine = machine([0, 0, 0]);
        assert_eq!(machine.encrypt_char('1'), '1');
        assert_eq!(machine.encrypt_char(' '), ' ');
        assert_eq!(machine.encrypt_char('!'), '!');
        assert_eq!(machine.rotor_positions(), [0, 0, 0]);
    }

    #[test]
    fn test_no_letter_encrypts_to_itself() {
        let mut machine = machine([0, 0, 0]);
        for c in alphabet::ALPHABET.chars() {
            assert_ne!(machine.encrypt_char(c), c);
        }
    }

    #[test]
    fn test_reciprocity_with_plugboard_and_rings() {
        let pairs = [('A', 'B'), ('C', 'D')];
        let mut encoder = Enigma::new([0, 1, 2], [5, 10, 15], [2, 4, 6], &pairs).unwrap();
        let mut decoder = Enigma::new([0, 1, 2], [5, 10, 15], [2, 4, 6], &pairs).unwrap();
        let ciphertext = encoder.process("HELLO");
        assert_eq!(decoder.process(&ciphertext), "HELLO");
    }

    #[test]
    fn test_process_uppercases() {
        let mut lower = machine([0, 0, 0]);
        let mut upper = machine([0, 0, 0]);
        assert_eq!(lower.process("hello"), upper.process("HELLO"));
    }

    #[test]
    fn test_empty_input() {
        let mut machine = machine([0, 0, 0]);
        assert_eq!(machine.process(""), "");
    }

    #[test]
    fn test_state_carries_across_calls() {
        let mut machine = machine([0, 0, 0]);
        machine.process("A");
        let first = machine.rotor_positions()[2];
        machine.process("B");
        assert_eq!(machine.rotor_positions()[2], first + 1);
    }

    #[test]
    fn test_with_reflector_c_differs_from_b() {
        use crate::catalog::REFLECTOR_C;
        let mut ukw_b = machine([0, 0, 0]);
        let mut ukw_c =
            Enigma::with_reflector([0, 1, 2], [0, 0, 0], [0, 0, 0], &[], &REFLECTOR_C).unwrap();
        assert_ne!(ukw_b.process("AAAAA"), ukw_c.process("AAAAA"));
    }
}
