//! Rotor: rotating substitution unit.
//!
//! Each rotor carries a fixed internal wiring permutation, a notch that
//! triggers its left neighbor's step, a ring setting that offsets the wiring
//! against the visible letter, and a mutable rotational position. The forward
//! pass models the signal entering from the keyboard side; the backward pass
//! applies the inverse permutation on the return path from the reflector.

use crate::alphabet::{self, LEN};
use crate::catalog::RotorSpec;

/// One rotor instance inside the machine.
///
/// The wiring and its inverse are resolved to index tables at construction
/// so both passes are single lookups. Only `position` mutates after
/// construction, and only through [`step`](Self::step).
#[derive(Debug, Clone)]
pub struct Rotor {
    wiring: [i32; 26],
    inverse: [i32; 26],
    notch: i32,
    ring_setting: i32,
    position: i32,
}

impl Rotor {
    /// Builds a rotor from a catalog spec, ring setting, and start position.
    ///
    /// Ring setting and position are normalized into `[0, 25]`, so typed-in
    /// values outside the range wrap around instead of failing.
    ///
    /// # Parameters
    /// - `spec`: Wiring and notch from the rotor catalog.
    /// - `ring_setting`: Ring offset (Ringstellung), any integer.
    /// - `position`: Initial rotational position (Grundstellung), any integer.
    pub fn from_spec(spec: &RotorSpec, ring_setting: i32, position: i32) -> Self {
        let mut wiring = [0i32; 26];
        let mut inverse = [0i32; 26];
        for (i, c) in spec.wiring.chars().enumerate() {
            // Catalog wirings are validated permutations of A..Z.
            let mapped = (c as u8 - b'A') as i32;
            wiring[i] = mapped;
            inverse[mapped as usize] = i as i32;
        }
        Rotor {
            wiring,
            inverse,
            notch: (spec.notch as u8 - b'A') as i32,
            ring_setting: alphabet::modulo(ring_setting, LEN),
            position: alphabet::modulo(position, LEN),
        }
    }

    /// Advances the rotor one position, wrapping from 25 back to 0.
    pub fn step(&mut self) {
        self.position = alphabet::modulo(self.position + 1, LEN);
    }

    /// Returns true when the rotor sits at its notch.
    ///
    /// The notch is cut into the rotor body, not the letter ring, so the
    /// check compares the raw position and ignores the ring setting.
    pub fn at_notch(&self) -> bool {
        self.position == self.notch
    }

    /// Substitutes an index on the forward pass (keyboard toward reflector).
    ///
    /// The signal enters at a contact shifted by the rotor's effective offset
    /// (`position - ring_setting`), is deflected by the internal wiring, and
    /// exits shifted back by the same offset.
    ///
    /// # Parameters
    /// - `index`: Alphabet index in `0..26`.
    ///
    /// # Returns
    /// The substituted alphabet index.
    pub fn forward(&self, index: i32) -> i32 {
        let offset = self.position - self.ring_setting;
        let entry = alphabet::modulo(index + offset, LEN);
        alphabet::modulo(self.wiring[entry as usize] - offset, LEN)
    }

    /// Substitutes an index on the backward pass (reflector toward lampboard).
    ///
    /// Applies the inverse of [`forward`](Self::forward) at the same rotor
    /// alignment: `backward(forward(x)) == x` for every position and ring
    /// setting.
    ///
    /// # Parameters
    /// - `index`: Alphabet index in `0..26`.
    ///
    /// # Returns
    /// The substituted alphabet index.
    pub fn backward(&self, index: i32) -> i32 {
        let offset = self.position - self.ring_setting;
        let entry = alphabet::modulo(index + offset, LEN);
        alphabet::modulo(self.inverse[entry as usize] - offset, LEN)
    }

    /// Returns the current rotational position (0..26).
    pub fn position(&self) -> i32 {
        self.position
    }

    /// Returns the ring setting (0..26).
    pub fn ring_setting(&self) -> i32 {
        self.ring_setting
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ROTORS;

    fn rotor_i(ring: i32, pos: i32) -> Rotor {
        Rotor::from_spec(&ROTORS[0], ring, pos)
    }

    #[test]
    fn test_step_increments_position() {
        let mut rotor = rotor_i(0, 0);
        rotor.step();
        assert_eq!(rotor.position(), 1);
    }

    #[test]
    fn test_step_wraps_at_26() {
        let mut rotor = rotor_i(0, 25);
        rotor.step();
        assert_eq!(rotor.position(), 0);
    }

    #[test]
    fn test_at_notch() {
        // Rotor I notch is at 'Q' (position 16).
        assert!(rotor_i(0, 16).at_notch());
        assert!(!rotor_i(0, 0).at_notch());
        assert!(!rotor_i(0, 17).at_notch());
    }

    #[test]
    fn test_ring_setting_does_not_move_notch() {
        assert!(rotor_i(5, 16).at_notch());
        assert!(!rotor_i(5, 11).at_notch());
    }

    #[test]
    fn test_forward_at_rest() {
        // Rotor I maps A -> E at position 0, ring 0.
        let rotor = rotor_i(0, 0);
        assert_eq!(rotor.forward(0), 4);
    }

    #[test]
    fn test_forward_with_position_offset() {
        // At position 1 the signal enters one contact higher and the exit is
        // shifted back: A -> wiring[1]='K' counter-rotated to 'J'.
        let rotor = rotor_i(0, 1);
        assert_eq!(rotor.forward(0), 9);
    }

    #[test]
    fn test_backward_at_rest() {
        let rotor = rotor_i(0, 0);
        assert_eq!(rotor.backward(4), 0);
    }

    #[test]
    fn test_forward_backward_inverse_all_alignments() {
        for spec in ROTORS.iter() {
            for ring in [0, 2, 13, 25] {
                for pos in 0..26 {
                    let rotor = Rotor::from_spec(spec, ring, pos);
                    for index in 0..26 {
                        assert_eq!(rotor.backward(rotor.forward(index)), index);
                        assert_eq!(rotor.forward(rotor.backward(index)), index);
                    }
                }
            }
        }
    }

    #[test]
    fn test_out_of_range_settings_normalize() {
        let rotor = Rotor::from_spec(&ROTORS[0], 27, -1);
        assert_eq!(rotor.ring_setting(), 1);
        assert_eq!(rotor.position(), 25);
    }
}
