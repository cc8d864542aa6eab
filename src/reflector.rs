//! Reflector: fixed involutive wiring at the end of the rotor stack.
//!
//! The reflector (Umkehrwalze) pairs up all 26 contacts and routes the
//! signal back through the rotors. Because the wiring is an involution with
//! no fixed points, the whole machine is reciprocal and no letter ever
//! encrypts to itself.

use crate::catalog::ReflectorSpec;

/// One reflector instance, resolved to an index table.
///
/// Unlike a rotor the reflector never moves and has no ring setting.
#[derive(Debug, Clone)]
pub struct Reflector {
    wiring: [i32; 26],
}

impl Reflector {
    /// Builds a reflector from a catalog spec.
    ///
    /// # Parameters
    /// - `spec`: Involutive wiring from the reflector catalog.
    pub fn from_spec(spec: &ReflectorSpec) -> Self {
        let mut wiring = [0i32; 26];
        for (i, c) in spec.wiring.chars().enumerate() {
            wiring[i] = (c as u8 - b'A') as i32;
        }
        Reflector { wiring }
    }

    /// Reflects an alphabet index through the fixed wiring.
    ///
    /// # Parameters
    /// - `index`: Alphabet index in `0..26`.
    ///
    /// # Returns
    /// The paired alphabet index. Never equal to `index`.
    pub fn reflect(&self, index: i32) -> i32 {
        self.wiring[index as usize]
    }
}
