//! Static catalog of historical rotor and reflector wirings.
//!
//! The wirings are the documented Enigma I specifications. Each rotor wiring
//! is a permutation of the alphabet where position `i` gives the image of the
//! `i`-th standard letter; the notch marks the letter position that triggers
//! stepping of the left neighbor. Adding further historical variants only
//! requires new entries here, the Rotor and Enigma algorithms are untouched.

/// Immutable wiring and notch specification for one rotor type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RotorSpec {
    /// Permutation of the alphabet as a 26-letter sequence.
    pub wiring: &'static str,
    /// Letter whose position triggers the left neighbor's step.
    pub notch: char,
}

/// Immutable wiring specification for one reflector type.
///
/// The wiring is an involution with no fixed points: `wiring[wiring[i]] == i`
/// and `wiring[i] != i` for every index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReflectorSpec {
    /// Involutive permutation of the alphabet as a 26-letter sequence.
    pub wiring: &'static str,
}

/// The five historical Enigma I rotors, in order I..V.
///
/// Indices 0..=2 (rotors I, II, III) form the reference machine used
/// throughout the test vectors.
pub const ROTORS: [RotorSpec; 5] = [
    RotorSpec {
        wiring: "EKMFLGDQVZNTOWYHXUSPAIBRCJ",
        notch: 'Q',
    },
    RotorSpec {
        wiring: "AJDKSIRUXBLHWTMCQGZNPYFVOE",
        notch: 'E',
    },
    RotorSpec {
        wiring: "BDFHJLCPRTXVZNYEIWGAKMUSQO",
        notch: 'V',
    },
    RotorSpec {
        wiring: "ESOVPZJAYQUIRHXLNFTGKDCMWB",
        notch: 'J',
    },
    RotorSpec {
        wiring: "VZBRGITYUPSDNHLXAWMJQOFECK",
        notch: 'Z',
    },
];

/// Reflector UKW-B, the standard Enigma I reflector and the machine default.
pub const REFLECTOR_B: ReflectorSpec = ReflectorSpec {
    wiring: "YRUHQSLDPXNGOKMIEBFZCWVJAT",
};

/// Reflector UKW-C, the alternative historical reflector.
pub const REFLECTOR_C: ReflectorSpec = ReflectorSpec {
    wiring: "FVPJIAOYEDRZXWGCTKUQSBNMHL",
};
