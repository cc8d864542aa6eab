//! Enigma I cipher machine simulation engine.
//!
//! Simulates the electromechanical Enigma cipher machine: a symmetric,
//! reciprocal substitution cipher whose per-character transformation depends
//! on continuously advancing rotor positions and static configuration
//! (rotor wiring, ring settings, plugboard pairs, reflector wiring).
//!
//! The simulation reproduces the historical machine faithfully, including
//! the middle rotor's "double-stepping" anomaly, and matches documented
//! Enigma I test vectors byte-for-byte.
//!
//! # Architecture
//!
//! ```text
//! Plugboard   (involutive letter-swap table, applied on entry and exit)
//!     ↓
//! Rotor ×3    (rotating substitution units — signal passes right to left)
//!     ↓
//! Reflector   (fixed involutive wiring — routes the signal back)
//!     ↓
//! Rotor ×3    (inverse pass, left to right)
//!     ↓
//! Plugboard
//! ```
//!
//! Before each alphabetic character, the rotor stack steps: the right rotor
//! on every keypress, the middle rotor when the right rotor sits at its
//! notch, and the left rotor (together with the middle, double-stepping)
//! when the middle rotor sits at its own notch.
//!
//! # Examples
//!
//! Encrypt and decrypt a message:
//!
//! ```
//! use enigma::Enigma;
//!
//! let mut encoder = Enigma::new([0, 1, 2], [0, 0, 0], [0, 0, 0], &[]).unwrap();
//! let mut decoder = Enigma::new([0, 1, 2], [0, 0, 0], [0, 0, 0], &[]).unwrap();
//!
//! let ciphertext = encoder.process("HELLO");
//! assert_eq!(ciphertext, "ILBDA");
//! assert_eq!(decoder.process(&ciphertext), "HELLO");
//! ```
//!
//! Use plugboard pairs and non-zero ring settings:
//!
//! ```
//! use enigma::Enigma;
//!
//! let mut machine = Enigma::new(
//!     [0, 1, 2],
//!     [5, 10, 15],
//!     [2, 4, 6],
//!     &[('A', 'B'), ('C', 'D')],
//! )
//! .unwrap();
//!
//! let ciphertext = machine.process("ATTACK AT DAWN");
//! assert_ne!(ciphertext, "ATTACK AT DAWN");
//! ```

#![deny(clippy::all)]

pub mod error;

pub mod alphabet;
pub mod catalog;
pub mod plugboard;
pub mod reflector;
pub mod rotor;

mod enigma;

pub use enigma::Enigma;
