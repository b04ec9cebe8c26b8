// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Symmetric cipher test-case model.
//!
//! The test case is owned by the calling harness; the engine reads the
//! configuration fields and writes only the designated output fields, in
//! place, and only when the whole call succeeds.

use symval_crypto::CipherDirection;

use crate::EngineError;

/// Cipher+mode identifier of the TDES family as advertised to the harness.
///
/// `Ctr` is recognized but not implemented; resolving it fails explicitly
/// rather than falling back to another mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TdesAlgorithm {
    /// Electronic codebook.
    Ecb,
    /// Cipher block chaining.
    Cbc,
    /// Output feedback.
    Ofb,
    /// Cipher feedback, 64-bit units.
    Cfb64,
    /// Cipher feedback, 8-bit units.
    Cfb8,
    /// Cipher feedback, 1-bit units.
    Cfb1,
    /// Counter mode, reserved for future support.
    Ctr,
}

impl TryFrom<u32> for TdesAlgorithm {
    type Error = EngineError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(TdesAlgorithm::Ecb),
            2 => Ok(TdesAlgorithm::Cbc),
            3 => Ok(TdesAlgorithm::Ofb),
            4 => Ok(TdesAlgorithm::Cfb64),
            5 => Ok(TdesAlgorithm::Cfb8),
            6 => Ok(TdesAlgorithm::Cfb1),
            7 => Ok(TdesAlgorithm::Ctr),
            _ => Err(EngineError::UnsupportedMode),
        }
    }
}

/// Transform direction requested by the harness.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Encrypt
    Encrypt,

    /// Decrypt
    Decrypt,
}

impl TryFrom<u32> for Direction {
    type Error = EngineError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Direction::Encrypt),
            2 => Ok(Direction::Decrypt),
            _ => Err(EngineError::UnsupportedDirection),
        }
    }
}

impl From<Direction> for CipherDirection {
    fn from(value: Direction) -> Self {
        match value {
            Direction::Encrypt => CipherDirection::Encrypt,
            Direction::Decrypt => CipherDirection::Decrypt,
        }
    }
}

/// Kind of test this case belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TestType {
    /// Algorithm functional test: one self-contained transform per case.
    Aft,
    /// Monte Carlo test: one step of an iterative chain per case.
    Mct,
}

/// One symmetric-cipher test case.
///
/// For `Aft` cases the engine writes the direction-appropriate output field
/// (`ciphertext` on encrypt, `plaintext` on decrypt). For `Mct` cases it
/// additionally populates `iv_before` and `iv_after` with the primitive
/// engine's IV register immediately before and immediately after the
/// transform, for every step that has such a register.
#[derive(Debug, Clone)]
pub struct SymCipherTestCase {
    /// Cipher+mode identifier.
    pub algorithm: TdesAlgorithm,

    /// Claimed key length in bits; must equal the family's mandated length.
    pub key_bits: u32,

    /// Raw key bundle, `key_bits / 8` bytes.
    pub key: Vec<u8>,

    /// Initialization vector; required for every mode except ECB and
    /// ignored otherwise.
    pub iv: Vec<u8>,

    /// Transform direction.
    pub direction: Direction,

    /// Test kind this case belongs to.
    pub test_type: TestType,

    /// Position of this call within a Monte Carlo chain; unused for `Aft`.
    pub mct_index: u32,

    /// Plaintext: input on encrypt, output on decrypt.
    pub plaintext: Vec<u8>,

    /// Ciphertext: input on decrypt, output on encrypt.
    pub ciphertext: Vec<u8>,

    /// Pre-operation IV register snapshot (Monte Carlo, non-first steps).
    pub iv_before: Vec<u8>,

    /// Post-operation IV register snapshot (Monte Carlo, every step).
    pub iv_after: Vec<u8>,
}

impl SymCipherTestCase {
    /// Builds an algorithm functional test case.
    pub fn aft(
        algorithm: TdesAlgorithm,
        key: Vec<u8>,
        iv: Vec<u8>,
        direction: Direction,
        text: Vec<u8>,
    ) -> Self {
        Self::with_type(TestType::Aft, 0, algorithm, key, iv, direction, text)
    }

    /// Builds one Monte Carlo chain step.
    pub fn mct_step(
        algorithm: TdesAlgorithm,
        key: Vec<u8>,
        iv: Vec<u8>,
        direction: Direction,
        text: Vec<u8>,
        mct_index: u32,
    ) -> Self {
        Self::with_type(TestType::Mct, mct_index, algorithm, key, iv, direction, text)
    }

    fn with_type(
        test_type: TestType,
        mct_index: u32,
        algorithm: TdesAlgorithm,
        key: Vec<u8>,
        iv: Vec<u8>,
        direction: Direction,
        text: Vec<u8>,
    ) -> Self {
        let (plaintext, ciphertext) = match direction {
            Direction::Encrypt => (text, Vec::new()),
            Direction::Decrypt => (Vec::new(), text),
        };
        Self {
            algorithm,
            key_bits: (key.len() * 8) as u32,
            key,
            iv,
            direction,
            test_type,
            mct_index,
            plaintext,
            ciphertext,
            iv_before: Vec::new(),
            iv_after: Vec::new(),
        }
    }
}
