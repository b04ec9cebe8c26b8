// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! The capability set a substitutable symmetric cipher engine must expose.
//!
//! The validation engine drives its primitive through exactly these
//! operations: create, (re)initialize, padding and framing flags, transform,
//! IV-register read, and reset. Any engine implementing this trait can be
//! swapped in without touching the session or orchestration layers.

use super::*;

/// Feedback framing of a block-cipher context.
///
/// CBC, OFB and the CFB variants evolve an internal feedback register with
/// every unit processed; ECB has no chained state. The CFB variants differ
/// in the size of the feedback unit (full block, one byte, one bit).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackMode {
    /// Electronic codebook, no feedback register.
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
}

impl FeedbackMode {
    /// Whether this framing maintains an IV/feedback register.
    pub fn requires_iv(self) -> bool {
        !matches!(self, FeedbackMode::Ecb)
    }

    /// Whether this framing operates on single-bit feedback units.
    pub fn bit_oriented(self) -> bool {
        matches!(self, FeedbackMode::Cfb1)
    }
}

/// Transform direction of a cipher context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CipherDirection {
    /// Encrypt
    Encrypt,

    /// Decrypt
    Decrypt,
}

/// Operations of a substitutable symmetric cipher engine.
///
/// An engine is a long-lived context: it is created once, (re)initialized
/// with key/IV/direction per logical stream, and advances its feedback
/// register as a side effect of every [`transform`](Self::transform) call.
/// The register must reflect the state *at the moment of the call* to
/// [`iv_register`](Self::iv_register); iterative test protocols read it both
/// before and after a transform.
pub trait SymCipherEngine: Sized {
    /// Key type consumed by [`init`](Self::init).
    type Key: Key;

    /// Creates an unconfigured engine context.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying context cannot be allocated.
    fn create() -> Result<Self, CryptoError>;

    /// (Re)initializes the context with key, IV and direction.
    ///
    /// May be called repeatedly on the same context to start a new stream;
    /// any previous feedback state is discarded and the register is reloaded
    /// from `iv`.
    ///
    /// # Errors
    ///
    /// Returns an error if the key cannot be scheduled, or if `iv` is absent
    /// or not one block long for a framing that requires one.
    fn init(
        &mut self,
        feedback: FeedbackMode,
        key: &Self::Key,
        iv: Option<&[u8]>,
        direction: CipherDirection,
    ) -> Result<(), CryptoError>;

    /// Enables or disables block padding for subsequent transforms.
    fn set_padding(&mut self, pad: bool);

    /// Enables or disables bit-oriented framing for subsequent transforms.
    fn set_bit_framing(&mut self, enable: bool);

    /// Applies the configured direction's transform over the full input.
    ///
    /// Advances the feedback register as a side effect. With padding
    /// disabled the output length equals the input length exactly.
    ///
    /// # Returns
    ///
    /// The number of bytes written to `output`.
    ///
    /// # Errors
    ///
    /// Returns an error if the context is uninitialized, the input length is
    /// invalid for the framing, or the output buffer is too small.
    fn transform(&mut self, input: &[u8], output: &mut [u8]) -> Result<usize, CryptoError>;

    /// Returns the current feedback register, exactly one block long.
    ///
    /// `None` for an uninitialized context or a framing with no register.
    fn iv_register(&self) -> Option<&[u8]>;

    /// Returns the cipher block size in bytes.
    fn block_size(&self) -> usize;

    /// Drops key material and feedback state.
    ///
    /// Safe to call on a context that was never initialized; a subsequent
    /// [`init`](Self::init) starts fresh.
    fn reset(&mut self);
}
