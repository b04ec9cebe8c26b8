// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Cipher mode resolver.
//!
//! Maps the abstract cipher+mode identifier supplied by the harness to the
//! primitive configuration the session layer needs. The mapping is pure and
//! total over the declared enumeration: every variant either resolves or is
//! rejected explicitly, never silently defaulted.

use symval_crypto::FeedbackMode;

use crate::EngineError;
use crate::TdesAlgorithm;

/// Mandated key length for the 3-key TDES family, in bits.
pub const TDES_KEY_BITS: u32 = 192;

/// Primitive configuration of one resolved cipher mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModeConfig {
    /// Feedback framing to request from the primitive engine.
    pub feedback: FeedbackMode,

    /// Whether the mode consumes an initialization vector.
    pub requires_iv: bool,

    /// Whether bit-oriented framing must be enabled on the engine.
    pub bit_oriented: bool,

    /// Mandated key length for this algorithm family, in bits.
    pub key_bits: u32,
}

impl ModeConfig {
    fn for_feedback(feedback: FeedbackMode) -> Self {
        Self {
            feedback,
            requires_iv: feedback.requires_iv(),
            bit_oriented: feedback.bit_oriented(),
            key_bits: TDES_KEY_BITS,
        }
    }
}

impl TdesAlgorithm {
    /// Resolves this identifier to a primitive configuration.
    ///
    /// # Errors
    ///
    /// * `EngineError::UnsupportedMode` - the variant is recognized but not
    ///   implemented (counter mode). Unresolved modes never fall back to
    ///   another configuration.
    pub fn resolve(self) -> Result<ModeConfig, EngineError> {
        match self {
            TdesAlgorithm::Ecb => Ok(ModeConfig::for_feedback(FeedbackMode::Ecb)),
            TdesAlgorithm::Cbc => Ok(ModeConfig::for_feedback(FeedbackMode::Cbc)),
            TdesAlgorithm::Ofb => Ok(ModeConfig::for_feedback(FeedbackMode::Ofb)),
            TdesAlgorithm::Cfb64 => Ok(ModeConfig::for_feedback(FeedbackMode::Cfb64)),
            TdesAlgorithm::Cfb8 => Ok(ModeConfig::for_feedback(FeedbackMode::Cfb8)),
            TdesAlgorithm::Cfb1 => Ok(ModeConfig::for_feedback(FeedbackMode::Cfb1)),
            TdesAlgorithm::Ctr => {
                tracing::error!("counter mode requested but not implemented");
                Err(EngineError::UnsupportedMode)
            }
        }
    }
}
