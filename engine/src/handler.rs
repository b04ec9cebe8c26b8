// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Test-case execution handler.
//!
//! One handler owns one cipher session and executes one test case per call,
//! routing between the single-shot path and the Monte Carlo orchestrator.
//! Validation of the mode and key length happens once, before the session
//! is touched, on both paths.

use crate::Direction;
use crate::EngineError;
use crate::ModeConfig;
use crate::SymCipherTestCase;
use crate::TdesSession;
use crate::TestType;

/// Executes TDES validation test cases over one owned session.
#[derive(Default)]
pub struct TdesHandler {
    pub(crate) session: TdesSession,
}

impl TdesHandler {
    /// Creates a handler with an empty session.
    pub fn new() -> Self {
        Self {
            session: TdesSession::new(),
        }
    }

    /// Executes one test case, mutating its output fields in place.
    ///
    /// On success the direction-appropriate output field is populated (and,
    /// for Monte Carlo steps, the IV snapshots). On failure the test case
    /// is left untouched.
    ///
    /// # Errors
    ///
    /// * `EngineError::UnsupportedMode` - unresolved cipher/mode variant.
    /// * `EngineError::UnsupportedKeyLength` - key length differs from the
    ///   family's mandated 192 bits.
    /// * `EngineError::AllocationFailure` - the primitive engine could not
    ///   be created.
    /// * `EngineError::Crypto` - the primitive engine rejected the
    ///   configuration or transform.
    pub fn execute(&mut self, tc: &mut SymCipherTestCase) -> Result<(), EngineError> {
        let config = validate(tc)?;
        match tc.test_type {
            TestType::Aft => self.run_single_shot(tc, &config),
            TestType::Mct => self.run_monte_carlo(tc, &config),
        }
    }

    /// Single-shot path: configure, transform, tear down, per call.
    fn run_single_shot(
        &mut self,
        tc: &mut SymCipherTestCase,
        config: &ModeConfig,
    ) -> Result<(), EngineError> {
        tracing::debug!(
            algorithm = ?tc.algorithm,
            direction = ?tc.direction,
            "executing single-shot case"
        );

        self.session.ensure()?;
        let outcome = self.configure_and_transform(tc, config);
        // No state is carried to the next case.
        self.session.release();
        let output = outcome?;

        match tc.direction {
            Direction::Encrypt => tc.ciphertext = output,
            Direction::Decrypt => tc.plaintext = output,
        }
        Ok(())
    }

    fn configure_and_transform(
        &mut self,
        tc: &SymCipherTestCase,
        config: &ModeConfig,
    ) -> Result<Vec<u8>, EngineError> {
        self.session
            .configure(config, &tc.key, &tc.iv, tc.direction.into())?;
        self.session.transform(transform_input(tc))
    }
}

/// Selects the transform input by direction: encrypt reads the plaintext,
/// decrypt reads the ciphertext.
pub(crate) fn transform_input(tc: &SymCipherTestCase) -> &[u8] {
    match tc.direction {
        Direction::Encrypt => &tc.plaintext,
        Direction::Decrypt => &tc.ciphertext,
    }
}

/// Shared validation for both execution paths.
///
/// Resolves the mode and checks the claimed and actual key lengths against
/// the mandated length before any session state is touched.
fn validate(tc: &SymCipherTestCase) -> Result<ModeConfig, EngineError> {
    let config = tc.algorithm.resolve()?;
    if tc.key_bits != config.key_bits {
        tracing::error!(
            key_bits = tc.key_bits,
            mandated = config.key_bits,
            "rejecting case with unsupported key length"
        );
        return Err(EngineError::UnsupportedKeyLength);
    }
    if tc.key.len() * 8 != config.key_bits as usize {
        tracing::error!(
            key_len = tc.key.len(),
            "key material does not match the claimed key length"
        );
        return Err(EngineError::UnsupportedKeyLength);
    }
    Ok(config)
}
