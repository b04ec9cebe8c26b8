// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Monte Carlo test orchestrator.
//!
//! The Monte Carlo protocol drives thousands of chained transforms through
//! one long-lived session, one step per harness call. The harness supplies
//! the already-chained input text for each step; the engine is the sole
//! source of truth for the primitive engine's internal IV register, which it
//! snapshots immediately before and immediately after each step's transform.

use symval_crypto::CryptoError;

use crate::handler::transform_input;
use crate::Direction;
use crate::EngineError;
use crate::ModeConfig;
use crate::SymCipherTestCase;
use crate::TdesHandler;

/// Number of steps in one Monte Carlo chain; step indexes run from 0 to
/// `MCT_CHAIN_STEPS - 1`.
pub const MCT_CHAIN_STEPS: u32 = 10_000;

/// Position of one step within a Monte Carlo chain.
///
/// The orchestrator acts differently at the chain boundaries: the first
/// step initializes the session, the last step tears it down, and every
/// other step only advances it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum McStep {
    /// Step 0: the session is configured here; no prior step exists, so no
    /// pre-operation snapshot is taken.
    First,
    /// Any step strictly between the chain bounds.
    Middle,
    /// The terminal step: the session is released after the transform.
    Last,
}

impl McStep {
    /// Classifies a step index against the chain bounds.
    pub fn classify(mct_index: u32) -> Self {
        match mct_index {
            0 => McStep::First,
            index if index == MCT_CHAIN_STEPS - 1 => McStep::Last,
            _ => McStep::Middle,
        }
    }
}

impl TdesHandler {
    /// Runs one step of a Monte Carlo chain.
    ///
    /// All output-field writes are staged locally and committed only once
    /// every fallible operation has succeeded, so a failed step leaves the
    /// test case untouched.
    pub(crate) fn run_monte_carlo(
        &mut self,
        tc: &mut SymCipherTestCase,
        config: &ModeConfig,
    ) -> Result<(), EngineError> {
        let step = McStep::classify(tc.mct_index);
        tracing::debug!(
            algorithm = ?tc.algorithm,
            direction = ?tc.direction,
            mct_index = tc.mct_index,
            ?step,
            "executing Monte Carlo step"
        );

        let iv_before = match step {
            McStep::First => {
                self.session.ensure()?;
                self.session
                    .configure(config, &tc.key, &tc.iv, tc.direction.into())?;
                None
            }
            McStep::Middle | McStep::Last => {
                // The pre-operation register carried over from the previous
                // step, distinct from the chain's original input IV.
                self.snapshot_iv(config)?
            }
        };

        let output = self.session.transform(transform_input(tc))?;
        let iv_after = self.snapshot_iv(config)?;

        if step == McStep::Last {
            self.session.release();
        }

        if let Some(iv) = iv_before {
            tc.iv_before = iv;
        }
        if let Some(iv) = iv_after {
            tc.iv_after = iv;
        }
        match tc.direction {
            Direction::Encrypt => tc.ciphertext = output,
            Direction::Decrypt => tc.plaintext = output,
        }
        Ok(())
    }

    /// Reads the session's IV register for an IV-bearing mode.
    ///
    /// Modes without a register (ECB) yield `None`; an IV-bearing mode with
    /// no readable register means the session was never configured for this
    /// chain, which is a caller protocol violation and fails loudly.
    fn snapshot_iv(&self, config: &ModeConfig) -> Result<Option<Vec<u8>>, EngineError> {
        if !config.requires_iv {
            return Ok(None);
        }
        match self.session.read_iv() {
            Some(iv) => Ok(Some(iv)),
            None => {
                tracing::error!("IV register unavailable; chain step without configured session");
                Err(EngineError::Crypto(CryptoError::DesNotInitialized))
            }
        }
    }
}
