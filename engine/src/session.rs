// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Cipher session lifecycle.
//!
//! A session is the caller-owned handle wrapping one primitive engine
//! instance for the lifetime of a logical test run. It is created lazily on
//! first use, reused unchanged across the steps of an iterative chain, and
//! explicitly released on teardown. Keeping the handle caller-owned (rather
//! than process-global) lets independent chains run on independent sessions.

use symval_crypto::CipherDirection;
use symval_crypto::CryptoError;
use symval_crypto::ImportableKey;
use symval_crypto::SymCipherEngine;
use symval_crypto::TdesCipher;

use crate::EngineError;
use crate::ModeConfig;

/// Session over the TDES primitive engine.
pub type TdesSession = CipherSession<TdesCipher>;

/// Stateful handle over one primitive engine instance.
///
/// At most one logical chain may use a session at a time: state is chained
/// across calls, so calls for one chain must arrive in order and must not
/// interleave with another chain on the same session.
pub struct CipherSession<E: SymCipherEngine> {
    engine: Option<E>,
}

impl<E: SymCipherEngine> Default for CipherSession<E> {
    fn default() -> Self {
        Self { engine: None }
    }
}

impl<E: SymCipherEngine> CipherSession<E>
where
    E::Key: ImportableKey,
{
    /// Creates an empty session; the engine is allocated on first
    /// [`ensure`](Self::ensure).
    pub fn new() -> Self {
        Self { engine: None }
    }

    /// Idempotently allocates the primitive engine instance.
    ///
    /// # Errors
    ///
    /// * `EngineError::AllocationFailure` - the engine could not be created.
    pub fn ensure(&mut self) -> Result<(), EngineError> {
        if self.engine.is_none() {
            let engine = E::create().map_err(|err| {
                tracing::error!(?err, "failed to allocate cipher engine");
                EngineError::AllocationFailure
            })?;
            self.engine = Some(engine);
            tracing::debug!("cipher engine allocated");
        }
        Ok(())
    }

    /// (Re)initializes the engine for one stream.
    ///
    /// Disables automatic padding (the protocol operates on exact,
    /// pre-sized blocks) and enables bit-oriented framing when the resolved
    /// mode requires it. May be called repeatedly on the same session to
    /// re-key for a new chain.
    pub fn configure(
        &mut self,
        config: &ModeConfig,
        key: &[u8],
        iv: &[u8],
        direction: CipherDirection,
    ) -> Result<(), EngineError> {
        let engine = self.engine.as_mut().ok_or(EngineError::AllocationFailure)?;
        let key = E::Key::from_bytes(key)?;
        let iv = config.requires_iv.then_some(iv);
        engine.set_padding(false);
        engine.set_bit_framing(config.bit_oriented);
        engine.init(config.feedback, &key, iv, direction)?;
        Ok(())
    }

    /// Reads the engine's IV register at this instant.
    ///
    /// `None` when the session holds no engine, the engine is not
    /// configured, or the configured mode has no register.
    pub fn read_iv(&self) -> Option<Vec<u8>> {
        self.engine
            .as_ref()
            .and_then(|engine| engine.iv_register())
            .map(<[u8]>::to_vec)
    }

    /// Applies one transform over the full input, advancing engine state.
    ///
    /// With padding disabled the output is exactly as long as the input.
    pub fn transform(&mut self, input: &[u8]) -> Result<Vec<u8>, EngineError> {
        let engine = self
            .engine
            .as_mut()
            .ok_or(EngineError::Crypto(CryptoError::DesNotInitialized))?;
        let mut output = vec![0u8; input.len()];
        let count = engine.transform(input, &mut output)?;
        output.truncate(count);
        Ok(output)
    }

    /// Frees the engine instance.
    ///
    /// Safe to call on a session that was never configured; a subsequent
    /// [`ensure`](Self::ensure) allocates a fresh engine.
    pub fn release(&mut self) {
        if let Some(mut engine) = self.engine.take() {
            engine.reset();
            tracing::debug!("cipher engine released");
        }
    }
}
