// Copyright (C) Microsoft Corporation. All rights reserved.

//! Validation engine error module.

use symval_crypto::CryptoError;
use thiserror::Error;

/// Engine error.
///
/// Every failure is immediately fatal to the current call: no local
/// recovery, no retry, no partial output. On any error the test case's
/// output fields are left unmodified; the harness decides whether to report
/// or retry.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum EngineError {
    /// Key length does not match the algorithm family's mandated length
    #[error("unsupported key length")]
    UnsupportedKeyLength,

    /// Cipher/mode combination is not implemented
    #[error("unsupported cipher mode")]
    UnsupportedMode,

    /// Direction outside encrypt/decrypt
    #[error("unsupported cipher direction")]
    UnsupportedDirection,

    /// Primitive engine instance could not be created
    #[error("cipher engine allocation failed")]
    AllocationFailure,

    /// Primitive engine failure
    #[error("cipher engine failure")]
    Crypto(#[from] CryptoError),
}
