// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Symmetric block-cipher primitive engines for validation testing.
//!
//! This crate provides the primitive-engine layer consumed by the validation
//! execution engine. It includes:
//!
//! - **TDES**: a 3-key Triple-DES cipher context covering ECB, CBC, OFB and
//!   the CFB-64/CFB-8/CFB-1 feedback framings
//! - **Engine trait**: the capability set a substitutable primitive engine
//!   must expose (create, init, padding/framing flags, transform, IV-register
//!   read, reset)
//! - **Key types**: raw symmetric key containers with length validation
//!
//! # Feedback register
//!
//! Unlike general-purpose cipher bindings, every feedback-mode context here
//! keeps its chaining state in an explicit register that callers can read at
//! any instant. Iterative validation protocols compare that register against
//! a reference implementation before and after each chained operation, so the
//! register is part of the public contract rather than an internal detail.

mod des;
mod traits;

pub use self::des::*;
use thiserror::Error;
pub use traits::*;

/// Error type for primitive cipher-engine operations.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CryptoError {
    /// DES key size is invalid for the algorithm.
    #[error("DES invalid key size")]
    DesInvalidKeySize,
    /// DES initialization vector size is invalid.
    #[error("DES invalid IV size")]
    DesInvalidIVSize,
    /// DES input size is invalid for the configured feedback mode.
    #[error("DES invalid input size")]
    DesInvalidInputSize,
    /// DES padding is invalid or verification failed.
    #[error("DES invalid padding")]
    DesInvalidPadding,
    /// Output buffer is too small for the DES operation.
    #[error("DES buffer too small")]
    DesBufferTooSmall,
    /// The cipher context has not been initialized with key material.
    #[error("DES cipher not initialized")]
    DesNotInitialized,
    /// The configured feedback mode requires bit-oriented framing.
    #[error("DES bit framing required")]
    DesBitFramingRequired,
    /// General DES operation failure.
    #[error("DES operation failed")]
    DesError,
}
