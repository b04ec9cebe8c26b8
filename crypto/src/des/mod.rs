// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! 3-key Triple-DES (TDES EDE3) primitive engine.
//!
//! This module provides the TDES cipher context used by the validation
//! engine. The block primitive comes from the RustCrypto `des` crate; the
//! feedback-mode chaining (CBC, OFB, CFB-64, CFB-8, CFB-1) is implemented
//! here so the feedback register stays observable between operations, which
//! the iterative test protocols require.

mod cipher;
mod key;

pub use self::cipher::*;
pub use self::key::*;

pub(crate) use super::*;

/// DES block size in bytes. TDES keeps the 64-bit DES block.
pub const DES_BLOCK_SIZE: usize = 8;

#[cfg(test)]
mod tests;
