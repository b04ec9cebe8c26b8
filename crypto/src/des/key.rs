// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! 3-key TDES key container.

use super::*;

/// Raw length of a 3-key TDES key in bytes (three 64-bit DES keys).
pub const TDES_KEY_SIZE: usize = 24;

/// A 3-key Triple-DES key.
///
/// Holds the raw 24-byte key bundle (K1 || K2 || K3). DES parity bits are
/// carried through untouched; the key schedule ignores them.
#[derive(Debug, Clone)]
pub struct TdesKey {
    key: Vec<u8>,
}

impl TdesKey {
    /// Returns the raw key bytes.
    pub fn bytes(&self) -> &[u8] {
        &self.key
    }
}

impl Key for TdesKey {
    fn size(&self) -> usize {
        self.key.len()
    }
}

impl ImportableKey for TdesKey {
    /// Imports a 3-key TDES key from raw bytes.
    ///
    /// # Errors
    ///
    /// * `CryptoError::DesInvalidKeySize` - if the input is not exactly
    ///   24 bytes. Only the 3-key variant is supported; 1-key and 2-key
    ///   bundles are rejected.
    fn from_bytes(bytes: &[u8]) -> Result<Self, CryptoError> {
        if bytes.len() != TDES_KEY_SIZE {
            tracing::error!(len = bytes.len(), "rejecting TDES key of unsupported length");
            return Err(CryptoError::DesInvalidKeySize);
        }

        Ok(Self {
            key: bytes.to_vec(),
        })
    }
}
