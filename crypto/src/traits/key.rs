// Copyright (C) Microsoft Corporation. All rights reserved.

//! Key material traits.

use super::*;

/// Marks a type as a cryptographic key.
pub trait Key {
    /// Returns the length of the key in bytes.
    fn size(&self) -> usize;

    /// Returns the length of the key in bits.
    fn bits(&self) -> usize {
        self.size() * 8
    }
}

/// Marks a key as importable from raw bytes.
pub trait ImportableKey: Sized {
    /// Imports a key from its raw byte representation.
    ///
    /// # Errors
    ///
    /// Returns an error if the byte length is not valid for the key type.
    fn from_bytes(bytes: &[u8]) -> Result<Self, CryptoError>;
}
