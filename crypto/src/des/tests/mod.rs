// Copyright (C) Microsoft Corporation. All rights reserved.

mod testvectors;

use super::*;

/// TDES known-answer test vector, hex encoded.
pub struct TdesTestVector {
    pub test_count_id: u32,
    pub feedback: FeedbackMode,
    pub key: &'static str,
    pub iv: Option<&'static str>,
    pub plaintext: &'static str,
    pub ciphertext: &'static str,
}

/// Builds a context keyed for one stream, padding off, framing per mode.
pub fn keyed_context(
    feedback: FeedbackMode,
    key: &[u8],
    iv: Option<&[u8]>,
    direction: CipherDirection,
) -> TdesCipher {
    let key = TdesKey::from_bytes(key).expect("test key must be 24 bytes");
    let mut ctx = TdesCipher::new();
    ctx.set_padding(false);
    ctx.set_bit_framing(feedback.bit_oriented());
    ctx.init(feedback, &key, iv, direction)
        .expect("test context init");
    ctx
}
