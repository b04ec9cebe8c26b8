// Copyright (C) Microsoft Corporation. All rights reserved.

//! Single-shot (AFT) execution path tests against the public engine API.

use symval_crypto::CryptoError;
use symval_engine::*;

const ZERO_KEY: [u8; 24] = [0u8; 24];
const ZERO_IV: [u8; 8] = [0u8; 8];
const ZERO_BLOCK: [u8; 8] = [0u8; 8];

/// 3-key TDES of the zero block under the all-zero key collapses to a
/// single DES pass; DES(0) is the fixed 8ca64de9c1b123a7 answer.
const ZERO_KAT_CIPHERTEXT: &str = "8ca64de9c1b123a7";

#[test]
fn test_zero_key_cbc_known_answer() {
    let mut handler = TdesHandler::new();
    let mut tc = SymCipherTestCase::aft(
        TdesAlgorithm::Cbc,
        ZERO_KEY.to_vec(),
        ZERO_IV.to_vec(),
        Direction::Encrypt,
        ZERO_BLOCK.to_vec(),
    );

    handler.execute(&mut tc).unwrap();
    assert_eq!(hex::encode(&tc.ciphertext), ZERO_KAT_CIPHERTEXT);
    assert_eq!(tc.ciphertext.len(), tc.plaintext.len());

    // The session was torn down; an unrelated follow-up case on the same
    // handler must match a fresh handler's result exactly.
    let key = hex::decode("6d0d67da68ab166d1f43c7204c4c2aa4c81a528515f1dff2").unwrap();
    let iv = hex::decode("68e63a07b22e33eb").unwrap();
    let plaintext = hex::decode("4346c4e81380626fa0b2776d30a4fc05").unwrap();

    let mut followup = SymCipherTestCase::aft(
        TdesAlgorithm::Cbc,
        key.clone(),
        iv.clone(),
        Direction::Encrypt,
        plaintext.clone(),
    );
    handler.execute(&mut followup).unwrap();

    let mut fresh = SymCipherTestCase::aft(
        TdesAlgorithm::Cbc,
        key,
        iv,
        Direction::Encrypt,
        plaintext,
    );
    TdesHandler::new().execute(&mut fresh).unwrap();

    assert_eq!(followup.ciphertext, fresh.ciphertext);
    assert_eq!(
        hex::encode(&followup.ciphertext),
        "5274be183f5dfb6b018f22b322f0392d"
    );
}

#[test]
fn test_decrypt_reads_ciphertext_writes_plaintext() {
    let key = hex::decode("6d0d67da68ab166d1f43c7204c4c2aa4c81a528515f1dff2").unwrap();
    let iv = hex::decode("68e63a07b22e33eb").unwrap();
    let ciphertext = hex::decode("5274be183f5dfb6b018f22b322f0392d").unwrap();

    let mut tc = SymCipherTestCase::aft(
        TdesAlgorithm::Cbc,
        key,
        iv,
        Direction::Decrypt,
        ciphertext,
    );
    TdesHandler::new().execute(&mut tc).unwrap();
    assert_eq!(
        hex::encode(&tc.plaintext),
        "4346c4e81380626fa0b2776d30a4fc05"
    );
}

#[test]
fn test_roundtrip_through_handler_all_modes() {
    use rand::Rng;

    let mut rng = rand::thread_rng();
    let key: [u8; 24] = rng.gen();
    let iv: [u8; 8] = rng.gen();

    for (algorithm, len) in [
        (TdesAlgorithm::Ecb, 16usize),
        (TdesAlgorithm::Cbc, 24),
        (TdesAlgorithm::Ofb, 16),
        (TdesAlgorithm::Cfb64, 16),
        (TdesAlgorithm::Cfb8, 11),
        (TdesAlgorithm::Cfb1, 3),
    ] {
        let mut plaintext = vec![0u8; len];
        rng.fill(&mut plaintext[..]);

        let mut handler = TdesHandler::new();
        let mut enc = SymCipherTestCase::aft(
            algorithm,
            key.to_vec(),
            iv.to_vec(),
            Direction::Encrypt,
            plaintext.clone(),
        );
        handler.execute(&mut enc).unwrap();
        assert_eq!(enc.ciphertext.len(), len, "{:?} padded its output", algorithm);

        let mut dec = SymCipherTestCase::aft(
            algorithm,
            key.to_vec(),
            iv.to_vec(),
            Direction::Decrypt,
            enc.ciphertext.clone(),
        );
        handler.execute(&mut dec).unwrap();
        assert_eq!(dec.plaintext, plaintext, "{:?} roundtrip failed", algorithm);
    }
}

#[test]
fn test_key_length_mismatch_rejected() {
    // Claimed length differs from the mandated 192 bits.
    let mut tc = SymCipherTestCase::aft(
        TdesAlgorithm::Cbc,
        vec![0u8; 16],
        ZERO_IV.to_vec(),
        Direction::Encrypt,
        ZERO_BLOCK.to_vec(),
    );
    assert_eq!(tc.key_bits, 128);
    assert_eq!(
        TdesHandler::new().execute(&mut tc).unwrap_err(),
        EngineError::UnsupportedKeyLength
    );
    assert!(tc.ciphertext.is_empty());

    // Claimed length is right but the key material is not.
    let mut tc = SymCipherTestCase::aft(
        TdesAlgorithm::Cbc,
        vec![0u8; 16],
        ZERO_IV.to_vec(),
        Direction::Encrypt,
        ZERO_BLOCK.to_vec(),
    );
    tc.key_bits = 192;
    assert_eq!(
        TdesHandler::new().execute(&mut tc).unwrap_err(),
        EngineError::UnsupportedKeyLength
    );
    assert!(tc.ciphertext.is_empty());
}

#[test]
fn test_counter_mode_rejected_before_session_use() {
    let mut tc = SymCipherTestCase::aft(
        TdesAlgorithm::Ctr,
        ZERO_KEY.to_vec(),
        ZERO_IV.to_vec(),
        Direction::Encrypt,
        ZERO_BLOCK.to_vec(),
    );
    assert_eq!(
        TdesHandler::new().execute(&mut tc).unwrap_err(),
        EngineError::UnsupportedMode
    );
    assert!(tc.ciphertext.is_empty());
}

#[test]
fn test_wire_conversions_reject_unknown_discriminants() {
    assert_eq!(Direction::try_from(1).unwrap(), Direction::Encrypt);
    assert_eq!(Direction::try_from(2).unwrap(), Direction::Decrypt);
    assert_eq!(
        Direction::try_from(3).unwrap_err(),
        EngineError::UnsupportedDirection
    );

    assert_eq!(TdesAlgorithm::try_from(2).unwrap(), TdesAlgorithm::Cbc);
    assert_eq!(TdesAlgorithm::try_from(7).unwrap(), TdesAlgorithm::Ctr);
    assert_eq!(
        TdesAlgorithm::try_from(99).unwrap_err(),
        EngineError::UnsupportedMode
    );
}

#[test]
fn test_failed_case_leaves_outputs_untouched() {
    // A partial block is invalid for CBC with padding disabled.
    let mut tc = SymCipherTestCase::aft(
        TdesAlgorithm::Cbc,
        ZERO_KEY.to_vec(),
        ZERO_IV.to_vec(),
        Direction::Encrypt,
        vec![0u8; 5],
    );
    let err = TdesHandler::new().execute(&mut tc).unwrap_err();
    assert_eq!(err, EngineError::Crypto(CryptoError::DesInvalidInputSize));
    assert!(tc.ciphertext.is_empty());
    assert!(tc.iv_before.is_empty());
    assert!(tc.iv_after.is_empty());
}

#[test]
fn test_ecb_ignores_iv_field() {
    let mut with_iv = SymCipherTestCase::aft(
        TdesAlgorithm::Ecb,
        ZERO_KEY.to_vec(),
        vec![0xau8; 8],
        Direction::Encrypt,
        ZERO_BLOCK.to_vec(),
    );
    TdesHandler::new().execute(&mut with_iv).unwrap();

    let mut without_iv = SymCipherTestCase::aft(
        TdesAlgorithm::Ecb,
        ZERO_KEY.to_vec(),
        Vec::new(),
        Direction::Encrypt,
        ZERO_BLOCK.to_vec(),
    );
    TdesHandler::new().execute(&mut without_iv).unwrap();

    assert_eq!(with_iv.ciphertext, without_iv.ciphertext);
    assert_eq!(hex::encode(&with_iv.ciphertext), ZERO_KAT_CIPHERTEXT);
}
