// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use super::TdesTestVector;
use crate::FeedbackMode;

/// NIST CAVP tdesmmt known answers (TECBMMT3, TCBCMMT3, TCFB64MMT3) plus
/// the classic single-DES-collapse answers for keys with K1 == K2 == K3,
/// where EDE3 degenerates to one DES pass.
pub const TDES_MMT_TEST_VECTORS: &[TdesTestVector] = &[
    // 4th test from tdesmmt/TECBMMT3.rsp
    TdesTestVector {
        test_count_id: 1,
        feedback: FeedbackMode::Ecb,
        key: "2c29202c10797985efc252b3da378a89e9a7f88c98c73b1c",
        iv: None,
        plaintext: "4058771b9c808e6935650f97db27e9e69641fcc5e7bc7fa551a29f0918b669dc",
        ciphertext: "9438d7b8b2057a624a4071de46c986a3393da868a29647041418cb946a51d368",
    },
    // 2nd test from tdesmmt/TCBCMMT3.rsp
    TdesTestVector {
        test_count_id: 2,
        feedback: FeedbackMode::Cbc,
        key: "6d0d67da68ab166d1f43c7204c4c2aa4c81a528515f1dff2",
        iv: Some("68e63a07b22e33eb"),
        plaintext: "4346c4e81380626fa0b2776d30a4fc05",
        ciphertext: "5274be183f5dfb6b018f22b322f0392d",
    },
    // 1st test from tdesmmt/TCFB64MMT3.rsp
    TdesTestVector {
        test_count_id: 3,
        feedback: FeedbackMode::Cfb64,
        key: "e0d525e9eca226d5584a702fdcd3df238058ad4c1570348f",
        iv: Some("8bf6febfde90bd17"),
        plaintext: "2685a38657e8dbfe",
        ciphertext: "e9fbc028105354ed",
    },
    // All-zero 3-key bundle collapses to single DES; DES(0) of the zero
    // block is the fixed 8ca64de9c1b123a7 answer.
    TdesTestVector {
        test_count_id: 4,
        feedback: FeedbackMode::Ecb,
        key: "000000000000000000000000000000000000000000000000",
        iv: None,
        plaintext: "0000000000000000",
        ciphertext: "8ca64de9c1b123a7",
    },
    TdesTestVector {
        test_count_id: 5,
        feedback: FeedbackMode::Cbc,
        key: "000000000000000000000000000000000000000000000000",
        iv: Some("0000000000000000"),
        plaintext: "0000000000000000",
        ciphertext: "8ca64de9c1b123a7",
    },
    // FIPS-era single-DES example, 3-key bundle with all keys equal.
    TdesTestVector {
        test_count_id: 6,
        feedback: FeedbackMode::Ecb,
        key: "0123456789abcdef0123456789abcdef0123456789abcdef",
        iv: None,
        plaintext: "4e6f772069732074",
        ciphertext: "3fa40e8a984d4815",
    },
    // OFB/CFB-64 with the zero key and zero IV: the first keystream block
    // is DES(0), so the first ciphertext block equals it for zero plaintext.
    TdesTestVector {
        test_count_id: 7,
        feedback: FeedbackMode::Ofb,
        key: "000000000000000000000000000000000000000000000000",
        iv: Some("0000000000000000"),
        plaintext: "0000000000000000",
        ciphertext: "8ca64de9c1b123a7",
    },
    TdesTestVector {
        test_count_id: 8,
        feedback: FeedbackMode::Cfb64,
        key: "000000000000000000000000000000000000000000000000",
        iv: Some("0000000000000000"),
        plaintext: "0000000000000000",
        ciphertext: "8ca64de9c1b123a7",
    },
    // CFB-8, single byte: the ciphertext byte is the high byte of DES(0).
    TdesTestVector {
        test_count_id: 9,
        feedback: FeedbackMode::Cfb8,
        key: "000000000000000000000000000000000000000000000000",
        iv: Some("0000000000000000"),
        plaintext: "00",
        ciphertext: "8c",
    },
];
