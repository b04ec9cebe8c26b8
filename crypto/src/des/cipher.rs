// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! TDES cipher context with an observable feedback register.
//!
//! The context mirrors the shape of an EVP-style cipher handle: it is
//! allocated unconfigured, keyed via `init`, and advances an internal
//! feedback register with every transform. The register is kept in this
//! structure rather than inside the block primitive so callers can snapshot
//! it between chained operations.

use ::cipher::{Block, BlockDecrypt, BlockEncrypt, KeyInit};
use ::des::TdesEde3;

use super::*;

type DesBlock = Block<TdesEde3>;

/// 3-key Triple-DES cipher context.
///
/// Implements [`SymCipherEngine`] over the EDE3 block primitive with
/// ECB, CBC, OFB, CFB-64, CFB-8 and CFB-1 framings. One context serves one
/// logical stream at a time; `init` may be called again to re-key it for a
/// new stream.
pub struct TdesCipher {
    state: Option<TdesState>,

    /// Whether block padding is applied (ECB/CBC only). Defaults to on,
    /// matching conventional cipher-context behavior; validation protocols
    /// switch it off because they operate on exact, pre-sized blocks.
    pad: bool,

    /// Whether bit-oriented framing is engaged. Required for CFB-1.
    bit_framing: bool,
}

/// Keyed state of a configured context.
struct TdesState {
    schedule: TdesEde3,
    feedback: FeedbackMode,
    direction: CipherDirection,

    /// Feedback register, present for every framing except ECB.
    register: Option<[u8; DES_BLOCK_SIZE]>,
}

impl TdesCipher {
    /// Creates an unconfigured context.
    pub fn new() -> Self {
        Self {
            state: None,
            pad: true,
            bit_framing: false,
        }
    }
}

impl Default for TdesCipher {
    fn default() -> Self {
        Self::new()
    }
}

impl SymCipherEngine for TdesCipher {
    type Key = TdesKey;

    fn create() -> Result<Self, CryptoError> {
        Ok(Self::new())
    }

    /// (Re)keys the context.
    ///
    /// The key schedule is rebuilt from `key`, the feedback register is
    /// reloaded from `iv`, and any previous stream state is discarded.
    ///
    /// # Errors
    ///
    /// * `CryptoError::DesInvalidKeySize` - the key bundle cannot be
    ///   scheduled.
    /// * `CryptoError::DesInvalidIVSize` - the framing requires an IV and
    ///   `iv` is absent or not exactly one block. For ECB any supplied IV is
    ///   ignored.
    fn init(
        &mut self,
        feedback: FeedbackMode,
        key: &Self::Key,
        iv: Option<&[u8]>,
        direction: CipherDirection,
    ) -> Result<(), CryptoError> {
        let schedule =
            TdesEde3::new_from_slice(key.bytes()).map_err(|_| CryptoError::DesInvalidKeySize)?;

        let register = if feedback.requires_iv() {
            let iv = iv.ok_or(CryptoError::DesInvalidIVSize)?;
            if iv.len() != DES_BLOCK_SIZE {
                tracing::error!(len = iv.len(), ?feedback, "rejecting IV of invalid length");
                return Err(CryptoError::DesInvalidIVSize);
            }
            let mut register = [0u8; DES_BLOCK_SIZE];
            register.copy_from_slice(iv);
            Some(register)
        } else {
            None
        };

        self.state = Some(TdesState {
            schedule,
            feedback,
            direction,
            register,
        });

        tracing::debug!(?feedback, ?direction, "TDES context initialized");
        Ok(())
    }

    fn set_padding(&mut self, pad: bool) {
        self.pad = pad;
    }

    fn set_bit_framing(&mut self, enable: bool) {
        self.bit_framing = enable;
    }

    fn transform(&mut self, input: &[u8], output: &mut [u8]) -> Result<usize, CryptoError> {
        let pad = self.pad;
        let bit_framing = self.bit_framing;
        let state = self.state.as_mut().ok_or(CryptoError::DesNotInitialized)?;
        let direction = state.direction;
        let schedule = &state.schedule;

        match (state.feedback, state.register.as_mut()) {
            (FeedbackMode::Ecb, _) => {
                block_mode(schedule, direction, None, pad, input, output)
            }
            (FeedbackMode::Cbc, Some(register)) => {
                block_mode(schedule, direction, Some(register), pad, input, output)
            }
            (FeedbackMode::Ofb, Some(register)) => {
                check_block_aligned(input)?;
                check_capacity(output, input.len())?;
                ofb(schedule, register, input, output);
                Ok(input.len())
            }
            (FeedbackMode::Cfb64, Some(register)) => {
                check_block_aligned(input)?;
                check_capacity(output, input.len())?;
                cfb64(schedule, direction, register, input, output);
                Ok(input.len())
            }
            (FeedbackMode::Cfb8, Some(register)) => {
                check_capacity(output, input.len())?;
                cfb8(schedule, direction, register, input, output);
                Ok(input.len())
            }
            (FeedbackMode::Cfb1, Some(register)) => {
                if !bit_framing {
                    tracing::error!("CFB-1 transform attempted without bit framing");
                    return Err(CryptoError::DesBitFramingRequired);
                }
                check_capacity(output, input.len())?;
                cfb1(schedule, direction, register, input, output);
                Ok(input.len())
            }
            (feedback, None) => {
                tracing::error!(?feedback, "feedback register missing for IV-bearing mode");
                Err(CryptoError::DesError)
            }
        }
    }

    fn iv_register(&self) -> Option<&[u8]> {
        self.state
            .as_ref()
            .and_then(|state| state.register.as_ref().map(|register| register.as_slice()))
    }

    fn block_size(&self) -> usize {
        DES_BLOCK_SIZE
    }

    fn reset(&mut self) {
        self.state = None;
        self.pad = true;
        self.bit_framing = false;
    }
}

/// ECB/CBC transform with optional PKCS#7 padding.
fn block_mode(
    schedule: &TdesEde3,
    direction: CipherDirection,
    register: Option<&mut [u8; DES_BLOCK_SIZE]>,
    pad: bool,
    input: &[u8],
    output: &mut [u8],
) -> Result<usize, CryptoError> {
    match (pad, direction) {
        (true, CipherDirection::Encrypt) => {
            let padded = pkcs7_pad(input);
            check_capacity(output, padded.len())?;
            run_blocks(schedule, direction, register, &padded, output);
            Ok(padded.len())
        }
        (true, CipherDirection::Decrypt) => {
            if input.is_empty() {
                return Err(CryptoError::DesInvalidInputSize);
            }
            check_block_aligned(input)?;
            check_capacity(output, input.len())?;
            run_blocks(schedule, direction, register, input, output);
            pkcs7_unpad(&output[..input.len()])
        }
        (false, _) => {
            check_block_aligned(input)?;
            check_capacity(output, input.len())?;
            run_blocks(schedule, direction, register, input, output);
            Ok(input.len())
        }
    }
}

/// Runs the ECB (no register) or CBC (register) transform block by block.
fn run_blocks(
    schedule: &TdesEde3,
    direction: CipherDirection,
    mut register: Option<&mut [u8; DES_BLOCK_SIZE]>,
    input: &[u8],
    output: &mut [u8],
) {
    for (inb, outb) in input
        .chunks(DES_BLOCK_SIZE)
        .zip(output.chunks_mut(DES_BLOCK_SIZE))
    {
        let mut block = DesBlock::clone_from_slice(inb);
        match direction {
            CipherDirection::Encrypt => {
                if let Some(register) = register.as_deref_mut() {
                    for (b, r) in block.iter_mut().zip(register.iter()) {
                        *b ^= r;
                    }
                }
                schedule.encrypt_block(&mut block);
                if let Some(register) = register.as_deref_mut() {
                    register.copy_from_slice(&block);
                }
            }
            CipherDirection::Decrypt => {
                schedule.decrypt_block(&mut block);
                if let Some(register) = register.as_deref_mut() {
                    for (b, r) in block.iter_mut().zip(register.iter()) {
                        *b ^= r;
                    }
                    register.copy_from_slice(inb);
                }
            }
        }
        outb.copy_from_slice(&block);
    }
}

/// OFB transform. Direction-independent: the register is the keystream
/// block and becomes the next block-cipher input.
fn ofb(
    schedule: &TdesEde3,
    register: &mut [u8; DES_BLOCK_SIZE],
    input: &[u8],
    output: &mut [u8],
) {
    for (inb, outb) in input
        .chunks(DES_BLOCK_SIZE)
        .zip(output.chunks_mut(DES_BLOCK_SIZE))
    {
        let mut keystream = DesBlock::clone_from_slice(register);
        schedule.encrypt_block(&mut keystream);
        register.copy_from_slice(&keystream);
        for (o, (i, k)) in outb.iter_mut().zip(inb.iter().zip(keystream.iter())) {
            *o = i ^ k;
        }
    }
}

/// CFB with full-block (64-bit) feedback units. The register always holds
/// the last ciphertext block, whichever side of the transform produced it.
fn cfb64(
    schedule: &TdesEde3,
    direction: CipherDirection,
    register: &mut [u8; DES_BLOCK_SIZE],
    input: &[u8],
    output: &mut [u8],
) {
    for (inb, outb) in input
        .chunks(DES_BLOCK_SIZE)
        .zip(output.chunks_mut(DES_BLOCK_SIZE))
    {
        let mut keystream = DesBlock::clone_from_slice(register);
        schedule.encrypt_block(&mut keystream);
        for (o, (i, k)) in outb.iter_mut().zip(inb.iter().zip(keystream.iter())) {
            *o = i ^ k;
        }
        match direction {
            CipherDirection::Encrypt => register.copy_from_slice(outb),
            CipherDirection::Decrypt => register.copy_from_slice(inb),
        }
    }
}

/// CFB with 8-bit feedback units: one block-cipher invocation per byte, the
/// register shifting left one byte with the ciphertext byte appended.
fn cfb8(
    schedule: &TdesEde3,
    direction: CipherDirection,
    register: &mut [u8; DES_BLOCK_SIZE],
    input: &[u8],
    output: &mut [u8],
) {
    for (inb, outb) in input.iter().zip(output.iter_mut()) {
        let mut keystream = DesBlock::clone_from_slice(register);
        schedule.encrypt_block(&mut keystream);
        let cipher_byte = match direction {
            CipherDirection::Encrypt => {
                *outb = *inb ^ keystream[0];
                *outb
            }
            CipherDirection::Decrypt => {
                *outb = *inb ^ keystream[0];
                *inb
            }
        };
        register.copy_within(1.., 0);
        register[DES_BLOCK_SIZE - 1] = cipher_byte;
    }
}

/// CFB with 1-bit feedback units: one block-cipher invocation per bit,
/// MSB first within each input byte, the register shifting left one bit
/// with the ciphertext bit appended.
fn cfb1(
    schedule: &TdesEde3,
    direction: CipherDirection,
    register: &mut [u8; DES_BLOCK_SIZE],
    input: &[u8],
    output: &mut [u8],
) {
    for (inb, outb) in input.iter().zip(output.iter_mut()) {
        let mut out_byte = 0u8;
        for bit in (0..8).rev() {
            let in_bit = (*inb >> bit) & 1;
            let mut keystream = DesBlock::clone_from_slice(register);
            schedule.encrypt_block(&mut keystream);
            let out_bit = in_bit ^ (keystream[0] >> 7);
            let cipher_bit = match direction {
                CipherDirection::Encrypt => out_bit,
                CipherDirection::Decrypt => in_bit,
            };
            shift_in_bit(register, cipher_bit);
            out_byte |= out_bit << bit;
        }
        *outb = out_byte;
    }
}

/// Shifts the register left one bit, feeding `bit` in at the low end.
fn shift_in_bit(register: &mut [u8; DES_BLOCK_SIZE], bit: u8) {
    let mut carry = bit & 1;
    for b in register.iter_mut().rev() {
        let next = *b >> 7;
        *b = (*b << 1) | carry;
        carry = next;
    }
}

fn check_block_aligned(input: &[u8]) -> Result<(), CryptoError> {
    if input.len() % DES_BLOCK_SIZE != 0 {
        return Err(CryptoError::DesInvalidInputSize);
    }
    Ok(())
}

fn check_capacity(output: &[u8], needed: usize) -> Result<(), CryptoError> {
    if output.len() < needed {
        return Err(CryptoError::DesBufferTooSmall);
    }
    Ok(())
}

fn pkcs7_pad(input: &[u8]) -> Vec<u8> {
    let pad = DES_BLOCK_SIZE - input.len() % DES_BLOCK_SIZE;
    let mut padded = Vec::with_capacity(input.len() + pad);
    padded.extend_from_slice(input);
    padded.extend(std::iter::repeat(pad as u8).take(pad));
    padded
}

fn pkcs7_unpad(output: &[u8]) -> Result<usize, CryptoError> {
    let pad = *output.last().ok_or(CryptoError::DesInvalidPadding)? as usize;
    if pad == 0 || pad > DES_BLOCK_SIZE || pad > output.len() {
        return Err(CryptoError::DesInvalidPadding);
    }
    if output[output.len() - pad..].iter().any(|&b| b as usize != pad) {
        return Err(CryptoError::DesInvalidPadding);
    }
    Ok(output.len() - pad)
}
