// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Validation-test execution engine for symmetric block-cipher algorithms.
//!
//! An external test harness supplies one test case at a time; this crate
//! resolves the cipher/mode identifier to a primitive configuration, owns the
//! cipher session across related calls, and routes each case to either the
//! single-shot executor or the Monte Carlo orchestrator. For Monte Carlo
//! chains it captures the primitive engine's IV register immediately before
//! and immediately after the transform of each step, which the protocol's
//! verifier compares bit for bit against a reference implementation.
//!
//! The crate covers the 3-key TDES family. The primitive engine itself is a
//! collaborator behind [`symval_crypto::SymCipherEngine`]; any engine
//! exposing that capability set can be substituted.
//!
//! # Sessions and chains
//!
//! A [`CipherSession`] is long-lived shared mutable state across the calls of
//! one Monte Carlo chain. It is not safe for interleaved use by multiple
//! chains; the harness must serialize calls belonging to one chain and must
//! not start a new chain until the previous one reached its terminal step
//! and released the session. Each independent chain should be given its own
//! [`TdesHandler`].

mod error;
mod handler;
mod mct;
mod mode;
mod session;
mod testcase;

pub use error::*;
pub use handler::*;
pub use mct::*;
pub use mode::*;
pub use session::*;
pub use testcase::*;
