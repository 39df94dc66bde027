//! Core keyed-hash traits for the siphash24 workspace.
//!
//! This crate provides the foundational traits and error types that the
//! hashing crates conform to. It is `no_std` compatible and has zero
//! dependencies.
//!
//! # Trait Hierarchy
//!
//! | Trait | Purpose | Examples |
//! |-------|---------|----------|
//! | [`KeyedHash`] | One-shot keyed PRFs for hash-flood resistance | SipHash-2-4 (64/128) |
//!
//! # Error Types
//!
//! - [`HashError`] - Precondition violations (key length, output length)
//!
//! # Fallibility Discipline
//!
//! This crate denies `unwrap`, `expect`, and indexing in non-test code to ensure
//! all error paths are handled explicitly.
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(feature = "std")]
extern crate std;

pub mod error;
mod keyed_hash;

pub use error::HashError;
pub use keyed_hash::KeyedHash;
