//! SipHash-2-4 keyed hashing with hex or raw output.
//!
//! This is the byte-oriented entry point: lengths and keys arrive as plain
//! `usize` and `&[u8]` and are validated before any hashing happens. The
//! typed API lives in [`siphash`] and is re-exported here.
//!
//! ```
//! let key: Vec<u8> = (0u8..16).collect();
//!
//! let hex = siphash24::hash_hex(8, b"", &key)?;
//! assert_eq!(hex, "310e0edd47db6f72");
//!
//! let raw = siphash24::hash(16, &[0], &key, true)?;
//! assert_eq!(raw.len(), 16);
//!
//! assert!(siphash24::hash(12, b"", &key, false).is_err());
//! # Ok::<(), siphash24::HashError>(())
//! ```
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

extern crate alloc;

use alloc::{string::String, vec::Vec};

pub use siphash::{
  Digest, KEY_LEN, Key, KeyedHash, OutputMode, SipHash24, SipHash24_128, SipHashKernelId, introspect::DispatchInfo,
};
pub use traits::HashError;

/// Hashes `message` under `key`, returning raw digest bytes or their
/// lowercase hex encoding as ASCII bytes.
///
/// # Errors
///
/// [`HashError::InvalidOutputLength`] if `output_len` is not 8 or 16, then
/// [`HashError::InvalidKeyLength`] if `key` is not 16 bytes.
pub fn hash(output_len: usize, message: &[u8], key: &[u8], raw_output: bool) -> Result<Vec<u8>, HashError> {
  let digest = hash_raw(output_len, message, key)?;
  if raw_output {
    Ok(digest.as_bytes().to_vec())
  } else {
    Ok(hex::encode(digest).into_bytes())
  }
}

/// Hashes `message` under `key` and returns the typed digest.
///
/// # Errors
///
/// Same as [`hash`].
pub fn hash_raw(output_len: usize, message: &[u8], key: &[u8]) -> Result<Digest, HashError> {
  let mode = OutputMode::try_from(output_len)?;
  let key = Key::from_slice(key)?;
  Ok(siphash::hash(&key, message, mode))
}

/// Hashes `message` under `key` and returns the lowercase hex digest.
///
/// # Errors
///
/// Same as [`hash`].
pub fn hash_hex(output_len: usize, message: &[u8], key: &[u8]) -> Result<String, HashError> {
  hash_raw(output_len, message, key).map(hex::encode)
}

/// Name of the backend that serves [`hash`].
#[must_use]
pub fn backend_name() -> &'static str {
  siphash::introspect::backend_name()
}
