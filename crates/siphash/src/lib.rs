//! SipHash-2-4 (**NOT A MAC**).
//!
//! SipHash is a *keyed* pseudorandom function designed to defend hash tables
//! against collision flooding on untrusted inputs. It is not a general-purpose
//! cryptographic MAC and makes no side-channel guarantees.
//!
//! # Portable arithmetic
//!
//! The algorithm is written once, generic over [`word64::Word64`]. Four
//! backends are compiled in: native `u64` words and three limb-split
//! representations (32, 24/24/16 and 16 bits) for hosts without cheap 64-bit
//! integers. All produce byte-identical digests. [`hash`] runs on the backend
//! picked by [`config`]; [`hash_with_backend`] pins one explicitly.
//!
//! # Example
//!
//! ```
//! use siphash::{Key, KeyedHash, OutputMode, SipHash24, hash};
//!
//! let key = Key::new(core::array::from_fn(|i| i as u8));
//!
//! let digest = hash(&key, b"", OutputMode::Short);
//! assert_eq!(digest.as_bytes(), &[0x31, 0x0e, 0x0e, 0xdd, 0x47, 0xdb, 0x6f, 0x72]);
//!
//! assert_eq!(SipHash24::hash_with_key(&key, b"").as_slice(), digest.as_bytes());
//! ```
//!
//! # Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `std` | Yes | Reads `SIPHASH_FORCE` and caches the selected backend |
//! | `diag` | No | Selection diagnostics ([`diag`]) |
//! | `force-split32` / `force-split24` / `force-split16` | No | Build-time default backend |
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(feature = "std")]
extern crate std;

mod compress;
pub mod config;
#[cfg(feature = "diag")]
pub mod diag;
#[doc(hidden)]
pub mod dispatch;
pub mod introspect;
pub mod kernels;
mod params;
pub mod round;

pub use compress::{hash_with_backend, siphash24_64, siphash24_128};
pub use config::{SelectionReason, SipHashConfig, SipHashForce};
pub use kernels::SipHashKernelId;
pub use params::{C_ROUNDS, D_ROUNDS, Digest, KEY_LEN, Key, OutputMode};
pub use traits::{HashError, KeyedHash};
pub use word64;

/// SipHash-2-4 of `data` on the active backend.
#[inline]
#[must_use]
pub fn hash(key: &Key, data: &[u8], mode: OutputMode) -> Digest {
  dispatch::hash(key, data, mode)
}

/// SipHash-2-4 with 64-bit output.
#[derive(Clone, Copy, Debug, Default)]
pub struct SipHash24;

/// SipHash-2-4 with 128-bit output.
#[derive(Clone, Copy, Debug, Default)]
#[allow(non_camel_case_types)]
pub struct SipHash24_128;

impl KeyedHash for SipHash24 {
  const KEY_SIZE: usize = KEY_LEN;
  const OUTPUT_SIZE: usize = 8;
  type Key = Key;
  type Output = [u8; 8];

  #[inline]
  fn hash_with_key(key: &Key, data: &[u8]) -> [u8; 8] {
    dispatch::hash64(key, data)
  }
}

impl KeyedHash for SipHash24_128 {
  const KEY_SIZE: usize = KEY_LEN;
  const OUTPUT_SIZE: usize = 16;
  type Key = Key;
  type Output = [u8; 16];

  #[inline]
  fn hash_with_key(key: &Key, data: &[u8]) -> [u8; 16] {
    dispatch::hash128(key, data)
  }
}
