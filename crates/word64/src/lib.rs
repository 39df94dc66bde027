//! Portable 64-bit add-rotate-xor arithmetic.
//!
//! ARX primitives such as SipHash are specified over 64-bit words. This crate
//! abstracts that word behind the [`Word64`] trait so the same algorithm code
//! runs over any of several representations:
//!
//! | Backend | Representation | Rotation draws from |
//! |---------|----------------|---------------------|
//! | [`Native`] | one `u64` | - |
//! | [`Split32`] | two 32-bit limbs | 2 limbs |
//! | [`Split24`] | 24 + 24 + 16-bit limbs | 2 or 3 limbs |
//! | [`Split16`] | four 16-bit limbs | 2 limbs |
//!
//! The limb backends never widen to `u64` internally: addition chains carries
//! limb by limb, and rotation gathers each output limb from the adjacent
//! source limbs it straddles. Every backend is bit-identical to `u64`
//! arithmetic for every input; see `tests/backend_equivalence.rs`.
//!
//! # Example
//!
//! ```
//! use word64::{Split16, Word64};
//!
//! let a = Split16::from_le_bytes(0xffff_ffff_ffff_ffffu64.to_le_bytes());
//! let b = Split16::from_low_byte(1);
//! assert_eq!(a.wrapping_add(b).to_le_bytes(), [0u8; 8]);
//!
//! let x = Split16::from_le_bytes(0x8000_0000_0000_0001u64.to_le_bytes());
//! assert_eq!(u64::from_le_bytes(x.rotate_left(1).to_le_bytes()), 3);
//! ```
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(feature = "std")]
extern crate std;

use core::fmt::Debug;

pub mod codec;
mod native;
mod split16;
mod split24;
mod split32;

pub use native::Native;
pub use split16::Split16;
pub use split24::Split24;
pub use split32::Split32;

/// An unsigned 64-bit word with wrapping ARX operations.
///
/// Implementations must be exactly equivalent to `u64` arithmetic:
/// - [`wrapping_add`](Word64::wrapping_add) is addition mod 2^64
/// - [`xor`](Word64::xor) is 64-bit exclusive or
/// - [`rotate_left`](Word64::rotate_left) is a 64-bit rotation, with the amount taken mod 64
///
/// All operations are total and stateless.
pub trait Word64: Copy + Eq + Debug + Send + Sync + 'static {
  /// Short backend name used in introspection output.
  const NAME: &'static str;

  /// Limb widths in bits, least significant first. Sums to 64.
  const LIMB_BITS: &'static [u32];

  /// Word from 8 little-endian bytes.
  fn from_le_bytes(bytes: [u8; 8]) -> Self;

  /// Word as 8 little-endian bytes.
  fn to_le_bytes(self) -> [u8; 8];

  /// Word whose least significant byte is `byte` and all other bits zero.
  #[inline]
  #[must_use]
  fn from_low_byte(byte: u8) -> Self {
    Self::from_le_bytes([byte, 0, 0, 0, 0, 0, 0, 0])
  }

  /// Addition mod 2^64.
  #[must_use]
  fn wrapping_add(self, rhs: Self) -> Self;

  /// Bitwise exclusive or.
  #[must_use]
  fn xor(self, rhs: Self) -> Self;

  /// Rotate left by `n mod 64` bits.
  #[must_use]
  fn rotate_left(self, n: u32) -> Self;
}

/// Mask with the low `bits` bits set.
#[inline(always)]
pub(crate) const fn low_mask(bits: u32) -> u32 {
  if bits >= u32::BITS { u32::MAX } else { (1u32 << bits) - 1 }
}
