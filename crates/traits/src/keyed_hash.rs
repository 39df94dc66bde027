//! Keyed hash traits (**NOT A MAC**).

use core::fmt::Debug;

/// A keyed pseudorandom function over byte strings.
///
/// Keyed hashes defend hash tables and similar structures against collision
/// flooding from untrusted inputs: without the key, an attacker cannot predict
/// which inputs collide. They are **not** suitable as general-purpose MACs,
/// signatures, or password hashes.
///
/// This trait is intentionally one-shot. The state lives for exactly one call
/// and nothing is carried between calls, so implementations are trivially
/// `Send + Sync`.
pub trait KeyedHash {
  /// Key size in bytes.
  const KEY_SIZE: usize;

  /// Output size in bytes.
  const OUTPUT_SIZE: usize;

  /// Key type.
  type Key: Copy + Debug;

  /// Hash output type.
  type Output: Copy + Eq + Debug + Default + AsRef<[u8]>;

  /// Compute the keyed hash of `data`.
  #[must_use]
  fn hash_with_key(key: &Self::Key, data: &[u8]) -> Self::Output;
}
