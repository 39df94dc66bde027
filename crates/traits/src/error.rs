//! Error types for keyed hashing.
//!
//! Every error here is a caller precondition violation detected before any
//! hashing starts. There is no transient or retryable failure class.

use core::fmt;

/// Invalid argument passed to a keyed hash.
///
/// # Examples
///
/// ```
/// use traits::HashError;
///
/// fn check_key(key: &[u8]) -> Result<[u8; 16], HashError> {
///   key.try_into().map_err(|_| HashError::InvalidKeyLength {
///     expected: 16,
///     actual: key.len(),
///   })
/// }
///
/// assert!(check_key(&[0u8; 16]).is_ok());
/// assert_eq!(
///   check_key(&[0u8; 15]),
///   Err(HashError::InvalidKeyLength { expected: 16, actual: 15 })
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum HashError {
  /// The key was not exactly `expected` bytes long.
  InvalidKeyLength {
    /// Required key length in bytes.
    expected: usize,
    /// Length of the key that was supplied.
    actual: usize,
  },
  /// The requested output length is not supported by the algorithm.
  InvalidOutputLength {
    /// Output length that was requested.
    actual: usize,
  },
}

impl HashError {
  /// Returns `true` if this error reports a bad key length.
  #[inline]
  #[must_use]
  pub const fn is_key_length(&self) -> bool {
    matches!(self, Self::InvalidKeyLength { .. })
  }

  /// Returns `true` if this error reports a bad output length.
  #[inline]
  #[must_use]
  pub const fn is_output_length(&self) -> bool {
    matches!(self, Self::InvalidOutputLength { .. })
  }
}

impl fmt::Display for HashError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::InvalidKeyLength { expected, actual } => {
        write!(f, "invalid key length: expected {expected} bytes, got {actual}")
      }
      Self::InvalidOutputLength { actual } => write!(f, "invalid output length: {actual} bytes"),
    }
  }
}

impl core::error::Error for HashError {}
