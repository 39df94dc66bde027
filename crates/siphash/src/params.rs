//! Keys, output modes, digests and the fixed SipHash-2-4 constants.

use core::fmt;

use traits::HashError;

/// Key length in bytes.
pub const KEY_LEN: usize = 16;

/// Compression rounds per message block.
pub const C_ROUNDS: usize = 2;

/// Finalization rounds per output word.
pub const D_ROUNDS: usize = 4;

/// Initial state: "somepseudorandomlygeneratedbytes" as little-endian words.
pub(crate) const INIT: [[u8; 8]; 4] = [*b"uespemos", *b"modnarod", *b"arenegyl", *b"setybdet"];

/// XOR-ed into v1 at init for 128-bit output.
pub(crate) const LONG_INIT_TWEAK: u8 = 0xee;
/// XOR-ed into v2 before the first finalization, per mode.
pub(crate) const SHORT_FINAL_TWEAK: u8 = 0xff;
pub(crate) const LONG_FINAL_TWEAK: u8 = 0xee;
/// XOR-ed into v1 before the second finalization (128-bit output only).
pub(crate) const SECOND_WORD_TWEAK: u8 = 0xdd;

/// A 128-bit SipHash key.
///
/// Split into two little-endian halves `k0` (bytes 0..8) and `k1` (bytes 8..16).
/// `Debug` never prints key material.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Key([u8; KEY_LEN]);

impl Key {
  #[inline]
  #[must_use]
  pub const fn new(bytes: [u8; KEY_LEN]) -> Self {
    Self(bytes)
  }

  /// Key from a slice that must be exactly [`KEY_LEN`] bytes.
  ///
  /// No truncation or padding is ever applied.
  ///
  /// # Errors
  ///
  /// [`HashError::InvalidKeyLength`] if `bytes.len() != 16`.
  #[inline]
  pub fn from_slice(bytes: &[u8]) -> Result<Self, HashError> {
    let arr: [u8; KEY_LEN] = bytes.try_into().map_err(|_| HashError::InvalidKeyLength {
      expected: KEY_LEN,
      actual: bytes.len(),
    })?;
    Ok(Self(arr))
  }

  #[inline]
  #[must_use]
  pub const fn as_bytes(&self) -> &[u8; KEY_LEN] {
    &self.0
  }

  /// `(k0, k1)` as raw little-endian byte halves.
  #[inline]
  #[must_use]
  pub(crate) const fn halves(&self) -> ([u8; 8], [u8; 8]) {
    let [a0, a1, a2, a3, a4, a5, a6, a7, b0, b1, b2, b3, b4, b5, b6, b7] = self.0;
    ([a0, a1, a2, a3, a4, a5, a6, a7], [b0, b1, b2, b3, b4, b5, b6, b7])
  }
}

impl From<[u8; KEY_LEN]> for Key {
  #[inline]
  fn from(bytes: [u8; KEY_LEN]) -> Self {
    Self(bytes)
  }
}

impl TryFrom<&[u8]> for Key {
  type Error = HashError;

  #[inline]
  fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
    Self::from_slice(bytes)
  }
}

impl fmt::Debug for Key {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str("Key(..)")
  }
}

/// Digest width.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum OutputMode {
  /// One 64-bit word (8 bytes).
  #[default]
  Short,
  /// Two 64-bit words (16 bytes).
  Long,
}

impl OutputMode {
  /// Digest length in bytes.
  #[inline]
  #[must_use]
  pub const fn output_len(self) -> usize {
    match self {
      Self::Short => 8,
      Self::Long => 16,
    }
  }

  /// Mode for an output length of 8 or 16 bytes.
  ///
  /// # Errors
  ///
  /// [`HashError::InvalidOutputLength`] for any other length.
  #[inline]
  pub const fn from_output_len(len: usize) -> Result<Self, HashError> {
    match len {
      8 => Ok(Self::Short),
      16 => Ok(Self::Long),
      actual => Err(HashError::InvalidOutputLength { actual }),
    }
  }

  #[inline]
  #[must_use]
  pub(crate) const fn init_tweak(self) -> u8 {
    match self {
      Self::Short => 0,
      Self::Long => LONG_INIT_TWEAK,
    }
  }

  #[inline]
  #[must_use]
  pub(crate) const fn final_tweak(self) -> u8 {
    match self {
      Self::Short => SHORT_FINAL_TWEAK,
      Self::Long => LONG_FINAL_TWEAK,
    }
  }
}

impl TryFrom<usize> for OutputMode {
  type Error = HashError;

  #[inline]
  fn try_from(len: usize) -> Result<Self, Self::Error> {
    Self::from_output_len(len)
  }
}

/// Raw SipHash-2-4 output.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub enum Digest {
  Short([u8; 8]),
  Long([u8; 16]),
}

impl Digest {
  #[inline]
  #[must_use]
  pub fn as_bytes(&self) -> &[u8] {
    match self {
      Self::Short(b) => b.as_slice(),
      Self::Long(b) => b.as_slice(),
    }
  }

  #[inline]
  #[must_use]
  pub const fn mode(&self) -> OutputMode {
    match self {
      Self::Short(_) => OutputMode::Short,
      Self::Long(_) => OutputMode::Long,
    }
  }

  /// Digest length in bytes; always equals `self.mode().output_len()`.
  #[inline]
  #[must_use]
  pub const fn output_len(&self) -> usize {
    self.mode().output_len()
  }
}

impl AsRef<[u8]> for Digest {
  #[inline]
  fn as_ref(&self) -> &[u8] {
    self.as_bytes()
  }
}

impl fmt::LowerHex for Digest {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    for b in self.as_bytes() {
      write!(f, "{b:02x}")?;
    }
    Ok(())
  }
}

impl fmt::Debug for Digest {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "Digest({self:x})")
  }
}
