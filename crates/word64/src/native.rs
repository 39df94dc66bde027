use crate::Word64;

/// Native-width backend: a single `u64`.
///
/// This is the reference every limb backend is measured against.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct Native(u64);

impl Native {
  #[inline]
  #[must_use]
  pub const fn new(value: u64) -> Self {
    Self(value)
  }

  #[inline]
  #[must_use]
  pub const fn get(self) -> u64 {
    self.0
  }
}

impl Word64 for Native {
  const NAME: &'static str = "native";
  const LIMB_BITS: &'static [u32] = &[64];

  #[inline(always)]
  fn from_le_bytes(bytes: [u8; 8]) -> Self {
    Self(u64::from_le_bytes(bytes))
  }

  #[inline(always)]
  fn to_le_bytes(self) -> [u8; 8] {
    self.0.to_le_bytes()
  }

  #[inline(always)]
  fn from_low_byte(byte: u8) -> Self {
    Self(u64::from(byte))
  }

  #[inline(always)]
  fn wrapping_add(self, rhs: Self) -> Self {
    Self(self.0.wrapping_add(rhs.0))
  }

  #[inline(always)]
  fn xor(self, rhs: Self) -> Self {
    Self(self.0 ^ rhs.0)
  }

  #[inline(always)]
  fn rotate_left(self, n: u32) -> Self {
    Self(self.0.rotate_left(n))
  }
}
