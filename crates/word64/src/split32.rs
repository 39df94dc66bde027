use crate::Word64;

/// Two 32-bit limbs.
///
/// For hosts whose widest cheap integer is 32 bits. A carry out of the low
/// limb is taken from the overflow flag rather than a wider intermediate.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Split32 {
  lo: u32,
  hi: u32,
}

impl Word64 for Split32 {
  const NAME: &'static str = "split32";
  const LIMB_BITS: &'static [u32] = &[32, 32];

  #[inline]
  fn from_le_bytes(bytes: [u8; 8]) -> Self {
    let [b0, b1, b2, b3, b4, b5, b6, b7] = bytes;
    Self {
      lo: u32::from_le_bytes([b0, b1, b2, b3]),
      hi: u32::from_le_bytes([b4, b5, b6, b7]),
    }
  }

  #[inline]
  fn to_le_bytes(self) -> [u8; 8] {
    let [b0, b1, b2, b3] = self.lo.to_le_bytes();
    let [b4, b5, b6, b7] = self.hi.to_le_bytes();
    [b0, b1, b2, b3, b4, b5, b6, b7]
  }

  #[inline]
  fn from_low_byte(byte: u8) -> Self {
    Self {
      lo: u32::from(byte),
      hi: 0,
    }
  }

  #[inline]
  fn wrapping_add(self, rhs: Self) -> Self {
    let (lo, carry) = self.lo.overflowing_add(rhs.lo);
    let hi = self.hi.wrapping_add(rhs.hi).wrapping_add(u32::from(carry));
    Self { lo, hi }
  }

  #[inline]
  fn xor(self, rhs: Self) -> Self {
    Self {
      lo: self.lo ^ rhs.lo,
      hi: self.hi ^ rhs.hi,
    }
  }

  #[inline]
  fn rotate_left(self, n: u32) -> Self {
    let n = n & 63;
    // Whole-limb part: rotating by 32 swaps the halves.
    let (lo, hi) = if n & 32 != 0 {
      (self.hi, self.lo)
    } else {
      (self.lo, self.hi)
    };
    let r = n & 31;
    if r == 0 {
      return Self { lo, hi };
    }
    let m = 32 - r;
    Self {
      lo: (lo << r) | (hi >> m),
      hi: (hi << r) | (lo >> m),
    }
  }
}
