use crate::{Word64, low_mask};

const MASK24: u32 = low_mask(24);
const MASK16: u32 = low_mask(16);

/// Three limbs of 24, 24 and 16 bits.
///
/// For hosts whose integers are only exact up to 2^53 or so (floating-point
/// integers): a 24-bit limb sum plus carry fits with room to spare. Because
/// the limbs are unequal, a 24-bit output window can span the whole 16-bit
/// limb and draw bits from three source limbs during rotation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Split24 {
  /// Bits 0..24.
  l0: u32,
  /// Bits 24..48.
  l1: u32,
  /// Bits 48..64.
  l2: u32,
}

impl Split24 {
  /// Returns `(limb, bit offset within limb, limb width)` for bit `pos` (< 64).
  #[inline(always)]
  fn limb_at(self, pos: u32) -> (u32, u32, u32) {
    match pos {
      0..24 => (self.l0, pos, 24),
      24..48 => (self.l1, pos - 24, 24),
      _ => (self.l2, pos - 48, 16),
    }
  }

  /// Gathers `len` (<= 24) bits starting at bit `start`, wrapping past bit 63.
  #[inline]
  fn field(self, start: u32, len: u32) -> u32 {
    let mut out = 0;
    let mut got = 0;
    let mut pos = start & 63;
    while got < len {
      let (limb, offset, width) = self.limb_at(pos);
      let take = (width - offset).min(len - got);
      out |= ((limb >> offset) & low_mask(take)) << got;
      got += take;
      pos = (pos + take) & 63;
    }
    out
  }
}

impl Word64 for Split24 {
  const NAME: &'static str = "split24";
  const LIMB_BITS: &'static [u32] = &[24, 24, 16];

  #[inline]
  fn from_le_bytes(bytes: [u8; 8]) -> Self {
    let [b0, b1, b2, b3, b4, b5, b6, b7] = bytes;
    Self {
      l0: u32::from_le_bytes([b0, b1, b2, 0]),
      l1: u32::from_le_bytes([b3, b4, b5, 0]),
      l2: u32::from_le_bytes([b6, b7, 0, 0]),
    }
  }

  #[inline]
  fn to_le_bytes(self) -> [u8; 8] {
    let [b0, b1, b2, _] = self.l0.to_le_bytes();
    let [b3, b4, b5, _] = self.l1.to_le_bytes();
    let [b6, b7, _, _] = self.l2.to_le_bytes();
    [b0, b1, b2, b3, b4, b5, b6, b7]
  }

  #[inline]
  fn from_low_byte(byte: u8) -> Self {
    Self {
      l0: u32::from(byte),
      l1: 0,
      l2: 0,
    }
  }

  #[inline]
  fn wrapping_add(self, rhs: Self) -> Self {
    let c0 = self.l0 + rhs.l0;
    let c1 = self.l1 + rhs.l1 + (c0 >> 24);
    let c2 = self.l2 + rhs.l2 + (c1 >> 24);
    Self {
      l0: c0 & MASK24,
      l1: c1 & MASK24,
      l2: c2 & MASK16,
    }
  }

  #[inline]
  fn xor(self, rhs: Self) -> Self {
    Self {
      l0: self.l0 ^ rhs.l0,
      l1: self.l1 ^ rhs.l1,
      l2: self.l2 ^ rhs.l2,
    }
  }

  #[inline]
  fn rotate_left(self, n: u32) -> Self {
    // Output bit j comes from input bit (j - n) mod 64.
    let back = 64 - (n & 63);
    Self {
      l0: self.field(back, 24),
      l1: self.field(back + 24, 24),
      l2: self.field(back + 48, 16),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::test_util::{check_against_u64, value, word};

  #[test]
  fn matches_u64() {
    check_against_u64::<Split24>();
  }

  #[test]
  fn limbs_hold_expected_bits() {
    let a: Split24 = word(0x0123_4567_89ab_cdef);
    assert_eq!(a.l0, 0xab_cdef);
    assert_eq!(a.l1, 0x45_6789);
    assert_eq!(a.l2, 0x0123);
  }

  #[test]
  fn carry_crosses_unequal_limbs() {
    let a: Split24 = word(0x0000_ffff_ffff_ffff);
    let b: Split24 = word(1);
    assert_eq!(value(a.wrapping_add(b)), 0x0001_0000_0000_0000);
  }

  #[test]
  fn field_spanning_three_limbs() {
    // Bits 47..71 (mod 64) touch limb 1, all of limb 2, and limb 0.
    let a: Split24 = word(u64::MAX);
    assert_eq!(a.field(47, 24), MASK24);

    let b: Split24 = word(0x0000_8000_0000_007f);
    // bit 47 -> out bit 0, bits 48..64 are zero, bits 0..7 -> out bits 17..24
    assert_eq!(b.field(47, 24), 1 | (0x7f << 17));
  }

  #[test]
  fn rotation_that_straddles_the_short_limb() {
    let v = 0x8001_2345_6789_abcd_u64;
    let a: Split24 = word(v);
    // Rotating by 17 pulls the output low limb from bits 47..71.
    assert_eq!(value(a.rotate_left(17)), v.rotate_left(17));
  }
}
