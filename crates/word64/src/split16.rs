use crate::Word64;

/// Four 16-bit limbs.
///
/// For hosts that can only be trusted with 16-bit integers plus a carry bit.
/// Limb sums are formed in 32 bits and the carry is the bit above the limb.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Split16 {
  /// Least significant limb first.
  limbs: [u16; 4],
}

impl Word64 for Split16 {
  const NAME: &'static str = "split16";
  const LIMB_BITS: &'static [u32] = &[16, 16, 16, 16];

  #[inline]
  fn from_le_bytes(bytes: [u8; 8]) -> Self {
    let [b0, b1, b2, b3, b4, b5, b6, b7] = bytes;
    Self {
      limbs: [
        u16::from_le_bytes([b0, b1]),
        u16::from_le_bytes([b2, b3]),
        u16::from_le_bytes([b4, b5]),
        u16::from_le_bytes([b6, b7]),
      ],
    }
  }

  #[inline]
  fn to_le_bytes(self) -> [u8; 8] {
    let [l0, l1, l2, l3] = self.limbs;
    let [b0, b1] = l0.to_le_bytes();
    let [b2, b3] = l1.to_le_bytes();
    let [b4, b5] = l2.to_le_bytes();
    let [b6, b7] = l3.to_le_bytes();
    [b0, b1, b2, b3, b4, b5, b6, b7]
  }

  #[inline]
  fn from_low_byte(byte: u8) -> Self {
    Self {
      limbs: [u16::from(byte), 0, 0, 0],
    }
  }

  #[inline]
  fn wrapping_add(self, rhs: Self) -> Self {
    let [a0, a1, a2, a3] = self.limbs;
    let [b0, b1, b2, b3] = rhs.limbs;
    let c0 = u32::from(a0) + u32::from(b0);
    let c1 = u32::from(a1) + u32::from(b1) + (c0 >> 16);
    let c2 = u32::from(a2) + u32::from(b2) + (c1 >> 16);
    let c3 = u32::from(a3) + u32::from(b3) + (c2 >> 16);
    Self {
      limbs: [c0 as u16, c1 as u16, c2 as u16, c3 as u16],
    }
  }

  #[inline]
  fn xor(self, rhs: Self) -> Self {
    let [a0, a1, a2, a3] = self.limbs;
    let [b0, b1, b2, b3] = rhs.limbs;
    Self {
      limbs: [a0 ^ b0, a1 ^ b1, a2 ^ b2, a3 ^ b3],
    }
  }

  #[inline]
  fn rotate_left(self, n: u32) -> Self {
    let n = n & 63;
    let mut limbs = self.limbs;
    // Whole-limb part moves limb i to limb i + n/16.
    limbs.rotate_right((n / 16) as usize);
    let r = n % 16;
    if r == 0 {
      return Self { limbs };
    }
    let m = 16 - r;
    let [a0, a1, a2, a3] = limbs;
    Self {
      limbs: [
        (a0 << r) | (a3 >> m),
        (a1 << r) | (a0 >> m),
        (a2 << r) | (a1 >> m),
        (a3 << r) | (a2 >> m),
      ],
    }
  }
}
