//! Little-endian conversion between bytes and [`Word64`] values.

use crate::Word64;

/// Bytes per message block.
pub const BLOCK_LEN: usize = 8;

/// Word from a full 8-byte block.
#[inline(always)]
#[must_use]
pub fn load_block<W: Word64>(block: &[u8; BLOCK_LEN]) -> W {
  W::from_le_bytes(*block)
}

/// Word from up to 8 little-endian bytes; missing high bytes are zero.
///
/// Bytes past the eighth are ignored.
#[inline]
#[must_use]
pub fn load_le<W: Word64>(bytes: &[u8]) -> W {
  let mut block = [0u8; BLOCK_LEN];
  for (dst, src) in block.iter_mut().zip(bytes) {
    *dst = *src;
  }
  W::from_le_bytes(block)
}

/// 8 little-endian bytes of `word`. Inverse of [`load_block`].
#[inline(always)]
#[must_use]
pub fn store_le<W: Word64>(word: W) -> [u8; BLOCK_LEN] {
  word.to_le_bytes()
}

/// Padded final block: the `tail` (< 8 bytes) zero-extended, with
/// `total_len mod 256` OR-ed into the most significant byte.
#[inline]
#[must_use]
pub fn final_block<W: Word64>(tail: &[u8], total_len: usize) -> W {
  debug_assert!(tail.len() < BLOCK_LEN, "final block tail must be shorter than a block");
  let mut block = [0u8; BLOCK_LEN];
  for (dst, src) in block.iter_mut().take(BLOCK_LEN - 1).zip(tail) {
    *dst = *src;
  }
  let [.., top] = &mut block;
  *top |= total_len as u8;
  W::from_le_bytes(block)
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::{Native, Split16, Split24, Split32};

  fn value<W: Word64>(w: W) -> u64 {
    u64::from_le_bytes(w.to_le_bytes())
  }

  #[test]
  fn load_le_zero_extends() {
    let w: Native = load_le(&[0x01, 0x02, 0x03]);
    assert_eq!(w.get(), 0x0003_0201);
    let empty: Native = load_le(&[]);
    assert_eq!(empty.get(), 0);
  }

  #[test]
  fn load_le_ignores_excess() {
    let w: Native = load_le(&[1, 2, 3, 4, 5, 6, 7, 8, 9, 10]);
    assert_eq!(w.get(), u64::from_le_bytes([1, 2, 3, 4, 5, 6, 7, 8]));
  }

  #[test]
  fn store_inverts_load_block() {
    let block = *b"uespemos";
    let w: Split24 = load_block(&block);
    assert_eq!(store_le(w), block);
    assert_eq!(value(w), 0x736f_6d65_7073_6575);
  }

  #[test]
  fn final_block_injects_length_byte() {
    let w: Native = final_block(&[], 0);
    assert_eq!(w.get(), 0);

    let w: Native = final_block(&[0xaa, 0xbb], 10);
    assert_eq!(w.get(), 0x0a00_0000_0000_bbaa);

    let w: Native = final_block(&[1, 2, 3, 4, 5, 6, 7], 15);
    assert_eq!(w.get(), 0x0f07_0605_0403_0201);
  }

  #[test]
  fn final_block_length_is_mod_256() {
    let w: Native = final_block(&[0x11], 257);
    assert_eq!(w.get(), 0x0100_0000_0000_0011);
    let w: Native = final_block(&[], 256);
    assert_eq!(w.get(), 0);
  }

  #[test]
  fn final_block_distinguishes_trailing_zero() {
    let a: Native = final_block(&[0x42], 1);
    let b: Native = final_block(&[0x42, 0x00], 2);
    assert_ne!(a, b);
  }

  #[test]
  fn final_block_agrees_across_backends() {
    let tail = [0xde, 0xad, 0xbe, 0xef, 0x01];
    let expected = value(final_block::<Native>(&tail, 77));
    assert_eq!(value(final_block::<Split32>(&tail, 77)), expected);
    assert_eq!(value(final_block::<Split24>(&tail, 77)), expected);
    assert_eq!(value(final_block::<Split16>(&tail, 77)), expected);
  }
}
