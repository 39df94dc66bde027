//! The SipHash state and its ARX round.

use word64::{Word64, codec};

use crate::params::{C_ROUNDS, INIT, Key, OutputMode};

/// Four-word SipHash state.
///
/// Lives for one hash call; every transition returns a new value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct State<W> {
  pub v0: W,
  pub v1: W,
  pub v2: W,
  pub v3: W,
}

impl<W: Word64> State<W> {
  /// Initial state for `key`, including the 128-bit output tweak on v1.
  #[must_use]
  pub fn init(key: &Key, mode: OutputMode) -> Self {
    let (k0, k1) = key.halves();
    let k0: W = codec::load_block(&k0);
    let k1: W = codec::load_block(&k1);
    let [c0, c1, c2, c3] = INIT;

    Self {
      v0: codec::load_block::<W>(&c0).xor(k0),
      v1: codec::load_block::<W>(&c1).xor(k1).xor(W::from_low_byte(mode.init_tweak())),
      v2: codec::load_block::<W>(&c2).xor(k0),
      v3: codec::load_block::<W>(&c3).xor(k1),
    }
  }

  /// `n` applications of [`sip_round`].
  #[inline(always)]
  #[must_use]
  pub fn rounds(self, n: usize) -> Self {
    (0..n).fold(self, |s, _| sip_round(s))
  }

  /// Mix one message word: `v3 ^= m`, `C_ROUNDS` rounds, `v0 ^= m`.
  #[inline(always)]
  #[must_use]
  pub fn compress(self, m: W) -> Self {
    let s = Self {
      v3: self.v3.xor(m),
      ..self
    }
    .rounds(C_ROUNDS);
    Self { v0: s.v0.xor(m), ..s }
  }

  /// `v0 ^ v1 ^ v2 ^ v3`.
  #[inline(always)]
  #[must_use]
  pub fn fold(self) -> W {
    self.v0.xor(self.v1).xor(self.v2).xor(self.v3)
  }
}

/// One SipRound.
///
/// The step order and rotation amounts (13, 32, 16, 21, 17, 32) are the
/// algorithm; do not reorder.
#[inline(always)]
#[must_use]
pub fn sip_round<W: Word64>(s: State<W>) -> State<W> {
  let State { v0, v1, v2, v3 } = s;

  let v0 = v0.wrapping_add(v1);
  let v1 = v1.rotate_left(13).xor(v0);
  let v0 = v0.rotate_left(32);

  let v2 = v2.wrapping_add(v3);
  let v3 = v3.rotate_left(16).xor(v2);

  let v0 = v0.wrapping_add(v3);
  let v3 = v3.rotate_left(21).xor(v0);

  let v2 = v2.wrapping_add(v1);
  let v1 = v1.rotate_left(17).xor(v2);
  let v2 = v2.rotate_left(32);

  State { v0, v1, v2, v3 }
}

#[cfg(test)]
mod tests {
  use word64::{Native, Split16, Split24, Split32};

  use super::*;

  fn native_round(v: [u64; 4]) -> [u64; 4] {
    let [mut v0, mut v1, mut v2, mut v3] = v;
    v0 = v0.wrapping_add(v1);
    v1 = v1.rotate_left(13);
    v1 ^= v0;
    v0 = v0.rotate_left(32);
    v2 = v2.wrapping_add(v3);
    v3 = v3.rotate_left(16);
    v3 ^= v2;
    v0 = v0.wrapping_add(v3);
    v3 = v3.rotate_left(21);
    v3 ^= v0;
    v2 = v2.wrapping_add(v1);
    v1 = v1.rotate_left(17);
    v1 ^= v2;
    v2 = v2.rotate_left(32);
    [v0, v1, v2, v3]
  }

  fn lift<W: Word64>(v: [u64; 4]) -> State<W> {
    let [v0, v1, v2, v3] = v.map(|x| W::from_le_bytes(x.to_le_bytes()));
    State { v0, v1, v2, v3 }
  }

  fn lower<W: Word64>(s: State<W>) -> [u64; 4] {
    [s.v0, s.v1, s.v2, s.v3].map(|w| u64::from_le_bytes(w.to_le_bytes()))
  }

  fn check_round<W: Word64>(input: [u64; 4]) {
    let expected = native_round(input);
    assert_eq!(lower(sip_round(lift::<W>(input))), expected, "{}", W::NAME);
  }

  #[test]
  fn round_matches_u64_reference_on_every_backend() {
    let inputs = [
      [0, 0, 0, 0],
      [u64::MAX; 4],
      [0x736f_6d65_7073_6575, 0x646f_7261_6e64_6f6d, 0x6c79_6765_6e65_7261, 0x7465_6462_7974_6573],
      [1, 2, 3, 4],
      [0x8000_0000_0000_0000, 0xffff_ffff, 0xff_ffff, 0xffff_0000_0000_0000],
    ];
    for input in inputs {
      check_round::<Native>(input);
      check_round::<Split32>(input);
      check_round::<Split24>(input);
      check_round::<Split16>(input);
    }
  }

  #[test]
  fn init_with_zero_key_is_the_constants() {
    let s: State<Native> = State::init(&Key::default(), OutputMode::Short);
    assert_eq!(
      lower(s),
      [0x736f_6d65_7073_6575, 0x646f_7261_6e64_6f6d, 0x6c79_6765_6e65_7261, 0x7465_6462_7974_6573]
    );
  }

  #[test]
  fn long_mode_tweaks_only_v1() {
    let key = Key::new(core::array::from_fn(|i| i as u8));
    let short: State<Split16> = State::init(&key, OutputMode::Short);
    let long: State<Split16> = State::init(&key, OutputMode::Long);
    assert_eq!(short.v0, long.v0);
    assert_eq!(short.v2, long.v2);
    assert_eq!(short.v3, long.v3);
    assert_eq!(lower(short)[1] ^ lower(long)[1], 0xee);
  }

  #[test]
  fn rounds_zero_is_identity() {
    let s: State<Split24> = lift([5, 6, 7, 8]);
    assert_eq!(s.rounds(0), s);
    assert_eq!(s.rounds(2), sip_round(sip_round(s)));
  }
}
