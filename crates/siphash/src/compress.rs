//! Init → absorb → finalize over a chosen [`Word64`] backend.

use word64::{Word64, codec};

use crate::{
  params::{D_ROUNDS, Digest, Key, OutputMode, SECOND_WORD_TWEAK},
  round::State,
};

/// Init, absorption of every block and the length-padded final block, then
/// the first finalization.
#[inline(always)]
fn absorb<W: Word64>(key: &Key, data: &[u8], mode: OutputMode) -> State<W> {
  let mut state = State::<W>::init(key, mode);

  let (blocks, tail) = data.as_chunks::<{ codec::BLOCK_LEN }>();
  for block in blocks {
    state = state.compress(codec::load_block(block));
  }
  state = state.compress(codec::final_block(tail, data.len()));

  state.v2 = state.v2.xor(W::from_low_byte(mode.final_tweak()));
  state.rounds(D_ROUNDS)
}

/// 64-bit SipHash-2-4 over backend `W`.
#[must_use]
pub fn siphash24_64<W: Word64>(key: &Key, data: &[u8]) -> [u8; 8] {
  codec::store_le(absorb::<W>(key, data, OutputMode::Short).fold())
}

/// 128-bit SipHash-2-4 over backend `W`.
#[must_use]
pub fn siphash24_128<W: Word64>(key: &Key, data: &[u8]) -> [u8; 16] {
  let mut state = absorb::<W>(key, data, OutputMode::Long);
  let first = codec::store_le(state.fold());

  state.v1 = state.v1.xor(W::from_low_byte(SECOND_WORD_TWEAK));
  state = state.rounds(D_ROUNDS);
  let second = codec::store_le(state.fold());

  concat(first, second)
}

/// SipHash-2-4 of `data` computed with backend `W`.
///
/// Every backend yields identical digests; the type parameter only chooses
/// how 64-bit words are represented.
///
/// ```
/// use siphash::{Key, OutputMode, hash_with_backend, word64::{Native, Split16}};
///
/// let key = Key::new(core::array::from_fn(|i| i as u8));
/// let a = hash_with_backend::<Native>(&key, b"hello", OutputMode::Long);
/// let b = hash_with_backend::<Split16>(&key, b"hello", OutputMode::Long);
/// assert_eq!(a, b);
/// ```
#[inline]
#[must_use]
pub fn hash_with_backend<W: Word64>(key: &Key, data: &[u8], mode: OutputMode) -> Digest {
  match mode {
    OutputMode::Short => Digest::Short(siphash24_64::<W>(key, data)),
    OutputMode::Long => Digest::Long(siphash24_128::<W>(key, data)),
  }
}

#[inline(always)]
const fn concat(a: [u8; 8], b: [u8; 8]) -> [u8; 16] {
  let [a0, a1, a2, a3, a4, a5, a6, a7] = a;
  let [b0, b1, b2, b3, b4, b5, b6, b7] = b;
  [a0, a1, a2, a3, a4, a5, a6, a7, b0, b1, b2, b3, b4, b5, b6, b7]
}
