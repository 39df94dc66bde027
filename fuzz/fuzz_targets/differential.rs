//! Differential fuzzing against the `siphasher` crate.

#![no_main]

use core::hash::Hasher as _;

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use siphash::{Key, KeyedHash as _, SipHash24, SipHash24_128};
use siphasher::sip128::Hasher128 as _;

#[derive(Arbitrary, Debug)]
struct Input {
  key: [u8; 16],
  data: Vec<u8>,
}

fuzz_target!(|input: Input| {
  let key = Key::new(input.key);
  let data = &input.data;

  let ours = SipHash24::hash_with_key(&key, data);
  let mut h = siphasher::sip::SipHasher24::new_with_key(&input.key);
  h.write(data);
  let reference = h.finish().to_le_bytes();
  assert_eq!(ours, reference, "SipHash-2-4 differential mismatch, len={}", data.len());

  let ours = SipHash24_128::hash_with_key(&key, data);
  let mut h = siphasher::sip128::SipHasher24::new_with_key(&input.key);
  h.write(data);
  let out = h.finish128();
  assert_eq!(ours[..8], out.h1.to_le_bytes(), "SipHash-2-4-128 h1 mismatch, len={}", data.len());
  assert_eq!(ours[8..], out.h2.to_le_bytes(), "SipHash-2-4-128 h2 mismatch, len={}", data.len());
});
