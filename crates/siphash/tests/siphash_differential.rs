use core::hash::Hasher as _;

use proptest::prelude::*;
use siphash::{
  Key, KeyedHash as _, OutputMode, SipHash24, SipHash24_128, hash_with_backend,
  kernel_test::verify_siphash_kernels,
  word64::{Native, Split16, Split24, Split32},
};
use siphasher::sip128::Hasher128 as _;

fn siphasher24_ref(key: &[u8; 16], data: &[u8]) -> [u8; 8] {
  let mut h = siphasher::sip::SipHasher24::new_with_key(key);
  h.write(data);
  h.finish().to_le_bytes()
}

fn siphasher24_128_ref(key: &[u8; 16], data: &[u8]) -> [u8; 16] {
  let mut h = siphasher::sip128::SipHasher24::new_with_key(key);
  h.write(data);
  let out = h.finish128();
  let mut bytes = [0u8; 16];
  bytes[..8].copy_from_slice(&out.h1.to_le_bytes());
  bytes[8..].copy_from_slice(&out.h2.to_le_bytes());
  bytes
}

proptest! {
  #[test]
  fn siphash24_matches_siphasher(key in any::<[u8; 16]>(), data in proptest::collection::vec(any::<u8>(), 0..4096)) {
    let ours = SipHash24::hash_with_key(&Key::new(key), &data);
    prop_assert_eq!(ours, siphasher24_ref(&key, &data));
  }

  #[test]
  fn siphash24_128_matches_siphasher(key in any::<[u8; 16]>(), data in proptest::collection::vec(any::<u8>(), 0..4096)) {
    let ours = SipHash24_128::hash_with_key(&Key::new(key), &data);
    prop_assert_eq!(ours, siphasher24_128_ref(&key, &data));
  }

  #[test]
  fn limb_backends_match_native(key in any::<[u8; 16]>(), data in proptest::collection::vec(any::<u8>(), 0..512), long in any::<bool>()) {
    let key = Key::new(key);
    let mode = if long { OutputMode::Long } else { OutputMode::Short };
    let expected = hash_with_backend::<Native>(&key, &data, mode);
    prop_assert_eq!(hash_with_backend::<Split32>(&key, &data, mode), expected);
    prop_assert_eq!(hash_with_backend::<Split24>(&key, &data, mode), expected);
    prop_assert_eq!(hash_with_backend::<Split16>(&key, &data, mode), expected);
  }

  #[test]
  fn kernel_harness_agrees(key in any::<[u8; 16]>(), data in proptest::collection::vec(any::<u8>(), 0..256)) {
    let key = Key::new(key);
    prop_assert_eq!(verify_siphash_kernels(&key, &data, OutputMode::Short), Ok(()));
    prop_assert_eq!(verify_siphash_kernels(&key, &data, OutputMode::Long), Ok(()));
  }
}
