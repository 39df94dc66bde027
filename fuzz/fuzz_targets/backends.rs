//! Every Word64 backend must agree with native `u64` arithmetic.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use siphash::{Key, OutputMode, kernel_test::verify_siphash_kernels};

#[derive(Arbitrary, Debug)]
struct Input {
  key: [u8; 16],
  long: bool,
  data: Vec<u8>,
}

fuzz_target!(|input: Input| {
  let key = Key::new(input.key);
  let mode = if input.long { OutputMode::Long } else { OutputMode::Short };
  assert_eq!(
    verify_siphash_kernels(&key, &input.data, mode),
    Ok(()),
    "backend mismatch, len={} mode={:?}",
    input.data.len(),
    mode
  );
});
