//! Byte-level entry point: arbitrary lengths must either hash or fail cleanly.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input {
  output_len: u8,
  key: Vec<u8>,
  raw: bool,
  data: Vec<u8>,
}

fuzz_target!(|input: Input| {
  let output_len = usize::from(input.output_len);
  let result = siphash24::hash(output_len, &input.data, &input.key, input.raw);

  let valid = (output_len == 8 || output_len == 16) && input.key.len() == 16;
  match result {
    Ok(out) => {
      assert!(valid);
      let expected = if input.raw { output_len } else { output_len * 2 };
      assert_eq!(out.len(), expected);
    }
    Err(err) => {
      assert!(!valid);
      assert!(err.is_output_length() || err.is_key_length());
    }
  }
});
