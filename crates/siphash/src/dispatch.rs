use crate::{
  config,
  kernels::{Hash64Fn, Hash128Fn, SipHashKernelId, hash64_fn, hash128_fn},
  params::{Digest, Key, OutputMode},
};

#[derive(Clone, Copy)]
struct ActiveDispatch {
  id: SipHashKernelId,
  h64: Hash64Fn,
  h128: Hash128Fn,
}

#[inline]
#[must_use]
fn build() -> ActiveDispatch {
  let id = config::get().effective_kernel;
  ActiveDispatch {
    id,
    h64: hash64_fn(id),
    h128: hash128_fn(id),
  }
}

#[cfg(feature = "std")]
#[inline]
#[must_use]
fn active() -> ActiveDispatch {
  use std::sync::OnceLock;
  static ACTIVE: OnceLock<ActiveDispatch> = OnceLock::new();
  *ACTIVE.get_or_init(build)
}

// Without `std` the configuration is a compile-time constant.
#[cfg(not(feature = "std"))]
#[inline]
#[must_use]
fn active() -> ActiveDispatch {
  build()
}

#[inline]
#[must_use]
pub fn kernel_id() -> SipHashKernelId {
  active().id
}

#[inline]
#[must_use]
pub fn kernel_name() -> &'static str {
  active().id.as_str()
}

#[inline]
#[must_use]
pub fn hash64(key: &Key, data: &[u8]) -> [u8; 8] {
  (active().h64)(key, data)
}

#[inline]
#[must_use]
pub fn hash128(key: &Key, data: &[u8]) -> [u8; 16] {
  (active().h128)(key, data)
}

#[inline]
#[must_use]
pub fn hash(key: &Key, data: &[u8], mode: OutputMode) -> Digest {
  match mode {
    OutputMode::Short => Digest::Short(hash64(key, data)),
    OutputMode::Long => Digest::Long(hash128(key, data)),
  }
}
