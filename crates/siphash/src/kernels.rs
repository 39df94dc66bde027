use word64::{Native, Split16, Split24, Split32, Word64};

use crate::{
  compress::{siphash24_64, siphash24_128},
  params::Key,
};

pub(crate) type Hash64Fn = fn(&Key, &[u8]) -> [u8; 8];
pub(crate) type Hash128Fn = fn(&Key, &[u8]) -> [u8; 16];

/// Word64 backend a SipHash kernel is compiled against.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum SipHashKernelId {
  Native = 0,
  Split32 = 1,
  Split24 = 2,
  Split16 = 3,
}

pub const ALL: &[SipHashKernelId] = &[
  SipHashKernelId::Native,
  SipHashKernelId::Split32,
  SipHashKernelId::Split24,
  SipHashKernelId::Split16,
];

impl SipHashKernelId {
  #[inline]
  #[must_use]
  pub const fn as_str(self) -> &'static str {
    match self {
      Self::Native => Native::NAME,
      Self::Split32 => Split32::NAME,
      Self::Split24 => Split24::NAME,
      Self::Split16 => Split16::NAME,
    }
  }

  /// Limb widths in bits, least significant first.
  #[inline]
  #[must_use]
  pub const fn limb_bits(self) -> &'static [u32] {
    match self {
      Self::Native => Native::LIMB_BITS,
      Self::Split32 => Split32::LIMB_BITS,
      Self::Split24 => Split24::LIMB_BITS,
      Self::Split16 => Split16::LIMB_BITS,
    }
  }
}

/// Kernel for a backend name or alias, case-insensitive.
#[must_use]
pub fn id_from_name(name: &str) -> Option<SipHashKernelId> {
  let name = name.trim();
  let is = |s: &str| name.eq_ignore_ascii_case(s);
  if is("native") || is("u64") {
    Some(SipHashKernelId::Native)
  } else if is("split32") || is("u32x2") {
    Some(SipHashKernelId::Split32)
  } else if is("split24") || is("u24x3") {
    Some(SipHashKernelId::Split24)
  } else if is("split16") || is("u16x4") {
    Some(SipHashKernelId::Split16)
  } else {
    None
  }
}

#[must_use]
pub(crate) fn hash64_fn(id: SipHashKernelId) -> Hash64Fn {
  match id {
    SipHashKernelId::Native => siphash24_64::<Native>,
    SipHashKernelId::Split32 => siphash24_64::<Split32>,
    SipHashKernelId::Split24 => siphash24_64::<Split24>,
    SipHashKernelId::Split16 => siphash24_64::<Split16>,
  }
}

#[must_use]
pub(crate) fn hash128_fn(id: SipHashKernelId) -> Hash128Fn {
  match id {
    SipHashKernelId::Native => siphash24_128::<Native>,
    SipHashKernelId::Split32 => siphash24_128::<Split32>,
    SipHashKernelId::Split24 => siphash24_128::<Split24>,
    SipHashKernelId::Split16 => siphash24_128::<Split16>,
  }
}
